//! Bytecode loader, execution driver and reference register machine.
//!
//! This crate implements the shell around a small bytecode virtual machine:
//! 1. **Loader:** Reads a bytecode image from disk into an exact-length buffer.
//! 2. **Driver:** Builds a machine over the image, runs it within an instruction
//!    budget, optionally dumps registers, and tears everything down on every outcome.
//! 3. **Machine:** A ten-register machine with integer and string registers, 64 KiB
//!    of RAM and an integer stack.
//! 4. **Configuration:** Machine dimensions and run toggles.

/// Common types and constants (registers, errors, faults, parsing).
pub mod common;
/// Run and machine configuration.
pub mod config;
/// Reference machine (registers, RAM, stack, execution).
pub mod cpu;
/// Opcode definitions.
pub mod isa;
/// Loader, instruction budget, machine boundary and driver.
pub mod sim;

/// Root configuration type; use `Config::default()` or `Config::from_env()`.
pub use crate::config::Config;
/// The reference machine.
pub use crate::cpu::Cpu;
/// Top-level error type.
pub use crate::common::error::Error;
