//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the crate. It includes:
//! 1. **Register Constants:** Size of the register file.
//! 2. **Memory Constants:** RAM capacity and the address the image is loaded at.
//! 3. **Stack Constants:** Default depth of the call/value stack.

/// Number of general-purpose registers.
pub const REGISTER_COUNT: usize = 10;

/// Largest RAM the machine can address (64 KiB, 16-bit addresses).
pub const MAX_RAM_SIZE: usize = 0x1_0000;

/// Default RAM size in bytes.
pub const DEFAULT_RAM_SIZE: usize = MAX_RAM_SIZE;

/// Address the program image is copied to, and where execution starts.
pub const LOAD_ADDRESS: u16 = 0;

/// Default number of entries on the call/value stack.
pub const DEFAULT_STACK_DEPTH: usize = 1024;

/// Environment variable whose presence enables the post-run register dump.
pub const DEBUG_ENV_VAR: &str = "DEBUG";

/// Prefix written in front of every fatal runtime error message.
pub const FATAL_ERROR_PREFIX: &str = "ERROR running script - ";
