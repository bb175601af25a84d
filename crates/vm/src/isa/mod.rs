//! Instruction Set Definitions.
//!
//! Contains the opcode byte values and the mnemonic table used for tracing.
//! Execution of each opcode lives in [`crate::cpu::execution`].

/// Opcode names for instruction tracing.
pub mod disasm;

/// Opcode byte values.
pub mod opcodes;
