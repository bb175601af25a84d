//! Error and Fault definitions.
//!
//! This module defines every failure the crate can report. It provides:
//! 1. **Load Errors:** Reasons a bytecode image could not be read from disk.
//! 2. **Construction Errors:** Reasons a machine refused to bind to an image.
//! 3. **Runtime Faults:** Unrecoverable conditions raised while executing bytecode.
//! 4. **Driver Errors:** Failures of the run orchestration itself.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a file on disk into a [`Program`](crate::sim::loader::Program).
///
/// No variant ever carries a partially-populated program.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path does not resolve to a readable regular file.
    #[error("Failed to read file: {}", .path.display())]
    FileNotFound {
        /// Path that was queried.
        path: PathBuf,
        /// Underlying metadata error, if the query itself failed.
        #[source]
        source: Option<io::Error>,
    },

    /// The file exists but a handle could not be obtained.
    #[error("Failed to open program-file {}", .path.display())]
    OpenFailed {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying open error.
        #[source]
        source: io::Error,
    },

    /// A buffer of the file's size could not be allocated.
    #[error("Failed to allocate RAM for program-file {} ({size} bytes)", .path.display())]
    AllocationFailed {
        /// Path being loaded.
        path: PathBuf,
        /// Requested buffer size in bytes.
        size: u64,
    },

    /// Fewer bytes were read than the file size reported.
    #[error("Failed to wholly read input file (read {actual} of {expected} bytes)")]
    ShortRead {
        /// Size reported by the filesystem.
        expected: u64,
        /// Bytes actually obtained.
        actual: u64,
        /// I/O error that ended the read early, if any.
        #[source]
        source: Option<io::Error>,
    },
}

/// Reasons a machine refuses to bind to a program image.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MachineError {
    /// The image does not fit in machine RAM.
    #[error("program image of {size} bytes exceeds {capacity} bytes of RAM")]
    ImageTooLarge {
        /// Image size in bytes.
        size: usize,
        /// RAM capacity in bytes.
        capacity: usize,
    },

    /// The machine configuration cannot be honoured.
    #[error("invalid machine configuration: {0}")]
    InvalidConfig(String),
}

/// Unrecoverable runtime condition raised by the machine.
///
/// Execution never resumes after a fault.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// The byte at the instruction pointer is not a known opcode.
    #[error("unknown opcode {opcode:#04x} at address {ip:#06x}")]
    UnknownOpcode {
        /// Offending byte.
        opcode: u8,
        /// Address it was fetched from.
        ip: u16,
    },

    /// An instruction named a register that does not exist.
    #[error("register {0} is out of range")]
    RegisterOutOfRange(u8),

    /// An integer operation was applied to a string register.
    #[error("register {0} does not contain an integer")]
    NotAnInteger(u8),

    /// A string operation was applied to an integer register.
    #[error("register {0} does not contain a string")]
    NotAString(u8),

    /// Integer division by zero.
    #[error("attempted to divide by zero")]
    DivideByZero,

    /// A memory operation addressed a byte outside RAM.
    #[error("address {0} is outside of RAM")]
    AddressOutOfRange(i64),

    /// A push or call exceeded the stack depth.
    #[error("stack overflow (depth {0})")]
    StackOverflow(usize),

    /// A pop or return found the stack empty.
    #[error("stack underflow")]
    StackUnderflow,
}

/// Failure of a single driver run.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The machine could not be constructed over the program.
    #[error("Failed to create virtual machine instance.")]
    Construction(#[from] MachineError),

    /// The register dump could not be written.
    #[error("failed to write register dump")]
    Dump(#[source] io::Error),
}

/// Any failure between reading the file and finishing the run.
#[derive(Debug, Error)]
pub enum Error {
    /// Loading the program failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Building or driving the machine failed.
    #[error(transparent)]
    Driver(#[from] DriverError),
}
