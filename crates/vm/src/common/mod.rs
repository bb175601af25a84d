//! Common types and constants shared across the crate.
//!
//! This module provides the building blocks used by the loader, the driver and
//! the machine. It includes:
//! 1. **Constants:** Register count, RAM limits, environment variable names.
//! 2. **Error Handling:** Load errors, construction errors, runtime faults.
//! 3. **Parsing:** Permissive integer parsing shared by the CLI and the ISA.
//! 4. **Register Management:** The typed register file.

/// Machine-wide constants.
pub mod constants;

/// Error types and runtime faults.
pub mod error;

/// Permissive (`atoi`-style) integer parsing.
pub mod num;

/// Register file implementation.
pub mod reg;

pub use error::{DriverError, Error, Fault, LoadError, MachineError};
pub use reg::{RegisterFile, Value};
