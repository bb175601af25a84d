//! Register File.
//!
//! This module provides the `RegisterFile` struct holding the machine's general-purpose
//! registers. It provides:
//! 1. **Typed Storage:** Every register holds either an integer or a string.
//! 2. **Checked Access:** Out-of-range indices and type mismatches become [`Fault`]s.
//! 3. **Observability:** Rendering of the register state for the diagnostic dump.

use std::fmt;

use super::constants::REGISTER_COUNT;
use super::error::Fault;

/// Contents of a single register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// Signed 32-bit integer.
    Int(i32),
    /// Byte string decoded as (lossy) UTF-8.
    Str(String),
}

impl Default for Value {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v} [{:#06x}]", *v as u16),
            Self::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

/// General-purpose register file.
///
/// Contains [`REGISTER_COUNT`] registers, all initialised to `Int(0)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [Value; REGISTER_COUNT],
}

impl RegisterFile {
    /// Creates a new register file with all registers set to integer zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index as encoded in the instruction stream.
    ///
    /// # Returns
    ///
    /// A reference to the register contents, or [`Fault::RegisterOutOfRange`].
    pub fn get(&self, idx: u8) -> Result<&Value, Fault> {
        self.regs
            .get(usize::from(idx))
            .ok_or(Fault::RegisterOutOfRange(idx))
    }

    /// Writes a register.
    pub fn set(&mut self, idx: u8, val: Value) -> Result<(), Fault> {
        let slot = self
            .regs
            .get_mut(usize::from(idx))
            .ok_or(Fault::RegisterOutOfRange(idx))?;
        *slot = val;
        Ok(())
    }

    /// Reads a register that must hold an integer.
    pub fn int(&self, idx: u8) -> Result<i32, Fault> {
        match self.get(idx)? {
            Value::Int(v) => Ok(*v),
            Value::Str(_) => Err(Fault::NotAnInteger(idx)),
        }
    }

    /// Reads a register that must hold a string.
    pub fn string(&self, idx: u8) -> Result<&str, Fault> {
        match self.get(idx)? {
            Value::Str(s) => Ok(s),
            Value::Int(_) => Err(Fault::NotAString(idx)),
        }
    }

    /// Iterates over `(index, value)` pairs in register order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Value)> {
        self.regs.iter().enumerate()
    }
}
