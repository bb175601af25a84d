//! Configuration for the machine and the run driver.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline machine dimensions (RAM size, stack depth).
//! 2. **Structures:** Hierarchical config for general run options and the machine.
//! 3. **Environment:** The `DEBUG` toggle that enables the post-run register dump.
//!
//! Library users can deserialize a `Config` from JSON; the CLI uses `Config::from_env()`.

use std::env;

use serde::Deserialize;

use crate::common::constants::{DEBUG_ENV_VAR, MAX_RAM_SIZE};
use crate::common::error::MachineError;

/// Default configuration constants.
mod defaults {
    use crate::common::constants;

    /// RAM size in bytes (64 KiB).
    pub const RAM_SIZE: usize = constants::DEFAULT_RAM_SIZE;

    /// Entries on the call/value stack.
    pub const STACK_DEPTH: usize = constants::DEFAULT_STACK_DEPTH;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use svm_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true },
///     "machine": { "stack_depth": 64 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert!(!config.general.dump_registers);
/// assert_eq!(config.machine.stack_depth, 64);
/// assert_eq!(config.machine.ram_size, 0x1_0000);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Run-level options.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Machine dimensions.
    #[serde(default)]
    pub machine: MachineConfig,
}

impl Config {
    /// Returns the default configuration with the environment toggles applied.
    ///
    /// `general.dump_registers` is set when the `DEBUG` variable is present,
    /// whatever its value (including empty).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.general.dump_registers = env::var_os(DEBUG_ENV_VAR).is_some();
        config
    }
}

/// General run settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Write a register dump to stdout after a run that did not fault.
    #[serde(default)]
    pub dump_registers: bool,

    /// Emit a `trace`-level event for every executed instruction.
    #[serde(default)]
    pub trace_instructions: bool,
}

/// Machine dimensions.
#[derive(Debug, Clone, Deserialize)]
pub struct MachineConfig {
    /// RAM size in bytes; at most 64 KiB.
    #[serde(default = "MachineConfig::default_ram_size")]
    pub ram_size: usize,

    /// Maximum number of entries on the call/value stack.
    #[serde(default = "MachineConfig::default_stack_depth")]
    pub stack_depth: usize,
}

impl MachineConfig {
    const fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }

    const fn default_stack_depth() -> usize {
        defaults::STACK_DEPTH
    }

    /// Checks that the dimensions can be honoured by the machine.
    ///
    /// # Returns
    ///
    /// `Ok(())`, or [`MachineError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<(), MachineError> {
        if self.ram_size == 0 || self.ram_size > MAX_RAM_SIZE {
            return Err(MachineError::InvalidConfig(format!(
                "ram_size must be between 1 and {MAX_RAM_SIZE}, got {}",
                self.ram_size
            )));
        }
        if self.stack_depth == 0 {
            return Err(MachineError::InvalidConfig(
                "stack_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            ram_size: defaults::RAM_SIZE,
            stack_depth: defaults::STACK_DEPTH,
        }
    }
}
