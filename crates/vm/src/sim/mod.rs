//! Program loading and run orchestration.
//!
//! Provides the loader that reads a bytecode image from disk, the instruction
//! budget, the machine boundary, and the driver that ties them together.

/// Instruction budget parsing and accounting.
pub mod budget;

/// Run orchestration and lifecycle teardown.
pub mod driver;

/// Bytecode file loader.
pub mod loader;

/// Boundary between the driver and a machine implementation.
pub mod machine;

use std::io;
use std::path::Path;

pub use budget::InstructionBudget;
pub use driver::{Driver, fatal_reporter};
pub use loader::{Program, load_program};
pub use machine::{ErrorHandler, Machine, RunOutcome};

use crate::common::error::Error;
use crate::config::Config;
use crate::cpu::Cpu;

/// Loads `path` and runs it on a [`Cpu`] built from `config`.
///
/// Faults are reported on stderr by [`fatal_reporter`]; the register dump, when
/// `config.general.dump_registers` is set, goes to stdout.
///
/// # Returns
///
/// The [`RunOutcome`] of a run that got as far as executing, or the load or
/// construction [`Error`] that stopped it first.
pub fn run_file(
    path: impl AsRef<Path>,
    config: &Config,
    budget: InstructionBudget,
) -> Result<RunOutcome, Error> {
    let program = load_program(path)?;
    let driver = Driver::new(budget).with_register_dump(config.general.dump_registers);
    let mut stdout = io::stdout();
    let outcome = driver.run(
        program,
        |program| Cpu::new(program, config),
        fatal_reporter(),
        &mut stdout,
    )?;
    Ok(outcome)
}
