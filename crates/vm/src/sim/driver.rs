//! Execution Driver.
//!
//! The driver takes ownership of a loaded [`Program`] and performs one run of a
//! machine over it:
//! 1. **Construct:** Builds the machine; a refusal is reported, not a crash.
//! 2. **Bridge:** Installs the fatal-error handler before any instruction executes.
//! 3. **Run:** Executes within the instruction budget.
//! 4. **Dump:** Optionally writes the register state after a non-fatal run.
//! 5. **Teardown:** Drops the machine, then the program, on every outcome.
//!
//! A fatal fault does not exit the process from inside the machine. It comes back
//! as [`RunOutcome::Fatal`] so teardown stays uniform and the caller decides the
//! exit status.

use std::borrow::Borrow;
use std::io::Write;

use tracing::{debug, info};

use super::budget::InstructionBudget;
use super::loader::Program;
use super::machine::{ErrorHandler, Machine, RunOutcome};
use crate::common::constants::FATAL_ERROR_PREFIX;
use crate::common::error::{DriverError, MachineError};

/// Options for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Driver {
    budget: InstructionBudget,
    dump_registers: bool,
}

impl Driver {
    /// Creates a driver that runs within `budget` and does not dump registers.
    pub const fn new(budget: InstructionBudget) -> Self {
        Self {
            budget,
            dump_registers: false,
        }
    }

    /// Enables or disables the post-run register dump.
    #[must_use]
    pub const fn with_register_dump(mut self, enabled: bool) -> Self {
        self.dump_registers = enabled;
        self
    }

    /// Instruction budget applied to each run.
    pub const fn budget(&self) -> InstructionBudget {
        self.budget
    }

    /// Runs one machine over `program`.
    ///
    /// # Arguments
    ///
    /// * `program` - The loaded image, or a value that owns one; released after the
    ///   machine is destroyed.
    /// * `build` - Constructs the machine over the image.
    /// * `error_handler` - Installed on the machine before execution starts.
    /// * `out` - Receives the register dump, if enabled.
    ///
    /// # Returns
    ///
    /// The [`RunOutcome`], [`DriverError::Construction`] if `build` refused the
    /// image, or [`DriverError::Dump`] if the dump could not be written. Teardown
    /// has happened by the time this returns, whatever the result.
    pub fn run<P, M, F, W>(
        &self,
        program: P,
        build: F,
        error_handler: ErrorHandler,
        out: &mut W,
    ) -> Result<RunOutcome, DriverError>
    where
        P: Borrow<Program>,
        M: Machine,
        F: FnOnce(&Program) -> Result<M, MachineError>,
        W: Write + ?Sized,
    {
        debug!(bytes = program.borrow().len(), "state: loaded");

        let mut machine = build(program.borrow())?;
        debug!("state: machine built");

        machine.set_error_handler(error_handler);

        debug!(budget = %self.budget, "state: running");
        let outcome = machine.run(self.budget);
        info!(%outcome, "run finished");

        let dumped = if self.dump_registers && !outcome.is_fatal() {
            out.write_all(machine.dump_state().as_bytes())
                .and_then(|()| out.flush())
                .map_err(DriverError::Dump)
        } else {
            Ok(())
        };

        drop(machine);
        debug!("machine destroyed");
        drop(program);
        debug!("program released");

        dumped.map(|()| outcome)
    }
}

/// Error handler that reports a fault on stderr.
///
/// The message is prefixed with `ERROR running script - `. Exiting is left to
/// the caller once the run has been torn down.
pub fn fatal_reporter() -> ErrorHandler {
    Box::new(|fault| eprintln!("{FATAL_ERROR_PREFIX}{fault}"))
}
