//! Machine boundary consumed by the driver.
//!
//! The driver never looks inside the machine. It needs exactly these operations:
//! 1. **Error Reporting:** Install the handler that hears about a fatal fault.
//! 2. **Execution:** Run for a bounded or unbounded number of instructions.
//! 3. **Diagnostics:** Render the register state.
//!
//! Construction is a closure handed to the driver; destruction is `Drop`.

use std::fmt;

use super::budget::InstructionBudget;
use crate::common::error::Fault;

/// Callback told about a fatal fault. Invoked at most once per machine.
pub type ErrorHandler = Box<dyn FnMut(&Fault)>;

/// How a call to [`Machine::run`] ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The machine executed its halt instruction.
    Halted,
    /// The instruction budget ran out before the machine halted.
    BudgetExhausted,
    /// An unrecoverable fault stopped execution; the machine will not resume.
    Fatal(Fault),
}

impl RunOutcome {
    /// `true` for [`RunOutcome::Fatal`].
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal(_))
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Halted => f.write_str("halted"),
            Self::BudgetExhausted => f.write_str("instruction budget exhausted"),
            Self::Fatal(fault) => write!(f, "fatal: {fault}"),
        }
    }
}

/// A bytecode machine bound to one program image.
pub trait Machine {
    /// Installs the fatal-error handler, replacing any previous one.
    fn set_error_handler(&mut self, handler: ErrorHandler);

    /// Executes instructions until the machine halts, faults, or uses up `budget`.
    ///
    /// With [`InstructionBudget::Limited`] the call returns after at most that many
    /// instructions. With [`InstructionBudget::Unbounded`] it returns only when the
    /// program halts or faults.
    fn run(&mut self, budget: InstructionBudget) -> RunOutcome;

    /// Renders the register state for the diagnostic dump.
    fn dump_state(&self) -> String;
}
