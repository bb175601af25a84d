//! Reference Machine.
//!
//! This module defines `Cpu`, the register machine the CLI runs bytecode on. It holds:
//! 1. **Registers:** Ten typed registers and the zero flag.
//! 2. **Memory:** Flat RAM holding a copy of the program image.
//! 3. **Stack:** Bounded integer stack for `PUSH`/`POP`/`CALL`/`RET`.
//! 4. **I/O:** A console sink for the print opcodes.
//!
//! The image is copied into RAM at construction, so the machine never reads the
//! caller's buffer after `Cpu::new` returns.

/// Instruction fetch, decode and execute.
pub mod execution;

/// Machine RAM.
pub mod memory;

/// Call/value stack.
pub mod stack;

use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use crate::common::constants::LOAD_ADDRESS;
use crate::common::error::{Fault, MachineError};
use crate::common::reg::RegisterFile;
use crate::config::Config;
use crate::sim::budget::InstructionBudget;
use crate::sim::loader::Program;
use crate::sim::machine::{ErrorHandler, Machine, RunOutcome};

pub use memory::Memory;
pub use stack::Stack;

/// Register machine state.
pub struct Cpu {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Instruction pointer.
    pub ip: u16,
    /// Zero flag, set by arithmetic and comparisons.
    pub zero_flag: bool,
    /// RAM holding the program image.
    pub memory: Memory,
    /// Call/value stack.
    pub stack: Stack,
    /// Instructions executed to completion since construction.
    pub retired: u64,
    /// Emit a trace event per instruction.
    pub trace: bool,
    halted: bool,
    fault: Option<Fault>,
    console: Box<dyn Write>,
    error_handler: Option<ErrorHandler>,
}

impl Cpu {
    /// Builds a machine over `program`.
    ///
    /// # Arguments
    ///
    /// * `program` - Image copied into RAM at the load address.
    /// * `config` - Machine dimensions and tracing flag.
    ///
    /// # Returns
    ///
    /// The machine with IP at the load address, or a [`MachineError`] when the
    /// configuration is invalid or the image does not fit in RAM.
    pub fn new(program: &Program, config: &Config) -> Result<Self, MachineError> {
        config.machine.validate()?;

        let mut memory = Memory::new(config.machine.ram_size)?;
        memory.load_image(program.as_bytes())?;
        debug!(
            image = program.len(),
            ram = memory.len(),
            stack = config.machine.stack_depth,
            "cpu constructed"
        );

        Ok(Self {
            regs: RegisterFile::new(),
            ip: LOAD_ADDRESS,
            zero_flag: false,
            memory,
            stack: Stack::new(config.machine.stack_depth),
            retired: 0,
            trace: config.general.trace_instructions,
            halted: false,
            fault: None,
            console: Box::new(io::stdout()),
            error_handler: None,
        })
    }

    /// Replaces the console the print opcodes write to (stdout by default).
    #[must_use]
    pub fn with_console(mut self, console: Box<dyn Write>) -> Self {
        self.console = console;
        self
    }

    /// `true` once `EXIT` has executed.
    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    /// The fault that stopped the machine, if any.
    pub const fn fault(&self) -> Option<&Fault> {
        self.fault.as_ref()
    }

    /// Runs until halt, fault, or budget exhaustion.
    ///
    /// A fault is passed to the installed error handler once, remembered, and
    /// returned; later calls return the same fault without executing anything.
    pub fn run_bounded(&mut self, budget: InstructionBudget) -> RunOutcome {
        if let Some(fault) = &self.fault {
            return RunOutcome::Fatal(fault.clone());
        }

        let mut executed: u64 = 0;
        while !self.halted {
            if budget.is_exhausted(executed) {
                debug!(executed, ip = self.ip, "instruction budget exhausted");
                return RunOutcome::BudgetExhausted;
            }
            if let Err(fault) = self.step() {
                if let Some(handler) = self.error_handler.as_mut() {
                    handler(&fault);
                }
                self.fault = Some(fault.clone());
                return RunOutcome::Fatal(fault);
            }
            executed += 1;
        }
        RunOutcome::Halted
    }

    pub(crate) fn print(&mut self, text: &str) {
        // Console failures (e.g. a closed pipe) must not stop the program.
        let _ = self
            .console
            .write_all(text.as_bytes())
            .and_then(|()| self.console.flush());
    }
}

impl Machine for Cpu {
    fn set_error_handler(&mut self, handler: ErrorHandler) {
        self.error_handler = Some(handler);
    }

    fn run(&mut self, budget: InstructionBudget) -> RunOutcome {
        self.run_bounded(budget)
    }

    fn dump_state(&self) -> String {
        StateDump(self).to_string()
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("regs", &self.regs)
            .field("ip", &self.ip)
            .field("zero_flag", &self.zero_flag)
            .field("stack_len", &self.stack.len())
            .field("retired", &self.retired)
            .field("halted", &self.halted)
            .field("fault", &self.fault)
            .finish_non_exhaustive()
    }
}

/// Register dump rendered by [`Machine::dump_state`].
struct StateDump<'a>(&'a Cpu);

impl fmt::Display for StateDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cpu = self.0;
        writeln!(f, "Register Dump [IP: {:#06x}]", cpu.ip)?;
        writeln!(f, "  Z-FLAG: {}", cpu.zero_flag)?;
        writeln!(f, "  Instructions: {}", cpu.retired)?;
        writeln!(f, "  Stack depth: {}", cpu.stack.len())?;
        for (idx, val) in cpu.regs.iter() {
            writeln!(f, "  Register {idx:02}: {val}")?;
        }
        Ok(())
    }
}
