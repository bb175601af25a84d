//! Scripted machine and program owner that record what the driver does to them.

use std::borrow::Borrow;
use std::cell::RefCell;
use std::rc::Rc;

use svm_core::common::Fault;
use svm_core::sim::{ErrorHandler, InstructionBudget, Machine, Program, RunOutcome};

/// Something the driver did to a [`ScriptedMachine`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Built(usize),
    HandlerInstalled,
    Run(InstructionBudget),
    Dumped,
    Destroyed,
    ProgramReleased,
}

/// Shared, ordered record of events.
pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Machine that returns a fixed outcome and records every call.
///
/// A `Fatal` outcome is reported through the installed handler first, the way
/// a real machine would.
pub struct ScriptedMachine {
    log: EventLog,
    outcome: RunOutcome,
    handler: Option<ErrorHandler>,
}

pub const DUMP_TEXT: &str = "scripted register dump\n";

impl ScriptedMachine {
    pub fn new(log: &EventLog, image_len: usize, outcome: RunOutcome) -> Self {
        log.borrow_mut().push(Event::Built(image_len));
        Self {
            log: Rc::clone(log),
            outcome,
            handler: None,
        }
    }
}

impl Machine for ScriptedMachine {
    fn set_error_handler(&mut self, handler: ErrorHandler) {
        self.log.borrow_mut().push(Event::HandlerInstalled);
        self.handler = Some(handler);
    }

    fn run(&mut self, budget: InstructionBudget) -> RunOutcome {
        self.log.borrow_mut().push(Event::Run(budget));
        if let RunOutcome::Fatal(fault) = &self.outcome {
            if let Some(handler) = self.handler.as_mut() {
                handler(fault);
            }
        }
        self.outcome.clone()
    }

    fn dump_state(&self) -> String {
        self.log.borrow_mut().push(Event::Dumped);
        DUMP_TEXT.to_string()
    }
}

impl Drop for ScriptedMachine {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Event::Destroyed);
    }
}

/// Owns a [`Program`] and records when it is dropped.
pub struct TrackedProgram {
    program: Program,
    log: EventLog,
}

impl TrackedProgram {
    pub fn new(log: &EventLog, bytes: Vec<u8>) -> Self {
        Self {
            program: Program::from_bytes(bytes),
            log: Rc::clone(log),
        }
    }
}

impl Borrow<Program> for TrackedProgram {
    fn borrow(&self) -> &Program {
        &self.program
    }
}

impl Drop for TrackedProgram {
    fn drop(&mut self) {
        self.log.borrow_mut().push(Event::ProgramReleased);
    }
}

/// Error handler that records every fault it hears about.
pub fn recording_handler() -> (ErrorHandler, Rc<RefCell<Vec<Fault>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let handler: ErrorHandler = Box::new(move |fault: &Fault| sink.borrow_mut().push(fault.clone()));
    (handler, seen)
}
