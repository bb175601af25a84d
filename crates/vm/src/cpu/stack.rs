//! Call/value stack.
//!
//! Holds integers pushed by `PUSH` and return addresses pushed by `CALL`.

use crate::common::error::Fault;

/// Bounded LIFO stack of integers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack {
    entries: Vec<i32>,
    depth: usize,
}

impl Stack {
    /// Creates an empty stack that holds at most `depth` entries.
    pub fn new(depth: usize) -> Self {
        Self {
            entries: Vec::with_capacity(depth.min(256)),
            depth,
        }
    }

    /// Pushes a value, failing with [`Fault::StackOverflow`] when full.
    pub fn push(&mut self, val: i32) -> Result<(), Fault> {
        if self.entries.len() >= self.depth {
            return Err(Fault::StackOverflow(self.depth));
        }
        self.entries.push(val);
        Ok(())
    }

    /// Pops a value, failing with [`Fault::StackUnderflow`] when empty.
    pub fn pop(&mut self) -> Result<i32, Fault> {
        self.entries.pop().ok_or(Fault::StackUnderflow)
    }

    /// Number of entries currently on the stack.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing has been pushed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
