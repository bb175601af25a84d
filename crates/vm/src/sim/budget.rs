//! Instruction budget.
//!
//! The budget caps how many instructions one run may execute. Zero is the
//! sentinel for "run until the machine halts on its own".

use std::fmt;
use std::num::NonZeroU64;

use crate::common::num::parse_int_prefix;

/// Maximum number of instructions a single run may execute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InstructionBudget {
    /// Run until the machine halts or faults.
    #[default]
    Unbounded,
    /// Return control after at most this many instructions.
    Limited(NonZeroU64),
}

impl InstructionBudget {
    /// Parses a command-line budget permissively.
    ///
    /// Follows `atoi`: the leading integer is used, text without one is 0.
    /// Zero and negative values mean [`InstructionBudget::Unbounded`].
    ///
    /// # Examples
    ///
    /// ```
    /// use svm_core::sim::InstructionBudget;
    ///
    /// assert_eq!(InstructionBudget::parse("100").limit(), Some(100));
    /// assert_eq!(InstructionBudget::parse("many"), InstructionBudget::Unbounded);
    /// assert_eq!(InstructionBudget::parse("-3"), InstructionBudget::Unbounded);
    /// ```
    pub fn parse(text: &str) -> Self {
        u64::try_from(parse_int_prefix(text)).map_or(Self::Unbounded, Self::from)
    }

    /// Returns the limit, or `None` when unbounded.
    pub const fn limit(self) -> Option<u64> {
        match self {
            Self::Unbounded => None,
            Self::Limited(n) => Some(n.get()),
        }
    }

    /// `true` once `executed` instructions use up the budget.
    pub const fn is_exhausted(self, executed: u64) -> bool {
        match self {
            Self::Unbounded => false,
            Self::Limited(n) => executed >= n.get(),
        }
    }
}

impl From<u64> for InstructionBudget {
    fn from(count: u64) -> Self {
        NonZeroU64::new(count).map_or(Self::Unbounded, Self::Limited)
    }
}

impl fmt::Display for InstructionBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => f.write_str("unbounded"),
            Self::Limited(n) => write!(f, "{n} instructions"),
        }
    }
}
