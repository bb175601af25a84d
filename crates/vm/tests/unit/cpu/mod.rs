//! Reference machine tests.


/// Register dump rendering.
pub mod dump;




/// Budgeted runs.
pub mod run_budget;
