//! # Budgeted Run Tests
//!
//! A budget pauses the machine; a later run picks up where it stopped.

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;
use svm_core::sim::RunOutcome;

#[test]
fn test_infinite_loop_stops_at_budget() {
    let mut ctx = TestContext::new(ProgramBuilder::new().jump(0).build());
    assert_eq!(ctx.run(5), RunOutcome::BudgetExhausted);
    assert_eq!(ctx.cpu.retired, 5);
}

#[test]
fn test_exhausted_run_resumes() {
    let mut builder = ProgramBuilder::new();
    for _ in 0..10 {
        builder = builder.nop();
    }
    let mut ctx = TestContext::new(builder.exit().build());

    assert_eq!(ctx.run(3), RunOutcome::BudgetExhausted);
    assert_eq!(ctx.cpu.retired, 3);
    assert_eq!(ctx.cpu.ip, 3);

    assert_eq!(ctx.run(0), RunOutcome::Halted);
    assert_eq!(ctx.cpu.retired, 11);
}

#[test]
fn test_budget_equal_to_program_length_halts() {
    let mut ctx = TestContext::new(ProgramBuilder::new().nop().nop().exit().build());
    assert_eq!(ctx.run(3), RunOutcome::Halted);
}

#[test]
fn test_budget_one_short_of_halt_is_exhausted() {
    let mut ctx = TestContext::new(ProgramBuilder::new().nop().nop().exit().build());
    assert_eq!(ctx.run(2), RunOutcome::BudgetExhausted);
    assert!(!ctx.cpu.is_halted());
}

#[test]
fn test_empty_program_halts_on_zeroed_ram() {
    let mut ctx = TestContext::new(Vec::new());
    assert_eq!(ctx.run(0), RunOutcome::Halted);
    assert_eq!(ctx.cpu.retired, 1);
}

#[test]
fn test_halted_machine_stays_halted() {
    let mut ctx = TestContext::new(ProgramBuilder::new().int_print(0).exit().build());
    ctx.run_to_halt();
    assert_eq!(ctx.run(0), RunOutcome::Halted);
    assert_eq!(ctx.output(), "0");
    assert_eq!(ctx.cpu.retired, 2);
}

#[test]
fn test_output_before_budget_is_kept() {
    let prelude = ProgramBuilder::new().int_store(0, 7);
    let top = prelude.here();
    let mut ctx = TestContext::new(prelude.int_print(0).jump(top).build());
    assert_eq!(ctx.run(5), RunOutcome::BudgetExhausted);
    assert_eq!(ctx.output(), "77");
}
