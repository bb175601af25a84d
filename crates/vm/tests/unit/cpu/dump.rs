//! # Register Dump Tests

use pretty_assertions::assert_eq;

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;
use svm_core::sim::Machine;

#[test]
fn test_dump_lists_flags_counters_and_every_register() {
    let bytes = ProgramBuilder::new()
        .int_store(0, 42)
        .string_store(1, "hi")
        .exit()
        .build();
    let mut ctx = TestContext::new(bytes);
    ctx.run_to_halt();

    let expected = "\
Register Dump [IP: 0x000b]
  Z-FLAG: false
  Instructions: 3
  Stack depth: 0
  Register 00: 42 [0x002a]
  Register 01: \"hi\"
  Register 02: 0 [0x0000]
  Register 03: 0 [0x0000]
  Register 04: 0 [0x0000]
  Register 05: 0 [0x0000]
  Register 06: 0 [0x0000]
  Register 07: 0 [0x0000]
  Register 08: 0 [0x0000]
  Register 09: 0 [0x0000]
";
    assert_eq!(ctx.cpu.dump_state(), expected);
}

#[test]
fn test_dump_reflects_zero_flag_and_stack() {
    let bytes = ProgramBuilder::new()
        .int_store(2, 7)
        .push(2)
        .cmp_immediate(2, 7)
        .exit()
        .build();
    let mut ctx = TestContext::new(bytes);
    ctx.run_to_halt();

    let dump = ctx.cpu.dump_state();
    assert!(dump.contains("  Z-FLAG: true\n"));
    assert!(dump.contains("  Stack depth: 1\n"));
    assert!(dump.contains("  Register 02: 7 [0x0007]\n"));
}

#[test]
fn test_dump_does_not_write_to_the_console() {
    let mut ctx = TestContext::new(ProgramBuilder::new().exit().build());
    ctx.run_to_halt();
    let _dump = ctx.cpu.dump_state();
    assert_eq!(ctx.output(), "");
}
