//! # Opcode Table Tests

use rstest::rstest;
use svm_core::isa::disasm::mnemonic;
use svm_core::isa::opcodes as op;

#[rstest]
#[case(op::EXIT, "EXIT")]
#[case(op::INT_STORE, "INT_STORE")]
#[case(op::STRING_TOINT, "STRING_TOINT")]
#[case(op::MEMCPY, "MEMCPY")]
#[case(op::CALL, "CALL")]
fn test_known_opcodes_have_mnemonics(#[case] opcode: u8, #[case] name: &str) {
    assert_eq!(mnemonic(opcode), Some(name));
}

#[rstest]
#[case(0x33)]
#[case(0x45)]
#[case(0xFF)]
fn test_unassigned_bytes_have_no_mnemonic(#[case] opcode: u8) {
    assert_eq!(mnemonic(opcode), None);
}

#[test]
fn test_mnemonic_count_matches_isa() {
    let known = (0..=u8::MAX).filter(|b| mnemonic(*b).is_some()).count();
    assert_eq!(known, 34);
}
