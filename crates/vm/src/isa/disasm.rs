//! Opcode names for instruction tracing.

use super::opcodes as op;

/// Returns the mnemonic for an opcode byte, or `None` if it is not part of the ISA.
pub const fn mnemonic(opcode: u8) -> Option<&'static str> {
    let name = match opcode {
        op::EXIT => "EXIT",
        op::INT_STORE => "INT_STORE",
        op::INT_PRINT => "INT_PRINT",
        op::INT_TOSTRING => "INT_TOSTRING",
        op::JUMP_TO => "JUMP_TO",
        op::JUMP_Z => "JUMP_Z",
        op::JUMP_NZ => "JUMP_NZ",
        op::XOR => "XOR",
        op::ADD => "ADD",
        op::SUB => "SUB",
        op::MUL => "MUL",
        op::DIV => "DIV",
        op::INC => "INC",
        op::DEC => "DEC",
        op::AND => "AND",
        op::OR => "OR",
        op::STRING_STORE => "STRING_STORE",
        op::STRING_PRINT => "STRING_PRINT",
        op::STRING_CONCAT => "STRING_CONCAT",
        op::STRING_TOINT => "STRING_TOINT",
        op::CMP_REG => "CMP_REG",
        op::CMP_IMMEDIATE => "CMP_IMMEDIATE",
        op::CMP_STRING => "CMP_STRING",
        op::IS_STRING => "IS_STRING",
        op::IS_INTEGER => "IS_INTEGER",
        op::NOP => "NOP",
        op::REG_STORE => "REG_STORE",
        op::PEEK => "PEEK",
        op::POKE => "POKE",
        op::MEMCPY => "MEMCPY",
        op::PUSH => "PUSH",
        op::POP => "POP",
        op::RET => "RET",
        op::CALL => "CALL",
        _ => return None,
    };
    Some(name)
}
