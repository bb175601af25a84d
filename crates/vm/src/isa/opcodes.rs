//! Opcode byte values.
//!
//! Each instruction starts with one of these bytes; operands follow inline.
//! Register operands are one byte, addresses and immediates are 16-bit
//! little-endian (`lo`, `hi`).

/// Halt the machine.
pub const EXIT: u8 = 0x00;
/// `INT_STORE reg lo hi`: store an immediate integer.
pub const INT_STORE: u8 = 0x01;
/// `INT_PRINT reg`: print an integer register.
pub const INT_PRINT: u8 = 0x02;
/// `INT_TOSTRING reg`: convert an integer register to its decimal string.
pub const INT_TOSTRING: u8 = 0x03;

/// `JUMP_TO lo hi`: unconditional jump.
pub const JUMP_TO: u8 = 0x10;
/// `JUMP_Z lo hi`: jump when the zero flag is set.
pub const JUMP_Z: u8 = 0x11;
/// `JUMP_NZ lo hi`: jump when the zero flag is clear.
pub const JUMP_NZ: u8 = 0x12;

/// `XOR dst a b`.
pub const XOR: u8 = 0x20;
/// `ADD dst a b`.
pub const ADD: u8 = 0x21;
/// `SUB dst a b`.
pub const SUB: u8 = 0x22;
/// `MUL dst a b`.
pub const MUL: u8 = 0x23;
/// `DIV dst a b`.
pub const DIV: u8 = 0x24;
/// `INC reg`.
pub const INC: u8 = 0x25;
/// `DEC reg`.
pub const DEC: u8 = 0x26;
/// `AND dst a b`.
pub const AND: u8 = 0x27;
/// `OR dst a b`.
pub const OR: u8 = 0x28;

/// `STRING_STORE reg lo hi bytes...`: store an inline string.
pub const STRING_STORE: u8 = 0x30;
/// `STRING_PRINT reg`.
pub const STRING_PRINT: u8 = 0x31;
/// `STRING_CONCAT dst a b`.
pub const STRING_CONCAT: u8 = 0x32;
/// `STRING_TOINT reg`: parse the leading integer of a string register.
pub const STRING_TOINT: u8 = 0x34;

/// `CMP_REG a b`: zero flag set when both registers are equal.
pub const CMP_REG: u8 = 0x40;
/// `CMP_IMMEDIATE reg lo hi`.
pub const CMP_IMMEDIATE: u8 = 0x41;
/// `CMP_STRING reg lo hi bytes...`.
pub const CMP_STRING: u8 = 0x42;
/// `IS_STRING reg`.
pub const IS_STRING: u8 = 0x43;
/// `IS_INTEGER reg`.
pub const IS_INTEGER: u8 = 0x44;

/// No operation.
pub const NOP: u8 = 0x50;
/// `REG_STORE dst src`: copy a register.
pub const REG_STORE: u8 = 0x51;

/// `PEEK dst addr`: load the byte at the address held in `addr`.
pub const PEEK: u8 = 0x60;
/// `POKE val addr`: store the low byte of `val` at the address held in `addr`.
pub const POKE: u8 = 0x61;
/// `MEMCPY dst src len`: copy `len` bytes between the addresses held in registers.
pub const MEMCPY: u8 = 0x62;

/// `PUSH reg`.
pub const PUSH: u8 = 0x70;
/// `POP reg`.
pub const POP: u8 = 0x71;
/// Return to the address on top of the stack.
pub const RET: u8 = 0x72;
/// `CALL lo hi`: push the return address and jump.
pub const CALL: u8 = 0x73;
