//! Instruction Execution.
//!
//! This module implements the fetch/decode/execute step of the machine. It performs:
//! 1. **Fetch:** Reads the opcode and its inline operands, wrapping at the end of RAM.
//! 2. **Execute:** Applies the opcode to registers, flags, memory, stack and console.
//! 3. **Fault Detection:** Turns invalid operations into a [`Fault`] without retiring.

use tracing::trace;

use super::Cpu;
use crate::common::error::Fault;
use crate::common::num::parse_i32_prefix;
use crate::common::reg::Value;
use crate::isa::disasm::mnemonic;
use crate::isa::opcodes as op;

impl Cpu {
    /// Executes one instruction.
    ///
    /// # Returns
    ///
    /// `Ok(())` when the instruction retired (including `EXIT`), or the [`Fault`]
    /// it raised. A faulting instruction is not counted in `retired`.
    pub fn step(&mut self) -> Result<(), Fault> {
        let ip = self.ip;
        let opcode = self.next_u8();
        if self.trace {
            trace!(ip, op = mnemonic(opcode).unwrap_or("???"), "step");
        }

        match opcode {
            op::EXIT => self.halted = true,
            op::NOP => {}

            op::INT_STORE => {
                let reg = self.next_u8();
                let val = self.next_u16();
                self.regs.set(reg, Value::Int(i32::from(val)))?;
            }
            op::INT_PRINT => {
                let reg = self.next_u8();
                let val = self.regs.int(reg)?;
                self.print(&val.to_string());
            }
            op::INT_TOSTRING => {
                let reg = self.next_u8();
                let val = self.regs.int(reg)?;
                self.regs.set(reg, Value::Str(val.to_string()))?;
            }

            op::JUMP_TO => {
                let target = self.next_u16();
                self.jump(i64::from(target))?;
            }
            op::JUMP_Z => {
                let target = self.next_u16();
                if self.zero_flag {
                    self.jump(i64::from(target))?;
                }
            }
            op::JUMP_NZ => {
                let target = self.next_u16();
                if !self.zero_flag {
                    self.jump(i64::from(target))?;
                }
            }

            op::XOR => self.arith(|a, b| Ok(a ^ b))?,
            op::ADD => self.arith(|a, b| Ok(a.wrapping_add(b)))?,
            op::SUB => self.arith(|a, b| Ok(a.wrapping_sub(b)))?,
            op::MUL => self.arith(|a, b| Ok(a.wrapping_mul(b)))?,
            op::DIV => self.arith(|a, b| {
                if b == 0 {
                    Err(Fault::DivideByZero)
                } else {
                    Ok(a.wrapping_div(b))
                }
            })?,
            op::AND => self.arith(|a, b| Ok(a & b))?,
            op::OR => self.arith(|a, b| Ok(a | b))?,
            op::INC => {
                let reg = self.next_u8();
                let val = self.regs.int(reg)?.wrapping_add(1);
                self.set_int(reg, val)?;
            }
            op::DEC => {
                let reg = self.next_u8();
                let val = self.regs.int(reg)?.wrapping_sub(1);
                self.set_int(reg, val)?;
            }

            op::STRING_STORE => {
                let reg = self.next_u8();
                let text = self.next_string();
                self.regs.set(reg, Value::Str(text))?;
            }
            op::STRING_PRINT => {
                let reg = self.next_u8();
                let text = self.regs.string(reg)?.to_owned();
                self.print(&text);
            }
            op::STRING_CONCAT => {
                let dst = self.next_u8();
                let a = self.next_u8();
                let b = self.next_u8();
                let mut joined = self.regs.string(a)?.to_owned();
                joined.push_str(self.regs.string(b)?);
                self.regs.set(dst, Value::Str(joined))?;
            }
            op::STRING_TOINT => {
                let reg = self.next_u8();
                let val = parse_i32_prefix(self.regs.string(reg)?);
                self.regs.set(reg, Value::Int(val))?;
            }

            op::CMP_REG => {
                let a = self.next_u8();
                let b = self.next_u8();
                self.zero_flag = self.regs.get(a)? == self.regs.get(b)?;
            }
            op::CMP_IMMEDIATE => {
                let reg = self.next_u8();
                let imm = self.next_u16();
                self.zero_flag = self.regs.int(reg)? == i32::from(imm);
            }
            op::CMP_STRING => {
                let reg = self.next_u8();
                let text = self.next_string();
                self.zero_flag = matches!(self.regs.get(reg)?, Value::Str(s) if *s == text);
            }
            op::IS_STRING => {
                let reg = self.next_u8();
                self.zero_flag = matches!(self.regs.get(reg)?, Value::Str(_));
            }
            op::IS_INTEGER => {
                let reg = self.next_u8();
                self.zero_flag = matches!(self.regs.get(reg)?, Value::Int(_));
            }

            op::REG_STORE => {
                let dst = self.next_u8();
                let src = self.next_u8();
                let val = self.regs.get(src)?.clone();
                self.regs.set(dst, val)?;
            }

            op::PEEK => {
                let dst = self.next_u8();
                let addr = self.next_u8();
                let byte = self.memory.peek(self.regs.int(addr)?)?;
                self.regs.set(dst, Value::Int(i32::from(byte)))?;
            }
            op::POKE => {
                let src = self.next_u8();
                let addr = self.next_u8();
                let val = self.regs.int(src)?;
                self.memory.poke(self.regs.int(addr)?, val as u8)?;
            }
            op::MEMCPY => {
                let dst = self.next_u8();
                let src = self.next_u8();
                let len = self.next_u8();
                let (dst, src, len) = (
                    self.regs.int(dst)?,
                    self.regs.int(src)?,
                    self.regs.int(len)?,
                );
                self.memory.copy(dst, src, len)?;
            }

            op::PUSH => {
                let reg = self.next_u8();
                let val = self.regs.int(reg)?;
                self.stack.push(val)?;
            }
            op::POP => {
                let reg = self.next_u8();
                let val = self.stack.pop()?;
                self.regs.set(reg, Value::Int(val))?;
            }
            op::CALL => {
                let target = self.next_u16();
                self.stack.push(i32::from(self.ip))?;
                self.jump(i64::from(target))?;
            }
            op::RET => {
                let target = self.stack.pop()?;
                self.jump(i64::from(target))?;
            }

            _ => return Err(Fault::UnknownOpcode { opcode, ip }),
        }

        self.retired += 1;
        Ok(())
    }

    fn next_u8(&mut self) -> u8 {
        let byte = self.memory.fetch(self.ip);
        self.ip = self.memory.next_address(self.ip);
        byte
    }

    fn next_u16(&mut self) -> u16 {
        let lo = self.next_u8();
        let hi = self.next_u8();
        u16::from_le_bytes([lo, hi])
    }

    /// Reads a 16-bit length followed by that many bytes.
    fn next_string(&mut self) -> String {
        let len = self.next_u16();
        let bytes: Vec<u8> = (0..len).map(|_| self.next_u8()).collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    fn jump(&mut self, target: i64) -> Result<(), Fault> {
        let idx = self.memory.check(target)?;
        self.ip = idx as u16;
        Ok(())
    }

    fn set_int(&mut self, reg: u8, val: i32) -> Result<(), Fault> {
        self.zero_flag = val == 0;
        self.regs.set(reg, Value::Int(val))
    }

    /// Three-register integer operation: `dst = f(a, b)`, updating the zero flag.
    fn arith(&mut self, f: impl FnOnce(i32, i32) -> Result<i32, Fault>) -> Result<(), Fault> {
        let dst = self.next_u8();
        let a = self.next_u8();
        let b = self.next_u8();
        let val = f(self.regs.int(a)?, self.regs.int(b)?)?;
        self.set_int(dst, val)
    }
}
