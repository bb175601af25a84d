//! Machine RAM.
//!
//! This module provides the flat byte-addressed memory the program image is copied into.
//! It performs:
//! 1. **Image Loading:** Copies the program to the load address at construction time.
//! 2. **Fetch:** Unchecked reads at wrapped instruction addresses.
//! 3. **Data Access:** Bounds-checked `PEEK`/`POKE`/`MEMCPY` at register-held addresses.

use crate::common::constants::{LOAD_ADDRESS, MAX_RAM_SIZE};
use crate::common::error::{Fault, MachineError};

/// Zero-initialised RAM of a fixed size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    data: Box<[u8]>,
}

impl Memory {
    /// Creates `size` bytes of zeroed RAM.
    ///
    /// # Returns
    ///
    /// [`MachineError::InvalidConfig`] unless `size` is between 1 and
    /// [`MAX_RAM_SIZE`]; instruction addresses wrap modulo the size and are 16 bits wide.
    pub fn new(size: usize) -> Result<Self, MachineError> {
        if size == 0 || size > MAX_RAM_SIZE {
            return Err(MachineError::InvalidConfig(format!(
                "ram_size must be between 1 and {MAX_RAM_SIZE}, got {size}"
            )));
        }
        Ok(Self {
            data: vec![0; size].into_boxed_slice(),
        })
    }

    /// Copies a program image to the load address.
    ///
    /// # Returns
    ///
    /// [`MachineError::ImageTooLarge`] if the image does not fit.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), MachineError> {
        let start = usize::from(LOAD_ADDRESS);
        let capacity = self.data.len() - start;
        if image.len() > capacity {
            return Err(MachineError::ImageTooLarge {
                size: image.len(),
                capacity,
            });
        }
        self.data[start..start + image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Size of RAM in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; RAM has at least one byte.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads the byte at an instruction address, wrapping at the end of RAM.
    pub fn fetch(&self, addr: u16) -> u8 {
        self.data[usize::from(addr) % self.data.len()]
    }

    /// Returns the address following `addr`, wrapping at the end of RAM.
    pub fn next_address(&self, addr: u16) -> u16 {
        ((usize::from(addr) + 1) % self.data.len()) as u16
    }

    /// Converts a register-held address into a RAM index.
    pub fn check(&self, addr: i64) -> Result<usize, Fault> {
        usize::try_from(addr)
            .ok()
            .filter(|idx| *idx < self.data.len())
            .ok_or(Fault::AddressOutOfRange(addr))
    }

    /// Reads a byte at a register-held address.
    pub fn peek(&self, addr: i32) -> Result<u8, Fault> {
        let idx = self.check(i64::from(addr))?;
        Ok(self.data[idx])
    }

    /// Writes a byte at a register-held address.
    pub fn poke(&mut self, addr: i32, val: u8) -> Result<(), Fault> {
        let idx = self.check(i64::from(addr))?;
        self.data[idx] = val;
        Ok(())
    }

    /// Copies `len` bytes from `src` to `dst`; the ranges may overlap.
    ///
    /// Both ranges must lie entirely inside RAM. A zero length copies nothing.
    pub fn copy(&mut self, dst: i32, src: i32, len: i32) -> Result<(), Fault> {
        if len == 0 {
            return Ok(());
        }
        if len < 0 {
            return Err(Fault::AddressOutOfRange(i64::from(src) + i64::from(len)));
        }
        let last = i64::from(len) - 1;
        let src_idx = self.check(i64::from(src))?;
        let dst_idx = self.check(i64::from(dst))?;
        let _ = self.check(i64::from(src) + last)?;
        let _ = self.check(i64::from(dst) + last)?;
        let count = len as usize;
        self.data.copy_within(src_idx..src_idx + count, dst_idx);
        Ok(())
    }

    /// Returns the full RAM contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
