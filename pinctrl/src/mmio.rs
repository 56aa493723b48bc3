/*
 * SPDX-License-Identifier: BlueOak-1.0.0
 */

//! Register windows.
//!
//! A window is one bank of 32-bit registers addressed by byte offset from the bank base. The
//! pin controller never computes an absolute address; all of that stays in here.

use {
    bit_field::BitField,
    core::cell::Cell,
    tock_registers::{
        fields::FieldValue,
        interfaces::{ReadWriteable, Readable, Writeable},
        registers::ReadWrite,
    },
};

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Register window interfaces.
pub mod interface {
    /// Access to one bank of 32-bit registers.
    pub trait RegisterWindow {
        /// Read the register at `offset` bytes from the bank base.
        fn read(&self, offset: usize) -> u32;

        /// Write the register at `offset` bytes from the bank base.
        fn write(&self, offset: usize, value: u32);

        /// Replace the `mask << shift` bits of a register with `value`, keeping every other bit.
        fn modify(&self, offset: usize, mask: u32, shift: usize, value: u32) {
            let old = self.read(offset);
            self.write(offset, (old & !(mask << shift)) | ((value & mask) << shift));
        }
    }
}

/// Volatile window onto a memory-mapped register bank.
pub struct MmioWindow {
    base_addr: usize,
}

/// Memory-backed register bank, `WORDS` registers long, all zero at creation.
///
/// Used wherever real hardware is absent: host tools simulating a configuration, and tests.
pub struct RamWindow<const WORDS: usize = 256> {
    regs: [Cell<u32>; WORDS],
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl MmioWindow {
    /// Create an instance.
    ///
    /// # Safety
    ///
    /// You could specify any base address here, no checks. The bank must be mapped for the
    /// lifetime of the window and nothing else may assume exclusive ownership of it.
    pub const unsafe fn new(base_addr: usize) -> Self {
        Self { base_addr }
    }

    pub const fn base_addr(&self) -> usize {
        self.base_addr
    }

    fn register(&self, offset: usize) -> &ReadWrite<u32> {
        unsafe { &*((self.base_addr + offset) as *const ReadWrite<u32>) }
    }
}

impl interface::RegisterWindow for MmioWindow {
    fn read(&self, offset: usize) -> u32 {
        self.register(offset).get()
    }

    fn write(&self, offset: usize, value: u32) {
        self.register(offset).set(value)
    }

    fn modify(&self, offset: usize, mask: u32, shift: usize, value: u32) {
        self.register(offset)
            .modify(FieldValue::<u32, ()>::new(mask, shift, value & mask));
    }
}

impl<const WORDS: usize> RamWindow<WORDS> {
    pub fn new() -> Self {
        Self::filled(0)
    }

    /// Create a bank with every register preset to `value`.
    pub fn filled(value: u32) -> Self {
        Self {
            regs: core::array::from_fn(|_| Cell::new(value)),
        }
    }

    /// Size of the bank in bytes.
    pub const fn len(&self) -> usize {
        WORDS * 4
    }

    pub const fn is_empty(&self) -> bool {
        WORDS == 0
    }

    fn cell(&self, offset: usize) -> &Cell<u32> {
        debug_assert_eq!(offset % 4, 0, "unaligned register offset {:#x}", offset);
        &self.regs[offset / 4]
    }
}

impl<const WORDS: usize> Default for RamWindow<WORDS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const WORDS: usize> interface::RegisterWindow for RamWindow<WORDS> {
    fn read(&self, offset: usize) -> u32 {
        self.cell(offset).get()
    }

    fn write(&self, offset: usize, value: u32) {
        self.cell(offset).set(value)
    }

    fn modify(&self, offset: usize, mask: u32, shift: usize, value: u32) {
        let width = mask.count_ones() as usize;
        let mut reg = self.read(offset);
        reg.set_bits(shift..shift + width, value & mask);
        self.write(offset, reg);
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------
