/*
 * SPDX-License-Identifier: BlueOak-1.0.0
 */

//! Register locator.
//!
//! Each hardware property of a pin lives in a bit field of some register in some bank. The
//! SoC catalog describes those fields as ranges of pins sharing a linear layout, and
//! [`FieldRange::locate`] turns a pin number into the exact register and bit position.

use core::fmt;

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Register width used by [`FieldRange::new`].
pub const REG_BITS: u8 = 32;

/// Per-pin hardware property with its own field table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Property {
    /// Function (mux) selector.
    Mode,
    /// GPIO direction, 1 = output.
    Dir,
    /// GPIO input level.
    Di,
    /// GPIO output level.
    Do,
    /// Schmitt trigger enable.
    Smt,
    /// Input buffer enable.
    Ies,
    /// Drive strength level.
    Drv,
    /// Pull-up enable.
    Pu,
    /// Pull-down enable.
    Pd,
    /// Pull enable for pins with a combined pull control.
    PullEn,
    /// Pull direction for pins with a combined pull control, 1 = up.
    PullSel,
    /// Pull direction for pins with a resistor pair, 1 = down.
    Pupd,
    /// First pull resistor connect.
    R0,
    /// Second pull resistor connect.
    R1,
}

/// Contiguous run of pins whose field for one property follows one linear layout.
///
/// For pin `p` in `start..=end` the field starts `start_bit + (p - start) * width` bits into
/// the register run beginning at `offset`, with consecutive registers `stride` bytes apart.
/// A `fixed` range places every pin at `start_bit` of the same register.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldRange {
    pub start: u16,
    pub end: u16,
    pub bank: u8,
    pub offset: u32,
    pub stride: u32,
    pub start_bit: u8,
    pub width: u8,
    pub reg_bits: u8,
    pub fixed: bool,
}

/// Resolved position of one pin's field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FieldLocation {
    /// Index into the controller's bank windows.
    pub bank: usize,
    /// Byte offset of the register holding the low bit of the field.
    pub offset: usize,
    /// Position of the low bit within that register.
    pub bit: usize,
    pub width: usize,
    /// Distance in bytes to the register continuing a field that crosses the register top.
    pub stride: usize,
    /// Register width in bits; a field crossing it continues at bit 0 of the next register.
    pub reg_bits: usize,
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl Property {
    pub const COUNT: usize = 14;

    pub const ALL: [Property; Property::COUNT] = [
        Property::Mode,
        Property::Dir,
        Property::Di,
        Property::Do,
        Property::Smt,
        Property::Ies,
        Property::Drv,
        Property::Pu,
        Property::Pd,
        Property::PullEn,
        Property::PullSel,
        Property::Pupd,
        Property::R0,
        Property::R1,
    ];

    /// Index into per-property tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Property::Mode => "mode",
            Property::Dir => "dir",
            Property::Di => "di",
            Property::Do => "do",
            Property::Smt => "smt",
            Property::Ies => "ies",
            Property::Drv => "drv",
            Property::Pu => "pu",
            Property::Pd => "pd",
            Property::PullEn => "pullen",
            Property::PullSel => "pullsel",
            Property::Pupd => "pupd",
            Property::R0 => "r0",
            Property::R1 => "r1",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FieldRange {
    /// Range with 32-bit registers and per-pin fields.
    pub const fn new(
        start: u16,
        end: u16,
        bank: u8,
        offset: u32,
        stride: u32,
        start_bit: u8,
        width: u8,
    ) -> Self {
        Self {
            start,
            end,
            bank,
            offset,
            stride,
            start_bit,
            width,
            reg_bits: REG_BITS,
            fixed: false,
        }
    }

    /// Same range with every pin sharing the field at `start_bit`.
    pub const fn fixed(self) -> Self {
        Self {
            fixed: true,
            ..self
        }
    }

    /// Same range laid out over registers `reg_bits` wide.
    pub const fn with_reg_bits(self, reg_bits: u8) -> Self {
        Self { reg_bits, ..self }
    }

    pub const fn contains(&self, pin: usize) -> bool {
        self.start as usize <= pin && pin <= self.end as usize
    }

    pub const fn pin_count(&self) -> usize {
        self.end as usize - self.start as usize + 1
    }

    /// Position of `pin`'s field. `pin` must lie within the range.
    pub const fn locate(&self, pin: usize) -> FieldLocation {
        let bits = if self.fixed {
            self.start_bit as usize
        } else {
            self.start_bit as usize + (pin - self.start as usize) * self.width as usize
        };
        let reg_bits = self.reg_bits as usize;
        FieldLocation {
            bank: self.bank as usize,
            offset: self.offset as usize + (bits / reg_bits) * self.stride as usize,
            bit: bits % reg_bits,
            width: self.width as usize,
            stride: self.stride as usize,
            reg_bits,
        }
    }

    /// Byte offset just past the last register this range touches.
    pub const fn span_end(&self) -> usize {
        let last = self.locate(self.end as usize);
        if last.straddles() {
            last.offset + last.stride + 4
        } else {
            last.offset + 4
        }
    }

    /// True when some pin is covered by both ranges.
    pub const fn overlaps(&self, other: &FieldRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl FieldLocation {
    /// Largest value the field can hold, also the unshifted field mask.
    pub const fn mask(&self) -> u32 {
        if self.width >= 32 {
            u32::MAX
        } else {
            (1u32 << self.width) - 1
        }
    }

    /// True when the field continues in the register at `offset + stride`.
    pub const fn straddles(&self) -> bool {
        self.bit + self.width > self.reg_bits
    }
}

impl fmt::Display for FieldLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 1 {
            write!(f, "bank{}+{:#05x}[{}]", self.bank, self.offset, self.bit)
        } else {
            write!(
                f,
                "bank{}+{:#05x}[{}:{}]",
                self.bank,
                self.offset,
                self.bit + self.width - 1,
                self.bit
            )
        }
    }
}

/// Find the range covering `pin` in one property table.
pub fn find(table: &'static [FieldRange], pin: usize) -> Option<&'static FieldRange> {
    table.iter().find(|range| range.contains(pin))
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------
