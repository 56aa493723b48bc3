/*
 * SPDX-License-Identifier: BlueOak-1.0.0
 */

//! Small made-up SoC exercising every corner of the engine, and a register window that records
//! each write.
//!
//! Pins 0-3 pull through a resistor pair, pins 4-5 through separate pull-up/pull-down bits,
//! pins 6-7 through a combined enable/select pair. Pin 3's drive field crosses a register
//! boundary; pins 6-7 have no schmitt trigger. The variants below each break or bend one
//! catalog rule.

use {
    super::*,
    crate::mmio::{interface::RegisterWindow, RamWindow},
    std::{cell::RefCell, vec::Vec},
};

pub const GPIO: usize = 0;
pub const CFG: usize = 1;

const G: u8 = GPIO as u8;
const C: u8 = CFG as u8;

const MODE: [FieldRange; 1] = [FieldRange::new(0, 7, G, 0x300, 0x10, 0, 4)];
const DIR: [FieldRange; 1] = [FieldRange::new(0, 7, G, 0x000, 0x10, 0, 1)];
const DI: [FieldRange; 1] = [FieldRange::new(0, 7, G, 0x200, 0x10, 0, 1)];
const DO: [FieldRange; 1] = [FieldRange::new(0, 7, G, 0x100, 0x10, 0, 1)];
const IES: [FieldRange; 1] = [FieldRange::new(0, 7, C, 0x20, 0x10, 0, 1)];
const SMT: [FieldRange; 1] = [FieldRange::new(0, 5, C, 0x90, 0x10, 0, 1)];
const DRV: [FieldRange; 2] = [
    FieldRange::new(0, 4, C, 0x00, 0x10, 22, 3),
    FieldRange::new(5, 7, C, 0x40, 0x10, 0, 3),
];
const PU: [FieldRange; 1] = [FieldRange::new(4, 5, C, 0x50, 0x10, 0, 1)];
const PD: [FieldRange; 1] = [FieldRange::new(4, 5, C, 0x60, 0x10, 0, 1)];
const PULLEN: [FieldRange; 1] = [FieldRange::new(6, 7, C, 0x70, 0x10, 0, 1)];
const PULLSEL: [FieldRange; 1] = [FieldRange::new(6, 7, C, 0x80, 0x10, 0, 1)];
const PUPD: [FieldRange; 1] = [FieldRange::new(0, 3, C, 0xa0, 0x10, 0, 1)];
const R0: [FieldRange; 1] = [FieldRange::new(0, 3, C, 0xb0, 0x10, 0, 1)];
const R1: [FieldRange; 1] = [FieldRange::new(0, 3, C, 0xc0, 0x10, 0, 1)];

pub const PUPD_OFFSET: usize = 0xa0;
pub const R0_OFFSET: usize = 0xb0;
pub const R1_OFFSET: usize = 0xc0;
pub const PU_OFFSET: usize = 0x50;
pub const PD_OFFSET: usize = 0x60;
pub const PULLEN_OFFSET: usize = 0x70;
pub const PULLSEL_OFFSET: usize = 0x80;

const PINS: [PinDesc; 8] = [
    PinDesc::new(0, "P0", DriveGroup::GRP4, 0),
    PinDesc::new(1, "P1", DriveGroup::GRP4, 0),
    PinDesc::new(2, "P2", DriveGroup::GRP4, 0),
    PinDesc::new(3, "P3", DriveGroup::GRP4, 0),
    PinDesc::new(4, "P4", DriveGroup::GRP4, 1),
    PinDesc::new(5, "P5", DriveGroup::GRP4, 1),
    PinDesc::new(6, "P6", DriveGroup::GRP2, 1),
    PinDesc::new(7, "P7", DriveGroup::GRP0, 1),
];

const GROUPS: [GroupDesc; 3] = [
    GroupDesc {
        name: "uart",
        pins: &[PinMux::new(0, 1), PinMux::new(1, 1)],
    },
    GroupDesc {
        name: "spi",
        pins: &[PinMux::new(2, 2), PinMux::new(3, 2), PinMux::new(4, 2)],
    },
    GroupDesc {
        name: "wide",
        pins: &[PinMux::new(5, 3), PinMux::new(6, 16)],
    },
];

const FUNCTIONS: [FunctionDesc; 2] = [
    FunctionDesc {
        name: "uart",
        groups: &["uart"],
    },
    FunctionDesc {
        name: "spi",
        groups: &["spi", "wide"],
    },
];

const IO_TYPES: [IoTypeDesc; 2] = [
    IoTypeDesc {
        name: "resistor",
        bias: BiasStrategy::PupdR1R0,
        drive: DriveStrategy::V1,
        input_enable: InputEnableStrategy::V1,
    },
    IoTypeDesc {
        name: "direct",
        bias: BiasStrategy::PuPd,
        drive: DriveStrategy::V1,
        input_enable: InputEnableStrategy::V1,
    },
];

pub const FIXTURE_DATA: SocData = SocData {
    name: "fixture",
    compatible: "test,fixture-pinctrl",
    fields: [
        &MODE, &DIR, &DI, &DO, &SMT, &IES, &DRV, &PU, &PD, &PULLEN, &PULLSEL, &PUPD, &R0, &R1,
    ],
    pins: &PINS,
    groups: &GROUPS,
    functions: &FUNCTIONS,
    io_types: &IO_TYPES,
    base_names: &["gpio", "cfg"],
    gpio_mode: 0,
};

pub static FIXTURE: SocData = FIXTURE_DATA;

const fn with_table(mut soc: SocData, property: Property, table: &'static [FieldRange]) -> SocData {
    soc.fields[property.index()] = table;
    soc
}

const DIR_TWICE: [FieldRange; 2] = [
    FieldRange::new(0, 7, G, 0x000, 0x10, 0, 1),
    FieldRange::new(3, 3, G, 0x040, 0x10, 0, 1),
];
const R1_SHORT: [FieldRange; 1] = [FieldRange::new(0, 2, C, 0xc0, 0x10, 0, 1)];
const SMT_BANK: [FieldRange; 1] = [FieldRange::new(0, 5, 2, 0x90, 0x10, 0, 1)];
const FUNCTIONS_DANGLING: [FunctionDesc; 1] = [FunctionDesc {
    name: "spi",
    groups: &["spi", "gone"],
}];

const DRV_NARROW: [FieldRange; 2] = [
    FieldRange::new(0, 4, C, 0x00, 0x10, 6, 3).with_reg_bits(16),
    FieldRange::new(5, 7, C, 0x40, 0x10, 0, 3),
];

const fn with_drive(mut pins: [PinDesc; 8], pin: usize, drive: DriveGroup) -> [PinDesc; 8] {
    pins[pin].drive = drive;
    pins
}

const ZERO_STEP_PINS: [PinDesc; 8] = with_drive(PINS, 7, DriveGroup::new(4, 16, 0));

pub static OVERLAPPING_DIR: SocData = with_table(FIXTURE_DATA, Property::Dir, &DIR_TWICE);
pub static MISSING_R1: SocData = with_table(FIXTURE_DATA, Property::R1, &R1_SHORT);
pub static BAD_BANK: SocData = with_table(FIXTURE_DATA, Property::Smt, &SMT_BANK);
pub static NARROW_DRV: SocData = with_table(FIXTURE_DATA, Property::Drv, &DRV_NARROW);
pub static ZERO_STEP_DRIVE: SocData = SocData {
    pins: &ZERO_STEP_PINS,
    ..FIXTURE_DATA
};
pub static DANGLING_GROUP: SocData = SocData {
    functions: &FUNCTIONS_DANGLING,
    ..FIXTURE_DATA
};

/// Memory-backed bank that logs `(offset, new value)` for every register write.
pub struct RecordingWindow {
    ram: RamWindow,
    log: RefCell<Vec<(usize, u32)>>,
}

impl RecordingWindow {
    pub fn new() -> Self {
        Self::filled(0)
    }

    pub fn filled(value: u32) -> Self {
        Self {
            ram: RamWindow::filled(value),
            log: RefCell::new(Vec::new()),
        }
    }

    pub fn writes(&self) -> Vec<(usize, u32)> {
        self.log.borrow().clone()
    }

    pub fn clear_log(&self) {
        self.log.borrow_mut().clear();
    }
}

impl RegisterWindow for RecordingWindow {
    fn read(&self, offset: usize) -> u32 {
        self.ram.read(offset)
    }

    fn write(&self, offset: usize, value: u32) {
        self.ram.write(offset, value);
        self.log.borrow_mut().push((offset, value));
    }
}

pub fn banks() -> [RecordingWindow; 2] {
    filled_banks(0)
}

pub fn filled_banks(value: u32) -> [RecordingWindow; 2] {
    [RecordingWindow::filled(value), RecordingWindow::filled(value)]
}

/// Replay the writes of one bank over `initial`, calling `check` with the value of each
/// watched register after every write.
pub fn replay<const N: usize>(
    bank: &RecordingWindow,
    watched: [usize; N],
    initial: [u32; N],
    mut check: impl FnMut([u32; N]),
) {
    let mut state = initial;
    for (offset, value) in bank.writes() {
        if let Some(slot) = watched.iter().position(|w| *w == offset) {
            state[slot] = value;
            check(state);
        }
    }
}
