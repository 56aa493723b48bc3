/*
 * SPDX-License-Identifier: BlueOak-1.0.0
 */

//! MT7986 pin controller catalog.
//!
//! Pins 0-68 are 1.8/3.3 V pads pulled through a resistor pair, pins 69-100 are the Wi-Fi
//! front-end pads with plain pull-up/pull-down enables. Pad configuration is spread over six
//! IO-configuration banks named after where they sit on the die.

use {
    super::device_driver::pinctrl::{
        BiasStrategy, DriveGroup, DriveStrategy, FieldRange, FunctionDesc, GroupDesc,
        InputEnableStrategy, IoTypeDesc, PinDesc, PinMux, Property, SocData,
    },
    static_assertions::const_assert_eq,
};

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Register banks, in the order the platform binds them.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Bank {
    Gpio,
    IocfgRt,
    IocfgRb,
    IocfgLt,
    IocfgLb,
    IocfgTr,
    IocfgTl,
}

pub const PIN_COUNT: usize = 101;

pub const BASE_NAMES: [&str; Bank::COUNT] = [
    "gpio", "iocfg_rt", "iocfg_rb", "iocfg_lt", "iocfg_lb", "iocfg_tr", "iocfg_tl",
];

/// The catalog by value, for building variants of it.
pub const MT7986_SOC: SocData = SocData {
    name: "mt7986_pinctrl",
    compatible: "mediatek,mt7986-pinctrl",
    fields: FIELDS,
    pins: &PINS,
    groups: &GROUPS,
    functions: &FUNCTIONS,
    io_types: &IO_TYPES,
    base_names: &BASE_NAMES,
    gpio_mode: 0,
};

pub static MT7986: SocData = MT7986_SOC;

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl Bank {
    pub const COUNT: usize = 7;

    pub const ALL: [Bank; Bank::COUNT] = [
        Bank::Gpio,
        Bank::IocfgRt,
        Bank::IocfgRb,
        Bank::IocfgLt,
        Bank::IocfgLb,
        Bank::IocfgTr,
        Bank::IocfgTl,
    ];

    pub const fn name(self) -> &'static str {
        BASE_NAMES[self as usize]
    }
}

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

use self::Bank::*;

const IO_TYPE_GRP0: u8 = 0;
const IO_TYPE_GRP1: u8 = 1;

const fn field(
    start: u16,
    end: u16,
    bank: Bank,
    offset: u32,
    stride: u32,
    start_bit: u8,
    width: u8,
) -> FieldRange {
    FieldRange::new(start, end, bank as u8, offset, stride, start_bit, width)
}

const fn type0(number: u16, name: &'static str) -> PinDesc {
    PinDesc::new(number, name, DriveGroup::GRP4, IO_TYPE_GRP0)
}

const fn type1(number: u16, name: &'static str) -> PinDesc {
    PinDesc::new(number, name, DriveGroup::GRP4, IO_TYPE_GRP1)
}

/// Group whose pins all take the same mode value.
macro_rules! group {
    ($name:literal, [$($pin:literal),+ $(,)?], $function:literal) => {
        GroupDesc {
            name: $name,
            pins: &[$(PinMux::new($pin, $function)),+],
        }
    };
}

const MODE: [FieldRange; 1] = [field(0, 100, Gpio, 0x300, 0x10, 0, 4)];

const DIR: [FieldRange; 1] = [field(0, 100, Gpio, 0x00, 0x10, 0, 1)];

const DI: [FieldRange; 1] = [field(0, 100, Gpio, 0x200, 0x10, 0, 1)];

const DO: [FieldRange; 1] = [field(0, 100, Gpio, 0x100, 0x10, 0, 1)];

const IES: [FieldRange; 51] = [
    field(0, 0, IocfgRb, 0x40, 0x10, 17, 1),
    field(1, 2, IocfgLt, 0x20, 0x10, 10, 1),
    field(3, 4, IocfgLb, 0x20, 0x10, 0, 1),
    field(5, 6, IocfgRb, 0x40, 0x10, 0, 1),
    field(7, 10, IocfgLt, 0x20, 0x10, 0, 1),
    field(11, 14, IocfgRb, 0x40, 0x10, 8, 1),
    field(15, 20, IocfgRb, 0x40, 0x10, 2, 1),
    field(21, 23, IocfgRt, 0x30, 0x10, 12, 1),
    field(24, 24, IocfgRt, 0x30, 0x10, 18, 1),
    field(25, 25, IocfgRt, 0x30, 0x10, 17, 1),
    field(26, 27, IocfgRt, 0x30, 0x10, 15, 1),
    field(28, 29, IocfgRt, 0x30, 0x10, 19, 1),
    field(30, 30, IocfgRt, 0x30, 0x10, 23, 1),
    field(31, 31, IocfgRt, 0x30, 0x10, 22, 1),
    field(32, 32, IocfgRt, 0x30, 0x10, 21, 1),
    field(33, 33, IocfgLt, 0x20, 0x10, 4, 1),
    field(34, 34, IocfgLt, 0x20, 0x10, 8, 1),
    field(35, 35, IocfgLt, 0x20, 0x10, 7, 1),
    field(36, 37, IocfgLt, 0x20, 0x10, 5, 1),
    field(38, 38, IocfgLt, 0x20, 0x10, 9, 1),
    field(39, 40, IocfgRb, 0x40, 0x10, 18, 1),
    field(41, 41, IocfgRb, 0x40, 0x10, 12, 1),
    field(42, 43, IocfgRb, 0x40, 0x10, 22, 1),
    field(44, 45, IocfgRb, 0x40, 0x10, 20, 1),
    field(46, 47, IocfgRb, 0x40, 0x10, 26, 1),
    field(48, 49, IocfgRb, 0x40, 0x10, 24, 1),
    field(50, 57, IocfgRt, 0x30, 0x10, 2, 1),
    field(58, 58, IocfgRt, 0x30, 0x10, 1, 1),
    field(59, 59, IocfgRt, 0x30, 0x10, 0, 1),
    field(60, 61, IocfgRt, 0x30, 0x10, 10, 1),
    field(62, 62, IocfgRb, 0x40, 0x10, 15, 1),
    field(63, 63, IocfgRb, 0x40, 0x10, 14, 1),
    field(64, 64, IocfgRb, 0x40, 0x10, 13, 1),
    field(65, 65, IocfgRb, 0x40, 0x10, 16, 1),
    field(66, 68, IocfgLb, 0x20, 0x10, 2, 1),
    field(69, 69, IocfgTr, 0x30, 0x10, 1, 1),
    field(70, 70, IocfgTr, 0x30, 0x10, 0, 1),
    field(71, 71, IocfgTr, 0x30, 0x10, 16, 1),
    field(72, 73, IocfgTr, 0x30, 0x10, 14, 1),
    field(74, 74, IocfgTr, 0x30, 0x10, 4, 1),
    field(75, 77, IocfgTr, 0x30, 0x10, 6, 1),
    field(78, 79, IocfgTr, 0x30, 0x10, 2, 1),
    field(80, 84, IocfgTr, 0x30, 0x10, 9, 1),
    field(85, 85, IocfgTr, 0x30, 0x10, 5, 1),
    field(86, 86, IocfgTl, 0x30, 0x10, 1, 1),
    field(87, 87, IocfgTl, 0x30, 0x10, 0, 1),
    field(88, 88, IocfgTl, 0x30, 0x10, 14, 1),
    field(89, 90, IocfgTl, 0x30, 0x10, 12, 1),
    field(91, 94, IocfgTl, 0x30, 0x10, 4, 1),
    field(95, 96, IocfgTl, 0x30, 0x10, 2, 1),
    field(97, 100, IocfgTl, 0x30, 0x10, 8, 1),
];

const SMT: [FieldRange; 51] = [
    field(0, 0, IocfgRb, 0xf0, 0x10, 17, 1),
    field(1, 2, IocfgLt, 0x90, 0x10, 10, 1),
    field(3, 4, IocfgLb, 0x90, 0x10, 0, 1),
    field(5, 6, IocfgRb, 0xf0, 0x10, 0, 1),
    field(7, 10, IocfgLt, 0x90, 0x10, 0, 1),
    field(11, 14, IocfgRb, 0xf0, 0x10, 8, 1),
    field(15, 20, IocfgRb, 0xf0, 0x10, 2, 1),
    field(21, 23, IocfgRt, 0xc0, 0x10, 12, 1),
    field(24, 24, IocfgRt, 0xc0, 0x10, 18, 1),
    field(25, 25, IocfgRt, 0xc0, 0x10, 17, 1),
    field(26, 27, IocfgRt, 0xc0, 0x10, 15, 1),
    field(28, 29, IocfgRt, 0xc0, 0x10, 19, 1),
    field(30, 30, IocfgRt, 0xc0, 0x10, 23, 1),
    field(31, 31, IocfgRt, 0xc0, 0x10, 22, 1),
    field(32, 32, IocfgRt, 0xc0, 0x10, 21, 1),
    field(33, 33, IocfgLt, 0x90, 0x10, 4, 1),
    field(34, 34, IocfgLt, 0x90, 0x10, 8, 1),
    field(35, 35, IocfgLt, 0x90, 0x10, 7, 1),
    field(36, 37, IocfgLt, 0x90, 0x10, 5, 1),
    field(38, 38, IocfgLt, 0x90, 0x10, 9, 1),
    field(39, 40, IocfgRb, 0xf0, 0x10, 18, 1),
    field(41, 41, IocfgRb, 0xf0, 0x10, 12, 1),
    field(42, 43, IocfgRb, 0xf0, 0x10, 22, 1),
    field(44, 45, IocfgRb, 0xf0, 0x10, 20, 1),
    field(46, 47, IocfgRb, 0xf0, 0x10, 26, 1),
    field(48, 49, IocfgRb, 0xf0, 0x10, 24, 1),
    field(50, 57, IocfgRt, 0xc0, 0x10, 2, 1),
    field(58, 58, IocfgRt, 0xc0, 0x10, 1, 1),
    field(59, 59, IocfgRt, 0xc0, 0x10, 0, 1),
    field(60, 61, IocfgRt, 0xc0, 0x10, 10, 1),
    field(62, 62, IocfgRb, 0xf0, 0x10, 15, 1),
    field(63, 63, IocfgRb, 0xf0, 0x10, 14, 1),
    field(64, 64, IocfgRb, 0xf0, 0x10, 13, 1),
    field(65, 65, IocfgRb, 0xf0, 0x10, 16, 1),
    field(66, 68, IocfgLb, 0x90, 0x10, 2, 1),
    field(69, 69, IocfgTr, 0x80, 0x10, 1, 1),
    field(70, 70, IocfgTr, 0x80, 0x10, 0, 1),
    field(71, 71, IocfgTr, 0x80, 0x10, 16, 1),
    field(72, 73, IocfgTr, 0x80, 0x10, 14, 1),
    field(74, 74, IocfgTr, 0x80, 0x10, 4, 1),
    field(75, 77, IocfgTr, 0x80, 0x10, 6, 1),
    field(78, 79, IocfgTr, 0x80, 0x10, 2, 1),
    field(80, 84, IocfgTr, 0x80, 0x10, 9, 1),
    field(85, 85, IocfgTr, 0x80, 0x10, 5, 1),
    field(86, 86, IocfgTl, 0x70, 0x10, 1, 1),
    field(87, 87, IocfgTl, 0x70, 0x10, 0, 1),
    field(88, 88, IocfgTl, 0x70, 0x10, 14, 1),
    field(89, 90, IocfgTl, 0x70, 0x10, 12, 1),
    field(91, 94, IocfgTl, 0x70, 0x10, 4, 1),
    field(95, 96, IocfgTl, 0x70, 0x10, 2, 1),
    field(97, 100, IocfgTl, 0x70, 0x10, 8, 1),
];

// Only the Wi-Fi pads have plain pull enables.
const PU: [FieldRange; 16] = [
    field(69, 69, IocfgTr, 0x50, 0x10, 1, 1),
    field(70, 70, IocfgTr, 0x50, 0x10, 0, 1),
    field(71, 71, IocfgTr, 0x50, 0x10, 16, 1),
    field(72, 73, IocfgTr, 0x50, 0x10, 14, 1),
    field(74, 74, IocfgTr, 0x50, 0x10, 4, 1),
    field(75, 77, IocfgTr, 0x50, 0x10, 6, 1),
    field(78, 79, IocfgTr, 0x50, 0x10, 2, 1),
    field(80, 84, IocfgTr, 0x50, 0x10, 9, 1),
    field(85, 85, IocfgTr, 0x50, 0x10, 5, 1),
    field(86, 86, IocfgTl, 0x50, 0x10, 1, 1),
    field(87, 87, IocfgTl, 0x50, 0x10, 0, 1),
    field(88, 88, IocfgTl, 0x50, 0x10, 14, 1),
    field(89, 90, IocfgTl, 0x50, 0x10, 12, 1),
    field(91, 94, IocfgTl, 0x50, 0x10, 4, 1),
    field(95, 96, IocfgTl, 0x50, 0x10, 2, 1),
    field(97, 100, IocfgTl, 0x50, 0x10, 8, 1),
];

const PD: [FieldRange; 16] = [
    field(69, 69, IocfgTr, 0x40, 0x10, 1, 1),
    field(70, 70, IocfgTr, 0x40, 0x10, 0, 1),
    field(71, 71, IocfgTr, 0x40, 0x10, 16, 1),
    field(72, 73, IocfgTr, 0x40, 0x10, 14, 1),
    field(74, 74, IocfgTr, 0x40, 0x10, 4, 1),
    field(75, 77, IocfgTr, 0x40, 0x10, 6, 1),
    field(78, 79, IocfgTr, 0x40, 0x10, 2, 1),
    field(80, 84, IocfgTr, 0x40, 0x10, 9, 1),
    field(85, 85, IocfgTr, 0x40, 0x10, 5, 1),
    field(86, 86, IocfgTl, 0x40, 0x10, 1, 1),
    field(87, 87, IocfgTl, 0x40, 0x10, 0, 1),
    field(88, 88, IocfgTl, 0x40, 0x10, 14, 1),
    field(89, 90, IocfgTl, 0x40, 0x10, 12, 1),
    field(91, 94, IocfgTl, 0x40, 0x10, 4, 1),
    field(95, 96, IocfgTl, 0x40, 0x10, 2, 1),
    field(97, 100, IocfgTl, 0x40, 0x10, 8, 1),
];

// Pins 3 and 4 (I2C) have a single drive bit.
const DRV: [FieldRange; 56] = [
    field(0, 0, IocfgRb, 0x10, 0x10, 21, 3),
    field(1, 2, IocfgLt, 0x10, 0x10, 0, 3),
    field(3, 4, IocfgLb, 0x00, 0x10, 0, 1),
    field(5, 5, IocfgRb, 0x00, 0x10, 0, 3),
    field(6, 6, IocfgRb, 0x00, 0x10, 21, 3),
    field(7, 10, IocfgLt, 0x00, 0x10, 0, 3),
    field(11, 12, IocfgRb, 0x00, 0x10, 24, 3),
    field(13, 14, IocfgRb, 0x10, 0x10, 0, 3),
    field(15, 20, IocfgRb, 0x00, 0x10, 3, 3),
    field(21, 23, IocfgRt, 0x10, 0x10, 6, 3),
    field(24, 24, IocfgRt, 0x10, 0x10, 24, 3),
    field(25, 25, IocfgRt, 0x10, 0x10, 21, 3),
    field(26, 27, IocfgRt, 0x10, 0x10, 15, 3),
    field(28, 28, IocfgRt, 0x10, 0x10, 27, 3),
    field(29, 29, IocfgRt, 0x20, 0x10, 0, 3),
    field(30, 30, IocfgRt, 0x20, 0x10, 9, 3),
    field(31, 31, IocfgRt, 0x20, 0x10, 6, 3),
    field(32, 32, IocfgRt, 0x20, 0x10, 3, 3),
    field(33, 33, IocfgLt, 0x00, 0x10, 12, 3),
    field(34, 34, IocfgLt, 0x00, 0x10, 24, 3),
    field(35, 35, IocfgLt, 0x00, 0x10, 21, 3),
    field(36, 37, IocfgLt, 0x00, 0x10, 15, 3),
    field(38, 38, IocfgLt, 0x00, 0x10, 27, 3),
    field(39, 39, IocfgRb, 0x10, 0x10, 27, 3),
    field(40, 40, IocfgRb, 0x20, 0x10, 0, 3),
    field(41, 41, IocfgRb, 0x10, 0x10, 6, 3),
    field(42, 43, IocfgRb, 0x20, 0x10, 9, 3),
    field(44, 45, IocfgRb, 0x20, 0x10, 3, 3),
    field(46, 47, IocfgRb, 0x20, 0x10, 21, 3),
    field(48, 49, IocfgRb, 0x20, 0x10, 15, 3),
    field(50, 57, IocfgRt, 0x00, 0x10, 6, 3),
    field(58, 58, IocfgRt, 0x00, 0x10, 3, 3),
    field(59, 59, IocfgRt, 0x00, 0x10, 0, 3),
    field(60, 61, IocfgRt, 0x10, 0x10, 0, 3),
    field(62, 62, IocfgRb, 0x10, 0x10, 15, 3),
    field(63, 63, IocfgRb, 0x10, 0x10, 12, 3),
    field(64, 64, IocfgRb, 0x10, 0x10, 9, 3),
    field(65, 65, IocfgRb, 0x10, 0x10, 18, 3),
    field(66, 68, IocfgLb, 0x00, 0x10, 2, 3),
    field(69, 69, IocfgTr, 0x00, 0x10, 3, 3),
    field(70, 70, IocfgTr, 0x00, 0x10, 0, 3),
    field(71, 71, IocfgTr, 0x10, 0x10, 18, 3),
    field(72, 73, IocfgTr, 0x10, 0x10, 12, 3),
    field(74, 77, IocfgTr, 0x00, 0x10, 15, 3),
    field(78, 79, IocfgTr, 0x00, 0x10, 6, 3),
    field(80, 80, IocfgTr, 0x00, 0x10, 27, 3),
    field(81, 84, IocfgTr, 0x10, 0x10, 0, 3),
    field(85, 85, IocfgTr, 0x00, 0x10, 12, 3),
    field(86, 86, IocfgTl, 0x00, 0x10, 3, 3),
    field(87, 87, IocfgTl, 0x00, 0x10, 0, 3),
    field(88, 88, IocfgTl, 0x10, 0x10, 12, 3),
    field(89, 90, IocfgTl, 0x10, 0x10, 6, 3),
    field(91, 94, IocfgTl, 0x00, 0x10, 12, 3),
    field(95, 96, IocfgTl, 0x00, 0x10, 6, 3),
    field(97, 98, IocfgTl, 0x00, 0x10, 24, 3),
    field(99, 100, IocfgTl, 0x10, 0x10, 2, 3),
];

// Resistor-pair pull control, pins 0-68.
const PUPD: [FieldRange; 35] = [
    field(0, 0, IocfgRb, 0x60, 0x10, 17, 1),
    field(1, 2, IocfgLt, 0x30, 0x10, 10, 1),
    field(3, 4, IocfgLb, 0x40, 0x10, 0, 1),
    field(5, 6, IocfgRb, 0x60, 0x10, 0, 1),
    field(7, 10, IocfgLt, 0x30, 0x10, 0, 1),
    field(11, 14, IocfgRb, 0x60, 0x10, 8, 1),
    field(15, 20, IocfgRb, 0x60, 0x10, 2, 1),
    field(21, 23, IocfgRt, 0x40, 0x10, 12, 1),
    field(24, 24, IocfgRt, 0x40, 0x10, 18, 1),
    field(25, 25, IocfgRt, 0x40, 0x10, 17, 1),
    field(26, 27, IocfgRt, 0x40, 0x10, 15, 1),
    field(28, 29, IocfgRt, 0x40, 0x10, 19, 1),
    field(30, 30, IocfgRt, 0x40, 0x10, 23, 1),
    field(31, 31, IocfgRt, 0x40, 0x10, 22, 1),
    field(32, 32, IocfgRt, 0x40, 0x10, 21, 1),
    field(33, 33, IocfgLt, 0x30, 0x10, 4, 1),
    field(34, 34, IocfgLt, 0x30, 0x10, 8, 1),
    field(35, 35, IocfgLt, 0x30, 0x10, 7, 1),
    field(36, 37, IocfgLt, 0x30, 0x10, 5, 1),
    field(38, 38, IocfgLt, 0x30, 0x10, 9, 1),
    field(39, 40, IocfgRb, 0x60, 0x10, 18, 1),
    field(41, 41, IocfgRb, 0x60, 0x10, 12, 1),
    field(42, 43, IocfgRb, 0x60, 0x10, 23, 1),
    field(44, 45, IocfgRb, 0x60, 0x10, 21, 1),
    field(46, 47, IocfgRb, 0x60, 0x10, 27, 1),
    field(48, 49, IocfgRb, 0x60, 0x10, 25, 1),
    field(50, 57, IocfgRt, 0x40, 0x10, 2, 1),
    field(58, 58, IocfgRt, 0x40, 0x10, 1, 1),
    field(59, 59, IocfgRt, 0x40, 0x10, 0, 1),
    field(60, 61, IocfgRt, 0x40, 0x10, 10, 1),
    field(62, 62, IocfgRb, 0x60, 0x10, 15, 1),
    field(63, 63, IocfgRb, 0x60, 0x10, 14, 1),
    field(64, 64, IocfgRb, 0x60, 0x10, 13, 1),
    field(65, 65, IocfgRb, 0x60, 0x10, 16, 1),
    field(66, 68, IocfgLb, 0x40, 0x10, 2, 1),
];

const R0: [FieldRange; 35] = [
    field(0, 0, IocfgRb, 0x70, 0x10, 17, 1),
    field(1, 2, IocfgLt, 0x40, 0x10, 10, 1),
    field(3, 4, IocfgLb, 0x50, 0x10, 0, 1),
    field(5, 6, IocfgRb, 0x70, 0x10, 0, 1),
    field(7, 10, IocfgLt, 0x40, 0x10, 0, 1),
    field(11, 14, IocfgRb, 0x70, 0x10, 8, 1),
    field(15, 20, IocfgRb, 0x70, 0x10, 2, 1),
    field(21, 23, IocfgRt, 0x50, 0x10, 12, 1),
    field(24, 24, IocfgRt, 0x50, 0x10, 18, 1),
    field(25, 25, IocfgRt, 0x50, 0x10, 17, 1),
    field(26, 27, IocfgRt, 0x50, 0x10, 15, 1),
    field(28, 29, IocfgRt, 0x50, 0x10, 19, 1),
    field(30, 30, IocfgRt, 0x50, 0x10, 23, 1),
    field(31, 31, IocfgRt, 0x50, 0x10, 22, 1),
    field(32, 32, IocfgRt, 0x50, 0x10, 21, 1),
    field(33, 33, IocfgLt, 0x40, 0x10, 4, 1),
    field(34, 34, IocfgLt, 0x40, 0x10, 8, 1),
    field(35, 35, IocfgLt, 0x40, 0x10, 7, 1),
    field(36, 37, IocfgLt, 0x40, 0x10, 5, 1),
    field(38, 38, IocfgLt, 0x40, 0x10, 9, 1),
    field(39, 40, IocfgRb, 0x70, 0x10, 18, 1),
    field(41, 41, IocfgRb, 0x70, 0x10, 12, 1),
    field(42, 43, IocfgRb, 0x70, 0x10, 23, 1),
    field(44, 45, IocfgRb, 0x70, 0x10, 21, 1),
    field(46, 47, IocfgRb, 0x70, 0x10, 27, 1),
    field(48, 49, IocfgRb, 0x70, 0x10, 25, 1),
    field(50, 57, IocfgRt, 0x50, 0x10, 2, 1),
    field(58, 58, IocfgRt, 0x50, 0x10, 1, 1),
    field(59, 59, IocfgRt, 0x50, 0x10, 0, 1),
    field(60, 61, IocfgRt, 0x50, 0x10, 10, 1),
    field(62, 62, IocfgRb, 0x70, 0x10, 15, 1),
    field(63, 63, IocfgRb, 0x70, 0x10, 14, 1),
    field(64, 64, IocfgRb, 0x70, 0x10, 13, 1),
    field(65, 65, IocfgRb, 0x70, 0x10, 16, 1),
    field(66, 68, IocfgLb, 0x50, 0x10, 2, 1),
];

const R1: [FieldRange; 35] = [
    field(0, 0, IocfgRb, 0x80, 0x10, 17, 1),
    field(1, 2, IocfgLt, 0x50, 0x10, 10, 1),
    field(3, 4, IocfgLb, 0x60, 0x10, 0, 1),
    field(5, 6, IocfgRb, 0x80, 0x10, 0, 1),
    field(7, 10, IocfgLt, 0x50, 0x10, 0, 1),
    field(11, 14, IocfgRb, 0x80, 0x10, 8, 1),
    field(15, 20, IocfgRb, 0x80, 0x10, 2, 1),
    field(21, 23, IocfgRt, 0x60, 0x10, 12, 1),
    field(24, 24, IocfgRt, 0x60, 0x10, 18, 1),
    field(25, 25, IocfgRt, 0x60, 0x10, 17, 1),
    field(26, 27, IocfgRt, 0x60, 0x10, 15, 1),
    field(28, 29, IocfgRt, 0x60, 0x10, 19, 1),
    field(30, 30, IocfgRt, 0x60, 0x10, 23, 1),
    field(31, 31, IocfgRt, 0x60, 0x10, 22, 1),
    field(32, 32, IocfgRt, 0x60, 0x10, 21, 1),
    field(33, 33, IocfgLt, 0x50, 0x10, 4, 1),
    field(34, 34, IocfgLt, 0x50, 0x10, 8, 1),
    field(35, 35, IocfgLt, 0x50, 0x10, 7, 1),
    field(36, 37, IocfgLt, 0x50, 0x10, 5, 1),
    field(38, 38, IocfgLt, 0x50, 0x10, 9, 1),
    field(39, 40, IocfgRb, 0x80, 0x10, 18, 1),
    field(41, 41, IocfgRb, 0x80, 0x10, 12, 1),
    field(42, 43, IocfgRb, 0x80, 0x10, 23, 1),
    field(44, 45, IocfgRb, 0x80, 0x10, 21, 1),
    field(46, 47, IocfgRb, 0x80, 0x10, 27, 1),
    field(48, 49, IocfgRb, 0x80, 0x10, 25, 1),
    field(50, 57, IocfgRt, 0x60, 0x10, 2, 1),
    field(58, 58, IocfgRt, 0x60, 0x10, 1, 1),
    field(59, 59, IocfgRt, 0x60, 0x10, 0, 1),
    field(60, 61, IocfgRt, 0x60, 0x10, 10, 1),
    field(62, 62, IocfgRb, 0x80, 0x10, 15, 1),
    field(63, 63, IocfgRb, 0x80, 0x10, 14, 1),
    field(64, 64, IocfgRb, 0x80, 0x10, 13, 1),
    field(65, 65, IocfgRb, 0x80, 0x10, 16, 1),
    field(66, 68, IocfgLb, 0x60, 0x10, 2, 1),
];


const NONE: &[FieldRange] = &[];

// No combined pull enable/select on this SoC.
const FIELDS: [&[FieldRange]; Property::COUNT] = {
    let mut fields = [NONE; Property::COUNT];
    fields[Property::Mode.index()] = &MODE;
    fields[Property::Dir.index()] = &DIR;
    fields[Property::Di.index()] = &DI;
    fields[Property::Do.index()] = &DO;
    fields[Property::Smt.index()] = &SMT;
    fields[Property::Ies.index()] = &IES;
    fields[Property::Drv.index()] = &DRV;
    fields[Property::Pu.index()] = &PU;
    fields[Property::Pd.index()] = &PD;
    fields[Property::Pupd.index()] = &PUPD;
    fields[Property::R0.index()] = &R0;
    fields[Property::R1.index()] = &R1;
    fields
};

const IO_TYPES: [IoTypeDesc; 2] = [
    IoTypeDesc {
        name: "18OD33",
        bias: BiasStrategy::PupdR1R0,
        drive: DriveStrategy::V1,
        input_enable: InputEnableStrategy::V1,
    },
    IoTypeDesc {
        name: "18A01",
        bias: BiasStrategy::PuPd,
        drive: DriveStrategy::V1,
        input_enable: InputEnableStrategy::V1,
    },
];

const PINS: [PinDesc; 101] = [
    type0(0, "SYS_WATCHDOG"),
    type0(1, "WF2G_LED"),
    type0(2, "WF5G_LED"),
    type0(3, "I2C_SCL"),
    type0(4, "I2C_SDA"),
    type0(5, "GPIO_0"),
    type0(6, "GPIO_1"),
    type0(7, "GPIO_2"),
    type0(8, "GPIO_3"),
    type0(9, "GPIO_4"),
    type0(10, "GPIO_5"),
    type0(11, "GPIO_6"),
    type0(12, "GPIO_7"),
    type0(13, "GPIO_8"),
    type0(14, "GPIO_9"),
    type0(15, "GPIO_10"),
    type0(16, "GPIO_11"),
    type0(17, "GPIO_12"),
    type0(18, "GPIO_13"),
    type0(19, "GPIO_14"),
    type0(20, "GPIO_15"),
    type0(21, "PWM0"),
    type0(22, "PWM1"),
    type0(23, "SPI0_CLK"),
    type0(24, "SPI0_MOSI"),
    type0(25, "SPI0_MISO"),
    type0(26, "SPI0_CS"),
    type0(27, "SPI0_HOLD"),
    type0(28, "SPI0_WP"),
    type0(29, "SPI1_CLK"),
    type0(30, "SPI1_MOSI"),
    type0(31, "SPI1_MISO"),
    type0(32, "SPI1_CS"),
    type0(33, "SPI2_CLK"),
    type0(34, "SPI2_MOSI"),
    type0(35, "SPI2_MISO"),
    type0(36, "SPI2_CS"),
    type0(37, "SPI2_HOLD"),
    type0(38, "SPI2_WP"),
    type0(39, "UART0_RXD"),
    type0(40, "UART0_TXD"),
    type0(41, "PCIE_PERESET_N"),
    type0(42, "UART1_RXD"),
    type0(43, "UART1_TXD"),
    type0(44, "UART1_CTS"),
    type0(45, "UART1_RTS"),
    type0(46, "UART2_RXD"),
    type0(47, "UART2_TXD"),
    type0(48, "UART2_CTS"),
    type0(49, "UART2_RTS"),
    type0(50, "EMMC_DATA_0"),
    type0(51, "EMMC_DATA_1"),
    type0(52, "EMMC_DATA_2"),
    type0(53, "EMMC_DATA_3"),
    type0(54, "EMMC_DATA_4"),
    type0(55, "EMMC_DATA_5"),
    type0(56, "EMMC_DATA_6"),
    type0(57, "EMMC_DATA_7"),
    type0(58, "EMMC_CMD"),
    type0(59, "EMMC_CK"),
    type0(60, "EMMC_DSL"),
    type0(61, "EMMC_RSTB"),
    type0(62, "PCM_DTX"),
    type0(63, "PCM_DRX"),
    type0(64, "PCM_CLK"),
    type0(65, "PCM_FS"),
    type0(66, "MT7531_INT"),
    type0(67, "SMI_MDC"),
    type0(68, "SMI_MDIO"),
    type1(69, "WF0_DIG_RESETB"),
    type1(70, "WF0_CBA_RESETB"),
    type1(71, "WF0_XO_REQ"),
    type1(72, "WF0_TOP_CLK"),
    type1(73, "WF0_TOP_DATA"),
    type1(74, "WF0_HB1"),
    type1(75, "WF0_HB2"),
    type1(76, "WF0_HB3"),
    type1(77, "WF0_HB4"),
    type1(78, "WF0_HB0"),
    type1(79, "WF0_HB0_B"),
    type1(80, "WF0_HB5"),
    type1(81, "WF0_HB6"),
    type1(82, "WF0_HB7"),
    type1(83, "WF0_HB8"),
    type1(84, "WF0_HB9"),
    type1(85, "WF0_HB10"),
    type1(86, "WF1_DIG_RESETB"),
    type1(87, "WF1_CBA_RESETB"),
    type1(88, "WF1_XO_REQ"),
    type1(89, "WF1_TOP_CLK"),
    type1(90, "WF1_TOP_DATA"),
    type1(91, "WF1_HB1"),
    type1(92, "WF1_HB2"),
    type1(93, "WF1_HB3"),
    type1(94, "WF1_HB4"),
    type1(95, "WF1_HB0"),
    type1(96, "WF1_HB0_B"),
    type1(97, "WF1_HB5"),
    type1(98, "WF1_HB6"),
    type1(99, "WF1_HB7"),
    type1(100, "WF1_HB8"),
];

const GROUPS: [GroupDesc; 35] = [
    group!("watchdog", [0], 1),
    group!("wifi_led", [1, 2], 1),
    group!("i2c", [3, 4], 1),
    group!("uart1_0", [7, 8, 9, 10], 3),
    group!("pcie_clk", [9], 1),
    group!("pcie_wake", [10], 1),
    group!("spi1_0", [11, 12, 13, 14], 3),
    group!("pwm1_1", [20], 2),
    group!("pwm0", [21], 1),
    group!("pwm1_0", [22], 1),
    group!("emmc_45", [22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32], 2),
    group!("snfi", [23, 24, 25, 26, 27, 28], 1),
    group!("spi1_1", [23, 24, 25, 26], 3),
    group!("uart1_1", [23, 24, 25, 26], 4),
    group!("spi1_2", [29, 30, 31, 32], 1),
    group!("uart1_2", [29, 30, 31, 32], 3),
    group!("uart2_0", [29, 30, 31, 32], 4),
    group!("spi0", [33, 34, 35, 36], 1),
    group!("spi0_wp_hold", [37, 38], 1),
    group!("uart2_1", [33, 34, 35, 36], 3),
    group!("uart1_3_rx_tx", [35, 36], 2),
    group!("uart1_3_cts_rts", [37, 38], 2),
    group!("spi1_3", [33, 34, 35, 36], 4),
    group!("uart0", [39, 40], 1),
    group!("switch_int", [66], 1),
    group!("mdc_mdio", [67, 68], 1),
    group!("pcie_pereset", [41], 1),
    group!("uart1", [42, 43, 44, 45], 1),
    group!("uart2", [46, 47, 48, 49], 1),
    group!("emmc_51", [50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61], 1),
    group!("pcm", [62, 63, 64, 65], 1),
    group!("i2s", [62, 63, 64, 65], 1),
    group!("wf_2g", [74, 75, 76, 77, 78, 79, 80, 81, 82, 83], 1),
    group!("wf_5g", [91, 92, 93, 94, 95, 96, 97, 98, 99, 100], 1),
    group!("wf_dbdc", [74, 75, 76, 77, 78, 79, 80, 81, 82, 83, 84, 85], 2),
];

const FUNCTIONS: [FunctionDesc; 12] = [
    FunctionDesc {
        name: "audio",
        groups: &["pcm", "i2s"],
    },
    FunctionDesc {
        name: "emmc",
        groups: &["emmc_45", "emmc_51"],
    },
    FunctionDesc {
        name: "eth",
        groups: &["switch_int", "mdc_mdio"],
    },
    FunctionDesc {
        name: "i2c",
        groups: &["i2c"],
    },
    FunctionDesc {
        name: "led",
        groups: &["wifi_led"],
    },
    FunctionDesc {
        name: "flash",
        groups: &["snfi"],
    },
    FunctionDesc {
        name: "pcie",
        groups: &["pcie_clk", "pcie_wake", "pcie_pereset"],
    },
    FunctionDesc {
        name: "pwm",
        groups: &["pwm0", "pwm1_0", "pwm1_1"],
    },
    FunctionDesc {
        name: "spi",
        groups: &["spi0", "spi0_wp_hold", "spi1_0", "spi1_1", "spi1_2", "spi1_3"],
    },
    FunctionDesc {
        name: "uart",
        groups: &[
            "uart1_0",
            "uart1_1",
            "uart1_2",
            "uart1_3_rx_tx",
            "uart1_3_cts_rts",
            "uart2_0",
            "uart2_1",
            "uart0",
            "uart1",
            "uart2",
        ],
    },
    FunctionDesc {
        name: "watchdog",
        groups: &["watchdog"],
    },
    FunctionDesc {
        name: "wifi",
        groups: &["wf_2g", "wf_5g", "wf_dbdc"],
    },
];

const_assert_eq!(PINS.len(), PIN_COUNT);
const_assert_eq!(BASE_NAMES.len(), Bank::COUNT);
const_assert_eq!(IO_TYPES.len(), IO_TYPE_GRP1 as usize + 1);

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------
