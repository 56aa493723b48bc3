/*
 * SPDX-License-Identifier: BlueOak-1.0.0
 */

//! Table-driven pin controller for MediaTek SoCs.
//!
//! The engine in [`platform::mediatek::device_driver::pinctrl`] knows nothing about a particular
//! chip; each SoC is a static [`SocData`] catalog of field-range tables, pins, groups and
//! functions. The platform layer binds one register window per bank and hands both to
//! [`Pinctrl::new`].

#![cfg_attr(not(test), no_std)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::nonstandard_macro_braces)] // https://github.com/shepmaster/snafu/issues/296

pub mod console;
pub mod macros;
pub mod mmio;
pub mod platform;
pub mod sync;

pub use platform::mediatek::device_driver::pinctrl::{
    Bias, Direction, Drive, PinConfig, Pinctrl, PinctrlError, Property, Resistor, Result, SocData,
};
