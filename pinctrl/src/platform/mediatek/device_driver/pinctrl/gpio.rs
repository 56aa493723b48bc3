/*
 * SPDX-License-Identifier: BlueOak-1.0.0
 */

//! GPIO operations on pins muxed to the GPIO block.

use {
    super::{error::Result, Pinctrl, Property},
    crate::mmio::interface::RegisterWindow,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

impl<W: RegisterWindow> Pinctrl<'_, W> {
    /// Hand `pin` over to the GPIO block.
    pub fn gpio_request(&self, pin: usize) -> Result<()> {
        self.set_mux(pin, self.soc.gpio_mode)
    }

    pub fn direction_input(&self, pin: usize) -> Result<()> {
        self.set_property(pin, Property::Dir, 0)
    }

    /// Switch to output. The level is latched first so the pin never drives a stale value.
    pub fn direction_output(&self, pin: usize, level: bool) -> Result<()> {
        let out = self.locate(Property::Do, pin)?;
        let dir = self.locate(Property::Dir, pin)?;
        self.write_field(pin, Property::Do, &out, u32::from(level));
        self.write_field(pin, Property::Dir, &dir, 1);
        Ok(())
    }

    pub fn direction(&self, pin: usize) -> Result<Direction> {
        Ok(match self.get_property(pin, Property::Dir)? {
            0 => Direction::Input,
            _ => Direction::Output,
        })
    }

    /// Input level.
    pub fn get_value(&self, pin: usize) -> Result<bool> {
        Ok(self.get_property(pin, Property::Di)? != 0)
    }

    pub fn set_value(&self, pin: usize, level: bool) -> Result<()> {
        self.set_property(pin, Property::Do, u32::from(level))
    }
}
