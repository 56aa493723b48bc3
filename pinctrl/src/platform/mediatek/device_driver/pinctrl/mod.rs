/*
 * SPDX-License-Identifier: BlueOak-1.0.0
 */

//! MediaTek pin controller.
//!
//! A [`Pinctrl`] binds one static [`SocData`] catalog to the SoC's register banks. Every request
//! is resolved through the catalog's field tables into bit fields of registers in those banks;
//! the engine itself holds no per-SoC knowledge.
//!
//! Requests that would touch several fields are checked in full before the first write, so a
//! rejected request leaves the hardware as it was.

mod error;
mod field;
mod gpio;
mod soc;
mod strategy;

#[cfg(test)]
pub(crate) mod fixture;

pub use {error::*, field::*, gpio::Direction, soc::*, strategy::*};

use {
    crate::mmio::interface::RegisterWindow,
    bit_field::BitField,
    core::fmt,
    snafu::{ensure, OptionExt},
};

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Pin controller over the register banks `W` of one SoC.
pub struct Pinctrl<'a, W: RegisterWindow> {
    soc: &'static SocData,
    banks: &'a [W],
}

/// Mode a pin is currently muxed to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PinMuxing(pub u32);

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl fmt::Display for PinMuxing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aux Func.{}", self.0)
    }
}

impl<'a, W: RegisterWindow> Pinctrl<'a, W> {
    /// Bind `soc` to its register banks, one window per entry of `soc.base_names`, in order.
    ///
    /// The catalog is validated here once; nothing later re-checks it.
    pub fn new(soc: &'static SocData, banks: &'a [W]) -> Result<Self> {
        ensure!(
            banks.len() == soc.base_names.len(),
            BankCountMismatchSnafu {
                expected: soc.base_names.len(),
                found: banks.len(),
            }
        );
        soc.validate().map_err(|err| {
            crate::warn!("{}: catalog rejected: {}", soc.name, err);
            err
        })?;
        crate::info!(
            "{}: {} pins, {} groups, {} functions",
            soc.name,
            soc.pins.len(),
            soc.groups.len(),
            soc.functions.len()
        );
        Ok(Self { soc, banks })
    }

    pub fn soc(&self) -> &'static SocData {
        self.soc
    }

    pub fn pin_count(&self) -> usize {
        self.soc.pins.len()
    }

    pub fn pin_name(&self, pin: usize) -> Result<&'static str> {
        Ok(self.soc.pin(pin)?.name)
    }

    pub fn group_count(&self) -> usize {
        self.soc.groups.len()
    }

    pub fn group_name(&self, selector: usize) -> Option<&'static str> {
        self.soc.groups.get(selector).map(|g| g.name)
    }

    pub fn function_count(&self) -> usize {
        self.soc.functions.len()
    }

    pub fn function_name(&self, selector: usize) -> Option<&'static str> {
        self.soc.functions.get(selector).map(|f| f.name)
    }

    pub fn bank_name(&self, bank: usize) -> Option<&'static str> {
        self.soc.base_names.get(bank).copied()
    }

    pub fn capabilities(&self, pin: usize) -> Result<Capabilities> {
        self.soc.pin(pin)?;
        Ok(self.soc.capabilities(pin))
    }

    /// Where `property` of `pin` lives.
    pub fn locate(&self, property: Property, pin: usize) -> Result<FieldLocation> {
        self.soc.pin(pin)?;
        find(self.soc.table(property), pin)
            .map(|range| range.locate(pin))
            .context(UnsupportedSnafu { pin, property })
    }

    pub fn get_property(&self, pin: usize, property: Property) -> Result<u32> {
        let loc = self.locate(property, pin)?;
        Ok(self.read_field(&loc))
    }

    /// Write one field, keeping every other bit of the register(s) it lives in.
    pub fn set_property(&self, pin: usize, property: Property, value: u32) -> Result<()> {
        let loc = self.checked(pin, property, value)?;
        self.write_field(pin, property, &loc, value);
        Ok(())
    }

    /// Select mode `function` on a single pin.
    pub fn set_mux(&self, pin: usize, function: u32) -> Result<()> {
        self.set_property(pin, Property::Mode, function)
    }

    pub fn pin_muxing(&self, pin: usize) -> Result<PinMuxing> {
        self.get_property(pin, Property::Mode).map(PinMuxing)
    }

    /// Mux every pin of `group` to `function`.
    ///
    /// All pins are located and their mode values range checked before any register is
    /// written.
    pub fn apply_group(&self, group: &str, function: &str) -> Result<()> {
        let func = self.soc.function(function).map_err(|err| {
            crate::warn!("{}: no function named {}", self.soc.name, function);
            err
        })?;
        let grp = self.soc.group(group).map_err(|err| {
            crate::warn!("{}: no group named {}", self.soc.name, group);
            err
        })?;
        ensure!(
            func.has_group(grp.name),
            GroupNotInFunctionSnafu {
                group: grp.name,
                function: func.name,
            }
        );

        for mux in grp.pins {
            if let Err(err) = self.checked(mux.pin as usize, Property::Mode, mux.function.into()) {
                crate::warn!("{}: group {} rejected: {}", self.soc.name, grp.name, err);
                return Err(err);
            }
        }
        for mux in grp.pins {
            self.set_mux(mux.pin as usize, mux.function.into())?;
        }
        Ok(())
    }
}

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

impl<W: RegisterWindow> Pinctrl<'_, W> {
    /// Locate a field and make sure `value` fits it.
    fn checked(&self, pin: usize, property: Property, value: u32) -> Result<FieldLocation> {
        let loc = self.locate(property, pin)?;
        ensure!(
            value <= loc.mask(),
            ValueOutOfRangeSnafu {
                pin,
                property,
                value,
                max: loc.mask(),
            }
        );
        Ok(loc)
    }

    fn read_field(&self, loc: &FieldLocation) -> u32 {
        let bank = &self.banks[loc.bank];
        let low = bank.read(loc.offset);
        if !loc.straddles() {
            return low.get_bits(loc.bit..loc.bit + loc.width);
        }
        let low_width = loc.reg_bits - loc.bit;
        let high = bank.read(loc.offset + loc.stride);
        low.get_bits(loc.bit..loc.reg_bits) | (high.get_bits(0..loc.width - low_width) << low_width)
    }

    /// Caller has checked that `value` fits.
    fn write_field(&self, pin: usize, property: Property, loc: &FieldLocation, value: u32) {
        crate::trace!("pin {} {} <- {:#x} @ {}", pin, property, value, loc);
        let bank = &self.banks[loc.bank];
        if !loc.straddles() {
            bank.modify(loc.offset, loc.mask(), loc.bit, value);
            return;
        }
        let low_width = loc.reg_bits - loc.bit;
        let low_mask = (1u32 << low_width) - 1;
        bank.modify(loc.offset, low_mask, loc.bit, value & low_mask);
        bank.modify(loc.offset + loc.stride, loc.mask() >> low_width, 0, value >> low_width);
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use {
        super::{fixture::*, *},
        crate::mmio::interface::RegisterWindow,
    };

    #[test]
    fn bank_count_must_match() {
        let banks = [RecordingWindow::new()];
        assert!(matches!(
            Pinctrl::new(&FIXTURE, &banks),
            Err(PinctrlError::BankCountMismatch {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn locate_reports_unknown_pins_and_missing_fields() {
        let banks = banks();
        let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
        assert_eq!(
            pctl.locate(Property::Mode, 8),
            Err(PinctrlError::InvalidPin { pin: 8 })
        );
        assert_eq!(
            pctl.locate(Property::Smt, 6),
            Err(PinctrlError::Unsupported {
                pin: 6,
                property: Property::Smt
            })
        );
        assert_eq!(
            pctl.get_property(4, Property::Pupd),
            Err(PinctrlError::Unsupported {
                pin: 4,
                property: Property::Pupd
            })
        );
    }

    #[test]
    fn every_supported_field_round_trips() {
        let banks = banks();
        let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
        for pin in 0..pctl.pin_count() {
            for property in Property::ALL {
                let Ok(loc) = pctl.locate(property, pin) else {
                    continue;
                };
                for value in 0..=loc.mask() {
                    pctl.set_property(pin, property, value).unwrap();
                    assert_eq!(pctl.get_property(pin, property), Ok(value));
                }
            }
        }
    }

    #[test]
    fn writes_stay_inside_the_field() {
        for sentinel in [0xa5a5_a5a5u32, 0x5a5a_5a5a, 0xffff_ffff, 0] {
            for pin in 0..FIXTURE.pins.len() {
                for property in Property::ALL {
                    let banks = filled_banks(sentinel);
                    let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
                    let Ok(loc) = pctl.locate(property, pin) else {
                        continue;
                    };
                    let value = !pctl.get_property(pin, property).unwrap() & loc.mask();
                    pctl.set_property(pin, property, value).unwrap();

                    for (index, bank) in banks.iter().enumerate() {
                        for (offset, written) in bank.writes() {
                            let mut expected = sentinel;
                            if index == loc.bank && offset == loc.offset {
                                let low = loc.mask() << loc.bit;
                                expected = (sentinel & !low) | ((value << loc.bit) & low);
                            } else if index == loc.bank && offset == loc.offset + loc.stride {
                                let low_width = loc.reg_bits - loc.bit;
                                let high = loc.mask() >> low_width;
                                expected = (sentinel & !high) | (value >> low_width);
                            }
                            assert_eq!(
                                written, expected,
                                "{} pin {} bank {} offset {:#x}",
                                property, pin, index, offset
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn straddling_field_spans_two_registers() {
        let banks = banks();
        let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
        let loc = pctl.locate(Property::Drv, 3).unwrap();
        assert!(loc.straddles());
        pctl.set_property(3, Property::Drv, 0b101).unwrap();
        assert_eq!(banks[CFG].read(0x00), 1 << 31);
        assert_eq!(banks[CFG].read(0x10), 0b10);
        assert_eq!(pctl.get_property(3, Property::Drv), Ok(0b101));
        // Pin 4 shares the upper register and must be left alone.
        assert_eq!(pctl.get_property(4, Property::Drv), Ok(0));
    }

    #[test]
    fn narrow_registers_split_fields_at_their_width() {
        let banks = banks();
        let pctl = Pinctrl::new(&NARROW_DRV, &banks).unwrap();
        let loc = pctl.locate(Property::Drv, 3).unwrap();
        assert_eq!((loc.offset, loc.bit, loc.reg_bits), (0x00, 15, 16));
        pctl.set_property(3, Property::Drv, 0b101).unwrap();
        assert_eq!(banks[CFG].read(0x00), 1 << 15);
        assert_eq!(banks[CFG].read(0x10), 0b10);
        assert_eq!(pctl.get_property(3, Property::Drv), Ok(0b101));

        pctl.set_property(4, Property::Drv, 0b111).unwrap();
        assert_eq!(banks[CFG].read(0x10), 0b111_10);
        assert_eq!(pctl.get_property(3, Property::Drv), Ok(0b101));
        assert_eq!(pctl.get_property(4, Property::Drv), Ok(0b111));
    }

    #[test]
    fn oversize_values_are_rejected_without_writing() {
        let banks = banks();
        let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
        assert_eq!(
            pctl.set_property(1, Property::Mode, 16),
            Err(PinctrlError::ValueOutOfRange {
                pin: 1,
                property: Property::Mode,
                value: 16,
                max: 15
            })
        );
        assert!(banks.iter().all(|b| b.writes().is_empty()));
    }

    #[test]
    fn apply_group_muxes_every_pin() {
        let banks = banks();
        let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
        pctl.apply_group("spi", "spi").unwrap();
        for pin in 2..=4 {
            assert_eq!(pctl.pin_muxing(pin), Ok(PinMuxing(2)));
        }
        assert_eq!(pctl.pin_muxing(1), Ok(PinMuxing(0)));
        assert_eq!(banks[GPIO].read(0x300), 0x0002_2200);
    }

    #[test]
    fn apply_group_rejects_bad_names() {
        let banks = banks();
        let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
        assert_eq!(
            pctl.apply_group("nope", "uart"),
            Err(PinctrlError::UnknownGroup)
        );
        assert_eq!(
            pctl.apply_group("uart", "nope"),
            Err(PinctrlError::UnknownFunction)
        );
        assert_eq!(
            pctl.apply_group("spi", "uart"),
            Err(PinctrlError::GroupNotInFunction {
                group: "spi",
                function: "uart"
            })
        );
        assert!(banks.iter().all(|b| b.writes().is_empty()));
    }

    #[test]
    fn apply_group_is_all_or_nothing() {
        let banks = banks();
        let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
        pctl.set_mux(5, 7).unwrap();
        pctl.set_mux(6, 7).unwrap();
        banks[GPIO].clear_log();

        // Pin 6 asks for a mode that does not fit the 4-bit field.
        assert!(matches!(
            pctl.apply_group("wide", "spi"),
            Err(PinctrlError::ValueOutOfRange { pin: 6, .. })
        ));
        assert!(banks[GPIO].writes().is_empty());
        assert_eq!(pctl.pin_muxing(5), Ok(PinMuxing(7)));
        assert_eq!(pctl.pin_muxing(6), Ok(PinMuxing(7)));
    }

    #[test]
    fn pin_muxing_display() {
        assert_eq!(PinMuxing(3).to_string(), "Aux Func.3");
    }

    #[test]
    fn catalog_queries() {
        let banks = banks();
        let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
        assert_eq!(pctl.pin_count(), 8);
        assert_eq!(pctl.pin_name(7), Ok("P7"));
        assert_eq!(pctl.group_count(), 3);
        assert_eq!(pctl.group_name(1), Some("spi"));
        assert_eq!(pctl.group_name(3), None);
        assert_eq!(pctl.function_name(0), Some("uart"));
        assert_eq!(pctl.bank_name(1), Some("cfg"));
        let caps = pctl.capabilities(6).unwrap();
        assert!(caps.supports(Property::PullEn));
        assert!(!caps.supports(Property::Smt));
        assert!(!caps.supports(Property::Pu));
        assert_eq!(pctl.capabilities(8), Err(PinctrlError::InvalidPin { pin: 8 }));
    }

    #[test]
    fn malformed_catalogs_are_refused() {
        let banks = banks();
        assert!(matches!(
            Pinctrl::new(&OVERLAPPING_DIR, &banks),
            Err(PinctrlError::MalformedTable {
                property: Property::Dir,
                pin: 3,
                defect: TableDefect::Overlap
            })
        ));
        assert!(matches!(
            Pinctrl::new(&MISSING_R1, &banks),
            Err(PinctrlError::MalformedTable {
                property: Property::R1,
                pin: 3,
                defect: TableDefect::Gap
            })
        ));
        assert!(matches!(
            Pinctrl::new(&BAD_BANK, &banks),
            Err(PinctrlError::MalformedTable {
                property: Property::Smt,
                defect: TableDefect::BadBank,
                ..
            })
        ));
        assert!(matches!(
            Pinctrl::new(&ZERO_STEP_DRIVE, &banks),
            Err(PinctrlError::MalformedCatalog { name: "P7", .. })
        ));
        assert!(matches!(
            Pinctrl::new(&DANGLING_GROUP, &banks),
            Err(PinctrlError::MalformedCatalog { name: "spi", .. })
        ));
    }
}
