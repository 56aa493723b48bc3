/*
 * SPDX-License-Identifier: BlueOak-1.0.0
 */

//! MT7986 physical memory map, pin controller part.

/// Physical devices.
#[rustfmt::skip]
pub mod map {
    pub mod mmio {
        /// GPIO mode, direction and data registers.
        pub const GPIO_BASE:     usize = 0x1001_f000;

        /// IO configuration, right-top pads.
        pub const IOCFG_RT_BASE: usize = 0x11c3_0000;
        /// IO configuration, right-bottom pads.
        pub const IOCFG_RB_BASE: usize = 0x11c4_0000;
        /// IO configuration, left-top pads.
        pub const IOCFG_LT_BASE: usize = 0x11e2_0000;
        /// IO configuration, left-bottom pads.
        pub const IOCFG_LB_BASE: usize = 0x11e3_0000;
        /// IO configuration, top-right pads.
        pub const IOCFG_TR_BASE: usize = 0x11f0_0000;
        /// IO configuration, top-left pads.
        pub const IOCFG_TL_BASE: usize = 0x11f1_0000;

        /// Size of each bank's register window.
        pub const BANK_SIZE:     usize =      0x1000;
    }
}

use {super::mt7986::Bank, map::mmio};

/// Physical base of a register bank.
pub const fn bank_base(bank: Bank) -> usize {
    match bank {
        Bank::Gpio => mmio::GPIO_BASE,
        Bank::IocfgRt => mmio::IOCFG_RT_BASE,
        Bank::IocfgRb => mmio::IOCFG_RB_BASE,
        Bank::IocfgLt => mmio::IOCFG_LT_BASE,
        Bank::IocfgLb => mmio::IOCFG_LB_BASE,
        Bank::IocfgTr => mmio::IOCFG_TR_BASE,
        Bank::IocfgTl => mmio::IOCFG_TL_BASE,
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::platform::mediatek::mt7986::{MT7986, PIN_COUNT},
        crate::platform::mediatek::device_driver::pinctrl::Property,
    };

    #[test]
    fn every_field_fits_its_bank_window() {
        for property in Property::ALL {
            for range in MT7986.table(property) {
                assert!(
                    range.span_end() <= mmio::BANK_SIZE,
                    "{} range at pin {} runs past the bank",
                    property,
                    range.start
                );
            }
        }
        assert_eq!(PIN_COUNT, MT7986.pins.len());
    }

    #[test]
    fn banks_do_not_overlap() {
        for a in Bank::ALL {
            for b in Bank::ALL {
                if a != b {
                    let (lo, hi) = (bank_base(a).min(bank_base(b)), bank_base(a).max(bank_base(b)));
                    assert!(lo + mmio::BANK_SIZE <= hi);
                }
            }
        }
    }
}
