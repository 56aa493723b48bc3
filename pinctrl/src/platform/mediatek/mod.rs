/*
 * SPDX-License-Identifier: BlueOak-1.0.0
 */

//! MediaTek SoCs.

pub mod device_driver;
#[cfg(feature = "mt7986")]
pub mod drivers;
#[cfg(feature = "mt7986")]
pub mod memory;
#[cfg(feature = "mt7986")]
pub mod mt7986;

use device_driver::pinctrl::SocData;

/// Pin controller catalogs built into this crate.
static SOCS: &[&SocData] = &[
    #[cfg(feature = "mt7986")]
    &mt7986::MT7986,
];

/// Catalog for a device tree `compatible` string.
pub fn soc_for_compatible(compatible: &str) -> Option<&'static SocData> {
    SOCS.iter().copied().find(|soc| soc.compatible == compatible)
}

/// All catalogs built into this crate.
pub fn socs() -> &'static [&'static SocData] {
    SOCS
}
