/*
 * SPDX-License-Identifier: BlueOak-1.0.0
 */

//! Binding of the MT7986 catalog to its memory-mapped banks.

use crate::{
    mmio::MmioWindow,
    platform::mediatek::{
        device_driver::pinctrl::{Pinctrl, Result},
        memory::map::mmio,
        mt7986::MT7986,
    },
};

//--------------------------------------------------------------------------------------------------
// Global instances
//--------------------------------------------------------------------------------------------------

/// One window per bank, in `mt7986::BASE_NAMES` order.
static MT7986_BANKS: [MmioWindow; 7] = unsafe {
    [
        MmioWindow::new(mmio::GPIO_BASE),
        MmioWindow::new(mmio::IOCFG_RT_BASE),
        MmioWindow::new(mmio::IOCFG_RB_BASE),
        MmioWindow::new(mmio::IOCFG_LT_BASE),
        MmioWindow::new(mmio::IOCFG_LB_BASE),
        MmioWindow::new(mmio::IOCFG_TR_BASE),
        MmioWindow::new(mmio::IOCFG_TL_BASE),
    ]
};

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Pin controller over the MT7986's physical register banks.
///
/// # Safety
///
/// The GPIO and IO configuration banks must be mapped 1:1 at their physical addresses and not
/// driven by anything else while the controller is in use.
pub unsafe fn mt7986_pinctrl() -> Result<Pinctrl<'static, MmioWindow>> {
    Pinctrl::new(&MT7986, &MT7986_BANKS)
}
