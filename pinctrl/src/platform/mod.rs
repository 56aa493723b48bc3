/*
 * SPDX-License-Identifier: BlueOak-1.0.0
 */

pub mod mediatek;

pub use mediatek::soc_for_compatible;
