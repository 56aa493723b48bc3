/*
 * SPDX-License-Identifier: BlueOak-1.0.0
 */

//! Log sink for the crate macros.
//!
//! Nothing is printed until the embedding environment registers a console, which keeps the
//! library usable before any UART is up.

pub mod null_console;

use crate::sync::{interface::ReadWriteEx, InitStateLock};

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Console interfaces.
pub mod interface {
    use core::fmt;

    /// Console write functions.
    pub trait Write {
        /// Write a Rust format string.
        fn write_fmt(&self, args: fmt::Arguments) -> fmt::Result;
    }
}

//--------------------------------------------------------------------------------------------------
// Global instances
//--------------------------------------------------------------------------------------------------

static CONSOLE: InitStateLock<&'static (dyn interface::Write + Sync)> =
    InitStateLock::new(&null_console::NULL_CONSOLE);

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

/// Register a new console.
///
/// Call once during single-threaded setup, before the pin controller is used.
pub fn register_console(new_console: &'static (dyn interface::Write + Sync)) {
    CONSOLE.write(|con| *con = new_console);
}

/// Return a reference to the currently registered console.
///
/// This is the global console used by all printing macros.
pub fn console() -> &'static dyn interface::Write {
    CONSOLE.read(|con| *con)
}
