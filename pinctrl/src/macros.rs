/*
 * SPDX-License-Identifier: BlueOak-1.0.0
 * Copyright (c) Berkus Decker <berkus+vesper@metta.systems>
 */

use cfg_if::cfg_if;

/// Macro similar to [std](https://doc.rust-lang.org/src/std/macros.rs.html)
/// but for writing into the registered console.
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => ($crate::macros::_print(format_args!($($arg)*)));
}

/// Macro similar to [std](https://doc.rust-lang.org/src/std/macros.rs.html)
/// but for writing into the registered console.
#[macro_export]
macro_rules! println {
    () => ($crate::macros::_print(format_args!("\n")));
    ($string:expr) => ({
        $crate::macros::_print(format_args!(concat!($string, "\n")));
    });
    ($format_string:expr, $($arg:tt)*) => ({
        $crate::macros::_print(format_args!(concat!($format_string, "\n"), $($arg)*));
    })
}

#[doc(hidden)]
pub fn _print(args: core::fmt::Arguments) {
    use crate::console::{console, interface::Write};
    let _ = console().write_fmt(args);
}

cfg_if! {
    if #[cfg(feature = "trace_pinctrl")] {
        #[doc(hidden)]
        pub fn _trace(args: core::fmt::Arguments) {
            _print(args);
        }
    } else {
        #[doc(hidden)]
        #[inline(always)]
        pub fn _trace(_args: core::fmt::Arguments) {}
    }
}

//--------------------------------------------------------------------------------------------------
//--------------------------------------------------------------------------------------------------

/// Prints info text, with a newline.
#[macro_export]
macro_rules! info {
    ($string:expr) => ({
        $crate::macros::_print(format_args!(concat!("[I] ", $string, "\n")));
    });
    ($format_string:expr, $($arg:tt)*) => ({
        $crate::macros::_print(format_args!(concat!("[I] ", $format_string, "\n"), $($arg)*));
    })
}

/// Prints warning text, with a newline.
#[macro_export]
macro_rules! warn {
    ($string:expr) => ({
        $crate::macros::_print(format_args!(concat!("[W] ", $string, "\n")));
    });
    ($format_string:expr, $($arg:tt)*) => ({
        $crate::macros::_print(format_args!(concat!("[W] ", $format_string, "\n"), $($arg)*));
    })
}

/// Prints register-level trace text, with a newline.
///
/// Compiled out unless the `trace_pinctrl` feature is enabled.
#[macro_export]
macro_rules! trace {
    ($string:expr) => ({
        $crate::macros::_trace(format_args!(concat!("[T] ", $string, "\n")));
    });
    ($format_string:expr, $($arg:tt)*) => ({
        $crate::macros::_trace(format_args!(concat!("[T] ", $format_string, "\n"), $($arg)*));
    })
}
