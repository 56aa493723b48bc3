/*
 * SPDX-License-Identifier: BlueOak-1.0.0
 */

use {super::field::Property, core::fmt, snafu::Snafu};

/// What is wrong with a field-range table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TableDefect {
    /// Range is empty, reversed or runs past the last pin.
    BadRange,
    /// Range names a bank the SoC does not have.
    BadBank,
    /// Field width is zero or wider than the register.
    BadWidth,
    /// Range spans several registers but has no stride.
    BadStride,
    /// Pin is covered by two ranges of the same table.
    Overlap,
    /// Pin needs the property but no range covers it.
    Gap,
}

impl fmt::Display for TableDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TableDefect::BadRange => "bad pin range",
            TableDefect::BadBank => "unknown bank",
            TableDefect::BadWidth => "bad field width",
            TableDefect::BadStride => "zero register stride",
            TableDefect::Overlap => "pin covered twice",
            TableDefect::Gap => "pin not covered",
        })
    }
}

#[derive(Debug, Snafu, Copy, Clone, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum PinctrlError {
    #[snafu(display("Pin {} does not exist", pin))]
    InvalidPin { pin: usize },

    #[snafu(display("Pin {} has no {} field", pin, property))]
    Unsupported { pin: usize, property: Property },

    #[snafu(display(
        "Value {:#x} does not fit the {} field of pin {} (max {:#x})",
        value,
        property,
        pin,
        max
    ))]
    ValueOutOfRange {
        pin: usize,
        property: Property,
        value: u32,
        max: u32,
    },

    #[snafu(display("Pin {} cannot drive {} mA", pin, milliamps))]
    UnsupportedDriveStrength { pin: usize, milliamps: u32 },

    #[snafu(display("Unknown pin group"))]
    UnknownGroup,

    #[snafu(display("Unknown pin function"))]
    UnknownFunction,

    #[snafu(display("Group {} does not belong to function {}", group, function))]
    GroupNotInFunction {
        group: &'static str,
        function: &'static str,
    },

    #[snafu(display("Malformed {} table at pin {}: {}", property, pin, defect))]
    MalformedTable {
        property: Property,
        pin: usize,
        defect: TableDefect,
    },

    #[snafu(display("Malformed catalog: {} ({})", what, name))]
    MalformedCatalog {
        what: &'static str,
        name: &'static str,
    },

    #[snafu(display("Expected {} register banks, got {}", expected, found))]
    BankCountMismatch { expected: usize, found: usize },

    #[snafu(display("Pin {} has pull-up and pull-down enabled together", pin))]
    IllegalBiasState { pin: usize },
}

pub type Result<T, E = PinctrlError> = core::result::Result<T, E>;
