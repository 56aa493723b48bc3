/*
 * SPDX-License-Identifier: BlueOak-1.0.0
 */

//! Static description of one SoC's pin controller.

use {
    super::{
        error::*,
        field::{find, FieldRange, Property},
        strategy::{BiasStrategy, DriveStrategy, InputEnableStrategy},
    },
    bitflags::bitflags,
    snafu::{ensure, OptionExt},
};

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// Drive current range a pin supports, in milliamps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DriveGroup {
    pub min_ma: u32,
    pub max_ma: u32,
    pub step_ma: u32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PinDesc {
    pub number: u16,
    pub name: &'static str,
    pub drive: DriveGroup,
    /// Index into [`SocData::io_types`].
    pub io_type: u8,
}

/// One pin of a group and the mode value selecting the group's function on it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PinMux {
    pub pin: u16,
    pub function: u8,
}

#[derive(Copy, Clone, Debug)]
pub struct GroupDesc {
    pub name: &'static str,
    pub pins: &'static [PinMux],
}

#[derive(Copy, Clone, Debug)]
pub struct FunctionDesc {
    pub name: &'static str,
    pub groups: &'static [&'static str],
}

/// Electrical algorithms shared by a class of pins.
#[derive(Copy, Clone, Debug)]
pub struct IoTypeDesc {
    pub name: &'static str,
    pub bias: BiasStrategy,
    pub drive: DriveStrategy,
    pub input_enable: InputEnableStrategy,
}

/// Everything SoC specific the pin controller needs.
#[derive(Copy, Clone, Debug)]
pub struct SocData {
    pub name: &'static str,
    pub compatible: &'static str,
    /// Field tables indexed by [`Property::index`]. An empty table means the property does not
    /// exist on this SoC.
    pub fields: [&'static [FieldRange]; Property::COUNT],
    pub pins: &'static [PinDesc],
    pub groups: &'static [GroupDesc],
    pub functions: &'static [FunctionDesc],
    pub io_types: &'static [IoTypeDesc],
    /// Names of the register banks in bank index order.
    pub base_names: &'static [&'static str],
    /// Mode value that hands a pin to the GPIO block.
    pub gpio_mode: u32,
}

bitflags! {
    /// Properties a pin has a field for.
    pub struct Capabilities: u16 {
        const MODE = 1 << 0;
        const DIR = 1 << 1;
        const DI = 1 << 2;
        const DO = 1 << 3;
        const SMT = 1 << 4;
        const IES = 1 << 5;
        const DRV = 1 << 6;
        const PU = 1 << 7;
        const PD = 1 << 8;
        const PULLEN = 1 << 9;
        const PULLSEL = 1 << 10;
        const PUPD = 1 << 11;
        const R0 = 1 << 12;
        const R1 = 1 << 13;
    }
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl DriveGroup {
    /// 4 to 16 mA in 4 mA steps.
    pub const GRP0: Self = Self::new(4, 16, 4);
    /// 2 to 8 mA in 2 mA steps.
    pub const GRP2: Self = Self::new(2, 8, 2);
    /// 2 to 16 mA in 2 mA steps.
    pub const GRP4: Self = Self::new(2, 16, 2);

    pub const fn new(min_ma: u32, max_ma: u32, step_ma: u32) -> Self {
        Self {
            min_ma,
            max_ma,
            step_ma,
        }
    }

    /// A non-zero step that both ends of the range are multiples of.
    pub const fn is_valid(&self) -> bool {
        self.step_ma != 0
            && self.min_ma >= self.step_ma
            && self.min_ma <= self.max_ma
            && self.min_ma % self.step_ma == 0
            && self.max_ma % self.step_ma == 0
    }

    /// Drive level selecting `milliamps`, if the group supports that current.
    pub const fn level_for(&self, milliamps: u32) -> Option<u32> {
        if !self.is_valid()
            || milliamps < self.min_ma
            || milliamps > self.max_ma
            || milliamps % self.step_ma != 0
        {
            None
        } else {
            Some(milliamps / self.step_ma - 1)
        }
    }

    /// Highest level [`level_for`](Self::level_for) can return.
    pub const fn max_level(&self) -> u32 {
        if self.is_valid() {
            self.max_ma / self.step_ma - 1
        } else {
            0
        }
    }

    /// Current selected by `level`, if the level lies within the group.
    pub const fn milliamps_for(&self, level: u32) -> Option<u32> {
        if !self.is_valid() || level > self.max_level() {
            return None;
        }
        match level.checked_add(1) {
            Some(steps) => steps.checked_mul(self.step_ma),
            None => None,
        }
    }
}

impl PinDesc {
    pub const fn new(number: u16, name: &'static str, drive: DriveGroup, io_type: u8) -> Self {
        Self {
            number,
            name,
            drive,
            io_type,
        }
    }
}

impl PinMux {
    pub const fn new(pin: u16, function: u8) -> Self {
        Self { pin, function }
    }
}

impl GroupDesc {
    pub fn contains(&self, pin: usize) -> bool {
        self.pins.iter().any(|m| m.pin as usize == pin)
    }
}

impl FunctionDesc {
    pub fn has_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| *g == group)
    }
}

impl Capabilities {
    pub const fn of(property: Property) -> Self {
        Self::from_bits_truncate(1 << property.index())
    }

    pub fn supports(&self, property: Property) -> bool {
        self.contains(Self::of(property))
    }
}

impl SocData {
    pub fn table(&self, property: Property) -> &'static [FieldRange] {
        self.fields[property.index()]
    }

    pub fn pin_count(&self) -> usize {
        self.pins.len()
    }

    pub fn pin(&self, pin: usize) -> Result<&'static PinDesc> {
        self.pins.get(pin).context(InvalidPinSnafu { pin })
    }

    pub fn io_type(&self, pin: usize) -> Result<&'static IoTypeDesc> {
        let desc = self.pin(pin)?;
        self.io_types
            .get(desc.io_type as usize)
            .context(MalformedCatalogSnafu {
                what: "pin uses an unknown io type",
                name: desc.name,
            })
    }

    pub fn group(&self, name: &str) -> Result<&'static GroupDesc> {
        self.groups
            .iter()
            .find(|g| g.name == name)
            .context(UnknownGroupSnafu)
    }

    pub fn function(&self, name: &str) -> Result<&'static FunctionDesc> {
        self.functions
            .iter()
            .find(|f| f.name == name)
            .context(UnknownFunctionSnafu)
    }

    /// Functions listing `group`.
    pub fn functions_of<'a>(
        &self,
        group: &'a str,
    ) -> impl Iterator<Item = &'static FunctionDesc> + 'a {
        let functions: &'static [FunctionDesc] = self.functions;
        functions.iter().filter(move |f| f.has_group(group))
    }

    /// Properties `pin` has a field for. Empty for unknown pins.
    pub fn capabilities(&self, pin: usize) -> Capabilities {
        if pin >= self.pins.len() {
            return Capabilities::empty();
        }
        Property::ALL
            .iter()
            .filter(|p| find(self.table(**p), pin).is_some())
            .fold(Capabilities::empty(), |caps, p| caps | Capabilities::of(*p))
    }

    /// Check the catalog for consistency.
    ///
    /// Table checks run first, then per-pin coverage for the properties each io type relies on,
    /// then group and function cross references.
    pub fn validate(&self) -> Result<()> {
        for property in Property::ALL {
            self.validate_table(property)?;
        }

        for (index, desc) in self.pins.iter().enumerate() {
            ensure!(
                desc.number as usize == index,
                MalformedCatalogSnafu {
                    what: "pin descriptors are not dense",
                    name: desc.name,
                }
            );
            ensure!(
                desc.drive.is_valid(),
                MalformedCatalogSnafu {
                    what: "pin has a malformed drive group",
                    name: desc.name,
                }
            );
            let io = self.io_type(index)?;
            for property in required_properties(io, self.capabilities(index)) {
                ensure!(
                    find(self.table(property), index).is_some(),
                    MalformedTableSnafu {
                        property,
                        pin: index,
                        defect: TableDefect::Gap,
                    }
                );
            }
        }

        for group in self.groups {
            ensure!(
                !group.pins.is_empty(),
                MalformedCatalogSnafu {
                    what: "group has no pins",
                    name: group.name,
                }
            );
            for m in group.pins {
                ensure!(
                    (m.pin as usize) < self.pins.len(),
                    MalformedCatalogSnafu {
                        what: "group refers to an unknown pin",
                        name: group.name,
                    }
                );
            }
        }

        for function in self.functions {
            for group in function.groups {
                ensure!(
                    self.groups.iter().any(|g| g.name == *group),
                    MalformedCatalogSnafu {
                        what: "function refers to an unknown group",
                        name: function.name,
                    }
                );
            }
        }

        Ok(())
    }

    fn validate_table(&self, property: Property) -> Result<()> {
        let table = self.table(property);
        for (index, range) in table.iter().enumerate() {
            let pin = range.start as usize;
            let defect = if range.start > range.end || range.end as usize >= self.pins.len() {
                Some(TableDefect::BadRange)
            } else if range.bank as usize >= self.base_names.len() {
                Some(TableDefect::BadBank)
            } else if range.width == 0 || range.reg_bits > 32 || range.width > range.reg_bits {
                Some(TableDefect::BadWidth)
            } else if range.stride == 0 && spans_registers(range) {
                Some(TableDefect::BadStride)
            } else {
                None
            };
            if let Some(defect) = defect {
                return MalformedTableSnafu {
                    property,
                    pin,
                    defect,
                }
                .fail();
            }

            if let Some(other) = table[index + 1..].iter().find(|o| o.overlaps(range)) {
                return MalformedTableSnafu {
                    property,
                    pin: range.start.max(other.start) as usize,
                    defect: TableDefect::Overlap,
                }
                .fail();
            }
        }
        Ok(())
    }
}

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

fn spans_registers(range: &FieldRange) -> bool {
    let first = range.locate(range.start as usize);
    let last = range.locate(range.end as usize);
    if first.straddles() || last.straddles() {
        return true;
    }
    first.offset != last.offset
}

/// Properties the io type's algorithms touch on a pin.
///
/// A direct pull pin may use either the separate pull-up/pull-down bits or the combined
/// enable/select pair, so the pair it already partly has is the one that must be complete.
fn required_properties(io: &IoTypeDesc, caps: Capabilities) -> impl Iterator<Item = Property> {
    let mut required = Capabilities::MODE | Capabilities::DIR | Capabilities::DI | Capabilities::DO;
    match io.drive {
        DriveStrategy::V1 => required |= Capabilities::DRV,
    }
    match io.input_enable {
        InputEnableStrategy::V1 => required |= Capabilities::IES,
    }
    match io.bias {
        BiasStrategy::PuPd => {
            if caps.intersects(Capabilities::PULLEN | Capabilities::PULLSEL)
                && !caps.intersects(Capabilities::PU | Capabilities::PD)
            {
                required |= Capabilities::PULLEN | Capabilities::PULLSEL;
            } else {
                required |= Capabilities::PU | Capabilities::PD;
            }
        }
        BiasStrategy::PupdR1R0 => {
            required |= Capabilities::PUPD | Capabilities::R0 | Capabilities::R1;
        }
    }
    Property::ALL
        .into_iter()
        .filter(move |p| required.supports(*p))
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------
