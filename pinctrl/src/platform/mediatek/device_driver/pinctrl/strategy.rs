/*
 * SPDX-License-Identifier: BlueOak-1.0.0
 */

//! Electrical configuration: pull resistors, drive strength, input buffer, schmitt trigger.
//!
//! Each io type of a SoC names one algorithm per concern; the catalog picks them, this module
//! runs them.

use {
    super::{error::*, FieldLocation, Pinctrl, Property},
    crate::mmio::interface::RegisterWindow,
    snafu::OptionExt,
};

//--------------------------------------------------------------------------------------------------
// Public Definitions
//--------------------------------------------------------------------------------------------------

/// How a pin's pull resistors are controlled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BiasStrategy {
    /// Separate pull-up and pull-down enables, or where a pin lacks those, a combined pull
    /// enable with a direction select.
    PuPd,
    /// Direction select (`pupd`, 1 = down) plus two resistor connects (`r1:r0`) whose
    /// combination sets the pull strength.
    PupdR1R0,
}

/// How a drive level reaches the hardware.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DriveStrategy {
    /// Level written straight into the drive field.
    V1,
}

/// How the input buffer is switched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEnableStrategy {
    /// Input buffer enable; enabling also turns the pin into an input.
    V1,
}

/// Pull resistors connected on a resistor-pair pin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Resistor {
    #[default]
    R0 = 0b01,
    R1 = 0b10,
    R0R1 = 0b11,
}

/// Pull configuration.
///
/// The resistor choice only matters for resistor-pair pins; other pins ignore it and report
/// [`Resistor::default`] on read-back.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Bias {
    Disable,
    PullUp(Resistor),
    PullDown(Resistor),
}

/// Requested drive strength.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Drive {
    /// Raw drive field value.
    Level(u32),
    /// Current in milliamps, converted through the pin's drive group.
    Milliamps(u32),
}

/// Electrical settings for one pin. Unset fields are left as they are.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PinConfig {
    pub bias: Option<Bias>,
    pub drive: Option<Drive>,
    pub input_enable: Option<bool>,
    pub schmitt: Option<bool>,
    /// Drive the pin as an output at this level.
    pub output: Option<bool>,
}

//--------------------------------------------------------------------------------------------------
// Public Code
//--------------------------------------------------------------------------------------------------

impl Resistor {
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0b01 => Some(Resistor::R0),
            0b10 => Some(Resistor::R1),
            0b11 => Some(Resistor::R0R1),
            _ => None,
        }
    }
}

impl Bias {
    pub const PULL_UP: Bias = Bias::PullUp(Resistor::R0);
    pub const PULL_DOWN: Bias = Bias::PullDown(Resistor::R0);

    /// `Some(true)` for a pull-up, `Some(false)` for a pull-down, `None` when disabled.
    pub const fn pulls_up(self) -> Option<bool> {
        match self {
            Bias::Disable => None,
            Bias::PullUp(_) => Some(true),
            Bias::PullDown(_) => Some(false),
        }
    }
}

impl PinConfig {
    pub const fn new() -> Self {
        Self {
            bias: None,
            drive: None,
            input_enable: None,
            schmitt: None,
            output: None,
        }
    }

    pub const fn bias(self, bias: Bias) -> Self {
        Self {
            bias: Some(bias),
            ..self
        }
    }

    pub const fn drive(self, drive: Drive) -> Self {
        Self {
            drive: Some(drive),
            ..self
        }
    }

    pub const fn input_enable(self, enable: bool) -> Self {
        Self {
            input_enable: Some(enable),
            ..self
        }
    }

    pub const fn schmitt(self, enable: bool) -> Self {
        Self {
            schmitt: Some(enable),
            ..self
        }
    }

    pub const fn output(self, level: bool) -> Self {
        Self {
            output: Some(level),
            ..self
        }
    }
}

impl<W: RegisterWindow> Pinctrl<'_, W> {
    /// Apply several electrical settings to one pin.
    ///
    /// Every requested field is located and range checked first; on failure nothing is
    /// written. Settings then go out as bias, drive, input enable, schmitt, output.
    pub fn configure_pin_electrical(&self, pin: usize, config: &PinConfig) -> Result<()> {
        self.check_config(pin, config).map_err(|err| {
            crate::warn!("pin {}: configuration rejected: {}", pin, err);
            err
        })?;

        if let Some(bias) = config.bias {
            self.set_bias(pin, bias)?;
        }
        if let Some(drive) = config.drive {
            self.set_drive(pin, self.drive_level(pin, drive)?)?;
        }
        if let Some(enable) = config.input_enable {
            self.set_input_enable(pin, enable)?;
        }
        if let Some(enable) = config.schmitt {
            self.set_schmitt(pin, enable)?;
        }
        if let Some(level) = config.output {
            self.direction_output(pin, level)?;
        }
        Ok(())
    }

    pub fn set_bias(&self, pin: usize, bias: Bias) -> Result<()> {
        match self.pull_fields(pin)? {
            PullFields::Direct { pu, pd } => match bias {
                // Never let both enables be set, not even between the two writes.
                Bias::Disable => {
                    self.write_field(pin, Property::Pu, &pu, 0);
                    self.write_field(pin, Property::Pd, &pd, 0);
                }
                Bias::PullUp(_) => {
                    self.write_field(pin, Property::Pd, &pd, 0);
                    self.write_field(pin, Property::Pu, &pu, 1);
                }
                Bias::PullDown(_) => {
                    self.write_field(pin, Property::Pu, &pu, 0);
                    self.write_field(pin, Property::Pd, &pd, 1);
                }
            },
            PullFields::Combined { en, sel } => match bias.pulls_up() {
                None => self.write_field(pin, Property::PullEn, &en, 0),
                Some(up) => {
                    let up = u32::from(up);
                    if self.read_field(&en) == 1 && self.read_field(&sel) != up {
                        self.write_field(pin, Property::PullEn, &en, 0);
                    }
                    self.write_field(pin, Property::PullSel, &sel, up);
                    self.write_field(pin, Property::PullEn, &en, 1);
                }
            },
            PullFields::Pair { pupd, r0, r1 } => self.set_pair_bias(pin, bias, &pupd, &r0, &r1),
        }
        Ok(())
    }

    /// Pull configuration read back from the hardware.
    pub fn bias(&self, pin: usize) -> Result<Bias> {
        Ok(match self.pull_fields(pin)? {
            PullFields::Direct { pu, pd } => match (self.read_field(&pu), self.read_field(&pd)) {
                (0, 0) => Bias::Disable,
                (1, 0) => Bias::PULL_UP,
                (0, 1) => Bias::PULL_DOWN,
                _ => return IllegalBiasStateSnafu { pin }.fail(),
            },
            PullFields::Combined { en, sel } => {
                if self.read_field(&en) == 0 {
                    Bias::Disable
                } else if self.read_field(&sel) == 1 {
                    Bias::PULL_UP
                } else {
                    Bias::PULL_DOWN
                }
            }
            PullFields::Pair { pupd, r0, r1 } => {
                let code = self.read_field(&r0) | (self.read_field(&r1) << 1);
                match Resistor::from_code(code) {
                    None => Bias::Disable,
                    Some(resistor) if self.read_field(&pupd) == 1 => Bias::PullDown(resistor),
                    Some(resistor) => Bias::PullUp(resistor),
                }
            }
        })
    }

    /// Write a raw drive level.
    pub fn set_drive(&self, pin: usize, level: u32) -> Result<()> {
        match self.soc.io_type(pin)?.drive {
            DriveStrategy::V1 => self.set_property(pin, Property::Drv, level),
        }
    }

    pub fn drive(&self, pin: usize) -> Result<u32> {
        match self.soc.io_type(pin)?.drive {
            DriveStrategy::V1 => self.get_property(pin, Property::Drv),
        }
    }

    /// Set the drive current. `milliamps` must be a step of the pin's drive group.
    pub fn set_drive_strength_ma(&self, pin: usize, milliamps: u32) -> Result<()> {
        let level = self.drive_level(pin, Drive::Milliamps(milliamps))?;
        self.set_drive(pin, level)
    }

    /// Current the drive field selects. A level beyond the pin's drive group is reported as
    /// out of range.
    pub fn drive_strength_ma(&self, pin: usize) -> Result<u32> {
        let group = self.soc.pin(pin)?.drive;
        let level = self.drive(pin)?;
        group.milliamps_for(level).context(ValueOutOfRangeSnafu {
            pin,
            property: Property::Drv,
            value: level,
            max: group.max_level(),
        })
    }

    pub fn set_input_enable(&self, pin: usize, enable: bool) -> Result<()> {
        match self.soc.io_type(pin)?.input_enable {
            InputEnableStrategy::V1 => {
                let ies = self.locate(Property::Ies, pin)?;
                let dir = self.locate(Property::Dir, pin)?;
                self.write_field(pin, Property::Ies, &ies, u32::from(enable));
                if enable {
                    self.write_field(pin, Property::Dir, &dir, 0);
                }
            }
        }
        Ok(())
    }

    pub fn set_schmitt(&self, pin: usize, enable: bool) -> Result<()> {
        self.set_property(pin, Property::Smt, u32::from(enable))
    }
}

//--------------------------------------------------------------------------------------------------
// Private Code
//--------------------------------------------------------------------------------------------------

/// Pull fields of one pin, by wiring.
enum PullFields {
    Direct {
        pu: FieldLocation,
        pd: FieldLocation,
    },
    Combined {
        en: FieldLocation,
        sel: FieldLocation,
    },
    Pair {
        pupd: FieldLocation,
        r0: FieldLocation,
        r1: FieldLocation,
    },
}

impl<W: RegisterWindow> Pinctrl<'_, W> {
    fn pull_fields(&self, pin: usize) -> Result<PullFields> {
        match self.soc.io_type(pin)?.bias {
            BiasStrategy::PuPd => {
                match (self.locate(Property::Pu, pin), self.locate(Property::Pd, pin)) {
                    (Ok(pu), Ok(pd)) => Ok(PullFields::Direct { pu, pd }),
                    (Err(err), _) | (_, Err(err)) => match (
                        self.locate(Property::PullEn, pin),
                        self.locate(Property::PullSel, pin),
                    ) {
                        (Ok(en), Ok(sel)) => Ok(PullFields::Combined { en, sel }),
                        _ => Err(err),
                    },
                }
            }
            BiasStrategy::PupdR1R0 => Ok(PullFields::Pair {
                pupd: self.locate(Property::Pupd, pin)?,
                r0: self.locate(Property::R0, pin)?,
                r1: self.locate(Property::R1, pin)?,
            }),
        }
    }

    /// Resistor-pair pull update.
    ///
    /// The direction select only changes while no resistor is connected, and resistors are
    /// disconnected before new ones are connected. In between the pin is unpulled, or pulls in the
    /// old or the new direction through part of that setting's resistors.
    fn set_pair_bias(
        &self,
        pin: usize,
        bias: Bias,
        pupd: &FieldLocation,
        r0: &FieldLocation,
        r1: &FieldLocation,
    ) {
        let code = match bias {
            Bias::Disable => 0,
            Bias::PullUp(resistor) | Bias::PullDown(resistor) => resistor.code(),
        };

        if let Some(up) = bias.pulls_up() {
            let down = u32::from(!up);
            let connected = (self.read_field(r0) | self.read_field(r1)) != 0;
            if connected && self.read_field(pupd) != down {
                self.write_field(pin, Property::R0, r0, 0);
                self.write_field(pin, Property::R1, r1, 0);
            }
            self.write_field(pin, Property::Pupd, pupd, down);
        }

        let resistors = [(Property::R0, r0, code & 1), (Property::R1, r1, (code >> 1) & 1)];
        for (property, loc, _) in resistors.iter().filter(|(_, _, bit)| *bit == 0) {
            self.write_field(pin, *property, loc, 0);
        }
        for (property, loc, _) in resistors.iter().filter(|(_, _, bit)| *bit == 1) {
            self.write_field(pin, *property, loc, 1);
        }
    }

    fn drive_level(&self, pin: usize, drive: Drive) -> Result<u32> {
        match drive {
            Drive::Level(level) => Ok(level),
            Drive::Milliamps(milliamps) => self
                .soc
                .pin(pin)?
                .drive
                .level_for(milliamps)
                .context(UnsupportedDriveStrengthSnafu { pin, milliamps }),
        }
    }

    fn check_config(&self, pin: usize, config: &PinConfig) -> Result<()> {
        self.soc.pin(pin)?;
        if config.bias.is_some() {
            self.pull_fields(pin)?;
        }
        if let Some(drive) = config.drive {
            let level = self.drive_level(pin, drive)?;
            self.checked(pin, Property::Drv, level)?;
        }
        if config.input_enable.is_some() {
            self.locate(Property::Ies, pin)?;
            self.locate(Property::Dir, pin)?;
        }
        if config.schmitt.is_some() {
            self.locate(Property::Smt, pin)?;
        }
        if config.output.is_some() {
            self.locate(Property::Do, pin)?;
            self.locate(Property::Dir, pin)?;
        }
        Ok(())
    }
}

//--------------------------------------------------------------------------------------------------
// Testing
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use {
        super::{super::fixture::*, super::Direction, *},
        crate::mmio::interface::RegisterWindow,
    };

    const ALL_BIASES: [Bias; 7] = [
        Bias::Disable,
        Bias::PullUp(Resistor::R0),
        Bias::PullUp(Resistor::R1),
        Bias::PullUp(Resistor::R0R1),
        Bias::PullDown(Resistor::R0),
        Bias::PullDown(Resistor::R1),
        Bias::PullDown(Resistor::R0R1),
    ];

    #[test]
    fn resistor_pair_bias_round_trips() {
        let banks = banks();
        let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
        for bias in ALL_BIASES {
            pctl.set_bias(0, bias).unwrap();
            assert_eq!(pctl.bias(0), Ok(bias));
        }
    }

    #[test]
    fn resistor_pair_disable_leaves_direction() {
        let banks = banks();
        let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
        pctl.set_bias(1, Bias::PullDown(Resistor::R1)).unwrap();
        pctl.set_bias(1, Bias::Disable).unwrap();
        assert_eq!(pctl.get_property(1, Property::Pupd), Ok(1));
        assert_eq!(pctl.get_property(1, Property::R0), Ok(0));
        assert_eq!(pctl.get_property(1, Property::R1), Ok(0));
    }

    /// Every intermediate state must be unpulled, or pull in the old or the new direction through
    /// a subset of that setting's resistors, and the direction select may only move while
    /// nothing is connected.
    #[test]
    fn resistor_pair_transitions_never_glitch() {
        let encode = |bias: Bias| -> [u32; 3] {
            match bias {
                Bias::Disable => [0, 0, 0],
                Bias::PullUp(r) => [0, r.code() & 1, r.code() >> 1],
                Bias::PullDown(r) => [1, r.code() & 1, r.code() >> 1],
            }
        };
        let pulls = |state: [u32; 3]| -> Option<(u32, u32)> {
            let code = state[1] | (state[2] << 1);
            (code != 0).then_some((state[0], code))
        };

        for from in ALL_BIASES {
            for to in ALL_BIASES {
                let banks = banks();
                let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
                pctl.set_bias(2, from).unwrap();
                let watched = [PUPD_OFFSET, R0_OFFSET, R1_OFFSET];
                let raw_before = watched.map(|offset| banks[CFG].read(offset));
                let before = raw_before.map(|reg| (reg >> 2) & 1);
                banks[CFG].clear_log();

                pctl.set_bias(2, to).unwrap();

                let old = pulls(before);
                let new = pulls(encode(to));
                let within = |now: Option<(u32, u32)>, target: Option<(u32, u32)>| {
                    match (now, target) {
                        (Some((dir, code)), Some((target_dir, target_code))) => {
                            dir == target_dir && code & !target_code == 0
                        }
                        _ => false,
                    }
                };
                let mut previous = before;
                replay(&banks[CFG], watched, raw_before, |raw| {
                    let state = raw.map(|reg| (reg >> 2) & 1);
                    let now = pulls(state);
                    assert!(
                        now.is_none() || within(now, old) || within(now, new),
                        "{:?} -> {:?}: passed through {:?}",
                        from,
                        to,
                        state
                    );
                    if state[0] != previous[0] {
                        assert!(
                            pulls(previous).is_none(),
                            "{:?} -> {:?}: direction moved while connected",
                            from,
                            to
                        );
                    }
                    previous = state;
                });
                assert_eq!(pctl.bias(2), Ok(to));
            }
        }
    }

    #[test]
    fn direct_bias_round_trips() {
        let banks = banks();
        let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
        for bias in [Bias::PULL_UP, Bias::PULL_DOWN, Bias::Disable, Bias::PULL_DOWN] {
            pctl.set_bias(4, bias).unwrap();
            assert_eq!(pctl.bias(4), Ok(bias));
        }
        // Resistor choice is meaningless here and reads back as the default.
        pctl.set_bias(5, Bias::PullUp(Resistor::R0R1)).unwrap();
        assert_eq!(pctl.bias(5), Ok(Bias::PullUp(Resistor::default())));
    }

    #[test]
    fn direct_pull_bits_are_never_both_set() {
        for from in [Bias::Disable, Bias::PULL_UP, Bias::PULL_DOWN] {
            for to in [Bias::Disable, Bias::PULL_UP, Bias::PULL_DOWN] {
                let banks = banks();
                let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
                pctl.set_bias(4, from).unwrap();
                let before = [banks[CFG].read(PU_OFFSET), banks[CFG].read(PD_OFFSET)];
                banks[CFG].clear_log();

                pctl.set_bias(4, to).unwrap();
                replay(&banks[CFG], [PU_OFFSET, PD_OFFSET], before, |state| {
                    assert!(
                        state[0] & state[1] & 1 == 0,
                        "{:?} -> {:?}: both pulls on",
                        from,
                        to
                    );
                });
            }
        }
    }

    #[test]
    fn combined_pull_switches_direction_through_disabled() {
        let banks = banks();
        let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
        pctl.set_bias(6, Bias::PULL_UP).unwrap();
        assert_eq!(pctl.bias(6), Ok(Bias::PULL_UP));
        banks[CFG].clear_log();

        pctl.set_bias(6, Bias::PULL_DOWN).unwrap();
        let writes = banks[CFG].writes();
        assert_eq!(
            writes,
            [(PULLEN_OFFSET, 0), (PULLSEL_OFFSET, 0), (PULLEN_OFFSET, 1)]
        );
        assert_eq!(pctl.bias(6), Ok(Bias::PULL_DOWN));

        pctl.set_bias(6, Bias::Disable).unwrap();
        assert_eq!(pctl.bias(6), Ok(Bias::Disable));
        assert_eq!(pctl.get_property(6, Property::PullSel), Ok(0));
    }

    #[test]
    fn both_pull_bits_set_reads_as_illegal() {
        let banks = banks();
        let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
        pctl.set_property(5, Property::Pu, 1).unwrap();
        pctl.set_property(5, Property::Pd, 1).unwrap();
        assert_eq!(pctl.bias(5), Err(PinctrlError::IllegalBiasState { pin: 5 }));
    }

    #[test]
    fn drive_strength_in_milliamps() {
        let banks = banks();
        let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
        pctl.set_drive_strength_ma(0, 8).unwrap();
        assert_eq!(pctl.drive(0), Ok(3));
        assert_eq!(pctl.drive_strength_ma(0), Ok(8));

        for milliamps in [0, 1, 7, 18] {
            assert_eq!(
                pctl.set_drive_strength_ma(0, milliamps),
                Err(PinctrlError::UnsupportedDriveStrength { pin: 0, milliamps })
            );
        }
        // 4 mA steps on pin 7.
        assert!(pctl.set_drive_strength_ma(7, 6).is_err());
        pctl.set_drive_strength_ma(7, 16).unwrap();
        assert_eq!(pctl.drive(7), Ok(3));

        // Pin 6 tops out at 8 mA, level 3, but its field holds up to 7.
        pctl.set_drive(6, 5).unwrap();
        assert_eq!(
            pctl.drive_strength_ma(6),
            Err(PinctrlError::ValueOutOfRange {
                pin: 6,
                property: Property::Drv,
                value: 5,
                max: 3
            })
        );
    }

    #[test]
    fn input_enable_turns_pin_into_input() {
        let banks = banks();
        let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
        pctl.direction_output(3, true).unwrap();
        pctl.set_input_enable(3, true).unwrap();
        assert_eq!(pctl.get_property(3, Property::Ies), Ok(1));
        assert_eq!(pctl.direction(3), Ok(Direction::Input));

        pctl.direction_output(3, true).unwrap();
        pctl.set_input_enable(3, false).unwrap();
        assert_eq!(pctl.get_property(3, Property::Ies), Ok(0));
        assert_eq!(pctl.direction(3), Ok(Direction::Output));
    }

    #[test]
    fn configure_applies_every_setting() {
        let banks = banks();
        let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
        let config = PinConfig::new()
            .bias(Bias::PullDown(Resistor::R0R1))
            .drive(Drive::Level(5))
            .schmitt(true)
            .output(false);
        pctl.configure_pin_electrical(1, &config).unwrap();
        assert_eq!(pctl.bias(1), Ok(Bias::PullDown(Resistor::R0R1)));
        assert_eq!(pctl.drive(1), Ok(5));
        assert_eq!(pctl.get_property(1, Property::Smt), Ok(1));
        assert_eq!(pctl.direction(1), Ok(Direction::Output));
        assert_eq!(pctl.get_property(1, Property::Do), Ok(0));
    }

    #[test]
    fn configure_rejects_before_writing() {
        let banks = banks();
        let pctl = Pinctrl::new(&FIXTURE, &banks).unwrap();
        let unsupported = PinConfig::new().bias(Bias::PULL_UP).schmitt(true);
        assert_eq!(
            pctl.configure_pin_electrical(6, &unsupported),
            Err(PinctrlError::Unsupported {
                pin: 6,
                property: Property::Smt
            })
        );
        let too_strong = PinConfig::new().bias(Bias::PULL_UP).drive(Drive::Level(8));
        assert!(matches!(
            pctl.configure_pin_electrical(4, &too_strong),
            Err(PinctrlError::ValueOutOfRange {
                property: Property::Drv,
                ..
            })
        ));
        let bad_current = PinConfig::new().input_enable(true).drive(Drive::Milliamps(3));
        assert_eq!(
            pctl.configure_pin_electrical(2, &bad_current),
            Err(PinctrlError::UnsupportedDriveStrength {
                pin: 2,
                milliamps: 3
            })
        );
        assert!(banks.iter().all(|b| b.writes().is_empty()));
    }
}
