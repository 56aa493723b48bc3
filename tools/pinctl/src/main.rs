/*
 * SPDX-License-Identifier: BlueOak-1.0.0
 */

//! Pin controller inspector.
//!
//! Runs the pin controller over a simulated register file, so catalogs can be browsed and
//! group or pin settings tried out on a host, with the resulting register contents shown.

use {
    anyhow::{anyhow, bail, Result},
    clap::{value_parser, Arg, ArgAction, ArgMatches, Command},
    colored::*,
    pinctrl::{
        console::{self, interface},
        mmio::{interface::RegisterWindow, RamWindow},
        platform::{self, mediatek::socs},
        Bias, Drive, PinConfig, Pinctrl, PinctrlError, Property, Resistor, SocData,
    },
    prettytable::{format, row, Table},
    std::fmt,
};

/// Forwards library log output to stdout.
struct StdoutConsole;

impl interface::Write for StdoutConsole {
    fn write_fmt(&self, args: fmt::Arguments) -> fmt::Result {
        print!("{}", args);
        Ok(())
    }
}

static STDOUT_CONSOLE: StdoutConsole = StdoutConsole;

// pinctl [--soc <compatible>] [-v] <command>
fn main() -> Result<()> {
    let matches = Command::new("pinctl - pin controller inspector")
        .about("Browse pin controller catalogs and simulate their register writes")
        .disable_version_flag(true)
        .arg(
            Arg::new("soc")
                .long("soc")
                .help("Device tree compatible string of the pin controller")
                .default_value("mediatek,mt7986-pinctrl"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Show controller log output")
                .action(ArgAction::SetTrue),
        )
        .subcommand_required(true)
        .subcommand(Command::new("socs").about("List built-in pin controllers"))
        .subcommand(Command::new("pins").about("List pins with pad type and capabilities"))
        .subcommand(
            Command::new("locate")
                .about("Show where every field of a pin lives")
                .arg(pin_arg()),
        )
        .subcommand(Command::new("groups").about("List groups and the functions using them"))
        .subcommand(Command::new("functions").about("List functions and their groups"))
        .subcommand(
            Command::new("apply")
                .about("Mux a group to a function and show the register writes")
                .arg(Arg::new("function").required(true))
                .arg(Arg::new("group").required(true)),
        )
        .subcommand(
            Command::new("set")
                .about("Write one field of a pin")
                .arg(pin_arg())
                .arg(Arg::new("property").required(true))
                .arg(
                    Arg::new("value")
                        .required(true)
                        .value_parser(value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Apply electrical settings to a pin")
                .arg(pin_arg())
                .arg(
                    Arg::new("pull")
                        .long("pull")
                        .value_parser(["up", "down", "none"]),
                )
                .arg(
                    Arg::new("resistor")
                        .long("resistor")
                        .value_parser(["r0", "r1", "r0r1"])
                        .default_value("r0"),
                )
                .arg(
                    Arg::new("drive-ma")
                        .long("drive-ma")
                        .value_parser(value_parser!(u32)),
                )
                .arg(
                    Arg::new("input")
                        .long("input")
                        .help("Enable the input buffer")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("schmitt")
                        .long("schmitt")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .help("Drive the pin as an output at this level")
                        .value_parser(value_parser!(u8).range(0..=1)),
                ),
        )
        .get_matches();

    if matches.get_flag("verbose") {
        console::register_console(&STDOUT_CONSOLE);
    }

    let compatible = matches
        .get_one::<String>("soc")
        .ok_or_else(|| anyhow!("no pin controller given"))?;
    let soc = platform::soc_for_compatible(compatible)
        .ok_or_else(|| anyhow!("no pin controller is compatible with {}", compatible))?;

    let banks = Registers::new(soc);
    let pctl = Pinctrl::new(soc, &banks.windows).map_err(pinctrl_error)?;

    match matches.subcommand() {
        Some(("socs", _)) => list_socs(),
        Some(("pins", _)) => list_pins(&pctl),
        Some(("locate", args)) => locate_pin(&pctl, pin(args)?),
        Some(("groups", _)) => list_groups(soc),
        Some(("functions", _)) => list_functions(soc),
        Some(("apply", args)) => apply_group(&pctl, &banks, args),
        Some(("set", args)) => set_field(&pctl, &banks, args),
        Some(("config", args)) => configure(&pctl, &banks, args),
        _ => unreachable!("subcommand is required"),
    }
}

fn pin_arg() -> Arg {
    Arg::new("pin")
        .required(true)
        .value_parser(value_parser!(usize))
}

fn pin(args: &ArgMatches) -> Result<usize> {
    args.get_one::<usize>("pin")
        .copied()
        .ok_or_else(|| anyhow!("pin number must be specified"))
}

// The library error only implements Display in no_std builds.
fn pinctrl_error(err: PinctrlError) -> anyhow::Error {
    anyhow!("{}", err)
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table
}

//--------------------------------------------------------------------------------------------------
// Simulated register file
//--------------------------------------------------------------------------------------------------

/// One zeroed memory-backed bank per bank name of the controller.
struct Registers {
    names: &'static [&'static str],
    windows: Vec<RamWindow>,
}

impl Registers {
    fn new(soc: &'static SocData) -> Self {
        Self {
            names: soc.base_names,
            windows: soc.base_names.iter().map(|_| RamWindow::new()).collect(),
        }
    }

    fn snapshot(&self) -> Vec<Vec<u32>> {
        self.windows
            .iter()
            .map(|bank| (0..bank.len()).step_by(4).map(|off| bank.read(off)).collect())
            .collect()
    }

    /// Print every register that differs from `before`.
    fn print_changes(&self, before: &[Vec<u32>]) {
        let mut table = new_table();
        table.set_titles(row!["Bank", "Offset", "Before", "After"]);
        let mut changed = 0;
        for (bank, (name, old)) in self.names.iter().zip(before).enumerate() {
            for (index, &was) in old.iter().enumerate() {
                let now = self.windows[bank].read(index * 4);
                if now != was {
                    table.add_row(row![
                        name,
                        format!("{:#05x}", index * 4),
                        format!("{:#010x}", was),
                        format!("{:#010x}", now).green()
                    ]);
                    changed += 1;
                }
            }
        }
        if changed == 0 {
            println!("{:>12} no register changed", "Registers".bold());
        } else {
            table.printstd();
        }
    }
}

//--------------------------------------------------------------------------------------------------
// Commands
//--------------------------------------------------------------------------------------------------

fn list_socs() -> Result<()> {
    let mut table = new_table();
    table.set_titles(row!["Name", "Compatible", "Pins", "Banks"]);
    for soc in socs() {
        table.add_row(row![
            soc.name,
            soc.compatible,
            soc.pins.len(),
            soc.base_names.join(" ")
        ]);
    }
    table.printstd();
    Ok(())
}

fn list_pins<W: RegisterWindow>(pctl: &Pinctrl<W>) -> Result<()> {
    let soc = pctl.soc();
    let mut table = new_table();
    table.set_titles(row!["Pin", "Name", "Pad", "Drive mA", "Mux", "Fields"]);
    for desc in soc.pins {
        let pin = desc.number as usize;
        let io = soc.io_type(pin).map_err(pinctrl_error)?;
        let caps = pctl.capabilities(pin).map_err(pinctrl_error)?;
        let fields = Property::ALL
            .iter()
            .filter(|&&property| caps.supports(property))
            .map(|property| property.name())
            .collect::<Vec<_>>()
            .join(" ");
        table.add_row(row![
            pin,
            desc.name,
            io.name,
            format!(
                "{}-{}/{}",
                desc.drive.min_ma, desc.drive.max_ma, desc.drive.step_ma
            ),
            pctl.pin_muxing(pin).map_err(pinctrl_error)?,
            fields
        ]);
    }
    table.printstd();
    Ok(())
}

fn locate_pin<W: RegisterWindow>(pctl: &Pinctrl<W>, pin: usize) -> Result<()> {
    let name = pctl.pin_name(pin).map_err(pinctrl_error)?;
    println!("{:>12} {} ({})", "Pin".bold(), pin, name);

    let mut table = new_table();
    table.set_titles(row!["Field", "Bank", "Offset", "Bits", "Note"]);
    for property in Property::ALL {
        match pctl.locate(property, pin) {
            Ok(loc) => {
                let bank = pctl.bank_name(loc.bank).unwrap_or("?");
                let bits = if loc.width == 1 {
                    format!("{}", loc.bit)
                } else {
                    format!("{}:{}", loc.bit + loc.width - 1, loc.bit)
                };
                let note = if loc.straddles() {
                    format!("continues at {:#05x}", loc.offset + loc.stride)
                        .yellow()
                        .to_string()
                } else {
                    String::new()
                };
                table.add_row(row![
                    property,
                    bank,
                    format!("{:#05x}", loc.offset),
                    bits,
                    note
                ]);
            }
            Err(PinctrlError::Unsupported { .. }) => {
                table.add_row(row![property.to_string().dimmed(), "-", "-", "-", ""]);
            }
            Err(err) => return Err(pinctrl_error(err)),
        }
    }
    table.printstd();
    Ok(())
}

fn list_groups(soc: &'static SocData) -> Result<()> {
    let mut table = new_table();
    table.set_titles(row!["Group", "Pins", "Functions"]);
    for group in soc.groups {
        let pins = group
            .pins
            .iter()
            .map(|mux| format!("{}:{}", mux.pin, mux.function))
            .collect::<Vec<_>>()
            .join(" ");
        let functions = soc
            .functions_of(group.name)
            .map(|function| function.name)
            .collect::<Vec<_>>()
            .join(" ");
        table.add_row(row![group.name, pins, functions]);
    }
    table.printstd();
    Ok(())
}

fn list_functions(soc: &'static SocData) -> Result<()> {
    let mut table = new_table();
    table.set_titles(row!["Function", "Groups"]);
    for function in soc.functions {
        table.add_row(row![function.name, function.groups.join(" ")]);
    }
    table.printstd();
    Ok(())
}

fn apply_group<W: RegisterWindow>(
    pctl: &Pinctrl<W>,
    banks: &Registers,
    args: &ArgMatches,
) -> Result<()> {
    let (function, group) = match (
        args.get_one::<String>("function"),
        args.get_one::<String>("group"),
    ) {
        (Some(function), Some(group)) => (function, group),
        _ => bail!("function and group must be specified"),
    };

    let before = banks.snapshot();
    pctl.apply_group(group, function).map_err(pinctrl_error)?;
    println!(
        "{:>12} group {} to function {}",
        "Applied".green().bold(),
        group,
        function
    );

    let desc = pctl.soc().group(group).map_err(pinctrl_error)?;
    let mut table = new_table();
    table.set_titles(row!["Pin", "Name", "Mux"]);
    for mux in desc.pins {
        let pin = mux.pin as usize;
        table.add_row(row![
            pin,
            pctl.pin_name(pin).map_err(pinctrl_error)?,
            pctl.pin_muxing(pin).map_err(pinctrl_error)?
        ]);
    }
    table.printstd();
    banks.print_changes(&before);
    Ok(())
}

fn set_field<W: RegisterWindow>(
    pctl: &Pinctrl<W>,
    banks: &Registers,
    args: &ArgMatches,
) -> Result<()> {
    let pin = pin(args)?;
    let name = args
        .get_one::<String>("property")
        .ok_or_else(|| anyhow!("property must be specified"))?;
    let property = Property::ALL
        .into_iter()
        .find(|property| property.name() == name)
        .ok_or_else(|| anyhow!("unknown property {}", name))?;
    let value = args
        .get_one::<u32>("value")
        .copied()
        .ok_or_else(|| anyhow!("value must be specified"))?;

    let before = banks.snapshot();
    pctl.set_property(pin, property, value)
        .map_err(pinctrl_error)?;
    let loc = pctl.locate(property, pin).map_err(pinctrl_error)?;
    println!(
        "{:>12} pin {} {} at {} reads back {}",
        "Wrote".green().bold(),
        pin,
        property,
        loc,
        pctl.get_property(pin, property).map_err(pinctrl_error)?
    );
    banks.print_changes(&before);
    Ok(())
}

fn configure<W: RegisterWindow>(
    pctl: &Pinctrl<W>,
    banks: &Registers,
    args: &ArgMatches,
) -> Result<()> {
    let pin = pin(args)?;
    let resistor = match args.get_one::<String>("resistor").map(String::as_str) {
        Some("r1") => Resistor::R1,
        Some("r0r1") => Resistor::R0R1,
        _ => Resistor::R0,
    };

    let mut config = PinConfig::new();
    match args.get_one::<String>("pull").map(String::as_str) {
        Some("up") => config = config.bias(Bias::PullUp(resistor)),
        Some("down") => config = config.bias(Bias::PullDown(resistor)),
        Some("none") => config = config.bias(Bias::Disable),
        _ => {}
    }
    if let Some(&milliamps) = args.get_one::<u32>("drive-ma") {
        config = config.drive(Drive::Milliamps(milliamps));
    }
    if args.get_flag("input") {
        config = config.input_enable(true);
    }
    if args.get_flag("schmitt") {
        config = config.schmitt(true);
    }
    if let Some(&level) = args.get_one::<u8>("output") {
        config = config.output(level == 1);
    }
    if config == PinConfig::new() {
        bail!("nothing to configure");
    }

    let before = banks.snapshot();
    pctl.configure_pin_electrical(pin, &config)
        .map_err(pinctrl_error)?;
    println!(
        "{:>12} pin {} ({})",
        "Configured".green().bold(),
        pin,
        pctl.pin_name(pin).map_err(pinctrl_error)?
    );
    if config.bias.is_some() {
        println!("{:>12} {:?}", "Bias".bold(), pctl.bias(pin).map_err(pinctrl_error)?);
    }
    if config.drive.is_some() {
        println!(
            "{:>12} {} mA",
            "Drive".bold(),
            pctl.drive_strength_ma(pin).map_err(pinctrl_error)?
        );
    }
    banks.print_changes(&before);
    Ok(())
}
