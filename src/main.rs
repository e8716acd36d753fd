//! dmsconv - convert coordinates between DMS and decimal degrees

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use dmsconv::{
    types::{DecimalAngle, Direction, DmsAngle},
    ConversionEvent, ConverterForm, EventBus, Field, ShellConfig, ShellError,
};

#[derive(Debug, Parser)]
#[command(name = "dmsconv", version, about)]
struct Cli {
    /// TOML file with the display settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert degrees, minutes and seconds into decimal degrees
    ToDecimal {
        /// N, S, E or W
        direction: Direction,
        /// Degrees, blank is zero
        #[arg(allow_hyphen_values = true)]
        degrees: Option<String>,
        /// Arc minutes, blank is zero
        #[arg(allow_hyphen_values = true)]
        minutes: Option<String>,
        /// Arc seconds, blank is zero
        #[arg(allow_hyphen_values = true)]
        seconds: Option<String>,
    },
    /// Convert decimal degrees into degrees, minutes and seconds
    ToDms {
        /// Signed decimal degrees, negative for South or West
        #[arg(allow_hyphen_values = true)]
        decimal: String,
    },
    /// Parse a coordinate written in DMS (e.g. `N40° 26' 46"`) or decimal notation
    Parse {
        /// The coordinate text
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Interactive form reading the field changes from stdin
    Session,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn print_event(event: &ConversionEvent) {
    for line in event.lines() {
        println!("{line}");
    }
}

/// Print every refresh of the form
fn console_bus() -> EventBus<ConversionEvent> {
    let mut bus = EventBus::new();
    let _ = bus.subscribe(print_event);
    bus
}

fn exit_code(event: &ConversionEvent) -> Result<()> {
    if event.is_rejected() {
        bail!("conversion rejected");
    }
    Ok(())
}

fn to_decimal(config: ShellConfig, direction: Direction, fields: [&str; 3]) -> Result<()> {
    let mut form = ConverterForm::new(config);
    // fill the form silently, only the final state is printed
    let mut quiet = EventBus::new();
    let _ = form.select(direction, &mut quiet);
    let _ = form.input(Field::Degrees, fields[0], &mut quiet);
    let _ = form.input(Field::Minutes, fields[1], &mut quiet);

    let mut bus = console_bus();
    let event = form.input(Field::Seconds, fields[2], &mut bus);
    exit_code(&event)
}

fn to_dms(config: ShellConfig, decimal: &str) -> Result<()> {
    let mut form = ConverterForm::new(config);
    let mut bus = console_bus();
    let event = form.input(Field::Decimal, decimal, &mut bus);
    exit_code(&event)
}

fn parse(config: &ShellConfig, text: &str) -> Result<()> {
    let angle = text
        .parse::<DmsAngle>()
        .map_err(ShellError::from)
        .with_context(|| format!("{text:?} is not a coordinate"))?;
    let decimal: DecimalAngle = angle.into();

    println!("{:.*}", config.seconds_places, angle);
    println!("{:#.*}", config.seconds_places, angle);
    println!("{:.*}", config.decimal_places, decimal);
    Ok(())
}

/// A line typed in the interactive session
#[derive(Debug, PartialEq, Eq)]
enum SessionLine<'a> {
    /// The new text of the field
    Input(Field, &'a str),
    /// Move the direction slider
    Slide(usize),
    /// Stop the session
    Quit,
    /// Nothing to do
    Skip,
    /// The line is not understood
    Error(String),
}

impl<'a> SessionLine<'a> {
    fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let (command, value) = line.split_once(' ').unwrap_or((line, ""));
        let value = value.trim();
        let field = match command {
            "" => return Self::Skip,
            "quit" | "exit" => return Self::Quit,
            "deg" => Field::Degrees,
            "min" => Field::Minutes,
            "sec" => Field::Seconds,
            "dec" => Field::Decimal,
            "dir" => {
                return value.parse().map_or_else(
                    |_| Self::Error("slider position should be a number 0-3".to_string()),
                    Self::Slide,
                )
            }
            other => {
                return Self::Error(format!(
                    "unknown command {other:?}, use deg|min|sec|dec|dir <value> or quit"
                ))
            }
        };
        Self::Input(field, value)
    }
}

fn session(config: ShellConfig) -> Result<()> {
    let mut form = ConverterForm::new(config);
    let mut bus = console_bus();
    let _ = form.setup(&mut bus);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush().context("cannot write the prompt")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("cannot read stdin")? == 0 {
            break;
        }

        match SessionLine::parse(&line) {
            SessionLine::Input(field, value) => {
                let _ = form.input(field, value, &mut bus);
            }
            SessionLine::Slide(position) => {
                let _ = form.slide(position, &mut bus);
                match form.slider().label() {
                    Some(label) => log::info!("Direction: {label}"),
                    None => log::warn!("Slider position {position} has no direction"),
                }
            }
            SessionLine::Quit => break,
            SessionLine::Skip => {}
            SessionLine::Error(message) => eprintln!("{message}"),
        }
    }

    bus.clear();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = ShellConfig::load(cli.config.as_deref()).context("cannot load configuration")?;
    log::info!("dmsconv v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Command::ToDecimal {
            direction,
            degrees,
            minutes,
            seconds,
        } => {
            let fields = [degrees, minutes, seconds].map(Option::unwrap_or_default);
            to_decimal(config, direction, [&fields[0], &fields[1], &fields[2]])
        }
        Command::ToDms { decimal } => to_dms(config, &decimal),
        Command::Parse { text } => parse(&config, &text),
        Command::Session => session(config),
    }
}
