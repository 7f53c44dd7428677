//! `serlcd` command line tool

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, error};
use serlcd::{connect, AddressingMode, DisplayConfig, Error, FileConfig, Lcd, RenderOptions};
use serlcd_core::render::{self, Step};
use serlcd_core::CursorModel;
use serlcd_protocol::Command;

#[derive(Debug, Parser)]
#[command(name = "serlcd", version, about = "Drive a serial character LCD")]
#[command(arg_required_else_help(true))]
struct Cli {
    /// TOML config file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Serial device (overrides the config file)
    #[arg(long, short = 'p')]
    port: Option<PathBuf>,

    /// Baud rate
    #[arg(long)]
    baud: Option<u32>,

    /// Display rows
    #[arg(long)]
    rows: Option<u16>,

    /// Display columns
    #[arg(long)]
    columns: Option<u16>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Print the bytes that would be sent instead of opening the port
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Print text; `\n` starts a new row. Use `-` to read from stdin
    Print {
        /// Leave the cursor visible
        #[arg(long)]
        show_cursor: bool,
        /// Cut long lines instead of scrolling them
        #[arg(long)]
        no_scroll: bool,
        /// Continue from the current cursor instead of starting at row 0
        #[arg(long)]
        relative: bool,
        text: String,
    },
    /// Clear the screen
    Clear,
    /// Move the cursor
    Move { column: u16, row: u16 },
    /// Show or hide the cursor
    Cursor {
        #[arg(value_enum)]
        state: Toggle,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("serlcd: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    let config = DisplayConfig {
        baud_rate: cli.baud.unwrap_or(file.display.baud_rate),
        rows: cli.rows.unwrap_or(file.display.rows),
        columns: cli.columns.unwrap_or(file.display.columns),
    };
    debug!("effective config: {:?}", config);

    if cli.dry_run {
        return dry_run(&cli.command, &config);
    }

    let port = cli.port.or(file.port).ok_or(Error::NoPort)?;
    let mut lcd = connect(&port, &config)?;
    let result = execute(&mut lcd, &cli.command);
    lcd.disconnect();
    result
}

fn execute(lcd: &mut Lcd, command: &CliCommand) -> Result<(), Error> {
    match command {
        CliCommand::Print { text, .. } => {
            let text = read_text(text)?;
            lcd.print(&text, render_options(command))?;
        }
        CliCommand::Clear => lcd.clear()?,
        CliCommand::Move { column, row } => lcd.move_to(*column, *row)?,
        CliCommand::Cursor { state: Toggle::On } => lcd.cursor_on()?,
        CliCommand::Cursor { state: Toggle::Off } => lcd.cursor_off()?,
    }
    Ok(())
}

/// Show what would go over the wire, starting from a freshly started display
fn dry_run(command: &CliCommand, config: &DisplayConfig) -> Result<(), Error> {
    let geometry = config.geometry()?;
    let cursor = CursorModel::new(geometry);

    match command {
        CliCommand::Print { text, .. } => {
            let text = read_text(text)?;
            let plan = render::plan(&text, render_options(command), &cursor)
                .map_err(serlcd_core::Error::<io::Error>::from)?;
            for step in plan {
                println!("{}", describe(&step));
            }
        }
        CliCommand::Clear => println!("{}", describe(&Step::new(Command::Clear))),
        CliCommand::Move { column, row } => {
            let target = geometry
                .locate(*column, *row)
                .map_err(serlcd_core::Error::<io::Error>::from)?;
            println!(
                "{}",
                describe(&Step::new(Command::move_to(target.column, target.row)))
            );
        }
        CliCommand::Cursor { state } => {
            let visible = matches!(state, Toggle::On);
            println!(
                "{}",
                describe(&Step::new(Command::SetCursorVisible(visible)))
            );
        }
    }
    Ok(())
}

fn render_options(command: &CliCommand) -> RenderOptions {
    match command {
        CliCommand::Print {
            show_cursor,
            no_scroll,
            relative,
            ..
        } => RenderOptions::default()
            .with_cursor(*show_cursor)
            .with_scroll(!*no_scroll)
            .with_addressing(if *relative {
                AddressingMode::CursorRelative
            } else {
                AddressingMode::LineIndexed
            }),
        _ => RenderOptions::default(),
    }
}

fn read_text(arg: &str) -> Result<String, Error> {
    if arg != "-" {
        return Ok(arg.to_owned());
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(Error::Input)?;
    // A trailing newline from `echo` should not blank an extra row
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

fn describe(step: &Step) -> String {
    let hex: Vec<String> = step
        .command
        .encode()
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect();
    match step.delay_ms {
        Some(ms) => format!("{}  ; wait {ms} ms", hex.join(" ")),
        None => hex.join(" "),
    }
}
