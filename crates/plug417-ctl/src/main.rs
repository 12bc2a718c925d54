//! plug417ctl - control a PLUG417 thermal imaging module over its serial port.
//!
//! With no options the status page is queried and printed. Options are
//! applied in a fixed order: page query, pseudo color, mirror, test screen,
//! CMOS interface, CMOS content, brightness, then the `-r` command.

mod print;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use plug417_command::{help, parse_number, CommandError, ParsedCommand};
use plug417_protocol::{CmosContent, CmosInterface, DecodedPage, Mirror, Palette};
use plug417_session::{Session, SessionConfig, SessionError};

#[derive(Debug, Error)]
enum CtlError {
    #[error("cannot read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn parse_u8(text: &str) -> Result<u8, String> {
    let value = parse_number(text).ok_or_else(|| format!("'{}' is not a number", text))?;
    u8::try_from(value).map_err(|_| format!("{} does not fit in a byte", text))
}

#[derive(Parser, Debug)]
#[command(name = "plug417ctl", version, about = "Control a PLUG417 thermal imaging module")]
struct Cli {
    /// Serial device (default /dev/ttyACM0)
    #[arg(short, long)]
    device: Option<String>,

    /// YAML session configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reply timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Query a page of this functional class
    #[arg(short, long, value_parser = parse_u8)]
    get: Option<u8>,

    /// Page selector used with --get
    #[arg(short, long, default_value_t = 0, value_parser = parse_u8)]
    page: u8,

    /// Pseudo color palette, 0 to 9
    #[arg(short, long, value_parser = parse_u8)]
    color: Option<u8>,

    /// Mirror image, 0 none, 1 X, 2 Y, 3 XY
    #[arg(short, long, value_parser = parse_u8)]
    mirror: Option<u8>,

    /// Test screen, 0 to 3
    #[arg(short, long, value_parser = parse_u8)]
    test: Option<u8>,

    /// CMOS interface, 0 CMOS16, 1 CMOS8 MSB, 2 CMOS8 LSB
    #[arg(short = 'e', long = "cmos-i", value_parser = parse_u8)]
    cmos_interface: Option<u8>,

    /// CMOS content, 0 to 5
    #[arg(short = 'f', long = "cmos-c", value_parser = parse_u8)]
    cmos_content: Option<u8>,

    /// Brightness, 0 to 100
    #[arg(short, long, value_parser = parse_u8)]
    brightness: Option<u8>,

    /// Command string, e.g. "icon:n=1:on" or "help:icon"
    #[arg(short = 'r', long)]
    command: Option<String>,

    /// Print pages as JSON
    #[arg(long)]
    json: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn has_setters(&self) -> bool {
        self.color.is_some()
            || self.mirror.is_some()
            || self.test.is_some()
            || self.cmos_interface.is_some()
            || self.cmos_content.is_some()
            || self.brightness.is_some()
    }

    fn session_config(&self) -> Result<SessionConfig, CtlError> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| CtlError::ConfigRead {
                    path: path.clone(),
                    source,
                })?;
                serde_yaml::from_str(&text).map_err(|source| CtlError::ConfigParse {
                    path: path.clone(),
                    source,
                })?
            }
            None => SessionConfig::default(),
        };
        if let Some(device) = &self.device {
            config.device = device.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.timeout_ms = timeout_ms;
        }
        Ok(config)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn show(page: &DecodedPage, json: bool) -> Result<(), CtlError> {
    if json {
        println!("{}", serde_json::to_string_pretty(page)?);
    } else {
        print!("{}", print::page(page));
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), CtlError> {
    let command = cli.command.as_deref().map(plug417_command::parse).transpose()?;
    let settings = match command {
        Some(ParsedCommand::Help(topic)) => {
            print!("{}", help::render(&topic)?);
            None
        }
        Some(ParsedCommand::Settings(settings)) => Some(settings),
        None => None,
    };

    let mut get = cli.get.map(|functional| (functional, cli.page));
    if get.is_none() && !cli.has_setters() && cli.command.is_none() {
        get = Some((plug417_protocol::STATUS_QUERY_FUNCTIONAL, plug417_protocol::PAGE_STATUS));
    }
    if get.is_none() && !cli.has_setters() && settings.is_none() {
        return Ok(());
    }

    let config = cli.session_config()?;
    info!(device = %config.device, baud = config.baud_rate, "opening module");
    let mut session = Session::open(config)?;

    if let Some((functional, page)) = get {
        let decoded = session.query_any(functional, page)?;
        show(&decoded, cli.json)?;
    }
    if let Some(color) = cli.color {
        session.set_pseudo_color(Palette::from(color))?;
    }
    if let Some(mirror) = cli.mirror {
        session.set_mirror_image(Mirror::from(mirror))?;
    }
    if let Some(test) = cli.test {
        session.set_test_screen(test)?;
    }
    if let Some(interface) = cli.cmos_interface {
        session.set_cmos_interface(CmosInterface::from(interface))?;
    }
    if let Some(content) = cli.cmos_content {
        session.set_cmos_content(CmosContent::from(content))?;
    }
    if let Some(brightness) = cli.brightness {
        session.set_brightness(brightness)?;
    }
    if let Some(settings) = settings {
        debug!(count = settings.len(), "applying command");
        session.set_all(&settings)?;
    }
    debug!(stats = ?session.stats(), "done");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("plug417ctl: {}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_u8() {
        assert_eq!(parse_u8("0x10"), Ok(16));
        assert_eq!(parse_u8("010"), Ok(8));
        assert!(parse_u8("256").is_err());
        assert!(parse_u8("blue").is_err());
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::try_parse_from(["plug417ctl", "-d", "/dev/ttyUSB1", "-c", "3", "-e", "1", "-vv"]).unwrap();
        assert_eq!(cli.device.as_deref(), Some("/dev/ttyUSB1"));
        assert_eq!(cli.color, Some(3));
        assert_eq!(cli.cmos_interface, Some(1));
        assert_eq!(cli.verbose, 2);
        assert!(cli.has_setters());

        let config = cli.session_config().unwrap();
        assert_eq!(config.device, "/dev/ttyUSB1");
        assert_eq!(config.timeout_ms, plug417_session::DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["plug417ctl"]).unwrap();
        assert!(!cli.has_setters());
        assert_eq!(cli.get, None);
        assert_eq!(cli.page, 0);
        assert_eq!(cli.session_config().unwrap(), SessionConfig::default());
    }

    #[test]
    fn test_help_command_needs_no_device() {
        let cli = Cli::try_parse_from(["plug417ctl", "-d", "/nonexistent/tty", "-r", "help:cmd"]).unwrap();
        assert!(run(cli).is_ok());
    }

    #[test]
    fn test_bad_command_fails_before_opening() {
        let cli = Cli::try_parse_from(["plug417ctl", "-d", "/nonexistent/tty", "-r", "video:on"]).unwrap();
        assert!(matches!(run(cli), Err(CtlError::Command(CommandError::UnknownGroup(_)))));
    }
}
