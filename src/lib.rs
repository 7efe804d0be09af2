//! remapq - Celtic Tuning remap lookup CLI.
//!
//! Queries the tuning site for a single vehicle registration, scrapes the
//! vehicle-detail page and performance gauges out of its HTML, normalizes
//! units and prints a structured record.

#![warn(missing_docs)]
#![allow(clippy::print_stdout)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod lookup;
pub mod model;
pub mod output;
pub mod scrape;
pub mod units;

use clap::Parser;
use cli::{Cli, Command, ConfigAction, OutputMode};
use config::Config;
use constants::{DEFAULT_POWER_UNIT, DEFAULT_TORQUE_UNIT};
use lookup::SiteClient;
use model::RegistrationQuery;
use std::time::Duration;
use tracing::debug;

pub use error::{Error, Result};

/// Main entry point for the remapq CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.lookup.verbose, cli.lookup.quiet);

    // Load configuration
    let config = config::load_default_config()?;

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    let Some(registration) = cli.registration else {
        println!("Usage: remapq <REGISTRATION> [pretty|all]");
        println!("Run 'remapq --help' for all options.");
        return Ok(());
    };

    // An unknown output mode is reported, not treated as a failure, and
    // checked before any network traffic.
    let Some(mode) = OutputMode::from_arg(&cli.output) else {
        println!("Invalid output mode: {}. Valid modes: pretty, all", cli.output);
        return Ok(());
    };

    lookup_and_print(&registration, mode, &cli.lookup, &config)
}

/// Run one lookup and print the result in the requested mode.
fn lookup_and_print(
    registration: &str,
    mode: OutputMode,
    args: &cli::LookupArgs,
    config: &Config,
) -> Result<()> {
    // CLI flags win over config file entries; unit strings resolve
    // case-insensitively and fail here, before any request is made.
    let power_unit = args
        .power_unit
        .as_deref()
        .or(config.units.power.as_deref())
        .unwrap_or(DEFAULT_POWER_UNIT);
    let torque_unit = args
        .torque_unit
        .as_deref()
        .or(config.units.torque.as_deref())
        .unwrap_or(DEFAULT_TORQUE_UNIT);
    let query = RegistrationQuery::new(registration, power_unit, torque_unit)?;
    debug!(
        "lookup for {} in {} / {}",
        query.registration, query.power_unit, query.torque_unit
    );

    let client = SiteClient::new(
        &config.site.base_url,
        Duration::from_secs(config.site.timeout_secs),
    )?;

    let runtime = tokio::runtime::Runtime::new().map_err(|e| Error::Internal {
        message: format!("failed to create async runtime: {e}"),
    })?;

    let spinner_enabled = !args.quiet && !args.no_progress;
    let spinner = output::create_lookup_spinner(spinner_enabled, &query.registration);
    let outcome = runtime.block_on(client.lookup(&query));
    output::finish_spinner(spinner);
    let result = outcome?;

    match mode {
        OutputMode::Pretty => println!("{}", output::pretty(&result)),
        OutputMode::All => {
            let json = serde_json::to_string_pretty(&result).map_err(|e| Error::Internal {
                message: format!("failed to serialize result: {e}"),
            })?;
            println!("{json}");
        }
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // Logs go to stderr so the rendered result on stdout stays clean.
    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_command(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action, config),
    }
}

fn handle_config_command(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config::save_default_config(&Config::default())?;
            println!("Created config file: {}", path.display());
        }
        ConfigAction::Show => {
            let rendered = toml::to_string_pretty(config)
                .map_err(|e| Error::ConfigSerialize { source: e })?;
            print!("{rendered}");
        }
        ConfigAction::Path => {
            println!("{}", config::config_file_path()?.display());
        }
    }
    Ok(())
}
