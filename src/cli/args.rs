//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

/// Query Celtic Tuning remap estimates for a vehicle registration.
#[derive(Debug, Parser)]
#[command(name = "remapq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Vehicle registration to look up.
    pub registration: Option<String>,

    /// Output mode: "pretty" for rendered text, "all" for the raw record
    /// as JSON.
    #[arg(default_value = "pretty")]
    pub output: String,

    /// Common lookup options.
    #[command(flatten)]
    pub lookup: LookupArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Arguments for the lookup command.
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Power unit for the readings (BHP, kW or PS).
    #[arg(short = 'p', long, env = "REMAPQ_POWER_UNIT")]
    pub power_unit: Option<String>,

    /// Torque unit for the readings (lb/ft or Nm).
    #[arg(short = 't', long, env = "REMAPQ_TORQUE_UNIT")]
    pub torque_unit: Option<String>,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress informational output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable the progress spinner.
    #[arg(long)]
    pub no_progress: bool,
}

/// How the lookup result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable rendering (the default).
    Pretty,
    /// Raw aggregate record as JSON.
    All,
}

impl OutputMode {
    /// Parse the positional output-mode argument. Unknown modes are the
    /// caller's problem to report; they are not a hard failure.
    #[must_use]
    pub fn from_arg(mode: &str) -> Option<Self> {
        match mode {
            m if m.eq_ignore_ascii_case("pretty") => Some(Self::Pretty),
            m if m.eq_ignore_ascii_case("all") => Some(Self::All),
            _ => None,
        }
    }
}
