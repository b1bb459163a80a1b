//! Command-line arguments for the `roster` binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use roster_core::{ConfigError, RosterConfig};

/// roster - manage an in-memory employee roster from the terminal
#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level override (trace|debug|info|warn|error)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Absolute log directory override
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Start with an empty roster instead of the sample employees
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Assign counter ids (1, 2, ...) instead of UUIDs
    #[arg(long, global = true)]
    pub sequential_ids: bool,

    /// The command to execute (defaults to `shell`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the roster, optionally filtered
    List(ListCommand),

    /// Interactive roster session
    Shell,

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Case-insensitive search over name, email, position and department
    pub query: Option<String>,

    /// Output visible records as JSON
    #[arg(short, long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Print the default configuration file path
    Path,
}

impl Cli {
    /// Applies command-line overrides on top of loaded configuration.
    ///
    /// # Errors
    /// Returns a validation error when an override is invalid.
    pub fn apply_overrides(&self, mut config: RosterConfig) -> Result<RosterConfig, ConfigError> {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(dir) = &self.log_dir {
            config.logging.dir = Some(dir.clone());
        }
        if self.no_seed {
            config.roster.seed_sample_data = false;
        }
        if self.sequential_ids {
            config.roster.sequential_ids = true;
        }
        config.validate()?;
        Ok(config)
    }
}
