//! CLI command definitions.

pub mod fleet;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the fleetwise API.
#[derive(Debug, Parser)]
#[command(name = "fleetwise-client")]
#[command(about = "CLI client for the fleetwise API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "FLEETWISE_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List industry profiles.
    Profiles,
    /// Inspect or regenerate the simulated fleet.
    Fleet(fleet::FleetCommand),
    /// Fleet-wide cost and waste summary.
    Stats,
    /// Highest-savings optimization recommendations.
    Recommendations {
        /// Maximum number of recommendations (server default when omitted).
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Ask the cost assistant a question about the fleet.
    Chat {
        /// The question. Multiple words are joined with spaces.
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Server liveness check.
    Health,
}
