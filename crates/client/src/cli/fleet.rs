//! Fleet CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Fleet commands.
#[derive(Debug, Parser)]
pub struct FleetCommand {
    #[command(subcommand)]
    pub action: FleetAction,
}

/// Available fleet actions.
#[derive(Debug, Subcommand)]
pub enum FleetAction {
    /// Show the current fleet.
    Show,
    /// Generate a new fleet, replacing the current one.
    Generate {
        /// Industry profile (ecommerce, gaming, financial). Server default when omitted.
        #[arg(long)]
        profile: Option<String>,
    },
    /// Show one table by ID.
    Table {
        /// Table ID.
        id: Uuid,
    },
}
