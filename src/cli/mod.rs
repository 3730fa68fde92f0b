//! Command-line interface for chunkplan
//!
//! Provides the main CLI structure using clap with subcommands for:
//! - `plan`: Compute the chunk mapping and emit it as JSON
//! - `check`: Validate a configuration

mod check;
mod plan;

use anyhow::Result;
use clap::{Parser, Subcommand};

pub use check::CheckCommand;
pub use plan::PlanCommand;

/// chunkplan - manual chunk planning for bundler code splitting
#[derive(Parser, Debug)]
#[command(name = "chunkplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to chunkplan.toml config file
    #[arg(short, long, global = true, default_value = "chunkplan.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the chunk mapping and emit it as JSON
    Plan(PlanCommand),

    /// Validate the configuration
    Check(CheckCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Plan(cmd) => cmd.execute(&self.config),
            Commands::Check(cmd) => cmd.execute(&self.config),
        }
    }
}
