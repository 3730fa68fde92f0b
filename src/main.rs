//! chunkplan - manual chunk planning for bundler code splitting
//!
//! Computes a static manual-chunks mapping for a bundler's code-splitting
//! stage: every dependency is assigned to a named chunk based on ordered
//! prefix/suffix/substring rules, with the remainder collected into the
//! `vendor` chunk.
//!
//! # Features
//! - Prefix, suffix and substring pattern rules with first-match-wins order
//! - Default chunk names derived from the pattern (camel-cased, `@` stripped)
//! - Dependency lists from chunkplan.toml or straight from a package.json
//! - JSON output ready for a bundler's manual-chunks configuration

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod classify;
mod cli;
mod config;
mod error;

pub use cli::Cli;
pub use config::Config;

/// Initialize the logging/tracing system
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("chunkplan=debug"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("chunkplan=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    cli.execute()
}
