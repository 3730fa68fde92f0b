//! Check command implementation

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tracing::info;

use crate::classify::resolve_rules;
use crate::config::{manifest_dependencies, Config};

/// Validate the configuration
#[derive(Args, Debug)]
pub struct CheckCommand {
    /// Also verify a package.json manifest is readable
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,
}

impl CheckCommand {
    pub fn execute(&self, config_path: &str) -> Result<()> {
        info!("Loading configuration from {}", config_path);
        let config = Config::load(config_path)?;

        let rules = resolve_rules(&config.patterns)?;

        if config.patterns.is_empty() {
            eprintln!(
                "{} No pattern rules configured; every dependency will land in 'vendor'",
                "!".yellow().bold()
            );
        }

        let deps = match &self.manifest {
            Some(path) => manifest_dependencies(path)?,
            None => config.dependency_list(),
        };

        eprintln!(
            "{} {} is valid: {} rule(s) over {} dependencies",
            "✓".green().bold(),
            config_path.cyan(),
            rules.len(),
            deps.len()
        );

        Ok(())
    }
}
