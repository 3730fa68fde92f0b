//! Plan command implementation

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tracing::info;

use crate::classify::{classify, ChunkMap};
use crate::config::{manifest_dependencies, Config};

/// Compute the chunk mapping and emit it as JSON
#[derive(Args, Debug)]
pub struct PlanCommand {
    /// Read dependency names from a package.json instead of the config
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Write the mapping to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

impl PlanCommand {
    pub fn execute(&self, config_path: &str) -> Result<()> {
        info!("Loading configuration from {}", config_path);
        let config = Config::load(config_path)?;

        let deps = match &self.manifest {
            Some(path) => manifest_dependencies(path)?,
            None => config.dependency_list(),
        };

        let chunks = classify(&deps, &config.patterns)?;

        let json = if self.compact {
            serde_json::to_string(&chunks)?
        } else {
            serde_json::to_string_pretty(&chunks)?
        };

        match &self.output {
            Some(path) => {
                fs::write(path, &json)
                    .with_context(|| format!("Failed to write mapping: {}", path.display()))?;

                eprintln!(
                    "{} Wrote chunk mapping to {}",
                    "✓".green().bold(),
                    path.display().to_string().cyan()
                );
            }
            None => println!("{json}"),
        }

        print_summary(&chunks);

        Ok(())
    }
}

/// Print a per-chunk summary to stderr
fn print_summary(chunks: &ChunkMap) {
    eprintln!("\n{} Planned {} chunk(s)\n", "✓".green().bold(), chunks.len());

    for (name, deps) in chunks {
        eprintln!(
            "  {} {} {}",
            "•".dimmed(),
            name.cyan(),
            format!("{} dependencies", deps.len()).dimmed()
        );
    }

    eprintln!();
}
