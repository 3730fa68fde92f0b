//! Configuration handling for chunkplan
//!
//! Parses and manages chunkplan.toml configuration files.

mod manifest;
mod schema;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub use manifest::manifest_dependencies;
pub use schema::*;

use crate::classify::resolve_rules;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Dependency names mapped to version strings; only the keys feed
    /// the classifier, in declaration order
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,

    /// Pattern rules
    #[serde(default)]
    pub patterns: Patterns,
}

impl Config {
    /// Load configuration from a file path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        resolve_rules(&self.patterns)?;

        Ok(())
    }

    /// Dependency names in declaration order
    pub fn dependency_list(&self) -> Vec<String> {
        self.dependencies.keys().cloned().collect()
    }
}
