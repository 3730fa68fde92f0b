//! chunkplan library
//!
//! Core functionality for the chunkplan chunk-mapping tool.

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;

pub use classify::{classify, ChunkMap};
pub use cli::Cli;
pub use config::Config;
pub use error::ConfigError;
