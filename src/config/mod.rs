//! Configuration loading and types for colmark.
//!
//! This module handles all aspects of configuration:
//! - Type definitions for config structures (`types`)
//! - Loading configs from files and the environment (`load`)

mod load;
mod types;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use types::{OutputConfig, OutputFormat, ParserConfig};

/// Config file looked up in the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "colmark.yaml";

// =============================================================================
// Errors
// =============================================================================

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to deserialize config: {0}")]
    Deserialize(#[from] config::ConfigError),

    #[error("failed to get current working directory: {0}")]
    CwdFailure(std::io::Error),

    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("config path is not valid UTF-8: {0}")]
    EncodePath(PathBuf),

    #[error("{0}")]
    Validation(String),
}

// =============================================================================
// Top-level config
// =============================================================================

/// The top-level configuration.
///
/// ```yaml
/// parser:
///   words_per_minute: 200
/// output:
///   format: json
///   pretty: true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Check values the types alone cannot rule out.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parser.words_per_minute == 0 {
            return Err(ConfigError::Validation(
                "invalid config: 'parser.words_per_minute' must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
