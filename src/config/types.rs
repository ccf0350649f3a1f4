//! Configuration type definitions.
//!
//! This module contains the data structures used in `colmark.yaml`.
//! These types are pure data - no I/O or complex logic.

use colmark::ParserOptions;
use colmark::parser::options::{DEFAULT_AUTHOR, DEFAULT_TITLE, DEFAULT_WORDS_PER_MINUTE};
use serde::{Deserialize, Serialize};

// =============================================================================
// Parser settings
// =============================================================================

/// Settings handed to the parser.
///
/// ```yaml
/// parser:
///   words_per_minute: 250
///   default_title: Draft
///   default_author: Staff
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Reading speed for the reading-time estimate
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,
    /// Title used when a document has none
    #[serde(default = "default_title")]
    pub default_title: String,
    /// Author used when a document has none
    #[serde(default = "default_author")]
    pub default_author: String,
}

fn default_words_per_minute() -> u32 {
    DEFAULT_WORDS_PER_MINUTE
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            words_per_minute: default_words_per_minute(),
            default_title: default_title(),
            default_author: default_author(),
        }
    }
}

impl ParserConfig {
    pub fn to_options(&self) -> ParserOptions {
        ParserOptions {
            words_per_minute: self.words_per_minute,
            default_title: self.default_title.clone(),
            default_author: self.default_author.clone(),
        }
    }
}

// =============================================================================
// Output settings
// =============================================================================

/// How rendered documents are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The full parse result as JSON
    #[default]
    Json,
    /// The full parse result as YAML
    Yaml,
    /// Only the rendered body HTML
    Html,
}

impl OutputFormat {
    /// File extension used when writing to an output directory.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Html => "html",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}
