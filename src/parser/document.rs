//! The parse output record.

use serde::{Deserialize, Serialize};

use super::metadata::Metadata;

/// Everything produced by one [`Parser::parse`](crate::Parser::parse) call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult {
    /// Front matter merged with defaults
    pub metadata: Metadata,
    /// Rendered `<preview>` excerpt; empty when the document has none
    pub preview: String,
    /// Rendered body HTML
    pub content: String,
    pub word_count: usize,
    /// Minutes, at least 1
    pub estimated_read_time: usize,
}
