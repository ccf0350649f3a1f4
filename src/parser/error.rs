//! Parser error types.

/// Errors returned by [`Parser::parse`](crate::Parser::parse).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("parse failed in '{stage}': {message}")]
    ParseFailure { stage: String, message: String },
}

impl ParseError {
    /// Wrap a stage failure.
    pub fn failure(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseFailure {
            stage: stage.into(),
            message: message.into(),
        }
    }
}

/// Error raised by a single rewrite pass.
///
/// The built-in passes never fail; custom passes inserted through
/// [`PassPipeline`](crate::PassPipeline) may.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct PassError {
    pub message: String,
}

impl PassError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
