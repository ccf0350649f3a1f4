//! Static parser configuration.

/// Reading speed used for the reading-time estimate.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;
pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_AUTHOR: &str = "Anonymous";

/// Options for customizing how documents are normalized and measured.
///
/// Options are fixed once a [`Parser`](crate::Parser) is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Words read per minute when estimating reading time. Default: `200`.
    pub words_per_minute: u32,
    /// Title used when the front matter has none. Default: `"Untitled"`.
    pub default_title: String,
    /// Author used when the front matter has none. Default: `"Anonymous"`.
    pub default_author: String,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            default_title: DEFAULT_TITLE.to_string(),
            default_author: DEFAULT_AUTHOR.to_string(),
        }
    }
}
