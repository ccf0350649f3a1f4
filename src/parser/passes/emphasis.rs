//! `**bold**` and `*italic*`.

use std::sync::LazyLock;

use regex::Regex;

use super::{Pass, PassContext};
use crate::parser::error::PassError;

// Content may not start or end with whitespace, so a `* ` list marker never opens a span.
static BOLD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(\S|\S.*?\S)\*\*").expect("Invalid regex pattern for bold")
});

static ITALIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*([^\s*]|[^\s*][^*\n]*?[^\s*])\*").expect("Invalid regex pattern for italic")
});

/// Wraps bold spans, then italic spans.
///
/// Bold runs first and consumes its `**` delimiters, so the italic pattern
/// only ever sees single stars. Text inside is not escaped.
pub struct EmphasisPass;

impl Pass for EmphasisPass {
    fn name(&self) -> &'static str {
        "emphasis"
    }

    fn apply(&self, text: &str, _ctx: &PassContext<'_>) -> Result<String, PassError> {
        let text = BOLD.replace_all(text, "<strong class=\"col-bold\">$1</strong>");
        Ok(ITALIC
            .replace_all(&text, "<em class=\"col-italic\">$1</em>")
            .into_owned())
    }
}
