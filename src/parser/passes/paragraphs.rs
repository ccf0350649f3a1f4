//! Paragraph wrapping, always the last pass.

use std::sync::LazyLock;

use regex::Regex;

use super::code::BLOCK_OPEN;
use super::{Pass, PassContext};
use crate::parser::error::PassError;

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("Invalid regex pattern for blank lines"));

/// Sections that are already block-level and must not be wrapped.
static ALREADY_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)^(?:
            </?(?:h[1-6]|p|div|ul|ol|li|blockquote|pre|hr|table|thead|tbody|tr|section|article|aside|header|footer|nav|figure|details|summary|dl)\b
            | \#
            | [-*+]\s
            | \d+\.\s
            | >
            | ```
        )",
    )
    .expect("Invalid regex pattern for block start")
});

/// Wraps every prose section in `<p>`.
///
/// Sections are separated by blank lines. A section passes through untouched
/// when it already starts with block-level HTML, a fenced code placeholder,
/// or raw list, heading, quote or fence syntax.
pub struct ParagraphPass;

impl Pass for ParagraphPass {
    fn name(&self) -> &'static str {
        "paragraphs"
    }

    fn apply(&self, text: &str, _ctx: &PassContext<'_>) -> Result<String, PassError> {
        let sections: Vec<String> = BLANK_LINES
            .split(text)
            .map(str::trim)
            .filter(|section| !section.is_empty())
            .map(|section| {
                if section.starts_with(BLOCK_OPEN) || ALREADY_BLOCK.is_match(section) {
                    section.to_string()
                } else {
                    format!("<p>{section}</p>")
                }
            })
            .collect();

        Ok(sections.join("\n\n"))
    }
}
