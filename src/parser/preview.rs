//! `<preview>` excerpt extraction.

use std::sync::LazyLock;

use regex::Regex;

static PREVIEW_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<preview>(.*?)</preview>").expect("Invalid regex pattern for preview")
});

/// An excerpt pulled out of a document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// Inner text of the first `<preview>` block, trimmed. Empty if none.
    pub preview: String,
    /// The body with every `<preview>` block removed.
    pub body: String,
}

/// Take the first `<preview>` block as the excerpt and remove all of them from the body.
pub fn extract_preview(text: &str) -> Extracted {
    let preview = PREVIEW_BLOCK
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default();

    let body = PREVIEW_BLOCK.replace_all(text, "").into_owned();

    Extracted { preview, body }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_preview() {
        let out = extract_preview("just a body");
        assert_eq!(out.preview, "");
        assert_eq!(out.body, "just a body");
    }

    #[test]
    fn test_first_preview_wins_and_all_removed() {
        let out = extract_preview("<preview>\n first \n</preview>body<preview>second</preview> end");
        assert_eq!(out.preview, "first");
        assert_eq!(out.body, "body end");
    }

    #[test]
    fn test_multiline_preview() {
        let out = extract_preview("<preview>line one\nline two</preview>\n\nRest");
        assert_eq!(out.preview, "line one\nline two");
        assert_eq!(out.body, "\n\nRest");
    }

    #[test]
    fn test_unclosed_preview_is_left_alone() {
        let out = extract_preview("<preview>never closed");
        assert_eq!(out.preview, "");
        assert_eq!(out.body, "<preview>never closed");
    }
}
