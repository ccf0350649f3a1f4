//! Code spans, rendered before any other rewrite.
//!
//! Fenced blocks and inline spans are rendered to escaped HTML straight away
//! and parked in a [`CodeVault`]. The text keeps only an opaque placeholder
//! for each, so no later pass can rewrite `*`, `#`, `-` or blank lines inside
//! code. [`CodeVault::restore`] swaps the rendered HTML back in at the end.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::parser::sanitize::escape_html;

/// Opens a fenced-block placeholder.
pub const BLOCK_OPEN: char = '\u{E000}';
/// Closes a fenced-block placeholder.
pub const BLOCK_CLOSE: char = '\u{E001}';
const INLINE_OPEN: char = '\u{E002}';
const INLINE_CLOSE: char = '\u{E003}';

static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:([A-Za-z0-9_+-]+)[ \t]*\n|[ \t]*\n?)(.*?)```")
        .expect("Invalid regex pattern for fenced code")
});

static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`\n]+)`").expect("Invalid regex pattern for inline code"));

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("[\u{E000}\u{E002}]([0-9]+)[\u{E001}\u{E003}]")
        .expect("Invalid regex pattern for code placeholder")
});

/// Whether `c` is reserved for code placeholders.
pub fn is_placeholder_char(c: char) -> bool {
    matches!(c, BLOCK_OPEN | BLOCK_CLOSE | INLINE_OPEN | INLINE_CLOSE)
}

/// A parked code span: its rendered HTML and the raw code it came from.
#[derive(Debug)]
struct Fragment {
    html: String,
    code: String,
}

/// Rendered code fragments for one document, indexed by placeholder number.
///
/// Lives for a single parse call.
#[derive(Debug, Default)]
pub struct CodeVault {
    fragments: Vec<Fragment>,
}

impl CodeVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    fn park(&mut self, html: String, code: &str, open: char, close: char) -> String {
        let index = self.fragments.len();
        self.fragments.push(Fragment {
            html,
            code: code.to_string(),
        });
        format!("{open}{index}{close}")
    }

    /// Replace fenced blocks, then inline spans, with placeholders.
    ///
    /// Fenced blocks are separated from surrounding text by blank lines so
    /// the paragraph pass treats them as their own section.
    pub fn shield(&mut self, text: &str) -> String {
        let text = FENCED_BLOCK.replace_all(text, |caps: &Captures| {
            let code = caps.get(2).map_or("", |m| m.as_str()).trim();
            let class = match caps.get(1) {
                Some(lang) => format!("col-code-block language-{}", lang.as_str()),
                None => "col-code-block".to_string(),
            };
            let html = format!(
                "<pre class=\"col-pre\"><code class=\"{}\">{}</code></pre>",
                class,
                escape_html(code)
            );
            let placeholder = self.park(html, code, BLOCK_OPEN, BLOCK_CLOSE);
            format!("\n\n{placeholder}\n\n")
        });

        INLINE_CODE
            .replace_all(&text, |caps: &Captures| {
                let html = format!(
                    "<code class=\"col-inline-code\">{}</code>",
                    escape_html(&caps[1])
                );
                self.park(html, &caps[1], INLINE_OPEN, INLINE_CLOSE)
            })
            .into_owned()
    }

    /// Put the rendered code back in place of its placeholders.
    pub fn restore(&self, text: &str) -> String {
        self.substitute(text, |fragment| &fragment.html)
    }

    /// Replace placeholders with the raw code they stand for.
    ///
    /// For text that ends up in an attribute value or an id, where markup
    /// is not allowed. The result is unescaped.
    pub fn code_text(&self, text: &str) -> String {
        self.substitute(text, |fragment| &fragment.code)
    }

    fn substitute(&self, text: &str, pick: impl Fn(&Fragment) -> &String) -> String {
        PLACEHOLDER
            .replace_all(text, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| self.fragments.get(index))
                    .map(|fragment| pick(fragment).clone())
                    .unwrap_or_default()
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> String {
        let mut vault = CodeVault::new();
        let shielded = vault.shield(text);
        vault.restore(&shielded)
    }

    #[test]
    fn test_fenced_block_with_language() {
        let out = render("```rust\nlet x = a < b;\n```");
        assert_eq!(
            out.trim(),
            "<pre class=\"col-pre\"><code class=\"col-code-block language-rust\">let x = a &lt; b;</code></pre>"
        );
    }

    #[test]
    fn test_fenced_block_without_language() {
        let out = render("```\nplain\n```");
        assert!(out.contains("<code class=\"col-code-block\">plain</code>"));
    }

    #[test]
    fn test_inline_code_escaped() {
        assert_eq!(
            render("use `<T>` here"),
            "use <code class=\"col-inline-code\">&lt;T&gt;</code> here"
        );
    }

    #[test]
    fn test_backticks_inside_fence_are_not_inline_code() {
        let out = render("```\nlet s = `x`;\n```");
        assert!(out.contains("let s = `x`;"));
        assert!(!out.contains("col-inline-code"));
    }

    #[test]
    fn test_shield_hides_markup_characters() {
        let mut vault = CodeVault::new();
        let shielded = vault.shield("```\n# not a heading\n*x*\n```\nand `**y**`");
        assert_eq!(vault.len(), 2);
        assert!(!shielded.contains('#'));
        assert!(!shielded.contains('*'));
    }

    #[test]
    fn test_fenced_block_is_isolated_by_blank_lines() {
        let mut vault = CodeVault::new();
        let shielded = vault.shield("text\n```\ncode\n```\nmore");
        assert_eq!(shielded, "text\n\n\n\u{E000}0\u{E001}\n\n\nmore");
    }

    #[test]
    fn test_single_line_fence_keeps_its_content() {
        let out = render("Run ```hello``` now");
        assert!(out.contains("<code class=\"col-code-block\">hello</code>"));
        assert!(!out.contains("language-"));

        let out = render("```let x = 1```");
        assert_eq!(
            out.trim(),
            "<pre class=\"col-pre\"><code class=\"col-code-block\">let x = 1</code></pre>"
        );
    }

    #[test]
    fn test_language_tag_needs_newline() {
        let out = render("```js \nlet a;\n```");
        assert!(out.contains("language-js\">let a;</code>"));
    }

    #[test]
    fn test_code_text_gives_raw_code() {
        let mut vault = CodeVault::new();
        let shielded = vault.shield("a `<b>` and ```\nx & y\n```");
        assert_eq!(vault.code_text(&shielded), "a <b> and \n\nx & y\n\n");
    }

    #[test]
    fn test_unclosed_fence_left_alone() {
        let mut vault = CodeVault::new();
        let shielded = vault.shield("```\nnever closed");
        assert!(vault.is_empty());
        assert_eq!(shielded, "```\nnever closed");
    }
}
