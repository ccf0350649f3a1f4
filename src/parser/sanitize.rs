//! Textual HTML sanitization and escaping.
//!
//! The sanitizer only ever sees author-written text. Markup produced by the
//! rewrite passes is built from escaped fragments and never goes through here.

use std::sync::LazyLock;

use regex::Regex;

use super::passes::code::is_placeholder_char;

/// Tags an author may write directly in a document.
///
/// Stored for reference only: the sanitizer strips scripts, event handlers and
/// `javascript:` URIs but does not reject other tags.
pub const TAG_WHITELIST: &[&str] = &[
    "a", "abbr", "b", "blockquote", "br", "code", "del", "details", "div", "em", "figcaption",
    "figure", "h1", "h2", "h3", "h4", "h5", "h6", "hr", "i", "img", "kbd", "li", "mark", "ol", "p",
    "pre", "s", "small", "span", "strong", "sub", "summary", "sup", "table", "tbody", "td", "th",
    "thead", "tr", "u", "ul",
];

/// The five XML-significant characters and their entities.
pub const ENTITIES: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#39;"),
];

static SCRIPT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>").expect("Invalid regex pattern for script")
});

static EVENT_HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\s+on\w+\s*=\s*(?:"[^"]*"|'[^']*')"#)
        .expect("Invalid regex pattern for event handler")
});

static JAVASCRIPT_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)javascript:").expect("Invalid regex pattern for javascript URI")
});

/// Remove `<script>` elements, inline `on*` handlers and `javascript:` URIs.
///
/// Also drops the private-use characters the code pass uses as placeholders,
/// so authors cannot forge them.
pub fn sanitize(text: &str) -> String {
    let text = SCRIPT_BLOCK.replace_all(text, "");
    let text = EVENT_HANDLER.replace_all(&text, "");
    let text = JAVASCRIPT_URI.replace_all(&text, "");
    text.chars().filter(|c| !is_placeholder_char(*c)).collect()
}

/// Escape `& < > " '` for embedding user text in generated HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match ENTITIES.iter().find(|(raw, _)| *raw == c) {
            Some((_, entity)) => escaped.push_str(entity),
            None => escaped.push(c),
        }
    }
    escaped
}
