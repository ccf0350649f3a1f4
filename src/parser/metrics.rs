//! Word count and reading time.

use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid regex pattern for tag"));

/// Remove every HTML tag, keeping the text between them.
pub fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

/// Number of whitespace-separated words in `html` once tags are removed.
pub fn word_count(html: &str) -> usize {
    strip_tags(html).split_whitespace().count()
}

/// Minutes needed to read `words` at `words_per_minute`, never less than one.
pub fn read_time(words: usize, words_per_minute: u32) -> usize {
    let per_minute = words_per_minute.max(1) as usize;
    words.div_ceil(per_minute).max(1)
}
