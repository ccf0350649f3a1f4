//! Front matter extraction and metadata normalization.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::options::ParserOptions;

/// Raw `key: value` pairs in the order they appear in the front matter.
pub type FrontMatter = IndexMap<String, String>;

/// Front matter block anchored at the very start of the document.
///
/// The opening and closing `---` lines must each be followed by a newline.
/// An empty block (`---\n---\n`) is allowed.
static FRONT_MATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*\r?\n")
        .expect("Invalid regex pattern for front matter")
});

/// Result of splitting front matter from a document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedContent {
    /// The raw front matter (empty if none found)
    pub front_matter: FrontMatter,
    /// The document without the front matter block, trimmed
    pub content: String,
}

/// Split an optional front matter block from the document.
///
/// ```text
/// ---
/// title: My Post
/// tags: rust, parsing
/// ---
///
/// # Content starts here
/// ```
///
/// Lines without a colon are skipped. A block without a closing delimiter
/// is not front matter at all, and the whole document is returned as content.
pub fn extract_front_matter(document: &str) -> ParsedContent {
    let Some(caps) = FRONT_MATTER.captures(document) else {
        return ParsedContent {
            front_matter: FrontMatter::new(),
            content: document.trim().to_string(),
        };
    };

    let block = caps.get(1).map_or("", |m| m.as_str());
    let rest = &document[caps.get(0).map_or(0, |m| m.end())..];

    ParsedContent {
        front_matter: parse_block(block),
        content: rest.trim().to_string(),
    }
}

fn parse_block(block: &str) -> FrontMatter {
    let mut front_matter = FrontMatter::new();
    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        front_matter.insert(key.to_string(), unquote(value.trim()).to_string());
    }
    front_matter
}

/// Strip one layer of matching `"` or `'` quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Normalized document metadata.
///
/// `title`, `date`, `author` and `tags` always have a value; every other
/// front matter key is carried verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    /// ISO date, `YYYY-MM-DD`
    pub date: String,
    pub author: String,
    pub tags: Vec<String>,
    /// Additional keys, in front matter order
    #[serde(flatten)]
    pub extra: IndexMap<String, String>,
}

impl Metadata {
    /// Merge raw front matter with the defaults from `options`.
    pub fn from_front_matter(mut front_matter: FrontMatter, options: &ParserOptions) -> Self {
        let mut take = |key: &str| {
            front_matter
                .shift_remove(key)
                .filter(|value| !value.is_empty())
        };

        let title = take("title").unwrap_or_else(|| options.default_title.clone());
        let date = take("date").unwrap_or_else(today);
        let author = take("author").unwrap_or_else(|| options.default_author.clone());
        let tags = take("tags").map(|tags| split_tags(&tags)).unwrap_or_default();

        Self {
            title,
            date,
            author,
            tags,
            extra: front_matter,
        }
    }
}

fn split_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Today's UTC date as `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_front_matter_basic() {
        let parsed = extract_front_matter("---\ntitle: My Post\nauthor: Jo\n---\n\n# Hello\n");
        assert_eq!(parsed.front_matter.get("title").unwrap(), "My Post");
        assert_eq!(parsed.front_matter.get("author").unwrap(), "Jo");
        assert_eq!(parsed.content, "# Hello");
    }

    #[test]
    fn test_extract_front_matter_absent() {
        let parsed = extract_front_matter("\n  # Just text  \n");
        assert!(parsed.front_matter.is_empty());
        assert_eq!(parsed.content, "# Just text");
    }

    #[test]
    fn test_extract_front_matter_missing_closing_delimiter() {
        let doc = "---\ntitle: Broken\n\nBody text";
        let parsed = extract_front_matter(doc);
        assert!(parsed.front_matter.is_empty());
        assert_eq!(parsed.content, doc);
    }

    #[test]
    fn test_extract_front_matter_requires_newline_after_closing() {
        let parsed = extract_front_matter("---\ntitle: x\n---");
        assert!(parsed.front_matter.is_empty());
        assert_eq!(parsed.content, "---\ntitle: x\n---");
    }

    #[test]
    fn test_extract_front_matter_must_start_document() {
        let parsed = extract_front_matter("intro\n---\ntitle: x\n---\nbody");
        assert!(parsed.front_matter.is_empty());
    }

    #[test]
    fn test_extract_front_matter_empty_block() {
        let parsed = extract_front_matter("---\n---\nBody");
        assert!(parsed.front_matter.is_empty());
        assert_eq!(parsed.content, "Body");
    }

    #[test]
    fn test_parse_block_rules() {
        let parsed = extract_front_matter(
            "---\ntitle: \"Quoted: yes\"\nnot a pair\n\nurl: http://x.y/z\n: orphan\nsub: 'single'\ntitle: Second\n---\n",
        );
        let fm = parsed.front_matter;
        assert_eq!(fm.get("title").unwrap(), "Second");
        assert_eq!(fm.get("url").unwrap(), "http://x.y/z");
        assert_eq!(fm.get("sub").unwrap(), "single");
        assert_eq!(fm.len(), 3);
        // duplicate keys keep their first position
        assert_eq!(fm.get_index(0).unwrap().0, "title");
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"a\""), "a");
        assert_eq!(unquote("'a'"), "a");
        assert_eq!(unquote("\"a'"), "\"a'");
        assert_eq!(unquote("\"\"x\"\""), "\"x\"");
        assert_eq!(unquote("\""), "\"");
    }

    #[test]
    fn test_metadata_defaults() {
        let meta = Metadata::from_front_matter(FrontMatter::new(), &ParserOptions::default());
        assert_eq!(meta.title, "Untitled");
        assert_eq!(meta.author, "Anonymous");
        assert_eq!(meta.date, today());
        assert!(meta.tags.is_empty());
        assert!(meta.extra.is_empty());
    }

    #[test]
    fn test_metadata_tags_and_extra() {
        let mut fm = FrontMatter::new();
        fm.insert("tags".into(), " a, b ,, c".into());
        fm.insert("layout".into(), "post".into());
        fm.insert("title".into(), "".into());
        fm.insert("date".into(), "2024-01-02".into());

        let meta = Metadata::from_front_matter(fm, &ParserOptions::default());
        assert_eq!(meta.tags, vec!["a", "b", "c"]);
        assert_eq!(meta.title, "Untitled");
        assert_eq!(meta.date, "2024-01-02");
        assert_eq!(meta.extra.get("layout").unwrap(), "post");
        assert_eq!(meta.extra.len(), 1);
    }

    #[test]
    fn test_metadata_serializes_flat() {
        let mut fm = FrontMatter::new();
        fm.insert("layout".into(), "post".into());
        fm.insert("date".into(), "2024-01-02".into());
        let meta = Metadata::from_front_matter(fm, &ParserOptions::default());

        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["layout"], "post");
        assert_eq!(json["title"], "Untitled");
        assert_eq!(json["tags"], serde_json::json!([]));
    }
}
