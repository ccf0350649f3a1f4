//! Unordered and ordered lists.

use std::sync::LazyLock;

use regex::Regex;

use super::{Pass, PassContext};
use crate::parser::error::PassError;

static UNORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[-*+]\s+(.+)$").expect("Invalid regex pattern for unordered item")
});

static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d+\.\s+(.+)$").expect("Invalid regex pattern for ordered item")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn open(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul class=\"col-list\">",
            ListKind::Ordered => "<ol class=\"col-list\">",
        }
    }

    fn close(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

/// Groups each contiguous run of same-kind item lines into one list.
///
/// A single forward scan over lines. Switching between `-` and `1.` items
/// closes the open list before opening the other; any other line closes it
/// too. Lists are set off by blank lines so the paragraph pass leaves them
/// alone.
pub struct ListPass;

impl Pass for ListPass {
    fn name(&self) -> &'static str {
        "lists"
    }

    fn apply(&self, text: &str, _ctx: &PassContext<'_>) -> Result<String, PassError> {
        let mut out: Vec<String> = Vec::new();
        let mut open: Option<ListKind> = None;

        for line in text.lines() {
            let item = if let Some(caps) = UNORDERED_ITEM.captures(line) {
                Some((ListKind::Unordered, caps[1].to_string()))
            } else {
                ORDERED_ITEM
                    .captures(line)
                    .map(|caps| (ListKind::Ordered, caps[1].to_string()))
            };

            match item {
                Some((kind, content)) => {
                    if open != Some(kind) {
                        if let Some(prev) = open.take() {
                            out.push(prev.close().to_string());
                        }
                        out.push(String::new());
                        out.push(kind.open().to_string());
                        open = Some(kind);
                    }
                    out.push(format!("<li>{content}</li>"));
                }
                None => {
                    if let Some(prev) = open.take() {
                        out.push(prev.close().to_string());
                        out.push(String::new());
                    }
                    out.push(line.to_string());
                }
            }
        }

        if let Some(prev) = open {
            out.push(prev.close().to_string());
        }

        Ok(out.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> String {
        ListPass.apply(text, &PassContext::default()).unwrap()
    }

    #[test]
    fn test_unordered_run() {
        let out = run("- a\n* b\n+ c");
        assert_eq!(
            out,
            "\n<ul class=\"col-list\">\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>"
        );
    }

    #[test]
    fn test_ordered_run() {
        let out = run("1. one\n10. ten");
        assert_eq!(out, "\n<ol class=\"col-list\">\n<li>one</li>\n<li>ten</li>\n</ol>");
    }

    #[test]
    fn test_type_switch_closes_previous_list() {
        let out = run("- a\n1. b");
        let ul_close = out.find("</ul>").unwrap();
        let ol_open = out.find("<ol").unwrap();
        assert!(ul_close < ol_open);
        assert_eq!(out.matches("<li>").count(), 2);
        assert!(out.ends_with("</ol>"));
    }

    #[test]
    fn test_non_list_line_closes_list() {
        let out = run("intro\n- a\n- b\noutro");
        assert_eq!(
            out,
            "intro\n\n<ul class=\"col-list\">\n<li>a</li>\n<li>b</li>\n</ul>\n\noutro"
        );
    }

    #[test]
    fn test_blank_line_splits_lists() {
        let out = run("- a\n\n- b");
        assert_eq!(out.matches("<ul").count(), 2);
    }

    #[test]
    fn test_indented_items_and_rules() {
        let out = run("   - nested\n---\n-not an item");
        assert!(out.contains("<li>nested</li>"));
        assert!(out.contains("\n---\n"));
        assert!(out.ends_with("-not an item"));
    }
}
