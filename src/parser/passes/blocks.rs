//! Blockquotes and horizontal rules.

use std::sync::LazyLock;

use regex::Regex;

use super::{Pass, PassContext};
use crate::parser::error::PassError;

static BLOCKQUOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^> (.+)$").expect("Invalid regex pattern for blockquote")
});

static RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^---[ \t]*$").expect("Invalid regex pattern for rule"));

/// One `<blockquote>` per `> ` line, and `<hr />` for `---` lines.
///
/// Consecutive quote lines are not merged.
pub struct BlockPass;

impl Pass for BlockPass {
    fn name(&self) -> &'static str {
        "blocks"
    }

    fn apply(&self, text: &str, _ctx: &PassContext<'_>) -> Result<String, PassError> {
        let text = BLOCKQUOTE.replace_all(
            text,
            "\n<blockquote class=\"col-blockquote\">$1</blockquote>\n",
        );
        Ok(RULE
            .replace_all(&text, "\n<hr class=\"col-hr\" />\n")
            .into_owned())
    }
}
