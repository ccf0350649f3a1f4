//! `#` headings.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{Pass, PassContext};
use crate::parser::error::PassError;

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(#{1,6})[ \t]+(.+)$").expect("Invalid regex pattern for heading")
});

static NON_ALNUM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid regex pattern for slug"));

/// Rewrites `# text` .. `###### text` lines to `<h1>`..`<h6>` with an `id`.
///
/// Heading text is emitted as written, not escaped. The id is built from the
/// raw text of any inline code in the title. Each heading is set off
/// by blank lines so the paragraph pass never folds it into prose.
pub struct HeadingPass;

impl Pass for HeadingPass {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn apply(&self, text: &str, ctx: &PassContext<'_>) -> Result<String, PassError> {
        Ok(HEADING
            .replace_all(text, |caps: &Captures| {
                let level = caps[1].len();
                let title = caps[2].trim();
                format!(
                    "\n<h{level} id=\"{}\" class=\"col-heading col-h{level}\">{title}</h{level}>\n",
                    slugify(&ctx.code_text(title))
                )
            })
            .into_owned())
    }
}

/// Lower-case `text` and collapse every non-alphanumeric run to one hyphen.
pub fn slugify(text: &str) -> String {
    NON_ALNUM
        .replace_all(&text.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}
