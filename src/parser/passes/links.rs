//! Images and links.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{Pass, PassContext};
use crate::parser::error::PassError;
use crate::parser::sanitize::escape_html;

static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("Invalid regex pattern for image")
});

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid regex pattern for link")
});

/// Rewrites `![alt](url)` to `<img>` and `[text](url)` to `<a>`.
///
/// Images go first: `[alt](url)` inside an image would otherwise be taken
/// for a link. Absolute `http` links open in a new tab. Inline code in a URL
/// or alt text is written as its raw text, since attributes cannot hold
/// markup. Link text keeps it as rendered code.
pub struct LinkPass;

impl Pass for LinkPass {
    fn name(&self) -> &'static str {
        "links"
    }

    fn apply(&self, text: &str, ctx: &PassContext<'_>) -> Result<String, PassError> {
        let text = IMAGE.replace_all(text, |caps: &Captures| {
            format!(
                "<img src=\"{}\" alt=\"{}\" class=\"col-image\" loading=\"lazy\" />",
                escape_html(&ctx.code_text(&caps[2])),
                escape_html(&ctx.code_text(&caps[1]))
            )
        });

        Ok(LINK
            .replace_all(&text, |caps: &Captures| {
                let url = ctx.code_text(&caps[2]);
                let external = if url.starts_with("http") {
                    " target=\"_blank\" rel=\"noopener noreferrer\""
                } else {
                    ""
                };
                format!(
                    "<a href=\"{}\" class=\"col-link\"{}>{}</a>",
                    escape_html(&url),
                    external,
                    escape_html(&caps[1])
                )
            })
            .into_owned())
    }
}
