//! The COL parsing pipeline.
//!
//! A document flows strictly forward through these stages:
//! 1. Front matter extraction (`metadata`)
//! 2. Preview extraction (`preview`)
//! 3. Sanitization of author-written HTML (`sanitize`)
//! 4. Code shielding, then the ordered rewrite passes (`passes`)
//! 5. Word count and reading time on the final HTML (`metrics`)
//!
//! The preview takes its own short path: sanitize, emphasis, links.

pub mod document;
pub mod error;
pub mod metadata;
pub mod metrics;
pub mod options;
pub mod passes;
pub mod preview;
pub mod sanitize;

pub use document::ParseResult;
pub use error::{ParseError, PassError};
pub use metadata::Metadata;
pub use options::ParserOptions;
pub use passes::{Pass, PassContext, PassPipeline};

use metadata::extract_front_matter;
use passes::code::CodeVault;
use preview::extract_preview;
use sanitize::{TAG_WHITELIST, sanitize};

/// Converts COL documents to [`ParseResult`]s.
///
/// Holds only read-only configuration, so one parser can serve any number of
/// sequential or concurrent `parse` calls.
pub struct Parser {
    options: ParserOptions,
    body: PassPipeline,
    preview: PassPipeline,
}

impl Parser {
    /// Create a parser with default options and the standard passes.
    pub fn new() -> Self {
        Self::with_options(ParserOptions::default())
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self {
            options,
            body: PassPipeline::default_pipeline(),
            preview: PassPipeline::preview_pipeline(),
        }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// The body pass pipeline, for inserting custom passes.
    pub fn pipeline_mut(&mut self) -> &mut PassPipeline {
        &mut self.body
    }

    /// Tags an author may write directly. Not enforced beyond script and
    /// handler stripping.
    pub fn tag_whitelist(&self) -> &'static [&'static str] {
        TAG_WHITELIST
    }

    /// Parse a raw document.
    ///
    /// Fails with [`ParseError::InvalidInput`] for an empty document and with
    /// [`ParseError::ParseFailure`] if any pass fails.
    pub fn parse(&self, document: &str) -> Result<ParseResult, ParseError> {
        if document.is_empty() {
            return Err(ParseError::InvalidInput("document is empty".to_string()));
        }

        let parsed = extract_front_matter(document);
        let metadata = Metadata::from_front_matter(parsed.front_matter, &self.options);

        let extracted = extract_preview(&parsed.content);
        let content = self.render_body(&extracted.body)?;
        let preview = self.render_preview(&extracted.preview)?;

        let word_count = metrics::word_count(&content);
        let estimated_read_time = metrics::read_time(word_count, self.options.words_per_minute);

        tracing::debug!(
            title = %metadata.title,
            words = word_count,
            minutes = estimated_read_time,
            has_preview = !preview.is_empty(),
            "Parsed document"
        );

        Ok(ParseResult {
            metadata,
            preview,
            content,
            word_count,
            estimated_read_time,
        })
    }

    /// Parse a document given as bytes, which must be UTF-8.
    pub fn parse_bytes(&self, document: &[u8]) -> Result<ParseResult, ParseError> {
        let document = std::str::from_utf8(document)
            .map_err(|e| ParseError::InvalidInput(format!("document is not UTF-8: {e}")))?;
        self.parse(document)
    }

    /// Render a document body (no front matter, no preview tags) to HTML.
    pub fn render_body(&self, body: &str) -> Result<String, ParseError> {
        let clean = sanitize(body);

        let mut vault = CodeVault::new();
        let shielded = vault.shield(&clean);
        tracing::debug!(pass = "code", spans = vault.len(), "Shielded code");

        let html = self
            .body
            .run(&shielded, &PassContext::with_vault(&vault))
            .map_err(|(stage, e)| ParseError::failure(stage, e.message))?;

        Ok(vault.restore(&html).trim().to_string())
    }

    /// Render a preview excerpt inline: emphasis and links only, no paragraphs.
    pub fn render_preview(&self, preview: &str) -> Result<String, ParseError> {
        if preview.is_empty() {
            return Ok(String::new());
        }

        let clean = sanitize(preview);
        let html = self
            .preview
            .run(&clean, &PassContext::default())
            .map_err(|(stage, e)| ParseError::failure(format!("preview {stage}"), e.message))?;

        Ok(html.trim().to_string())
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_parser_is_send_sync() {
        assert_send_sync::<Parser>();
    }

    #[test]
    fn test_empty_document_is_invalid() {
        let err = Parser::new().parse("").unwrap_err();
        assert!(matches!(err, ParseError::InvalidInput(_)));
    }

    #[test]
    fn test_non_utf8_is_invalid() {
        let err = Parser::new().parse_bytes(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ParseError::InvalidInput(_)));
    }

    #[test]
    fn test_whitespace_document_parses_to_nothing() {
        let result = Parser::new().parse("   \n\n").unwrap();
        assert_eq!(result.content, "");
        assert_eq!(result.word_count, 0);
        assert_eq!(result.estimated_read_time, 1);
    }

    #[test]
    fn test_custom_pass_failure_becomes_parse_failure() {
        struct Broken;
        impl Pass for Broken {
            fn name(&self) -> &'static str {
                "broken"
            }
            fn apply(&self, _text: &str, _ctx: &PassContext<'_>) -> Result<String, PassError> {
                Err(PassError::new("unbalanced"))
            }
        }

        let mut parser = Parser::new();
        parser.pipeline_mut().insert_after("lists", Broken);
        let err = parser.parse("text").unwrap_err();
        assert_eq!(err, ParseError::failure("broken", "unbalanced"));
    }

    #[test]
    fn test_code_is_opaque_to_later_passes() {
        let html = Parser::new()
            .render_body("```\n# keep\n- keep\n\n*keep*\n```")
            .unwrap();
        assert_eq!(
            html,
            "<pre class=\"col-pre\"><code class=\"col-code-block\"># keep\n- keep\n\n*keep*</code></pre>"
        );
    }

    #[test]
    fn test_inline_code_at_paragraph_start_is_wrapped() {
        let html = Parser::new().render_body("`x` is a variable").unwrap();
        assert_eq!(
            html,
            "<p><code class=\"col-inline-code\">x</code> is a variable</p>"
        );
    }

    #[test]
    fn test_preview_is_inline_only() {
        let html = Parser::new()
            .render_preview("# Not heading\n\n**Bold** [link](/x)")
            .unwrap();
        assert_eq!(
            html,
            "# Not heading\n\n<strong class=\"col-bold\">Bold</strong> <a href=\"/x\" class=\"col-link\">link</a>"
        );
    }

    #[test]
    fn test_words_per_minute_option() {
        let parser = Parser::with_options(ParserOptions {
            words_per_minute: 2,
            ..Default::default()
        });
        let result = parser.parse("one two three four five").unwrap();
        assert_eq!(result.word_count, 5);
        assert_eq!(result.estimated_read_time, 3);
    }
}
