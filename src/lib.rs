//! # colmark
//!
//! Converts COL documents (a small markdown-flavored markup with an optional
//! front-matter header and an optional `<preview>` excerpt) into sanitized HTML
//! for blog rendering.
//!
//! ```
//! use colmark::Parser;
//!
//! let parser = Parser::new();
//! let result = parser.parse("---\ntitle: Hello\n---\n# Hi\n**bold** text").unwrap();
//!
//! assert_eq!(result.metadata.title, "Hello");
//! assert!(result.content.contains("<strong class=\"col-bold\">bold</strong>"));
//! ```

pub mod parser;

pub use parser::{
    Metadata, ParseError, ParseResult, Parser, ParserOptions, Pass, PassContext, PassError,
    PassPipeline,
};
