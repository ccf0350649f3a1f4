//! Ordered text-rewrite passes.
//!
//! Each pass scans the whole text and rewrites the spans it recognizes into
//! HTML. Code has already been replaced by opaque placeholders (see
//! [`code`]) before the first pass runs. The default order is:
//!
//! 1. **HeadingPass** - `#`..`######` lines
//! 2. **LinkPass** - images, then links
//! 3. **EmphasisPass** - bold, then italic
//! 4. **ListPass** - runs of `-`/`*`/`+` and `1.` lines
//! 5. **BlockPass** - `> ` quotes and `---` rules
//! 6. **ParagraphPass** - wraps the remaining prose
//!
//! The ordering carries the grammar: images before links because link
//! syntax is a subset of image syntax, bold before italic so italic never
//! eats a bold delimiter, and paragraphs last because they inspect what the
//! earlier passes left behind.

pub mod blocks;
pub mod code;
pub mod emphasis;
pub mod heading;
pub mod links;
pub mod lists;
pub mod paragraphs;

pub use blocks::BlockPass;
pub use emphasis::EmphasisPass;
pub use heading::HeadingPass;
pub use links::LinkPass;
pub use lists::ListPass;
pub use paragraphs::ParagraphPass;

use super::error::PassError;
use code::CodeVault;

/// Per-document state shared by every pass in one run.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassContext<'a> {
    vault: Option<&'a CodeVault>,
}

impl<'a> PassContext<'a> {
    /// Context for a body whose code has been parked in `vault`.
    pub fn with_vault(vault: &'a CodeVault) -> Self {
        Self { vault: Some(vault) }
    }

    /// `text` with code placeholders replaced by the raw code.
    ///
    /// Passes use this for attribute values and ids, where the rendered
    /// `<code>` markup must not end up.
    pub fn code_text(&self, text: &str) -> String {
        match self.vault {
            Some(vault) => vault.code_text(text),
            None => text.to_string(),
        }
    }
}

/// A single `text -> text` rewrite.
pub trait Pass: Send + Sync {
    /// Unique name for this pass (used for insertion points).
    fn name(&self) -> &'static str;

    /// Rewrite `text`, returning the new text.
    fn apply(&self, text: &str, ctx: &PassContext<'_>) -> Result<String, PassError>;
}

/// The ordered list of passes a document body goes through.
///
/// # Extension Points
///
/// ```
/// use colmark::{Pass, PassContext, PassError, PassPipeline};
///
/// struct Shout;
///
/// impl Pass for Shout {
///     fn name(&self) -> &'static str { "shout" }
///     fn apply(&self, text: &str, _ctx: &PassContext<'_>) -> Result<String, PassError> {
///         Ok(text.replace("!!", "<mark>!</mark>"))
///     }
/// }
///
/// let mut pipeline = PassPipeline::default_pipeline();
/// pipeline.insert_after("emphasis", Shout);
/// assert_eq!(pipeline.pass_names()[3], "shout");
/// ```
pub struct PassPipeline {
    passes: Vec<Box<dyn Pass>>,
}

impl PassPipeline {
    /// Create an empty pipeline with no passes.
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    /// Create the standard body pipeline.
    ///
    /// Passes: heading → links → emphasis → lists → blocks → paragraphs
    pub fn default_pipeline() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_pass(HeadingPass);
        pipeline.add_pass(LinkPass);
        pipeline.add_pass(EmphasisPass);
        pipeline.add_pass(ListPass);
        pipeline.add_pass(BlockPass);
        pipeline.add_pass(ParagraphPass);
        pipeline
    }

    /// Create the inline pipeline used for previews: emphasis → links.
    pub fn preview_pipeline() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_pass(EmphasisPass);
        pipeline.add_pass(LinkPass);
        pipeline
    }

    /// Add a pass to the end of the pipeline.
    pub fn add_pass<P: Pass + 'static>(&mut self, pass: P) -> &mut Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// Insert a pass before the named pass.
    ///
    /// # Panics
    ///
    /// Panics if no pass with the given name exists.
    pub fn insert_before<P: Pass + 'static>(&mut self, name: &str, pass: P) -> &mut Self {
        let pos = self.position(name);
        self.passes.insert(pos, Box::new(pass));
        self
    }

    /// Insert a pass after the named pass.
    ///
    /// # Panics
    ///
    /// Panics if no pass with the given name exists.
    pub fn insert_after<P: Pass + 'static>(&mut self, name: &str, pass: P) -> &mut Self {
        let pos = self.position(name);
        self.passes.insert(pos + 1, Box::new(pass));
        self
    }

    fn position(&self, name: &str) -> usize {
        self.passes
            .iter()
            .position(|p| p.name() == name)
            .unwrap_or_else(|| panic!("pass '{}' not found in pipeline", name))
    }

    /// Run every pass in order.
    ///
    /// Stops at the first failing pass and reports its name.
    pub fn run(
        &self,
        text: &str,
        ctx: &PassContext<'_>,
    ) -> Result<String, (&'static str, PassError)> {
        let mut text = text.to_string();
        for pass in &self.passes {
            tracing::debug!(pass = pass.name(), len = text.len(), "Running pass");
            text = pass.apply(&text, ctx).map_err(|e| (pass.name(), e))?;
        }
        Ok(text)
    }

    /// Get the names of all passes in order.
    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }
}

impl Default for PassPipeline {
    fn default() -> Self {
        Self::default_pipeline()
    }
}
