//! CLI command handlers.

pub mod meta;
pub mod render;

use std::path::Path;

use anyhow::Context;
use tokio::io::AsyncReadExt;

/// Name that reads the document from stdin.
pub const STDIN: &str = "-";

/// Fetch a raw document. `-` reads stdin.
///
/// Failures here are retrieval errors and are reported separately from
/// parse errors.
pub async fn read_source(path: &Path) -> anyhow::Result<Vec<u8>> {
    if path.as_os_str() == STDIN {
        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .context("failed to read document from stdin")?;
        return Ok(buf);
    }

    tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

/// Output file stem for a source path.
pub fn output_stem(path: &Path) -> String {
    if path.as_os_str() == STDIN {
        return "stdin".to_string();
    }
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document")
        .to_string()
}
