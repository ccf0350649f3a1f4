use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use colmark::{ParseResult, Parser};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::{output_stem, read_source};
use crate::RenderArgs;
use crate::config::{Config, OutputFormat};

pub async fn run(args: &RenderArgs) -> Result<(), anyhow::Error> {
    let config = Config::load_from_arg(args.config_file.as_deref())?;
    let format = args.format.unwrap_or(config.output.format);
    let pretty = config.output.pretty;

    if let Some(dir) = &args.output {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    // One parser shared by every task; parsing holds no per-call state on it.
    let parser = Arc::new(Parser::with_options(config.parser.to_options()));

    let tasks: Vec<_> = args
        .files
        .iter()
        .cloned()
        .map(|path| {
            let parser = Arc::clone(&parser);
            let source = path.clone();
            let task = tokio::spawn(async move {
                let bytes = read_source(&source).await?;
                let result = tokio::task::spawn_blocking(move || parser.parse_bytes(&bytes))
                    .await?
                    .with_context(|| format!("failed to parse {}", source.display()))?;
                anyhow::Ok(result)
            });
            (path, task)
        })
        .collect();

    let total = tasks.len();
    let failed = finish(tasks, format, pretty, args.output.as_deref()).await;

    if failed > 0 {
        anyhow::bail!("{} of {} document(s) failed", failed, total);
    }

    info!("Rendered {} document(s)", total);
    Ok(())
}

/// Await every document task in order and emit its output.
///
/// A document that fails at any step is logged and counted, and the rest
/// are still emitted. Returns the failure count.
async fn finish(
    tasks: Vec<(PathBuf, JoinHandle<anyhow::Result<ParseResult>>)>,
    format: OutputFormat,
    pretty: bool,
    output_dir: Option<&Path>,
) -> usize {
    let mut failed = 0;

    for (path, task) in tasks {
        let outcome: anyhow::Result<()> = async {
            let result = task.await??;
            debug!(path = %path.display(), words = result.word_count, "Rendered document");
            let rendered = format_result(&result, format, pretty)?;
            emit(&path, &rendered, format, output_dir).await
        }
        .await;

        if let Err(e) = outcome {
            error!("{:#}", e);
            failed += 1;
        }
    }

    failed
}

/// Serialize a parse result in the requested format.
pub fn format_result(
    result: &ParseResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, anyhow::Error> {
    Ok(match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(result)?,
        OutputFormat::Json => serde_json::to_string(result)?,
        OutputFormat::Yaml => serde_yaml::to_string(result)?,
        OutputFormat::Html => result.content.clone(),
    })
}

async fn emit(
    source: &Path,
    rendered: &str,
    format: OutputFormat,
    output_dir: Option<&Path>,
) -> Result<(), anyhow::Error> {
    let Some(dir) = output_dir else {
        println!("{}", rendered);
        return Ok(());
    };

    let target: PathBuf = dir.join(format!("{}.{}", output_stem(source), format.extension()));
    tokio::fs::write(&target, rendered)
        .await
        .with_context(|| format!("failed to write {}", target.display()))?;
    info!("Wrote {}", target.display());
    Ok(())
}
