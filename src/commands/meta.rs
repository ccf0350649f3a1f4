use anyhow::Context;
use colmark::{Metadata, ParseResult, Parser};
use serde::Serialize;

use super::read_source;
use crate::MetaArgs;
use crate::config::Config;

/// Metadata and reading metrics, without the rendered HTML.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaSummary {
    #[serde(flatten)]
    pub metadata: Metadata,
    pub word_count: usize,
    pub estimated_read_time: usize,
}

impl From<ParseResult> for MetaSummary {
    fn from(result: ParseResult) -> Self {
        Self {
            metadata: result.metadata,
            word_count: result.word_count,
            estimated_read_time: result.estimated_read_time,
        }
    }
}

pub async fn run(args: &MetaArgs) -> Result<(), anyhow::Error> {
    let config = Config::load_from_arg(args.config_file.as_deref())?;
    let parser = Parser::with_options(config.parser.to_options());

    let bytes = read_source(&args.file).await?;
    let summary = MetaSummary::from(
        parser
            .parse_bytes(&bytes)
            .with_context(|| format!("failed to parse {}", args.file.display()))?,
    );

    let out = if args.json {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_yaml::to_string(&summary)?
    };
    print!("{}", out);
    if args.json {
        println!();
    }

    Ok(())
}
