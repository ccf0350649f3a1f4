use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::OutputFormat;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Log debug output from every pipeline stage
    #[arg(short, long, global = true, default_value = "false")]
    verbose: bool,

    /// The command to execute
    #[command(subcommand)]
    command: ColmarkCommand,
}

#[derive(Parser)]
struct RenderArgs {
    /// Documents to render (`-` reads stdin)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write one file per document into this directory instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// The path to the configuration file
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

#[derive(Parser)]
struct MetaArgs {
    /// Document to inspect (`-` reads stdin)
    file: PathBuf,

    /// Print JSON instead of YAML
    #[arg(long, default_value = "false")]
    json: bool,

    /// The path to the configuration file
    #[arg(short, long)]
    config_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum ColmarkCommand {
    /// Render COL documents to HTML
    Render(RenderArgs),

    /// Print a document's metadata and reading metrics
    Meta(MetaArgs),
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "colmark=debug"
    } else {
        "colmark=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.command {
        ColmarkCommand::Render(args) => {
            commands::render::run(&args).await?;
        }
        ColmarkCommand::Meta(args) => {
            commands::meta::run(&args).await?;
        }
    }

    Ok(())
}
