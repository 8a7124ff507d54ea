//! taxbot-router — runs one code hook invocation locally.
//! Reads an event (file or stdin), writes the dialog response to stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use taxbot_router::Config;

#[derive(Parser, Debug)]
#[command(name = "taxbot-router", about = "Answer one tax-deadline code hook event")]
struct Args {
    /// YAML config file (time zone, response table)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Event JSON file; stdin when omitted
    #[arg(long)]
    event: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the response
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;
    let hook = config.build_code_hook()?;
    let context = config.invocation_context();
    info!(
        time_zone = %config.time_zone,
        request_id = %context.request_id,
        "code hook ready"
    );

    let mut stdout = tokio::io::stdout();
    match &args.event {
        Some(path) => {
            let mut file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("opening event {}", path.display()))?;
            hook.invoke_io(&mut file, &mut stdout, &context).await?;
        }
        None => {
            let mut stdin = tokio::io::stdin();
            hook.invoke_io(&mut stdin, &mut stdout, &context).await?;
        }
    }

    Ok(())
}
