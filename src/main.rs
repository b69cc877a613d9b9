use aligned_lyrics::{run_session, AlignedLyricsClient, Config, TerminalPrompter};
use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use tracing::{error, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "aligned-lyrics")]
#[command(version, about = "Export word-aligned lyrics as SRT or LRC files")]
#[command(long_about = "Prompts for song IDs, an output format and a bearer token, then writes one subtitle file per song into the output directory.")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

async fn run() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    let client = AlignedLyricsClient::new(config.base_url.clone());
    let mut prompter = TerminalPrompter;

    run_session(&config, &mut prompter, &client)
        .await
        .context("Export session failed")?;

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Failures are reported, not turned into a non-zero exit status.
    if let Err(e) = run().await {
        error!("{:#}", e);
        eprintln!("{} {:#}", style("✗").red(), e);
    }
}
