use crate::client::{FetchOutcome, LyricsSource};
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::OutputWriter;
use crate::subtitle::create_formatter;
use crate::token::{obtain_token, TokenStore};
use console::style;
use dialoguer::{Confirm, Input};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, warn, Level};

/// Blocking question/answer exchange with the operator.
pub trait Prompter {
    fn input(&mut self, prompt: &str, allow_empty: bool) -> Result<String>;
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;
}

/// Prompts on the controlling terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str, allow_empty: bool) -> Result<String> {
        let answer: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()?;
        Ok(answer)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()?)
    }
}

/// What happened to each song in one run.
#[derive(Debug, Default)]
pub struct SessionSummary {
    pub saved: Vec<PathBuf>,
    pub skipped: Vec<String>,
    /// The token was rejected mid-run and the remaining songs were not attempted.
    pub aborted: bool,
}

/// Split a comma-separated answer into song ids, dropping blank entries.
pub fn parse_song_ids(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run one interactive export session.
///
/// Songs are handled strictly in the order entered. A soft failure skips
/// the song; a rejected token stops the run.
pub async fn run_session(
    config: &Config,
    prompter: &mut dyn Prompter,
    source: &dyn LyricsSource,
) -> Result<SessionSummary> {
    let store = TokenStore::new(config.token_file.clone());
    store.ensure_exists()?;

    let song_ids = parse_song_ids(&prompter.input("Song IDs (comma-separated)", true)?);
    let format = OutputFormat::from_answer(&prompter.input("Output format (srt/lrc)", true)?);
    info!("Format: {}", format);

    let token = obtain_token(&store, prompter, source).await?;

    let formatter = create_formatter(format);
    let writer = OutputWriter::new(config.output_dir.clone());
    let mut summary = SessionSummary::default();

    // Debug logs come from inside the fetch, so the spinner stays off then.
    let show_spinner = !tracing::enabled!(Level::DEBUG);

    for song_id in &song_ids {
        let spinner = fetch_spinner(song_id, show_spinner);
        let outcome = source.fetch(song_id, &token).await;
        spinner.finish_and_clear();

        match outcome {
            FetchOutcome::Words(words) => {
                let content = formatter.format(&words);
                match writer.save(&content, formatter.extension(), song_id) {
                    Ok(path) => {
                        info!("Saved {} ({} words) to {}", song_id, words.len(), path.display());
                        println!("{} {}", style("✓").green(), path.display());
                        summary.saved.push(path);
                    }
                    Err(e) => {
                        warn!("Failed to write output for {}: {}", song_id, e);
                        summary.skipped.push(song_id.clone());
                    }
                }
            }
            FetchOutcome::SoftFailed(reason) => {
                warn!("No aligned lyrics for {}, skipping: {}", song_id, reason);
                summary.skipped.push(song_id.clone());
            }
            FetchOutcome::AuthFailed => {
                error!(
                    "Token rejected while fetching {}; stopping. Enter a new token on the next run.",
                    song_id
                );
                summary.aborted = true;
                break;
            }
        }
    }

    print_summary(&summary, song_ids.len());
    Ok(summary)
}

fn fetch_spinner(song_id: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(spinner_style);
    }
    pb.set_message(format!("Fetching {}...", song_id));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn print_summary(summary: &SessionSummary, requested: usize) {
    println!();
    println!(
        "  Saved:   {}/{}",
        style(summary.saved.len()).cyan(),
        requested
    );
    if !summary.skipped.is_empty() {
        println!(
            "  Skipped: {}",
            style(summary.skipped.join(", ")).yellow()
        );
    }
    if summary.aborted {
        println!("  {}", style("Stopped early: token was rejected").red());
    }
    println!("{}", style("Done.").bold());
}
