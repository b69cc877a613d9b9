pub mod client;
pub mod config;
pub mod error;
pub mod interactive;
pub mod output;
pub mod subtitle;
pub mod token;

pub use client::{AlignedLyricsClient, FetchOutcome, LyricsSource};
pub use config::{Config, OutputFormat};
pub use error::{AlignedLyricsError, Result};
pub use interactive::{run_session, Prompter, SessionSummary, TerminalPrompter};

#[cfg(test)]
pub(crate) mod test_support;
