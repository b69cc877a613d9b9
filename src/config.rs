use crate::error::{AlignedLyricsError, Result};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://studio-api.suno.ai";
pub const DEFAULT_TOKEN_FILE: &str = "token.txt";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Srt,
    #[default]
    Lrc,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Srt => write!(f, "srt"),
            OutputFormat::Lrc => write!(f, "lrc"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "srt" => Ok(OutputFormat::Srt),
            "lrc" => Ok(OutputFormat::Lrc),
            _ => Err(format!("Unknown format: {}. Use 'srt' or 'lrc'", s)),
        }
    }
}

impl OutputFormat {
    /// Interpret a free-text answer to the format prompt.
    ///
    /// Only an exact, case-insensitive `srt` selects SRT; anything else,
    /// including an empty answer or surrounding whitespace, falls back to LRC.
    pub fn from_answer(answer: &str) -> Self {
        if answer.eq_ignore_ascii_case("srt") {
            OutputFormat::Srt
        } else {
            OutputFormat::Lrc
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Srt => "srt",
            OutputFormat::Lrc => "lrc",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub token_file: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        // Load from config file if it exists
        if let Some(config_path) = Self::config_file_path() {
            if config_path.exists() {
                let contents = std::fs::read_to_string(&config_path)?;
                match Self::from_toml(&contents) {
                    Ok(file_config) => config = file_config,
                    Err(e) => warn!("Ignoring {}: {}", config_path.display(), e),
                }
            }
        }

        // Override with environment variables
        if let Ok(url) = std::env::var("ALIGNED_LYRICS_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(path) = std::env::var("ALIGNED_LYRICS_TOKEN_FILE") {
            config.token_file = PathBuf::from(path);
        }
        if let Ok(dir) = std::env::var("ALIGNED_LYRICS_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str::<Config>(contents)?)
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(AlignedLyricsError::Config(
                "base_url must not be empty".to_string(),
            ));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AlignedLyricsError::Config(format!(
                "base_url must start with http:// or https://, got {}",
                url
            )));
        }
        if self.token_file.as_os_str().is_empty() {
            return Err(AlignedLyricsError::Config(
                "token_file must not be empty".to_string(),
            ));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(AlignedLyricsError::Config(
                "output_dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("aligned-lyrics").join("config.toml"))
    }
}
