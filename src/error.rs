use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlignedLyricsError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AlignedLyricsError>;
