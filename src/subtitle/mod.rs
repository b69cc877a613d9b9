pub mod lrc;
pub mod srt;

use crate::config::OutputFormat;
use serde::Deserialize;

/// A single lyric token with its time span, as returned by the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlignedWord {
    pub word: String,
    pub start_s: f64,
    pub end_s: f64,
}

impl AlignedWord {
    pub fn new(word: impl Into<String>, start_s: f64, end_s: f64) -> Self {
        Self {
            word: word.into(),
            start_s,
            end_s,
        }
    }
}

pub trait SubtitleFormatter {
    fn format(&self, words: &[AlignedWord]) -> String;
    fn extension(&self) -> &'static str;
}

pub fn create_formatter(format: OutputFormat) -> Box<dyn SubtitleFormatter> {
    match format {
        OutputFormat::Srt => Box::new(srt::SrtFormatter),
        OutputFormat::Lrc => Box::new(lrc::LrcFormatter),
    }
}

/// Whole milliseconds in a seconds offset. Fractions of a millisecond are
/// truncated; negative and non-finite values clamp to zero.
pub(crate) fn to_millis(seconds: f64) -> u64 {
    if !seconds.is_finite() || seconds <= 0.0 {
        return 0;
    }
    (seconds * 1000.0) as u64
}
