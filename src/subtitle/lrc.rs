// LRC lyric format, one timestamped line per word
use super::{to_millis, AlignedWord, SubtitleFormatter};

pub struct LrcFormatter;

impl SubtitleFormatter for LrcFormatter {
    fn format(&self, words: &[AlignedWord]) -> String {
        let mut output = String::new();

        for word in words {
            output.push_str(&format!("[{}]{}\n", format_timestamp(word.start_s), word.word));
        }

        output
    }

    fn extension(&self) -> &'static str {
        "lrc"
    }
}

/// `MM:SS.hh` where `hh` is hundredths of a second, truncated.
fn format_timestamp(seconds: f64) -> String {
    let ms = to_millis(seconds);
    let total_secs = ms / 1000;
    let minutes = total_secs / 60;
    let secs = total_secs % 60;
    let hundredths = (ms % 1000) / 10;
    format!("{:02}:{:02}.{:02}", minutes, secs, hundredths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(1.5), "00:01.50");
        assert_eq!(format_timestamp(61.239), "01:01.23");
        assert_eq!(format_timestamp(0.009), "00:00.00");
        assert_eq!(format_timestamp(3600.0), "60:00.00");
    }

    #[test]
    fn test_lrc_single_word() {
        let words = vec![AlignedWord::new("hello", 1.5, 2.0)];
        assert_eq!(LrcFormatter.format(&words), "[00:01.50]hello\n");
    }

    #[test]
    fn test_lrc_empty() {
        assert_eq!(LrcFormatter.format(&[]), "");
    }

    #[test]
    fn test_lrc_one_line_per_word() {
        let words = vec![
            AlignedWord::new("Hello", 0.5, 0.9),
            AlignedWord::new("there ", 0.9, 1.2),
            AlignedWord::new("world", 12.34, 13.0),
        ];
        let output = LrcFormatter.format(&words);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines, vec!["[00:00.50]Hello", "[00:00.90]there ", "[00:12.34]world"]);
    }
}
