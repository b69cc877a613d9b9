// SRT subtitle format, one numbered cue per word
use super::{to_millis, AlignedWord, SubtitleFormatter};

pub struct SrtFormatter;

impl SubtitleFormatter for SrtFormatter {
    fn format(&self, words: &[AlignedWord]) -> String {
        let mut output = String::new();

        for (i, word) in words.iter().enumerate() {
            output.push_str(&format!(
                "{}\n{} --> {}\n{}\n\n",
                i + 1,
                format_timestamp(word.start_s),
                format_timestamp(word.end_s),
                word.word
            ));
        }

        output
    }

    fn extension(&self) -> &'static str {
        "srt"
    }
}

/// `HH:MM:SS,mmm`. Hours keep counting past 24.
fn format_timestamp(seconds: f64) -> String {
    let ms = to_millis(seconds);
    let total_secs = ms / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    let millis = ms % 1000;
    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, secs, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(1.5), "00:00:01,500");
        assert_eq!(format_timestamp(3661.123), "01:01:01,123");
        assert_eq!(format_timestamp(0.0), "00:00:00,000");
    }

    #[test]
    fn test_format_timestamp_past_one_day() {
        assert_eq!(format_timestamp(90_000.0), "25:00:00,000");
    }

    #[test]
    fn test_srt_single_word() {
        let words = vec![AlignedWord::new("hello", 1.5, 2.0)];
        assert_eq!(
            SrtFormatter.format(&words),
            "1\n00:00:01,500 --> 00:00:02,000\nhello\n\n"
        );
    }

    #[test]
    fn test_srt_empty() {
        assert_eq!(SrtFormatter.format(&[]), "");
    }

    #[test]
    fn test_srt_preserves_order_and_duplicates() {
        let words = vec![
            AlignedWord::new("la", 5.0, 5.5),
            AlignedWord::new("la", 1.0, 1.5),
            AlignedWord::new("la", 3.0, 3.5),
        ];
        let output = SrtFormatter.format(&words);
        let blocks: Vec<&str> = output.split_terminator("\n\n").collect();

        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0], "1\n00:00:05,000 --> 00:00:05,500\nla");
        assert_eq!(blocks[1], "2\n00:00:01,000 --> 00:00:01,500\nla");
        assert_eq!(blocks[2], "3\n00:00:03,000 --> 00:00:03,500\nla");
        assert!(output.ends_with("\n\n"));
    }
}
