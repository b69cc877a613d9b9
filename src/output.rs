use crate::error::Result;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes converted lyric documents into an output directory.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
}

impl OutputWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `content` to a fresh timestamped file for `song_id`.
    ///
    /// The directory is created on demand. Existing files are never
    /// overwritten: a `_1`, `_2`, ... suffix is added if the timestamped
    /// name is already taken.
    pub fn save(&self, content: &str, extension: &str, song_id: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let stem = output_file_stem(song_id, Utc::now());
        let mut attempt = 0u32;

        loop {
            let name = if attempt == 0 {
                format!("{}.{}", stem, extension)
            } else {
                format!("{}_{}.{}", stem, attempt, extension)
            };
            let path = self.dir.join(name);

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(content.as_bytes())?;
                    debug!("Wrote {} bytes to {}", content.len(), path.display());
                    return Ok(path);
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// `aligned_words_<song>_<timestamp>` without extension.
pub fn output_file_stem(song_id: &str, at: DateTime<Utc>) -> String {
    format!(
        "aligned_words_{}_{}",
        sanitize_song_id(song_id),
        file_timestamp(at)
    )
}

/// ISO-8601 UTC timestamp with `:` and `.` replaced by `-`.
pub fn file_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

// Keep ids from escaping the output directory.
fn sanitize_song_id(song_id: &str) -> String {
    song_id
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | ':') { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap() + chrono::Duration::milliseconds(42)
    }

    #[test]
    fn test_file_timestamp() {
        assert_eq!(file_timestamp(fixed_time()), "2024-03-09T14-05-07-042Z");
    }

    #[test]
    fn test_output_file_stem() {
        assert_eq!(
            output_file_stem("abc-123", fixed_time()),
            "aligned_words_abc-123_2024-03-09T14-05-07-042Z"
        );
    }

    #[test]
    fn test_sanitize_song_id() {
        assert_eq!(sanitize_song_id("../etc/passwd"), ".._etc_passwd");
        assert_eq!(sanitize_song_id("a1b2-c3"), "a1b2-c3");
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = TempDir::new().unwrap();
        let writer = OutputWriter::new(dir.path().join("output"));

        let path = writer.save("[00:01.50]hello\n", "lrc", "song-1").unwrap();

        assert!(writer.dir().is_dir());
        assert_eq!(path.parent().unwrap(), writer.dir());
        assert_eq!(fs::read_to_string(&path).unwrap(), "[00:01.50]hello\n");

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("aligned_words_song-1_"));
        assert!(name.ends_with(".lrc"));
        let stamp = &name["aligned_words_song-1_".len()..name.len() - ".lrc".len()];
        assert!(!stamp.contains(':'));
        assert!(!stamp.contains('.'));
    }

    #[test]
    fn test_repeated_saves_do_not_collide() {
        let dir = TempDir::new().unwrap();
        let writer = OutputWriter::new(dir.path());

        let first = writer.save("one", "srt", "same").unwrap();
        let second = writer.save("two", "srt", "same").unwrap();
        let third = writer.save("three", "srt", "same").unwrap();

        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_ne!(first, third);
        assert_eq!(fs::read_to_string(&first).unwrap(), "one");
        assert_eq!(fs::read_to_string(&second).unwrap(), "two");
        assert_eq!(fs::read_to_string(&third).unwrap(), "three");
    }
}
