use crate::subtitle::AlignedWord;
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use tracing::debug;

/// Identifier used to probe whether a token is accepted. It never names a
/// real song, so a valid token yields a soft failure rather than lyrics.
pub const PROBE_SONG_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Outcome of fetching aligned lyrics for one song.
///
/// Only a rejected token is distinguished; every other failure collapses
/// into `SoftFailed` and the caller skips the song.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Words(Vec<AlignedWord>),
    AuthFailed,
    SoftFailed(String),
}

impl FetchOutcome {
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, FetchOutcome::AuthFailed)
    }
}

#[async_trait]
pub trait LyricsSource: Send + Sync {
    async fn fetch(&self, song_id: &str, token: &str) -> FetchOutcome;
    fn name(&self) -> &'static str;
}

/// HTTP client for the aligned lyrics endpoint.
pub struct AlignedLyricsClient {
    client: reqwest::Client,
    base_url: String,
}

impl AlignedLyricsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// `<base>/api/gen/<song>/aligned_lyrics/v2/`, with the song id
    /// percent-encoded as a single path segment.
    pub fn endpoint(&self, song_id: &str) -> Option<Url> {
        let mut url = Url::parse(&self.base_url).ok()?;
        url.path_segments_mut()
            .ok()?
            .pop_if_empty()
            .extend(["api", "gen", song_id, "aligned_lyrics", "v2", ""]);
        Some(url)
    }

    async fn request(&self, song_id: &str, token: &str) -> FetchOutcome {
        let Some(url) = self.endpoint(song_id) else {
            return FetchOutcome::SoftFailed(format!("invalid base URL: {}", self.base_url));
        };
        debug!("GET {}", url);

        let response = match self.client.get(url).bearer_auth(token).send().await {
            Ok(response) => response,
            Err(e) => return FetchOutcome::SoftFailed(format!("request failed: {}", e)),
        };

        let status = response.status();
        debug!("Aligned lyrics response status for {}: {}", song_id, status);

        if status == StatusCode::UNAUTHORIZED {
            return FetchOutcome::AuthFailed;
        }

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            let excerpt: String = body.chars().take(200).collect();
            return FetchOutcome::SoftFailed(format!("unexpected status {}: {}", status, excerpt));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return FetchOutcome::SoftFailed(format!("failed to read body: {}", e)),
        };

        parse_body(&body)
    }
}

#[async_trait]
impl LyricsSource for AlignedLyricsClient {
    // Callers decide how loudly to report the outcome.
    async fn fetch(&self, song_id: &str, token: &str) -> FetchOutcome {
        let outcome = self.request(song_id, token).await;
        if let FetchOutcome::Words(words) = &outcome {
            debug!("Fetched {} aligned words for {}", words.len(), song_id);
        }
        outcome
    }

    fn name(&self) -> &'static str {
        "aligned lyrics API"
    }
}

fn parse_body(body: &str) -> FetchOutcome {
    match serde_json::from_str::<AlignedLyricsResponse>(body) {
        Ok(AlignedLyricsResponse {
            aligned_words: Some(words),
        }) => FetchOutcome::Words(words),
        Ok(AlignedLyricsResponse {
            aligned_words: None,
        }) => FetchOutcome::SoftFailed("response has no aligned_words".to_string()),
        Err(e) => FetchOutcome::SoftFailed(format!("malformed response: {}", e)),
    }
}

// API response types

#[derive(Debug, Deserialize)]
struct AlignedLyricsResponse {
    #[serde(default)]
    aligned_words: Option<Vec<AlignedWord>>,
}
