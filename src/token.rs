use crate::client::{LyricsSource, PROBE_SONG_ID};
use crate::error::Result;
use crate::interactive::Prompter;
use console::style;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Plain-text file holding a single bearer token.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty token file if none exists yet.
    pub fn ensure_exists(&self) -> Result<()> {
        if !self.path.exists() {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(&self.path, "")?;
            debug!("Created empty token file at {}", self.path.display());
        }
        Ok(())
    }

    /// Stored token, or `None` when the file is missing or blank.
    pub fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let token = contents.trim();
        Ok((!token.is_empty()).then(|| token.to_string()))
    }

    /// Persist `token` trimmed of surrounding whitespace and return what was written.
    pub fn save(&self, token: &str) -> Result<String> {
        let token = token.trim().to_string();
        fs::write(&self.path, &token)?;
        debug!("Saved token to {}", self.path.display());
        Ok(token)
    }
}

/// Obtain a token for this run.
///
/// A saved token is offered for reuse first. The chosen token is then probed
/// once against a non-existent song; if the service rejects it the user is
/// asked for a replacement exactly once. A replacement that is also bad is
/// only noticed on the next real fetch.
pub async fn obtain_token(
    store: &TokenStore,
    prompter: &mut dyn Prompter,
    source: &dyn LyricsSource,
) -> Result<String> {
    store.ensure_exists()?;

    let saved = store.read()?;
    let reuse = match &saved {
        Some(token) => prompter.confirm(
            &format!("Use saved token ({})?", mask_token(token)),
            true,
        )?,
        None => false,
    };

    let token = match saved {
        Some(token) if reuse => token,
        _ => prompt_new_token(store, prompter, "Enter your bearer token")?,
    };

    if source.fetch(PROBE_SONG_ID, &token).await.is_auth_failure() {
        warn!("Token was rejected by the {}", source.name());
        println!("{} Token was rejected", style("!").yellow());
        return prompt_new_token(store, prompter, "Enter a new bearer token");
    }

    Ok(token)
}

// Blank answers are asked again rather than saved as an empty token.
fn prompt_new_token(store: &TokenStore, prompter: &mut dyn Prompter, prompt: &str) -> Result<String> {
    loop {
        let answer = prompter.input(prompt, false)?;
        if !answer.trim().is_empty() {
            return store.save(&answer);
        }
        println!("{} Token must not be blank", style("!").yellow());
    }
}

/// First few characters of a token followed by an ellipsis.
pub fn mask_token(token: &str) -> String {
    const VISIBLE: usize = 6;
    if token.chars().count() <= VISIBLE {
        return "*".repeat(token.chars().count());
    }
    let prefix: String = token.chars().take(VISIBLE).collect();
    format!("{}…", prefix)
}
