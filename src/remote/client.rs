//! Blocking HTTP client for the word API

use super::{Definition, RemoteError, RemoteSeed, SeedResponse};
use crate::core::{GameMode, Word};
use std::time::Duration;
use tracing::{debug, warn};

/// Default API root
pub const DEFAULT_API_BASE: &str = "https://api.gkaze77.com";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Client for the seed, word list and definition endpoints
#[derive(Debug, Clone)]
pub struct RemoteClient {
    client: reqwest::blocking::Client,
    base: String,
}

impl RemoteClient {
    /// Create a client rooted at `base`
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Http`] if the TLS backend cannot be initialized.
    pub fn new(base: impl Into<String>, timeout: Duration) -> Result<Self, RemoteError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base: base.into().trim_end_matches('/').to_owned(),
        })
    }

    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RemoteError> {
        let url = format!("{}{path}", self.base);
        debug!(%url, ?query, "GET");

        let response = self.client.get(&url).query(query).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status(status));
        }
        Ok(response.json()?)
    }

    /// Fetch and validate the authoritative seed for `mode`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, timeout, a non-success status
    /// or a response that fails [`SeedResponse::validate`].
    pub fn fetch_seed(&self, mode: GameMode) -> Result<RemoteSeed, RemoteError> {
        let response: SeedResponse = self.get_json("/wordlist/seed", &[("mode", mode.as_str())])?;
        response.validate()
    }

    /// Fetch the general word list, keeping only valid five-letter words
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or when no valid word remains.
    pub fn fetch_word_list(&self) -> Result<Vec<Word>, RemoteError> {
        let raw: Vec<String> = self.get_json("/wordlist/wordlist_general.json", &[])?;
        let total = raw.len();
        let words: Vec<Word> = raw.iter().filter_map(|w| Word::new(w).ok()).collect();

        if words.len() < total {
            warn!(skipped = total - words.len(), "remote word list had invalid entries");
        }
        if words.is_empty() {
            return Err(RemoteError::EmptyWordList);
        }
        Ok(words)
    }

    /// Look up a definition for `word`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unparseable body.
    pub fn fetch_definition(&self, word: &Word) -> Result<Definition, RemoteError> {
        let lower = word.text().to_ascii_lowercase();
        self.get_json("/wordle/definition", &[("word", lower.as_str())])
    }
}
