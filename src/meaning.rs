//! Word meaning lookup
//!
//! Fetches definitions from the free dictionary API once a game is over and
//! renders a short explanation. Failures are reported to the player but never
//! end the program.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::fmt::Write as _;
use std::time::Duration;
use thiserror::Error;

const WORD_API: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum MeaningError {
    #[error("meaning lookup failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No meaning found for {0}")]
    NotFound(String),
}

/// One dictionary entry as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub word: String,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub audio: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// Anything that can resolve a word to its dictionary entry
pub trait MeaningSource {
    /// # Errors
    ///
    /// Returns `MeaningError` when the word is unknown or the lookup fails.
    fn lookup(&self, word: &str) -> Result<Entry, MeaningError>;
}

/// Blocking HTTP client for dictionaryapi.dev
#[derive(Debug, Clone)]
pub struct MeaningClient {
    client: Client,
    base_url: String,
}

impl MeaningClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self, MeaningError> {
        Self::with_base_url(WORD_API)
    }

    /// Client against another endpoint; the word is appended to `base_url`
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, MeaningError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl MeaningSource for MeaningClient {
    fn lookup(&self, word: &str) -> Result<Entry, MeaningError> {
        let url = format!("{}{word}", self.base_url);
        tracing::debug!(%url, "looking up meaning");

        let response = self.client.get(&url).send()?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(MeaningError::NotFound(word.to_string()));
        }

        let entries: Vec<Entry> = response.error_for_status()?.json()?;
        entries
            .into_iter()
            .next()
            .ok_or_else(|| MeaningError::NotFound(word.to_string()))
    }
}

/// Render an entry: the first definition of each part of speech, with its example
#[must_use]
pub fn explain(entry: &Entry) -> String {
    let mut out = format!("Meaning of {}", entry.word);
    if let Some(phonetic) = entry.phonetics.iter().find(|p| !p.text.is_empty()) {
        let _ = write!(out, " {}", phonetic.text);
    }

    for meaning in &entry.meanings {
        let Some(first) = meaning.definitions.first() else {
            continue;
        };
        let _ = write!(out, "\n- As {}, {}", meaning.part_of_speech, first.definition);
        if let Some(example) = first.example.as_deref().filter(|e| !e.is_empty()) {
            let _ = write!(out, "\n  Example: {example}");
        }
    }
    out
}

/// Look up and explain a word, folding any failure into the text shown to the player
pub fn describe(source: &dyn MeaningSource, word: &str) -> String {
    match source.lookup(word) {
        Ok(entry) => explain(&entry),
        Err(err) => {
            tracing::warn!(%word, error = %err, "meaning lookup failed");
            err.to_string()
        }
    }
}
