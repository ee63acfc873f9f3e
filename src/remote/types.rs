//! Response bodies of the word API

use super::RemoteError;
use crate::core::Word;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shown when a definition cannot be fetched
pub const NO_DEFINITION: &str = "❔ No definition found.";

/// Raw body of the seed endpoint
///
/// `seed` may arrive as a string or a number (including zero).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SeedResponse {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub seed: Option<Value>,
}

/// An authoritative seed that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSeed {
    pub word: Word,
    pub key: String,
}

impl SeedResponse {
    /// Validate the response
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::InvalidSeed`] when the word is missing or not a
    /// five-letter word, or the seed key is missing or empty.
    pub fn validate(self) -> Result<RemoteSeed, RemoteError> {
        let word = self
            .word
            .filter(|w| !w.trim().is_empty())
            .ok_or(RemoteError::InvalidSeed("missing word"))?;
        let word = Word::new(word).map_err(|_| RemoteError::InvalidSeed("word is not five letters"))?;

        let key = match self.seed {
            Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_owned(),
            Some(Value::Number(n)) => n.to_string(),
            _ => return Err(RemoteError::InvalidSeed("missing seed key")),
        };

        Ok(RemoteSeed { word, key })
    }
}

/// Body of the definition endpoint
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Definition {
    #[serde(rename = "partOfSpeech", default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub definition: Option<String>,
}

/// Display line for a definition lookup
///
/// Any failure, or a response without a definition, yields [`NO_DEFINITION`].
#[must_use]
pub fn describe(result: &Result<Definition, RemoteError>) -> String {
    match result {
        Ok(Definition {
            part_of_speech,
            definition: Some(definition),
        }) if !definition.trim().is_empty() => match part_of_speech {
            Some(pos) if !pos.is_empty() => format!("🧠 {pos}: {definition}"),
            _ => format!("🧠 {definition}"),
        },
        _ => NO_DEFINITION.to_owned(),
    }
}
