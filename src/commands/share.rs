//! Share link generation

use crate::core::{GameMode, Word};
use crate::seed::{share_hash, share_link};
use crate::wordlists::WordList;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("Invalid or unknown word: {0}")]
    UnknownWord(String),
}

/// A generated link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareResult {
    pub word: Word,
    pub hash: u32,
    pub url: String,
}

/// Build the share link for `input`
///
/// # Errors
///
/// Returns [`ShareError::UnknownWord`] unless `input` is a word from `words`.
pub fn share_word(
    input: &str,
    words: &WordList,
    mode: GameMode,
    base: &str,
) -> Result<ShareResult, ShareError> {
    let word = Word::new(input)
        .ok()
        .filter(|w| words.contains(w))
        .ok_or_else(|| ShareError::UnknownWord(input.trim().to_owned()))?;

    Ok(ShareResult {
        hash: share_hash(&word),
        url: share_link(base, mode, &word),
        word,
    })
}
