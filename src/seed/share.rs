//! Shareable puzzle links
//!
//! A link carries `?seed=<hash>`; whoever opens it plays
//! `word_list[|hash| % len]` instead of the hourly word.

use super::hash::string_hash;
use crate::core::{GameMode, Word};

/// Hash placed in a share link for `word`
#[must_use]
pub fn share_hash(word: &Word) -> u32 {
    string_hash(word.text())
}

/// Build the share link for `word` in `mode`
///
/// `base` is the site origin without a trailing slash; an empty base yields a
/// site-relative link.
///
/// # Examples
/// ```
/// use hourly_wordle::core::{GameMode, Word};
/// use hourly_wordle::seed::share_link;
///
/// let word = Word::new("crane").unwrap();
/// assert_eq!(
///     share_link("", GameMode::Regular, &word),
///     "/modes/regular.html?seed=64383721"
/// );
/// ```
#[must_use]
pub fn share_link(base: &str, mode: GameMode, word: &Word) -> String {
    format!(
        "{}/modes/{}.html?seed={}",
        base.trim_end_matches('/'),
        mode.as_str(),
        share_hash(word)
    )
}

/// Word-list index selected by a shared seed
///
/// An empty word list yields index 0.
#[must_use]
pub fn shared_index(hash: i64, word_list_len: usize) -> usize {
    (hash.unsigned_abs() as usize)
        .checked_rem(word_list_len)
        .unwrap_or(0)
}

/// Extract the shared seed from a bare number or from a link containing `seed=`
#[must_use]
pub fn parse_shared_seed(input: &str) -> Option<i64> {
    let input = input.trim();
    if let Ok(value) = input.parse::<i64>() {
        return Some(value);
    }

    let query = input.split_once('?')?.1;
    let query = query.split('#').next().unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == "seed")
        .and_then(|(_, value)| value.parse().ok())
}
