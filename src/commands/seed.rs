//! Hourly seed inspection

use crate::core::{GameMode, Word};
use crate::seed::{derive_seed, format_countdown, time_until_next_seed};
use crate::wordlists::WordList;
use chrono::{DateTime, Utc};

/// Seed details for one mode at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub mode: GameMode,
    pub key: String,
    pub index: usize,
    pub word_count: usize,
    /// Target word, only when revealing was requested
    pub word: Option<Word>,
    pub countdown: String,
}

/// Compute the local hourly seed for each of `modes`
#[must_use]
pub fn seed_reports(
    modes: &[GameMode],
    words: &WordList,
    now: DateTime<Utc>,
    reveal: bool,
) -> Vec<SeedReport> {
    let countdown = format_countdown(time_until_next_seed(now));
    modes
        .iter()
        .map(|&mode| {
            let info = derive_seed(now, mode, words.len());
            SeedReport {
                mode,
                word: reveal.then(|| words.get(info.index).cloned()).flatten(),
                key: info.key,
                index: info.index,
                word_count: words.len(),
                countdown: countdown.clone(),
            }
        })
        .collect()
}
