//! Blueprint opponent
//!
//! Fills the early rows of a blueprint game. Every tier only considers words
//! that agree with the letters already placed correctly, never repeats a word
//! and never plays the target itself.

use crate::core::{Feedback, Verdict, WORD_LENGTH, Word};
use crate::wordlists::WordList;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// High-information openers used by the first tier
pub const OPENERS: [&str; 5] = ["CRANE", "AUDIO", "RAISE", "POINT", "BLEND"];

/// How the opponent picks its guesses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Random opener
    Opener,
    /// First word reusing a letter known to be in the target
    Informed,
    /// Uniformly random consistent word
    Consistent,
    /// Plausible wrong word sharing at least three letters with the target
    Bluff,
}

impl Tier {
    pub const ALL: [Self; 4] = [Self::Opener, Self::Informed, Self::Consistent, Self::Bluff];

    /// Tier from its 1-based difficulty number
    #[must_use]
    pub const fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Self::Opener),
            2 => Some(Self::Informed),
            3 => Some(Self::Consistent),
            4 => Some(Self::Bluff),
            _ => None,
        }
    }

    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Opener => 1,
            Self::Informed => 2,
            Self::Consistent => 3,
            Self::Bluff => 4,
        }
    }

    /// Pick a tier uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AI Tier {}", self.level())
    }
}

/// What the opponent has learned from its own rows
#[derive(Debug, Clone, Default)]
pub struct Knowledge {
    placed: [Option<u8>; WORD_LENGTH],
    present: FxHashSet<u8>,
    played: FxHashSet<Word>,
}

impl Knowledge {
    /// Record a played guess and its feedback
    pub fn learn(&mut self, guess: &Word, feedback: &Feedback) {
        for (i, (&letter, verdict)) in guess.chars().iter().zip(feedback.verdicts()).enumerate() {
            match verdict {
                Verdict::Correct => {
                    self.placed[i] = Some(letter);
                    self.present.insert(letter);
                }
                Verdict::Present => {
                    self.present.insert(letter);
                }
                Verdict::Absent => {}
            }
        }
        self.played.insert(guess.clone());
    }

    /// Whether `word` agrees with every correctly placed letter
    #[must_use]
    pub fn is_consistent(&self, word: &Word) -> bool {
        self.placed
            .iter()
            .zip(word.chars())
            .all(|(placed, letter)| placed.is_none_or(|p| p == *letter))
    }

    fn has_played(&self, word: &Word) -> bool {
        self.played.contains(word)
    }

    fn knows_letter_of(&self, word: &Word) -> bool {
        word.chars().iter().any(|c| self.present.contains(c))
    }
}

/// Words the opponent may still play
fn candidates<'a>(words: &'a WordList, target: &Word, knowledge: &Knowledge) -> Vec<&'a Word> {
    words
        .iter()
        .filter(|w| *w != target && !knowledge.has_played(w) && knowledge.is_consistent(w))
        .collect()
}

/// Choose the opponent's next guess, or `None` when no legal word is left
pub fn next_guess<'a, R: Rng + ?Sized>(
    tier: Tier,
    words: &'a WordList,
    target: &Word,
    knowledge: &Knowledge,
    rng: &mut R,
) -> Option<&'a Word> {
    let pool = candidates(words, target, knowledge);
    let first = pool.first().copied();

    match tier {
        Tier::Opener => {
            let openers: Vec<&Word> = pool
                .iter()
                .copied()
                .filter(|w| OPENERS.contains(&w.text()))
                .collect();
            openers
                .choose(rng)
                .or_else(|| pool.choose(rng))
                .copied()
        }
        Tier::Informed => pool
            .iter()
            .copied()
            .find(|w| knowledge.knows_letter_of(w))
            .or(first),
        Tier::Consistent => pool.choose(rng).copied(),
        Tier::Bluff => pool
            .iter()
            .copied()
            .find(|w| w.shared_letters(target) >= 3)
            .or(first),
    }
}

/// Play up to `rows` opponent guesses against `target`
///
/// Stops early when no candidate remains. Returns the rows in play order with
/// their true feedback.
pub fn play_rows<R: Rng + ?Sized>(
    tier: Tier,
    words: &WordList,
    target: &Word,
    rows: usize,
    rng: &mut R,
) -> Vec<(Word, Feedback)> {
    let mut knowledge = Knowledge::default();
    let mut played = Vec::with_capacity(rows);

    for _ in 0..rows {
        let Some(guess) = next_guess(tier, words, target, &knowledge, rng).cloned() else {
            break;
        };
        let feedback = Feedback::evaluate(&guess, target);
        knowledge.learn(&guess, &feedback);
        played.push((guess, feedback));
    }

    played
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn list(words: &[&str]) -> WordList {
        WordList::new(words_from_slice(words))
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn tier_levels_roundtrip() {
        for tier in Tier::ALL {
            assert_eq!(Tier::from_level(tier.level()), Some(tier));
        }
        assert_eq!(Tier::from_level(0), None);
        assert_eq!(Tier::from_level(5), None);
    }

    #[test]
    fn knowledge_tracks_placed_letters() {
        let mut knowledge = Knowledge::default();
        let guess = word("slate");
        knowledge.learn(&guess, &Feedback::evaluate(&guess, &word("crane")));

        assert!(knowledge.is_consistent(&word("crane")));
        assert!(knowledge.is_consistent(&word("brace")));
        assert!(!knowledge.is_consistent(&word("ghost")));
    }

    #[test]
    fn opener_tier_prefers_openers() {
        let words = list(&["ghost", "crane", "audio", "lemon"]);
        let target = word("lemon");
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let guess = next_guess(Tier::Opener, &words, &target, &Knowledge::default(), &mut rng)
                .unwrap();
            assert!(OPENERS.contains(&guess.text()));
        }
    }

    #[test]
    fn opener_tier_falls_back_to_consistent_words() {
        let words = list(&["crane", "brace", "ghost"]);
        let target = word("grace");
        let mut knowledge = Knowledge::default();
        let crane = word("crane");
        knowledge.learn(&crane, &Feedback::evaluate(&crane, &target));

        let mut rng = StdRng::seed_from_u64(1);
        let guess = next_guess(Tier::Opener, &words, &target, &knowledge, &mut rng).unwrap();
        assert_eq!(guess.text(), "BRACE");
    }

    #[test]
    fn informed_tier_reuses_known_letter() {
        let words = list(&["ghost", "lumpy", "alien", "crane"]);
        let target = word("amply");
        let mut knowledge = Knowledge::default();
        let crane = word("crane");
        knowledge.learn(&crane, &Feedback::evaluate(&crane, &target));

        let mut rng = StdRng::seed_from_u64(3);
        let guess = next_guess(Tier::Informed, &words, &target, &knowledge, &mut rng).unwrap();
        assert_eq!(guess.text(), "ALIEN");
    }

    #[test]
    fn bluff_tier_shares_three_letters_but_misses() {
        let words = list(&["ghost", "react", "trace", "lumpy"]);
        let target = word("crate");
        let mut rng = StdRng::seed_from_u64(9);

        let guess = next_guess(Tier::Bluff, &words, &target, &Knowledge::default(), &mut rng)
            .unwrap();
        assert_eq!(guess.text(), "REACT");
        assert!(guess.shared_letters(&target) >= 3);
    }

    #[test]
    fn consistent_tier_never_picks_target_or_repeats() {
        let words = list(&["crane", "ghost", "slate"]);
        let target = word("crane");
        let mut rng = StdRng::seed_from_u64(11);

        let rows = play_rows(Tier::Consistent, &words, &target, 5, &mut rng);
        let texts: FxHashSet<&str> = rows.iter().map(|(w, _)| w.text()).collect();

        assert_eq!(rows.len(), texts.len());
        assert!(!texts.contains("CRANE"));
    }

    #[test]
    fn play_rows_respects_placed_letters() {
        let words = WordList::embedded();
        let target = word("crane");

        for tier in Tier::ALL {
            let mut rng = StdRng::seed_from_u64(u64::from(tier.level()));
            let rows = play_rows(tier, &words, &target, 5, &mut rng);
            assert!(rows.len() <= 5);

            let mut knowledge = Knowledge::default();
            for (guess, feedback) in &rows {
                assert!(knowledge.is_consistent(guess), "{tier}: {guess}");
                assert_eq!(*feedback, Feedback::evaluate(guess, &target));
                assert_ne!(guess, &target);
                knowledge.learn(guess, feedback);
            }
        }
    }

    #[test]
    fn play_rows_stops_when_pool_is_empty() {
        let words = list(&["crane"]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(play_rows(Tier::Consistent, &words, &word("crane"), 5, &mut rng).is_empty());
    }
}
