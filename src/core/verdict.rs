//! Wordle feedback evaluation and representation
//!
//! Each guessed letter receives one verdict:
//! - `Absent`  (letter not in word, or all its occurrences already consumed)
//! - `Present` (letter in word, wrong position)
//! - `Correct` (letter in correct position)

use super::Word;
use super::word::WORD_LENGTH;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Correct,
    Present,
    Absent,
}

impl Verdict {
    /// Emoji used in share grids and the board
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Verdicts for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Wrap raw verdicts
    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Evaluate `guess` against `target`
    ///
    /// Implements Wordle's multiset rule: a letter earns at most as many
    /// non-absent verdicts as it has occurrences in the target.
    ///
    /// # Algorithm
    /// 1. Count the remaining occurrences of each target letter
    /// 2. First pass: mark exact matches `Correct` and consume them
    /// 3. Second pass: mark `Present` while the letter still has occurrences left
    ///
    /// # Examples
    /// ```
    /// use hourly_wordle::core::{Feedback, Word};
    ///
    /// let guess = Word::new("slate").unwrap();
    /// let target = Word::new("crane").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LENGTH];
        let mut remaining = target.char_counts();

        // First pass: exact position matches
        for (i, (g, t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = Verdict::Correct;
                if let Some(count) = remaining.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: right letter, wrong position
        for (i, letter) in guess.chars().iter().enumerate() {
            if result[i] == Verdict::Correct {
                continue;
            }
            if let Some(count) = remaining.get_mut(letter)
                && *count > 0
            {
                result[i] = Verdict::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Per-position verdicts
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Correct)
    }

    /// Count positions carrying `verdict`
    #[must_use]
    pub fn count(&self, verdict: Verdict) -> usize {
        self.0.iter().filter(|&&v| v == verdict).count()
    }

    /// Convert feedback to emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
