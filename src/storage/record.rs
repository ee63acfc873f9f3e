//! The persisted shape of one game

use crate::core::{Feedback, GameMode, Word};
use crate::game::OriginMode;
use serde::{Deserialize, Serialize};

/// Storage key for a game: `"wordle-{mode}-{seed_key}"`
#[must_use]
pub fn record_key(mode: GameMode, seed_key: &str) -> String {
    format!("{}-{seed_key}", mode.storage_prefix())
}

/// Saved game state
///
/// `guesses[i]` pairs with `feedbacks[i]`; only evaluated rows are stored.
/// The first `prefilled` rows were played by the blueprint opponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord {
    pub word: String,
    pub guesses: Vec<String>,
    pub feedbacks: Vec<Feedback>,
    pub mode: OriginMode,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub complete: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub prefilled: usize,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde passes a reference
const fn is_zero(value: &usize) -> bool {
    *value == 0
}

impl PersistedRecord {
    /// Parsed target and rows, or `None` if any part is malformed
    #[must_use]
    pub fn rows(&self) -> Option<(Word, Vec<(Word, Feedback)>)> {
        if self.guesses.len() != self.feedbacks.len() || self.prefilled > self.guesses.len() {
            return None;
        }

        let target = Word::new(&self.word).ok()?;
        let rows = self
            .guesses
            .iter()
            .zip(&self.feedbacks)
            .map(|(guess, feedback)| Word::new(guess).ok().map(|w| (w, *feedback)))
            .collect::<Option<Vec<_>>>()?;

        Some((target, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Verdict::{Absent, Correct, Present};

    fn sample() -> PersistedRecord {
        PersistedRecord {
            word: "CRANE".into(),
            guesses: vec!["SLATE".into()],
            feedbacks: vec![Feedback::new([Absent, Absent, Correct, Absent, Correct])],
            mode: OriginMode::Seeded,
            complete: false,
            prefilled: 0,
        }
    }

    #[test]
    fn key_combines_prefix_and_seed() {
        assert_eq!(
            record_key(GameMode::Regular, "regular-wordle-7000"),
            "wordle-regular-regular-wordle-7000"
        );
    }

    #[test]
    fn json_shape_matches_browser_record() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "word": "CRANE",
                "guesses": ["SLATE"],
                "feedbacks": [["absent", "absent", "correct", "absent", "correct"]],
                "mode": "seed",
            })
        );
    }

    #[test]
    fn complete_flag_is_optional_on_load() {
        let record: PersistedRecord = serde_json::from_str(
            r#"{"word":"CRANE","guesses":[],"feedbacks":[],"mode":"shared"}"#,
        )
        .unwrap();
        assert!(!record.complete);
        assert_eq!(record.mode, OriginMode::SharedLink);
    }

    #[test]
    fn rows_parse_valid_record() {
        let (target, rows) = sample().rows().unwrap();
        assert_eq!(target.text(), "CRANE");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].1.verdicts()[2], Correct);
        assert_ne!(rows[0].1.verdicts()[0], Present);
    }

    #[test]
    fn rows_reject_mismatched_lengths() {
        let mut record = sample();
        record.guesses.push("GHOST".into());
        assert!(record.rows().is_none());
    }

    #[test]
    fn rows_reject_invalid_words() {
        let mut record = sample();
        record.word = "CR4NE".into();
        assert!(record.rows().is_none());
    }
}
