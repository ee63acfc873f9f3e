//! Game variants

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which variant of the game is being played
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Plain Wordle
    #[default]
    Regular,
    /// Feedback is randomly downgraded before it is shown
    Corrupted,
    /// An opponent fills the early rows before the player's turn
    Blueprint,
}

impl GameMode {
    /// All variants, in menu order
    pub const ALL: [Self; 3] = [Self::Regular, Self::Corrupted, Self::Blueprint];

    /// Identifier used in seed keys, endpoints and storage keys
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Corrupted => "corrupted",
            Self::Blueprint => "blueprint",
        }
    }

    /// Prefix of every persisted record for this mode
    #[must_use]
    pub fn storage_prefix(self) -> String {
        format!("wordle-{}", self.as_str())
    }

    /// Display name with its board icon
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Regular => "🟩 Regular Wordle",
            Self::Corrupted => "🧪 Corrupted Wordle",
            Self::Blueprint => "🧩 Blueprint Wordle",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_lowercase_names() {
        let names: Vec<&str> = GameMode::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(names, ["regular", "corrupted", "blueprint"]);
    }

    #[test]
    fn storage_prefix_includes_mode() {
        assert_eq!(GameMode::Corrupted.storage_prefix(), "wordle-corrupted");
    }

    #[test]
    fn serde_uses_identifier() {
        let json = serde_json::to_string(&GameMode::Blueprint).unwrap();
        assert_eq!(json, "\"blueprint\"");
    }
}
