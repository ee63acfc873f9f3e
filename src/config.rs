//! Runtime settings collected from the command line

use crate::core::GameMode;
use crate::game::{DEFAULT_CORRUPTION, DEFAULT_MAX_ATTEMPTS, Tier};
use crate::remote::{DEFAULT_API_BASE, DEFAULT_TIMEOUT};
use crate::storage::default_data_dir;
use std::path::PathBuf;
use std::time::Duration;

/// Base URL used when printing share links
pub const DEFAULT_SHARE_BASE: &str = "https://wordle.gkaze77.com";

/// Everything needed to start a game
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Blueprint opponent tier; random per game when `None`
    pub tier: Option<Tier>,
    /// Seed from a share link
    pub shared_seed: Option<i64>,
    /// Skip every network call
    pub offline: bool,
    pub api_base: String,
    pub timeout: Duration,
    /// Word list file replacing the bundled one
    pub wordlist: Option<PathBuf>,
    pub data_dir: PathBuf,
    pub corruption: f64,
    pub max_attempts: usize,
    pub share_base: String,
    pub log_file: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Regular,
            tier: None,
            shared_seed: None,
            offline: false,
            api_base: DEFAULT_API_BASE.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            wordlist: None,
            data_dir: default_data_dir(),
            corruption: DEFAULT_CORRUPTION,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            share_base: DEFAULT_SHARE_BASE.to_owned(),
            log_file: None,
        }
    }
}

impl GameConfig {
    /// File holding saved games
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("games.json")
    }

    /// File receiving log output
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join("hourly_wordle.log"))
    }
}
