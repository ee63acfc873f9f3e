//! Game setup shared by the TUI and the simple front end

use crate::config::GameConfig;
use crate::game::{Controller, Policy, TargetSources, Tier};
use crate::remote::{RemoteClient, RemoteSeed};
use crate::storage::JsonFileStore;
use crate::wordlists::{WordList, loader::load_from_file};
use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

/// A ready-to-play controller plus the client for end-of-game lookups
pub struct PreparedGame {
    pub controller: Controller<JsonFileStore>,
    pub remote: Option<RemoteClient>,
}

/// HTTP client unless running offline
#[must_use]
pub fn remote_client(config: &GameConfig) -> Option<RemoteClient> {
    if config.offline {
        return None;
    }
    match RemoteClient::new(config.api_base.clone(), config.timeout) {
        Ok(client) => Some(client),
        Err(e) => {
            warn!(error = %e, "http client unavailable, playing offline");
            None
        }
    }
}

/// Word list from `--wordlist`, the API or the bundled list, in that order
#[must_use]
pub fn load_word_list(config: &GameConfig, remote: Option<&RemoteClient>) -> WordList {
    if let Some(path) = &config.wordlist {
        match load_from_file(path) {
            Ok(words) if !words.is_empty() => {
                info!(path = %path.display(), count = words.len(), "word list loaded from file");
                return WordList::new(words);
            }
            Ok(_) => warn!(path = %path.display(), "word list file has no valid words"),
            Err(e) => warn!(path = %path.display(), error = %e, "word list file unreadable"),
        }
    }

    if let Some(client) = remote {
        match client.fetch_word_list() {
            Ok(words) => {
                info!(count = words.len(), "word list fetched");
                return WordList::new(words);
            }
            Err(e) => warn!(error = %e, "word list fetch failed, using bundled list"),
        }
    }

    WordList::embedded()
}

/// Authoritative seed, skipped for share links
#[must_use]
pub fn fetch_remote_seed(config: &GameConfig, remote: Option<&RemoteClient>) -> Option<RemoteSeed> {
    if config.shared_seed.is_some() {
        return None;
    }
    match remote?.fetch_seed(config.mode) {
        Ok(seed) => Some(seed),
        Err(e) => {
            warn!(mode = %config.mode, error = %e, "remote seed unavailable, deriving locally");
            None
        }
    }
}

/// Resolve the word list and target, then start or resume the game
#[must_use]
pub fn prepare_game(config: &GameConfig) -> PreparedGame {
    let remote = remote_client(config);
    let words = load_word_list(config, remote.as_ref());
    let sources = TargetSources {
        shared_seed: config.shared_seed,
        remote: fetch_remote_seed(config, remote.as_ref()),
        now: Utc::now(),
    };

    let mut rng = StdRng::from_os_rng();
    let tier = config.tier.unwrap_or_else(|| Tier::random(&mut rng));
    let policy = Policy::for_mode(config.mode, config.corruption, tier);
    let store = JsonFileStore::with_path(config.store_path());

    let controller = Controller::start(policy, words, store, &sources, rng, config.max_attempts);
    PreparedGame { controller, remote }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameMode;
    use crate::game::OriginMode;
    use crate::storage::GameStore;
    use std::fs;
    use tempfile::TempDir;

    fn offline(dir: &TempDir) -> GameConfig {
        GameConfig {
            offline: true,
            data_dir: dir.path().to_path_buf(),
            ..GameConfig::default()
        }
    }

    #[test]
    fn offline_uses_bundled_list() {
        let dir = TempDir::new().unwrap();
        let config = offline(&dir);
        assert!(remote_client(&config).is_none());
        assert_eq!(load_word_list(&config, None).len(), WordList::embedded().len());
        assert!(fetch_remote_seed(&config, None).is_none());
    }

    #[test]
    fn wordlist_file_takes_priority() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "crane\nghost\nnope\n").unwrap();

        let config = GameConfig {
            wordlist: Some(path),
            ..offline(&dir)
        };
        assert_eq!(load_word_list(&config, None).len(), 2);
    }

    #[test]
    fn missing_wordlist_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let config = GameConfig {
            wordlist: Some(dir.path().join("absent.txt")),
            ..offline(&dir)
        };
        assert!(!load_word_list(&config, None).is_empty());
    }

    #[test]
    fn shared_game_is_prepared_and_saved() {
        let dir = TempDir::new().unwrap();
        let config = GameConfig {
            mode: GameMode::Blueprint,
            shared_seed: Some(64_383_721),
            ..offline(&dir)
        };

        let game = prepare_game(&config);
        assert!(game.remote.is_none());
        let session = game.controller.session();
        assert_eq!(session.origin(), OriginMode::SharedLink);
        assert!(session.opponent_rows() >= 1);

        let key = crate::storage::record_key(GameMode::Blueprint, "64383721");
        assert!(game.controller.store().load(&key).is_some());
        assert!(config.store_path().exists());
    }
}
