//! Session controller
//!
//! Wires one [`GameSession`] to its mode policy, word list and store. Front
//! ends feed it keys and draw its [`ViewModel`].

use super::policy::{ModePolicy, Policy, TargetSelection, TargetSources};
use super::session::{GameSession, OriginMode, Rejection, SubmitOutcome};
use super::view::ViewModel;
use crate::core::{GameMode, Word};
use crate::seed::{derive_seed, remote_agrees};
use crate::storage::{GameStore, record_key};
use crate::wordlists::WordList;
use chrono::{DateTime, Utc};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

/// Player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Enter,
    Backspace,
}

/// What a key press did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Key had no effect
    Ignored,
    /// Open row changed
    Edited,
    /// Guess refused; the row should shake
    Rejected(Rejection),
    /// Guess evaluated
    Submitted(SubmitOutcome),
}

/// Owns the live session and everything needed to advance it
pub struct Controller<S: GameStore> {
    session: GameSession,
    policy: Policy,
    words: WordList,
    store: S,
    rng: StdRng,
    max_attempts: usize,
}

impl<S: GameStore> Controller<S> {
    /// Resolve a target and start (or resume) a game
    ///
    /// A saved game for the resolved seed is resumed; a finished one makes the
    /// session fall back to a random word so the same puzzle is not replayed.
    pub fn start(
        policy: Policy,
        mut words: WordList,
        store: S,
        sources: &TargetSources,
        mut rng: StdRng,
        max_attempts: usize,
    ) -> Self {
        let selection = policy.select_target(sources, &mut words, &mut rng);

        let mut controller = Self {
            session: GameSession::new(
                selection.target.clone(),
                selection.seed_key.clone(),
                selection.origin,
                max_attempts,
            ),
            policy,
            words,
            store,
            rng,
            max_attempts,
        };
        controller.enter(selection, sources.now);
        controller
    }

    /// Resume the saved game for `selection`, or begin a new one
    ///
    /// A completed record is left untouched and a random game starts instead.
    fn enter(&mut self, selection: TargetSelection, now: DateTime<Utc>) {
        if selection.origin == OriginMode::Random {
            self.begin(selection);
            return;
        }

        let mode = self.policy.mode();
        let key = record_key(mode, &selection.seed_key);
        let Some(record) = self.store.load(&key) else {
            self.begin(selection);
            return;
        };

        if record.complete {
            info!(%key, "seed already completed, starting a random game");
            let random = self.policy.random_target(&mut self.words, now, &mut self.rng);
            self.begin(random);
            return;
        }

        match GameSession::restore(
            &record,
            Some(&selection.target),
            selection.seed_key.clone(),
            self.max_attempts,
        ) {
            Some(session) => {
                info!(%mode, %key, rows = session.completed_rows(), "resumed saved game");
                self.session = session;
            }
            None => {
                warn!(%key, "saved game does not match seed, discarding");
                self.begin(selection);
            }
        }
    }

    /// Install a fresh session for `selection`
    fn begin(&mut self, selection: TargetSelection) {
        let TargetSelection {
            target,
            seed_key,
            origin,
        } = selection;
        info!(mode = %self.policy.mode(), key = %seed_key, ?origin, "new game");

        self.session = GameSession::new(target, seed_key, origin, self.max_attempts);
        self.policy
            .prefill_opponent_rows(&mut self.session, &self.words, &mut self.rng);
        self.persist();
    }

    /// Save the session unless it is a local random game
    fn persist(&mut self) {
        if self.session.origin() == OriginMode::Random {
            return;
        }
        let key = record_key(self.policy.mode(), self.session.seed_key());
        if let Err(e) = self.store.save(&key, &self.session.to_record()) {
            warn!(%key, error = %e, "failed to save game");
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::Letter(c) => {
                if self.session.type_letter(c) {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Backspace => {
                if self.session.backspace() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            Key::Enter => match self.submit() {
                Ok(outcome) => KeyOutcome::Submitted(outcome),
                Err(Rejection::GameOver) => KeyOutcome::Ignored,
                Err(rejection) => KeyOutcome::Rejected(rejection),
            },
        }
    }

    /// Replace the open row with `guess` and submit it
    ///
    /// # Errors
    /// Returns the `Rejection` from the session; the open row is left empty.
    pub fn submit_word(&mut self, guess: &str) -> Result<SubmitOutcome, Rejection> {
        if self.session.is_over() {
            return Err(Rejection::GameOver);
        }
        let guess = guess.trim();
        while self.session.backspace() {}
        let typed = guess.chars().filter(|&c| self.session.type_letter(c)).count();
        if typed != guess.chars().count() {
            while self.session.backspace() {}
            return Err(Rejection::WrongLength(guess.chars().count()));
        }
        let result = self.submit();
        if result.is_err() {
            while self.session.backspace() {}
        }
        result
    }

    /// Submit the open row through the mode policy
    ///
    /// # Errors
    /// Returns the `Rejection` from the session; nothing is changed.
    pub fn submit(&mut self) -> Result<SubmitOutcome, Rejection> {
        let policy = &self.policy;
        let rng = &mut self.rng;
        let guess = self.session.current_input().to_owned();

        let outcome = self
            .session
            .submit_with(&self.words, |feedback| policy.post_process(feedback, rng))?;

        debug!(%guess, feedback = %outcome.feedback(), "guess submitted");
        match &outcome {
            SubmitOutcome::Won { attempts, .. } => info!(attempts, "game won"),
            SubmitOutcome::Lost { .. } => info!(target = %self.session.target(), "game lost"),
            SubmitOutcome::NextRow { .. } => {}
        }
        self.persist();
        Ok(outcome)
    }

    /// Start a new random game from the full word list
    pub fn play_again(&mut self, now: DateTime<Utc>) {
        let selection = match self.words.as_slice().choose(&mut self.rng) {
            Some(target) => TargetSelection {
                target: target.clone(),
                seed_key: format!("random-{}", now.timestamp_millis()),
                origin: OriginMode::Random,
            },
            None => self.policy.random_target(&mut self.words, now, &mut self.rng),
        };
        self.begin(selection);
    }

    /// Move a finished hourly game on to the next hour's seed
    ///
    /// Returns whether a new game was started. Games in progress, shared and
    /// random games are left alone.
    pub fn roll_over(&mut self, now: DateTime<Utc>) -> bool {
        if !self.session.is_over() || self.session.origin() != OriginMode::Seeded {
            return false;
        }
        let local = derive_seed(now, self.policy.mode(), self.words.len());
        if remote_agrees(self.session.seed_key(), &local) {
            return false;
        }

        info!(from = %self.session.seed_key(), to = %local.key, "hour rolled over");
        let sources = TargetSources {
            shared_seed: None,
            remote: None,
            now,
        };
        let selection = self.policy.select_target(&sources, &mut self.words, &mut self.rng);
        self.enter(selection, now);
        true
    }

    /// Current frame for renderers
    #[must_use]
    pub fn view(&self, now: DateTime<Utc>) -> ViewModel {
        ViewModel::build(&self.session, self.policy.mode(), self.policy.tier(), now)
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.policy.mode()
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The target, for end screens
    #[must_use]
    pub const fn target(&self) -> &Word {
        self.session.target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::opponent::Tier;
    use crate::game::policy::DEFAULT_CORRUPTION;
    use crate::game::session::{DEFAULT_MAX_ATTEMPTS, Outcome, Player};
    use crate::seed::{EPOCH_UNIX_MS, MS_PER_HOUR};
    use crate::storage::MemoryStore;
    use crate::wordlists::loader::words_from_slice;
    use assert_matches::assert_matches;
    use rand::SeedableRng;

    fn words() -> WordList {
        WordList::new(words_from_slice(&[
            "crane", "slate", "ghost", "audio", "trick", "point", "raise", "blend", "brace",
            "react",
        ]))
    }

    fn hour(h: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(EPOCH_UNIX_MS + h * MS_PER_HOUR + 5_000).unwrap()
    }

    fn shared(hash: i64) -> TargetSources {
        TargetSources {
            shared_seed: Some(hash),
            remote: None,
            now: hour(7000),
        }
    }

    fn controller(mode: GameMode, store: MemoryStore, sources: &TargetSources) -> Controller<MemoryStore> {
        Controller::start(
            Policy::for_mode(mode, DEFAULT_CORRUPTION, Tier::Consistent),
            words(),
            store,
            sources,
            StdRng::seed_from_u64(9),
            DEFAULT_MAX_ATTEMPTS,
        )
    }

    fn type_word<S: GameStore>(c: &mut Controller<S>, word: &str) -> KeyOutcome {
        for ch in word.chars() {
            c.handle_key(Key::Letter(ch));
        }
        c.handle_key(Key::Enter)
    }

    #[test]
    fn shared_link_game_wins_in_two() {
        // shared hash 0 selects index 0, CRANE
        let mut c = controller(GameMode::Regular, MemoryStore::new(), &shared(0));
        assert_eq!(c.target().text(), "CRANE");

        assert_matches!(type_word(&mut c, "slate"), KeyOutcome::Submitted(SubmitOutcome::NextRow { row: 1, .. }));
        assert_matches!(
            type_word(&mut c, "crane"),
            KeyOutcome::Submitted(SubmitOutcome::Won { attempts: 2, .. })
        );
        assert_eq!(c.session().outcome(), Outcome::Won);
        assert_eq!(type_word(&mut c, "ghost"), KeyOutcome::Ignored);
    }

    #[test]
    fn rejected_guess_leaves_row_intact() {
        let mut c = controller(GameMode::Regular, MemoryStore::new(), &shared(0));

        assert_matches!(type_word(&mut c, "zzzzz"), KeyOutcome::Rejected(Rejection::NotInWordList(_)));
        assert_eq!(c.session().current_input(), "ZZZZZ");
        assert_eq!(c.session().completed_rows(), 0);

        assert_eq!(c.handle_key(Key::Backspace), KeyOutcome::Edited);
        assert_matches!(c.handle_key(Key::Enter), KeyOutcome::Rejected(Rejection::WrongLength(4)));
    }

    #[test]
    fn progress_is_saved_and_resumed() {
        let mut c = controller(GameMode::Regular, MemoryStore::new(), &shared(0));
        type_word(&mut c, "slate");

        let key = record_key(GameMode::Regular, "0");
        let record = c.store().load(&key).unwrap();
        assert_eq!(record.guesses, vec!["SLATE".to_owned()]);
        assert!(!record.complete);

        let store = MemoryStore::clone(c.store());
        let resumed = controller(GameMode::Regular, store, &shared(0));
        assert_eq!(resumed.session().completed_rows(), 1);
        assert_eq!(resumed.session().current_row(), Some(1));
    }

    #[test]
    fn completed_seed_falls_back_to_random() {
        let mut c = controller(GameMode::Regular, MemoryStore::new(), &shared(0));
        type_word(&mut c, "crane");
        assert!(c.store().load(&record_key(GameMode::Regular, "0")).unwrap().complete);

        let store = MemoryStore::clone(c.store());
        let again = controller(GameMode::Regular, store, &shared(0));
        assert_eq!(again.session().origin(), OriginMode::Random);
        assert!(!again.session().is_over());
    }

    #[test]
    fn random_games_are_not_saved() {
        let mut c = controller(GameMode::Regular, MemoryStore::new(), &shared(0));
        type_word(&mut c, "crane");
        c.play_again(hour(7000));

        assert_eq!(c.session().origin(), OriginMode::Random);
        type_word(&mut c, "slate");
        let key = record_key(GameMode::Regular, c.session().seed_key());
        assert!(c.store().load(&key).is_none());
    }

    #[test]
    fn submit_word_replaces_open_row() {
        let mut c = controller(GameMode::Regular, MemoryStore::new(), &shared(0));
        c.handle_key(Key::Letter('x'));

        assert_matches!(c.submit_word("toolong"), Err(Rejection::WrongLength(7)));
        assert_eq!(c.session().current_input(), "");
        assert_matches!(c.submit_word(" slate "), Ok(SubmitOutcome::NextRow { .. }));
    }

    #[test]
    fn blueprint_leaves_player_rows() {
        let c = controller(GameMode::Blueprint, MemoryStore::new(), &shared(0));
        let opponent = c.session().opponent_rows();

        assert!(opponent >= 1);
        assert!(c.session().attempts()[..opponent].iter().all(|a| a.player() == Player::Opponent));
        assert!(!c.session().attempts()[..opponent].iter().any(|a| a.text() == "CRANE"));

        let record = c.store().load(&record_key(GameMode::Blueprint, "0")).unwrap();
        assert_eq!(record.prefilled, opponent);
    }

    #[test]
    fn finished_hourly_game_rolls_over() {
        let sources = TargetSources {
            shared_seed: None,
            remote: None,
            now: hour(7000),
        };
        let mut c = controller(GameMode::Regular, MemoryStore::new(), &sources);
        assert_eq!(c.session().seed_key(), "regular-wordle-7000");
        assert!(!c.roll_over(hour(7001)));

        let target = c.target().text().to_owned();
        type_word(&mut c, &target);
        assert!(!c.roll_over(hour(7000)));
        assert!(c.roll_over(hour(7001)));
        assert_eq!(c.session().seed_key(), "regular-wordle-7001");
    }

    fn hourly(h: i64) -> TargetSources {
        TargetSources {
            shared_seed: None,
            remote: None,
            now: hour(h),
        }
    }

    #[test]
    fn roll_over_does_not_replay_completed_hour() {
        let mut earlier = controller(GameMode::Regular, MemoryStore::new(), &hourly(7001));
        let target = earlier.target().text().to_owned();
        type_word(&mut earlier, &target);

        let mut c = controller(GameMode::Regular, MemoryStore::clone(earlier.store()), &hourly(7000));
        let target = c.target().text().to_owned();
        type_word(&mut c, &target);
        assert!(c.roll_over(hour(7001)));

        let record = c.store().load(&record_key(GameMode::Regular, "regular-wordle-7001")).unwrap();
        assert!(record.complete);
        assert_eq!(record.guesses.len(), 1);
        assert_eq!(c.session().origin(), OriginMode::Random);
        assert!(!c.session().is_over());
    }

    #[test]
    fn roll_over_resumes_saved_hour() {
        let mut earlier = controller(GameMode::Regular, MemoryStore::new(), &hourly(7001));
        assert_ne!(earlier.target().text(), "SLATE");
        type_word(&mut earlier, "slate");

        let mut c = controller(GameMode::Regular, MemoryStore::clone(earlier.store()), &hourly(7000));
        let target = c.target().text().to_owned();
        type_word(&mut c, &target);
        assert!(c.roll_over(hour(7001)));

        assert_eq!(c.session().seed_key(), "regular-wordle-7001");
        assert_eq!(c.session().completed_rows(), 1);
        assert_eq!(c.session().attempts()[0].text(), "SLATE");
        let record = c.store().load(&record_key(GameMode::Regular, "regular-wordle-7001")).unwrap();
        assert_eq!(record.guesses, vec!["SLATE".to_owned()]);
    }

    #[test]
    fn fallback_game_on_foreign_list_is_winnable() {
        let list = WordList::new(words_from_slice(&["slate", "lemon", "pride", "vivid"]));
        let start = |store: MemoryStore| {
            Controller::start(
                Policy::for_mode(GameMode::Regular, DEFAULT_CORRUPTION, Tier::Opener),
                list.clone(),
                store,
                &shared(0),
                StdRng::seed_from_u64(4),
                DEFAULT_MAX_ATTEMPTS,
            )
        };

        let mut first = start(MemoryStore::new());
        assert_eq!(first.target().text(), "SLATE");
        type_word(&mut first, "slate");

        let mut again = start(MemoryStore::clone(first.store()));
        assert_eq!(again.session().origin(), OriginMode::Random);
        let target = again.target().clone();
        assert!(again.words().contains(&target));
        assert_matches!(again.submit_word(target.text()), Ok(SubmitOutcome::Won { .. }));
    }

    #[test]
    fn view_reflects_session() {
        let mut c = controller(GameMode::Corrupted, MemoryStore::new(), &shared(0));
        c.handle_key(Key::Letter('s'));

        let view = c.view(hour(7000));
        assert_eq!(view.rows[0].tiles[0].letter, Some('S'));
        assert!(view.title.starts_with("🧪 Corrupted Wordle (Shared)"));
    }
}
