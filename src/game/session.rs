//! Game session state machine
//!
//! A session owns the target, the rows played so far and the outcome. While
//! the game is in progress exactly one row is open (typed but not evaluated)
//! and it is always the last row; once the game is over no row is open.

use crate::core::{Feedback, WORD_LENGTH, Word};
use crate::storage::PersistedRecord;
use crate::wordlists::WordList;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rows available in a standard game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Where the target word came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OriginMode {
    /// Hourly seed, shared by everyone playing this mode this hour
    #[serde(rename = "seed")]
    Seeded,
    /// Random word local to this session
    #[serde(rename = "random")]
    Random,
    /// Seed taken from a share link
    #[serde(rename = "shared")]
    SharedLink,
}

/// Session outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Who played a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Human,
    Opponent,
}

/// One row of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    text: String,
    feedback: Option<Feedback>,
    player: Player,
}

impl Attempt {
    fn open() -> Self {
        Self {
            text: String::new(),
            feedback: None,
            player: Player::Human,
        }
    }

    /// Letters typed or guessed in this row
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Displayed feedback, `None` while the row is still being typed
    #[must_use]
    pub const fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    #[must_use]
    pub const fn player(&self) -> Player {
        self.player
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.feedback.is_none()
    }
}

/// Why a guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Not enough letters")]
    WrongLength(usize),
    #[error("{0} is not in the word list")]
    NotInWordList(String),
    #[error("The game is already over")]
    GameOver,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Guess evaluated and a new row opened
    NextRow { row: usize, feedback: Feedback },
    /// Guess matched the target
    Won { attempts: usize, feedback: Feedback },
    /// Last row used without matching the target
    Lost { feedback: Feedback },
}

impl SubmitOutcome {
    /// Feedback shown for the submitted row
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        match self {
            Self::NextRow { feedback, .. }
            | Self::Won { feedback, .. }
            | Self::Lost { feedback } => *feedback,
        }
    }
}

/// A single game
#[derive(Debug, Clone)]
pub struct GameSession {
    target: Word,
    attempts: Vec<Attempt>,
    max_attempts: usize,
    outcome: Outcome,
    seed_key: String,
    origin: OriginMode,
}

impl GameSession {
    /// Start a fresh game with one open row
    ///
    /// `max_attempts` is clamped to at least 1.
    #[must_use]
    pub fn new(target: Word, seed_key: impl Into<String>, origin: OriginMode, max_attempts: usize) -> Self {
        Self {
            target,
            attempts: vec![Attempt::open()],
            max_attempts: max_attempts.max(1),
            outcome: Outcome::InProgress,
            seed_key: seed_key.into(),
            origin,
        }
    }

    /// Rebuild a game from a saved record
    ///
    /// Returns `None` when the record is malformed, names a different target,
    /// or is internally inconsistent (rows after a win, too many rows).
    #[must_use]
    pub fn restore(
        record: &PersistedRecord,
        expected_target: Option<&Word>,
        seed_key: impl Into<String>,
        max_attempts: usize,
    ) -> Option<Self> {
        let (target, rows) = record.rows()?;
        if expected_target.is_some_and(|expected| *expected != target) {
            return None;
        }

        let mut session = Self::new(target, seed_key, record.mode, max_attempts);

        for (i, (word, feedback)) in rows.into_iter().enumerate() {
            let player = if i < record.prefilled {
                Player::Opponent
            } else {
                Player::Human
            };
            let won = player == Player::Human && word == session.target;

            let attempt = session.open_attempt_mut()?;
            attempt.text = word.text().to_owned();
            attempt.feedback = Some(feedback);
            attempt.player = player;
            session.settle(won);
        }

        Some(session)
    }

    /// Decide the outcome after the last row was evaluated
    fn settle(&mut self, won: bool) {
        if won {
            self.outcome = Outcome::Won;
        } else if self.attempts.len() >= self.max_attempts {
            self.outcome = Outcome::Lost;
        } else if self.attempts.last().is_some_and(|a| !a.is_open()) {
            self.attempts.push(Attempt::open());
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    #[must_use]
    pub fn seed_key(&self) -> &str {
        &self.seed_key
    }

    #[must_use]
    pub const fn origin(&self) -> OriginMode {
        self.origin
    }

    /// Index of the open row, if any
    #[must_use]
    pub fn current_row(&self) -> Option<usize> {
        self.attempts
            .last()
            .filter(|a| a.is_open())
            .map(|_| self.attempts.len() - 1)
    }

    /// Text of the open row (empty when none is open)
    #[must_use]
    pub fn current_input(&self) -> &str {
        self.open_attempt().map_or("", Attempt::text)
    }

    /// Number of evaluated rows
    #[must_use]
    pub fn completed_rows(&self) -> usize {
        self.attempts.iter().filter(|a| !a.is_open()).count()
    }

    /// Rows played by the blueprint opponent
    #[must_use]
    pub fn opponent_rows(&self) -> usize {
        self.attempts
            .iter()
            .filter(|a| a.player == Player::Opponent)
            .count()
    }

    /// Evaluated rows the player submitted
    #[must_use]
    pub fn human_rows(&self) -> usize {
        self.completed_rows() - self.opponent_rows()
    }

    fn open_attempt(&self) -> Option<&Attempt> {
        self.attempts.last().filter(|a| a.is_open())
    }

    fn open_attempt_mut(&mut self) -> Option<&mut Attempt> {
        if self.outcome != Outcome::InProgress {
            return None;
        }
        self.attempts.last_mut().filter(|a| a.is_open())
    }

    /// Append a letter to the open row
    ///
    /// Returns whether the row changed. Non-letters, a full row and a finished
    /// game are all no-ops.
    pub fn type_letter(&mut self, letter: char) -> bool {
        if !letter.is_ascii_alphabetic() {
            return false;
        }
        match self.open_attempt_mut() {
            Some(attempt) if attempt.text.len() < WORD_LENGTH => {
                attempt.text.push(letter.to_ascii_uppercase());
                true
            }
            _ => false,
        }
    }

    /// Remove the last letter of the open row; returns whether the row changed
    pub fn backspace(&mut self) -> bool {
        self.open_attempt_mut()
            .is_some_and(|attempt| attempt.text.pop().is_some())
    }

    /// Submit the open row with unmodified feedback
    ///
    /// # Errors
    /// Returns a `Rejection` and leaves the session untouched when the row is
    /// not a complete word from `words`, or the game is over.
    pub fn submit(&mut self, words: &WordList) -> Result<SubmitOutcome, Rejection> {
        self.submit_with(words, |feedback| feedback)
    }

    /// Submit the open row, passing the true feedback through `display`
    ///
    /// `display` decides what the player is shown and what gets stored. Winning
    /// is always decided by comparing the guess with the target, never by the
    /// displayed feedback.
    ///
    /// # Errors
    /// Same as [`GameSession::submit`].
    pub fn submit_with(
        &mut self,
        words: &WordList,
        display: impl FnOnce(Feedback) -> Feedback,
    ) -> Result<SubmitOutcome, Rejection> {
        let guess = self.validate_open_row(words)?;
        let feedback = display(Feedback::evaluate(&guess, &self.target));
        let won = guess == self.target;

        if let Some(attempt) = self.open_attempt_mut() {
            attempt.text = guess.text().to_owned();
            attempt.feedback = Some(feedback);
        }
        self.settle(won);

        Ok(match self.outcome {
            Outcome::Won => SubmitOutcome::Won {
                attempts: self.human_rows(),
                feedback,
            },
            Outcome::Lost => SubmitOutcome::Lost { feedback },
            Outcome::InProgress => SubmitOutcome::NextRow {
                row: self.attempts.len() - 1,
                feedback,
            },
        })
    }

    fn validate_open_row(&self, words: &WordList) -> Result<Word, Rejection> {
        if self.is_over() {
            return Err(Rejection::GameOver);
        }
        let text = self.current_input();
        if text.len() != WORD_LENGTH {
            return Err(Rejection::WrongLength(text.len()));
        }
        let guess = Word::new(text).map_err(|_| Rejection::WrongLength(text.len()))?;
        if !words.contains(&guess) {
            return Err(Rejection::NotInWordList(guess.text().to_owned()));
        }
        Ok(guess)
    }

    /// Insert an evaluated opponent row ahead of the open row
    ///
    /// Only allowed before the player has submitted anything and while at
    /// least one row stays free for the player. Returns whether the row was
    /// added.
    pub fn push_opponent_row(&mut self, guess: &Word, feedback: Feedback) -> bool {
        if self.is_over() || self.human_rows() > 0 || self.attempts.len() >= self.max_attempts {
            return false;
        }
        let open_at = self.attempts.len() - 1;
        self.attempts.insert(
            open_at,
            Attempt {
                text: guess.text().to_owned(),
                feedback: Some(feedback),
                player: Player::Opponent,
            },
        );
        true
    }

    /// Snapshot of the evaluated rows for persistence
    #[must_use]
    pub fn to_record(&self) -> PersistedRecord {
        let evaluated = self.attempts.iter().filter_map(|a| a.feedback.map(|f| (a, f)));
        let (guesses, feedbacks) = evaluated.map(|(a, f)| (a.text.clone(), f)).unzip();

        PersistedRecord {
            word: self.target.text().to_owned(),
            guesses,
            feedbacks,
            mode: self.origin,
            complete: self.is_over(),
            prefilled: self.opponent_rows(),
        }
    }
}
