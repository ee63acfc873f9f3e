//! Mode policies
//!
//! The three variants share one controller; they differ only in how the target
//! is chosen, how feedback is altered before it is shown and whether an
//! opponent plays first.

use super::opponent::{self, Tier};
use super::session::{GameSession, OriginMode};
use crate::core::{Feedback, GameMode, Verdict, Word};
use crate::remote::RemoteSeed;
use crate::seed::{derive_seed, remote_agrees, shared_index};
use crate::wordlists::{WordList, fallback_targets, loader::words_from_slice};
use chrono::{DateTime, Utc};
use rand::Rng;
use rand::prelude::IndexedRandom;
use tracing::{info, warn};

/// Share of correct/present tiles hidden in corrupted mode
pub const DEFAULT_CORRUPTION: f64 = 0.2;

/// Inputs available when choosing a target
#[derive(Debug, Clone)]
pub struct TargetSources {
    /// Seed from a share link
    pub shared_seed: Option<i64>,
    /// Validated authoritative seed, if one was fetched in time
    pub remote: Option<RemoteSeed>,
    /// Current time, for the hourly seed
    pub now: DateTime<Utc>,
}

/// Chosen target and how it was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSelection {
    pub target: Word,
    pub seed_key: String,
    pub origin: OriginMode,
}

/// Behavior that distinguishes one game variant from another
pub trait ModePolicy {
    /// The variant this policy implements
    fn mode(&self) -> GameMode;

    /// Choose the target word
    ///
    /// Order: share link, then a remote seed that agrees with the local hour,
    /// then the local hourly seed, then a random fallback word. A remote word
    /// missing from `words` is appended so it can be guessed.
    fn select_target<R: Rng + ?Sized>(
        &self,
        sources: &TargetSources,
        words: &mut WordList,
        rng: &mut R,
    ) -> TargetSelection {
        let mode = self.mode();

        if let Some(hash) = sources.shared_seed
            && let Some(target) = words.get(shared_index(hash, words.len()))
        {
            info!(%mode, hash, "playing shared link");
            return TargetSelection {
                target: target.clone(),
                seed_key: hash.to_string(),
                origin: OriginMode::SharedLink,
            };
        }

        let local = derive_seed(sources.now, mode, words.len());

        if let Some(remote) = &sources.remote {
            if remote_agrees(&remote.key, &local) {
                if words.push_if_missing(remote.word.clone()) {
                    info!(word_count = words.len(), "remote seed word added to list");
                }
                info!(%mode, key = %remote.key, "using remote seed");
                return TargetSelection {
                    target: remote.word.clone(),
                    seed_key: remote.key.clone(),
                    origin: OriginMode::Seeded,
                };
            }
            warn!(%mode, remote = %remote.key, local = %local.key, "remote seed disagrees with local hour");
        }

        if let Some(target) = words.get(local.index) {
            info!(%mode, key = %local.key, index = local.index, "using local hourly seed");
            return TargetSelection {
                target: target.clone(),
                seed_key: local.key,
                origin: OriginMode::Seeded,
            };
        }

        warn!(%mode, "no seed available, falling back to a random word");
        self.random_target(words, sources.now, rng)
    }

    /// Random target from the mode's fallback set
    ///
    /// The target is appended to `words` when missing so it can be guessed.
    fn random_target<R: Rng + ?Sized>(
        &self,
        words: &mut WordList,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> TargetSelection {
        let fallback = words_from_slice(fallback_targets(self.mode()));
        let target = fallback
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| fallback_word(self.mode()));
        if words.push_if_missing(target.clone()) {
            info!(%target, "fallback target added to word list");
        }

        TargetSelection {
            target,
            seed_key: format!("random-{}", now.timestamp_millis()),
            origin: OriginMode::Random,
        }
    }

    /// Alter the true feedback before the player sees it
    fn post_process<R: Rng + ?Sized>(&self, feedback: Feedback, _rng: &mut R) -> Feedback {
        feedback
    }

    /// Fill opponent rows ahead of the player's first row; returns rows added
    fn prefill_opponent_rows<R: Rng + ?Sized>(
        &self,
        _session: &mut GameSession,
        _words: &WordList,
        _rng: &mut R,
    ) -> usize {
        0
    }
}

/// First fallback target of `mode`
fn fallback_word(mode: GameMode) -> Word {
    words_from_slice(fallback_targets(mode))
        .into_iter()
        .next()
        .expect("fallback targets are valid words")
}

/// Feedback shown as computed
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPolicy;

impl ModePolicy for StandardPolicy {
    fn mode(&self) -> GameMode {
        GameMode::Regular
    }
}

/// Correct and present tiles are independently hidden as absent
#[derive(Debug, Clone, Copy)]
pub struct CorruptedPolicy {
    /// Chance that each correct/present tile is shown as absent
    pub probability: f64,
}

impl CorruptedPolicy {
    /// Create a policy; `probability` is clamped to `[0, 1]`, NaN counts as zero
    #[must_use]
    pub fn new(probability: f64) -> Self {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        Self { probability }
    }
}

impl Default for CorruptedPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_CORRUPTION)
    }
}

impl ModePolicy for CorruptedPolicy {
    fn mode(&self) -> GameMode {
        GameMode::Corrupted
    }

    fn post_process<R: Rng + ?Sized>(&self, feedback: Feedback, rng: &mut R) -> Feedback {
        let mut verdicts = *feedback.verdicts();
        for verdict in &mut verdicts {
            if *verdict != Verdict::Absent && rng.random_bool(self.probability) {
                *verdict = Verdict::Absent;
            }
        }
        Feedback::new(verdicts)
    }
}

/// An opponent plays the early rows
#[derive(Debug, Clone, Copy)]
pub struct BlueprintPolicy {
    pub tier: Tier,
}

impl BlueprintPolicy {
    #[must_use]
    pub const fn new(tier: Tier) -> Self {
        Self { tier }
    }
}

impl ModePolicy for BlueprintPolicy {
    fn mode(&self) -> GameMode {
        GameMode::Blueprint
    }

    fn prefill_opponent_rows<R: Rng + ?Sized>(
        &self,
        session: &mut GameSession,
        words: &WordList,
        rng: &mut R,
    ) -> usize {
        let budget = session.max_attempts().saturating_sub(1);
        let rows = opponent::play_rows(self.tier, words, session.target(), budget, rng);

        let added = rows
            .iter()
            .take_while(|(guess, feedback)| session.push_opponent_row(guess, *feedback))
            .count();
        info!(tier = self.tier.level(), rows = added, "opponent rows prefilled");
        added
    }
}

/// Runtime-selected policy with static dispatch
#[derive(Debug, Clone, Copy)]
pub enum Policy {
    Standard(StandardPolicy),
    Corrupted(CorruptedPolicy),
    Blueprint(BlueprintPolicy),
}

impl Policy {
    /// Policy for `mode`
    ///
    /// `corruption` applies to corrupted mode and `tier` to blueprint mode.
    #[must_use]
    pub fn for_mode(mode: GameMode, corruption: f64, tier: Tier) -> Self {
        match mode {
            GameMode::Regular => Self::Standard(StandardPolicy),
            GameMode::Corrupted => Self::Corrupted(CorruptedPolicy::new(corruption)),
            GameMode::Blueprint => Self::Blueprint(BlueprintPolicy::new(tier)),
        }
    }

    /// Opponent tier, for blueprint games
    #[must_use]
    pub const fn tier(&self) -> Option<Tier> {
        match self {
            Self::Blueprint(p) => Some(p.tier),
            _ => None,
        }
    }
}

impl ModePolicy for Policy {
    fn mode(&self) -> GameMode {
        match self {
            Self::Standard(p) => p.mode(),
            Self::Corrupted(p) => p.mode(),
            Self::Blueprint(p) => p.mode(),
        }
    }

    fn post_process<R: Rng + ?Sized>(&self, feedback: Feedback, rng: &mut R) -> Feedback {
        match self {
            Self::Standard(p) => p.post_process(feedback, rng),
            Self::Corrupted(p) => p.post_process(feedback, rng),
            Self::Blueprint(p) => p.post_process(feedback, rng),
        }
    }

    fn prefill_opponent_rows<R: Rng + ?Sized>(
        &self,
        session: &mut GameSession,
        words: &WordList,
        rng: &mut R,
    ) -> usize {
        match self {
            Self::Standard(p) => p.prefill_opponent_rows(session, words, rng),
            Self::Corrupted(p) => p.prefill_opponent_rows(session, words, rng),
            Self::Blueprint(p) => p.prefill_opponent_rows(session, words, rng),
        }
    }
}
