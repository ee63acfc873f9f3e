//! Read-only projection of a session for renderers
//!
//! Both the TUI and the line-based front end draw from a [`ViewModel`]; neither
//! inspects the session directly.

use super::opponent::Tier;
use super::session::{GameSession, OriginMode, Outcome, Player};
use crate::core::{GameMode, Verdict, WORD_LENGTH};
use crate::seed::{format_countdown, time_until_next_seed};
use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// One board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    pub letter: Option<char>,
    pub verdict: Option<Verdict>,
}

/// One board row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub tiles: [Tile; WORD_LENGTH],
    /// `None` for rows not yet reached
    pub player: Option<Player>,
    /// The row currently accepting input
    pub active: bool,
}

impl RowView {
    fn blank() -> Self {
        Self {
            tiles: [Tile::default(); WORD_LENGTH],
            player: None,
            active: false,
        }
    }
}

/// Data for the end screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndView {
    pub won: bool,
    pub answer: String,
    pub share_grid: String,
}

impl EndView {
    /// Headline shown above the answer
    #[must_use]
    pub const fn headline(&self) -> &'static str {
        if self.won { "🎉 You Win!" } else { "❌ You Lose!" }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub title: String,
    pub subtitle: String,
    pub rows: Vec<RowView>,
    pub keyboard: FxHashMap<char, Verdict>,
    pub countdown: String,
    pub end: Option<EndView>,
}

impl ViewModel {
    /// Project `session` at instant `now`
    #[must_use]
    pub fn build(session: &GameSession, mode: GameMode, tier: Option<Tier>, now: DateTime<Utc>) -> Self {
        let (title, subtitle) = titles(mode, session.origin(), session.seed_key(), tier);

        let mut rows: Vec<RowView> = session
            .attempts()
            .iter()
            .map(|attempt| {
                let mut row = RowView::blank();
                row.player = Some(attempt.player());
                row.active = attempt.is_open();
                let verdicts = attempt.feedback().map(|f| *f.verdicts());
                for (i, letter) in attempt.text().chars().take(WORD_LENGTH).enumerate() {
                    row.tiles[i] = Tile {
                        letter: Some(letter),
                        verdict: verdicts.map(|v| v[i]),
                    };
                }
                row
            })
            .collect();
        rows.resize_with(session.max_attempts().max(rows.len()), RowView::blank);

        Self {
            title,
            subtitle,
            keyboard: keyboard_states(session),
            countdown: format!("⏱ Next word in {}", format_countdown(time_until_next_seed(now))),
            end: end_view(session, mode),
            rows,
        }
    }

    /// Verdict shown on the keyboard for `letter`, if it has been played
    #[must_use]
    pub fn key_state(&self, letter: char) -> Option<Verdict> {
        self.keyboard.get(&letter.to_ascii_uppercase()).copied()
    }
}

const fn rank(verdict: Verdict) -> u8 {
    match verdict {
        Verdict::Absent => 0,
        Verdict::Present => 1,
        Verdict::Correct => 2,
    }
}

/// Best displayed verdict per letter; green beats yellow beats gray
fn keyboard_states(session: &GameSession) -> FxHashMap<char, Verdict> {
    let mut states: FxHashMap<char, Verdict> = FxHashMap::default();
    for attempt in session.attempts() {
        let Some(feedback) = attempt.feedback() else {
            continue;
        };
        for (letter, &verdict) in attempt.text().chars().zip(feedback.verdicts()) {
            states
                .entry(letter)
                .and_modify(|current| {
                    if rank(verdict) > rank(*current) {
                        *current = verdict;
                    }
                })
                .or_insert(verdict);
        }
    }
    states
}

fn titles(mode: GameMode, origin: OriginMode, seed_key: &str, tier: Option<Tier>) -> (String, String) {
    let base = mode.title();
    let (suffix, subtitle) = match origin {
        OriginMode::Seeded => ("Seed", format!("Word of the Hour · Seed: {seed_key}")),
        OriginMode::SharedLink => ("Shared", format!("Custom Shared Game · Seed: {seed_key}")),
        OriginMode::Random => ("Random", "Offline/random fallback game".to_owned()),
    };

    let title = match tier {
        Some(tier) => format!("{base} ({suffix}) · {tier}"),
        None => format!("{base} ({suffix})"),
    };
    (title, subtitle)
}

fn end_view(session: &GameSession, mode: GameMode) -> Option<EndView> {
    let won = match session.outcome() {
        Outcome::InProgress => return None,
        Outcome::Won => true,
        Outcome::Lost => false,
    };

    // opponent rows do not count against the player
    let score = if won {
        session.human_rows().to_string()
    } else {
        "X".to_owned()
    };

    let mut share_grid = format!("{} {score}/{}", mode.title(), session.max_attempts());
    for attempt in session.attempts() {
        if let Some(feedback) = attempt.feedback() {
            share_grid.push('\n');
            share_grid.push_str(&feedback.to_emoji());
        }
    }

    Some(EndView {
        won,
        answer: session.target().text().to_owned(),
        share_grid,
    })
}
