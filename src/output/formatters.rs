//! Formatting utilities for terminal output

use crate::core::Verdict;
use crate::game::{Player, RowView, Tile};
use colored::{ColoredString, Colorize};

/// Render one tile as a colored block
#[must_use]
pub fn colored_tile(tile: Tile) -> ColoredString {
    let text = format!(" {} ", tile.letter.unwrap_or('·'));
    match tile.verdict {
        Some(Verdict::Correct) => text.black().on_green().bold(),
        Some(Verdict::Present) => text.black().on_yellow().bold(),
        Some(Verdict::Absent) => text.white().on_bright_black(),
        None if tile.letter.is_some() => text.white().bold(),
        None => text.bright_black(),
    }
}

/// Render a board row, marking opponent rows
#[must_use]
pub fn colored_row(row: &RowView) -> String {
    let tiles: Vec<String> = row.tiles.iter().map(|&t| colored_tile(t).to_string()).collect();
    let marker = if row.player == Some(Player::Opponent) {
        "🤖"
    } else {
        "  "
    };
    format!("{marker} {}", tiles.join(" "))
}

/// Letters of a row followed by its emoji feedback, e.g. `SLATE ⬜⬜🟩⬜🟩`
#[must_use]
pub fn plain_row(row: &RowView) -> String {
    let letters: String = row.tiles.iter().map(|t| t.letter.unwrap_or('_')).collect();
    let emoji: String = row
        .tiles
        .iter()
        .map(|t| t.verdict.map_or('·', Verdict::emoji))
        .collect();
    format!("{letters} {emoji}")
}
