//! Display functions for command results

use super::formatters::colored_row;
use crate::commands::{SeedReport, ShareResult};
use crate::core::Verdict;
use crate::game::{EndView, KEYBOARD_ROWS, ViewModel};
use colored::Colorize;

/// Print the board and keyboard
pub fn print_board(view: &ViewModel) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("{}", view.title.bright_cyan().bold());
    println!("{}", view.subtitle.bright_black());
    println!("{}", "─".repeat(40).cyan());

    for row in &view.rows {
        println!("{}", colored_row(row));
    }

    println!();
    for keys in KEYBOARD_ROWS {
        let line: Vec<String> = keys
            .chars()
            .map(|c| {
                let key = c.to_string();
                match view.key_state(c) {
                    Some(Verdict::Correct) => key.black().on_green().to_string(),
                    Some(Verdict::Present) => key.black().on_yellow().to_string(),
                    Some(Verdict::Absent) => key.bright_black().to_string(),
                    None => key.white().to_string(),
                }
            })
            .collect();
        println!("  {}", line.join(" "));
    }
    println!("\n{}", view.countdown.bright_black());
}

/// Print the end screen
pub fn print_end_screen(end: &EndView, definition: &str, link: &str) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    if end.won {
        println!("{}", end.headline().bright_green().bold());
    } else {
        println!("{}", end.headline().red().bold());
    }
    println!("The word was: {}", end.answer.bright_yellow().bold());
    println!("{definition}");
    println!("\n{}", end.share_grid);
    println!("\nShare: {}", link.cyan());
    println!("{}", "═".repeat(40).bright_cyan());
}

/// Print hourly seed details for each mode
pub fn print_seed_report(reports: &[SeedReport]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "HOURLY SEEDS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for report in reports {
        println!(
            "\n{}  {}",
            report.mode.title().bold(),
            report.key.bright_black()
        );
        println!(
            "  Index: {}   Word list: {} words",
            report.index, report.word_count
        );
        if let Some(word) = &report.word {
            println!("  Word:  {}", word.text().bright_yellow().bold());
        }
    }

    if let Some(first) = reports.first() {
        println!("\n⏱ Next word in {}", first.countdown.bright_white().bold());
    }
}

/// Print a generated share link
pub fn print_share_result(result: &ShareResult) {
    println!(
        "{} {}",
        "✅ Wordle link for".green(),
        result.word.text().bright_yellow().bold()
    );
    println!("  Seed: {}", result.hash);
    println!("  {}", result.url.cyan());
}
