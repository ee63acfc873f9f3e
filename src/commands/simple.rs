//! Simple interactive CLI mode
//!
//! Line-based play without the TUI

use crate::game::{Controller, SubmitOutcome};
use crate::output::{print_board, print_end_screen};
use crate::remote::{NO_DEFINITION, RemoteClient, describe};
use crate::seed::share_link;
use crate::storage::GameStore;
use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: GameStore>(
    controller: &mut Controller<S>,
    remote: Option<&RemoteClient>,
    share_base: &str,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════╗");
    println!("║          Hourly Wordle - Simple          ║");
    println!("╚══════════════════════════════════════════╝\n");
    println!("Type a five-letter guess and press Enter.");
    println!("Commands: 'quit' to exit, 'new' for a new random game\n");

    loop {
        if controller.roll_over(Utc::now()) {
            println!("\n{}", "⏱ A new hourly word is ready!".bright_green());
        }
        print_board(&controller.view(Utc::now()));

        if controller.session().is_over() {
            finish(controller, remote, share_base);
            if wants_another_game(&get_user_input("Play again? (yes/no)")?) {
                controller.play_again(Utc::now());
                println!("\n🔄 New random game started!\n");
                continue;
            }
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        let input = get_user_input("Guess")?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                controller.play_again(Utc::now());
                println!("\n🔄 New random game started!\n");
                continue;
            }
            _ => {}
        }

        match controller.submit_word(&input) {
            Ok(SubmitOutcome::Won { attempts, .. }) => {
                println!("\n{}", format!("🎉 Solved in {attempts}!").bright_green().bold());
            }
            Ok(SubmitOutcome::Lost { .. }) => {
                println!("\n{}", "❌ Out of guesses".red().bold());
            }
            Ok(SubmitOutcome::NextRow { .. }) => {}
            Err(rejection) => println!("{}", format!("❌ {rejection}").red()),
        }
    }
}

fn finish<S: GameStore>(controller: &Controller<S>, remote: Option<&RemoteClient>, share_base: &str) {
    let Some(end) = controller.view(Utc::now()).end else {
        return;
    };
    let definition = remote.map_or_else(
        || NO_DEFINITION.to_owned(),
        |client| describe(&client.fetch_definition(controller.target())),
    );
    let link = share_link(share_base, controller.mode(), controller.target());
    print_end_screen(&end, &definition, &link);
}

/// Answer to the play-again prompt; anything but yes/y/new ends the session
fn wants_another_game(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y" | "new")
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("flushing stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("reading from stdin")?;
    if read == 0 {
        return Ok("quit".to_owned());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_again_answers() {
        for yes in ["yes", "Y", "new", " YES "] {
            assert!(wants_another_game(yes), "{yes}");
        }
        for no in ["n", "no", "N", "quit", ""] {
            assert!(!wants_another_game(no), "{no}");
        }
    }
}
