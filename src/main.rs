//! Hourly Wordle - CLI
//!
//! TUI and line-based play, plus seed and share-link helpers.

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use hourly_wordle::{
    commands::{prepare_game, run_simple, seed_reports, share_word},
    config::{DEFAULT_SHARE_BASE, GameConfig},
    core::GameMode,
    game::Tier,
    interactive::{App, run_tui},
    logging,
    output::{print_seed_report, print_share_result},
    remote::DEFAULT_API_BASE,
    seed::parse_shared_seed,
    storage::default_data_dir,
    wordlists::{WordList, loader::load_from_file},
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hourly_wordle",
    about = "Wordle with a new word every hour: regular, corrupted and blueprint modes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game mode
    #[arg(short, long, global = true, value_enum, default_value_t = GameMode::Regular)]
    mode: GameMode,

    /// Blueprint opponent tier (1-4); random when omitted
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u8).range(1..=4))]
    tier: Option<u8>,

    /// Play a shared game: the seed number or the whole share link
    #[arg(short, long, global = true, value_parser = parse_seed_arg)]
    seed: Option<i64>,

    /// Never contact the word API
    #[arg(long, global = true)]
    offline: bool,

    /// Word API root
    #[arg(long, global = true, default_value = DEFAULT_API_BASE)]
    api: String,

    /// Timeout for each API request, in milliseconds
    #[arg(long, global = true, default_value = "3000")]
    timeout_ms: u64,

    /// Word list file (one word per line) replacing the bundled list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Directory for saved games and the log file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Chance that each hint is hidden in corrupted mode (0.0-1.0)
    #[arg(long, global = true, default_value = "0.2")]
    corruption: f64,

    /// Site root used in share links
    #[arg(long, global = true, default_value = DEFAULT_SHARE_BASE)]
    share_base: String,

    /// Log file path (defaults to the data directory)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Show this hour's seed for every mode
    Seed {
        /// Also print the target words
        #[arg(long)]
        reveal: bool,
    },

    /// Print a share link that starts a game on WORD
    Share {
        /// A five-letter word from the word list
        word: String,
    },
}

fn parse_seed_arg(s: &str) -> Result<i64, String> {
    parse_shared_seed(s).ok_or_else(|| format!("not a seed or share link: {s}"))
}

impl Cli {
    fn to_config(&self) -> GameConfig {
        GameConfig {
            mode: self.mode,
            tier: self.tier.and_then(Tier::from_level),
            shared_seed: self.seed,
            offline: self.offline,
            api_base: self.api.clone(),
            timeout: Duration::from_millis(self.timeout_ms),
            wordlist: self.wordlist.clone(),
            data_dir: self.data_dir.clone().unwrap_or_else(default_data_dir),
            corruption: self.corruption,
            share_base: self.share_base.clone(),
            log_file: self.log_file.clone(),
            ..GameConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.to_config();

    if let Err(e) = logging::init(&config.log_path()) {
        eprintln!("warning: logging disabled: {e:#}");
    }
    info!(mode = %config.mode, offline = config.offline, "starting");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Seed { reveal } => {
            run_seed_command(&config, reveal);
            Ok(())
        }
        Commands::Share { word } => run_share_command(&config, &word),
    }
}

/// Local word list for the helper commands; they never touch the network
fn local_words(config: &GameConfig) -> WordList {
    config
        .wordlist
        .as_ref()
        .and_then(|path| load_from_file(path).ok())
        .filter(|words| !words.is_empty())
        .map_or_else(WordList::embedded, WordList::new)
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let game = prepare_game(config);
    let app = App::new(game.controller, game.remote, config.share_base.clone());
    run_tui(app)
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let mut game = prepare_game(config);
    run_simple(&mut game.controller, game.remote.as_ref(), &config.share_base)
}

fn run_seed_command(config: &GameConfig, reveal: bool) {
    let words = local_words(config);
    let reports = seed_reports(&GameMode::ALL, &words, Utc::now(), reveal);
    print_seed_report(&reports);
}

fn run_share_command(config: &GameConfig, word: &str) -> Result<()> {
    let words = local_words(config);
    let result = share_word(word, &words, config.mode, &config.share_base)?;
    print_share_result(&result);
    Ok(())
}
