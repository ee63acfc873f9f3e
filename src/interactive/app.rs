//! TUI application state and event loop

use crate::game::{Controller, Key, KeyOutcome, SubmitOutcome};
use crate::remote::{NO_DEFINITION, RemoteClient, describe};
use crate::seed::share_link;
use crate::storage::GameStore;
use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::info;

/// How long a rejected row stays highlighted
const SHAKE: Duration = Duration::from_millis(600);

/// Redraw interval when no key arrives
const TICK: Duration = Duration::from_millis(250);

/// Oldest messages are dropped past this many
const MAX_MESSAGES: usize = 50;

/// Application state
pub struct App<S: GameStore> {
    pub controller: Controller<S>,
    pub remote: Option<RemoteClient>,
    pub share_base: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    /// Definition of the last answer, once the game has ended
    pub definition: Option<String>,
    /// Set when a game ends; the lookup runs after the end screen is drawn
    definition_pending: bool,
    pub shake_until: Option<Instant>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Results of the games finished in this run
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl Statistics {
    /// Win percentage, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.games_won as f64 / self.total_games as f64 * 100.0
    }
}

impl<S: GameStore> App<S> {
    #[must_use]
    pub fn new(controller: Controller<S>, remote: Option<RemoteClient>, share_base: impl Into<String>) -> Self {
        let mut app = Self {
            controller,
            remote,
            share_base: share_base.into(),
            messages: Vec::new(),
            stats: Statistics::default(),
            definition: None,
            definition_pending: false,
            shake_until: None,
            should_quit: false,
        };
        app.add_message("Type a five-letter word and press Enter.", MessageStyle::Info);
        if app.controller.session().is_over() {
            app.finish_game();
        }
        app
    }

    pub fn add_message(&mut self, text: impl Into<String>, style: MessageStyle) {
        self.messages.push(Message {
            text: text.into(),
            style,
        });
        if self.messages.len() > MAX_MESSAGES {
            let excess = self.messages.len() - MAX_MESSAGES;
            self.messages.drain(..excess);
        }
    }

    /// Whether the open row should be drawn as rejected
    #[must_use]
    pub fn is_shaking(&self) -> bool {
        self.shake_until.is_some_and(|until| Instant::now() < until)
    }

    /// Share link for the current answer
    #[must_use]
    pub fn answer_link(&self) -> String {
        share_link(&self.share_base, self.controller.mode(), self.controller.target())
    }

    pub fn handle_key(&mut self, key: Key) {
        match self.controller.handle_key(key) {
            KeyOutcome::Ignored | KeyOutcome::Edited => {}
            KeyOutcome::Rejected(rejection) => {
                self.shake_until = Some(Instant::now() + SHAKE);
                self.add_message(rejection.to_string(), MessageStyle::Error);
            }
            KeyOutcome::Submitted(outcome) => {
                match outcome {
                    SubmitOutcome::Won { attempts, .. } => {
                        self.stats.games_won += 1;
                        self.stats.total_games += 1;
                        if let Some(slot) = self.stats.guess_distribution.get_mut(attempts) {
                            *slot += 1;
                        }
                        self.add_message(format!("🎉 Solved in {attempts}!"), MessageStyle::Success);
                    }
                    SubmitOutcome::Lost { .. } => {
                        self.stats.total_games += 1;
                        self.add_message(
                            format!("The word was {}", self.controller.target()),
                            MessageStyle::Error,
                        );
                    }
                    SubmitOutcome::NextRow { .. } => return,
                }
                self.finish_game();
            }
        }
    }

    /// Show the end-of-game hints and queue the definition lookup
    fn finish_game(&mut self) {
        self.definition = None;
        self.definition_pending = true;
        self.add_message("Press 'n' for a new random game or 'q' to quit.", MessageStyle::Info);
    }

    /// Fetch the queued definition; blocks on the network when a client is set
    ///
    /// Returns whether anything changed and the frame should be redrawn.
    pub fn load_definition(&mut self) -> bool {
        if !std::mem::take(&mut self.definition_pending) {
            return false;
        }
        let definition = match &self.remote {
            Some(client) => describe(&client.fetch_definition(self.controller.target())),
            None => NO_DEFINITION.to_owned(),
        };
        self.definition = Some(definition);
        true
    }

    pub fn new_game(&mut self) {
        self.controller.play_again(Utc::now());
        self.definition = None;
        self.definition_pending = false;
        self.add_message("🔄 New random game started!", MessageStyle::Info);
    }

    /// Periodic housekeeping between key presses
    pub fn tick(&mut self) {
        if self.controller.roll_over(Utc::now()) {
            self.definition = None;
            self.definition_pending = false;
            self.add_message("⏱ A new hourly word is ready!", MessageStyle::Success);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: GameStore>(app: App<S>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: GameStore>(
    terminal: &mut Terminal<B>,
    mut app: App<S>,
) -> Result<()> {
    info!(mode = %app.controller.mode(), "tui started");

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;
        if app.load_definition() {
            continue;
        }

        if !event::poll(TICK)? {
            app.tick();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            let game_over = app.controller.session().is_over();
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Char('q' | 'Q') if game_over => app.should_quit = true,
                KeyCode::Char('n' | 'N') if game_over => app.new_game(),
                KeyCode::Char(c) => app.handle_key(Key::Letter(c)),
                KeyCode::Backspace => app.handle_key(Key::Backspace),
                KeyCode::Enter => app.handle_key(Key::Enter),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    info!("tui closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameMode;
    use crate::game::{DEFAULT_CORRUPTION, DEFAULT_MAX_ATTEMPTS, Policy, TargetSources, Tier};
    use crate::storage::MemoryStore;
    use crate::wordlists::{WordList, loader::words_from_slice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app() -> App<MemoryStore> {
        let words = WordList::new(words_from_slice(&["crane", "slate", "ghost"]));
        let sources = TargetSources {
            shared_seed: Some(0),
            remote: None,
            now: Utc::now(),
        };
        let controller = Controller::start(
            Policy::for_mode(GameMode::Regular, DEFAULT_CORRUPTION, Tier::Opener),
            words,
            MemoryStore::new(),
            &sources,
            StdRng::seed_from_u64(1),
            DEFAULT_MAX_ATTEMPTS,
        );
        App::new(controller, None, "https://example.test")
    }

    fn enter(app: &mut App<MemoryStore>, word: &str) {
        for c in word.chars() {
            app.handle_key(Key::Letter(c));
        }
        app.handle_key(Key::Enter);
    }

    #[test]
    fn rejection_shakes_and_reports() {
        let mut app = app();
        enter(&mut app, "cra");

        assert!(app.is_shaking());
        assert_eq!(app.messages.last().unwrap().text, "Not enough letters");
    }

    #[test]
    fn win_updates_stats_and_definition() {
        let mut app = app();
        enter(&mut app, "slate");
        enter(&mut app, "crane");

        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
        assert!(app.definition.is_none());
        assert!(app.load_definition());
        assert_eq!(app.definition.as_deref(), Some(NO_DEFINITION));
        assert!(!app.load_definition());
        assert_eq!(
            app.answer_link(),
            "https://example.test/modes/regular.html?seed=64383721"
        );

        app.new_game();
        assert!(app.definition.is_none());
        assert!(!app.controller.session().is_over());
    }

    #[test]
    fn message_log_is_capped() {
        let mut app = app();
        for i in 0..MAX_MESSAGES + 10 {
            app.add_message(format!("note {i}"), MessageStyle::Info);
        }

        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "note 10");
        assert_eq!(app.messages.last().unwrap().text, format!("note {}", MAX_MESSAGES + 9));
    }

    #[test]
    fn win_rate() {
        let stats = Statistics {
            total_games: 4,
            games_won: 3,
            guess_distribution: [0; 7],
        };
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
