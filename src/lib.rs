//! Hourly Wordle
//!
//! A terminal Wordle with a new word every hour and three variants: Regular,
//! Corrupted (some hints are hidden) and Blueprint (an opponent plays first).
//!
//! # Quick Start
//!
//! ```rust
//! use hourly_wordle::core::{Feedback, Word};
//!
//! let guess = Word::new("arena").unwrap();
//! let target = Word::new("radar").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &target);
//! assert_eq!(feedback.to_emoji(), "🟨🟨⬜⬜🟨");
//! ```

// Core domain types
pub mod core;

// Hourly seeds and share links
pub mod seed;

// Word lists
pub mod wordlists;

// Sessions, mode policies and the controller
pub mod game;

// Saved games
pub mod storage;

// Word API client
pub mod remote;

// Runtime settings and log setup
pub mod config;
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
