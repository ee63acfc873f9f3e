//! Command implementations

pub mod play;
pub mod seed;
pub mod share;
pub mod simple;

pub use play::{PreparedGame, prepare_game};
pub use seed::{SeedReport, seed_reports};
pub use share::{ShareError, ShareResult, share_word};
pub use simple::run_simple;
