//! Game sessions, mode policies and the controller that drives them

mod controller;
pub mod opponent;
mod policy;
mod session;
mod view;

pub use controller::{Controller, Key, KeyOutcome};
pub use opponent::Tier;
pub use policy::{
    BlueprintPolicy, CorruptedPolicy, DEFAULT_CORRUPTION, ModePolicy, Policy, StandardPolicy,
    TargetSelection, TargetSources,
};
pub use session::{
    Attempt, DEFAULT_MAX_ATTEMPTS, GameSession, OriginMode, Outcome, Player, Rejection,
    SubmitOutcome,
};
pub use view::{EndView, KEYBOARD_ROWS, RowView, Tile, ViewModel};
