//! Embedded word lists
//!
//! The bundled list is compiled into the binary at build time; the fallback
//! targets are the small per-mode sets used when no seed can be resolved.

use crate::core::GameMode;

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));

/// Targets for an offline regular game
pub const REGULAR_FALLBACK: &[&str] = &["CRANE", "AUDIO", "TRICK", "RAISE", "GHOST"];

/// Targets for an offline corrupted game
pub const CORRUPTED_FALLBACK: &[&str] = &["TRICK", "GLARE", "MORAL", "SHOCK", "VIRAL"];

/// Targets for an offline blueprint game
pub const BLUEPRINT_FALLBACK: &[&str] = &["LOGIC", "CRANE", "AUDIO", "RAISE", "POINT"];

/// Fallback targets for `mode`
#[must_use]
pub const fn fallback_targets(mode: GameMode) -> &'static [&'static str] {
    match mode {
        GameMode::Regular => REGULAR_FALLBACK,
        GameMode::Corrupted => CORRUPTED_FALLBACK,
        GameMode::Blueprint => BLUEPRINT_FALLBACK,
    }
}
