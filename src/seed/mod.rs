//! Hourly seed derivation
//!
//! Every client derives the same puzzle for a given mode and UTC hour without
//! talking to a server. The string hash is part of that contract: changing it
//! changes which word everyone gets.

mod hash;
mod schedule;
mod share;

pub use hash::string_hash;
pub use schedule::{
    EPOCH_UNIX_MS, MS_PER_HOUR, SeedInfo, derive_seed, format_countdown, hours_since_epoch,
    remote_agrees, time_until_next_seed,
};
pub use share::{parse_shared_seed, share_hash, share_link, shared_index};
