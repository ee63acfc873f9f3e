//! Hour-window scheduling of seeded puzzles

use super::hash::string_hash;
use crate::core::GameMode;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// 2025-01-01T00:00:00Z in Unix milliseconds
pub const EPOCH_UNIX_MS: i64 = 1_735_689_600_000;

/// Length of one seed window
pub const MS_PER_HOUR: i64 = 3_600_000;

/// Result of deriving the puzzle for one hour window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedInfo {
    /// Index into the word list
    pub index: usize,
    /// `"{mode}-wordle-{hours_elapsed}"`
    pub key: String,
    /// Whole hours since the epoch
    pub hours_elapsed: i64,
}

/// Whole hours between the epoch and `now`, rounded toward negative infinity
#[must_use]
pub fn hours_since_epoch(now: DateTime<Utc>) -> i64 {
    (now.timestamp_millis() - EPOCH_UNIX_MS).div_euclid(MS_PER_HOUR)
}

/// Derive the seeded puzzle for `mode` at `now`
///
/// Two calls within the same UTC hour return the same key and index. An empty
/// word list yields index 0.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use hourly_wordle::core::GameMode;
/// use hourly_wordle::seed::derive_seed;
///
/// let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 30, 0).unwrap();
/// let seed = derive_seed(now, GameMode::Regular, 10);
/// assert_eq!(seed.key, "regular-wordle-0");
/// assert_eq!(seed.hours_elapsed, 0);
/// ```
#[must_use]
pub fn derive_seed(now: DateTime<Utc>, mode: GameMode, word_list_len: usize) -> SeedInfo {
    let hours_elapsed = hours_since_epoch(now);
    let key = format!("{}-wordle-{hours_elapsed}", mode.as_str());
    let index = (string_hash(&key) as usize)
        .checked_rem(word_list_len)
        .unwrap_or(0);

    SeedInfo {
        index,
        key,
        hours_elapsed,
    }
}

/// Check a remote seed key against the locally computed hour
///
/// Keys ending in `-{hours}` (or consisting only of the hour number) must name
/// the same hour as `local`. Keys in any other shape cannot be compared and are
/// accepted.
#[must_use]
pub fn remote_agrees(remote_key: &str, local: &SeedInfo) -> bool {
    let tail = remote_key.rsplit('-').next().unwrap_or(remote_key);
    tail.parse::<i64>()
        .map_or(true, |hours| hours == local.hours_elapsed)
}

/// Time left until the next seed window opens
#[must_use]
pub fn time_until_next_seed(now: DateTime<Utc>) -> Duration {
    let into_hour = now.timestamp_millis().rem_euclid(MS_PER_HOUR);
    Duration::from_millis((MS_PER_HOUR - into_hour).unsigned_abs())
}

/// Format a countdown as `m:ss`
#[must_use]
pub fn format_countdown(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn at(hours: i64, minutes: i64, seconds: i64) -> DateTime<Utc> {
        let ms = EPOCH_UNIX_MS + hours * MS_PER_HOUR + minutes * 60_000 + seconds * 1000;
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    #[test]
    fn epoch_constant_matches_calendar_date() {
        let epoch = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(epoch.timestamp_millis(), EPOCH_UNIX_MS);
    }

    #[test]
    fn same_hour_yields_same_seed() {
        let early = derive_seed(at(7000, 0, 1), GameMode::Regular, 10);
        let late = derive_seed(at(7000, 59, 59), GameMode::Regular, 10);

        assert_eq!(early, late);
        assert_eq!(early.key, "regular-wordle-7000");
        assert_eq!(early.index, 6);
    }

    #[test]
    fn next_hour_yields_new_key() {
        let now = derive_seed(at(7000, 30, 0), GameMode::Regular, 10);
        let next = derive_seed(at(7001, 30, 0), GameMode::Regular, 10);

        assert_ne!(now.key, next.key);
        assert_eq!(next.hours_elapsed, 7001);
        assert_eq!(next.index, 7);
    }

    #[test]
    fn modes_get_independent_keys() {
        let regular = derive_seed(at(7000, 0, 0), GameMode::Regular, 566);
        let corrupted = derive_seed(at(7000, 0, 0), GameMode::Corrupted, 566);

        assert_eq!(corrupted.key, "corrupted-wordle-7000");
        assert_ne!(regular.key, corrupted.key);
    }

    #[test]
    fn before_epoch_rounds_down() {
        let before = at(0, -1, 0);
        assert_eq!(hours_since_epoch(before), -1);
        assert_eq!(
            derive_seed(before, GameMode::Regular, 10).key,
            "regular-wordle--1"
        );
    }

    #[test]
    fn empty_word_list_yields_index_zero() {
        assert_eq!(derive_seed(at(5, 0, 0), GameMode::Regular, 0).index, 0);
    }

    #[test]
    fn remote_key_comparison() {
        let local = derive_seed(at(7000, 10, 0), GameMode::Regular, 10);

        assert!(remote_agrees("regular-wordle-7000", &local));
        assert!(remote_agrees("7000", &local));
        assert!(!remote_agrees("regular-wordle-6999", &local));
        assert!(remote_agrees("opaque", &local));
    }

    #[test]
    fn countdown_to_next_hour() {
        let now = at(12, 45, 30);
        assert_eq!(now.minute(), 45);

        let remaining = time_until_next_seed(now);
        assert_eq!(remaining, Duration::from_secs(14 * 60 + 30));
        assert_eq!(format_countdown(remaining), "14:30");
    }

    #[test]
    fn countdown_at_boundary_is_full_hour() {
        assert_eq!(
            format_countdown(time_until_next_seed(at(3, 0, 0))),
            "60:00"
        );
    }
}
