//! Handle-time ("TMA") normalization.
//!
//! Talk times arrive as free text in `MM:SS` shape. Anything else (wrong
//! shape, non-numeric parts, a non-text cell) is coerced to zero seconds
//! rather than rejecting the whole sheet. Coercions are counted so the
//! pipeline can surface them; they are never silent.

use crate::core::domain::{HandleTimeRecord, TalkTimeRecord};

/// Parse a `minutes:seconds` string into total seconds.
///
/// # Examples
///
/// ```
/// use capacity_rs::parsing::talk_time::parse_minutes_seconds;
///
/// assert_eq!(parse_minutes_seconds("5:30"), Some(330));
/// assert_eq!(parse_minutes_seconds("0:00"), Some(0));
/// assert_eq!(parse_minutes_seconds("abc"), None);
/// ```
pub fn parse_minutes_seconds(raw: &str) -> Option<i64> {
    let (minutes, seconds) = raw.split_once(':')?;
    let minutes: i64 = minutes.trim().parse().ok()?;
    let seconds: i64 = seconds.trim().parse().ok()?;
    if minutes < 0 || seconds < 0 {
        return None;
    }
    Some(minutes * 60 + seconds)
}

/// Normalize raw talk-time rows into per-hour durations in seconds.
///
/// Returns the normalized records plus the number of rows whose talk time
/// could not be parsed and was coerced to 0.
pub fn normalize_talk_times(records: &[TalkTimeRecord]) -> (Vec<HandleTimeRecord>, usize) {
    let mut coerced = 0;
    let normalized = records
        .iter()
        .map(|record| {
            let seconds = record.raw.as_deref().and_then(parse_minutes_seconds);
            if seconds.is_none() {
                coerced += 1;
                log::debug!(
                    "hour {}: unparsable talk time {:?}, coercing to 0s",
                    record.hour,
                    record.raw
                );
            }
            HandleTimeRecord {
                hour: record.hour,
                talk_time_seconds: seconds.unwrap_or(0),
            }
        })
        .collect();
    (normalized, coerced)
}
