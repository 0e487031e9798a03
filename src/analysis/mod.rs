/// Aggregation for the weather archive service.
///
/// These modules turn the flat reading list into the query-side aggregates.
/// All of them work from readings already in memory; none of them touch the
/// filesystem.
///
/// Submodules:
/// - `extremes` — per-year running max/min values.
/// - `averages` — per-(year, month) arithmetic means.
/// - `highlights` — the standout days of a year.

pub mod averages;
pub mod extremes;
pub mod highlights;

use crate::model::MonthKey;

// ---------------------------------------------------------------------------
// Date component extraction
// ---------------------------------------------------------------------------
//
// Dates are stored verbatim, so the archive's "2004-8-1" and a padded
// "2004-08-01" must land in the same buckets. Components are parsed as
// integers, which normalizes the padding; a component that does not parse
// excludes the reading from whatever aggregate needed it.

/// Extracts the calendar year: the integer before the first '-'.
pub fn year_of(date: &str) -> Option<i32> {
    date.split('-').next()?.trim().parse().ok()
}

/// Extracts the (year, month) key, with the month normalized to 1..=12.
pub fn month_key_of(date: &str) -> Option<MonthKey> {
    let mut parts = date.split('-');
    let year: i32 = parts.next()?.trim().parse().ok()?;
    let month: u8 = parts.next()?.trim().parse().ok()?;
    if (1..=12).contains(&month) {
        Some(MonthKey { year, month })
    } else {
        None
    }
}

/// Extracts the day of month, for daily chart series.
pub fn day_of(date: &str) -> Option<u8> {
    let mut parts = date.split('-');
    parts.next()?;
    parts.next()?;
    let day: u8 = parts.next()?.trim().parse().ok()?;
    if (1..=31).contains(&day) { Some(day) } else { None }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
