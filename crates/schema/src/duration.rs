//! # Default Expiry
//!
//! Issued artifacts that do not specify a lifetime default to one calendar
//! year. The year is a civil year, not 365 days, so the duration depends on
//! the starting instant.

use chrono::{DateTime, Datelike, TimeDelta, Utc};

/// The same month, day, and time of day one year after `now`.
///
/// February 29 has no counterpart in a common year and rolls over to
/// March 1.
///
/// Returns `None` only when the following year cannot be represented.
#[must_use]
pub fn add_one_year(now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let year = now.year().checked_add(1)?;
    now.with_year(year).or_else(|| {
        // only Feb 29 fails here, so move to the first of the next month
        now.with_day(1)?.with_month(3)?.with_year(year)
    })
}

/// Whole seconds between `now` and the same instant one calendar year later.
///
/// Sub-second precision is floored, never rounded. Callers supply `now`;
/// the clock is never read here.
#[must_use]
pub fn one_year_duration(now: DateTime<Utc>) -> i64 {
    add_one_year(now).map_or(0, |expiry| whole_seconds(expiry - now))
}

// floor, not truncation toward zero
fn whole_seconds(delta: TimeDelta) -> i64 {
    delta.num_milliseconds().div_euclid(1000)
}
