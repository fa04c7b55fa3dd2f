//! Day/time group resolution
//!
//! Report timestamps only carry day-of-month, hour and minute. Year and
//! month come from the caller's reference time: a day later than the
//! reference day is taken to belong to the previous calendar month.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

static ISSUE_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})(\d{2})(\d{2})Z$").expect("issue time pattern is valid"));

static VALIDITY_PERIOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{2})(\d{2})/(\d{2})(\d{2})$").expect("validity period pattern is valid")
});

/// Hour value TAF validity groups use for "end of day"
const END_OF_DAY_HOUR: u32 = 24;

/// Resolve a day/hour/minute against the reference time.
///
/// `day_offset` is added after the month has been chosen. Returns `None`
/// when the day does not exist in the resolved month or the time is out
/// of range.
pub fn resolve_day_time(
    reference: DateTime<Utc>,
    day: u32,
    hour: u32,
    minute: u32,
    day_offset: u64,
) -> Option<DateTime<Utc>> {
    let (year, month) = if day > reference.day() {
        previous_month(reference.year(), reference.month())
    } else {
        (reference.year(), reference.month())
    };

    let date = NaiveDate::from_ymd_opt(year, month, day)?.checked_add_days(Days::new(day_offset))?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;

    Some(date.and_time(time).and_utc())
}

/// Decode a `DDHHMMZ` issue time group
pub fn parse_issue_time(token: &str, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let caps = ISSUE_TIME.captures(token)?;
    let day = caps[1].parse().ok()?;
    let hour = caps[2].parse().ok()?;
    let minute = caps[3].parse().ok()?;

    resolve_day_time(reference, day, hour, minute, 0)
}

/// Decode a `DDHH/DDHH` validity period into its start and end.
///
/// Returns `None` only when the token is not a validity group; a side that
/// cannot be resolved is left absent.
pub fn parse_validity_period(
    token: &str,
    reference: DateTime<Utc>,
) -> Option<(Option<DateTime<Utc>>, Option<DateTime<Utc>>)> {
    let caps = VALIDITY_PERIOD.captures(token)?;

    let from = resolve_validity_side(&caps[1], &caps[2], reference);
    let to = resolve_validity_side(&caps[3], &caps[4], reference);

    Some((from, to))
}

fn resolve_validity_side(day: &str, hour: &str, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let day: u32 = day.parse().ok()?;
    let hour: u32 = hour.parse().ok()?;

    if hour == END_OF_DAY_HOUR {
        resolve_day_time(reference, day, 0, 0, 1)
    } else {
        resolve_day_time(reference, day, hour, 0, 0)
    }
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}
