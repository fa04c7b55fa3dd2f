//! Group parsing utilities
//!
//! Pure functions recognising a single report group. Each returns `None`
//! when the group does not match, so the caller can leave the token for
//! the next grammar rule.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{
    self, HPA_PER_HUNDREDTH_INHG, METERS_PER_STATUTE_MILE, METRIC_VISIBILITY_DIGITS,
    MIN_ALTIMETER_GROUP_LEN,
};
use crate::models::WindData;

static WIND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{3}|VRB)(\d{2})(G(\d{2}))?KT$").expect("wind pattern is valid")
});

static WIND_VARIABILITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3}V\d{3}$").expect("wind variability pattern is valid"));

static STATUTE_MILES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)SM$").expect("statute mile pattern is valid"));

static TEMPERATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(M?\d+)?/(M?\d+)?$").expect("temperature pattern is valid")
});

/// Temperature group decoded into its two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureGroup {
    pub temperature: Option<i32>,
    pub dew_point: Option<i32>,
}

/// Decode a `dddffGggKT` / `VRBffKT` wind group
pub fn parse_wind(token: &str) -> Option<WindData> {
    let caps = WIND.captures(token)?;

    let (direction, variable) = match &caps[1] {
        "VRB" => (None, true),
        degrees => (degrees.parse().ok(), false),
    };

    Some(WindData {
        direction,
        variable,
        speed: caps[2].parse().ok(),
        gust: caps.get(4).and_then(|gust| gust.as_str().parse().ok()),
        variability: None,
    })
}

/// Check for a `dddVddd` direction variability group
pub fn is_wind_variability(token: &str) -> bool {
    WIND_VARIABILITY.is_match(token)
}

/// Decode a visibility group into metres.
///
/// Sky condition groups are never visibility. `<n>SM` is converted from
/// statute miles; otherwise the first four characters must be digits and
/// are read as metres, ignoring any suffix.
pub fn parse_visibility(token: &str) -> Option<i32> {
    if constants::is_sky_condition(token) {
        return None;
    }

    if let Some(caps) = STATUTE_MILES.captures(token) {
        let miles: i32 = caps[1].parse().ok()?;
        return miles.checked_mul(METERS_PER_STATUTE_MILE);
    }

    let digits = token.get(..METRIC_VISIBILITY_DIGITS)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Decode a `TT/DD` temperature group, `M` marking negative values.
///
/// Each side is optional; the group is rejected only when neither side
/// yields a number.
pub fn parse_temperature(token: &str) -> Option<TemperatureGroup> {
    let caps = TEMPERATURE.captures(token)?;

    let group = TemperatureGroup {
        temperature: caps.get(1).and_then(|side| parse_signed(side.as_str())),
        dew_point: caps.get(2).and_then(|side| parse_signed(side.as_str())),
    };

    if group.temperature.is_none() && group.dew_point.is_none() {
        None
    } else {
        Some(group)
    }
}

/// Decode a `Qpppp` (hPa) or `Aiiii` (hundredths of inHg) altimeter group into hPa
pub fn parse_altimeter(token: &str) -> Option<i32> {
    if token.len() < MIN_ALTIMETER_GROUP_LEN {
        return None;
    }

    let value = token.get(1..)?;
    match token.as_bytes()[0] {
        b'Q' => value.parse().ok(),
        b'A' => {
            let hundredths: i32 = value.parse().ok()?;
            Some((f64::from(hundredths) * HPA_PER_HUNDREDTH_INHG).round() as i32)
        }
        _ => None,
    }
}

/// Check if a token starts with one of the given report type words
pub fn is_report_type(token: &str, types: &[&str]) -> bool {
    types.iter().any(|report_type| token.starts_with(report_type))
}

fn parse_signed(value: &str) -> Option<i32> {
    value.replace('M', "-").parse().ok()
}
