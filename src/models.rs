//! Core data structures for decoded reports.
//!
//! Defines the shared observation fields, the METAR and TAF variants,
//! wind data, report kinds and the derived flight condition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DecodeError;

/// Flight rule category derived from ceiling and visibility
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightCondition {
    /// Not enough information to classify
    #[default]
    NA,
    /// Visual flight rules
    VFR,
    /// Marginal visual flight rules
    MVFR,
    /// Instrument flight rules
    IFR,
}

impl FlightCondition {
    pub const ALL: [FlightCondition; 4] = [
        FlightCondition::NA,
        FlightCondition::VFR,
        FlightCondition::MVFR,
        FlightCondition::IFR,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FlightCondition::NA => "NA",
            FlightCondition::VFR => "VFR",
            FlightCondition::MVFR => "MVFR",
            FlightCondition::IFR => "IFR",
        }
    }
}

impl fmt::Display for FlightCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report families understood by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Metar,
    Taf,
}

impl ReportKind {
    /// Detect the report family from its first group (`TAF` header word)
    pub fn detect(raw: &str) -> Self {
        match raw.split_whitespace().next() {
            Some(crate::constants::TAF_HEADER_WORD) => ReportKind::Taf,
            _ => ReportKind::Metar,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::Metar => f.write_str("METAR"),
            ReportKind::Taf => f.write_str("TAF"),
        }
    }
}

impl FromStr for ReportKind {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "metar" | "speci" => Ok(ReportKind::Metar),
            "taf" => Ok(ReportKind::Taf),
            _ => Err(DecodeError::UnknownReportKind {
                kind: s.to_string(),
            }),
        }
    }
}

/// Surface wind group
///
/// Every field is independently optional; `None` means not reported.
/// A `VRB` direction decodes to `direction: None` with `variable` set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindData {
    /// Mean direction in degrees true
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<u16>,

    /// Direction reported as `VRB`
    pub variable: bool,

    /// Mean speed in knots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<u16>,

    /// Gust speed in knots
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gust: Option<u16>,

    /// Raw direction variability group (`dddVddd`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variability: Option<String>,
}

impl WindData {
    /// Re-serialise the wind group (`dddffGggKT` / `VRBffKT`), if a speed was decoded
    pub fn to_group(&self) -> Option<String> {
        let speed = self.speed?;
        let direction = match (self.direction, self.variable) {
            (Some(degrees), _) => format!("{:03}", degrees),
            (None, true) => "VRB".to_string(),
            (None, false) => return None,
        };
        let gust = self
            .gust
            .map(|gust| format!("G{:02}", gust))
            .unwrap_or_default();

        Some(format!("{}{:02}{}KT", direction, speed, gust))
    }

    /// Check if no part of the wind group was reported
    pub fn is_empty(&self) -> bool {
        self.direction.is_none()
            && !self.variable
            && self.speed.is_none()
            && self.gust.is_none()
            && self.variability.is_none()
    }
}

/// Fields shared by every decoded report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// ICAO station identifier
    pub identifier: String,

    /// Recognised report type tokens, space-joined (empty when none)
    pub report_type: String,

    /// Report issue time resolved against the reference time
    pub datetime: Option<DateTime<Utc>>,

    pub wind: WindData,

    /// Prevailing visibility in metres
    pub visibility: Option<i32>,

    /// Raw group the visibility was decoded from
    pub visibility_group: Option<String>,

    /// Present weather groups preceding the sky condition run
    pub weather: String,

    /// Sky condition groups
    pub clouds: String,

    /// Lowest of all cloud height signals in feet
    pub cloud_height: Option<i32>,

    /// Trailing groups after the last recognised element
    pub supplements: String,

    pub condition: FlightCondition,

    /// Report text as decoded
    pub raw: String,
}

impl Observation {
    /// Raw wind direction variability group
    pub fn wind_variability(&self) -> Option<&str> {
        self.wind.variability.as_deref()
    }

    /// Cloud ceiling in feet (broken/overcast layers or vertical visibility)
    pub fn ceiling(&self) -> i32 {
        crate::classifier::ceiling(self)
    }
}

/// Routine or special aerodrome weather report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metar {
    #[serde(flatten)]
    pub observation: Observation,

    /// QNH in hectopascals
    pub altimeter: Option<i32>,

    /// Air temperature in degrees Celsius
    pub temperature: Option<i32>,

    /// Dew point in degrees Celsius
    pub dew_point: Option<i32>,

    /// Raw temperature/dew point group
    pub temperature_group: Option<String>,
}

/// Terminal aerodrome forecast
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Taf {
    #[serde(flatten)]
    pub observation: Observation,

    /// Start of the validity window
    pub from: Option<DateTime<Utc>>,

    /// End of the validity window
    pub to: Option<DateTime<Utc>>,
}

/// A decoded report of either family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Report {
    Metar(Metar),
    Taf(Taf),
}

impl Report {
    pub fn kind(&self) -> ReportKind {
        match self {
            Report::Metar(_) => ReportKind::Metar,
            Report::Taf(_) => ReportKind::Taf,
        }
    }

    /// Shared observation fields
    pub fn observation(&self) -> &Observation {
        match self {
            Report::Metar(metar) => &metar.observation,
            Report::Taf(taf) => &taf.observation,
        }
    }

    pub fn condition(&self) -> FlightCondition {
        self.observation().condition
    }
}

impl From<Metar> for Report {
    fn from(metar: Metar) -> Self {
        Report::Metar(metar)
    }
}

impl From<Taf> for Report {
    fn from(taf: Taf) -> Self {
        Report::Taf(taf)
    }
}
