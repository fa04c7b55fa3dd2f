//! Report decoder for METAR and TAF text
//!
//! Decoding walks the report groups strictly left to right. Every element
//! of the grammar is optional: a group that does not match its rule is left
//! for the next rule, so a malformed report yields a partially populated
//! value instead of an error. The only failure is an empty report, which
//! has no station identifier.
//!
//! ## Architecture
//!
//! - [`grammar`] - shared leading groups and weather/cloud body
//! - [`groups`] - single-group recognisers (wind, visibility, temperature, altimeter)
//! - [`timestamp`] - day/time resolution against a reference time
//! - [`metar`] / [`taf`] - family-specific extensions
//!
//! ## Usage
//!
//! ```rust
//! use avwx_decoder::decoder::ReportDecoder;
//! use avwx_decoder::{FlightCondition, Metar};
//! use chrono::{TimeZone, Utc};
//!
//! # fn example() -> avwx_decoder::Result<()> {
//! let now = Utc.with_ymd_and_hms(2024, 3, 11, 12, 0, 0).unwrap();
//! let metar = Metar::decode("EGKB 111020Z 00000KT CAVOK 06/04 Q1011", now)?;
//!
//! assert_eq!(metar.observation.visibility, Some(10000));
//! assert_eq!(metar.observation.condition, FlightCondition::VFR);
//! # Ok(())
//! # }
//! ```

pub mod grammar;
pub mod groups;
pub mod metar;
pub mod taf;
pub mod timestamp;

#[cfg(test)]
pub mod tests;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::{Metar, Observation, Report, ReportKind, Taf};

/// A report family that can be decoded from raw text
pub trait ReportDecoder: Sized {
    const KIND: ReportKind;

    /// Decode `raw`, resolving day/time groups against `reference`.
    ///
    /// Fails only with [`DecodeError::EmptyReport`](crate::DecodeError::EmptyReport).
    fn decode(raw: &str, reference: DateTime<Utc>) -> Result<Self>;

    /// Shared observation fields
    fn observation(&self) -> &Observation;

    /// Re-decode in place, overwriting every field
    fn parse(&mut self, raw: &str, reference: DateTime<Utc>) -> Result<()> {
        *self = Self::decode(raw, reference)?;
        Ok(())
    }
}

impl Report {
    /// Decode a report, detecting its family from the header word
    pub fn decode(raw: &str, reference: DateTime<Utc>) -> Result<Self> {
        Self::decode_as(ReportKind::detect(raw), raw, reference)
    }

    /// Decode a report as the given family
    pub fn decode_as(kind: ReportKind, raw: &str, reference: DateTime<Utc>) -> Result<Self> {
        match kind {
            ReportKind::Metar => Metar::decode(raw, reference).map(Report::Metar),
            ReportKind::Taf => Taf::decode(raw, reference).map(Report::Taf),
        }
    }
}
