//! Shared METAR/TAF grammar
//!
//! Both report families share the leading groups (header word, station,
//! issue time, report type) and the wind/visibility/weather/cloud body.
//! [`ObservationBuilder`] consumes those groups in order from a
//! [`Tokenizer`]; the family decoders interleave their own groups and
//! then call [`ObservationBuilder::finish`].

use chrono::{DateTime, Utc};
use tracing::trace;

use super::{groups, timestamp};
use crate::classifier;
use crate::constants::{self, CAVOK_VISIBILITY_M, METAR_HEADER_WORDS, TAF_HEADER_WORD, TAF_REPORT_TYPES};
use crate::error::{DecodeError, Result};
use crate::models::{Observation, ReportKind};
use crate::tokenizer::Tokenizer;

/// Builder that fills an [`Observation`] from a token stream
#[derive(Debug)]
pub struct ObservationBuilder {
    tokens: Tokenizer,
    observation: Observation,
    report_types: Vec<String>,
    reference: DateTime<Utc>,
}

impl ObservationBuilder {
    /// Start decoding `raw`, resolving dates against `reference`
    pub fn new(raw: &str, reference: DateTime<Utc>) -> Self {
        Self {
            tokens: Tokenizer::new(raw),
            observation: Observation {
                raw: raw.trim().to_string(),
                ..Default::default()
            },
            report_types: Vec::new(),
            reference,
        }
    }

    pub fn tokens_mut(&mut self) -> &mut Tokenizer {
        &mut self.tokens
    }

    /// Consume the header word in front of the station identifier
    /// (`METAR`/`SPECI`, or `TAF` with optional `AMD`/`COR`)
    pub fn header(&mut self, kind: ReportKind) -> &mut Self {
        match kind {
            ReportKind::Metar => {
                if self
                    .tokens
                    .peek()
                    .is_some_and(|token| METAR_HEADER_WORDS.contains(&token))
                {
                    self.take_report_type();
                }
            }
            ReportKind::Taf => {
                if self.tokens.peek() == Some(TAF_HEADER_WORD) {
                    self.take_report_type();
                    while self
                        .tokens
                        .peek()
                        .is_some_and(|token| groups::is_report_type(token, TAF_REPORT_TYPES))
                    {
                        self.take_report_type();
                    }
                }
            }
        }
        self
    }

    /// Take the station identifier unconditionally
    pub fn identifier(&mut self) -> Result<&mut Self> {
        self.observation.identifier = self.tokens.pop().ok_or(DecodeError::EmptyReport)?;
        Ok(self)
    }

    /// Decode the `DDHHMMZ` issue time if present
    pub fn issue_time(&mut self) -> &mut Self {
        let reference = self.reference;
        if let Some(datetime) = self.take_if(|token| timestamp::parse_issue_time(token, reference)) {
            self.observation.datetime = Some(datetime);
        }
        self
    }

    /// Consume one report type token matching `types`
    pub fn report_type(&mut self, types: &[&str]) -> &mut Self {
        if self
            .tokens
            .peek()
            .is_some_and(|token| groups::is_report_type(token, types))
        {
            self.take_report_type();
        }
        self
    }

    /// Decode the wind group and its direction variability group
    pub fn wind(&mut self) -> &mut Self {
        if let Some(wind) = self.take_if(groups::parse_wind) {
            self.observation.wind = wind;
        }
        if self.tokens.peek().is_some_and(groups::is_wind_variability) {
            self.observation.wind.variability = self.tokens.pop();
        }
        self
    }

    /// Decode the prevailing visibility group
    pub fn visibility(&mut self) -> &mut Self {
        let Some(token) = self.tokens.peek() else {
            return self;
        };

        match groups::parse_visibility(token) {
            Some(meters) => {
                self.observation.visibility = Some(meters);
                self.observation.visibility_group = self.tokens.pop();
            }
            None => trace!("No visibility group at '{}'", token),
        }
        self
    }

    /// Split the present weather groups from the sky condition run that follows them
    pub fn weather_and_clouds(&mut self) -> &mut Self {
        self.observation.weather = self.tokens.consume_until(constants::is_sky_condition).join(" ");
        self.observation.clouds = self.tokens.consume_while(constants::is_sky_condition).join(" ");
        self
    }

    /// Collect every remaining group as supplementary information
    pub fn supplements(&mut self) -> &mut Self {
        self.observation.supplements = self.tokens.remaining().join(" ");
        self
    }

    /// Assume 10 km visibility when CAVOK (or equivalent) replaced the visibility group.
    ///
    /// Returns true when the visibility was filled in.
    pub fn backfill_cavok_visibility(&mut self) -> bool {
        let has_cavok = self
            .observation
            .clouds
            .split_whitespace()
            .any(constants::is_cavok);

        if self.observation.visibility.is_none() && has_cavok {
            self.observation.visibility = Some(CAVOK_VISIBILITY_M);
            true
        } else {
            false
        }
    }

    pub fn observation_mut(&mut self) -> &mut Observation {
        &mut self.observation
    }

    /// Attach the derived fields and return the completed observation
    pub fn finish(mut self) -> Observation {
        self.observation.report_type = self.report_types.join(" ");

        let classification = classifier::classify(&self.observation);
        self.observation.cloud_height = classification.cloud_height;
        self.observation.condition = classification.condition;

        self.observation
    }

    /// Pop the next token when `parse` accepts it
    fn take_if<T, F>(&mut self, parse: F) -> Option<T>
    where
        F: FnOnce(&str) -> Option<T>,
    {
        let value = parse(self.tokens.peek()?)?;
        self.tokens.skip();
        Some(value)
    }

    fn take_report_type(&mut self) {
        if let Some(token) = self.tokens.pop() {
            self.report_types.push(token);
        }
    }
}
