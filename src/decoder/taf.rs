//! TAF decoding
//!
//! Only the initial forecast period is decoded into fields. Change groups
//! (`BECMG`, `TEMPO`, `FM`, `PROB`) end the sky condition run and are kept
//! verbatim in the supplements.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::ReportDecoder;
use super::grammar::ObservationBuilder;
use super::timestamp;
use crate::constants::TAF_REPORT_TYPES;
use crate::error::Result;
use crate::models::{Observation, ReportKind, Taf};

impl ReportDecoder for Taf {
    const KIND: ReportKind = ReportKind::Taf;

    fn decode(raw: &str, reference: DateTime<Utc>) -> Result<Self> {
        let mut builder = ObservationBuilder::new(raw, reference);

        builder
            .header(ReportKind::Taf)
            .identifier()?
            .issue_time()
            .report_type(TAF_REPORT_TYPES);

        let mut taf = Taf::default();
        let validity = builder
            .tokens_mut()
            .peek()
            .and_then(|token| timestamp::parse_validity_period(token, reference));
        if let Some((from, to)) = validity {
            taf.from = from;
            taf.to = to;
            builder.tokens_mut().skip();
        }

        builder
            .wind()
            .visibility()
            .weather_and_clouds()
            .supplements()
            .backfill_cavok_visibility();

        taf.observation = builder.finish();

        debug!(
            "Decoded TAF for {}: valid {:?} to {:?}, condition={}",
            taf.observation.identifier, taf.from, taf.to, taf.observation.condition
        );

        Ok(taf)
    }

    fn observation(&self) -> &Observation {
        &self.observation
    }
}
