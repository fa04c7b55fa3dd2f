//! METAR/SPECI decoding
//!
//! Extends the shared grammar with the temperature/dew point group and the
//! altimeter setting, both between the sky condition run and the remarks.

use chrono::{DateTime, Utc};
use tracing::debug;

use super::ReportDecoder;
use super::grammar::ObservationBuilder;
use super::groups;
use crate::constants::{CAVOK_VISIBILITY_GROUP, METAR_REPORT_TYPES};
use crate::error::Result;
use crate::models::{Metar, Observation, ReportKind};
use crate::tokenizer::Tokenizer;

impl ReportDecoder for Metar {
    const KIND: ReportKind = ReportKind::Metar;

    fn decode(raw: &str, reference: DateTime<Utc>) -> Result<Self> {
        let mut builder = ObservationBuilder::new(raw, reference);

        builder
            .header(ReportKind::Metar)
            .identifier()?
            .issue_time()
            .report_type(METAR_REPORT_TYPES)
            .wind()
            .visibility()
            .weather_and_clouds();

        let mut metar = Metar::default();
        decode_temperature(builder.tokens_mut(), &mut metar);
        metar.altimeter = decode_altimeter(builder.tokens_mut());

        builder.supplements();
        if builder.backfill_cavok_visibility() {
            builder.observation_mut().visibility_group = Some(CAVOK_VISIBILITY_GROUP.to_string());
        }

        metar.observation = builder.finish();
        log_decoded(&metar);

        Ok(metar)
    }

    fn observation(&self) -> &Observation {
        &self.observation
    }
}

fn decode_temperature(tokens: &mut Tokenizer, metar: &mut Metar) {
    let Some(group) = tokens.peek().and_then(groups::parse_temperature) else {
        return;
    };

    metar.temperature = group.temperature;
    metar.dew_point = group.dew_point;
    metar.temperature_group = tokens.pop();
}

fn decode_altimeter(tokens: &mut Tokenizer) -> Option<i32> {
    let altimeter = tokens.peek().and_then(groups::parse_altimeter)?;
    tokens.skip();
    Some(altimeter)
}

fn log_decoded(metar: &Metar) {
    let observation = &metar.observation;
    debug!(
        "Decoded METAR for {}: condition={}, visibility={:?}, cloud_height={:?}, temperature={:?}, altimeter={:?}",
        observation.identifier,
        observation.condition,
        observation.visibility,
        observation.cloud_height,
        metar.temperature,
        metar.altimeter
    );
}
