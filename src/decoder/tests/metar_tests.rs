//! Tests for METAR decoding

use super::*;
use crate::decoder::ReportDecoder;
use crate::error::DecodeError;
use crate::models::{FlightCondition, Metar};

fn decode(raw: &str) -> Metar {
    Metar::decode(raw, reference_time()).unwrap()
}

#[test]
fn test_automatic_station_report() {
    let metar = decode(ILZU_AUTO);
    let obs = &metar.observation;

    assert_eq!(obs.identifier, "ILZU");
    assert_eq!(obs.report_type, "AUTO");
    assert_eq!(obs.datetime, Some(utc(2024, 3, 1, 20, 20)));
    assert_eq!(obs.wind.direction, Some(310));
    assert_eq!(obs.wind.speed, Some(9));
    assert_eq!(obs.wind.gust, None);
    assert_eq!(obs.visibility, Some(9999));
    assert_eq!(obs.visibility_group.as_deref(), Some("9999"));
    assert_eq!(obs.weather, "");
    assert_eq!(obs.clouds, "FEW036");
    assert_eq!(metar.temperature, Some(3));
    assert_eq!(metar.dew_point, Some(2));
    assert_eq!(metar.temperature_group.as_deref(), Some("03/02"));
    assert_eq!(metar.altimeter, Some(1012));
    assert_eq!(obs.supplements, "RMK QFE1011 NOCBANALYSIS=");
    assert_eq!(obs.cloud_height, Some(3600));
    assert_eq!(obs.condition, FlightCondition::VFR);
}

#[test]
fn test_cavok_backfills_visibility() {
    let metar = decode(EGKB_CAVOK);
    let obs = &metar.observation;

    assert_eq!(obs.wind.direction, Some(0));
    assert_eq!(obs.wind.speed, Some(0));
    assert_eq!(obs.clouds, "CAVOK");
    assert_eq!(obs.visibility, Some(10000));
    assert_eq!(obs.visibility_group.as_deref(), Some("CAVOK"));
    assert_eq!(obs.cloud_height, Some(5000));
    assert_eq!(obs.condition, FlightCondition::VFR);
    assert_eq!(metar.temperature, Some(6));
    assert_eq!(metar.dew_point, Some(4));
    assert_eq!(metar.altimeter, Some(1011));
}

#[test]
fn test_cavok_does_not_override_reported_visibility() {
    let metar = decode("EGKB 111020Z 00000KT 6000 NSC 06/04 Q1011");
    let obs = &metar.observation;

    assert_eq!(obs.visibility, Some(6000));
    assert_eq!(obs.visibility_group.as_deref(), Some("6000"));
    assert_eq!(obs.condition, FlightCondition::MVFR);
}

#[test]
fn test_fog_with_surface_layer() {
    let metar = decode(ILZU_FOG);
    let obs = &metar.observation;

    assert_eq!(obs.visibility, None);
    assert_eq!(obs.visibility_group, None);
    assert_eq!(obs.weather, "FG");
    assert_eq!(obs.clouds, "BKN000");
    assert_eq!(obs.cloud_height, Some(0));
    assert_eq!(obs.condition, FlightCondition::IFR);
    assert_eq!(metar.temperature, None);
    assert_eq!(metar.altimeter, None);
}

#[test]
fn test_statute_miles_and_inhg_altimeter() {
    let metar = decode(KNYL_US);
    let obs = &metar.observation;

    assert_eq!(obs.visibility, Some(16090));
    assert_eq!(obs.cloud_height, Some(10000));
    assert_eq!(obs.ceiling(), 5000);
    assert_eq!(metar.altimeter, Some(1013));
    assert_eq!(metar.temperature, Some(12));
    assert_eq!(metar.dew_point, Some(3));
    assert_eq!(obs.supplements, "RMK AO2 SLP128");
    assert_eq!(obs.condition, FlightCondition::VFR);
}

#[test]
fn test_negative_temperatures_and_ceiling() {
    let metar = decode("EFHK 151220Z 18004KT 9999 SCT015 BKN025 M05/M08 Q1025");
    let obs = &metar.observation;

    assert_eq!(metar.temperature, Some(-5));
    assert_eq!(metar.dew_point, Some(-8));
    assert_eq!(metar.temperature_group.as_deref(), Some("M05/M08"));
    assert_eq!(obs.clouds, "SCT015 BKN025");
    assert_eq!(obs.cloud_height, Some(1500));
    assert_eq!(obs.ceiling(), 2500);
    assert_eq!(obs.condition, FlightCondition::MVFR);
}

#[test]
fn test_gusts_and_direction_variability() {
    let metar = decode("KJFK 151251Z 24018G30KT 200V270 10SM BKN050 OVC250 18/09 A3001");
    let obs = &metar.observation;

    assert_eq!(obs.wind.direction, Some(240));
    assert_eq!(obs.wind.speed, Some(18));
    assert_eq!(obs.wind.gust, Some(30));
    assert_eq!(obs.wind_variability(), Some("200V270"));
    assert_eq!(obs.visibility, Some(16090));
    assert_eq!(obs.clouds, "BKN050 OVC250");
    assert_eq!(obs.ceiling(), 5000);
    assert_eq!(metar.altimeter, Some(1016));
    assert_eq!(obs.condition, FlightCondition::VFR);
}

#[test]
fn test_variable_wind_and_vertical_visibility() {
    let metar = decode("LFPG 150900Z VRB03KT 0800 FG VV002 M01/M01 Q1030");
    let obs = &metar.observation;

    assert_eq!(obs.wind.direction, None);
    assert!(obs.wind.variable);
    assert_eq!(obs.wind.speed, Some(3));
    assert_eq!(obs.visibility, Some(800));
    assert_eq!(obs.weather, "FG");
    assert_eq!(obs.clouds, "VV002");
    assert_eq!(obs.cloud_height, Some(100));
    assert_eq!(obs.ceiling(), 200);
    assert_eq!(obs.condition, FlightCondition::IFR);
    assert_eq!(metar.temperature, Some(-1));
}

#[test]
fn test_unknown_vertical_visibility() {
    let metar = decode("KXYZ 151000Z 00000KT 0100 FG VV/// 05/05 Q1010");
    let obs = &metar.observation;

    assert_eq!(obs.clouds, "VV///");
    assert_eq!(obs.cloud_height, Some(100));
    assert_eq!(obs.ceiling(), 100);
    assert_eq!(obs.condition, FlightCondition::IFR);
}

#[test]
fn test_header_word_and_report_type() {
    let metar = decode("METAR EGLL 150950Z 27015KT 9999 -RA SCT020 BKN035 12/08 Q1008");
    let obs = &metar.observation;

    assert_eq!(obs.report_type, "METAR");
    assert_eq!(obs.identifier, "EGLL");
    assert_eq!(obs.datetime, Some(utc(2024, 3, 15, 9, 50)));
    assert_eq!(obs.weather, "-RA");
    assert_eq!(obs.clouds, "SCT020 BKN035");
    assert_eq!(obs.cloud_height, Some(2000));
    assert_eq!(obs.condition, FlightCondition::VFR);

    let special = decode("SPECI KXYZ 151000Z AUTO 00000KT 2SM BR OVC004 10/10 A2990");
    let obs = &special.observation;
    assert_eq!(obs.report_type, "SPECI AUTO");
    assert_eq!(obs.visibility, Some(3218));
    assert_eq!(obs.weather, "BR");
    assert_eq!(obs.cloud_height, Some(100));
    assert_eq!(obs.ceiling(), 400);
    assert_eq!(obs.condition, FlightCondition::IFR);
}

#[test]
fn test_no_report_type_is_empty_string() {
    let metar = decode(EGKB_CAVOK);
    assert_eq!(metar.observation.report_type, "");
}

#[test]
fn test_month_rollover() {
    let now = utc(2024, 3, 5, 6, 0);
    let metar = Metar::decode("EGKB 281020Z 00000KT CAVOK 06/04 Q1011", now).unwrap();
    assert_eq!(metar.observation.datetime, Some(utc(2024, 2, 28, 10, 20)));
}

#[test]
fn test_report_without_sky_condition_swallows_trailing_groups() {
    // Weather runs until the first sky condition group, so without one the
    // temperature and altimeter end up in the weather field
    let metar = decode("EDDF 151020Z 22010KT 9999 15/10 Q1013");
    let obs = &metar.observation;

    assert_eq!(obs.weather, "15/10 Q1013");
    assert_eq!(obs.clouds, "");
    assert_eq!(metar.temperature, None);
    assert_eq!(metar.altimeter, None);
    assert_eq!(obs.supplements, "");
    assert_eq!(obs.cloud_height, None);
    assert_eq!(obs.condition, FlightCondition::VFR);
}

#[test]
fn test_weather_after_clouds_is_not_resplit() {
    let metar = decode("EGLL 151020Z 27010KT 9999 FEW020 -RA 12/08 Q1008");
    let obs = &metar.observation;

    assert_eq!(obs.weather, "");
    assert_eq!(obs.clouds, "FEW020");
    assert_eq!(metar.temperature, None);
    assert_eq!(metar.altimeter, None);
    assert_eq!(obs.supplements, "-RA 12/08 Q1008");
}

#[test]
fn test_malformed_groups_degrade_to_absent_fields() {
    let metar = decode("EGKB XXXXXX 00000KT CAVOK 06/04 Q1011");
    let obs = &metar.observation;

    assert_eq!(obs.identifier, "EGKB");
    assert_eq!(obs.datetime, None);
    assert!(obs.wind.is_empty());
    assert_eq!(obs.weather, "XXXXXX 00000KT");
    assert_eq!(obs.clouds, "CAVOK");
    assert_eq!(obs.visibility, Some(10000));
    assert_eq!(metar.temperature, Some(6));
    assert_eq!(metar.altimeter, Some(1011));
}

#[test]
fn test_identifier_only() {
    let metar = decode("EGKB");
    let obs = &metar.observation;

    assert_eq!(obs.identifier, "EGKB");
    assert_eq!(obs.datetime, None);
    assert_eq!(obs.visibility, None);
    assert_eq!(obs.cloud_height, None);
    assert_eq!(obs.condition, FlightCondition::NA);
}

#[test]
fn test_empty_report_is_rejected() {
    assert!(matches!(
        Metar::decode("", reference_time()),
        Err(DecodeError::EmptyReport)
    ));
    assert!(matches!(
        Metar::decode("   ", reference_time()),
        Err(DecodeError::EmptyReport)
    ));
    // A header word alone still has no station
    assert!(matches!(
        Metar::decode("METAR", reference_time()),
        Err(DecodeError::EmptyReport)
    ));
}

#[test]
fn test_reparse_overwrites_every_field() {
    let mut metar = decode(ILZU_AUTO);
    metar.parse(ILZU_FOG, reference_time()).unwrap();

    assert_eq!(metar, decode(ILZU_FOG));
    assert_eq!(metar.altimeter, None);
    assert_eq!(metar.observation.visibility, None);
    assert_eq!(metar.observation.supplements, "");
}

#[test]
fn test_decode_is_deterministic() {
    assert_eq!(decode(KNYL_US), decode(KNYL_US));
}
