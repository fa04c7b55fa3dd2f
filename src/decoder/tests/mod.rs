//! Test fixtures for report decoder testing
//!
//! Shared reference times and raw reports used across the decoder test
//! modules.

use chrono::{DateTime, TimeZone, Utc};

mod metar_tests;

/// Reference time used by most fixtures: 2024-03-20 12:00Z
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
}

/// Build an exact UTC timestamp
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

/// Automatic station report with remarks
pub const ILZU_AUTO: &str =
    "ILZU 012020Z AUTO 31009KT 9999 FEW036 03/02 Q1012 RMK QFE1011 NOCBANALYSIS=";

/// CAVOK report with no visibility group
pub const EGKB_CAVOK: &str = "EGKB 111020Z 00000KT CAVOK 06/04 Q1011";

/// Fog with a surface-based broken layer
pub const ILZU_FOG: &str = "ILZU 012120Z AUTO 31009KT FG BKN000";

/// US report with statute miles and an inHg altimeter
pub const KNYL_US: &str = "KNYL 101155Z 35007KT 10SM FEW100 12/03 A2993 RMK AO2 SLP128";

/// TAF with CAVOK and a TEMPO change group
pub const EFHK_TAF: &str = "TAF EFHK 121430Z 1215/1315 24008KT CAVOK TEMPO 1215/1218 4000 SHRA BKN012";
