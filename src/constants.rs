//! Report vocabularies and classification thresholds
//!
//! This module contains the closed token vocabularies recognised by the
//! decoder and the fixed heights, distances and limits used by the
//! condition classifier.

// =============================================================================
// Report Header and Type Tokens
// =============================================================================

/// Header words that may precede the station identifier of a METAR
pub const METAR_HEADER_WORDS: &[&str] = &["METAR", "SPECI"];

/// Header word that precedes the station identifier of a TAF
pub const TAF_HEADER_WORD: &str = "TAF";

/// Report type tokens recognised after the METAR timestamp (prefix match)
pub const METAR_REPORT_TYPES: &[&str] = &["METAR", "SPECI", "AUTO"];

/// Report type tokens recognised in TAF reports (prefix match)
pub const TAF_REPORT_TYPES: &[&str] = &["COR", "AMD"];

// =============================================================================
// Sky Condition Vocabulary
// =============================================================================

/// Cloud coverage codes followed by a three digit height in hundreds of feet
pub const CLOUD_COVERAGE_CODES: &[&str] = &["FEW", "SCT", "OVC", "BKN"];

/// Coverage codes describing more than half the sky covered
pub const CEILING_COVERAGE_CODES: &[&str] = &["OVC", "BKN"];

/// Tokens meaning no cloud or visibility restriction below the prescribed values
pub const CAVOK_CODES: &[&str] = &["CAVOK", "SKC", "NCD", "NSC", "CLR"];

/// Remaining sky condition prefixes (vertical visibility, nil report, missing data)
pub const OTHER_SKY_CODES: &[&str] = &["VV", "NIL", "/"];

// =============================================================================
// Weather Obscuration Codes
// =============================================================================

/// Dense obscurations (fog, mist)
pub const DENSE_OBSCURATION_CODES: &[&str] = &["FG", "BR"];

/// Light obscurations (dust, smoke, haze)
pub const LIGHT_OBSCURATION_CODES: &[&str] = &["DU", "FU", "HZ"];

// =============================================================================
// Units and Sentinels
// =============================================================================

/// Metres per statute mile used for `SM` visibility groups
pub const METERS_PER_STATUTE_MILE: i32 = 1609;

/// Hectopascals per hundredth of an inch of mercury
pub const HPA_PER_HUNDREDTH_INHG: f64 = 0.3386;

/// Visibility assumed when CAVOK (or equivalent) is reported without a visibility group
pub const CAVOK_VISIBILITY_M: i32 = 10_000;

/// Raw group recorded as the METAR visibility source after CAVOK backfill
pub const CAVOK_VISIBILITY_GROUP: &str = "CAVOK";

/// Shortest altimeter group accepted (`Q` or `A` plus three digits)
pub const MIN_ALTIMETER_GROUP_LEN: usize = 4;

/// Number of leading digits read from a metric visibility group
pub const METRIC_VISIBILITY_DIGITS: usize = 4;

// =============================================================================
// Condition Classification
// =============================================================================

/// Cloud height values and flight rule thresholds
pub mod thresholds {
    /// Cloud height implied by a CAVOK-family token (ft)
    pub const CAVOK_CLOUD_HEIGHT_FT: i32 = 5000;

    /// Ceiling used when no broken/overcast layer or vertical visibility is reported (ft)
    pub const DEFAULT_CEILING_FT: i32 = 5000;

    /// Vertical visibility reported as `VV///` (ft)
    pub const UNKNOWN_VERTICAL_VISIBILITY_FT: i32 = 100;

    /// Cloud height implied by fog or mist (ft)
    pub const DENSE_OBSCURATION_HEIGHT_FT: i32 = 100;

    /// Cloud height implied by dust, smoke or haze (ft)
    pub const LIGHT_OBSCURATION_HEIGHT_FT: i32 = 750;

    /// Feet per unit of a three digit cloud height group
    pub const CLOUD_HEIGHT_UNIT_FT: i32 = 100;

    /// Visibility used for comparisons when none was reported
    pub const UNKNOWN_VISIBILITY_M: i32 = -1;

    /// Ceiling at or above which conditions are no longer IFR (ft)
    pub const IFR_CEILING_FT: i32 = 1500;

    /// Ceiling at or above which conditions are no longer MVFR (ft)
    pub const MVFR_CEILING_FT: i32 = 3000;

    /// Visibility at or above which conditions are no longer IFR (m)
    pub const IFR_VISIBILITY_M: i32 = 5000;

    /// Visibility at or above which conditions are no longer MVFR (m)
    pub const MVFR_VISIBILITY_M: i32 = 8000;
}

// =============================================================================
// Configuration Defaults
// =============================================================================

/// Application name used for config directories
pub const APP_NAME: &str = "avwx";

/// Config file name searched for in the working and config directories
pub const CONFIG_FILE_NAME: &str = "avwx.toml";

/// Environment variable holding an explicit config file path
pub const CONFIG_ENV_VAR: &str = "AVWX_CONFIG";

/// Report lines decoded per blocking task in batch mode
pub const DECODE_CHUNK_SIZE: usize = 256;

/// Upper bound on concurrent decode tasks
pub const MAX_WORKERS: usize = 256;

/// Leading character of comment lines in report files
pub const COMMENT_PREFIX: char = '#';

/// Check if a token starts a sky condition group
pub fn is_sky_condition(token: &str) -> bool {
    CLOUD_COVERAGE_CODES
        .iter()
        .chain(CAVOK_CODES)
        .chain(OTHER_SKY_CODES)
        .any(|prefix| token.starts_with(prefix))
}

/// Check if a token belongs to the CAVOK family
pub fn is_cavok(token: &str) -> bool {
    CAVOK_CODES.iter().any(|prefix| token.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sky_condition_vocabulary() {
        for token in ["FEW036", "SCT100", "OVC005", "BKN000", "CAVOK", "NSC", "VV002", "NIL", "//////"] {
            assert!(is_sky_condition(token), "{} should be a sky condition", token);
        }
        for token in ["9999", "FG", "-RA", "03/02", "Q1012", "TEMPO", "RMK"] {
            assert!(!is_sky_condition(token), "{} should not be a sky condition", token);
        }
    }

    #[test]
    fn test_cavok_family() {
        assert!(is_cavok("CAVOK"));
        assert!(is_cavok("SKC"));
        assert!(is_cavok("CLR"));
        assert!(!is_cavok("FEW020"));
        assert!(!is_cavok("VV///"));
    }
}
