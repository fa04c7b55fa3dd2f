//! Cloud height signals extracted from the sky condition and weather groups
//!
//! Each signal is independently optional. The combined cloud height is the
//! minimum over every signal present, while the ceiling only considers
//! broken/overcast layers and vertical visibility.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{
    self, CEILING_COVERAGE_CODES, DENSE_OBSCURATION_CODES, LIGHT_OBSCURATION_CODES, thresholds,
};
use crate::models::Observation;

static CLOUD_LAYER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(FEW|SCT|OVC|BKN)(\d{3})").expect("cloud layer pattern is valid")
});

static VERTICAL_VISIBILITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"VV(\d{3}|///)").expect("vertical visibility pattern is valid"));

/// 5000 ft when any CAVOK-family group is reported
pub fn cavok_height(clouds: &str) -> Option<i32> {
    clouds
        .split_whitespace()
        .any(constants::is_cavok)
        .then_some(thresholds::CAVOK_CLOUD_HEIGHT_FT)
}

/// Lowest layer base over all coverage codes
pub fn cloud_base(clouds: &str) -> Option<i32> {
    layer_heights(clouds, |_| true).min()
}

/// Lowest broken or overcast layer base
pub fn ceiling_layer(clouds: &str) -> Option<i32> {
    layer_heights(clouds, |coverage| CEILING_COVERAGE_CODES.contains(&coverage)).min()
}

/// Lowest vertical visibility; `VV///` counts as 100 ft
pub fn vertical_visibility(clouds: &str) -> Option<i32> {
    VERTICAL_VISIBILITY
        .captures_iter(clouds)
        .filter_map(|caps| match &caps[1] {
            "///" => Some(thresholds::UNKNOWN_VERTICAL_VISIBILITY_FT),
            digits => digits
                .parse::<i32>()
                .ok()
                .map(|hundreds| hundreds * thresholds::CLOUD_HEIGHT_UNIT_FT),
        })
        .min()
}

/// Height implied by obscuring weather; fog/mist takes precedence over dust/smoke/haze
pub fn obscuration_height(weather: &str) -> Option<i32> {
    if DENSE_OBSCURATION_CODES
        .iter()
        .any(|code| weather.contains(code))
    {
        Some(thresholds::DENSE_OBSCURATION_HEIGHT_FT)
    } else if LIGHT_OBSCURATION_CODES
        .iter()
        .any(|code| weather.contains(code))
    {
        Some(thresholds::LIGHT_OBSCURATION_HEIGHT_FT)
    } else {
        None
    }
}

/// Minimum over every cloud height signal present
pub fn combined_cloud_height(observation: &Observation) -> Option<i32> {
    [
        cavok_height(&observation.clouds),
        cloud_base(&observation.clouds),
        vertical_visibility(&observation.clouds),
        obscuration_height(&observation.weather),
    ]
    .into_iter()
    .flatten()
    .min()
}

fn layer_heights<'a, F>(clouds: &'a str, mut accept: F) -> impl Iterator<Item = i32> + 'a
where
    F: FnMut(&str) -> bool + 'a,
{
    CLOUD_LAYER.captures_iter(clouds).filter_map(move |caps| {
        let coverage = caps.get(1)?.as_str();
        if !accept(coverage) {
            return None;
        }
        caps[2]
            .parse::<i32>()
            .ok()
            .map(|hundreds| hundreds * thresholds::CLOUD_HEIGHT_UNIT_FT)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cavok_height() {
        assert_eq!(cavok_height("CAVOK"), Some(5000));
        assert_eq!(cavok_height("NSC"), Some(5000));
        assert_eq!(cavok_height("FEW020"), None);
        assert_eq!(cavok_height(""), None);
    }

    #[test]
    fn test_cloud_base_uses_all_coverage_codes() {
        assert_eq!(cloud_base("FEW036"), Some(3600));
        assert_eq!(cloud_base("SCT012 BKN025 OVC040"), Some(1200));
        assert_eq!(cloud_base("NSC"), None);
    }

    #[test]
    fn test_ceiling_layer_ignores_few_and_scattered() {
        assert_eq!(ceiling_layer("FEW005 SCT010 BKN025 OVC040"), Some(2500));
        assert_eq!(ceiling_layer("FEW005 SCT010"), None);
        assert_eq!(ceiling_layer("BKN000"), Some(0));
    }

    #[test]
    fn test_vertical_visibility() {
        assert_eq!(vertical_visibility("VV002"), Some(200));
        assert_eq!(vertical_visibility("VV///"), Some(100));
        assert_eq!(vertical_visibility("VV005 VV///"), Some(100));
        assert_eq!(vertical_visibility("OVC002"), None);
    }

    #[test]
    fn test_obscuration_precedence() {
        assert_eq!(obscuration_height("FG"), Some(100));
        assert_eq!(obscuration_height("-RA BR"), Some(100));
        assert_eq!(obscuration_height("HZ"), Some(750));
        assert_eq!(obscuration_height("FU BR"), Some(100));
        assert_eq!(obscuration_height("-SHRA"), None);
    }

    #[test]
    fn test_combined_cloud_height_takes_minimum() {
        let observation = Observation {
            weather: "HZ".to_string(),
            clouds: "FEW036 BKN080".to_string(),
            ..Default::default()
        };
        assert_eq!(combined_cloud_height(&observation), Some(750));

        assert_eq!(combined_cloud_height(&Observation::default()), None);
    }
}
