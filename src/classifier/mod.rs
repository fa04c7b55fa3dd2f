//! Condition classifier
//!
//! Pure derivations over a decoded [`Observation`]: the combined cloud
//! height, the cloud ceiling and the flight rule category. Nothing here
//! looks at tokens or fails; an observation with every field absent still
//! classifies (as [`FlightCondition::NA`]).
//!
//! - [`cloud_height`] - individual height signals and their minimum
//! - [`flight_category`] - ceiling/visibility banding

pub mod cloud_height;
pub mod flight_category;

use crate::constants::thresholds;
use crate::models::{FlightCondition, Observation};

pub use cloud_height::combined_cloud_height;
pub use flight_category::flight_condition;

/// Derived fields computed for an observation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// Combined cloud height in feet
    pub cloud_height: Option<i32>,
    /// Ceiling in feet (defaults to 5000)
    pub ceiling: i32,
    pub condition: FlightCondition,
}

/// Ceiling from broken/overcast layers and vertical visibility
pub fn ceiling(observation: &Observation) -> i32 {
    [
        cloud_height::ceiling_layer(&observation.clouds),
        cloud_height::vertical_visibility(&observation.clouds),
    ]
    .into_iter()
    .flatten()
    .min()
    .unwrap_or(thresholds::DEFAULT_CEILING_FT)
}

/// Classify an observation without modifying it
pub fn classify(observation: &Observation) -> Classification {
    let ceiling = ceiling(observation);
    let visibility = observation
        .visibility
        .unwrap_or(thresholds::UNKNOWN_VISIBILITY_M);

    Classification {
        cloud_height: combined_cloud_height(observation),
        ceiling,
        condition: flight_condition(ceiling, visibility),
    }
}
