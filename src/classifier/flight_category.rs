//! Flight rule category from ceiling and visibility

use crate::constants::thresholds::{
    IFR_CEILING_FT, IFR_VISIBILITY_M, MVFR_CEILING_FT, MVFR_VISIBILITY_M,
};
use crate::models::FlightCondition;

/// Classify a ceiling (ft) and visibility (m).
///
/// Branches are evaluated in order, so IFR wins over MVFR when either value
/// is in its IFR band. Negative values never satisfy a band and stand for
/// "unknown".
pub fn flight_condition(ceiling: i32, visibility: i32) -> FlightCondition {
    if (0..IFR_CEILING_FT).contains(&ceiling) || (0..IFR_VISIBILITY_M).contains(&visibility) {
        FlightCondition::IFR
    } else if (IFR_CEILING_FT..MVFR_CEILING_FT).contains(&ceiling)
        || (IFR_VISIBILITY_M..MVFR_VISIBILITY_M).contains(&visibility)
    {
        FlightCondition::MVFR
    } else if ceiling >= MVFR_CEILING_FT && visibility >= MVFR_VISIBILITY_M {
        FlightCondition::VFR
    } else {
        FlightCondition::NA
    }
}
