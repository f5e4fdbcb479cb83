//! 32-point compass naming for wind bearings.

use crate::error::MeteologixError;

/// Angular distance between two neighbouring compass points.
const STEP_DEGREES: f64 = 11.25;

// Index i names the bearing i * 11.25°; the last entry closes the circle at 360°.
const ABBREVIATIONS: [&str; 33] = [
    "N", "NbE", "NNE", "NEbN", "NE", "NEbE", "ENE", "EbN", "E", "EbS", "ESE", "SEbE", "SE",
    "SEbS", "SSE", "SbE", "S", "SbW", "SSW", "SWbS", "SW", "SWbW", "WSW", "WbS", "W", "WbN",
    "WNW", "NWbW", "NW", "NWbN", "NNW", "NbW", "N",
];

const FULL_NAMES: [&str; 33] = [
    "North",
    "North by East",
    "North-Northeast",
    "Northeast by North",
    "Northeast",
    "Northeast by East",
    "East-Northeast",
    "East by North",
    "East",
    "East by South",
    "East-Southeast",
    "Southeast by East",
    "Southeast",
    "Southeast by South",
    "South-Southeast",
    "South by East",
    "South",
    "South by West",
    "South-Southwest",
    "Southwest by South",
    "Southwest",
    "Southwest by West",
    "West-Southwest",
    "West by South",
    "West",
    "West by North",
    "West-Northwest",
    "Northwest by West",
    "Northwest",
    "Northwest by North",
    "North-Northwest",
    "North by West",
    "North",
];

/// Index of the compass point naming `bearing`.
///
/// Between two points `lo <= bearing <= hi`, `lo` wins only when it is strictly closer;
/// an exact tie goes to `hi`.
fn compass_index(bearing: f64) -> Result<usize, MeteologixError> {
    if !(0.0..=360.0).contains(&bearing) {
        return Err(MeteologixError::UnsupportedDirection);
    }
    let position = bearing / STEP_DEGREES;
    if position.fract() == 0.0 {
        return Ok(position as usize);
    }

    let lo_index = position.floor() as usize;
    let hi_index = lo_index + 1;
    let lo_diff = bearing - lo_index as f64 * STEP_DEGREES;
    let hi_diff = hi_index as f64 * STEP_DEGREES - bearing;
    if hi_diff > lo_diff {
        Ok(lo_index)
    } else {
        Ok(hi_index)
    }
}

/// Abbreviated compass point for a bearing in degrees, e.g. `"NbE"` for 15°.
///
/// # Examples
///
/// ```
/// use meteologix::{find_direction, MeteologixError};
///
/// assert_eq!(find_direction(15.0).unwrap(), "NbE");
/// assert_eq!(find_direction(200.0).unwrap(), "SSW");
/// assert!(matches!(find_direction(999.0), Err(MeteologixError::UnsupportedDirection)));
/// ```
pub fn find_direction(bearing: f64) -> Result<&'static str, MeteologixError> {
    compass_index(bearing).map(|i| ABBREVIATIONS[i])
}

/// Long-form compass point for a bearing in degrees, e.g. `"North by East"` for 15°.
pub fn find_direction_full(bearing: f64) -> Result<&'static str, MeteologixError> {
    compass_index(bearing).map(|i| FULL_NAMES[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_points() {
        for (i, name) in ABBREVIATIONS.iter().enumerate().take(32) {
            let bearing = i as f64 * STEP_DEGREES;
            assert_eq!(find_direction(bearing).unwrap(), *name, "bearing {bearing}");
        }
        assert_eq!(find_direction(360.0).unwrap(), "N");
        assert_eq!(find_direction_full(90.0).unwrap(), "East");
        assert_eq!(find_direction_full(292.5).unwrap(), "West-Northwest");
    }

    #[test]
    fn test_nearest_point() {
        assert_eq!(find_direction(15.0).unwrap(), "NbE");
        assert_eq!(find_direction_full(15.0).unwrap(), "North by East");
        assert_eq!(find_direction(47.0).unwrap(), "NE");
        assert_eq!(find_direction_full(47.0).unwrap(), "Northeast");
        assert_eq!(find_direction(200.0).unwrap(), "SSW");
        assert_eq!(find_direction_full(200.0).unwrap(), "South-Southwest");
        assert_eq!(find_direction(359.0).unwrap(), "N");
        assert_eq!(find_direction(0.5).unwrap(), "N");
    }

    #[test]
    fn test_tie_goes_to_higher_point() {
        // 5.625 is exactly between N (0) and NbE (11.25)
        assert_eq!(find_direction(5.625).unwrap(), "NbE");
        // 185.625 is between S (180) and SbW (191.25)
        assert_eq!(find_direction(185.625).unwrap(), "SbW");
    }

    #[test]
    fn test_strictly_closer_lower_point_wins() {
        assert_eq!(find_direction(5.6).unwrap(), "N");
        assert_eq!(find_direction(5.7).unwrap(), "NbE");
    }

    #[test]
    fn test_out_of_range() {
        for bearing in [-0.1, 360.1, 999.0, f64::NAN] {
            let err = find_direction(bearing).unwrap_err();
            assert!(matches!(err, MeteologixError::UnsupportedDirection));
            assert_eq!(err.to_string(), "Unsupported direction");
        }
    }
}
