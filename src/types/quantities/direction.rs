use crate::types::compass::{find_direction, find_direction_full};
use crate::types::measurement::{Measurement, DATA_UNAVAILABLE};
use crate::types::quantities::Quantity;
use std::fmt;

/// A wind bearing in degrees, 0 = North, clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Direction(pub(crate) Measurement);

impl Direction {
    /// Abbreviated compass point, e.g. `"SSW"`, or `"Unsupported direction"` for bearings
    /// outside 0..=360.
    pub fn direction(&self) -> String {
        self.name_with(find_direction)
    }

    /// Long-form compass point, e.g. `"South-Southwest"`.
    pub fn direction_full(&self) -> String {
        self.name_with(find_direction_full)
    }

    fn name_with<F>(&self, lookup: F) -> String
    where
        F: Fn(f64) -> Result<&'static str, crate::MeteologixError>,
    {
        if !self.0.is_available() {
            return DATA_UNAVAILABLE.to_string();
        }
        match lookup(self.0.float_value()) {
            Ok(name) => name.to_string(),
            Err(e) => e.to_string(),
        }
    }
}

impl Quantity for Direction {
    type Value = f64;

    fn measurement(&self) -> &Measurement {
        &self.0
    }

    fn value(&self) -> f64 {
        self.0.float_value()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.format_float(|v| format!("{v:.0}°")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::measurement::FieldName;
    use crate::types::source::Source;
    use chrono::Utc;

    fn direction(v: f64) -> Direction {
        Direction(Measurement::float(
            FieldName::WindDirection,
            Utc::now(),
            Source::Analysis,
            v,
        ))
    }

    #[test]
    fn test_names() {
        assert_eq!(direction(15.0).direction(), "NbE");
        assert_eq!(direction(15.0).direction_full(), "North by East");
        assert_eq!(direction(47.0).direction(), "NE");
        assert_eq!(direction(200.0).direction_full(), "South-Southwest");
    }

    #[test]
    fn test_unsupported() {
        assert_eq!(direction(999.0).direction(), "Unsupported direction");
        assert_eq!(direction(-1.0).direction_full(), "Unsupported direction");
    }

    #[test]
    fn test_format_and_unavailable() {
        assert_eq!(direction(200.4).to_string(), "200°");
        let missing = Direction(Measurement::unavailable(FieldName::WindDirection));
        assert_eq!(missing.direction(), "Data unavailable");
        assert!(missing.value().is_nan());
    }
}
