//! Data-resolution tier of a station or forecast.

use serde::Deserialize;
use std::fmt;

/// Spatial resolution tier reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Precision {
    /// Resolution of 4 km or better.
    SuperHigh,
    /// Resolution between 4 and 10 km.
    High,
    /// Resolution of 10 km or coarser.
    Standard,
    #[default]
    Unknown,
}

impl Precision {
    /// Parses `SUPER_HIGH`, `HIGH` or `STANDARD` in any case; everything else is `Unknown`.
    pub fn from_wire(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "SUPER_HIGH" => Precision::SuperHigh,
            "HIGH" => Precision::High,
            "STANDARD" => Precision::Standard,
            _ => Precision::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Precision::SuperHigh => "super-high",
            Precision::High => "high",
            Precision::Standard => "standard",
            Precision::Unknown => "unknown",
        }
    }
}

impl From<String> for Precision {
    fn from(value: String) -> Self {
        Precision::from_wire(&value)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Precision;

    #[test]
    fn test_wire_values() {
        assert_eq!(Precision::from_wire("SUPER_HIGH"), Precision::SuperHigh);
        assert_eq!(Precision::from_wire("super_high"), Precision::SuperHigh);
        assert_eq!(Precision::from_wire("High"), Precision::High);
        assert_eq!(Precision::from_wire("standard"), Precision::Standard);
        assert_eq!(Precision::from_wire("ULTRA"), Precision::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(Precision::SuperHigh.to_string(), "super-high");
        assert_eq!(Precision::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_deserialize() {
        let precision: Precision = serde_json::from_str(r#""HIGH""#).unwrap();
        assert_eq!(precision, Precision::High);
    }
}
