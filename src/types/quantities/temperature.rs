use crate::types::measurement::Measurement;
use crate::types::quantities::Quantity;
use std::fmt;

/// A temperature in degrees Celsius.
#[derive(Debug, Clone, PartialEq)]
pub struct Temperature(pub(crate) Measurement);

impl Temperature {
    /// Degrees Celsius, as reported.
    pub fn celsius(&self) -> f64 {
        self.0.float_value()
    }

    /// Degrees Fahrenheit, unrounded.
    pub fn fahrenheit(&self) -> f64 {
        self.celsius() * 9.0 / 5.0 + 32.0
    }

    /// Kelvin, unrounded.
    pub fn kelvin(&self) -> f64 {
        self.celsius() + 273.15
    }

    /// One decimal, e.g. `"17.8°C"`.
    pub fn celsius_string(&self) -> String {
        self.0.format_float(|v| format!("{v:.1}°C"))
    }

    pub fn fahrenheit_string(&self) -> String {
        self.0.format_float(|v| format!("{:.1}°F", v * 9.0 / 5.0 + 32.0))
    }

    pub fn kelvin_string(&self) -> String {
        self.0.format_float(|v| format!("{:.1}K", v + 273.15))
    }
}

impl Quantity for Temperature {
    type Value = f64;

    fn measurement(&self) -> &Measurement {
        &self.0
    }

    fn value(&self) -> f64 {
        self.0.float_value()
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.celsius_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::measurement::FieldName;
    use crate::types::source::Source;
    use chrono::Utc;

    fn temperature(v: f64) -> Temperature {
        Temperature(Measurement::float(
            FieldName::AirTemperature,
            Utc::now(),
            Source::Analysis,
            v,
        ))
    }

    #[test]
    fn test_conversions() {
        let t = temperature(17.8);
        assert_eq!(t.celsius(), 17.8);
        assert!((t.fahrenheit() - 64.04).abs() < 1e-9);
        assert!((t.kelvin() - 290.95).abs() < 1e-9);
    }

    #[test]
    fn test_fahrenheit_inverts() {
        for c in [-40.0, -12.3, 0.0, 21.7, 38.25] {
            let f = temperature(c).fahrenheit();
            assert!(((f - 32.0) * 5.0 / 9.0 - c).abs() < 1e-9);
        }
    }

    #[test]
    fn test_formatting() {
        let t = temperature(17.8);
        assert_eq!(t.to_string(), "17.8°C");
        assert_eq!(t.celsius_string(), "17.8°C");
        assert_eq!(t.fahrenheit_string(), "64.0°F");
        assert_eq!(temperature(-3.25).kelvin_string(), "269.9K");
    }

    #[test]
    fn test_unavailable() {
        let t = Temperature(Measurement::unavailable(FieldName::Dewpoint));
        assert!(!t.is_available());
        assert!(t.value().is_nan());
        assert!(t.fahrenheit().is_nan());
        assert_eq!(t.to_string(), "Data unavailable");
        assert_eq!(t.fahrenheit_string(), "Data unavailable");
    }
}
