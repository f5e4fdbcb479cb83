use crate::types::measurement::Measurement;
use crate::types::quantities::Quantity;
use std::fmt;

/// Relative humidity in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct Humidity(pub(crate) Measurement);

impl Quantity for Humidity {
    type Value = f64;

    fn measurement(&self) -> &Measurement {
        &self.0
    }

    fn value(&self) -> f64 {
        self.0.float_value()
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.format_float(|v| format!("{v:.1}%")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::measurement::FieldName;
    use crate::types::source::Source;
    use chrono::Utc;

    #[test]
    fn test_format() {
        let h = Humidity(Measurement::float(
            FieldName::HumidityRelative,
            Utc::now(),
            Source::Observation,
            65.24,
        ));
        assert_eq!(h.value(), 65.24);
        assert_eq!(h.to_string(), "65.2%");
    }

    #[test]
    fn test_unavailable() {
        let h = Humidity(Measurement::unavailable(FieldName::HumidityRelative));
        assert!(!h.is_available());
        assert!(h.value().is_nan());
        assert_eq!(h.to_string(), "Data unavailable");
    }
}
