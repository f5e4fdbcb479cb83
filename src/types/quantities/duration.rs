use crate::types::measurement::Measurement;
use crate::types::quantities::Quantity;
use chrono::TimeDelta;
use std::fmt;

/// Returned by [`Duration::duration`] when the value was not reported.
pub const DURATION_UNAVAILABLE: TimeDelta = TimeDelta::MIN;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// A duration in hours (e.g. sunshine duration).
#[derive(Debug, Clone, PartialEq)]
pub struct Duration(pub(crate) Measurement);

impl Duration {
    /// The value as a real duration, or [`DURATION_UNAVAILABLE`] when it was not reported
    /// or does not fit a [`TimeDelta`].
    pub fn duration(&self) -> TimeDelta {
        let millis = (self.0.float_value() * MILLIS_PER_HOUR).round();
        if !millis.is_finite() || millis.abs() >= i64::MAX as f64 {
            return DURATION_UNAVAILABLE;
        }
        TimeDelta::try_milliseconds(millis as i64).unwrap_or(DURATION_UNAVAILABLE)
    }
}

impl Quantity for Duration {
    type Value = f64;

    fn measurement(&self) -> &Measurement {
        &self.0
    }

    fn value(&self) -> f64 {
        self.0.float_value()
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.format_float(|v| format!("{v:.2}h")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::measurement::FieldName;
    use crate::types::source::Source;
    use chrono::Utc;

    #[test]
    fn test_duration() {
        let d = Duration(Measurement::float(
            FieldName::Sunshine,
            Utc::now(),
            Source::Observation,
            1.5,
        ));
        assert_eq!(d.duration(), TimeDelta::minutes(90));
        assert_eq!(d.to_string(), "1.50h");
    }

    #[test]
    fn test_out_of_range_is_unavailable() {
        for hours in [-1e20, 1e20, f64::INFINITY] {
            let d = Duration(Measurement::float(
                FieldName::Sunshine,
                Utc::now(),
                Source::Observation,
                hours,
            ));
            assert_eq!(d.duration(), DURATION_UNAVAILABLE);
            assert!(d.is_available());
        }
    }

    #[test]
    fn test_decoded_huge_negative_sunshine() {
        let weather: crate::CurrentWeather = serde_json::from_value(serde_json::json!({
            "lat": 50.9833,
            "lon": 6.9833,
            "data": {
                "sunshine": {"dateTime": "2023-05-23T07:00:00+02:00", "value": -1e20}
            }
        }))
        .unwrap();
        assert_eq!(weather.sunshine().duration(), DURATION_UNAVAILABLE);
    }

    #[test]
    fn test_unavailable() {
        let d = Duration(Measurement::unavailable(FieldName::Sunshine));
        assert_eq!(d.duration(), DURATION_UNAVAILABLE);
        assert!(d.value().is_nan());
        assert_eq!(d.to_string(), "Data unavailable");
    }
}
