use crate::types::measurement::Measurement;
use crate::types::quantities::Quantity;
use chrono::{DateTime, FixedOffset};
use std::fmt;

/// An instant-valued field such as sunrise or sunset, kept in the offset it was sent with.
#[derive(Debug, Clone, PartialEq)]
pub struct DateTimeValue(pub(crate) Measurement);

impl Quantity for DateTimeValue {
    type Value = DateTime<FixedOffset>;

    fn measurement(&self) -> &Measurement {
        &self.0
    }

    /// The instant, or the zero instant when unavailable.
    fn value(&self) -> DateTime<FixedOffset> {
        self.0.instant_value()
    }
}

/// Renders RFC 3339, e.g. `2023-05-28T21:16:37+02:00`.
impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.instant_value().to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::measurement::FieldName;
    use crate::types::source::Source;

    #[test]
    fn test_rfc3339() {
        let t = DateTime::parse_from_rfc3339("2023-05-28T05:01:12+02:00").unwrap();
        let sunrise = DateTimeValue(Measurement::instant(FieldName::Sunrise, Source::Unknown, t));
        assert!(sunrise.is_available());
        assert_eq!(sunrise.to_string(), "2023-05-28T05:01:12+02:00");
        assert_eq!(sunrise.value(), t);
    }

    #[test]
    fn test_unavailable_is_zero_instant() {
        let missing = DateTimeValue(Measurement::unavailable(FieldName::Moonrise));
        assert!(!missing.is_available());
        assert_eq!(missing.value().timestamp(), 0);
        assert_eq!(missing.to_string(), "1970-01-01T00:00:00+00:00");
    }
}
