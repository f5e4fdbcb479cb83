//! Date-only scalar used by the astronomy endpoint.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer};
use std::fmt;

const API_DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date sent as `YYYY-MM-DD`, anchored at midnight UTC.
///
/// The `null` literal decodes to the zero instant (the Unix epoch) rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ApiDate(pub DateTime<Utc>);

impl ApiDate {
    /// Parses a `YYYY-MM-DD` string.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        let date = NaiveDate::parse_from_str(value, API_DATE_FORMAT)?;
        Ok(Self::from(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == DateTime::<Utc>::default()
    }
}

impl From<NaiveDate> for ApiDate {
    fn from(date: NaiveDate) -> Self {
        ApiDate(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

impl fmt::Display for ApiDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(API_DATE_FORMAT))
    }
}

impl<'de> Deserialize<'de> for ApiDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(ApiDate::default()),
            Some(raw) => ApiDate::parse(&raw)
                .map_err(|e| de::Error::custom(format!("invalid date '{raw}': {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiDate;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_date() {
        let date: ApiDate = serde_json::from_str(r#""2023-05-28""#).unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2023, 5, 28).unwrap());
        assert_eq!(date.to_string(), "2023-05-28");
    }

    #[test]
    fn test_null_is_zero_instant() {
        let date: ApiDate = serde_json::from_str("null").unwrap();
        assert!(date.is_zero());
        assert_eq!(date.0.timestamp(), 0);
    }

    #[test]
    fn test_invalid_day_is_an_error() {
        assert!(serde_json::from_str::<ApiDate>(r#""2023-05-32""#).is_err());
        assert!(serde_json::from_str::<ApiDate>(r#""28.05.2023""#).is_err());
    }

    #[test]
    fn test_no_time_of_day() {
        let date = ApiDate::parse("2024-02-29").unwrap();
        assert_eq!(date.0.to_rfc3339(), "2024-02-29T00:00:00+00:00");
    }
}
