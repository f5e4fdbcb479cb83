//! A presence-tracking wrapper for wire fields that may be `null` or missing entirely.

use serde::{Deserialize, Deserializer};

/// A JSON field that is either present with a value or absent.
///
/// Both the `null` literal and a missing field decode to [`Nullable::Absent`]; any other
/// token is parsed as `T`. Missing fields need `#[serde(default)]` on the containing
/// struct field, which every response record in this crate sets.
///
/// # Examples
///
/// ```
/// use meteologix::Nullable;
///
/// let present: Nullable<f64> = serde_json::from_str("12.5").unwrap();
/// assert_eq!(present.get(), Some(&12.5));
///
/// let absent: Nullable<f64> = serde_json::from_str("null").unwrap();
/// assert!(absent.is_absent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nullable<T> {
    Present(T),
    Absent,
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Absent
    }
}

impl<T> Nullable<T> {
    /// Returns the value, or `None` when the field was null or missing.
    pub fn get(&self) -> Option<&T> {
        match self {
            Nullable::Present(value) => Some(value),
            Nullable::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Nullable::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    /// Clears the value back to the absent state.
    pub fn reset(&mut self) {
        *self = Nullable::Absent;
    }

    pub fn as_option(&self) -> Option<&T> {
        self.get()
    }
}

impl<T: Copy> Nullable<T> {
    /// Returns a copy of the value, or `None` when absent.
    pub fn value(&self) -> Option<T> {
        self.get().copied()
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Nullable::Present(v),
            None => Nullable::Absent,
        }
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        match value {
            Nullable::Present(v) => Some(v),
            Nullable::Absent => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for Nullable<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Nullable::from)
    }
}

#[cfg(test)]
mod tests {
    use super::Nullable;
    use chrono::{DateTime, FixedOffset};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(default)]
        value: Nullable<f64>,
        #[serde(default)]
        label: Nullable<String>,
    }

    #[test]
    fn test_null_is_absent() {
        let wrapper: Wrapper = serde_json::from_str(r#"{"value": null, "label": null}"#).unwrap();
        assert!(wrapper.value.is_absent());
        assert!(wrapper.label.is_absent());
        assert_eq!(wrapper.value.get(), None);
    }

    #[test]
    fn test_missing_field_is_absent() {
        let wrapper: Wrapper = serde_json::from_str("{}").unwrap();
        assert!(wrapper.value.is_absent());
        assert!(!wrapper.value.is_present());
    }

    #[test]
    fn test_present_value_round_trips() {
        let wrapper: Wrapper =
            serde_json::from_str(r#"{"value": 1013.25, "label": "Köln/Bonn"}"#).unwrap();
        assert!(wrapper.value.is_present());
        assert_eq!(wrapper.value.value(), Some(1013.25));
        assert_eq!(wrapper.label.get().map(String::as_str), Some("Köln/Bonn"));
    }

    #[test]
    fn test_zero_is_not_absent() {
        let wrapper: Wrapper = serde_json::from_str(r#"{"value": 0}"#).unwrap();
        assert_eq!(wrapper.value, Nullable::Present(0.0));
    }

    #[test]
    fn test_timestamp_payload() {
        let parsed: Nullable<DateTime<FixedOffset>> =
            serde_json::from_str(r#""2023-05-28T21:16:37+02:00""#).unwrap();
        assert_eq!(
            parsed.get().map(|t| t.to_rfc3339()),
            Some("2023-05-28T21:16:37+02:00".to_string())
        );
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let result = serde_json::from_str::<Nullable<f64>>(r#""twelve""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_reset() {
        let mut value = Nullable::Present(3_i64);
        value.reset();
        assert!(value.is_absent());
        assert_eq!(value, Nullable::default());
    }
}
