//! The single record behind every quantity view.
//!
//! Each endpoint lifts its sparse JSON fields into a [`Measurement`], which carries the value,
//! its timestamp and provenance, and whether the API reported it at all. The typed views in
//! [`crate::types::quantities`] are read-only projections over this record.

use crate::types::api_value::ApiValue;
use crate::types::source::Source;
use chrono::{DateTime, FixedOffset, Utc};

/// Returned by symbolic readers when the value was not reported.
pub const DATA_UNAVAILABLE: &str = "Data unavailable";

/// Which physical quantity a [`Measurement`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    AirTemperature,
    AirTemperatureMax,
    AirTemperatureMin,
    TemperatureAtGround,
    TemperatureAtGroundMin,
    Dewpoint,
    HumidityRelative,
    PressureMsl,
    PressureQfe,
    Precipitation,
    Precipitation10m,
    Precipitation1h,
    Precipitation24h,
    GlobalRadiation,
    GlobalRadiation10m,
    GlobalRadiation1h,
    GlobalRadiation24h,
    WindSpeed,
    WindGust,
    WindDirection,
    SnowHeight,
    SnowAmount,
    Sunshine,
    CloudCoverage,
    AirDensity,
    WeatherSymbol,
    Sunrise,
    Sunset,
    Transit,
    CivilDawn,
    CivilDusk,
    NauticalDawn,
    NauticalDusk,
    AstronomicalDawn,
    AstronomicalDusk,
    Moonrise,
    Moonset,
    NextFullMoon,
    NextNewMoon,
}

/// The payload shape a field carries when available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Float,
    Text,
    Instant,
}

impl FieldName {
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldName::WeatherSymbol => ValueKind::Text,
            FieldName::Sunrise
            | FieldName::Sunset
            | FieldName::Transit
            | FieldName::CivilDawn
            | FieldName::CivilDusk
            | FieldName::NauticalDawn
            | FieldName::NauticalDusk
            | FieldName::AstronomicalDawn
            | FieldName::AstronomicalDusk
            | FieldName::Moonrise
            | FieldName::Moonset
            | FieldName::NextFullMoon
            | FieldName::NextNewMoon => ValueKind::Instant,
            _ => ValueKind::Float,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Reading {
    Float(f64),
    Text(String),
    Instant(DateTime<FixedOffset>),
    Missing,
}

/// A single data point: value, timestamp, provenance and availability.
///
/// An unavailable measurement is not an error. Its numeric reader yields `NaN`, its
/// text reader yields [`DATA_UNAVAILABLE`] and its instant reader yields the zero instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    timestamp: DateTime<Utc>,
    field: FieldName,
    source: Source,
    reading: Reading,
}

/// The instant used in place of a missing timestamp (the Unix epoch).
pub(crate) fn zero_instant() -> DateTime<FixedOffset> {
    DateTime::<Utc>::default().fixed_offset()
}

impl Measurement {
    pub(crate) fn float(
        field: FieldName,
        timestamp: DateTime<Utc>,
        source: Source,
        value: f64,
    ) -> Self {
        debug_assert_eq!(field.kind(), ValueKind::Float);
        Self {
            timestamp,
            field,
            source,
            reading: Reading::Float(value),
        }
    }

    pub(crate) fn text(
        field: FieldName,
        timestamp: DateTime<Utc>,
        source: Source,
        value: impl Into<String>,
    ) -> Self {
        debug_assert_eq!(field.kind(), ValueKind::Text);
        Self {
            timestamp,
            field,
            source,
            reading: Reading::Text(value.into()),
        }
    }

    pub(crate) fn instant(field: FieldName, source: Source, value: DateTime<FixedOffset>) -> Self {
        debug_assert_eq!(field.kind(), ValueKind::Instant);
        Self {
            timestamp: value.with_timezone(&Utc),
            field,
            source,
            reading: Reading::Instant(value),
        }
    }

    pub(crate) fn unavailable(field: FieldName) -> Self {
        Self {
            timestamp: DateTime::<Utc>::default(),
            field,
            source: Source::Unknown,
            reading: Reading::Missing,
        }
    }

    pub(crate) fn from_float(field: FieldName, value: Option<&ApiValue<f64>>) -> Self {
        match value {
            Some(v) => Self::float(field, v.date_time.with_timezone(&Utc), v.source(), v.value),
            None => Self::unavailable(field),
        }
    }

    pub(crate) fn from_text(field: FieldName, value: Option<&ApiValue<String>>) -> Self {
        match value {
            Some(v) => Self::text(
                field,
                v.date_time.with_timezone(&Utc),
                v.source(),
                v.value.clone(),
            ),
            None => Self::unavailable(field),
        }
    }

    pub fn is_available(&self) -> bool {
        self.reading != Reading::Missing
    }

    pub fn field_name(&self) -> FieldName {
        self.field
    }

    pub fn source(&self) -> Source {
        self.source
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// The numeric payload, or `NaN` for unavailable or non-numeric fields.
    pub fn float_value(&self) -> f64 {
        match self.reading {
            Reading::Float(v) => v,
            _ => f64::NAN,
        }
    }

    /// The symbolic payload, or [`DATA_UNAVAILABLE`].
    pub fn string_value(&self) -> &str {
        match &self.reading {
            Reading::Text(s) => s,
            _ => DATA_UNAVAILABLE,
        }
    }

    /// The instant payload, or the zero instant.
    pub fn instant_value(&self) -> DateTime<FixedOffset> {
        match self.reading {
            Reading::Instant(t) => t,
            _ => zero_instant(),
        }
    }

    /// Formats the numeric payload, or returns [`DATA_UNAVAILABLE`].
    pub(crate) fn format_float(&self, render: impl FnOnce(f64) -> String) -> String {
        match self.reading {
            Reading::Float(v) => render(v),
            _ => DATA_UNAVAILABLE.to_string(),
        }
    }
}
