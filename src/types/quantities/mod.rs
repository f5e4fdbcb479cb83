//! Typed, unit-aware views over [`Measurement`].
//!
//! Every view wraps one measurement and adds conversions and formatting for its unit.
//! Shared accessors live on the [`Quantity`] trait; each view also implements `Display`,
//! which renders the value with its unit or `"Data unavailable"`.

use crate::types::measurement::{FieldName, Measurement};
use crate::types::source::Source;
use chrono::{DateTime, Utc};
use std::fmt;

pub mod condition;
pub mod coverage;
pub mod datetime;
pub mod density;
pub mod direction;
pub mod duration;
pub mod height;
pub mod humidity;
pub mod precipitation;
pub mod pressure;
pub mod radiation;
pub mod speed;
pub mod temperature;

/// Accessors shared by every quantity view.
pub trait Quantity: fmt::Display {
    /// What [`Quantity::value`] returns: `f64` for physical quantities, `String` for
    /// conditions and an instant for date-time fields.
    type Value;

    fn measurement(&self) -> &Measurement;

    fn value(&self) -> Self::Value;

    fn is_available(&self) -> bool {
        self.measurement().is_available()
    }

    fn date_time(&self) -> DateTime<Utc> {
        self.measurement().timestamp()
    }

    fn source(&self) -> Source {
        self.measurement().source()
    }

    fn field_name(&self) -> FieldName {
        self.measurement().field_name()
    }
}
