mod config;
mod error;
mod geolocation;
mod http;
mod meteologix;
mod stations;
mod types;

pub use config::*;
pub use error::MeteologixError;
pub use http::error::{ApiError, HttpError};
pub use meteologix::*;

pub use geolocation::GeoLocation;
pub use stations::search::MIN_SEARCH_RADIUS_KM;

pub use types::api_date::ApiDate;
pub use types::api_value::ApiValue;
pub use types::compass::{find_direction, find_direction_full};
pub use types::data_source::{ForecastDetails, ForecastTimeSteps, Timespan};
pub use types::measurement::{FieldName, Measurement, ValueKind, DATA_UNAVAILABLE};
pub use types::nullable::Nullable;
pub use types::precision::Precision;
pub use types::source::Source;
pub use types::station::Station;
pub use types::weather_condition::ConditionType;

pub use types::quantities::condition::Condition;
pub use types::quantities::coverage::{coverage_description, Coverage};
pub use types::quantities::datetime::DateTimeValue;
pub use types::quantities::density::Density;
pub use types::quantities::direction::Direction;
pub use types::quantities::duration::{Duration, DURATION_UNAVAILABLE};
pub use types::quantities::height::Height;
pub use types::quantities::humidity::Humidity;
pub use types::quantities::precipitation::Precipitation;
pub use types::quantities::pressure::Pressure;
pub use types::quantities::radiation::Radiation;
pub use types::quantities::speed::Speed;
pub use types::quantities::temperature::Temperature;
pub use types::quantities::Quantity;

pub use types::weather_data::astronomical_info::*;
pub use types::weather_data::current_weather::*;
pub use types::weather_data::forecast::*;
pub use types::weather_data::observation::*;
