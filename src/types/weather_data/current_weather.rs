//! Response of the current-weather endpoint.

use crate::error::MeteologixError;
use crate::types::api_value::ApiValue;
use crate::types::data_source::Timespan;
use crate::types::measurement::{FieldName, Measurement};
use crate::types::quantities::condition::Condition;
use crate::types::quantities::coverage::Coverage;
use crate::types::quantities::density::Density;
use crate::types::quantities::direction::Direction;
use crate::types::quantities::duration::Duration;
use crate::types::quantities::height::Height;
use crate::types::quantities::humidity::Humidity;
use crate::types::quantities::precipitation::Precipitation;
use crate::types::quantities::pressure::Pressure;
use crate::types::quantities::radiation::Radiation;
use crate::types::quantities::speed::Speed;
use crate::types::quantities::temperature::Temperature;
use serde::Deserialize;

/// Current conditions at a coordinate, as analysed by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    #[serde(rename = "alt", default)]
    pub altitude: Option<i32>,
    #[serde(rename = "systemOfUnits", default)]
    pub unit_system: String,
    #[serde(rename = "timeZone", default)]
    pub time_zone: String,
    #[serde(default)]
    pub data: CurrentWeatherData,
}

/// Raw wire fields of the current-weather `data` block. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrentWeatherData {
    pub air_density: Option<ApiValue<f64>>,
    pub air_pressure: Option<ApiValue<f64>>,
    pub air_pressure_at_sea_level: Option<ApiValue<f64>>,
    pub air_temperature: Option<ApiValue<f64>>,
    pub cloud_coverage: Option<ApiValue<f64>>,
    pub dewpoint: Option<ApiValue<f64>>,
    pub global_radiation_10m: Option<ApiValue<f64>>,
    pub global_radiation_1h: Option<ApiValue<f64>>,
    pub global_radiation_24h: Option<ApiValue<f64>>,
    pub humidity_relative: Option<ApiValue<f64>>,
    pub is_day: Option<ApiValue<bool>>,
    #[serde(rename = "prec")]
    pub precipitation: Option<ApiValue<f64>>,
    #[serde(rename = "prec10m")]
    pub precipitation_10m: Option<ApiValue<f64>>,
    #[serde(rename = "prec1h")]
    pub precipitation_1h: Option<ApiValue<f64>>,
    #[serde(rename = "prec24h")]
    pub precipitation_24h: Option<ApiValue<f64>>,
    pub snow_height: Option<ApiValue<f64>>,
    pub sunshine: Option<ApiValue<f64>>,
    pub weather_symbol: Option<ApiValue<String>>,
    pub wind_direction: Option<ApiValue<f64>>,
    pub wind_gust: Option<ApiValue<f64>>,
    pub wind_speed: Option<ApiValue<f64>>,
}

impl CurrentWeather {
    /// IANA time zone of the location, if the name is recognised.
    pub fn time_zone(&self) -> Option<chrono_tz::Tz> {
        self.time_zone.parse().ok()
    }

    /// Air temperature 2 m above ground.
    pub fn temperature(&self) -> Temperature {
        Temperature(Measurement::from_float(
            FieldName::AirTemperature,
            self.data.air_temperature.as_ref(),
        ))
    }

    /// Dew point temperature.
    pub fn dewpoint(&self) -> Temperature {
        Temperature(Measurement::from_float(
            FieldName::Dewpoint,
            self.data.dewpoint.as_ref(),
        ))
    }

    /// Relative humidity.
    pub fn humidity_relative(&self) -> Humidity {
        Humidity(Measurement::from_float(
            FieldName::HumidityRelative,
            self.data.humidity_relative.as_ref(),
        ))
    }

    /// Air pressure reduced to mean sea level.
    pub fn pressure_msl(&self) -> Pressure {
        Pressure(Measurement::from_float(
            FieldName::PressureMsl,
            self.data.air_pressure_at_sea_level.as_ref(),
        ))
    }

    /// Air pressure at station level.
    pub fn pressure_qfe(&self) -> Pressure {
        Pressure(Measurement::from_float(
            FieldName::PressureQfe,
            self.data.air_pressure.as_ref(),
        ))
    }

    /// Air density.
    pub fn air_density(&self) -> Density {
        Density(Measurement::from_float(
            FieldName::AirDensity,
            self.data.air_density.as_ref(),
        ))
    }

    /// Precipitation over the given window. All [`Timespan`] windows are reported here.
    pub fn precipitation(&self, timespan: Timespan) -> Result<Precipitation, MeteologixError> {
        let (field, value) = match timespan {
            Timespan::Current => (FieldName::Precipitation, &self.data.precipitation),
            Timespan::TenMinutes => (FieldName::Precipitation10m, &self.data.precipitation_10m),
            Timespan::OneHour => (FieldName::Precipitation1h, &self.data.precipitation_1h),
            Timespan::TwentyFourHours => {
                (FieldName::Precipitation24h, &self.data.precipitation_24h)
            }
        };
        Ok(Precipitation(Measurement::from_float(field, value.as_ref())))
    }

    /// Global radiation over the given window.
    ///
    /// # Errors
    ///
    /// Returns [`MeteologixError::TimespanUnsupported`] for [`Timespan::Current`], which
    /// this endpoint does not aggregate.
    pub fn global_radiation(&self, timespan: Timespan) -> Result<Radiation, MeteologixError> {
        let (field, value) = match timespan {
            Timespan::TenMinutes => {
                (FieldName::GlobalRadiation10m, &self.data.global_radiation_10m)
            }
            Timespan::OneHour => (FieldName::GlobalRadiation1h, &self.data.global_radiation_1h),
            Timespan::TwentyFourHours => {
                (FieldName::GlobalRadiation24h, &self.data.global_radiation_24h)
            }
            Timespan::Current => return Err(MeteologixError::TimespanUnsupported),
        };
        Ok(Radiation(Measurement::from_float(field, value.as_ref())))
    }

    /// Snow depth on the ground.
    pub fn snow_height(&self) -> Height {
        Height(Measurement::from_float(
            FieldName::SnowHeight,
            self.data.snow_height.as_ref(),
        ))
    }

    /// Sunshine duration.
    pub fn sunshine(&self) -> Duration {
        Duration(Measurement::from_float(
            FieldName::Sunshine,
            self.data.sunshine.as_ref(),
        ))
    }

    /// Total cloud coverage.
    pub fn cloud_coverage(&self) -> Coverage {
        Coverage(Measurement::from_float(
            FieldName::CloudCoverage,
            self.data.cloud_coverage.as_ref(),
        ))
    }

    /// Current condition, e.g. cloudy or light rain.
    pub fn weather_symbol(&self) -> Condition {
        Condition(Measurement::from_text(
            FieldName::WeatherSymbol,
            self.data.weather_symbol.as_ref(),
        ))
    }

    /// Direction the wind blows from.
    pub fn wind_direction(&self) -> Direction {
        Direction(Measurement::from_float(
            FieldName::WindDirection,
            self.data.wind_direction.as_ref(),
        ))
    }

    /// Mean wind speed.
    pub fn wind_speed(&self) -> Speed {
        Speed(Measurement::from_float(
            FieldName::WindSpeed,
            self.data.wind_speed.as_ref(),
        ))
    }

    /// Strongest gust.
    pub fn wind_gust(&self) -> Speed {
        Speed(Measurement::from_float(
            FieldName::WindGust,
            self.data.wind_gust.as_ref(),
        ))
    }

    /// Whether it is daytime at the location. `false` when not reported.
    pub fn is_day(&self) -> bool {
        self.data.is_day.as_ref().is_some_and(|v| v.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::quantities::Quantity;
    use crate::types::source::Source;
    use crate::types::weather_condition::ConditionType;

    const BERLIN: &str = r#"{
        "lat": 52.5067296,
        "lon": 13.2599306,
        "alt": 40,
        "timeZone": "Europe/Berlin",
        "systemOfUnits": "metric",
        "data": {
            "airTemperature": {"dateTime": "2023-05-23T07:00:00+02:00", "source": "analysis", "value": 17.8},
            "dewpoint": {"dateTime": "2023-05-23T07:00:00+02:00", "value": 8.1},
            "weatherSymbol": {"dateTime": "2023-05-23T07:00:00+02:00", "source": "analysis", "value": "cloudy"},
            "windDirection": {"dateTime": "2023-05-23T07:00:00+02:00", "value": 200},
            "windSpeed": {"dateTime": "2023-05-23T07:00:00+02:00", "value": 3.2},
            "prec1h": {"dateTime": "2023-05-23T07:00:00+02:00", "value": 0.4},
            "isDay": {"dateTime": "2023-05-23T07:00:00+02:00", "value": true},
            "cloudCoverage": {"dateTime": "2023-05-23T07:00:00+02:00", "value": 85},
            "somethingNew": {"dateTime": "2023-05-23T07:00:00+02:00", "value": 1}
        }
    }"#;

    fn berlin() -> CurrentWeather {
        serde_json::from_str(BERLIN).unwrap()
    }

    #[test]
    fn test_temperature() {
        let weather = berlin();
        let t = weather.temperature();
        assert!(t.is_available());
        assert_eq!(t.value(), 17.8);
        assert_eq!(t.source(), Source::Analysis);
        assert_eq!(t.to_string(), "17.8°C");
        assert_eq!(t.date_time().to_rfc3339(), "2023-05-23T05:00:00+00:00");
        assert_eq!(weather.dewpoint().source(), Source::Unknown);
    }

    #[test]
    fn test_condition() {
        let condition = berlin().weather_symbol();
        assert_eq!(condition.condition(), ConditionType::Cloudy);
        assert_eq!(condition.condition().label(), "Cloudy");
    }

    #[test]
    fn test_wind_and_clouds() {
        let weather = berlin();
        assert_eq!(weather.wind_direction().direction(), "SSW");
        assert_eq!(weather.wind_speed().kmh_string(), "11.5km/h");
        assert_eq!(weather.cloud_coverage().description(), "Overcast");
        assert!(weather.is_day());
    }

    #[test]
    fn test_missing_fields_are_unavailable() {
        let weather = berlin();
        assert!(!weather.pressure_msl().is_available());
        assert!(weather.pressure_msl().value().is_nan());
        assert!(!weather.snow_height().is_available());
        assert_eq!(weather.wind_gust().to_string(), "Data unavailable");
    }

    #[test]
    fn test_precipitation_windows() {
        let weather = berlin();
        assert_eq!(weather.precipitation(Timespan::OneHour).unwrap().mm(), 0.4);
        assert!(!weather
            .precipitation(Timespan::TwentyFourHours)
            .unwrap()
            .is_available());
        assert!(matches!(
            weather.global_radiation(Timespan::Current),
            Err(MeteologixError::TimespanUnsupported)
        ));
    }

    #[test]
    fn test_time_zone() {
        assert_eq!(berlin().time_zone(), Some(chrono_tz::Europe::Berlin));
    }
}
