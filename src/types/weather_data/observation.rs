//! Response of the station-observation endpoint.

use crate::error::MeteologixError;
use crate::types::api_value::ApiValue;
use crate::types::data_source::Timespan;
use crate::types::measurement::{FieldName, Measurement, ValueKind};
use crate::types::quantities::condition::Condition;
use crate::types::quantities::coverage::Coverage;
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

/// Latest measurements reported by a single station.
#[derive(Debug, Clone, Deserialize)]
pub struct Observation {
    #[serde(rename = "id")]
    pub station_id: String,
    #[serde(rename = "name", default)]
    pub station_name: String,
    #[serde(rename = "alt", default)]
    pub altitude: Option<i32>,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    #[serde(default)]
    pub data: ObservationData,
}

/// Raw wire fields of an observation `data` block. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObservationData {
    pub air_temperature: Option<ApiValue<f64>>,
    pub air_temperature_max: Option<ApiValue<f64>>,
    pub air_temperature_min: Option<ApiValue<f64>>,
    /// Air temperature 5 cm above ground.
    #[serde(rename = "airTemperature5cm")]
    pub temperature_at_ground: Option<ApiValue<f64>>,
    #[serde(rename = "airTemperature5cmMin")]
    pub temperature_at_ground_min: Option<ApiValue<f64>>,
    pub dewpoint: Option<ApiValue<f64>>,
    pub humidity_relative: Option<ApiValue<f64>>,
    pub pressure_msl: Option<ApiValue<f64>>,
    /// Pressure at station level.
    #[serde(rename = "pressure")]
    pub pressure_qfe: Option<ApiValue<f64>>,
    #[serde(rename = "precipitation10m")]
    pub precipitation_10m: Option<ApiValue<f64>>,
    #[serde(rename = "precipitation1h")]
    pub precipitation_1h: Option<ApiValue<f64>>,
    #[serde(rename = "precipitation24h")]
    pub precipitation_24h: Option<ApiValue<f64>>,
    #[serde(rename = "globalRadiation10m")]
    pub global_radiation_10m: Option<ApiValue<f64>>,
    #[serde(rename = "globalRadiation1h")]
    pub global_radiation_1h: Option<ApiValue<f64>>,
    #[serde(rename = "globalRadiation24h")]
    pub global_radiation_24h: Option<ApiValue<f64>>,
    pub wind_speed: Option<ApiValue<f64>>,
    pub wind_gust: Option<ApiValue<f64>>,
    pub wind_direction: Option<ApiValue<f64>>,
    pub snow_height: Option<ApiValue<f64>>,
    pub snow_amount: Option<ApiValue<f64>>,
    pub sunshine: Option<ApiValue<f64>>,
    pub cloud_coverage: Option<ApiValue<f64>>,
    pub weather_symbol: Option<ApiValue<String>>,
}

impl ObservationData {
    fn float_field(&self, field: FieldName) -> Option<&ApiValue<f64>> {
        let value = match field {
            FieldName::AirTemperature => &self.air_temperature,
            FieldName::AirTemperatureMax => &self.air_temperature_max,
            FieldName::AirTemperatureMin => &self.air_temperature_min,
            FieldName::TemperatureAtGround => &self.temperature_at_ground,
            FieldName::TemperatureAtGroundMin => &self.temperature_at_ground_min,
            FieldName::Dewpoint => &self.dewpoint,
            FieldName::HumidityRelative => &self.humidity_relative,
            FieldName::PressureMsl => &self.pressure_msl,
            FieldName::PressureQfe => &self.pressure_qfe,
            FieldName::Precipitation10m => &self.precipitation_10m,
            FieldName::Precipitation1h => &self.precipitation_1h,
            FieldName::Precipitation24h => &self.precipitation_24h,
            FieldName::GlobalRadiation10m => &self.global_radiation_10m,
            FieldName::GlobalRadiation1h => &self.global_radiation_1h,
            FieldName::GlobalRadiation24h => &self.global_radiation_24h,
            FieldName::WindSpeed => &self.wind_speed,
            FieldName::WindGust => &self.wind_gust,
            FieldName::WindDirection => &self.wind_direction,
            FieldName::SnowHeight => &self.snow_height,
            FieldName::SnowAmount => &self.snow_amount,
            FieldName::Sunshine => &self.sunshine,
            FieldName::CloudCoverage => &self.cloud_coverage,
            _ => return None,
        };
        value.as_ref()
    }
}

impl Observation {
    /// The measurement for `field`.
    ///
    /// # Errors
    ///
    /// [`MeteologixError::DataNotAvailable`] when the station did not report `field`, including
    /// fields this endpoint never carries.
    pub fn measurement(&self, field: FieldName) -> Result<Measurement, MeteologixError> {
        let measurement = match field.kind() {
            ValueKind::Float => self
                .data
                .float_field(field)
                .map(|v| Measurement::from_float(field, Some(v))),
            ValueKind::Text if field == FieldName::WeatherSymbol => self
                .data
                .weather_symbol
                .as_ref()
                .map(|v| Measurement::from_text(field, Some(v))),
            _ => None,
        };
        measurement.ok_or(MeteologixError::DataNotAvailable)
    }

    fn lookup(&self, field: FieldName) -> Measurement {
        self.measurement(field)
            .unwrap_or_else(|_| Measurement::unavailable(field))
    }

    pub fn temperature(&self) -> Temperature {
        Temperature(self.lookup(FieldName::AirTemperature))
    }

    pub fn temperature_max(&self) -> Temperature {
        Temperature(self.lookup(FieldName::AirTemperatureMax))
    }

    pub fn temperature_min(&self) -> Temperature {
        Temperature(self.lookup(FieldName::AirTemperatureMin))
    }

    /// Temperature 5 cm above ground.
    pub fn temperature_at_ground(&self) -> Temperature {
        Temperature(self.lookup(FieldName::TemperatureAtGround))
    }

    pub fn temperature_at_ground_min(&self) -> Temperature {
        Temperature(self.lookup(FieldName::TemperatureAtGroundMin))
    }

    pub fn dewpoint(&self) -> Temperature {
        Temperature(self.lookup(FieldName::Dewpoint))
    }

    pub fn humidity_relative(&self) -> Humidity {
        Humidity(self.lookup(FieldName::HumidityRelative))
    }

    pub fn pressure_msl(&self) -> Pressure {
        Pressure(self.lookup(FieldName::PressureMsl))
    }

    pub fn pressure_qfe(&self) -> Pressure {
        Pressure(self.lookup(FieldName::PressureQfe))
    }

    /// Precipitation summed over `timespan`.
    ///
    /// # Errors
    ///
    /// [`MeteologixError::TimespanUnsupported`] for [`Timespan::Current`]; stations only
    /// report aggregated windows.
    pub fn precipitation(&self, timespan: Timespan) -> Result<Precipitation, MeteologixError> {
        let field = match timespan {
            Timespan::TenMinutes => FieldName::Precipitation10m,
            Timespan::OneHour => FieldName::Precipitation1h,
            Timespan::TwentyFourHours => FieldName::Precipitation24h,
            Timespan::Current => return Err(MeteologixError::TimespanUnsupported),
        };
        Ok(Precipitation(self.lookup(field)))
    }

    /// Global radiation summed over `timespan`. [`Timespan::Current`] is not supported.
    pub fn global_radiation(&self, timespan: Timespan) -> Result<Radiation, MeteologixError> {
        let field = match timespan {
            Timespan::TenMinutes => FieldName::GlobalRadiation10m,
            Timespan::OneHour => FieldName::GlobalRadiation1h,
            Timespan::TwentyFourHours => FieldName::GlobalRadiation24h,
            Timespan::Current => return Err(MeteologixError::TimespanUnsupported),
        };
        Ok(Radiation(self.lookup(field)))
    }

    pub fn wind_speed(&self) -> Speed {
        Speed(self.lookup(FieldName::WindSpeed))
    }

    pub fn wind_gust(&self) -> Speed {
        Speed(self.lookup(FieldName::WindGust))
    }

    pub fn wind_direction(&self) -> Direction {
        Direction(self.lookup(FieldName::WindDirection))
    }

    pub fn snow_height(&self) -> Height {
        Height(self.lookup(FieldName::SnowHeight))
    }

    /// Fresh snow, in metres.
    pub fn snow_amount(&self) -> Height {
        Height(self.lookup(FieldName::SnowAmount))
    }

    pub fn sunshine(&self) -> Duration {
        Duration(self.lookup(FieldName::Sunshine))
    }

    pub fn cloud_coverage(&self) -> Coverage {
        Coverage(self.lookup(FieldName::CloudCoverage))
    }

    pub fn weather_symbol(&self) -> Condition {
        Condition(self.lookup(FieldName::WeatherSymbol))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::quantities::Quantity;
    use crate::types::source::Source;

    const STATION: &str = r#"{
        "id": "H744",
        "name": "Koeln/Bonn",
        "alt": 92,
        "lat": 50.8659,
        "lon": 7.1427,
        "data": {
            "airTemperature": {"dateTime": "2023-05-23T06:50:00+00:00", "source": "observation", "value": 12.4},
            "airTemperature5cm": {"dateTime": "2023-05-23T06:50:00+00:00", "value": 10.9},
            "pressureMsl": {"dateTime": "2023-05-23T06:50:00+00:00", "value": 1021.7},
            "precipitation1h": {"dateTime": "2023-05-23T06:00:00+00:00", "value": 0.3},
            "snowHeight": {"dateTime": "2023-05-23T06:00:00+00:00", "value": 0.125},
            "sunshine": {"dateTime": "2023-05-23T06:00:00+00:00", "value": 0.75},
            "weatherSymbol": {"dateTime": "2023-05-23T06:50:00+00:00", "value": "rain"}
        }
    }"#;

    fn station() -> Observation {
        serde_json::from_str(STATION).unwrap()
    }

    #[test]
    fn test_header() {
        let obs = station();
        assert_eq!(obs.station_id, "H744");
        assert_eq!(obs.station_name, "Koeln/Bonn");
        assert_eq!(obs.altitude, Some(92));
    }

    #[test]
    fn test_keyed_measurement() {
        let obs = station();
        let m = obs.measurement(FieldName::AirTemperature).unwrap();
        assert_eq!(m.float_value(), 12.4);
        assert_eq!(m.source(), Source::Observation);

        let err = obs.measurement(FieldName::WindGust).unwrap_err();
        assert!(matches!(err, MeteologixError::DataNotAvailable));
        assert_eq!(err.to_string(), "data not available");

        assert!(obs.measurement(FieldName::Sunrise).is_err());
        assert_eq!(
            obs.measurement(FieldName::WeatherSymbol).unwrap().string_value(),
            "rain"
        );
    }

    #[test]
    fn test_views() {
        let obs = station();
        assert_eq!(obs.temperature_at_ground().to_string(), "10.9°C");
        assert_eq!(obs.pressure_msl().hpa(), 1021.7);
        assert_eq!(obs.snow_height().centi_meter(), 12.5);
        assert_eq!(
            obs.sunshine().duration(),
            chrono::TimeDelta::minutes(45)
        );
        assert!(!obs.wind_speed().is_available());
        assert_eq!(obs.weather_symbol().to_string(), "Rain");
    }

    #[test]
    fn test_precipitation_windows() {
        let obs = station();
        assert_eq!(obs.precipitation(Timespan::OneHour).unwrap().mm(), 0.3);
        assert!(!obs
            .precipitation(Timespan::TenMinutes)
            .unwrap()
            .is_available());
        let err = obs.precipitation(Timespan::Current).unwrap_err();
        assert_eq!(err.to_string(), "Timespan unsupported");
        assert!(obs.global_radiation(Timespan::Current).is_err());
    }
}
