//! Response of the forecast endpoint and the nearest-datapoint lookup over it.

use crate::types::measurement::{FieldName, Measurement};
use crate::types::nullable::Nullable;
use crate::types::precision::Precision;
use crate::types::quantities::condition::Condition;
use crate::types::quantities::coverage::Coverage;
use crate::types::quantities::direction::Direction;
use crate::types::quantities::duration::Duration;
use crate::types::quantities::humidity::Humidity;
use crate::types::quantities::precipitation::Precipitation;
use crate::types::quantities::pressure::Pressure;
use crate::types::quantities::radiation::Radiation;
use crate::types::quantities::speed::Speed;
use crate::types::quantities::temperature::Temperature;
use crate::types::source::Source;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::Deserialize;

/// A forecast run for one coordinate: a time-ordered list of datapoints at a fixed step.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherForecast {
    #[serde(rename = "alt", default)]
    pub altitude: Option<i32>,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    #[serde(default)]
    pub data: Vec<ForecastDatapoint>,
    #[serde(rename = "precision", default)]
    pub resolution: Precision,
    pub run: DateTime<FixedOffset>,
    #[serde(rename = "timeZone", default)]
    pub time_zone: String,
    #[serde(rename = "systemOfUnits", default)]
    pub unit_system: String,
}

/// One forecast step. Only `temperature` is always present; the rest depends on the
/// requested detail level.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDatapoint {
    /// Valid time of this step.
    #[serde(rename = "dateTime")]
    pub timestamp: DateTime<FixedOffset>,
    #[serde(default)]
    pub is_day: bool,
    /// Dew point in °C.
    #[serde(default)]
    pub dewpoint: Nullable<f64>,
    /// Pressure reduced to mean sea level, in hPa.
    #[serde(rename = "pressureMsl", default)]
    pub pressure_at_sea_level: Nullable<f64>,
    /// Air temperature in °C.
    #[serde(rename = "temp")]
    pub temperature: f64,
    /// Relative humidity in percent.
    #[serde(default)]
    pub humidity_relative: Nullable<f64>,
    /// Cloud coverage in percent.
    #[serde(default)]
    pub cloud_coverage: Nullable<f64>,
    /// Precipitation over the step, in mm.
    #[serde(rename = "prec", default)]
    pub precipitation: Nullable<f64>,
    /// Mean wind speed in m/s.
    #[serde(default)]
    pub wind_speed: Nullable<f64>,
    /// Strongest gust in m/s.
    #[serde(default)]
    pub wind_gust: Nullable<f64>,
    /// Direction the wind blows from, in degrees.
    #[serde(default)]
    pub wind_direction: Nullable<f64>,
    /// Condition keyword, e.g. `"partlycloudy"`.
    #[serde(default)]
    pub weather_symbol: Nullable<String>,
    /// Sunshine over the step, in hours.
    #[serde(default)]
    pub sunshine: Nullable<f64>,
    /// Global radiation over the step, in kJ/m².
    #[serde(default)]
    pub global_radiation: Nullable<f64>,
}

/// Index of the datapoint closest in time to `target`; ties go to the earlier index.
pub(crate) fn nearest_index(
    datapoints: &[ForecastDatapoint],
    target: DateTime<Utc>,
) -> Option<usize> {
    let mut best: Option<(usize, chrono::TimeDelta)> = None;
    for (i, datapoint) in datapoints.iter().enumerate() {
        let distance = (datapoint.timestamp.with_timezone(&Utc) - target).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((i, distance)),
        }
    }
    best.map(|(i, _)| i)
}

impl WeatherForecast {
    /// The datapoint closest in time to `t`.
    ///
    /// An empty forecast yields a [`ForecastPoint`] whose accessors all report
    /// "not available".
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use meteologix::{Meteologix, LatLon, MeteologixError, ForecastTimeSteps, Quantity};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), MeteologixError> {
    /// let client = Meteologix::new()?;
    /// let forecast = client
    ///     .forecast()
    ///     .location(LatLon(50.9833, 6.9833))
    ///     .time_steps(ForecastTimeSteps::OneHour)
    ///     .call()
    ///     .await?;
    ///
    /// let noon = forecast.at(chrono::Utc::now());
    /// println!("{} at {}", noon.temperature(), noon.date_time());
    /// # Ok(())
    /// # }
    /// ```
    pub fn at<Tz: TimeZone>(&self, t: DateTime<Tz>) -> ForecastPoint<'_> {
        let index = nearest_index(&self.data, t.with_timezone(&Utc));
        ForecastPoint {
            datapoint: index.map(|i| &self.data[i]),
        }
    }

    /// IANA time zone of the location, if the name is recognised.
    pub fn time_zone(&self) -> Option<chrono_tz::Tz> {
        self.time_zone.parse().ok()
    }
}

/// The forecast datapoint selected by [`WeatherForecast::at`], exposed through quantity views.
#[derive(Debug, Clone, Copy)]
pub struct ForecastPoint<'a> {
    datapoint: Option<&'a ForecastDatapoint>,
}

impl<'a> ForecastPoint<'a> {
    pub fn is_available(&self) -> bool {
        self.datapoint.is_some()
    }

    pub fn datapoint(&self) -> Option<&'a ForecastDatapoint> {
        self.datapoint
    }

    /// Timestamp of the selected datapoint, or the zero instant.
    pub fn date_time(&self) -> DateTime<Utc> {
        self.datapoint
            .map(|d| d.timestamp.with_timezone(&Utc))
            .unwrap_or_default()
    }

    pub fn is_day(&self) -> bool {
        self.datapoint.is_some_and(|d| d.is_day)
    }

    fn float(
        &self,
        field: FieldName,
        select: impl Fn(&ForecastDatapoint) -> Option<f64>,
    ) -> Measurement {
        match self.datapoint.and_then(|d| select(d).map(|v| (d, v))) {
            Some((d, v)) => {
                Measurement::float(field, d.timestamp.with_timezone(&Utc), Source::Forecast, v)
            }
            None => Measurement::unavailable(field),
        }
    }

    pub fn temperature(&self) -> Temperature {
        Temperature(self.float(FieldName::AirTemperature, |d| Some(d.temperature)))
    }

    pub fn dewpoint(&self) -> Temperature {
        Temperature(self.float(FieldName::Dewpoint, |d| d.dewpoint.value()))
    }

    pub fn pressure_msl(&self) -> Pressure {
        Pressure(self.float(FieldName::PressureMsl, |d| d.pressure_at_sea_level.value()))
    }

    pub fn humidity_relative(&self) -> Humidity {
        Humidity(self.float(FieldName::HumidityRelative, |d| d.humidity_relative.value()))
    }

    pub fn cloud_coverage(&self) -> Coverage {
        Coverage(self.float(FieldName::CloudCoverage, |d| d.cloud_coverage.value()))
    }

    pub fn precipitation(&self) -> Precipitation {
        Precipitation(self.float(FieldName::Precipitation, |d| d.precipitation.value()))
    }

    pub fn wind_speed(&self) -> Speed {
        Speed(self.float(FieldName::WindSpeed, |d| d.wind_speed.value()))
    }

    pub fn wind_gust(&self) -> Speed {
        Speed(self.float(FieldName::WindGust, |d| d.wind_gust.value()))
    }

    pub fn wind_direction(&self) -> Direction {
        Direction(self.float(FieldName::WindDirection, |d| d.wind_direction.value()))
    }

    pub fn sunshine(&self) -> Duration {
        Duration(self.float(FieldName::Sunshine, |d| d.sunshine.value()))
    }

    pub fn global_radiation(&self) -> Radiation {
        Radiation(self.float(FieldName::GlobalRadiation, |d| d.global_radiation.value()))
    }

    pub fn weather_symbol(&self) -> Condition {
        let measurement = self
            .datapoint
            .and_then(|d| d.weather_symbol.get().map(|s| (d, s)))
            .map(|(d, s)| {
                Measurement::text(
                    FieldName::WeatherSymbol,
                    d.timestamp.with_timezone(&Utc),
                    Source::Forecast,
                    s.as_str(),
                )
            })
            .unwrap_or_else(|| Measurement::unavailable(FieldName::WeatherSymbol));
        Condition(measurement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::quantities::Quantity;
    use crate::types::weather_condition::ConditionType;

    fn hourly_forecast() -> WeatherForecast {
        serde_json::from_str(
            r#"{
                "lat": 50.9833, "lon": 6.9833, "alt": 53,
                "precision": "HIGH",
                "run": "2024-08-13T06:00:00Z",
                "timeZone": "Europe/Berlin",
                "systemOfUnits": "metric",
                "data": [
                    {"dateTime": "2024-08-13T11:00:00Z", "isDay": true, "temp": 24.1, "dewpoint": 14.2, "pressureMsl": null},
                    {"dateTime": "2024-08-13T12:00:00Z", "isDay": true, "temp": 25.3, "dewpoint": null, "pressureMsl": 1016.4,
                     "windDirection": 47, "weatherSymbol": "partlycloudy", "cloudCoverage": 40},
                    {"dateTime": "2024-08-13T13:00:00Z", "isDay": true, "temp": 26.0}
                ]
            }"#,
        )
        .unwrap()
    }

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_decode_header() {
        let forecast = hourly_forecast();
        assert_eq!(forecast.resolution, Precision::High);
        assert_eq!(forecast.altitude, Some(53));
        assert_eq!(forecast.unit_system, "metric");
        assert_eq!(forecast.data.len(), 3);
        assert!(forecast.data[0].pressure_at_sea_level.is_absent());
        assert!(forecast.data[2].dewpoint.is_absent());
    }

    #[test]
    fn test_nearest_point() {
        let forecast = hourly_forecast();
        let point = forecast.at(utc("2024-08-13T12:22:29Z"));
        assert!(point.is_available());
        assert_eq!(point.date_time(), utc("2024-08-13T12:00:00Z"));
        assert_eq!(point.temperature().celsius(), 25.3);
        assert_eq!(point.temperature().source(), Source::Forecast);
    }

    #[test]
    fn test_tie_goes_to_earlier_datapoint() {
        let forecast = hourly_forecast();
        let point = forecast.at(utc("2024-08-13T12:30:00Z"));
        assert_eq!(point.date_time(), utc("2024-08-13T12:00:00Z"));
    }

    #[test]
    fn test_exact_timestamps_select_themselves() {
        let forecast = hourly_forecast();
        for datapoint in &forecast.data {
            let point = forecast.at(datapoint.timestamp);
            assert_eq!(point.datapoint(), Some(datapoint));
        }
    }

    #[test]
    fn test_targets_outside_the_range() {
        let forecast = hourly_forecast();
        assert_eq!(
            forecast.at(utc("2020-01-01T00:00:00Z")).date_time(),
            utc("2024-08-13T11:00:00Z")
        );
        assert_eq!(
            forecast.at(utc("2030-01-01T00:00:00Z")).date_time(),
            utc("2024-08-13T13:00:00Z")
        );
    }

    #[test]
    fn test_optional_fields() {
        let forecast = hourly_forecast();
        let point = forecast.at(utc("2024-08-13T12:00:00Z"));
        assert!(!point.dewpoint().is_available());
        assert_eq!(point.pressure_msl().to_string(), "1016.4hPa");
        assert_eq!(point.wind_direction().direction(), "NE");
        assert_eq!(point.weather_symbol().condition(), ConditionType::PartlyCloudy);
        assert_eq!(point.cloud_coverage().description(), "Partly cloudy");
        assert!(!point.wind_speed().is_available());
    }

    #[test]
    fn test_empty_forecast_is_unavailable() {
        let mut forecast = hourly_forecast();
        forecast.data.clear();
        let point = forecast.at(Utc::now());
        assert!(!point.is_available());
        assert!(!point.is_day());
        assert!(point.temperature().value().is_nan());
        assert_eq!(point.weather_symbol().value(), "Data unavailable");
        assert_eq!(point.date_time(), DateTime::<Utc>::default());
    }
}
