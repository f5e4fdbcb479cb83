//! This module provides the main entry point for the weather API client.
//! Every operation performs exactly one HTTPS GET (two for the `*_by_location` variants, which
//! resolve the place name first) and decodes the JSON body into a typed response record.

use crate::config::ClientConfig;
use crate::error::MeteologixError;
use crate::geolocation::{rank_candidates, GeoLocation};
use crate::http::HttpTransport;
use crate::stations::search::{rank_stations, validate_radius};
use crate::types::data_source::{ForecastDetails, ForecastTimeSteps};
use crate::types::station::{Station, StationList};
use crate::types::weather_data::astronomical_info::AstronomicalInfo;
use crate::types::weather_data::current_weather::CurrentWeather;
use crate::types::weather_data::forecast::WeatherForecast;
use crate::types::weather_data::observation::Observation;
use bon::bon;
use log::debug;

const METRIC_UNITS: &str = "metric";

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
///
/// # Examples
///
/// ```
/// use meteologix::LatLon;
///
/// let cologne = LatLon(50.9833, 6.9833);
/// assert_eq!(cologne.0, 50.9833); // Latitude
/// assert_eq!(cologne.1, 6.9833); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// The client for the weather API.
///
/// It holds an immutable [`ClientConfig`] and a pooled HTTPS client, and can be shared freely
/// between tasks: operations take `&self` and keep no state between calls.
///
/// # Examples
///
/// ```no_run
/// # use meteologix::{ClientConfig, LatLon, Meteologix, MeteologixError, Quantity};
/// # #[tokio::main]
/// # async fn main() -> Result<(), MeteologixError> {
/// let client = Meteologix::with_config(
///     ClientConfig::builder().api_key("my-secret-key").build(),
/// )?;
///
/// let current = client.current_weather(LatLon(50.9833, 6.9833)).await?;
/// println!("{} ({})", current.temperature(), current.weather_symbol());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Meteologix {
    transport: HttpTransport,
}

#[bon]
impl Meteologix {
    /// Creates a client with the default configuration and no credentials.
    ///
    /// # Errors
    ///
    /// Returns [`MeteologixError::ClientBuild`] if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, MeteologixError> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MeteologixError::InvalidHeader`] if the API key or `Accept-Language` value
    /// cannot be sent as a header, and [`MeteologixError::ClientBuild`] if the HTTP client
    /// cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self, MeteologixError> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        self.transport.config()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config().base_url(), path)
    }

    /// Fetches the current conditions at `location`, in metric units.
    pub async fn current_weather(
        &self,
        location: LatLon,
    ) -> Result<CurrentWeather, MeteologixError> {
        let url = self.endpoint(&format!("current/{}/{}", location.0, location.1));
        let weather = self
            .transport
            .get_json(&url, &[("units", METRIC_UNITS.to_string())])
            .await?;
        Ok(weather)
    }

    /// Fetches a forecast for `location`, in metric units.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The coordinate to forecast for.
    /// * `.details(ForecastDetails)`: Optional. Field set of each datapoint. Defaults to
    ///   [`ForecastDetails::Standard`].
    /// * `.time_steps(ForecastTimeSteps)`: Optional. Spacing of the datapoints. Defaults to
    ///   [`ForecastTimeSteps::OneHour`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use meteologix::{ForecastDetails, ForecastTimeSteps, LatLon, Meteologix, MeteologixError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), MeteologixError> {
    /// let client = Meteologix::new()?;
    /// let forecast = client
    ///     .forecast()
    ///     .location(LatLon(52.52, 13.40))
    ///     .details(ForecastDetails::Advanced)
    ///     .time_steps(ForecastTimeSteps::ThreeHours)
    ///     .call()
    ///     .await?;
    /// println!("{} datapoints from run {}", forecast.data.len(), forecast.run);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn forecast(
        &self,
        location: LatLon,
        details: Option<ForecastDetails>,
        time_steps: Option<ForecastTimeSteps>,
    ) -> Result<WeatherForecast, MeteologixError> {
        let details = details.unwrap_or_default();
        let time_steps = time_steps.unwrap_or_default();
        let url = self.endpoint(&format!(
            "forecast/{}/{}/{}/{}",
            location.0,
            location.1,
            details.path_segment(),
            time_steps.path_segment()
        ));
        let forecast = self
            .transport
            .get_json(&url, &[("units", METRIC_UNITS.to_string())])
            .await?;
        Ok(forecast)
    }

    /// Fetches sun and moon ephemerides for `location`, for up to 14 days from today.
    pub async fn astronomical_info(
        &self,
        location: LatLon,
    ) -> Result<AstronomicalInfo, MeteologixError> {
        let url = self.endpoint(&format!("tools/astronomy/{}/{}", location.0, location.1));
        Ok(self.transport.get_json(&url, &[]).await?)
    }

    /// Fetches the most recent measurements of the station `station_id`.
    pub async fn station_observation_latest(
        &self,
        station_id: &str,
    ) -> Result<Observation, MeteologixError> {
        let url = self.endpoint(&format!(
            "station/{}/observations/latest",
            urlencoding::encode(station_id)
        ));
        Ok(self.transport.get_json(&url, &[]).await?)
    }

    /// Lists stations within `radius_km` of `location`, closest first.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** The search centre.
    /// * `.radius_km(u32)`: **Required.** Search radius in kilometres; at least 1.
    ///
    /// # Errors
    ///
    /// Returns [`MeteologixError::RadiusTooSmall`] for a radius below 1 km, before any request
    /// is made. Returns [`MeteologixError::NoStationFound`] if the directory lists no station.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use meteologix::{LatLon, Meteologix, MeteologixError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), MeteologixError> {
    /// let client = Meteologix::new()?;
    /// let stations = client
    ///     .station_search()
    ///     .location(LatLon(50.9833, 6.9833))
    ///     .radius_km(25)
    ///     .call()
    ///     .await?;
    /// for station in &stations {
    ///     println!("{} {} ({:.1} km)", station.id, station.name, station.distance);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn station_search(
        &self,
        location: LatLon,
        radius_km: u32,
    ) -> Result<Vec<Station>, MeteologixError> {
        validate_radius(radius_km)?;
        let url = self.endpoint(&format!("station/search/{}/{}", location.0, location.1));
        let list: StationList = self
            .transport
            .get_json(&url, &[("radius", radius_km.to_string())])
            .await?;
        rank_stations(list.stations)
    }

    /// Resolves a place name to all gazetteer candidates, most important first.
    ///
    /// # Errors
    ///
    /// Returns [`MeteologixError::CityNotFound`] if the gazetteer has no match.
    pub async fn geo_locations(&self, name: &str) -> Result<Vec<GeoLocation>, MeteologixError> {
        let candidates: Vec<GeoLocation> = self
            .transport
            .get_json(
                &self.config().geocoder_url,
                &[("format", "json".to_string()), ("q", name.to_string())],
            )
            .await?;
        debug!("Gazetteer returned {} candidates for '{}'", candidates.len(), name);
        rank_candidates(candidates)
    }

    /// Resolves a place name to its most important gazetteer candidate.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use meteologix::{Meteologix, MeteologixError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), MeteologixError> {
    /// let client = Meteologix::new()?;
    /// let cologne = client.geo_location("Cologne, Germany").await?;
    /// println!("{}: {}, {}", cologne.display_name, cologne.latitude, cologne.longitude);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn geo_location(&self, name: &str) -> Result<GeoLocation, MeteologixError> {
        self.geo_locations(name)
            .await?
            .into_iter()
            .next()
            .ok_or(MeteologixError::CityNotFound)
    }

    pub async fn current_weather_by_location(
        &self,
        name: &str,
    ) -> Result<CurrentWeather, MeteologixError> {
        let place = self.geo_location(name).await?;
        self.current_weather(place.lat_lon()).await
    }

    /// Like [`Meteologix::forecast`], for a place name resolved through the gazetteer.
    #[builder]
    pub async fn forecast_by_location(
        &self,
        name: &str,
        details: Option<ForecastDetails>,
        time_steps: Option<ForecastTimeSteps>,
    ) -> Result<WeatherForecast, MeteologixError> {
        let place = self.geo_location(name).await?;
        self.forecast()
            .location(place.lat_lon())
            .maybe_details(details)
            .maybe_time_steps(time_steps)
            .call()
            .await
    }

    pub async fn astronomical_info_by_location(
        &self,
        name: &str,
    ) -> Result<AstronomicalInfo, MeteologixError> {
        let place = self.geo_location(name).await?;
        self.astronomical_info(place.lat_lon()).await
    }

    /// Like [`Meteologix::station_search`], for a place name resolved through the gazetteer.
    /// The radius is validated before the name is resolved.
    #[builder]
    pub async fn station_search_by_location(
        &self,
        name: &str,
        radius_km: u32,
    ) -> Result<Vec<Station>, MeteologixError> {
        validate_radius(radius_km)?;
        let place = self.geo_location(name).await?;
        self.station_search()
            .location(place.lat_lon())
            .radius_km(radius_km)
            .call()
            .await
    }
}
