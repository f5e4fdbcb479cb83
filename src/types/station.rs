//! Defines the station record returned by the station directory search.

use crate::types::precision::Precision;
use serde::Deserialize;

/// A weather station listed by the station search endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// The station identifier, usable with [`crate::Meteologix::station_observation_latest`].
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Elevation above sea level in metres, if known.
    #[serde(rename = "alt", default)]
    pub altitude: Option<i32>,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    /// Distance from the queried coordinate, in kilometres.
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub precision: Precision,
    /// Whether the station delivered data recently.
    #[serde(default)]
    pub recently_active: bool,
    #[serde(rename = "type", default)]
    pub station_type: Option<String>,
}

/// Envelope of the station search response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct StationList {
    #[serde(default)]
    pub stations: Vec<Station>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_station() {
        let list: StationList = serde_json::from_str(
            r#"{"stations": [{
                "id": "H744",
                "name": "Koeln/Bonn",
                "lat": 50.8659,
                "lon": 7.1427,
                "alt": 92,
                "distance": 14.2,
                "precision": "SUPER_HIGH",
                "recentlyActive": true,
                "type": "synop"
            }, {
                "id": "A123",
                "lat": 50.9,
                "lon": 7.0,
                "precision": "fine"
            }]}"#,
        )
        .unwrap();
        let first = &list.stations[0];
        assert_eq!(first.precision, Precision::SuperHigh);
        assert!(first.recently_active);
        assert_eq!(first.station_type.as_deref(), Some("synop"));

        let second = &list.stations[1];
        assert_eq!(second.precision, Precision::Unknown);
        assert_eq!(second.altitude, None);
        assert!(!second.recently_active);
    }
}
