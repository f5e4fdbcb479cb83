//! City name to coordinates, via a Nominatim-compatible gazetteer.
//!
//! The gazetteer is queried anonymously with `format=json&q=<name>`. Candidates are ranked
//! by descending importance.

use crate::error::MeteologixError;
use crate::LatLon;
use ordered_float::OrderedFloat;
use serde::{de, Deserialize, Deserializer};

/// A gazetteer candidate for a place name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeoLocation {
    #[serde(default)]
    pub place_id: u64,
    #[serde(default)]
    pub display_name: String,
    #[serde(rename = "lat", deserialize_with = "f64_from_str")]
    pub latitude: f64,
    #[serde(rename = "lon", deserialize_with = "f64_from_str")]
    pub longitude: f64,
    /// Gazetteer ranking; higher is more relevant.
    #[serde(default)]
    pub importance: f64,
}

impl GeoLocation {
    pub fn lat_lon(&self) -> LatLon {
        LatLon(self.latitude, self.longitude)
    }
}

// The gazetteer sends coordinates as strings, e.g. "50.938361".
fn f64_from_str<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim()
        .parse()
        .map_err(|e| de::Error::custom(format!("invalid coordinate '{raw}': {e}")))
}

/// Sorts candidates most important first. An empty list means the name is unknown.
pub(crate) fn rank_candidates(
    mut candidates: Vec<GeoLocation>,
) -> Result<Vec<GeoLocation>, MeteologixError> {
    if candidates.is_empty() {
        return Err(MeteologixError::CityNotFound);
    }
    candidates.sort_by_key(|c| std::cmp::Reverse(OrderedFloat(c.importance)));
    Ok(candidates)
}
