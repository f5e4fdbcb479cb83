use crate::error::MeteologixError;
use crate::types::station::Station;
use ordered_float::OrderedFloat;

/// Smallest radius, in kilometres, accepted by the station search.
pub const MIN_SEARCH_RADIUS_KM: u32 = 1;

pub(crate) fn validate_radius(radius_km: u32) -> Result<(), MeteologixError> {
    if radius_km < MIN_SEARCH_RADIUS_KM {
        return Err(MeteologixError::RadiusTooSmall);
    }
    Ok(())
}

/// Orders stations closest first. Stations at equal distance keep the server's order.
pub(crate) fn rank_stations(mut stations: Vec<Station>) -> Result<Vec<Station>, MeteologixError> {
    if stations.is_empty() {
        return Err(MeteologixError::NoStationFound);
    }
    stations.sort_by_key(|s| OrderedFloat(s.distance));
    Ok(stations)
}
