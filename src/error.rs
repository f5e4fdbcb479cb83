use crate::http::error::HttpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeteologixError {
    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Invalid value for header '{0}'")]
    InvalidHeader(&'static str, #[source] reqwest::header::InvalidHeaderValue),

    #[error("city not found")]
    CityNotFound,

    #[error("no station found")]
    NoStationFound,

    #[error("radius too small")]
    RadiusTooSmall,

    #[error("Unsupported direction")]
    UnsupportedDirection,

    #[error("Timespan unsupported")]
    TimespanUnsupported,

    #[error("data not available")]
    DataNotAvailable,
}

impl MeteologixError {
    /// The structured API error, if the server answered with one.
    pub fn api_error(&self) -> Option<&crate::ApiError> {
        match self {
            MeteologixError::Http(HttpError::Api(e)) => Some(e),
            _ => None,
        }
    }
}
