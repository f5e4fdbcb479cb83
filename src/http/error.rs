use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Structured error body returned by the API for HTTP status 400 and above.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Error)]
#[error("API request failed with status {status}: {detail}")]
pub struct ApiError {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "type")]
    pub error_type: String,
}

impl ApiError {
    /// Fills a missing status code and an empty detail from the HTTP response itself.
    pub(crate) fn fill_from_status(&mut self, status: StatusCode) {
        if self.status == 0 {
            self.status = status.as_u16();
        }
        if self.detail.is_empty() {
            self.detail = match status.canonical_reason() {
                Some(reason) => format!("{} {}", status.as_u16(), reason),
                None => status.as_u16().to_string(),
            };
        }
    }
}

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Network request failed for {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Non-JSON response from {url} (content type '{content_type}')")]
    NonJsonResponse { url: String, content_type: String },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Failed to decode JSON response from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}
