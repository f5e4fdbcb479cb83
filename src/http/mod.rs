//! HTTPS transport: one GET per call, with header setup, credential gating and
//! response classification (non-JSON, API error, decode error).

pub mod error;

use crate::config::ClientConfig;
use crate::error::MeteologixError;
use crate::http::error::{ApiError, HttpError};
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

const JSON_CONTENT_TYPE: &str = "application/json";
const API_KEY_HEADER: &str = "X-API-Key";

#[derive(Debug, Clone)]
pub(crate) struct HttpTransport {
    client: Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub(crate) fn new(config: ClientConfig) -> Result<Self, MeteologixError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)
                .map_err(|e| MeteologixError::InvalidHeader("Accept-Language", e))?,
        );
        if let Some(key) = &config.api_key {
            // Attached per request in `request`, only for API URLs.
            HeaderValue::from_str(key)
                .map_err(|e| MeteologixError::InvalidHeader(API_KEY_HEADER, e))?;
        }

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .min_tls_version(reqwest::tls::Version::TLS_1_2)
            .timeout(config.timeout)
            .build()
            .map_err(MeteologixError::ClientBuild)?;

        Ok(Self { client, config })
    }

    pub(crate) fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Whether credentials may be attached to a request for `url`.
    pub(crate) fn is_api_url(&self, url: &str) -> bool {
        url.strip_prefix(self.config.base_url())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(['/', '?']))
    }

    fn request(&self, url: &str, query: &[(&str, String)]) -> RequestBuilder {
        let mut request = self.client.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if !self.is_api_url(url) {
            return request;
        }
        if let Some(key) = &self.config.api_key {
            request = request.header(API_KEY_HEADER, key.as_str());
        } else if let Some((user, pass)) = self.config.basic_credentials() {
            request = request.basic_auth(
                urlencoding::encode(user).into_owned(),
                Some(urlencoding::encode(pass).into_owned()),
            );
        }
        request
    }

    /// Performs a GET request and decodes the JSON body into `T`.
    ///
    /// The body is always read to the end before the response is classified.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, HttpError> {
        debug!("GET {}", url);
        let response = self
            .request(url, query)
            .send()
            .await
            .map_err(|source| HttpError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(source) => {
                warn!("Failed to read response body from {}: {}", url, source);
                return Err(HttpError::Transport {
                    url: url.to_string(),
                    source,
                });
            }
        };

        if !content_type.starts_with(JSON_CONTENT_TYPE) {
            return Err(HttpError::NonJsonResponse {
                url: url.to_string(),
                content_type,
            });
        }

        if status.as_u16() >= 400 {
            let mut api_error: ApiError =
                serde_json::from_slice(&body).map_err(|source| HttpError::Decode {
                    url: url.to_string(),
                    source,
                })?;
            api_error.fill_from_status(status);
            return Err(HttpError::Api(api_error));
        }

        serde_json::from_slice(&body).map_err(|source| HttpError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(config: ClientConfig) -> HttpTransport {
        HttpTransport::new(config).unwrap()
    }

    #[test]
    fn test_api_url_gating() {
        let t = transport(
            ClientConfig::builder()
                .api_key("key")
                .api_base_url("https://api.example.com/v02/")
                .build(),
        );
        assert!(t.is_api_url("https://api.example.com/v02/current/1/2"));
        assert!(!t.is_api_url("https://nominatim.openstreetmap.org/search"));
        assert!(!t.is_api_url("https://api.example.com/other"));
    }

    #[test]
    fn test_api_url_gating_respects_path_boundary() {
        let t = transport(
            ClientConfig::builder()
                .api_key("key")
                .api_base_url("https://api.example.com/v02")
                .build(),
        );
        assert!(t.is_api_url("https://api.example.com/v02"));
        assert!(t.is_api_url("https://api.example.com/v02?units=metric"));
        assert!(t.is_api_url("https://api.example.com/v02/current/1/2"));
        assert!(!t.is_api_url("https://api.example.com/v02evil/current/1/2"));
        assert!(!t.is_api_url("https://api.example.com/v021"));

        let lookalike = t
            .request("https://api.example.com/v02evil/current/1/2", &[])
            .build()
            .unwrap();
        assert!(lookalike.headers().get(API_KEY_HEADER).is_none());
    }

    #[test]
    fn test_api_key_header_only_for_api_urls() {
        let t = transport(
            ClientConfig::builder()
                .api_key("key-123")
                .api_base_url("https://api.example.com/v02")
                .build(),
        );
        let api = t
            .request("https://api.example.com/v02/tools/astronomy/1/2", &[])
            .build()
            .unwrap();
        assert_eq!(api.headers().get(API_KEY_HEADER).unwrap(), "key-123");

        let geocoder = t
            .request("https://nominatim.openstreetmap.org/search", &[])
            .build()
            .unwrap();
        assert!(geocoder.headers().get(API_KEY_HEADER).is_none());
        assert!(geocoder.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_basic_auth_when_no_key() {
        let t = transport(
            ClientConfig::builder()
                .basic_user("user")
                .basic_pass("pass")
                .api_base_url("https://api.example.com/v02")
                .build(),
        );
        let request = t
            .request("https://api.example.com/v02/current/1/2", &[])
            .build()
            .unwrap();
        // base64("user:pass")
        assert_eq!(
            request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Basic dXNlcjpwYXNz"
        );
        assert!(request.headers().get(API_KEY_HEADER).is_none());
    }

    #[test]
    fn test_invalid_accept_language() {
        let result = HttpTransport::new(ClientConfig::builder().accept_language("de\n").build());
        assert!(matches!(
            result,
            Err(MeteologixError::InvalidHeader("Accept-Language", _))
        ));
    }
}
