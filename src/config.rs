//! Client configuration: credentials, headers, endpoints and timeout.

use bon::Builder;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.kachelmannwetter.com/v02";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "en";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The default `User-Agent`, naming this library, its version and the host OS.
pub fn default_user_agent() -> String {
    format!(
        "meteologix/{} ({})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}

/// Settings for a [`crate::Meteologix`] client. Immutable once the client is built.
///
/// Authentication: an API key, when set, is sent as `X-API-Key` and takes precedence over
/// HTTP Basic credentials. Credentials are only attached to requests under `api_base_url`;
/// the geocoder is always queried anonymously.
///
/// # Examples
///
/// ```
/// use meteologix::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::builder()
///     .api_key("my-secret-key")
///     .accept_language("de")
///     .timeout(Duration::from_secs(5))
///     .build();
///
/// assert_eq!(config.accept_language, "de");
/// assert_eq!(config.api_base_url, "https://api.kachelmannwetter.com/v02");
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ClientConfig {
    #[builder(into)]
    pub api_key: Option<String>,

    #[builder(into)]
    pub basic_user: Option<String>,

    #[builder(into)]
    pub basic_pass: Option<String>,

    /// Value of the `Accept-Language` header.
    #[builder(into, default = DEFAULT_ACCEPT_LANGUAGE.to_string())]
    pub accept_language: String,

    #[builder(into, default = default_user_agent())]
    pub user_agent: String,

    /// Root of all weather endpoints. Override this to point at a test server.
    #[builder(into, default = DEFAULT_API_BASE_URL.to_string())]
    pub api_base_url: String,

    /// Search endpoint of the gazetteer used for name → coordinates lookups.
    #[builder(into, default = DEFAULT_GEOCODER_URL.to_string())]
    pub geocoder_url: String,

    /// Per-request timeout.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig::builder().build()
    }
}

impl ClientConfig {
    /// Basic credentials, if both user and password are configured.
    pub(crate) fn basic_credentials(&self) -> Option<(&str, &str)> {
        match (&self.basic_user, &self.basic_pass) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }

    /// Base URL without a trailing slash, so endpoint paths can be appended directly.
    pub(crate) fn base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}
