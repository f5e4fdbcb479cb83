//! Defines the `ConditionType` enum, the closed vocabulary of weather symbols the API
//! reports (e.g. in the `weatherSymbol` field of current weather).

use serde::Deserialize;
use std::fmt;

/// A weather condition tag as reported by the API.
///
/// Wire values outside the known set map to [`ConditionType::Unknown`] instead of failing,
/// so new server-side labels don't break decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum ConditionType {
    Cloudy,
    Fog,
    FreezingRain,
    Overcast,
    PartlyCloudy,
    Rain,
    RainHeavy,
    Showers,
    ShowersHeavy,
    Snow,
    SnowHeavy,
    /// Mixed rain and snow.
    SnowRain,
    Sunshine,
    Thunderstorm,
    #[default]
    Unknown,
}

impl ConditionType {
    /// Every tag, in wire order.
    pub const ALL: [ConditionType; 15] = [
        ConditionType::Cloudy,
        ConditionType::Fog,
        ConditionType::FreezingRain,
        ConditionType::Overcast,
        ConditionType::PartlyCloudy,
        ConditionType::Rain,
        ConditionType::RainHeavy,
        ConditionType::Showers,
        ConditionType::ShowersHeavy,
        ConditionType::Snow,
        ConditionType::SnowHeavy,
        ConditionType::SnowRain,
        ConditionType::Sunshine,
        ConditionType::Thunderstorm,
        ConditionType::Unknown,
    ];

    /// Maps a wire tag such as `"partlycloudy"` to its variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use meteologix::ConditionType;
    ///
    /// assert_eq!(ConditionType::from_wire("snowrain"), ConditionType::SnowRain);
    /// assert_eq!(ConditionType::from_wire("snowrain").label(), "Sleet");
    /// assert_eq!(ConditionType::from_wire("hail"), ConditionType::Unknown);
    /// ```
    pub fn from_wire(value: &str) -> Self {
        match value {
            "cloudy" => ConditionType::Cloudy,
            "fog" => ConditionType::Fog,
            "freezingrain" => ConditionType::FreezingRain,
            "overcast" => ConditionType::Overcast,
            "partlycloudy" => ConditionType::PartlyCloudy,
            "rain" => ConditionType::Rain,
            "rainheavy" => ConditionType::RainHeavy,
            "showers" => ConditionType::Showers,
            "showersheavy" => ConditionType::ShowersHeavy,
            "snow" => ConditionType::Snow,
            "snowheavy" => ConditionType::SnowHeavy,
            "snowrain" => ConditionType::SnowRain,
            "sunshine" => ConditionType::Sunshine,
            "thunderstorm" => ConditionType::Thunderstorm,
            _ => ConditionType::Unknown,
        }
    }

    /// The tag as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionType::Cloudy => "cloudy",
            ConditionType::Fog => "fog",
            ConditionType::FreezingRain => "freezingrain",
            ConditionType::Overcast => "overcast",
            ConditionType::PartlyCloudy => "partlycloudy",
            ConditionType::Rain => "rain",
            ConditionType::RainHeavy => "rainheavy",
            ConditionType::Showers => "showers",
            ConditionType::ShowersHeavy => "showersheavy",
            ConditionType::Snow => "snow",
            ConditionType::SnowHeavy => "snowheavy",
            ConditionType::SnowRain => "snowrain",
            ConditionType::Sunshine => "sunshine",
            ConditionType::Thunderstorm => "thunderstorm",
            ConditionType::Unknown => "unknown",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ConditionType::Cloudy => "Cloudy",
            ConditionType::Fog => "Fog",
            ConditionType::FreezingRain => "Freezing rain",
            ConditionType::Overcast => "Overcast",
            ConditionType::PartlyCloudy => "Partly cloudy",
            ConditionType::Rain => "Rain",
            ConditionType::RainHeavy => "Heavy rain",
            ConditionType::Showers => "Showers",
            ConditionType::ShowersHeavy => "Heavy showers",
            ConditionType::Snow => "Snow",
            ConditionType::SnowHeavy => "Heavy snow",
            ConditionType::SnowRain => "Sleet",
            ConditionType::Sunshine => "Sunshine",
            ConditionType::Thunderstorm => "Thunderstorm",
            ConditionType::Unknown => "Unknown",
        }
    }
}

impl From<String> for ConditionType {
    fn from(value: String) -> Self {
        ConditionType::from_wire(&value)
    }
}

impl fmt::Display for ConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
