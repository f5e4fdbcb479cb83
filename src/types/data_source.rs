//! Defines the request parameters that select forecast granularity and the aggregation
//! windows for accumulated quantities (precipitation, radiation).

use std::fmt;

/// Level of detail requested from the forecast endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ForecastDetails {
    /// Temperature, dewpoint, pressure and the day flag.
    #[default]
    Standard,
    /// The standard set plus wind, clouds, precipitation and radiation.
    Advanced,
}

impl ForecastDetails {
    pub(crate) fn path_segment(&self) -> &'static str {
        match self {
            ForecastDetails::Standard => "standard",
            ForecastDetails::Advanced => "advanced",
        }
    }
}

/// Allows formatting a `ForecastDetails` variant using its `path_segment`.
impl fmt::Display for ForecastDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

/// Step size between consecutive forecast datapoints.
///
/// # Examples
///
/// ```
/// use meteologix::ForecastTimeSteps;
///
/// assert_eq!(ForecastTimeSteps::ThreeHours.to_string(), "3h");
/// assert_eq!(ForecastTimeSteps::default().to_string(), "1h");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ForecastTimeSteps {
    #[default]
    OneHour,
    ThreeHours,
    SixHours,
}

impl ForecastTimeSteps {
    pub(crate) fn path_segment(&self) -> &'static str {
        match self {
            ForecastTimeSteps::OneHour => "1h",
            ForecastTimeSteps::ThreeHours => "3h",
            ForecastTimeSteps::SixHours => "6h",
        }
    }

    /// Step length as a duration.
    pub fn step(&self) -> chrono::TimeDelta {
        match self {
            ForecastTimeSteps::OneHour => chrono::TimeDelta::hours(1),
            ForecastTimeSteps::ThreeHours => chrono::TimeDelta::hours(3),
            ForecastTimeSteps::SixHours => chrono::TimeDelta::hours(6),
        }
    }
}

impl fmt::Display for ForecastTimeSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

/// Aggregation window for accumulated values such as precipitation or global radiation.
///
/// Not every endpoint carries every window; asking for one that isn't reported yields
/// [`crate::MeteologixError::TimespanUnsupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timespan {
    /// The most recent value, whatever window the API aggregated it over.
    Current,
    TenMinutes,
    OneHour,
    TwentyFourHours,
}

impl fmt::Display for Timespan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Timespan::Current => "current",
            Timespan::TenMinutes => "10m",
            Timespan::OneHour => "1h",
            Timespan::TwentyFourHours => "24h",
        };
        f.write_str(label)
    }
}
