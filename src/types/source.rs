//! Provenance of a data point.

use serde::Deserialize;
use std::fmt;

/// Where a value reported by the API comes from.
///
/// Parsing is case-insensitive and never fails: anything unrecognized becomes
/// [`Source::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Source {
    /// Measured at a station.
    Observation,
    /// Produced by a model analysis of recent observations.
    Analysis,
    /// Produced by a forecast model run.
    Forecast,
    /// A blend of several of the above.
    Mixed,
    #[default]
    Unknown,
}

impl Source {
    /// Parses a wire string, falling back to [`Source::Unknown`].
    pub fn from_wire(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "observation" => Source::Observation,
            "analysis" => Source::Analysis,
            "forecast" => Source::Forecast,
            "mixed" => Source::Mixed,
            _ => Source::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Observation => "observation",
            Source::Analysis => "analysis",
            Source::Forecast => "forecast",
            Source::Mixed => "mixed",
            Source::Unknown => "unknown",
        }
    }
}

impl From<String> for Source {
    fn from(value: String) -> Self {
        Source::from_wire(&value)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
