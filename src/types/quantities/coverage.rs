use crate::types::measurement::{Measurement, DATA_UNAVAILABLE};
use crate::types::quantities::Quantity;
use std::fmt;

/// Labels a cloud-coverage percentage.
///
/// Each band includes its upper bound: 10 is still "Clear sky", 10.0001 is "Mostly clear".
/// Values outside 0..=100 are "Unknown".
pub fn coverage_description(percent: f64) -> &'static str {
    if !(0.0..=100.0).contains(&percent) {
        return "Unknown";
    }
    match percent {
        p if p <= 10.0 => "Clear sky",
        p if p <= 30.0 => "Mostly clear",
        p if p <= 50.0 => "Partly cloudy",
        p if p <= 70.0 => "Mostly cloudy",
        p if p <= 90.0 => "Overcast",
        _ => "Very cloudy",
    }
}

/// Cloud coverage in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct Coverage(pub(crate) Measurement);

impl Coverage {
    pub fn description(&self) -> &'static str {
        if !self.0.is_available() {
            return DATA_UNAVAILABLE;
        }
        coverage_description(self.0.float_value())
    }
}

impl Quantity for Coverage {
    type Value = f64;

    fn measurement(&self) -> &Measurement {
        &self.0
    }

    fn value(&self) -> f64 {
        self.0.float_value()
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.format_float(|v| format!("{v:.0}%")))
    }
}
