use crate::types::measurement::Measurement;
use crate::types::quantities::Quantity;
use std::fmt;

const KNOTS_PER_MPS: f64 = 1.9438444924;
const KMH_PER_MPS: f64 = 3.6;
const MPH_PER_MPS: f64 = 2.236936;

// Upper bounds (m/s) of Beaufort forces 0..=11; anything faster is force 12.
const BEAUFORT_LIMITS: [f64; 12] = [
    0.3, 1.6, 3.4, 5.5, 8.0, 10.8, 13.9, 17.2, 20.8, 24.5, 28.5, 32.7,
];

/// A speed in metres per second (wind speed, wind gust).
#[derive(Debug, Clone, PartialEq)]
pub struct Speed(pub(crate) Measurement);

impl Speed {
    /// Metres per second, as reported.
    pub fn meters_per_second(&self) -> f64 {
        self.0.float_value()
    }

    /// Knots, unrounded.
    pub fn knots(&self) -> f64 {
        self.0.float_value() * KNOTS_PER_MPS
    }

    /// Kilometres per hour, unrounded.
    pub fn kmh(&self) -> f64 {
        self.0.float_value() * KMH_PER_MPS
    }

    /// Miles per hour, unrounded.
    pub fn mph(&self) -> f64 {
        self.0.float_value() * MPH_PER_MPS
    }

    /// Whole knots, e.g. `"14kn"`.
    pub fn knots_string(&self) -> String {
        self.0.format_float(|v| format!("{:.0}kn", v * KNOTS_PER_MPS))
    }

    pub fn kmh_string(&self) -> String {
        self.0.format_float(|v| format!("{:.1}km/h", v * KMH_PER_MPS))
    }

    pub fn mph_string(&self) -> String {
        self.0.format_float(|v| format!("{:.1}mi/h", v * MPH_PER_MPS))
    }

    /// Beaufort force (0 to 12), or `None` when unavailable.
    pub fn beaufort(&self) -> Option<u8> {
        if !self.0.is_available() {
            return None;
        }
        let v = self.0.float_value();
        let force = BEAUFORT_LIMITS
            .iter()
            .position(|limit| v < *limit)
            .unwrap_or(BEAUFORT_LIMITS.len());
        Some(force as u8)
    }
}

impl Quantity for Speed {
    type Value = f64;

    fn measurement(&self) -> &Measurement {
        &self.0
    }

    fn value(&self) -> f64 {
        self.0.float_value()
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.format_float(|v| format!("{v:.1}m/s")))
    }
}
