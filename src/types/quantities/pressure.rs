use crate::types::measurement::Measurement;
use crate::types::quantities::Quantity;
use std::fmt;

/// Air pressure in hectopascals.
#[derive(Debug, Clone, PartialEq)]
pub struct Pressure(pub(crate) Measurement);

impl Pressure {
    pub fn hpa(&self) -> f64 {
        self.0.float_value()
    }
}

impl Quantity for Pressure {
    type Value = f64;

    fn measurement(&self) -> &Measurement {
        &self.0
    }

    fn value(&self) -> f64 {
        self.0.float_value()
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.format_float(|v| format!("{v:.1}hPa")))
    }
}
