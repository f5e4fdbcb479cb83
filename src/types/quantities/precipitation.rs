use crate::types::measurement::Measurement;
use crate::types::quantities::Quantity;
use std::fmt;

/// Accumulated precipitation in millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct Precipitation(pub(crate) Measurement);

impl Precipitation {
    pub fn mm(&self) -> f64 {
        self.0.float_value()
    }
}

impl Quantity for Precipitation {
    type Value = f64;

    fn measurement(&self) -> &Measurement {
        &self.0
    }

    fn value(&self) -> f64 {
        self.0.float_value()
    }
}

impl fmt::Display for Precipitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.format_float(|v| format!("{v:.1}mm")))
    }
}
