use crate::types::measurement::Measurement;
use crate::types::quantities::Quantity;
use std::fmt;

/// Air density in kg/m³.
#[derive(Debug, Clone, PartialEq)]
pub struct Density(pub(crate) Measurement);

impl Quantity for Density {
    type Value = f64;

    fn measurement(&self) -> &Measurement {
        &self.0
    }

    fn value(&self) -> f64 {
        self.0.float_value()
    }
}

impl fmt::Display for Density {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.format_float(|v| format!("{v:.1}kg/m³")))
    }
}
