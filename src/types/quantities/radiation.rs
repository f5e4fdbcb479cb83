use crate::types::measurement::Measurement;
use crate::types::quantities::Quantity;
use std::fmt;

/// Global radiation in kJ/m².
#[derive(Debug, Clone, PartialEq)]
pub struct Radiation(pub(crate) Measurement);

impl Quantity for Radiation {
    type Value = f64;

    fn measurement(&self) -> &Measurement {
        &self.0
    }

    fn value(&self) -> f64 {
        self.0.float_value()
    }
}

impl fmt::Display for Radiation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.format_float(|v| format!("{v:.0}kJ/m²")))
    }
}
