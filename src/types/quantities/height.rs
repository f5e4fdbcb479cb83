use crate::types::measurement::Measurement;
use crate::types::quantities::Quantity;
use std::fmt;

/// A height in metres (e.g. snow height).
#[derive(Debug, Clone, PartialEq)]
pub struct Height(pub(crate) Measurement);

impl Height {
    /// Metres, as reported.
    pub fn meter(&self) -> f64 {
        self.0.float_value()
    }

    /// Centimetres.
    pub fn centi_meter(&self) -> f64 {
        self.0.float_value() * 100.0
    }

    /// Millimetres.
    pub fn milli_meter(&self) -> f64 {
        self.0.float_value() * 1000.0
    }

    /// Three decimals, e.g. `"0.120m"`.
    pub fn meter_string(&self) -> String {
        self.0.format_float(|v| format!("{v:.3}m"))
    }

    pub fn centi_meter_string(&self) -> String {
        self.0.format_float(|v| format!("{:.3}cm", v * 100.0))
    }

    pub fn milli_meter_string(&self) -> String {
        self.0.format_float(|v| format!("{:.3}mm", v * 1000.0))
    }
}

impl Quantity for Height {
    type Value = f64;

    fn measurement(&self) -> &Measurement {
        &self.0
    }

    fn value(&self) -> f64 {
        self.0.float_value()
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.meter_string())
    }
}
