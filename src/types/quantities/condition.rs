use crate::types::measurement::Measurement;
use crate::types::quantities::Quantity;
use crate::types::weather_condition::ConditionType;
use std::fmt;

/// A symbolic weather condition such as `"cloudy"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition(pub(crate) Measurement);

impl Condition {
    /// The condition tag; unknown wire values and missing data map to
    /// [`ConditionType::Unknown`].
    pub fn condition(&self) -> ConditionType {
        if !self.0.is_available() {
            return ConditionType::Unknown;
        }
        ConditionType::from_wire(self.0.string_value())
    }
}

impl Quantity for Condition {
    type Value = String;

    fn measurement(&self) -> &Measurement {
        &self.0
    }

    fn value(&self) -> String {
        self.0.string_value().to_string()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_available() {
            f.write_str(self.condition().label())
        } else {
            f.write_str(self.0.string_value())
        }
    }
}
