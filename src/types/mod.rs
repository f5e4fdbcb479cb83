pub mod api_date;
pub mod api_value;
pub mod compass;
pub mod data_source;
pub mod measurement;
pub mod nullable;
pub mod precision;
pub mod quantities;
pub mod source;
pub mod station;
pub mod weather_condition;
pub mod weather_data;
