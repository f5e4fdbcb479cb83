pub mod astronomical_info;
pub mod current_weather;
pub mod forecast;
pub mod observation;
