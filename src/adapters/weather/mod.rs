//! Central Weather Administration open-data adapter.

mod cwa_weather_source;

pub use cwa_weather_source::CwaWeatherSource;
