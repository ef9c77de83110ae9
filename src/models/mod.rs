//! Data models for the ZipWeather service
//!
//! - Location: place name returned by the geocoder
//! - Weather: temperature readings returned to the caller

pub mod location;
pub mod weather;

pub use location::Location;
pub use weather::WeatherReading;
