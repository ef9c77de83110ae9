//! `ZipWeather` - current temperature for a Brazilian postal code
//!
//! Resolves a CEP to a place name through a geocoder, then asks a weather
//! provider for current conditions there, reporting Celsius, Fahrenheit and
//! Kelvin.

pub mod api;
pub mod config;
pub mod error;
pub mod http_client;
pub mod location_resolver;
pub mod models;
pub mod service;
pub mod telemetry;
pub mod weather;
pub mod web;
pub mod zip;

// Re-export core types for public API
pub use config::ServiceConfig;
pub use error::ZipWeatherError;
pub use http_client::{HttpClient, HttpResponse, ReqwestHttpClient};
pub use location_resolver::LocationResolver;
pub use models::{Location, WeatherReading};
pub use service::WeatherService;
pub use weather::WeatherFetcher;
pub use zip::PostalCode;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
