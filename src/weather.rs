//! Weather API client for WeatherAPI.com-style providers
//!
//! Issues `GET {base_url}/current.json?q=<location>&key=<api key>` and reads
//! `current.temp_c` / `current.temp_f` from the answer.

use std::sync::Arc;

use reqwest::Url;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::ZipWeatherError;
use crate::http_client::HttpClient;
use crate::models::{Location, WeatherReading};

/// Public WeatherAPI.com endpoint
pub const DEFAULT_WEATHER_URL: &str = "http://api.weatherapi.com/v1";

/// Client fetching current temperatures for a place name
#[derive(Clone)]
pub struct WeatherFetcher {
    client: Arc<dyn HttpClient>,
    base_url: String,
}

impl WeatherFetcher {
    pub fn new(client: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Provider URL carrying the location and the caller's key
    pub fn current_url(&self, location: &Location, api_key: &str) -> Result<Url, ZipWeatherError> {
        let base = format!("{}/current.json", self.base_url.trim_end_matches('/'));
        Url::parse_with_params(&base, &[("q", location.name()), ("key", api_key)])
            .map_err(|e| ZipWeatherError::weather_fetch(e.to_string()))
    }

    /// Fetch current temperatures for a location.
    ///
    /// Missing or non-numeric temperature fields read as `0`. A Celsius value
    /// of exactly `0` is reported as [`ZipWeatherError::InvalidApiKey`]: the
    /// provider's auth failures carry no `current` block, which is
    /// indistinguishable from a freezing reading here.
    #[allow(clippy::float_cmp)]
    #[instrument(skip(self, location, api_key), fields(location = %location))]
    pub async fn fetch(
        &self,
        location: &Location,
        api_key: &str,
    ) -> Result<WeatherReading, ZipWeatherError> {
        let url = self.current_url(location, api_key)?;
        debug!("Requesting current weather for {}", location);

        let response = self
            .client
            .get(url)
            .await
            .map_err(|e| ZipWeatherError::weather_fetch(redact(&format!("{e:#}"), api_key)))?;

        let payload: Value = serde_json::from_slice(&response.body).map_err(|e| {
            warn!(status = response.status, "weather provider returned malformed JSON");
            ZipWeatherError::weather_fetch(e.to_string())
        })?;

        let temp_c = read_number(&payload, "/current/temp_c");
        let temp_f = read_number(&payload, "/current/temp_f");

        if temp_c == 0.0 {
            debug!(status = response.status, "zero Celsius reading, treating key as invalid");
            return Err(ZipWeatherError::InvalidApiKey);
        }

        Ok(WeatherReading::from_celsius_fahrenheit(temp_c, temp_f))
    }
}

/// Mask the caller's key in a message that will be logged or returned
fn redact(message: &str, api_key: &str) -> String {
    if api_key.is_empty() {
        message.to_string()
    } else {
        message.replace(api_key, "[redacted]")
    }
}

fn read_number(payload: &Value, pointer: &str) -> f64 {
    payload
        .pointer(pointer)
        .and_then(Value::as_f64)
        .unwrap_or_default()
}
