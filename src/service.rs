//! Request pipeline: validate, resolve, fetch
//!
//! Each step runs only if the previous one succeeded and the first failure
//! ends the request. Nothing is retried and nothing is shared between calls.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, instrument};

use crate::config::ServiceConfig;
use crate::error::ZipWeatherError;
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::location_resolver::LocationResolver;
use crate::models::WeatherReading;
use crate::weather::WeatherFetcher;
use crate::zip::PostalCode;

/// Postal code to temperature lookup
#[derive(Clone)]
pub struct WeatherService {
    resolver: LocationResolver,
    fetcher: WeatherFetcher,
}

impl WeatherService {
    pub fn new(resolver: LocationResolver, fetcher: WeatherFetcher) -> Self {
        Self { resolver, fetcher }
    }

    /// Build the service with `reqwest` transports configured from `config`
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let geocoding_client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new(
            Duration::from_secs(config.geocoding.timeout_seconds.into()),
        )?);
        let weather_client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new(
            Duration::from_secs(config.weather.timeout_seconds.into()),
        )?);

        Ok(Self::new(
            LocationResolver::new(geocoding_client, config.geocoding.base_url.clone()),
            WeatherFetcher::new(weather_client, config.weather.base_url.clone()),
        ))
    }

    /// Run the full lookup for one request.
    ///
    /// The API key is checked before anything else, so a request without one
    /// never reaches validation or the network.
    #[instrument(skip(self, api_key, zip))]
    pub async fn lookup(
        &self,
        api_key: Option<&str>,
        zip: &str,
    ) -> Result<WeatherReading, ZipWeatherError> {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or(ZipWeatherError::MissingApiKey)?;

        let code = PostalCode::parse(zip)?;
        let location = self.resolver.resolve(&code).await?;
        let reading = self.fetcher.fetch(&location, api_key).await?;

        info!(cep = %code, location = %location, temp_c = reading.temp_c, "weather lookup complete");
        Ok(reading)
    }
}
