//! Location Resolution Module
//!
//! Resolves a postal code into a place name through a ViaCEP-style geocoder
//! (`GET {base_url}/ws/{cep}/json/`, answering `{"localidade": "..."}`).

use std::sync::Arc;

use reqwest::Url;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::error::ZipWeatherError;
use crate::http_client::HttpClient;
use crate::models::Location;
use crate::zip::PostalCode;

/// Public ViaCEP endpoint
pub const DEFAULT_GEOCODING_URL: &str = "http://viacep.com.br";

/// The only field read from the geocoder's answer
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    localidade: Option<String>,
}

/// Service for resolving postal codes to place names
#[derive(Clone)]
pub struct LocationResolver {
    client: Arc<dyn HttpClient>,
    base_url: String,
}

impl LocationResolver {
    pub fn new(client: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Geocoder URL for a postal code
    pub fn lookup_url(&self, code: &PostalCode) -> Result<Url, ZipWeatherError> {
        let url = format!("{}/ws/{}/json/", self.base_url.trim_end_matches('/'), code);
        Url::parse(&url).map_err(|e| ZipWeatherError::location_fetch(e.to_string()))
    }

    /// Resolve a postal code into a place name.
    ///
    /// Transport failures surface as [`ZipWeatherError::LocationFetch`]. A body
    /// that is not JSON, or whose `localidade` is missing or empty, is
    /// [`ZipWeatherError::LocationNotFound`].
    #[instrument(skip(self, code), fields(cep = %code))]
    pub async fn resolve(&self, code: &PostalCode) -> Result<Location, ZipWeatherError> {
        let url = self.lookup_url(code)?;
        debug!("Geocoding postal code via {}", url);

        let response = self
            .client
            .get(url)
            .await
            .map_err(|e| ZipWeatherError::location_fetch(format!("{e:#}")))?;

        let location = serde_json::from_slice::<GeocodingResponse>(&response.body)
            .ok()
            .and_then(|parsed| parsed.localidade)
            .and_then(Location::new)
            .ok_or(ZipWeatherError::LocationNotFound)?;

        debug!("Found location for postal code {}: {}", code, location);
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::stub::StubHttpClient;
    use rstest::rstest;

    fn cep() -> PostalCode {
        PostalCode::parse("12345678").unwrap()
    }

    #[tokio::test]
    async fn test_resolves_localidade() {
        let client = Arc::new(StubHttpClient::json(200, r#"{"localidade": "Sample Location"}"#));
        let resolver = LocationResolver::new(client.clone(), "http://geo.test");

        let location = resolver.resolve(&cep()).await.unwrap();

        assert_eq!(location.name(), "Sample Location");
        let requested = client.requested();
        assert_eq!(requested.len(), 1);
        assert_eq!(requested[0].as_str(), "http://geo.test/ws/12345678/json/");
    }

    #[rstest]
    #[case(r#"{"localidade": ""}"#)]
    #[case(r#"{"cep": "12345-678"}"#)]
    #[case(r#"{"erro": true}"#)]
    #[case(r#"{"localidade": null}"#)]
    #[case("<html>Bad Request</html>")]
    #[tokio::test]
    async fn test_missing_place_name_is_not_found(#[case] body: &str) {
        let client = Arc::new(StubHttpClient::json(200, body));
        let resolver = LocationResolver::new(client, DEFAULT_GEOCODING_URL);

        let result = resolver.resolve(&cep()).await;

        assert!(matches!(result, Err(ZipWeatherError::LocationNotFound)));
    }

    #[tokio::test]
    async fn test_status_code_is_not_checked() {
        let client = Arc::new(StubHttpClient::json(500, r#"{"localidade": "Campinas"}"#));
        let resolver = LocationResolver::new(client, DEFAULT_GEOCODING_URL);

        let location = resolver.resolve(&cep()).await.unwrap();
        assert_eq!(location.name(), "Campinas");
    }

    #[tokio::test]
    async fn test_transport_failure_is_fetch_error() {
        let client = Arc::new(StubHttpClient::failing("connection refused"));
        let resolver = LocationResolver::new(client, DEFAULT_GEOCODING_URL);

        let result = resolver.resolve(&cep()).await;

        match result {
            Err(ZipWeatherError::LocationFetch { message }) => {
                assert!(message.contains("connection refused"));
            }
            other => panic!("expected LocationFetch, got {other:?}"),
        }
    }

    #[test]
    fn test_lookup_url_tolerates_trailing_slash() {
        let client = Arc::new(StubHttpClient::json(200, "{}"));
        let resolver = LocationResolver::new(client, "http://viacep.com.br/");

        let url = resolver.lookup_url(&cep()).unwrap();
        assert_eq!(url.as_str(), "http://viacep.com.br/ws/12345678/json/");
    }
}
