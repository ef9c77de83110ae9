//! Error types and HTTP status mapping for the `ZipWeather` service

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Main error type for the `ZipWeather` service
#[derive(Error, Debug)]
pub enum ZipWeatherError {
    /// Request carried no `api_key` header, or an empty one
    #[error("api_key is required")]
    MissingApiKey,

    /// Postal code did not normalize to exactly eight digits
    #[error("invalid zipcode")]
    InvalidZip,

    /// Geocoder answered without a usable place name
    #[error("can not find zipcode")]
    LocationNotFound,

    /// Geocoder could not be reached or its body could not be read
    #[error("error getting location: {message}")]
    LocationFetch { message: String },

    /// Weather provider could not be reached or answered with malformed JSON
    #[error("error getting weather: {message}")]
    WeatherFetch { message: String },

    /// Weather provider reported 0°C, read as a rejected API key
    #[error("error getting weather, invalid API key")]
    InvalidApiKey,

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ZipWeatherError {
    /// Create a new location transport error
    pub fn location_fetch<S: Into<String>>(message: S) -> Self {
        Self::LocationFetch {
            message: message.into(),
        }
    }

    /// Create a new weather transport or parse error
    pub fn weather_fetch<S: Into<String>>(message: S) -> Self {
        Self::WeatherFetch {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// HTTP status reported to the caller for this failure
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            ZipWeatherError::MissingApiKey => StatusCode::BAD_REQUEST,
            ZipWeatherError::InvalidZip => StatusCode::UNPROCESSABLE_ENTITY,
            ZipWeatherError::LocationNotFound | ZipWeatherError::LocationFetch { .. } => {
                StatusCode::NOT_FOUND
            }
            ZipWeatherError::WeatherFetch { .. }
            | ZipWeatherError::InvalidApiKey
            | ZipWeatherError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ZipWeatherError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            format!("{self}\n"),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ZipWeatherError::MissingApiKey, StatusCode::BAD_REQUEST)]
    #[case(ZipWeatherError::InvalidZip, StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(ZipWeatherError::LocationNotFound, StatusCode::NOT_FOUND)]
    #[case(ZipWeatherError::location_fetch("connection refused"), StatusCode::NOT_FOUND)]
    #[case(ZipWeatherError::weather_fetch("bad json"), StatusCode::INTERNAL_SERVER_ERROR)]
    #[case(ZipWeatherError::InvalidApiKey, StatusCode::INTERNAL_SERVER_ERROR)]
    fn test_status_mapping(#[case] err: ZipWeatherError, #[case] expected: StatusCode) {
        assert_eq!(err.status_code(), expected);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ZipWeatherError::MissingApiKey.to_string(), "api_key is required");
        assert_eq!(ZipWeatherError::InvalidZip.to_string(), "invalid zipcode");
        assert_eq!(
            ZipWeatherError::InvalidApiKey.to_string(),
            "error getting weather, invalid API key"
        );
        assert!(
            ZipWeatherError::config("bad port")
                .to_string()
                .contains("Configuration error")
        );
    }

    #[test]
    fn test_into_response_is_plain_text() {
        let response = ZipWeatherError::InvalidZip.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }
}
