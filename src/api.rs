use axum::{
    Router,
    extract::{Query, State},
    http::HeaderMap,
    response::Json,
    routing::get,
};
use tracing::instrument;

use crate::{error::ZipWeatherError, models::WeatherReading, service::WeatherService};

/// Request header carrying the caller's weather provider key
pub const API_KEY_HEADER: &str = "api_key";

/// Query parameter carrying the postal code
pub const ZIP_PARAM: &str = "zip";

pub fn router(service: WeatherService) -> Router {
    Router::new()
        .route("/", get(get_weather))
        .with_state(service)
}

#[instrument(skip_all)]
async fn get_weather(
    State(service): State<WeatherService>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<WeatherReading>, ZipWeatherError> {
    let api_key = headers
        .get(API_KEY_HEADER)
        .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

    // first occurrence wins; absent reads as empty and fails validation
    let zip = params
        .iter()
        .find(|(name, _)| name == ZIP_PARAM)
        .map(|(_, value)| value.as_str())
        .unwrap_or_default();

    let reading = service.lookup(api_key.as_deref(), zip).await?;
    Ok(Json(reading))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::http_client::stub::StubHttpClient;
    use crate::location_resolver::LocationResolver;
    use crate::weather::WeatherFetcher;

    fn app(geocoder: Arc<StubHttpClient>) -> Router {
        let provider = Arc::new(StubHttpClient::json(
            200,
            r#"{"current": {"temp_c": 25, "temp_f": 77}}"#,
        ));
        router(WeatherService::new(
            LocationResolver::new(geocoder, "http://geo.test"),
            WeatherFetcher::new(provider, "http://weather.test/v1"),
        ))
    }

    #[tokio::test]
    async fn test_first_zip_parameter_wins() {
        let geocoder = Arc::new(StubHttpClient::json(200, r#"{"localidade": "Recife"}"#));

        let response = app(geocoder.clone())
            .oneshot(
                Request::get("/?zip=50030-230&zip=11111111")
                    .header(API_KEY_HEADER, "key")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(geocoder.requested()[0].path(), "/ws/50030230/json/");
    }

    #[tokio::test]
    async fn test_missing_header_never_reaches_geocoder() {
        let geocoder = Arc::new(StubHttpClient::json(200, r#"{"localidade": "Recife"}"#));

        let response = app(geocoder.clone())
            .oneshot(Request::get("/?zip=50030230").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(geocoder.requested().is_empty());
    }
}
