use anyhow::{Context, Result};
use zipweather::{ServiceConfig, VERSION, telemetry, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServiceConfig::load().context("Failed to load configuration")?;
    telemetry::init(&config.logging)?;

    tracing::info!(
        version = VERSION,
        geocoder = %config.geocoding.base_url,
        weather = %config.weather.base_url,
        "starting zipweather"
    );

    web::run(&config).await
}
