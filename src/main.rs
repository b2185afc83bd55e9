//! Entry point: resolve location, fetch the forecast, present the panel.

use anyhow::Result;
use barograph::config::BarographConfig;
use barograph::location::{ConfiguredProvider, LocationResolver};
use barograph::models::{Coordinates, PressureWindow};
use barograph::view::{PresentationContext, PressurePanel};
use barograph::{WeatherApiClient, forecast};
use chrono_tz::Tz;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = BarographConfig::load()?;
    init_tracing(&config.logging.level);

    info!("barograph {} starting", barograph::VERSION);

    let provider = ConfiguredProvider::from_config(&config.location);
    let coords = LocationResolver::resolve(&provider);
    info!("Forecast location: {}", coords.format_coordinates());

    let client = WeatherApiClient::new(&config)?;
    let outcome = fetch_window(&client, &coords, config.timezone()).await;

    let panel = PressurePanel::assemble(outcome);
    let mut context = PresentationContext::new(PathBuf::from(&config.panel.chart_path));
    context.present(&panel)?;
    context.dismiss();

    Ok(())
}

/// Fetch the hourly forecast and cut it down to the presentation window
async fn fetch_window(
    client: &WeatherApiClient,
    coords: &Coordinates,
    tz: Tz,
) -> barograph::Result<PressureWindow> {
    let hourly = client.fetch_pressure_forecast(coords).await?;
    let hour = forecast::current_hour(tz);
    forecast::extract_window(&hourly, hour)
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
