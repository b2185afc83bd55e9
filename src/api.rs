//! Weather API client for OpenMeteo integration
//!
//! This module provides HTTP client functionality for retrieving the hourly
//! surface-pressure forecast from the OpenMeteo API. No API key is required.

use crate::config::BarographConfig;
use crate::error::BarographError;
use crate::models::{Coordinates, HourlyPressure};
use anyhow::{Context, Result};
use std::time::{Duration, Instant};
use tracing::{debug, error, info, instrument, warn};

/// Weather API client for OpenMeteo
pub struct WeatherApiClient {
    /// HTTP client
    client: reqwest::Client,
    /// Base URL for the forecast API
    base_url: String,
    /// Timezone label sent with every forecast request
    timezone: String,
}

impl WeatherApiClient {
    /// Create a new weather API client
    pub fn new(config: &BarographConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.weather.timeout_seconds.into());

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("barograph/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.weather.base_url.clone(),
            timezone: config.weather.timezone.clone(),
        })
    }

    /// Fetch the hourly surface-pressure forecast for a coordinate pair
    ///
    /// Network, HTTP-status, body-parse, and missing-field problems each map
    /// to their own [`BarographError`] variant; the caller decides how much
    /// of that distinction to surface.
    #[instrument(skip(self), fields(coords = %coords.format_coordinates()))]
    pub async fn fetch_pressure_forecast(
        &self,
        coords: &Coordinates,
    ) -> Result<HourlyPressure, BarographError> {
        info!(
            "Fetching pressure forecast for coordinates: {}",
            coords.format_coordinates()
        );
        let start_time = Instant::now();

        let url = format!("{}/forecast", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", coords.latitude.to_string()),
                ("longitude", coords.longitude.to_string()),
                ("hourly", "surface_pressure".to_string()),
                ("timezone", self.timezone.clone()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("Forecast request failed: {}", e);
                BarographError::network(e)
            })?;

        let status = response.status();
        debug!("OpenMeteo responded with status {}", status);
        if !status.is_success() {
            error!("Forecast request rejected: status {}", status);
            return Err(BarographError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let parse_start = Instant::now();
        let forecast_response: openmeteo::ForecastResponse =
            response.json().await.map_err(|e| {
                error!("Failed to parse forecast response: {}", e);
                BarographError::parse(format!("invalid forecast body: {e}"))
            })?;

        let hourly = forecast_response.hourly.ok_or_else(|| {
            error!("Forecast response carried no hourly block");
            BarographError::missing_data("response has no hourly block")
        })?;

        let pressures = hourly.pressure.ok_or_else(|| {
            error!("Forecast response carried no surface_pressure array");
            BarographError::missing_data("response has no surface_pressure array")
        })?;

        let forecast = HourlyPressure::new(hourly.time, pressures)?;

        let parse_duration = parse_start.elapsed();
        let total_duration = start_time.elapsed();

        info!(
            "Retrieved {} hourly pressure samples in {:.3}s (parse: {:.3}s)",
            forecast.len(),
            total_duration.as_secs_f64(),
            parse_duration.as_secs_f64()
        );

        if total_duration.as_secs() > 5 {
            warn!(
                "Slow API response detected: {:.3}s",
                total_duration.as_secs_f64()
            );
        }

        Ok(forecast)
    }
}

/// `OpenMeteo` API response structures
mod openmeteo {
    use serde::Deserialize;

    /// Forecast response from the `OpenMeteo` API
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub hourly: Option<HourlyData>,
    }

    /// Hourly weather data from `OpenMeteo`
    #[derive(Debug, Deserialize)]
    pub struct HourlyData {
        pub time: Vec<String>,
        #[serde(rename = "surface_pressure")]
        pub pressure: Option<Vec<f64>>,
    }
}
