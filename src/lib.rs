//! `barograph` - Hourly barometric pressure forecast panel
//!
//! This library fetches the hourly surface-pressure forecast for the
//! device's current location, extracts the current-hour window, renders it
//! as a line chart, and assembles a presentation panel around it.

pub mod api;
pub mod chart;
pub mod config;
pub mod error;
pub mod forecast;
pub mod location;
pub mod models;
pub mod view;

// Re-export core types for public API
pub use api::WeatherApiClient;
pub use config::BarographConfig;
pub use error::BarographError;
pub use location::{LocationProvider, LocationResolver};
pub use models::{Coordinates, HourlyPressure, PressureWindow};
pub use view::{PanelState, PresentationContext, PressurePanel};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, BarographError>;
