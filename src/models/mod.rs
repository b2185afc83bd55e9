//! Data models for the barograph application

pub mod location;
pub mod pressure;

pub use location::Coordinates;
pub use pressure::{HourlyPressure, PressureWindow};
