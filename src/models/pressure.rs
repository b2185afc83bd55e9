//! Pressure series models
//!
//! `HourlyPressure` is the full forecast as returned by the API;
//! `PressureWindow` is the slice of it that actually gets presented.

use crate::BarographError;
use serde::{Deserialize, Serialize};

/// Full hourly surface-pressure forecast for one location
///
/// Invariant: `times` and `pressures` have the same length. Construction
/// through [`HourlyPressure::new`] enforces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyPressure {
    /// Sample timestamps, ISO-8601 local time as sent by the API
    times: Vec<String>,
    /// Surface pressure readings in hPa, parallel to `times`
    pressures: Vec<f64>,
}

impl HourlyPressure {
    /// Build a forecast series, rejecting mismatched array lengths
    pub fn new(times: Vec<String>, pressures: Vec<f64>) -> Result<Self, BarographError> {
        if times.len() != pressures.len() {
            return Err(BarographError::missing_data(format!(
                "hourly arrays disagree: {} timestamps vs {} pressure readings",
                times.len(),
                pressures.len()
            )));
        }
        Ok(Self { times, pressures })
    }

    /// Number of hourly samples
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the forecast holds no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Sample timestamps
    #[must_use]
    pub fn times(&self) -> &[String] {
        &self.times
    }

    /// Pressure readings in hPa
    #[must_use]
    pub fn pressures(&self) -> &[f64] {
        &self.pressures
    }
}

/// The presented slice of a forecast: up to 13 samples starting at the
/// current hour, with timestamps reduced to their time-of-day portion.
///
/// Invariant: `times` and `pressures` have the same length. A window may be
/// shorter than requested (or empty) when the source forecast runs out.
#[derive(Debug, Clone, PartialEq)]
pub struct PressureWindow {
    times: Vec<String>,
    pressures: Vec<f64>,
}

impl PressureWindow {
    /// Build a window, rejecting mismatched array lengths
    pub fn new(times: Vec<String>, pressures: Vec<f64>) -> Result<Self, BarographError> {
        if times.len() != pressures.len() {
            return Err(BarographError::missing_data(format!(
                "window arrays disagree: {} labels vs {} pressure readings",
                times.len(),
                pressures.len()
            )));
        }
        Ok(Self { times, pressures })
    }

    /// Number of samples in the window
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the window holds no samples
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Time-of-day labels (HH:MM)
    #[must_use]
    pub fn times(&self) -> &[String] {
        &self.times
    }

    /// Pressure readings in hPa
    #[must_use]
    pub fn pressures(&self) -> &[f64] {
        &self.pressures
    }

    /// The current-hour reading, i.e. the first sample of the window
    #[must_use]
    pub fn current_pressure(&self) -> Option<f64> {
        self.pressures.first().copied()
    }

    /// Iterate over (label, reading) pairs
    pub fn samples(&self) -> impl Iterator<Item = (&str, f64)> {
        self.times
            .iter()
            .map(String::as_str)
            .zip(self.pressures.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_rejects_mismatched_lengths() {
        let result = HourlyPressure::new(vec!["2025-03-01T00:00".to_string()], vec![]);
        assert!(matches!(result, Err(BarographError::MissingData { .. })));
    }

    #[test]
    fn test_window_current_pressure() {
        let window = PressureWindow::new(
            vec!["10:00".to_string(), "11:00".to_string()],
            vec![1013.2, 1012.8],
        )
        .unwrap();
        assert_eq!(window.current_pressure(), Some(1013.2));
        assert_eq!(window.len(), 2);
    }

    #[test]
    fn test_empty_window() {
        let window = PressureWindow::new(vec![], vec![]).unwrap();
        assert!(window.is_empty());
        assert_eq!(window.current_pressure(), None);
    }

    #[test]
    fn test_window_samples_iteration() {
        let window =
            PressureWindow::new(vec!["10:00".to_string()], vec![1009.5]).unwrap();
        let samples: Vec<_> = window.samples().collect();
        assert_eq!(samples, vec![("10:00", 1009.5)]);
    }
}
