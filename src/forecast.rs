//! Forecast window extraction
//!
//! The presented window is the contiguous slice of the hourly forecast that
//! starts at the current wall-clock hour and spans up to 13 samples (the
//! current hour plus the next 12). When the source forecast runs out before
//! the window is full, the window is simply shorter; an empty window is the
//! caller's signal that nothing is presentable.

use crate::models::{HourlyPressure, PressureWindow};
use chrono::{NaiveDateTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use tracing::{debug, warn};

/// Samples per full window: the current hour plus the next 12
pub const WINDOW_LEN: usize = 13;

/// Timestamp layout used by the OpenMeteo hourly arrays
const OPENMETEO_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Current wall-clock hour (0-23) in the given timezone
#[must_use]
pub fn current_hour(tz: Tz) -> usize {
    hour_of(tz, Utc::now())
}

fn hour_of(tz: Tz, instant: chrono::DateTime<Utc>) -> usize {
    tz.from_utc_datetime(&instant.naive_utc()).hour() as usize
}

/// Extract the presentation window starting at `start_hour`
///
/// Returns a window of up to [`WINDOW_LEN`] samples; shorter (possibly
/// empty) when the forecast holds fewer samples past the start index.
/// Timestamps are reduced to their time-of-day portion.
pub fn extract_window(
    forecast: &HourlyPressure,
    start_hour: usize,
) -> crate::Result<PressureWindow> {
    let len = forecast.len();
    let start = start_hour.min(len);
    let end = (start + WINDOW_LEN).min(len);

    if end - start < WINDOW_LEN {
        warn!(
            "Forecast window truncated: {} of {} samples available from hour {}",
            end - start,
            WINDOW_LEN,
            start_hour
        );
    } else {
        debug!("Extracted full {}-sample window from hour {}", WINDOW_LEN, start_hour);
    }

    let times = forecast.times()[start..end]
        .iter()
        .map(|t| time_of_day_label(t))
        .collect();
    let pressures = forecast.pressures()[start..end].to_vec();

    PressureWindow::new(times, pressures)
}

/// Reduce an ISO-8601 timestamp to its HH:MM portion
///
/// Falls back to whatever follows the `T` separator when the timestamp does
/// not match the OpenMeteo layout, and to the raw string when there is none.
fn time_of_day_label(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, OPENMETEO_TIME_FORMAT).map_or_else(
        |_| {
            timestamp
                .split_once('T')
                .map_or_else(|| timestamp.to_string(), |(_, tod)| tod.to_string())
        },
        |dt| dt.format("%H:%M").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn forecast_of(hours: usize) -> HourlyPressure {
        let times = (0..hours)
            .map(|h| format!("2025-03-01T{:02}:00", h % 24))
            .collect();
        let pressures = (0..hours).map(|h| 1000.0 + h as f64).collect();
        HourlyPressure::new(times, pressures).unwrap()
    }

    #[test]
    fn test_full_window_from_current_hour() {
        let forecast = forecast_of(24);
        let window = extract_window(&forecast, 10).unwrap();
        assert_eq!(window.len(), WINDOW_LEN);
        assert_eq!(window.current_pressure(), Some(1010.0));
        assert_eq!(window.times()[0], "10:00");
        assert_eq!(window.times()[12], "22:00");
        assert_eq!(window.pressures()[12], 1022.0);
    }

    #[rstest]
    #[case(0, 13)]
    #[case(11, 13)]
    #[case(12, 12)]
    #[case(20, 4)]
    #[case(23, 1)]
    #[case(24, 0)]
    #[case(99, 0)]
    fn test_window_length_policy(#[case] start_hour: usize, #[case] expected_len: usize) {
        let forecast = forecast_of(24);
        let window = extract_window(&forecast, start_hour).unwrap();
        assert_eq!(window.len(), expected_len);
    }

    #[test]
    fn test_empty_forecast_yields_empty_window() {
        let forecast = HourlyPressure::new(vec![], vec![]).unwrap();
        let window = extract_window(&forecast, 10).unwrap();
        assert!(window.is_empty());
    }

    #[rstest]
    #[case("2025-03-01T09:00", "09:00")]
    #[case("2025-12-31T23:00", "23:00")]
    #[case("2025-03-01T09:00:30", "09:00:30")] // seconds variant, split fallback
    #[case("not-a-timestamp", "not-a-timestamp")]
    fn test_time_of_day_label(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(time_of_day_label(input), expected);
    }

    #[test]
    fn test_current_hour_respects_timezone() {
        let instant = Utc.with_ymd_and_hms(2025, 3, 1, 0, 30, 0).unwrap();
        // 00:30 UTC is 09:30 in Tokyo
        assert_eq!(hour_of(chrono_tz::Asia::Tokyo, instant), 9);
        assert_eq!(hour_of(chrono_tz::UTC, instant), 0);
    }
}
