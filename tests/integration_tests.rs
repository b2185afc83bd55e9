//! Integration tests for the barograph pipeline
//!
//! Exercises the window extraction, chart rendering, and panel assembly
//! stages end to end on a canned forecast, without touching the network.

use barograph::error::BarographError;
use barograph::models::HourlyPressure;
use barograph::view::{PanelState, PresentationContext, PressurePanel, Widget};
use barograph::{chart, forecast};
use rstest::rstest;

/// A day of hourly samples, pressure 1000 + hour
fn full_day_forecast() -> HourlyPressure {
    let times = (0..24).map(|h| format!("2025-03-01T{h:02}:00")).collect();
    let pressures = (0..24).map(f64::from).map(|h| 1000.0 + h).collect();
    HourlyPressure::new(times, pressures).unwrap()
}

/// Coordinates (35.0, 135.0), hour 10, 24 hourly samples: the panel carries
/// the index-10 headline and a chart spanning indices 10 through 22.
#[test]
fn test_end_to_end_loaded_panel() {
    let forecast_data = full_day_forecast();
    let window = forecast::extract_window(&forecast_data, 10).unwrap();

    assert_eq!(window.len(), 13);
    assert_eq!(window.times().first().map(String::as_str), Some("10:00"));
    assert_eq!(window.times().last().map(String::as_str), Some("22:00"));
    assert_eq!(window.current_pressure(), Some(1010.0));

    let panel = PressurePanel::assemble(Ok(window));
    assert_eq!(panel.state(), PanelState::Loaded);
    assert_eq!(panel.headline(), Some("Current: 1010.0 hPa"));
    assert!(panel.has_image());
}

/// Late start hours leave fewer than 13 samples; the window shortens
/// instead of failing, and the panel still loads.
#[rstest]
#[case(12, 12)]
#[case(20, 4)]
#[case(23, 1)]
fn test_short_horizon_still_loads(#[case] start_hour: usize, #[case] expected_len: usize) {
    let forecast_data = full_day_forecast();
    let window = forecast::extract_window(&forecast_data, start_hour).unwrap();
    assert_eq!(window.len(), expected_len);

    let panel = PressurePanel::assemble(Ok(window));
    assert_eq!(panel.state(), PanelState::Loaded);
    assert!(panel.has_image());
}

/// A forecast exhausted before the start hour yields an empty window and an
/// error panel without an image widget.
#[test]
fn test_exhausted_forecast_fails_panel() {
    let forecast_data = full_day_forecast();
    let window = forecast::extract_window(&forecast_data, 24).unwrap();
    assert!(window.is_empty());

    let panel = PressurePanel::assemble(Ok(window));
    assert_eq!(panel.state(), PanelState::Failed);
    assert!(!panel.has_image());
}

/// Fetch-path errors land in the failed state: a single error label, no image.
#[rstest]
#[case(BarographError::HttpStatus { status: 500 })]
#[case(BarographError::parse("unexpected token"))]
#[case(BarographError::missing_data("no hourly block"))]
fn test_fetch_failure_panel(#[case] error: BarographError) {
    let panel = PressurePanel::assemble(Err(error));
    assert_eq!(panel.state(), PanelState::Failed);
    assert_eq!(panel.widgets().len(), 1);
    assert!(!panel.has_image());
    assert_eq!(panel.headline(), Some("Data Update Failed"));
}

/// Identical windows render to byte-identical images.
#[test]
fn test_chart_rendering_deterministic() {
    let forecast_data = full_day_forecast();
    let window = forecast::extract_window(&forecast_data, 10).unwrap();

    let first = chart::render_pressure_chart(&window).unwrap();
    let second = chart::render_pressure_chart(&window).unwrap();
    assert_eq!(first, second);
}

/// Presenting a loaded panel writes the chart PNG to the configured path.
#[test]
fn test_presentation_writes_chart_image() {
    let forecast_data = full_day_forecast();
    let window = forecast::extract_window(&forecast_data, 10).unwrap();
    let panel = PressurePanel::assemble(Ok(window));

    let path = std::env::temp_dir().join(format!("barograph_test_{}.png", std::process::id()));
    let mut context = PresentationContext::new(path.clone());
    context.present(&panel).unwrap();
    context.dismiss();

    let written = std::fs::read(&path).unwrap();
    assert_eq!(&written[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    std::fs::remove_file(&path).unwrap();
}

/// Presenting a failed panel writes nothing.
#[test]
fn test_presentation_of_failed_panel_writes_nothing() {
    let panel = PressurePanel::assemble(Err(BarographError::HttpStatus { status: 404 }));

    let path = std::env::temp_dir().join(format!(
        "barograph_failed_test_{}.png",
        std::process::id()
    ));
    let mut context = PresentationContext::new(path.clone());
    context.present(&panel).unwrap();
    context.dismiss();

    assert!(!path.exists());
    assert!(matches!(panel.widgets()[0], Widget::Label(_)));
}
