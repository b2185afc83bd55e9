//! Pressure chart rendering
//!
//! Renders the forecast window as a filled line chart into an in-memory PNG.
//! Output is deterministic for identical input at the fixed raster size.

use crate::error::BarographError;
use crate::models::PressureWindow;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::io::Cursor;
use tracing::debug;

/// Raster width in pixels
pub const CHART_WIDTH: u32 = 720;
/// Raster height in pixels
pub const CHART_HEIGHT: u32 = 480;

/// Line and fill color
const LINE_COLOR: RGBColor = RGBColor(0x00, 0x7a, 0xff);

/// Render the pressure window as a PNG image
///
/// The chart is a line-plus-marker plot with a translucent fill below the
/// line down to one hPa under the window minimum. Rejects empty windows.
pub fn render_pressure_chart(window: &PressureWindow) -> crate::Result<Vec<u8>> {
    if window.is_empty() {
        return Err(BarographError::chart("cannot render an empty series"));
    }

    let n = window.len();
    let pressures = window.pressures();
    let (min_p, max_p) = pressures.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), &p| (min.min(p), max.max(p)),
    );

    // Fill extends one unit below the window minimum; pad the top so the
    // line does not touch the frame.
    let y_base = min_p - 1.0;
    let y_padding = if (max_p - min_p).abs() > f64::EPSILON {
        (max_p - min_p) * 0.1
    } else {
        1.0
    };
    let y_end = max_p + y_padding;
    let x_max = n.saturating_sub(1).max(1) as f64;

    debug!(
        "Rendering {} samples, pressure range {:.1}..{:.1} hPa",
        n, min_p, max_p
    );

    let mut buffer = vec![0u8; (CHART_WIDTH * CHART_HEIGHT * 3) as usize];
    {
        let root =
            BitMapBackend::with_buffer(&mut buffer, (CHART_WIDTH, CHART_HEIGHT))
                .into_drawing_area();
        root.fill(&WHITE).map_err(to_chart_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Pressure Forecast (Next 12h)", ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(52)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..x_max, y_base..y_end)
            .map_err(to_chart_error)?;

        let times = window.times().to_vec();
        chart
            .configure_mesh()
            .x_desc("Time (HH:MM)")
            .y_desc("hPa")
            .x_labels(n)
            .x_label_formatter(&move |x| {
                let idx = x.round() as usize;
                times.get(idx).cloned().unwrap_or_default()
            })
            .x_label_style(
                ("sans-serif", 13)
                    .into_font()
                    .transform(FontTransform::Rotate90),
            )
            .light_line_style(BLACK.mix(0.15))
            .draw()
            .map_err(to_chart_error)?;

        let points: Vec<(f64, f64)> = pressures
            .iter()
            .enumerate()
            .map(|(i, &p)| (i as f64, p))
            .collect();

        chart
            .draw_series(AreaSeries::new(
                points.iter().copied(),
                y_base,
                LINE_COLOR.mix(0.1),
            ))
            .map_err(to_chart_error)?;

        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                LINE_COLOR.stroke_width(2),
            ))
            .map_err(to_chart_error)?;

        chart
            .draw_series(
                points
                    .iter()
                    .map(|&(x, y)| Circle::new((x, y), 3, LINE_COLOR.filled())),
            )
            .map_err(to_chart_error)?;

        root.present().map_err(to_chart_error)?;
    }

    encode_png(&buffer)
}

fn encode_png(rgb: &[u8]) -> crate::Result<Vec<u8>> {
    let image = image::RgbImage::from_raw(CHART_WIDTH, CHART_HEIGHT, rgb.to_vec())
        .ok_or_else(|| BarographError::chart("raster buffer size mismatch"))?;

    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| BarographError::chart(format!("PNG encoding failed: {e}")))?;
    Ok(png)
}

fn to_chart_error<E: std::fmt::Display>(e: E) -> BarographError {
    BarographError::chart(e.to_string())
}
