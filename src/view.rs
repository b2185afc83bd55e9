//! Panel assembly and presentation
//!
//! The panel is plain widget data so that assembly stays testable without a
//! GUI host. It is in exactly one of two states, decided at construction:
//! `Loaded` (chart image + headline label) or `Failed` (a single error
//! label). There are no transitions afterwards.

use crate::chart;
use crate::error::BarographError;
use crate::models::PressureWindow;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};

/// Panel title shown by the host
pub const PANEL_TITLE: &str = "Pressure Forecast";
/// Panel background color
pub const PANEL_BACKGROUND: &str = "#f0f0f7";
/// Headline text color
const HEADLINE_COLOR: &str = "#cf2d2d";
/// Text shown when no forecast could be loaded
const ERROR_TEXT: &str = "Data Update Failed";

/// A text widget
#[derive(Debug, Clone, PartialEq)]
pub struct LabelWidget {
    /// Label text
    pub text: String,
    /// Text color, `None` for the host default
    pub color: Option<&'static str>,
    /// Bold system font
    pub bold: bool,
}

/// An image widget holding the rendered chart
#[derive(Debug, Clone, PartialEq)]
pub struct ImageWidget {
    /// PNG bytes
    pub png: Vec<u8>,
}

/// Child widgets of the panel
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Label(LabelWidget),
    Image(ImageWidget),
}

/// Presentation state, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    /// Chart and headline are shown
    Loaded,
    /// Only the error label is shown
    Failed,
}

/// The assembled presentation panel
#[derive(Debug, Clone)]
pub struct PressurePanel {
    state: PanelState,
    widgets: Vec<Widget>,
}

impl PressurePanel {
    /// Assemble the panel from the outcome of the fetch pipeline
    ///
    /// Any fetch error, an empty window, and a chart rendering failure all
    /// land in the `Failed` state; each is logged with its own diagnostic
    /// before being folded together.
    #[must_use]
    pub fn assemble(outcome: crate::Result<PressureWindow>) -> Self {
        match outcome {
            Ok(window) => {
                if window.is_empty() {
                    warn!("{}", BarographError::EmptyWindow);
                    return Self::failed();
                }
                match chart::render_pressure_chart(&window) {
                    Ok(png) => Self::loaded(&window, png),
                    Err(e) => {
                        error!("Chart rendering failed: {}", e);
                        Self::failed()
                    }
                }
            }
            Err(e) => {
                error!("Forecast fetch failed: {}", e);
                Self::failed()
            }
        }
    }

    /// Build the loaded panel: bold headline above, chart image below
    #[must_use]
    pub fn loaded(window: &PressureWindow, chart_png: Vec<u8>) -> Self {
        // assemble() rejects empty windows before calling here
        let current = window.current_pressure().unwrap_or_default();
        let headline = LabelWidget {
            text: format!("Current: {current:.1} hPa"),
            color: Some(HEADLINE_COLOR),
            bold: true,
        };
        Self {
            state: PanelState::Loaded,
            widgets: vec![
                Widget::Label(headline),
                Widget::Image(ImageWidget { png: chart_png }),
            ],
        }
    }

    /// Build the failed panel: a single centered error label
    #[must_use]
    pub fn failed() -> Self {
        Self {
            state: PanelState::Failed,
            widgets: vec![Widget::Label(LabelWidget {
                text: ERROR_TEXT.to_string(),
                color: None,
                bold: false,
            })],
        }
    }

    /// Presentation state
    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Child widgets, in presentation order (labels above images)
    #[must_use]
    pub fn widgets(&self) -> &[Widget] {
        &self.widgets
    }

    /// The headline text, if the panel carries one
    #[must_use]
    pub fn headline(&self) -> Option<&str> {
        self.widgets.iter().find_map(|w| match w {
            Widget::Label(label) => Some(label.text.as_str()),
            Widget::Image(_) => None,
        })
    }

    /// Whether an image widget is attached
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.widgets
            .iter()
            .any(|w| matches!(w, Widget::Image(_)))
    }
}

/// Host seam for showing a panel once and tearing it down
///
/// Constructed explicitly, passed by reference, torn down with
/// [`PresentationContext::dismiss`]. This implementation presents to the
/// filesystem and terminal: the chart image is written to the configured
/// path and labels are printed.
pub struct PresentationContext {
    chart_path: PathBuf,
}

impl PresentationContext {
    /// Create a presentation context writing the chart to `chart_path`
    #[must_use]
    pub fn new(chart_path: PathBuf) -> Self {
        debug!("Presentation context created");
        Self { chart_path }
    }

    /// Present the panel once
    pub fn present(&mut self, panel: &PressurePanel) -> crate::Result<()> {
        println!("{PANEL_TITLE}");
        for widget in panel.widgets() {
            match widget {
                Widget::Label(label) => {
                    println!("  {}", label.text);
                }
                Widget::Image(image) => {
                    fs::write(&self.chart_path, &image.png)?;
                    info!("Chart image written to {}", self.chart_path.display());
                    println!("  Chart: {}", self.chart_path.display());
                }
            }
        }
        Ok(())
    }

    /// Tear the context down
    pub fn dismiss(self) {
        debug!("Presentation context dismissed");
    }

    /// Path the chart image is written to
    #[must_use]
    pub fn chart_path(&self) -> &PathBuf {
        &self.chart_path
    }
}
