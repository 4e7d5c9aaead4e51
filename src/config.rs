//! Configuration types for the scatter chart.

use crate::color_scheme::ColorScheme;

// ─────────────────────────────────────────────────────────────────────────────
// Canvas geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Margins around the inner plot area, in logical canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

/// The logical drawing surface: a fixed canvas with fixed margins, aspect-fit
/// into whatever window space is available (the chart never stretches out of
/// proportion).
///
/// The margins define the pixel extents of the axis scales: the horizontal
/// scale spans `inner_width()` pixels, the vertical scale `inner_height()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSpec {
    pub width: f32,
    pub height: f32,
    pub margin: Margin,
}

impl CanvasSpec {
    /// Width of the plot area inside the margins.
    pub fn inner_width(&self) -> f32 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the plot area inside the margins.
    pub fn inner_height(&self) -> f32 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// Canvas aspect ratio (width over height).
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 500.0,
            margin: Margin {
                top: 20.0,
                right: 40.0,
                bottom: 80.0,
                left: 100.0,
            },
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual UI features on or off.
///
/// All features default to `true` (enabled). Disable features to create a
/// minimal chart for embedded use.
#[derive(Clone, Debug)]
pub struct FeatureFlags {
    /// Show the top bar (title, open/export/screenshot buttons).
    pub top_bar: bool,
    /// Show the hover tooltip.
    pub tooltips: bool,
    /// Draw the abbreviation label on each circle.
    pub point_labels: bool,
    /// Show the plot grid.
    pub grid: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            top_bar: true,
            tooltips: true,
            point_labels: true,
            grid: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// RiskPlotConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the chart window.
#[derive(Clone)]
pub struct RiskPlotConfig {
    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional subheadline rendered next to the title.
    pub headline: Option<String>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    // ── Chart geometry & look ────────────────────────────────────────────────
    /// Logical canvas and margins the scales are computed against.
    pub canvas: CanvasSpec,
    /// Radius of each record circle, in logical canvas pixels.
    pub point_radius: f32,
    /// Downward nudge of the abbreviation label, in logical canvas pixels.
    pub label_offset: f32,

    // ── Features & appearance ────────────────────────────────────────────────
    /// Toggle individual UI features on/off.
    pub features: FeatureFlags,
    /// Color scheme / visual theme.
    pub color_scheme: ColorScheme,
}

impl Default for RiskPlotConfig {
    fn default() -> Self {
        Self {
            title: "RiskPlot".to_string(),
            headline: Some("Health risks vs. demographics, by state".to_string()),
            native_options: None,
            canvas: CanvasSpec::default(),
            point_radius: 15.0,
            label_offset: 5.0,
            features: FeatureFlags::default(),
            color_scheme: ColorScheme::default(),
        }
    }
}
