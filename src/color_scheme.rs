//! Color scheme definitions for the chart UI.

use eframe::egui::{Color32, Context, Visuals};

/// Visual theme for the chart window.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
    /// ggplot2-inspired: light grey plot background with muted colors.
    GgPlot,
}

impl ColorScheme {
    /// All built-in schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Dark, ColorScheme::Light, ColorScheme::GgPlot]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
            ColorScheme::GgPlot => "ggplot2",
        }
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        match self {
            ColorScheme::Dark => ctx.set_visuals(Visuals::dark()),
            ColorScheme::Light => ctx.set_visuals(Visuals::light()),
            ColorScheme::GgPlot => {
                let mut v = Visuals::light();
                v.panel_fill = Color32::from_rgb(250, 250, 250);
                v.extreme_bg_color = Color32::from_rgb(229, 229, 229);
                v.faint_bg_color = Color32::from_rgb(237, 237, 237);
                ctx.set_visuals(v);
            }
        }
    }

    /// Fill color of the record circles.
    pub fn circle_fill(&self) -> Color32 {
        match self {
            // Translucent steel blue so overlapping states stay readable.
            ColorScheme::Dark | ColorScheme::Light => {
                Color32::from_rgba_unmultiplied(137, 189, 211, 160)
            }
            ColorScheme::GgPlot => Color32::from_rgba_unmultiplied(59, 112, 160, 160),
        }
    }

    /// Color of the abbreviation label drawn on each circle.
    pub fn circle_label(&self) -> Color32 {
        Color32::WHITE
    }
}
