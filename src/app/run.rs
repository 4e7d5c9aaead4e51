//! Top-level entry point for running the chart as a native window.

use eframe::egui;

use crate::config::RiskPlotConfig;
use crate::data::dataset::{Dataset, DatasetError};

use super::ScatterPanel;

/// Launch the chart in a native window. Blocks until the window is closed.
///
/// A failed dataset load still opens the window: the chart area shows a
/// notice instead of points, keeping load failures non-fatal.
pub fn run_riskplot(
    dataset: Result<Dataset, DatasetError>,
    mut config: RiskPlotConfig,
) -> eframe::Result<()> {
    let title = config.title.clone();
    let mut opts = config.native_options.take().unwrap_or_default();
    if opts.viewport.inner_size.is_none() {
        // Room for the canvas plus the label panels and top bar.
        let size = egui::vec2(config.canvas.width + 260.0, config.canvas.height + 140.0);
        opts.viewport = opts.viewport.clone().with_inner_size(size);
    }
    let panel = ScatterPanel::from_load(dataset, config);
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install the Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(RiskPlotApp { panel }))
        }),
    )
}

/// Thin eframe wrapper around [`ScatterPanel`].
struct RiskPlotApp {
    panel: ScatterPanel,
}

impl eframe::App for RiskPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.panel.update(ctx);
    }
}
