//! Clickable axis-dimension label controls.
//!
//! Three labels per axis group; the one bound to the axis renders active.
//! Clicks feed the chart reducer, which ignores clicks on the already-active
//! label, so exactly one label per group is active at all times.

use eframe::egui;

use crate::data::dimension::{XDimension, YDimension};
use crate::state::ChartEvent;

use super::ScatterPanel;

impl ScatterPanel {
    /// The X-dimension label group, stacked below the chart.
    pub(super) fn render_x_labels(&mut self, ctx: &egui::Context, now: f64) {
        egui::TopBottomPanel::bottom("x_dimension_labels").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.vertical_centered(|ui| {
                for dim in XDimension::ALL {
                    let active = dim == self.chart.x_dim;
                    if ui
                        .selectable_label(active, control_text(dim.control_label(), active))
                        .clicked()
                    {
                        self.chart
                            .apply(&self.dataset, ChartEvent::SelectX(dim), now);
                    }
                }
            });
            ui.add_space(4.0);
        });
    }

    /// The Y-dimension label group, stacked left of the chart.
    pub(super) fn render_y_labels(&mut self, ctx: &egui::Context, now: f64) {
        egui::SidePanel::left("y_dimension_labels")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                // Center the group vertically against the chart area.
                let group_height = 3.0 * ui.spacing().interact_size.y;
                ui.add_space(((ui.available_height() - group_height) / 2.0).max(0.0));
                for dim in YDimension::ALL {
                    let active = dim == self.chart.y_dim;
                    if ui
                        .selectable_label(active, control_text(dim.control_label(), active))
                        .clicked()
                    {
                        self.chart
                            .apply(&self.dataset, ChartEvent::SelectY(dim), now);
                    }
                }
            });
    }
}

/// Strong text for the active control, weak for inactive ones.
fn control_text(label: &str, active: bool) -> egui::RichText {
    if active {
        egui::RichText::new(label).strong()
    } else {
        egui::RichText::new(label).weak()
    }
}
