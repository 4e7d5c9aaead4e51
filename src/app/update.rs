//! Per-frame rendering for [`ScatterPanel`]: the chart itself, animated
//! bounds, and the hover tooltip.

use eframe::egui;
use egui_plot::{MarkerShape, Plot, PlotPoint, PlotResponse, Points, Text};

use crate::tooltip::tooltip_lines;

use super::ScatterPanel;

impl ScatterPanel {
    /// Drive one frame. Call from `eframe::App::update`, or directly from a
    /// parent egui application to embed the chart.
    pub fn update(&mut self, ctx: &egui::Context) {
        if !self.scheme_applied {
            self.config.color_scheme.apply(ctx);
            self.scheme_applied = true;
        }
        let now = ctx.input(|i| i.time);
        self.handle_screenshot_result(ctx);
        if self.config.features.top_bar {
            self.render_top_bar(ctx);
        }
        // Side/bottom panels claim their space before the central chart.
        self.render_x_labels(ctx, now);
        self.render_y_labels(ctx, now);
        self.render_chart_panel(ctx, now);
        if self.chart.is_animating(now) {
            ctx.request_repaint();
        }
    }

    fn render_chart_panel(&mut self, ctx: &egui::Context, now: f64) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.dataset.is_empty() {
                self.render_empty_notice(ui);
                return;
            }
            // Aspect-fit the logical canvas into the available space; the
            // chart scales with its container but never out of proportion.
            let (outer, _resp) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
            let aspect = self.config.canvas.aspect();
            let size = if outer.width() / outer.height() > aspect {
                egui::vec2(outer.height() * aspect, outer.height())
            } else {
                egui::vec2(outer.width(), outer.width() / aspect)
            };
            let rect = egui::Rect::from_center_size(outer.center(), size);
            let zoom = rect.width() / self.config.canvas.width;
            ui.scope_builder(egui::UiBuilder::new().max_rect(rect), |ui| {
                self.render_plot(ui, now, zoom);
            });
        });
    }

    fn render_empty_notice(&self, ui: &mut egui::Ui) {
        ui.centered_and_justified(|ui| {
            let msg = match &self.load_error {
                Some(err) => format!("Could not load the dataset: {err}"),
                None => "The dataset contains no rows.".to_string(),
            };
            ui.label(egui::RichText::new(msg).strong());
        });
    }

    /// Render the scatter chart. `zoom` converts logical canvas pixels to
    /// screen pixels for the current chart size.
    fn render_plot(&mut self, ui: &mut egui::Ui, now: f64, zoom: f32) {
        let x_domain = self.chart.x_domain_at(now);
        let y_domain = self.chart.y_domain_at(now);
        let fill = self.config.color_scheme.circle_fill();
        let label_color = self.config.color_scheme.circle_label();
        let radius = self.config.point_radius * zoom;

        // Drawable records: finite in both active dimensions, paired with
        // their dataset index for hover lookup.
        let positions: Vec<(usize, [f64; 2])> = self
            .dataset
            .records
            .iter()
            .enumerate()
            .map(|(i, r)| {
                (
                    i,
                    [r.x_value(self.chart.x_dim), r.y_value(self.chart.y_dim)],
                )
            })
            .filter(|(_, p)| p[0].is_finite() && p[1].is_finite())
            .collect();

        // Label nudge converted from logical canvas pixels to data units.
        let label_dy = self.config.label_offset as f64 * (y_domain.1 - y_domain.0)
            / self.config.canvas.inner_height() as f64;

        let plot = Plot::new("risk_scatter")
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .show_grid(self.config.features.grid);

        let response = plot.show(ui, |plot_ui| {
            let (x_lo, x_hi) = widen_if_degenerate(x_domain);
            let (y_lo, y_hi) = widen_if_degenerate(y_domain);
            plot_ui.set_plot_bounds_x(x_lo..=x_hi);
            plot_ui.set_plot_bounds_y(y_lo..=y_hi);

            let pts: Vec<[f64; 2]> = positions.iter().map(|(_, p)| *p).collect();
            plot_ui.points(
                Points::new("", pts)
                    .radius(radius)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .color(fill),
            );

            if self.config.features.point_labels {
                for (i, p) in &positions {
                    let abbr = &self.dataset.records[*i].abbr;
                    let rich = egui::RichText::new(abbr)
                        .size((radius * 0.8).max(6.0))
                        .color(label_color);
                    plot_ui.text(
                        Text::new("", PlotPoint::new(p[0], p[1] - label_dy), rich)
                            .anchor(egui::Align2::CENTER_CENTER),
                    );
                }
            }
        });

        if self.config.features.tooltips {
            self.show_hover_tooltip(response, &positions, radius);
        }
    }

    /// Show the record tooltip when the pointer is within `hover_radius`
    /// screen pixels of a circle center.
    fn show_hover_tooltip(
        &self,
        response: PlotResponse<()>,
        positions: &[(usize, [f64; 2])],
        hover_radius: f32,
    ) {
        let Some(pointer) = response.response.hover_pos() else {
            return;
        };
        let transform = response.transform;
        let mut best: Option<(usize, f32)> = None;
        for (i, p) in positions {
            let screen = transform.position_from_point(&PlotPoint::new(p[0], p[1]));
            let d2 = screen.distance_sq(pointer);
            if best.map_or(true, |(_, best_d2)| d2 < best_d2) {
                best = Some((*i, d2));
            }
        }
        let Some((idx, d2)) = best else {
            return;
        };
        if d2 > hover_radius * hover_radius {
            return;
        }
        let record = &self.dataset.records[idx];
        let lines = tooltip_lines(record, self.chart.x_dim, self.chart.y_dim);
        response.response.on_hover_ui_at_pointer(|ui| {
            ui.strong(&lines[0]);
            ui.label(&lines[1]);
            ui.label(&lines[2]);
        });
    }
}

/// The plot transform cannot represent an empty interval, so a collapsed
/// domain is widened symmetrically for display only; the scale contract is
/// untouched.
fn widen_if_degenerate((lo, hi): (f64, f64)) -> (f64, f64) {
    if (hi - lo).abs() < f64::EPSILON {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}
