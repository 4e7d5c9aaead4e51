//! Top bar and utility handlers for dialogs and screenshots.

use eframe::egui;
use egui_phosphor::regular::{CAMERA, EXPORT, FOLDER_OPEN};
use image::{Rgba, RgbaImage};

use crate::color_scheme::ColorScheme;
use crate::data::dataset::Dataset;
use crate::data::export;

use super::ScatterPanel;

impl ScatterPanel {
    /// Render the top bar: title, headline, scheme picker, and the
    /// open/export/screenshot buttons.
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&self.config.title);
                if let Some(headline) = &self.config.headline {
                    ui.label(egui::RichText::new(headline).weak());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(format!("{CAMERA} Save PNG"))
                        .on_hover_text("Take a screenshot of the entire window")
                        .clicked()
                    {
                        self.request_window_shot = true;
                    }
                    ui.menu_button(format!("{EXPORT} Export"), |ui| {
                        if ui
                            .button("Snapshot (CSV)")
                            .on_hover_text("Save the loaded records as CSV")
                            .clicked()
                        {
                            ui.close();
                            self.prompt_and_save_csv();
                        }
                        if ui
                            .button("Snapshot (JSON)")
                            .on_hover_text("Save the records plus the current axis selection")
                            .clicked()
                        {
                            ui.close();
                            self.prompt_and_save_json();
                        }
                    });
                    if ui
                        .button(format!("{FOLDER_OPEN} Open CSV"))
                        .on_hover_text("Load a different survey export")
                        .clicked()
                    {
                        self.prompt_and_open_csv();
                    }
                    egui::ComboBox::from_id_salt("color_scheme")
                        .selected_text(self.config.color_scheme.label())
                        .show_ui(ui, |ui| {
                            for scheme in ColorScheme::all() {
                                if ui
                                    .selectable_label(
                                        self.config.color_scheme == *scheme,
                                        scheme.label(),
                                    )
                                    .clicked()
                                {
                                    self.config.color_scheme = scheme.clone();
                                    self.scheme_applied = false;
                                }
                            }
                        });
                });
            });
        });
    }

    /// Pick a CSV file and replace the dataset with it. A failed load leaves
    /// the current dataset untouched.
    fn prompt_and_open_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new().add_filter("CSV", &["csv"]).pick_file() {
            match Dataset::load_csv(&path) {
                Ok(dataset) => {
                    tracing::info!(records = dataset.len(), path = %path.display(), "dataset replaced");
                    self.dataset = dataset;
                    self.load_error = None;
                    self.chart.reset(&self.dataset);
                }
                Err(e) => {
                    tracing::warn!(error = %e, path = %path.display(), "could not load picked dataset")
                }
            }
        }
    }

    fn prompt_and_save_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV", &["csv"])
            .set_file_name("riskplot_snapshot.csv")
            .save_file()
        {
            if let Err(e) = export::save_snapshot_csv(&path, &self.dataset) {
                tracing::warn!(error = %e, "failed to save CSV snapshot");
            }
        }
    }

    fn prompt_and_save_json(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("riskplot_snapshot.json")
            .save_file()
        {
            if let Err(e) =
                export::save_snapshot_json(&path, &self.dataset, self.chart.x_dim, self.chart.y_dim)
            {
                tracing::warn!(error = %e, "failed to save JSON snapshot");
            }
        }
    }

    /// Handle a pending screenshot request and save the resulting image to a
    /// chosen path.
    pub(super) fn handle_screenshot_result(&mut self, ctx: &egui::Context) {
        if self.request_window_shot {
            self.request_window_shot = false;
            // The result arrives on a later frame as an `Event::Screenshot`.
            ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
        }
        if let Some(image_arc) = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| {
                if let egui::Event::Screenshot { image, .. } = e {
                    Some(image.clone())
                } else {
                    None
                }
            })
        }) {
            let default_name = format!(
                "riskplot_{}.png",
                chrono::Local::now().format("%Y%m%d_%H%M%S")
            );
            if let Some(path) = rfd::FileDialog::new().set_file_name(&default_name).save_file() {
                let egui::ColorImage {
                    size: [w, h],
                    pixels,
                    ..
                } = &*image_arc;
                let mut out = RgbaImage::new(*w as u32, *h as u32);
                for y in 0..*h {
                    for x in 0..*w {
                        let p = pixels[y * *w + x];
                        out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
                    }
                }
                match out.save(&path) {
                    Ok(()) => tracing::info!(path = %path.display(), "saved viewport screenshot"),
                    Err(e) => tracing::warn!(error = %e, "failed to save viewport screenshot"),
                }
            }
        }
    }
}
