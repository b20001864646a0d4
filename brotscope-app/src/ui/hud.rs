use eframe::egui;

use crate::app::{BrotscopeApp, HUD_CORNER_RADIUS, HUD_MARGIN};

const HUD_ALPHA: u8 = 180;

impl BrotscopeApp {
    pub(crate) fn show_hud(&self, ctx: &egui::Context) {
        if !self.show_hud {
            return;
        }

        let viewport = self.explorer.viewport();
        let bounds = viewport.bounds();

        // -- Top-left: view info --
        egui::Area::new(egui::Id::new("hud_view"))
            .anchor(egui::Align2::LEFT_TOP, [HUD_MARGIN, HUD_MARGIN])
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_black_alpha(HUD_ALPHA))
                    .inner_margin(egui::Margin::same(8))
                    .corner_radius(HUD_CORNER_RADIUS)
                    .show(ui, |ui| {
                        ui.style_mut().visuals.override_text_color =
                            Some(egui::Color32::from_rgb(220, 220, 220));
                        ui.label(format!("Re  [{:.10}, {:.10}]", bounds.x_min, bounds.x_max));
                        ui.label(format!("Im  [{:.10}, {:.10}]", bounds.y_min, bounds.y_max));
                        ui.label(format!(
                            "Zoom  {:.3e}x",
                            brotscope_core::ViewBounds::REFERENCE_WIDTH / bounds.width()
                        ));
                        ui.label(format!("Iterations  {}", viewport.iteration_cap()));
                        match self.cursor {
                            Some(c) => ui.label(format!("Cursor  {c}")),
                            None => ui.label("Cursor  -"),
                        };
                    });
            });

        // -- Bottom-center: last render --
        egui::Area::new(egui::Id::new("hud_render"))
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -HUD_MARGIN])
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(egui::Color32::from_black_alpha(HUD_ALPHA))
                    .inner_margin(egui::Margin::same(8))
                    .corner_radius(HUD_CORNER_RADIUS)
                    .show(ui, |ui| {
                        ui.style_mut().visuals.override_text_color =
                            Some(egui::Color32::from_rgb(220, 220, 220));
                        ui.horizontal(|ui| {
                            ui.label(format!("{}x{}", viewport.width(), viewport.height()));
                            if let Some(stats) = self.frame.last_stats() {
                                ui.label(format!(
                                    "{:.1} ms",
                                    stats.elapsed.as_secs_f64() * 1000.0
                                ));
                                ui.label(format!(
                                    "{} tiles, {} shortcut px",
                                    stats.tiles, stats.pixels.interior_shortcuts
                                ));
                            }
                            if let Some(status) = &self.status {
                                ui.colored_label(egui::Color32::from_rgb(100, 255, 100), status);
                            }
                        });
                    });
            });
    }
}
