use eframe::egui;

use crate::app::BrotscopeApp;

impl BrotscopeApp {
    pub(crate) fn show_help_window(&mut self, ctx: &egui::Context) {
        if !self.show_help {
            return;
        }

        let mut open = true;
        egui::Window::new("Controls")
            .open(&mut open)
            .resizable(false)
            .default_width(300.0)
            .frame(
                egui::Frame::window(&ctx.style())
                    .fill(egui::Color32::from_rgba_unmultiplied(10, 10, 10, 210)),
            )
            .show(ctx, |ui| {
                ui.style_mut().visuals.override_text_color =
                    Some(egui::Color32::from_rgb(220, 220, 220));

                let sections: &[(&str, &[(&str, &str)])] = &[
                    (
                        "Keyboard",
                        &[
                            ("Arrow keys", "Pan viewport"),
                            ("+ / -", "Zoom in / out about the center"),
                            ("R", "Reset view"),
                            ("H", "Toggle HUD"),
                            ("S", "Save PNG snapshot"),
                            ("F1", "This window"),
                        ],
                    ),
                    (
                        "Mouse",
                        &[
                            ("Left drag", "Selection-box zoom"),
                            ("Scroll wheel", "Zoom in / out"),
                        ],
                    ),
                ];

                for (i, &(heading, rows)) in sections.iter().enumerate() {
                    if i > 0 {
                        ui.add_space(8.0);
                    }
                    ui.heading(heading);
                    ui.add_space(2.0);
                    egui::Grid::new(heading)
                        .num_columns(2)
                        .spacing([12.0, 2.0])
                        .show(ui, |ui| {
                            for &(k, d) in rows {
                                ui.label(
                                    egui::RichText::new(k).strong().color(egui::Color32::WHITE),
                                );
                                ui.label(d);
                                ui.end_row();
                            }
                        });
                }
            });

        if !open {
            self.show_help = false;
        }
    }
}
