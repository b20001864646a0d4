use std::time::{SystemTime, UNIX_EPOCH};

use eframe::egui;
use tracing::{debug, error, info, warn};

use brotscope_core::{Complex, Explorer, InputEvent, Viewport};
use brotscope_render::{export_png, FrameRenderer, Renderer, SnapshotMetadata};

use crate::config::AppConfig;
use crate::input::{self, KeyAction};

pub(crate) const HUD_MARGIN: f32 = 8.0;
pub(crate) const HUD_CORNER_RADIUS: f32 = 4.0;

/// One texel per grid pixel; no filtering.
const TEXTURE_OPTIONS: egui::TextureOptions = egui::TextureOptions::NEAREST;

pub(crate) struct BrotscopeApp {
    pub(crate) explorer: Explorer,
    pub(crate) frame: FrameRenderer,
    texture: Option<egui::TextureHandle>,
    pub(crate) cursor: Option<Complex>,
    pub(crate) show_hud: bool,
    pub(crate) show_help: bool,
    /// Transient message shown in the HUD (e.g. where a snapshot went).
    pub(crate) status: Option<String>,
    config: AppConfig,
}

/// Build the explorer and frame renderer described by `config`.
pub(crate) fn build_session(config: &AppConfig) -> brotscope_render::Result<(Explorer, FrameRenderer)> {
    let width = config.window_width.round().max(1.0) as u32;
    let height = config.window_height.round().max(1.0) as u32;
    let viewport = Viewport::with_default_bounds(width, height)?;
    let renderer = Renderer::new(config.palette.to_palette(), config.tile_columns)?;
    Ok((
        Explorer::new(viewport, config.zoom),
        FrameRenderer::new(renderer),
    ))
}

impl BrotscopeApp {
    pub(crate) fn new(explorer: Explorer, frame: FrameRenderer, config: AppConfig) -> Self {
        Self {
            explorer,
            frame,
            texture: None,
            cursor: None,
            show_hud: config.show_hud,
            show_help: false,
            status: None,
            config,
        }
    }

    // -- Input handling --------------------------------------------------------

    fn handle_canvas_input(&mut self, ctx: &egui::Context, response: &egui::Response) {
        for event in input::canvas_events(ctx, response) {
            match self.explorer.handle(event) {
                Ok(true) if !matches!(event, InputEvent::Resize { .. }) => {
                    debug!(?event, bounds = ?self.explorer.viewport().bounds(), "View changed");
                    self.status = None;
                }
                Ok(_) => {}
                Err(e) => warn!("Ignored {event:?}: {e}"),
            }
        }

        let ppp = ctx.pixels_per_point();
        self.cursor = response.hover_pos().map(|pos| {
            let (x, y) = input::canvas_point(pos, response.rect.min, ppp);
            self.explorer.viewport().screen_to_plane(x, y)
        });
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        for action in input::keyboard_actions(ctx) {
            match action {
                KeyAction::Pan { x, y } => {
                    if let Err(e) = self.explorer.viewport_mut().pan_by_fraction(x, y) {
                        warn!("Keyboard pan failed: {e}");
                    }
                }
                KeyAction::Zoom(direction) => {
                    let factor = input::key_zoom_factor(direction);
                    if let Err(e) = self.explorer.viewport_mut().zoom(direction, factor) {
                        warn!("Keyboard zoom failed: {e}");
                    }
                }
                KeyAction::Reset => {
                    self.explorer.viewport_mut().reset();
                    info!("View reset");
                }
                KeyAction::ToggleHud => {
                    self.show_hud = !self.show_hud;
                    self.config.show_hud = self.show_hud;
                    self.config.save();
                }
                KeyAction::ToggleHelp => self.show_help = !self.show_help,
                KeyAction::Snapshot => self.save_snapshot(),
            }
        }
    }

    // -- Rendering -------------------------------------------------------------

    /// Recompute if the view moved on, then push the buffer to the GPU.
    fn refresh_texture(&mut self, ctx: &egui::Context) {
        match self.frame.refresh(self.explorer.viewport()) {
            Ok(Some(_)) => {
                let buffer = self.frame.buffer();
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [buffer.width() as usize, buffer.height() as usize],
                    &buffer.to_packed(),
                );
                match self.texture.as_mut() {
                    Some(texture) => texture.set(image, TEXTURE_OPTIONS),
                    None => {
                        self.texture = Some(ctx.load_texture("fractal", image, TEXTURE_OPTIONS))
                    }
                }
            }
            Ok(None) => {}
            Err(e) => error!("Render failed: {e}"),
        }
    }

    fn draw_canvas(&self, ctx: &egui::Context, painter: &egui::Painter, rect: egui::Rect) {
        if let Some(texture) = &self.texture {
            // Buffer row 0 is y_min, so the texture is drawn upside down.
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 1.0), egui::pos2(1.0, 0.0));
            painter.image(texture.id(), rect, uv, egui::Color32::WHITE);
        }

        if let Some(selection) = self.explorer.selection() {
            let ppp = ctx.pixels_per_point();
            let (x0, y0, x1, y1) = selection.rect();
            let outline = egui::Rect::from_min_max(
                input::screen_pos((x0, y0), rect.min, ppp),
                input::screen_pos((x1, y1), rect.min, ppp),
            );
            painter.rect_filled(outline, 0.0, egui::Color32::from_white_alpha(24));
            painter.rect_stroke(
                outline,
                0.0,
                egui::Stroke::new(1.5, egui::Color32::WHITE),
                egui::StrokeKind::Outside,
            );
        }
    }

    // -- Snapshot --------------------------------------------------------------

    fn save_snapshot(&mut self) {
        let buffer = self.frame.buffer();
        if !buffer.is_computed() {
            warn!("Snapshot skipped: frame not rendered yet");
            return;
        }

        let dir = crate::app_dir::screenshots_directory();
        if let Err(e) = std::fs::create_dir_all(&dir) {
            error!("Failed to create {}: {e}", dir.display());
            self.status = Some("Snapshot failed".into());
            return;
        }

        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        let path = dir.join(format!("brotscope_{stamp}.png"));
        let viewport = self.explorer.viewport();
        let metadata = SnapshotMetadata {
            bounds: viewport.bounds(),
            iteration_cap: viewport.iteration_cap(),
        };

        match export_png(buffer, &path, &metadata) {
            Ok(()) => {
                info!("Saved snapshot to {}", path.display());
                self.status = Some(format!("Saved {}", path.display()));
            }
            Err(e) => {
                error!("Snapshot failed: {e}");
                self.status = Some("Snapshot failed".into());
            }
        }
    }
}

impl eframe::App for BrotscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let available = ui.available_size();
                let (response, painter) =
                    ui.allocate_painter(available, egui::Sense::click_and_drag());
                self.handle_canvas_input(ctx, &response);
                self.refresh_texture(ctx);
                self.draw_canvas(ctx, &painter, response.rect);
            });

        self.show_hud(ctx);
        self.show_help_window(ctx);
    }
}
