//! Translate egui input into explorer events and keyboard actions.

use eframe::egui;

use brotscope_core::{InputEvent, ZoomDirection};

/// Fraction of the view shifted per arrow key press.
pub(crate) const PAN_STEP: f64 = 0.1;
/// Keyboard zoom steps are coarser than the scroll wheel's.
pub(crate) const KEY_ZOOM_IN_FACTOR: f64 = 0.8;
pub(crate) const KEY_ZOOM_OUT_FACTOR: f64 = 1.25;

/// Something a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum KeyAction {
    /// Fractions of the view spans; positive `y` moves up.
    Pan { x: f64, y: f64 },
    Zoom(ZoomDirection),
    Reset,
    ToggleHud,
    ToggleHelp,
    Snapshot,
}

/// Pixel-grid size for a canvas of `size` points.
pub(crate) fn grid_size(size: egui::Vec2, pixels_per_point: f32) -> (u32, u32) {
    let to_px = |v: f32| (v * pixels_per_point).round().max(0.0) as u32;
    (to_px(size.x), to_px(size.y))
}

/// Top-down grid pixel under `pos`, relative to the canvas origin.
pub(crate) fn canvas_point(pos: egui::Pos2, origin: egui::Pos2, pixels_per_point: f32) -> (f64, f64) {
    (
        ((pos.x - origin.x) * pixels_per_point) as f64,
        ((pos.y - origin.y) * pixels_per_point) as f64,
    )
}

/// Inverse of [`canvas_point`].
pub(crate) fn screen_pos(point: (f64, f64), origin: egui::Pos2, pixels_per_point: f32) -> egui::Pos2 {
    egui::pos2(
        origin.x + point.0 as f32 / pixels_per_point,
        origin.y + point.1 as f32 / pixels_per_point,
    )
}

/// Where a drag began. egui reports the drag only once the pointer has moved
/// past its threshold, so the press origin is preferred over the current position.
pub(crate) fn drag_anchor(
    press_origin: Option<egui::Pos2>,
    current: Option<egui::Pos2>,
) -> Option<egui::Pos2> {
    press_origin.or(current)
}

/// Events for one frame of canvas interaction, resize first.
pub(crate) fn canvas_events(ctx: &egui::Context, response: &egui::Response) -> Vec<InputEvent> {
    let ppp = ctx.pixels_per_point();
    let origin = response.rect.min;
    let mut events = Vec::new();

    let (width, height) = grid_size(response.rect.size(), ppp);
    events.push(InputEvent::Resize { width, height });

    let pointer = |pos: egui::Pos2| canvas_point(pos, origin, ppp);

    if response.drag_started_by(egui::PointerButton::Primary) {
        let press_origin = ctx.input(|i| i.pointer.press_origin());
        if let Some(pos) = drag_anchor(press_origin, response.interact_pointer_pos()) {
            let (x, y) = pointer(pos);
            events.push(InputEvent::PointerDown { x, y });
        }
    }

    if response.drag_stopped_by(egui::PointerButton::Primary) {
        let release = response
            .interact_pointer_pos()
            .or_else(|| ctx.input(|i| i.pointer.latest_pos()));
        if let Some(pos) = release {
            let (x, y) = pointer(pos);
            events.push(InputEvent::PointerUp { x, y });
        }
    } else {
        // While dragging, keep tracking the pointer outside the canvas too.
        let pos = if response.dragged() {
            response.interact_pointer_pos()
        } else {
            response.hover_pos()
        };
        if let Some(pos) = pos {
            let (x, y) = pointer(pos);
            events.push(InputEvent::PointerMove { x, y });
        }
    }

    if response.hovered() {
        let scroll_y = ctx.input(|i| i.raw_scroll_delta.y);
        if let Some(direction) = ZoomDirection::from_scroll_delta(scroll_y) {
            events.push(InputEvent::Scroll(direction));
        }
    }

    events
}

/// Keyboard shortcuts pressed this frame. Nothing fires while a widget has focus.
pub(crate) fn keyboard_actions(ctx: &egui::Context) -> Vec<KeyAction> {
    if ctx.wants_keyboard_input() {
        return Vec::new();
    }
    ctx.input(|input| {
        let bindings: &[(egui::Key, KeyAction)] = &[
            (egui::Key::ArrowLeft, KeyAction::Pan { x: -PAN_STEP, y: 0.0 }),
            (egui::Key::ArrowRight, KeyAction::Pan { x: PAN_STEP, y: 0.0 }),
            (egui::Key::ArrowUp, KeyAction::Pan { x: 0.0, y: PAN_STEP }),
            (egui::Key::ArrowDown, KeyAction::Pan { x: 0.0, y: -PAN_STEP }),
            (egui::Key::Plus, KeyAction::Zoom(ZoomDirection::In)),
            (egui::Key::Equals, KeyAction::Zoom(ZoomDirection::In)),
            (egui::Key::Minus, KeyAction::Zoom(ZoomDirection::Out)),
            (egui::Key::R, KeyAction::Reset),
            (egui::Key::H, KeyAction::ToggleHud),
            (egui::Key::F1, KeyAction::ToggleHelp),
            (egui::Key::S, KeyAction::Snapshot),
        ];
        bindings
            .iter()
            .filter(|(key, _)| input.key_pressed(*key) && !input.modifiers.ctrl)
            .map(|&(_, action)| action)
            .collect()
    })
}

pub(crate) fn key_zoom_factor(direction: ZoomDirection) -> f64 {
    match direction {
        ZoomDirection::In => KEY_ZOOM_IN_FACTOR,
        ZoomDirection::Out => KEY_ZOOM_OUT_FACTOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_size_scales_by_pixels_per_point() {
        assert_eq!(grid_size(egui::vec2(400.0, 300.0), 1.0), (400, 300));
        assert_eq!(grid_size(egui::vec2(400.0, 300.0), 2.0), (800, 600));
        assert_eq!(grid_size(egui::vec2(100.4, 0.0), 1.5), (151, 0));
    }

    #[test]
    fn canvas_point_is_relative_and_top_down() {
        let origin = egui::pos2(10.0, 20.0);
        assert_eq!(canvas_point(egui::pos2(10.0, 20.0), origin, 1.0), (0.0, 0.0));
        assert_eq!(canvas_point(egui::pos2(60.0, 120.0), origin, 2.0), (100.0, 200.0));
    }

    #[test]
    fn screen_pos_inverts_canvas_point() {
        let origin = egui::pos2(5.0, 7.0);
        let pos = egui::pos2(105.0, 57.0);
        let point = canvas_point(pos, origin, 1.5);
        assert_eq!(screen_pos(point, origin, 1.5), pos);
    }

    #[test]
    fn drag_anchors_at_press_not_threshold_position() {
        let press = egui::pos2(100.0, 100.0);
        let past_threshold = egui::pos2(106.0, 103.0);
        assert_eq!(drag_anchor(Some(press), Some(past_threshold)), Some(press));
        assert_eq!(drag_anchor(None, Some(past_threshold)), Some(past_threshold));
        assert_eq!(drag_anchor(None, None), None);
    }

    #[test]
    fn keyboard_zoom_is_symmetric() {
        let round_trip =
            key_zoom_factor(ZoomDirection::In) * key_zoom_factor(ZoomDirection::Out);
        assert!((round_trip - 1.0).abs() < 1e-12);
    }
}
