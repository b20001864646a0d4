use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::input::{DragSelection, InputEvent};
use crate::viewport::{Viewport, ZoomDirection};

/// Where scroll zoom is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoomAnchor {
    /// Zoom about the center of the view.
    #[default]
    Center,
    /// Alternative gesture: keep the point under the pointer fixed.
    Pointer,
}

/// Scroll zoom behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomSettings {
    #[serde(default = "default_zoom_in_factor")]
    pub zoom_in_factor: f64,
    #[serde(default = "default_zoom_out_factor")]
    pub zoom_out_factor: f64,
    #[serde(default)]
    pub anchor: ZoomAnchor,
}

fn default_zoom_in_factor() -> f64 {
    0.9
}
fn default_zoom_out_factor() -> f64 {
    1.1
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            zoom_in_factor: default_zoom_in_factor(),
            zoom_out_factor: default_zoom_out_factor(),
            anchor: ZoomAnchor::default(),
        }
    }
}

impl ZoomSettings {
    pub fn factor(&self, direction: ZoomDirection) -> f64 {
        match direction {
            ZoomDirection::In => self.zoom_in_factor,
            ZoomDirection::Out => self.zoom_out_factor,
        }
    }
}

/// Turns a stream of [`InputEvent`]s into viewport mutations.
///
/// Owns the one `Viewport` and the transient drag selection.
#[derive(Debug, Clone)]
pub struct Explorer {
    viewport: Viewport,
    selection: Option<DragSelection>,
    zoom: ZoomSettings,
    pointer: Option<(f64, f64)>,
}

impl Explorer {
    pub fn new(viewport: Viewport, zoom: ZoomSettings) -> Self {
        Self {
            viewport,
            selection: None,
            zoom,
            pointer: None,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Direct access for gestures the event stream doesn't model (keyboard).
    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// The active drag rectangle, if any.
    pub fn selection(&self) -> Option<&DragSelection> {
        self.selection.as_ref()
    }

    pub fn zoom_settings(&self) -> &ZoomSettings {
        &self.zoom
    }

    /// Apply one event. Returns `true` if the view bounds or size changed.
    pub fn handle(&mut self, event: InputEvent) -> crate::Result<bool> {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.pointer = Some((x, y));
                self.selection = Some(DragSelection::start(x, y));
                Ok(false)
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer = Some((x, y));
                if let Some(sel) = self.selection.as_mut() {
                    sel.update(x, y);
                }
                Ok(false)
            }
            InputEvent::PointerUp { x, y } => {
                self.pointer = Some((x, y));
                let Some(mut sel) = self.selection.take() else {
                    return Ok(false);
                };
                sel.update(x, y);
                if sel.is_degenerate() {
                    debug!(rect = ?sel.rect(), "Ignoring degenerate selection");
                    return Ok(false);
                }
                let aspect = self.viewport.aspect_ratio();
                Ok(self.viewport.select_rect(sel.anchor, sel.current, aspect))
            }
            InputEvent::Scroll(direction) => {
                let factor = self.zoom.factor(direction);
                match (self.zoom.anchor, self.pointer) {
                    (ZoomAnchor::Pointer, Some((x, y))) => {
                        self.viewport.zoom_at(x, y, direction, factor)?
                    }
                    _ => self.viewport.zoom(direction, factor)?,
                }
                Ok(true)
            }
            InputEvent::Resize { width, height } => {
                if width == 0 || height == 0 {
                    debug!(width, height, "Ignoring zero-size resize");
                    return Ok(false);
                }
                if width == self.viewport.width() && height == self.viewport.height() {
                    return Ok(false);
                }
                // A selection drawn against the old grid no longer means anything.
                self.selection = None;
                self.viewport.resize(width, height)?;
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::ViewBounds;

    fn explorer() -> Explorer {
        Explorer::new(
            Viewport::with_default_bounds(800, 600).unwrap(),
            ZoomSettings::default(),
        )
    }

    #[test]
    fn scroll_in_uses_configured_factor() {
        let mut ex = explorer();
        assert!(ex.handle(InputEvent::Scroll(ZoomDirection::In)).unwrap());
        let b = ex.viewport().bounds();
        assert!((b.width() - 3.15).abs() < 1e-12);
        assert!((b.center().re - (-0.75)).abs() < 1e-12);
    }

    #[test]
    fn drag_then_release_selects() {
        let mut ex = explorer();
        assert!(!ex.handle(InputEvent::PointerDown { x: 100.0, y: 100.0 }).unwrap());
        assert!(!ex.handle(InputEvent::PointerMove { x: 300.0, y: 250.0 }).unwrap());
        assert_eq!(ex.selection().unwrap().current, (300.0, 250.0));
        assert!(ex.handle(InputEvent::PointerUp { x: 300.0, y: 250.0 }).unwrap());
        assert!(ex.selection().is_none());
        assert!(ex.viewport().bounds().width() < 3.5);
    }

    #[test]
    fn click_without_drag_is_ignored() {
        let mut ex = explorer();
        ex.handle(InputEvent::PointerDown { x: 50.0, y: 50.0 }).unwrap();
        assert!(!ex.handle(InputEvent::PointerUp { x: 51.0, y: 50.0 }).unwrap());
        assert!(ex.selection().is_none());
        assert_eq!(ex.viewport().bounds(), ViewBounds::DEFAULT);
    }

    #[test]
    fn thin_strip_drag_leaves_view_untouched() {
        let mut ex = explorer();
        let rev = ex.viewport().revision();
        ex.handle(InputEvent::PointerDown { x: 100.0, y: 100.0 }).unwrap();
        ex.handle(InputEvent::PointerMove { x: 400.0, y: 100.5 }).unwrap();
        assert!(ex.selection().unwrap().is_degenerate());
        assert!(!ex.handle(InputEvent::PointerUp { x: 400.0, y: 100.5 }).unwrap());
        assert!(ex.selection().is_none());
        assert_eq!(ex.viewport().revision(), rev);
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut ex = explorer();
        assert!(!ex.handle(InputEvent::PointerUp { x: 10.0, y: 10.0 }).unwrap());
    }

    #[test]
    fn zero_resize_is_ignored() {
        let mut ex = explorer();
        assert!(!ex.handle(InputEvent::Resize { width: 0, height: 0 }).unwrap());
        assert_eq!(ex.viewport().width(), 800);
    }

    #[test]
    fn same_size_resize_does_not_recompute() {
        let mut ex = explorer();
        let rev = ex.viewport().revision();
        assert!(!ex.handle(InputEvent::Resize { width: 800, height: 600 }).unwrap());
        assert_eq!(ex.viewport().revision(), rev);
        assert!(ex.handle(InputEvent::Resize { width: 640, height: 480 }).unwrap());
        assert_eq!(ex.viewport().tables().width(), 640);
    }

    #[test]
    fn pointer_anchor_zooms_under_cursor() {
        let settings = ZoomSettings {
            anchor: ZoomAnchor::Pointer,
            ..ZoomSettings::default()
        };
        let mut ex = Explorer::new(Viewport::with_default_bounds(800, 600).unwrap(), settings);
        ex.handle(InputEvent::PointerMove { x: 0.0, y: 0.0 }).unwrap();
        ex.handle(InputEvent::Scroll(ZoomDirection::In)).unwrap();
        let b = ex.viewport().bounds();
        // Top-left corner is pinned.
        assert!((b.x_min - (-2.5)).abs() < 1e-12);
        assert!((b.y_max - 1.75).abs() < 1e-12);
    }

    #[test]
    fn zoom_settings_deserialize_with_defaults() {
        let s: ZoomSettings = serde_json::from_str(r#"{"anchor":"pointer"}"#).unwrap();
        assert_eq!(s.anchor, ZoomAnchor::Pointer);
        assert!((s.zoom_in_factor - 0.9).abs() < f64::EPSILON);
        assert!((s.zoom_out_factor - 1.1).abs() < f64::EPSILON);
    }
}
