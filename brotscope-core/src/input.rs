use crate::viewport::ZoomDirection;

/// Normalized input delivered by whatever owns the window and event pump.
///
/// Pointer coordinates are top-down screen pixels relative to the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    Scroll(ZoomDirection),
    Resize { width: u32, height: u32 },
}

/// An in-progress drag rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSelection {
    pub anchor: (f64, f64),
    pub current: (f64, f64),
}

impl DragSelection {
    pub fn start(x: f64, y: f64) -> Self {
        Self {
            anchor: (x, y),
            current: (x, y),
        }
    }

    pub fn update(&mut self, x: f64, y: f64) {
        self.current = (x, y);
    }

    /// `(x0, y0, x1, y1)` with `x0 <= x1` and `y0 <= y1`.
    pub fn rect(&self) -> (f64, f64, f64, f64) {
        let (ax, ay) = self.anchor;
        let (cx, cy) = self.current;
        (ax.min(cx), ay.min(cy), ax.max(cx), ay.max(cy))
    }

    /// One pixel or less on either axis.
    pub fn is_degenerate(&self) -> bool {
        let (x0, y0, x1, y1) = self.rect();
        x1 - x0 <= 1.0 || y1 - y0 <= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_is_ordered_for_any_drag_direction() {
        let mut sel = DragSelection::start(300.0, 200.0);
        sel.update(100.0, 50.0);
        assert_eq!(sel.rect(), (100.0, 50.0, 300.0, 200.0));
    }

    #[test]
    fn fresh_selection_is_degenerate() {
        let mut sel = DragSelection::start(10.0, 10.0);
        assert!(sel.is_degenerate());
        sel.update(40.0, 11.0);
        assert!(sel.is_degenerate());
        sel.update(40.0, 40.0);
        assert!(!sel.is_degenerate());
    }
}
