use tracing::debug;

use crate::bounds::{Axis, ViewBounds};
use crate::complex::Complex;
use crate::error::CoreError;
use crate::iteration::iteration_cap;
use crate::tables::{pixel_to_axis, CoordinateTables};

/// Scroll sense of a zoom gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Positive scroll delta zooms in, negative zooms out, zero does nothing.
    pub fn from_scroll_delta(delta: f32) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::In)
        } else if delta < 0.0 {
            Some(Self::Out)
        } else {
            None
        }
    }

    /// The span multiplier for `factor`, oriented to this direction.
    ///
    /// `In` always shrinks and `Out` always grows, so `(In, 1.1)` and
    /// `(In, 1/1.1)` are the same zoom.
    fn multiplier(self, factor: f64) -> f64 {
        match self {
            Self::In if factor > 1.0 => 1.0 / factor,
            Self::Out if factor < 1.0 => 1.0 / factor,
            _ => factor,
        }
    }
}

/// The single owner of the visible region and everything derived from it.
///
/// Every mutating call rebuilds the coordinate tables and iteration cap before
/// it returns, so readers never observe tables that disagree with the current
/// bounds and grid size. [`revision`](Self::revision) advances on each rebuild.
#[derive(Debug, Clone)]
pub struct Viewport {
    bounds: ViewBounds,
    width: u32,
    height: u32,
    tables: CoordinateTables,
    iteration_cap: u32,
    revision: u64,
}

impl Viewport {
    /// Inverted axes are swapped; empty or non-finite bounds are rejected.
    pub fn new(width: u32, height: u32, bounds: ViewBounds) -> crate::Result<Self> {
        check_dimensions(width, height)?;
        let bounds = bounds.normalized();
        bounds.validate()?;
        let mut vp = Self {
            bounds,
            width,
            height,
            tables: CoordinateTables::build(&bounds, 0, 0),
            iteration_cap: 0,
            revision: 0,
        };
        vp.recompute();
        Ok(vp)
    }

    /// A grid of `width × height` showing [`ViewBounds::DEFAULT`].
    pub fn with_default_bounds(width: u32, height: u32) -> crate::Result<Self> {
        Self::new(width, height, ViewBounds::DEFAULT)
    }

    // -- Accessors --

    pub fn bounds(&self) -> ViewBounds {
        self.bounds
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel-grid width / height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    pub fn tables(&self) -> &CoordinateTables {
        &self.tables
    }

    pub fn iteration_cap(&self) -> u32 {
        self.iteration_cap
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    // -- Mutations --

    /// Change the pixel-grid size. Zero dimensions are rejected.
    pub fn resize(&mut self, width: u32, height: u32) -> crate::Result<()> {
        check_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        self.recompute();
        Ok(())
    }

    /// Zoom about the center of the current bounds.
    pub fn zoom(&mut self, direction: ZoomDirection, factor: f64) -> crate::Result<()> {
        let m = direction.multiplier(check_factor(factor)?);
        self.bounds = self.bounds.scaled_about_center(m);
        self.recompute();
        Ok(())
    }

    /// Pointer-anchored zoom: the plane point under `(screen_x, screen_y)`
    /// stays under the pointer. An alternative to [`zoom`](Self::zoom).
    pub fn zoom_at(
        &mut self,
        screen_x: f64,
        screen_y: f64,
        direction: ZoomDirection,
        factor: f64,
    ) -> crate::Result<()> {
        let m = direction.multiplier(check_factor(factor)?);
        let anchor = self.screen_to_plane(screen_x, screen_y);
        self.bounds = self.bounds.scaled_about(anchor, m);
        self.recompute();
        Ok(())
    }

    /// Shift the view by a fraction of its spans (positive `fy` moves up).
    ///
    /// On error the view is left unchanged.
    pub fn pan_by_fraction(&mut self, fx: f64, fy: f64) -> crate::Result<()> {
        if !(fx.is_finite() && fy.is_finite()) {
            return Err(CoreError::InvalidPanFraction { fx, fy });
        }
        let moved = self
            .bounds
            .translated(fx * self.bounds.width(), fy * self.bounds.height());
        moved.validate()?;
        self.bounds = moved;
        self.recompute();
        Ok(())
    }

    /// Replace the bounds wholesale. Inverted axes are swapped; empty or
    /// non-finite bounds are rejected and the view is left unchanged.
    pub fn set_bounds(&mut self, bounds: ViewBounds) -> crate::Result<()> {
        let bounds = bounds.normalized();
        bounds.validate()?;
        self.bounds = bounds;
        self.recompute();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.bounds = ViewBounds::DEFAULT;
        self.recompute();
    }

    /// Replace the bounds with the plane region under a drag rectangle.
    ///
    /// `anchor` and `release` are top-down screen pixels. The shorter side of
    /// the selection is extended (in the drag direction) until its
    /// width / height equals `pixel_aspect_ratio`, so the whole selection
    /// stays visible. Selections of one pixel or less on either axis are
    /// ignored; returns whether the bounds changed.
    pub fn select_rect(
        &mut self,
        anchor: (f64, f64),
        release: (f64, f64),
        pixel_aspect_ratio: f64,
    ) -> bool {
        let (ax, ay) = anchor;
        let (rx, ry) = release;
        let (sx0, sx1) = (ax.min(rx), ax.max(rx));
        let (sy0, sy1) = (ay.min(ry), ay.max(ry));
        let sel_w = sx1 - sx0;
        let sel_h = sy1 - sy0;

        if !(sel_w > 1.0 && sel_h > 1.0) {
            debug!(sel_w, sel_h, "Ignoring degenerate selection");
            return false;
        }
        if !(pixel_aspect_ratio > 0.0 && pixel_aspect_ratio.is_finite()) {
            debug!(pixel_aspect_ratio, "Ignoring selection with invalid aspect ratio");
            return false;
        }

        let (mut x0, mut x1, mut y0, mut y1) = (sx0, sx1, sy0, sy1);
        let sel_ratio = sel_w / sel_h;
        if sel_ratio > pixel_aspect_ratio {
            (y0, y1) = extend_span(
                (sy0, sy1),
                sel_w / pixel_aspect_ratio,
                ry >= ay,
                self.height as f64,
            );
        } else if sel_ratio < pixel_aspect_ratio {
            (x0, x1) = extend_span(
                (sx0, sx1),
                sel_h * pixel_aspect_ratio,
                rx >= ax,
                self.width as f64,
            );
        }

        // Screen row 0 is the top of the view, i.e. `y_max`.
        let top_left = self.screen_to_plane(x0, y0);
        let bottom_right = self.screen_to_plane(x1, y1);
        self.bounds = ViewBounds {
            x_min: top_left.re,
            x_max: bottom_right.re,
            y_min: bottom_right.im,
            y_max: top_left.im,
        }
        .normalized();
        self.recompute();
        true
    }

    // -- Coordinate transforms --

    /// `plane = pixel / limit × (max − min) + min` along `axis`.
    #[inline]
    pub fn pixel_to_plane(&self, pixel: f64, axis: Axis) -> f64 {
        let (min, max) = self.bounds.range(axis);
        pixel_to_axis(pixel, self.limit(axis), min, max)
    }

    /// Inverse of [`pixel_to_plane`](Self::pixel_to_plane).
    #[inline]
    pub fn plane_to_pixel(&self, value: f64, axis: Axis) -> f64 {
        let (min, max) = self.bounds.range(axis);
        (value - min) / (max - min) * self.limit(axis) as f64
    }

    /// Plane point under a top-down screen pixel (row 0 = `y_max`).
    pub fn screen_to_plane(&self, screen_x: f64, screen_y: f64) -> Complex {
        Complex::new(
            self.pixel_to_plane(screen_x, Axis::Real),
            self.pixel_to_plane(self.height as f64 - screen_y, Axis::Imag),
        )
    }

    /// Top-down screen pixel of a plane point; inverse of
    /// [`screen_to_plane`](Self::screen_to_plane).
    pub fn plane_to_screen(&self, point: Complex) -> (f64, f64) {
        (
            self.plane_to_pixel(point.re, Axis::Real),
            self.height as f64 - self.plane_to_pixel(point.im, Axis::Imag),
        )
    }

    #[inline]
    fn limit(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Real => self.width,
            Axis::Imag => self.height,
        }
    }

    fn recompute(&mut self) {
        self.tables = CoordinateTables::build(&self.bounds, self.width, self.height);
        self.iteration_cap = iteration_cap(self.bounds.width());
        self.revision += 1;
        debug!(
            revision = self.revision,
            width = self.width,
            height = self.height,
            x_min = self.bounds.x_min,
            x_max = self.bounds.x_max,
            y_min = self.bounds.y_min,
            y_max = self.bounds.y_max,
            iteration_cap = self.iteration_cap,
            "Recomputed coordinate tables"
        );
    }
}

fn check_dimensions(width: u32, height: u32) -> crate::Result<()> {
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidDimensions { width, height });
    }
    Ok(())
}

fn check_factor(factor: f64) -> crate::Result<f64> {
    if factor <= 0.0 || !factor.is_finite() {
        return Err(CoreError::InvalidZoomFactor(factor));
    }
    Ok(factor)
}

/// Grow `(lo, hi)` to `extent` pixels, forward from `lo` or backward from `hi`.
///
/// If the grown span leaves `[0, limit]` it is shifted back inside, but never
/// so far that the original span stops being covered.
fn extend_span((lo, hi): (f64, f64), extent: f64, forward: bool, limit: f64) -> (f64, f64) {
    let (mut a, mut b) = if forward {
        (lo, lo + extent)
    } else {
        (hi - extent, hi)
    };
    if b > limit {
        let shift = (b - limit).min(b - hi).min(a.max(0.0));
        a -= shift;
        b -= shift;
    }
    if a < 0.0 {
        let shift = (-a).min(lo - a).min((limit - b).max(0.0));
        a += shift;
        b += shift;
    }
    (a, b)
}
