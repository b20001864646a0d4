use crate::complex::Complex;
use crate::error::CoreError;

/// Selects the horizontal (real) or vertical (imaginary) axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Real,
    Imag,
}

/// The visible rectangle of the complex plane.
///
/// Both axes always satisfy `min < max`. The rectangle's aspect ratio is
/// independent of the pixel grid; each axis is mapped on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewBounds {
    /// Real span of the reference view; the iteration policy is relative to it.
    pub const REFERENCE_WIDTH: f64 = 3.5;

    /// `[-2.5, 1.0] × [-1.75, 1.75]`: the whole set with some margin.
    pub const DEFAULT: Self = Self {
        x_min: -2.5,
        x_max: 1.0,
        y_min: -1.75,
        y_max: 1.75,
    };

    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> crate::Result<Self> {
        let bounds = Self {
            x_min,
            x_max,
            y_min,
            y_max,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Build bounds from two arbitrary corners, swapping so `min < max`.
    pub fn from_corners(a: Complex, b: Complex) -> crate::Result<Self> {
        Self::new(a.re.min(b.re), a.re.max(b.re), a.im.min(b.im), a.im.max(b.im))
    }

    /// Both axes finite and strictly ordered.
    pub(crate) fn validate(&self) -> crate::Result<()> {
        let all = [self.x_min, self.x_max, self.y_min, self.y_max];
        if all.iter().any(|v| !v.is_finite()) {
            return Err(CoreError::InvalidBounds {
                reason: format!("non-finite component in {self:?}"),
            });
        }
        if self.x_min >= self.x_max {
            return Err(CoreError::InvalidBounds {
                reason: format!("x_min {} must be < x_max {}", self.x_min, self.x_max),
            });
        }
        if self.y_min >= self.y_max {
            return Err(CoreError::InvalidBounds {
                reason: format!("y_min {} must be < y_max {}", self.y_min, self.y_max),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn center(&self) -> Complex {
        Complex::new(
            (self.x_min + self.x_max) / 2.0,
            (self.y_min + self.y_max) / 2.0,
        )
    }

    /// Plane-space width / height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width() / self.height()
    }

    /// `(min, max)` along one axis.
    #[inline]
    pub fn range(&self, axis: Axis) -> (f64, f64) {
        match axis {
            Axis::Real => (self.x_min, self.x_max),
            Axis::Imag => (self.y_min, self.y_max),
        }
    }

    #[inline]
    pub fn span(&self, axis: Axis) -> f64 {
        let (min, max) = self.range(axis);
        max - min
    }

    /// Grow or shrink both spans by `multiplier`, keeping the center fixed.
    pub fn scaled_about_center(&self, multiplier: f64) -> Self {
        let c = self.center();
        let half_w = self.width() * multiplier / 2.0;
        let half_h = self.height() * multiplier / 2.0;
        Self {
            x_min: c.re - half_w,
            x_max: c.re + half_w,
            y_min: c.im - half_h,
            y_max: c.im + half_h,
        }
        .normalized()
    }

    /// Grow or shrink both spans by `multiplier`, keeping `anchor` fixed.
    pub fn scaled_about(&self, anchor: Complex, multiplier: f64) -> Self {
        Self {
            x_min: anchor.re + (self.x_min - anchor.re) * multiplier,
            x_max: anchor.re + (self.x_max - anchor.re) * multiplier,
            y_min: anchor.im + (self.y_min - anchor.im) * multiplier,
            y_max: anchor.im + (self.y_max - anchor.im) * multiplier,
        }
        .normalized()
    }

    /// Shift the rectangle without changing its size.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            x_min: self.x_min + dx,
            x_max: self.x_max + dx,
            y_min: self.y_min + dy,
            y_max: self.y_max + dy,
        }
    }

    /// Swap any axis whose endpoints are inverted.
    pub fn normalized(self) -> Self {
        let (x_min, x_max) = if self.x_min > self.x_max {
            (self.x_max, self.x_min)
        } else {
            (self.x_min, self.x_max)
        };
        let (y_min, y_max) = if self.y_min > self.y_max {
            (self.y_max, self.y_min)
        } else {
            (self.y_min, self.y_max)
        };
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// `true` if `other` lies entirely within `self`, allowing `tolerance` slack.
    pub fn contains_bounds(&self, other: &Self, tolerance: f64) -> bool {
        other.x_min >= self.x_min - tolerance
            && other.x_max <= self.x_max + tolerance
            && other.y_min >= self.y_min - tolerance
            && other.y_max <= self.y_max + tolerance
    }
}

impl Default for ViewBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
