use crate::bounds::ViewBounds;

/// Per-column and per-row plane coordinates for the current view.
///
/// `real[x]` is the real part of every pixel in column `x`, `imag[y]` the
/// imaginary part of every pixel in row `y`. Row 0 holds `y_min`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateTables {
    real: Vec<f64>,
    imag: Vec<f64>,
}

impl CoordinateTables {
    /// Rebuild both tables from scratch.
    pub fn build(bounds: &ViewBounds, width: u32, height: u32) -> Self {
        Self {
            real: axis_table(width, bounds.x_min, bounds.x_max),
            imag: axis_table(height, bounds.y_min, bounds.y_max),
        }
    }

    #[inline]
    pub fn real(&self) -> &[f64] {
        &self.real
    }

    #[inline]
    pub fn imag(&self) -> &[f64] {
        &self.imag
    }

    pub fn width(&self) -> u32 {
        self.real.len() as u32
    }

    pub fn height(&self) -> u32 {
        self.imag.len() as u32
    }
}

/// `plane = pixel / limit × (max − min) + min` for every pixel of one axis.
#[inline]
pub fn pixel_to_axis(pixel: f64, limit: u32, min: f64, max: f64) -> f64 {
    pixel / limit as f64 * (max - min) + min
}

fn axis_table(limit: u32, min: f64, max: f64) -> Vec<f64> {
    (0..limit)
        .map(|p| pixel_to_axis(p as f64, limit, min, max))
        .collect()
}
