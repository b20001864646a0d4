//! CPU reference for the per-fragment shading stage.
//!
//! An external GPU path receives only a [`ShaderParams`] block and evaluates
//! the escape-time formula per fragment. These functions do the same on the
//! CPU from the same inputs, so the two paths can be checked against each
//! other.

use brotscope_core::{escape_time, Complex, ShaderParams};

use crate::buffer::PixelBuffer;
use crate::palette::Palette;

/// Color of the fragment at normalized coordinates `uv ∈ [0, 1)²`,
/// with `uv = (0, 0)` at `(x_min, y_min)`.
pub fn shade_fragment(params: &ShaderParams, uv: [f64; 2], palette: &Palette) -> [u8; 4] {
    let bounds = params.bounds();
    let c = Complex::new(
        uv[0] * (bounds.x_max - bounds.x_min) + bounds.x_min,
        uv[1] * (bounds.y_max - bounds.y_min) + bounds.y_min,
    );
    let cap = params.max_iterations.max(1) as u32;
    palette.color(escape_time(c, cap).count(cap), cap)
}

/// Shade a whole `width × height` grid one fragment at a time.
pub fn shade_frame(params: &ShaderParams, width: u32, height: u32, palette: &Palette) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    let stride = buffer.stride();
    let bytes = buffer.as_bytes_mut();
    for y in 0..height {
        for x in 0..width {
            let uv = [x as f64 / width as f64, y as f64 / height as f64];
            let i = y as usize * stride + x as usize * 4;
            bytes[i..i + 4].copy_from_slice(&shade_fragment(params, uv, palette));
        }
    }
    buffer.mark_computed();
    buffer
}
