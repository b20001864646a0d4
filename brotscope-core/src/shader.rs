use bytemuck::{Pod, Zeroable};

use crate::bounds::ViewBounds;
use crate::viewport::Viewport;

/// Per-frame inputs for an external fragment stage that evaluates the same
/// escape-time formula on the GPU.
///
/// Laid out as a 32-byte uniform block: `u_min`, `u_max`, `u_maxIter`, padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ShaderParams {
    /// `(x_min, y_min)`
    pub min: [f32; 2],
    /// `(x_max, y_max)`
    pub max: [f32; 2],
    pub max_iterations: i32,
    _pad: [u32; 3],
}

impl ShaderParams {
    pub fn new(bounds: &ViewBounds, max_iterations: u32) -> Self {
        Self {
            min: [bounds.x_min as f32, bounds.y_min as f32],
            max: [bounds.x_max as f32, bounds.y_max as f32],
            max_iterations: max_iterations.min(i32::MAX as u32) as i32,
            _pad: [0; 3],
        }
    }

    pub fn from_viewport(viewport: &Viewport) -> Self {
        Self::new(&viewport.bounds(), viewport.iteration_cap())
    }

    /// The bounds as seen by the shader, widened back to `f64`.
    pub fn bounds(&self) -> ViewBounds {
        ViewBounds {
            x_min: self.min[0] as f64,
            x_max: self.max[0] as f64,
            y_min: self.min[1] as f64,
            y_max: self.max[1] as f64,
        }
    }

    /// Raw bytes for a uniform buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
