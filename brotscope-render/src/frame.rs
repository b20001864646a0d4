use tracing::debug;

use brotscope_core::Viewport;

use crate::buffer::PixelBuffer;
use crate::palette::Palette;
use crate::renderer::{RenderStats, Renderer};

/// Holds the presented buffer and recomputes it only when the view changed.
///
/// The buffer is stale when its size differs from the viewport's, when the
/// viewport's revision moved on since the last pass, or after
/// [`invalidate`](Self::invalidate).
#[derive(Debug)]
pub struct FrameRenderer {
    renderer: Renderer,
    buffer: PixelBuffer,
    row_alignment: usize,
    rendered_revision: Option<u64>,
    last_stats: Option<RenderStats>,
}

impl FrameRenderer {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer,
            buffer: PixelBuffer::new(0, 0),
            row_alignment: 1,
            rendered_revision: None,
            last_stats: None,
        }
    }

    /// Pad each row to a multiple of `alignment` bytes (1 = tightly packed).
    pub fn with_row_alignment(mut self, alignment: usize) -> Self {
        self.row_alignment = alignment.max(1);
        self.buffer.invalidate();
        self
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn last_stats(&self) -> Option<&RenderStats> {
        self.last_stats.as_ref()
    }

    pub fn set_palette(&mut self, palette: Palette) {
        if *self.renderer.palette() != palette {
            self.renderer.set_palette(palette);
            self.buffer.invalidate();
        }
    }

    pub fn invalidate(&mut self) {
        self.buffer.invalidate();
    }

    /// Bring the buffer in line with `viewport`.
    ///
    /// Returns `Some(stats)` if a pass ran, `None` if the buffer was already
    /// current. The pass has fully joined before this returns.
    pub fn refresh(&mut self, viewport: &Viewport) -> crate::Result<Option<RenderStats>> {
        let (width, height) = (viewport.width(), viewport.height());
        if self.buffer.width() != width || self.buffer.height() != height {
            let stride = (width as usize * 4).next_multiple_of(self.row_alignment);
            debug!(width, height, stride, "Reallocating pixel buffer");
            self.buffer = PixelBuffer::with_stride(width, height, stride)?;
        }

        if self.buffer.is_computed() && self.rendered_revision == Some(viewport.revision()) {
            return Ok(None);
        }

        let stats = self.renderer.render(
            viewport.tables(),
            viewport.iteration_cap(),
            &mut self.buffer,
        )?;
        self.rendered_revision = Some(viewport.revision());
        self.last_stats = Some(stats);
        Ok(Some(stats))
    }
}
