use crate::error::RenderError;
use crate::tile::ColumnTile;

/// Row-major RGBA8 pixels with an explicit row stride.
///
/// `stride` is in bytes and may exceed `width × 4` to match a presenter's
/// backing surface. `computed` records whether the contents match the view
/// they were last rendered for.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    stride: usize,
    pixels: Vec<u8>,
    computed: bool,
}

impl PixelBuffer {
    /// A tightly packed buffer, zero-filled and not yet computed.
    pub fn new(width: u32, height: u32) -> Self {
        let stride = width as usize * 4;
        Self {
            width,
            height,
            stride,
            pixels: vec![0u8; stride * height as usize],
            computed: false,
        }
    }

    /// A buffer whose rows are `stride` bytes apart.
    pub fn with_stride(width: u32, height: u32, stride: usize) -> crate::Result<Self> {
        check_stride(width, stride)?;
        Ok(Self {
            width,
            height,
            stride,
            pixels: vec![0u8; stride * height as usize],
            computed: false,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn is_computed(&self) -> bool {
        self.computed
    }

    /// Mark the contents stale; the next refresh recomputes.
    pub fn invalidate(&mut self) {
        self.computed = false;
    }

    pub(crate) fn mark_computed(&mut self) {
        self.computed = true;
    }

    /// Raw bytes including any row padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// The `width × 4` visible bytes of row `y`.
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        &self.pixels[start..start + self.width as usize * 4]
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = y as usize * self.stride + x as usize * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Copy out as a tightly packed `width × height × 4` Vec.
    pub fn to_packed(&self) -> Vec<u8> {
        if self.stride == self.width as usize * 4 {
            return self.pixels.clone();
        }
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * 4);
        for y in 0..self.height {
            out.extend_from_slice(self.row(y));
        }
        out
    }
}

/// Reject strides that can't hold one row of pixels.
pub(crate) fn check_stride(width: u32, stride: usize) -> crate::Result<()> {
    if stride < width as usize * 4 {
        return Err(RenderError::InvalidStride { stride, width });
    }
    Ok(())
}

/// Copy a column tile's packed `tile.width × height` block into `dst`.
///
/// Padding bytes between rows of `dst` are left untouched.
pub(crate) fn blit_column_tile(
    dst: &mut [u8],
    stride: usize,
    height: u32,
    tile: &ColumnTile,
    block: &[u8],
) {
    let tw4 = tile.width as usize * 4;
    debug_assert_eq!(block.len(), tw4 * height as usize);
    for (row, src) in block.chunks_exact(tw4).enumerate() {
        let start = row * stride + tile.x as usize * 4;
        dst[start..start + tw4].copy_from_slice(src);
    }
}
