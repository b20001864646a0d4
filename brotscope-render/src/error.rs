use thiserror::Error;

/// Errors originating from the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid tile width: {0} columns (must be > 0)")]
    InvalidTileWidth(u32),

    #[error("row stride {stride} bytes is shorter than a {width}-pixel row")]
    InvalidStride { stride: usize, width: u32 },

    #[error("target holds {len} bytes, {required} required")]
    BufferTooSmall { len: usize, required: usize },

    #[error("buffer is {buffer_width}×{buffer_height} but tables are {tables_width}×{tables_height}")]
    DimensionMismatch {
        buffer_width: u32,
        buffer_height: u32,
        tables_width: u32,
        tables_height: u32,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Png(#[from] png::EncodingError),

    #[error(transparent)]
    Core(#[from] brotscope_core::CoreError),
}
