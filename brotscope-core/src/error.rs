use thiserror::Error;

/// Errors originating from the viewport and kernel layer.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid pixel grid: {width}×{height} (both dimensions must be > 0)")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("invalid view bounds: {reason}")]
    InvalidBounds { reason: String },

    #[error("invalid zoom factor: {0} (must be positive and finite)")]
    InvalidZoomFactor(f64),

    #[error("invalid pan fraction: ({fx}, {fy}) (both must be finite)")]
    InvalidPanFraction { fx: f64, fy: f64 },
}
