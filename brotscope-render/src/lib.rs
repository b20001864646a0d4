pub mod buffer;
pub mod error;
pub mod export;
pub mod fragment;
pub mod frame;
pub mod palette;
pub mod renderer;
pub mod tile;

pub use buffer::PixelBuffer;
pub use error::RenderError;
pub use export::{export_png, SnapshotMetadata};
pub use fragment::{shade_fragment, shade_frame};
pub use frame::FrameRenderer;
pub use palette::Palette;
pub use renderer::{PixelCounts, RenderStats, Renderer};
pub use tile::TILE_COLUMNS;

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
