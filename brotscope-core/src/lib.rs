pub mod bounds;
pub mod complex;
pub mod error;
pub mod explorer;
pub mod input;
pub mod iteration;
pub mod mandelbrot;
pub mod shader;
pub mod tables;
pub mod viewport;

// Re-export primary types for convenience.
pub use bounds::{Axis, ViewBounds};
pub use complex::Complex;
pub use error::CoreError;
pub use explorer::{Explorer, ZoomAnchor, ZoomSettings};
pub use input::{DragSelection, InputEvent};
pub use iteration::{iteration_cap, MAX_ITERATIONS, MIN_ITERATIONS};
pub use mandelbrot::{escape_time, IterationResult};
pub use shader::ShaderParams;
pub use tables::CoordinateTables;
pub use viewport::{Viewport, ZoomDirection};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
