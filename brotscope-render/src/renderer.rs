use std::ops::AddAssign;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use tracing::{debug, info};

use brotscope_core::{escape_time, Complex, CoordinateTables, IterationResult};

use crate::buffer::{blit_column_tile, check_stride, PixelBuffer};
use crate::error::RenderError;
use crate::palette::Palette;
use crate::tile::{build_column_tiles, ColumnTile, TILE_COLUMNS};

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// How the pixels of one pass were classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelCounts {
    /// Skipped by the cardioid / bulb tests.
    pub interior_shortcuts: usize,
    /// Iterated all the way to the cap.
    pub bounded: usize,
    pub escaped: usize,
}

impl PixelCounts {
    fn record(&mut self, result: IterationResult) {
        match result {
            IterationResult::Interior => self.interior_shortcuts += 1,
            IterationResult::Bounded => self.bounded += 1,
            IterationResult::Escaped { .. } => self.escaped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.interior_shortcuts + self.bounded + self.escaped
    }
}

impl AddAssign for PixelCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.interior_shortcuts += rhs.interior_shortcuts;
        self.bounded += rhs.bounded;
        self.escaped += rhs.escaped;
    }
}

/// Summary of a full-frame pass.
#[derive(Debug, Clone, Copy)]
pub struct RenderStats {
    pub elapsed: Duration,
    pub tiles: usize,
    pub iteration_cap: u32,
    pub pixels: PixelCounts,
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Computes a colored frame from coordinate tables and an iteration cap.
///
/// The grid is split into column tiles that rayon distributes across its
/// work-stealing pool. Each tile writes a private block; blocks are copied
/// into the target only after every tile has finished, so no two workers ever
/// touch the same bytes. Output does not depend on the tile width.
#[derive(Debug, Clone)]
pub struct Renderer {
    palette: Palette,
    tile_columns: u32,
}

impl Renderer {
    pub fn new(palette: Palette, tile_columns: u32) -> crate::Result<Self> {
        if tile_columns == 0 {
            return Err(RenderError::InvalidTileWidth(tile_columns));
        }
        Ok(Self {
            palette,
            tile_columns,
        })
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn tile_columns(&self) -> u32 {
        self.tile_columns
    }

    /// Compute a fresh, tightly packed buffer.
    pub fn compute(&self, tables: &CoordinateTables, iteration_cap: u32) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(tables.width(), tables.height());
        let stride = buffer.stride();
        self.render_tiles(tables, iteration_cap, buffer.as_bytes_mut(), stride);
        buffer.mark_computed();
        buffer
    }

    /// Compute into an existing buffer whose size must match the tables.
    pub fn render(
        &self,
        tables: &CoordinateTables,
        iteration_cap: u32,
        buffer: &mut PixelBuffer,
    ) -> crate::Result<RenderStats> {
        if buffer.width() != tables.width() || buffer.height() != tables.height() {
            return Err(RenderError::DimensionMismatch {
                buffer_width: buffer.width(),
                buffer_height: buffer.height(),
                tables_width: tables.width(),
                tables_height: tables.height(),
            });
        }
        let stride = buffer.stride();
        let stats = self.render_tiles(tables, iteration_cap, buffer.as_bytes_mut(), stride);
        buffer.mark_computed();
        Ok(stats)
    }

    /// Compute into presenter-owned memory with rows `stride` bytes apart.
    ///
    /// Bytes between the end of a row and the next stride are not written.
    pub fn compute_into(
        &self,
        tables: &CoordinateTables,
        iteration_cap: u32,
        dst: &mut [u8],
        stride: usize,
    ) -> crate::Result<RenderStats> {
        let (width, height) = (tables.width(), tables.height());
        check_stride(width, stride)?;
        let required = if height == 0 {
            0
        } else {
            stride * (height as usize - 1) + width as usize * 4
        };
        if dst.len() < required {
            return Err(RenderError::BufferTooSmall {
                len: dst.len(),
                required,
            });
        }
        Ok(self.render_tiles(tables, iteration_cap, dst, stride))
    }

    /// Caller guarantees `stride` and `dst` are large enough for the tables.
    fn render_tiles(
        &self,
        tables: &CoordinateTables,
        iteration_cap: u32,
        dst: &mut [u8],
        stride: usize,
    ) -> RenderStats {
        debug_assert!(iteration_cap > 0, "iteration cap must be positive");
        let start = Instant::now();
        let (width, height) = (tables.width(), tables.height());

        let tiles = match build_column_tiles(width, self.tile_columns) {
            Ok(tiles) => tiles,
            Err(_) => unreachable!("tile width validated in Renderer::new"),
        };
        debug!(
            tile_count = tiles.len(),
            width,
            height,
            iteration_cap,
            "Starting column-tiled render"
        );

        let blocks: Vec<(Vec<u8>, PixelCounts)> = tiles
            .par_iter()
            .map(|tile| render_tile(tables, iteration_cap, &self.palette, tile))
            .collect();

        let mut pixels = PixelCounts::default();
        for (tile, (block, counts)) in tiles.iter().zip(blocks.iter()) {
            blit_column_tile(dst, stride, height, tile, block);
            pixels += *counts;
        }

        let elapsed = start.elapsed();
        info!(
            elapsed_ms = elapsed.as_millis(),
            tiles = tiles.len(),
            iteration_cap,
            interior_shortcuts = pixels.interior_shortcuts,
            bounded = pixels.bounded,
            escaped = pixels.escaped,
            "Render complete"
        );

        RenderStats {
            elapsed,
            tiles: tiles.len(),
            iteration_cap,
            pixels,
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            tile_columns: TILE_COLUMNS,
        }
    }
}

/// Render one full-height column tile into a packed `tile.width × height` block.
fn render_tile(
    tables: &CoordinateTables,
    iteration_cap: u32,
    palette: &Palette,
    tile: &ColumnTile,
) -> (Vec<u8>, PixelCounts) {
    let height = tables.height();
    let real = &tables.real()[tile.x as usize..(tile.x + tile.width) as usize];
    let mut block = vec![0u8; tile.pixel_count(height) * 4];
    let mut counts = PixelCounts::default();

    for (line, &b) in block
        .chunks_exact_mut(tile.width as usize * 4)
        .zip(tables.imag())
    {
        for (px, &a) in line.chunks_exact_mut(4).zip(real) {
            let result = escape_time(Complex::new(a, b), iteration_cap);
            counts.record(result);
            px.copy_from_slice(&palette.color(result.count(iteration_cap), iteration_cap));
        }
    }

    (block, counts)
}
