use crate::error::RenderError;

/// Default tile width: 16 columns keeps tiles small enough for rayon to
/// balance the heavy boundary columns against cheap exterior ones.
pub const TILE_COLUMNS: u32 = 16;

/// A contiguous run of full-height pixel columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnTile {
    /// First column.
    pub x: u32,
    /// Number of columns (the last tile may be narrower).
    pub width: u32,
}

impl ColumnTile {
    /// Number of pixels in this tile for a grid of `height` rows.
    pub fn pixel_count(&self, height: u32) -> usize {
        self.width as usize * height as usize
    }
}

/// Split `width` columns into tiles of `tile_columns` each.
pub fn build_column_tiles(width: u32, tile_columns: u32) -> crate::Result<Vec<ColumnTile>> {
    if tile_columns == 0 {
        return Err(RenderError::InvalidTileWidth(tile_columns));
    }
    let mut tiles = Vec::with_capacity(width.div_ceil(tile_columns) as usize);
    let mut x = 0;
    while x < width {
        let tw = tile_columns.min(width - x);
        tiles.push(ColumnTile { x, width: tw });
        x += tw;
    }
    Ok(tiles)
}
