//! Fixed square play area geometry
//!
//! The board is a `GRID_EXTENT` x `GRID_EXTENT` pixel square split into
//! `TILE_SIZE` x `TILE_SIZE` tiles. Every cell coordinate is a pixel offset
//! and a multiple of `TILE_SIZE`.

use super::state::Cell;

/// Width and height of the play area in pixels
pub const GRID_EXTENT: i32 = 240;

/// Edge length of one tile in pixels
pub const TILE_SIZE: i32 = 10;

/// Number of tiles along one side of the board
pub const GRID_TILES: i32 = GRID_EXTENT / TILE_SIZE;

/// Number of tiles on the board, the longest body that can exist
pub const BODY_CAPACITY: usize = (GRID_TILES * GRID_TILES) as usize;

/// Largest valid pixel coordinate for a cell anchor
pub const MAX_CELL_COORD: i32 = GRID_EXTENT - TILE_SIZE;

/// Snap a pixel coordinate down to the anchor of the tile containing it
pub fn snap_to_tile(pixel: i32) -> i32 {
    pixel.div_euclid(TILE_SIZE) * TILE_SIZE
}

/// Cell anchored at tile column `tx`, tile row `ty`
pub fn cell_at_tile(tx: i32, ty: i32) -> Cell {
    Cell::new(tx * TILE_SIZE, ty * TILE_SIZE)
}

/// Whether a cell anchor lies on the board
pub fn contains(cell: Cell) -> bool {
    (0..=MAX_CELL_COORD).contains(&cell.x) && (0..=MAX_CELL_COORD).contains(&cell.y)
}
