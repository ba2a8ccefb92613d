/// The hardcoded level grid and the blocks it produces.

use crate::config::{DEFAULT_BLOCK_HEIGHT, DEFAULT_BLOCK_WIDTH};
use crate::entities::{Block, BLOCK_COLOR};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Block,
}

use self::Cell::{Block as B, Empty as E};

pub const LEVEL_COLUMNS: usize = 16;
pub const LEVEL_ROWS: usize = 7;

/// Row-major, top row first.
pub const DEFAULT_LEVEL: [[Cell; LEVEL_COLUMNS]; LEVEL_ROWS] = [
    [E, E, E, E, E, E, E, E, E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E, E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E, E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E, E, E, E, E, E, E, E, E],
    [E, E, E, E, E, E, E, E, B, E, E, E, E, E, E, E],
    [E, E, E, E, E, B, E, E, E, E, E, E, E, E, E, B],
    [B, B, B, B, B, B, B, B, B, B, B, B, B, B, B, B],
];

/// One block per `Cell::Block`, at `(col × block_width, row × block_height)`,
/// in row-major order.
pub fn build_blocks<R: AsRef<[Cell]>>(grid: &[R], block_width: f32, block_height: f32) -> Vec<Block> {
    grid.iter()
        .enumerate()
        .flat_map(|(row, cells)| {
            cells
                .as_ref()
                .iter()
                .enumerate()
                .filter(|&(_, &cell)| cell == Cell::Block)
                .map(move |(col, _)| {
                    Block::new(
                        col as f32 * block_width,
                        row as f32 * block_height,
                        block_width,
                        block_height,
                        BLOCK_COLOR,
                    )
                })
        })
        .collect()
}

/// Blocks for [`DEFAULT_LEVEL`] at the default cell size.
pub fn default_blocks() -> Vec<Block> {
    build_blocks(&DEFAULT_LEVEL, DEFAULT_BLOCK_WIDTH, DEFAULT_BLOCK_HEIGHT)
}
