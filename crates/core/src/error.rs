use thiserror::Error;

use crate::types::{MAX_GRID_DIM, MAX_TILE};

/// Errors raised while building a grid engine.
///
/// Moves never fail: win and loss are reported as [`Outcome`](crate::types::Outcome)
/// values, not errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid must be 1..={max} per side with room for two tiles, got {width}x{height}", max = MAX_GRID_DIM)]
    InvalidDimensions { width: usize, height: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("tile at ({row}, {col}) has value {value}, expected a power of two in 2..={max}", max = MAX_TILE)]
    InvalidTile { row: usize, col: usize, value: u32 },
    #[error("spawn probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),
}
