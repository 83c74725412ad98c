//! Grid module - tile storage and line decomposition
//!
//! The grid is a `width x height` array of tiles stored row-major in a fixed-capacity
//! flat array, so moves never allocate.
//! Coordinates: (row, col) where row ranges 0..height (top to bottom) and
//! col ranges 0..width (left to right).

use arrayvec::ArrayVec;

use crate::line::{collapse_line, Collapse};
use crate::types::{Direction, Tile, MAX_CELLS, MAX_GRID_DIM};

/// Flat indices of one line, ordered from the leading edge to the trailing edge.
pub type LineIndices = ArrayVec<usize, MAX_GRID_DIM>;

/// The tile grid - flat array storage with runtime dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major cells (row * width + col); only the first `width * height` are used
    cells: [Tile; MAX_CELLS],
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Callers are expected to validate dimensions first (see
    /// [`GridEngine`](crate::GridEngine)); sides are clamped to `1..=MAX_GRID_DIM`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width: width.clamp(1, MAX_GRID_DIM),
            height: height.clamp(1, MAX_GRID_DIM),
            cells: [None; MAX_CELLS],
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the tile at (row, col).
    /// Returns None if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set the tile at (row, col).
    /// Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = tile;
                true
            }
            None => false,
        }
    }

    /// The used portion of the cell array, row-major.
    pub fn cells(&self) -> &[Tile] {
        &self.cells[..self.width * self.height]
    }

    pub(crate) fn set_flat(&mut self, idx: usize, tile: Tile) {
        self.cells[idx] = tile;
    }

    /// Flat indices of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> ArrayVec<usize, MAX_CELLS> {
        self.cells()
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_none())
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn tile_count(&self) -> usize {
        self.cells().iter().filter(|tile| tile.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells().iter().all(|tile| tile.is_some())
    }

    /// Largest tile on the grid, if any.
    pub fn max_tile(&self) -> Tile {
        self.cells().iter().flatten().copied().max()
    }

    /// Number of independent lines a move in `direction` decomposes into.
    pub fn line_count(&self, direction: Direction) -> usize {
        if direction.is_horizontal() {
            self.height
        } else {
            self.width
        }
    }

    /// Flat indices of line `line`, ordered in the direction of travel.
    ///
    /// - `Left`: row `line`, left to right
    /// - `Right`: row `line`, right to left
    /// - `Up`: column `line`, top to bottom
    /// - `Down`: column `line`, bottom to top
    pub fn line_indices(&self, direction: Direction, line: usize) -> LineIndices {
        let mut out = LineIndices::new();
        match direction {
            Direction::Left => out.extend((0..self.width).map(|c| line * self.width + c)),
            Direction::Right => out.extend((0..self.width).rev().map(|c| line * self.width + c)),
            Direction::Up => out.extend((0..self.height).map(|r| r * self.width + line)),
            Direction::Down => out.extend((0..self.height).rev().map(|r| r * self.width + line)),
        }
        out
    }

    /// Collapse every line toward `direction` in place.
    ///
    /// Pure: no tile is spawned. The returned [`Collapse`] aggregates all lines.
    pub fn collapse(&mut self, direction: Direction) -> Collapse {
        let mut total = Collapse::default();

        for line in 0..self.line_count(direction) {
            let indices = self.line_indices(direction, line);

            let mut buf: ArrayVec<Tile, MAX_GRID_DIM> =
                indices.iter().map(|&idx| self.cells[idx]).collect();
            let report = collapse_line(&mut buf);

            if report.changed {
                for (&idx, &tile) in indices.iter().zip(buf.iter()) {
                    self.cells[idx] = tile;
                }
            }
            total.absorb(report);
        }

        total
    }

    /// Whether a move toward `direction` would change anything.
    pub fn can_move(&self, direction: Direction) -> bool {
        let mut probe = *self;
        probe.collapse(direction).changed
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::GRID_WIDTH, crate::types::GRID_HEIGHT)
    }
}
