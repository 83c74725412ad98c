use crate::grid::Grid;
use crate::types::{Tile, GRID_HEIGHT, GRID_WIDTH, MAX_CELLS};

/// Read-only copy of the grid for renderers and observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSnapshot {
    width: usize,
    height: usize,
    cells: [Tile; MAX_CELLS],
}

impl GridSnapshot {
    pub(crate) fn from_grid(grid: &Grid) -> Self {
        let mut cells = [None; MAX_CELLS];
        let used = grid.cells();
        cells[..used.len()].copy_from_slice(used);
        Self {
            width: grid.width(),
            height: grid.height(),
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tile at (row, col); `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Row-major cells.
    pub fn cells(&self) -> &[Tile] {
        &self.cells[..self.width * self.height]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        self.cells().chunks(self.width)
    }

    pub fn tile_count(&self) -> usize {
        self.cells().iter().filter(|t| t.is_some()).count()
    }

    pub fn max_tile(&self) -> Tile {
        self.cells().iter().flatten().copied().max()
    }
}

impl Default for GridSnapshot {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cells: [None; MAX_CELLS],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_copies_only_used_cells() {
        let mut grid = Grid::new(3, 2);
        grid.set(0, 2, Some(8));
        grid.set(1, 0, Some(2));

        let snap = GridSnapshot::from_grid(&grid);
        assert_eq!(snap.width(), 3);
        assert_eq!(snap.height(), 2);
        assert_eq!(snap.get(0, 2), Some(Some(8)));
        assert_eq!(snap.get(2, 0), None);
        assert!(snap.is_occupied(1, 0));

        let rows: Vec<&[Tile]> = snap.rows().collect();
        assert_eq!(rows, vec![&[None, None, Some(8)][..], &[Some(2), None, None][..]]);
        assert_eq!(snap.tile_count(), 2);
        assert_eq!(snap.max_tile(), Some(8));
    }

    #[test]
    fn default_snapshot_is_empty_classic_grid() {
        let snap = GridSnapshot::default();
        assert_eq!(snap.cells().len(), GRID_WIDTH * GRID_HEIGHT);
        assert_eq!(snap.tile_count(), 0);
    }
}
