//! Spawn module - placing new tiles
//!
//! A new tile goes into an empty cell chosen uniformly at random. Its value is
//! always `SPAWN_VALUE` unless the policy opts into an occasional `FOUR_VALUE`.

use rand::Rng;

use crate::error::GridError;
use crate::grid::Grid;
use crate::types::{FOUR_VALUE, SPAWN_VALUE};

/// Controls the value of spawned tiles.
///
/// The default never spawns a four.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpawnPolicy {
    four_probability: f64,
}

impl SpawnPolicy {
    /// Always spawn `SPAWN_VALUE`.
    pub const ALWAYS_TWO: SpawnPolicy = SpawnPolicy {
        four_probability: 0.0,
    };

    /// Spawn a four with probability `four_probability`.
    pub fn with_four_probability(four_probability: f64) -> Result<Self, GridError> {
        if !(0.0..=1.0).contains(&four_probability) {
            return Err(GridError::InvalidProbability(four_probability));
        }
        Ok(Self { four_probability })
    }

    pub fn four_probability(&self) -> f64 {
        self.four_probability
    }

    /// Roll the value of the next spawned tile.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        if self.four_probability > 0.0 && rng.gen_bool(self.four_probability) {
            FOUR_VALUE
        } else {
            SPAWN_VALUE
        }
    }
}

/// Place one tile into a random empty cell.
///
/// Returns the flat index that was filled, or `None` when the grid is full.
pub fn spawn_tile<R: Rng + ?Sized>(
    grid: &mut Grid,
    policy: &SpawnPolicy,
    rng: &mut R,
) -> Option<usize> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let idx = empty[rng.gen_range(0..empty.len())];
    let value = policy.roll(rng);
    grid.set_flat(idx, Some(value));
    Some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_default_policy_always_spawns_two() {
        let policy = SpawnPolicy::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            assert_eq!(policy.roll(&mut rng), SPAWN_VALUE);
        }
    }

    #[test]
    fn test_certain_four() {
        let policy = SpawnPolicy::with_four_probability(1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(policy.roll(&mut rng), FOUR_VALUE);
    }

    #[test]
    fn test_probability_out_of_range_rejected() {
        assert_eq!(
            SpawnPolicy::with_four_probability(1.5),
            Err(GridError::InvalidProbability(1.5))
        );
        assert!(SpawnPolicy::with_four_probability(-0.1).is_err());
        assert!(SpawnPolicy::with_four_probability(f64::NAN).is_err());
    }

    #[test]
    fn test_spawn_fills_an_empty_cell() {
        let mut grid = Grid::new(4, 4);
        let mut rng = StdRng::seed_from_u64(3);

        let idx = spawn_tile(&mut grid, &SpawnPolicy::ALWAYS_TWO, &mut rng).unwrap();
        assert_eq!(grid.cells()[idx], Some(SPAWN_VALUE));
        assert_eq!(grid.tile_count(), 1);
    }

    #[test]
    fn test_spawn_on_full_grid_fails() {
        let mut grid = Grid::new(2, 1);
        grid.set(0, 0, Some(2));
        grid.set(0, 1, Some(4));
        let before = grid;

        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(spawn_tile(&mut grid, &SpawnPolicy::ALWAYS_TWO, &mut rng), None);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_spawn_only_picks_last_empty_cell() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, Some(2));
        grid.set(0, 1, Some(4));
        grid.set(1, 1, Some(8));

        let mut rng = StdRng::seed_from_u64(99);
        assert_eq!(spawn_tile(&mut grid, &SpawnPolicy::ALWAYS_TWO, &mut rng), Some(2));
        assert!(grid.is_full());
    }
}
