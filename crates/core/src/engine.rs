//! Grid engine - the owned game state driven by the game loop
//!
//! The engine wraps a [`Grid`] together with the RNG and spawn policy. It is the only
//! thing that mutates the grid: construction seeds two tiles, and every later change
//! goes through [`GridEngine::apply_move`].

use log::{debug, trace, warn};
use rand::{rngs::StdRng, SeedableRng};

use crate::error::GridError;
use crate::grid::Grid;
use crate::line::Collapse;
use crate::snapshot::GridSnapshot;
use crate::spawn::{spawn_tile, SpawnPolicy};
use crate::types::{is_tile_value, Direction, Outcome, Tile, MAX_GRID_DIM};

/// Number of tiles placed before the first move.
const INITIAL_TILES: usize = 2;

/// A single game session's grid.
#[derive(Debug, Clone)]
pub struct GridEngine {
    grid: Grid,
    rng: StdRng,
    spawn: SpawnPolicy,
}

fn validate_dimensions(width: usize, height: usize) -> Result<(), GridError> {
    let side_ok = |n: usize| (1..=MAX_GRID_DIM).contains(&n);
    if !side_ok(width) || !side_ok(height) || width * height < INITIAL_TILES {
        return Err(GridError::InvalidDimensions { width, height });
    }
    Ok(())
}

impl GridEngine {
    /// Start a new game with an entropy-seeded RNG.
    pub fn new_game(width: usize, height: usize) -> Result<Self, GridError> {
        Self::seeded(width, height, StdRng::from_entropy())
    }

    /// Start a new game whose spawns are fully determined by `seed`.
    pub fn with_seed(width: usize, height: usize, seed: u64) -> Result<Self, GridError> {
        Self::seeded(width, height, StdRng::seed_from_u64(seed))
    }

    fn seeded(width: usize, height: usize, rng: StdRng) -> Result<Self, GridError> {
        validate_dimensions(width, height)?;

        let mut engine = Self {
            grid: Grid::new(width, height),
            rng,
            spawn: SpawnPolicy::default(),
        };
        for _ in 0..INITIAL_TILES {
            // An empty grid with at least two cells always has room here.
            engine.spawn_tile();
        }
        debug!("new {}x{} game", width, height);
        Ok(engine)
    }

    /// Build an engine from an explicit layout, without seeding tiles.
    ///
    /// `rows` are listed top to bottom. Later spawns are driven by `seed`.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R], seed: u64) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        validate_dimensions(width, height)?;

        let mut grid = Grid::new(width, height);
        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            for (col, tile) in cells.iter().enumerate() {
                if let Some(value) = *tile {
                    if !is_tile_value(value) {
                        return Err(GridError::InvalidTile { row, col, value });
                    }
                }
                grid.set(row, col, *tile);
            }
        }

        Ok(Self {
            grid,
            rng: StdRng::seed_from_u64(seed),
            spawn: SpawnPolicy::default(),
        })
    }

    /// Replace the spawn policy for subsequent spawns.
    pub fn with_spawn_policy(mut self, policy: SpawnPolicy) -> Self {
        self.spawn = policy;
        self
    }

    pub fn spawn_policy(&self) -> SpawnPolicy {
        self.spawn
    }

    /// Push every tile toward `direction`.
    ///
    /// - Nothing moved: `Continuing`, grid untouched, no spawn.
    /// - A merge reached the goal: `Won`, no spawn.
    /// - Otherwise one tile spawns and the result is `Continuing`, or `Lost` if
    ///   there was no empty cell to spawn into.
    pub fn apply_move(&mut self, direction: Direction) -> Outcome {
        let report = self.grid.collapse(direction);
        let outcome = self.settle(report);
        trace!("{} -> {}", direction.as_str(), outcome.as_str());
        outcome
    }

    /// Turn a collapse report into an outcome, spawning when the grid changed.
    fn settle(&mut self, report: Collapse) -> Outcome {
        if !report.changed {
            return Outcome::Continuing;
        }

        if report.reached_goal {
            debug!("goal reached after {} merge(s)", report.merges);
            return Outcome::Won;
        }

        match self.spawn_tile() {
            Some(_) => Outcome::Continuing,
            None => {
                warn!("no empty cell to spawn into");
                Outcome::Lost
            }
        }
    }

    /// Report what a move would do, without touching the grid or the RNG.
    pub fn peek_move(&self, direction: Direction) -> Collapse {
        let mut probe = self.grid;
        probe.collapse(direction)
    }

    pub fn can_move(&self, direction: Direction) -> bool {
        self.grid.can_move(direction)
    }

    /// True while at least one direction would change the grid.
    pub fn has_legal_move(&self) -> bool {
        Direction::ALL.iter().any(|&dir| self.can_move(dir))
    }

    fn spawn_tile(&mut self) -> Option<usize> {
        let idx = spawn_tile(&mut self.grid, &self.spawn, &mut self.rng)?;
        trace!(
            "spawned {:?} at ({}, {})",
            self.grid.cells()[idx],
            idx / self.grid.width(),
            idx % self.grid.width()
        );
        Some(idx)
    }

    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::from_grid(&self.grid)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Tile at (row, col); `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.grid.get(row, col)
    }

    pub fn tile_count(&self) -> usize {
        self.grid.tile_count()
    }

    pub fn empty_count(&self) -> usize {
        self.grid.cells().len() - self.grid.tile_count()
    }

    pub fn max_tile(&self) -> Tile {
        self.grid.max_tile()
    }
}
