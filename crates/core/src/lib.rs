//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules: how lines collapse, how tiles spawn, and
//! when a session is won or lost. It has **no dependencies** on UI, input, or I/O:
//!
//! - **Deterministic**: A seeded engine produces identical games
//! - **Testable**: The line rule is a pure function over a slice
//! - **Allocation-free**: Grids and lines live in fixed-capacity arrays
//!
//! # Module Structure
//!
//! - [`grid`]: tile storage and the per-direction line decomposition
//! - [`line`]: the single-line collapse rule
//! - [`spawn`]: random placement of new tiles
//! - [`engine`]: [`GridEngine`], the session state driven by the game loop
//! - [`snapshot`]: read-only copies for renderers
//!
//! # Game Rules
//!
//! - A move pushes every tile toward one edge; lines never interact
//! - Equal neighbours merge; a tile produced by a merge does not merge again in the same move
//! - A move that changes the grid spawns one `2` into a random empty cell
//! - A blocked move is a no-op: nothing changes and nothing spawns
//! - Merging into `2048` wins immediately
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GridEngine;
//! use tui_2048_types::{Direction, Outcome};
//!
//! let mut game = GridEngine::with_seed(4, 4, 12345).unwrap();
//! assert_eq!(game.tile_count(), 2);
//!
//! let outcome = game.apply_move(Direction::Left);
//! assert_eq!(outcome, Outcome::Continuing);
//!
//! let snap = game.snapshot();
//! assert!(snap.cells().iter().flatten().all(|v| v.is_power_of_two()));
//! ```

pub mod engine;
pub mod error;
pub mod grid;
pub mod line;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use engine::GridEngine;
pub use error::GridError;
pub use grid::Grid;
pub use line::{collapse_line, Collapse};
pub use snapshot::GridSnapshot;
pub use spawn::{spawn_tile, SpawnPolicy};
