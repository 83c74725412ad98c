//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data structures with no I/O, making them
//! usable in any context (grid engine, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The classic game is played on a 4x4 grid:
//!
//! - **Width**: 4 columns (indexed 0-3)
//! - **Height**: 4 rows (indexed 0-3)
//! - **Upper bound**: engines accept any size up to `MAX_GRID_DIM` per side
//!
//! # Tile Values
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SPAWN_VALUE` | 2 | Value of every freshly spawned tile |
//! | `FOUR_VALUE` | 4 | Value of an optional "lucky" spawn |
//! | `GOAL` | 2048 | A merge producing this value wins the game |
//! | `MAX_TILE` | 2^30 | Largest tile value; two of these never merge |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, Outcome, GRID_HEIGHT, GRID_WIDTH, GOAL};
//!
//! // Parse from string (case-insensitive)
//! let parsed: Direction = "LEFT".parse().unwrap();
//! assert_eq!(parsed, Direction::Left);
//!
//! // "top" and "bottom" are accepted as well
//! assert_eq!("top".parse::<Direction>(), Ok(Direction::Up));
//!
//! assert!(Outcome::Won.is_terminal());
//! assert!(!Outcome::Continuing.is_terminal());
//!
//! assert_eq!(GRID_WIDTH, 4);
//! assert_eq!(GRID_HEIGHT, 4);
//! assert_eq!(GOAL, 2048);
//! ```

use std::str::FromStr;

use thiserror::Error;

/// Grid width in cells (4 columns)
pub const GRID_WIDTH: usize = 4;

/// Grid height in cells (4 rows)
pub const GRID_HEIGHT: usize = 4;

/// Largest supported grid side.
pub const MAX_GRID_DIM: usize = 8;

/// Capacity of the flat cell storage (`MAX_GRID_DIM` squared).
pub const MAX_CELLS: usize = MAX_GRID_DIM * MAX_GRID_DIM;

/// Value of a freshly spawned tile
pub const SPAWN_VALUE: u32 = 2;

/// Value of a spawned tile when the spawn policy rolls a four
pub const FOUR_VALUE: u32 = 4;

/// Merging into this value wins the game (2048)
pub const GOAL: u32 = 2048;

/// Largest representable tile. Doubling it would leave `u32`'s power-of-two range.
pub const MAX_TILE: u32 = 1 << 30;

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(v)`: Tile of value `v` (a power of two in `2..=MAX_TILE`)
pub type Tile = Option<u32>;

/// Returns true when `value` is a legal tile value (a power of two in `2..=MAX_TILE`).
///
/// ```
/// use tui_2048_types::{is_tile_value, MAX_TILE};
///
/// assert!(is_tile_value(2));
/// assert!(is_tile_value(2048));
/// assert!(is_tile_value(MAX_TILE));
/// assert!(!is_tile_value(1));
/// assert!(!is_tile_value(6));
/// assert!(!is_tile_value(MAX_TILE * 2));
/// ```
pub fn is_tile_value(value: u32) -> bool {
    (2..=MAX_TILE).contains(&value) && value.is_power_of_two()
}

/// Directions the tiles can be pushed in
///
/// The direction names the edge tiles travel toward:
/// - **Left**: rows collapse toward column 0
/// - **Right**: rows collapse toward the last column
/// - **Up**: columns collapse toward row 0
/// - **Down**: columns collapse toward the last row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// True for the directions that collapse rows (as opposed to columns).
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Parse direction from string (case-insensitive)
///
/// Accepts `left`, `right`, `up`, `down`, and the legacy names `top` / `bottom`.
///
/// # Examples
///
/// ```
/// use tui_2048_types::{Direction, ParseError};
///
/// assert_eq!("left".parse::<Direction>(), Ok(Direction::Left));
/// assert_eq!("Right".parse::<Direction>(), Ok(Direction::Right));
/// assert_eq!("bottom".parse::<Direction>(), Ok(Direction::Down));
/// assert_eq!(
///     "sideways".parse::<Direction>(),
///     Err(ParseError::UnknownDirection("sideways".to_string()))
/// );
/// ```
impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" | "top" => Ok(Direction::Up),
            "down" | "bottom" => Ok(Direction::Down),
            _ => Err(ParseError::UnknownDirection(s.to_string())),
        }
    }
}

/// Result of applying a move
///
/// Outcomes are derived per move and never stored on the grid:
/// - **Continuing**: the game goes on (including blocked, no-op moves)
/// - **Won**: a merge produced the `GOAL` tile during this move
/// - **Lost**: a spawn was needed but no empty cell was left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    Continuing,
    Won,
    Lost,
}

impl Outcome {
    /// True when the session is over.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continuing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Continuing => "continuing",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        }
    }
}

/// Game actions produced by input and consumed by the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Push every tile toward one edge
    Move(Direction),
    /// Throw the current grid away and start a fresh one
    Restart,
}

/// Parse action from string
///
/// # Examples
///
/// ```
/// use tui_2048_types::{Direction, GameAction, ParseError};
///
/// assert_eq!("up".parse::<GameAction>(), Ok(GameAction::Move(Direction::Up)));
/// assert_eq!("restart".parse::<GameAction>(), Ok(GameAction::Restart));
/// assert_eq!(
///     "undo".parse::<GameAction>(),
///     Err(ParseError::UnknownAction("undo".to_string()))
/// );
/// ```
impl FromStr for GameAction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("restart") {
            return Ok(GameAction::Restart);
        }
        s.parse()
            .map(GameAction::Move)
            .map_err(|_| ParseError::UnknownAction(s.to_string()))
    }
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Restart => "restart",
        }
    }
}

/// Unrecognised direction or action name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown direction: {0:?}")]
    UnknownDirection(String),
    #[error("unknown action: {0:?}")]
    UnknownAction(String),
}
