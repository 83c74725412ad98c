//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders a
//! [`GridSnapshot`](crate::core::GridSnapshot) into a simple framebuffer that
//! can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Keep layout pure so it can be asserted cell by cell in tests
//! - Only rewrite the cells that changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_color, GameView, Viewport, TILE_HEIGHT, TILE_WIDTH};
pub use renderer::{encode_frame_into, TerminalRenderer};
