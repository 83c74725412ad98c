//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering code. It maps `crossterm` key
//! events into [`crate::types::GameAction`]s and detects the quit keys.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit, KEY_LEGEND};
