//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`InputIntent`]s and keeps a board [`Cursor`]
//! that resolves them into [`crate::types::GameAction`]s. Mouse clicks are
//! resolved by the view, which knows where each card was drawn.

pub mod cursor;
pub mod map;

pub use tui_memory_types as types;

pub use cursor::{Cursor, Direction};
pub use map::{handle_key_event, should_quit, InputIntent};
