//! Terminal front end for the memory game.
//!
//! Renders into a plain framebuffer and flushes only the cells that changed
//! since the previous frame. No widget toolkit is involved; `core` stays free
//! of terminal concerns and the view stays free of I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
