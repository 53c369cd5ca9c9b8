//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data, usable from the game core, the terminal view and
//! the input layer alike.
//!
//! # Board Layout
//!
//! A game deals every symbol of the alphabet twice:
//!
//! - **Pairs**: 8 by default ([`DEFAULT_PAIR_COUNT`])
//! - **Tiles**: 16 (two per pair)
//! - **Columns**: 4 ([`GRID_COLUMNS`]), so the default board is a 4x4 grid
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep of the terminal loop (~60 FPS) |
//! | `TIMER_PERIOD_MS` | 1000 | One elapsed-time increment |
//! | `MISMATCH_DELAY_MS` | 1000 | How long a mismatched pair stays face up |
//! | `CONGRATS_DELAY_MS` | 500 | Delay between the win and the congratulation notice |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{format_elapsed, GameAction, TileState};
//!
//! assert_eq!(format_elapsed(0), "0:00");
//! assert_eq!(format_elapsed(75), "1:15");
//!
//! assert!(TileState::FaceDown.is_flippable());
//! assert_eq!(GameAction::FlipTile(3).tile_index(), Some(3));
//! ```

use serde::Serialize;

/// Number of pairs in a standard game.
pub const DEFAULT_PAIR_COUNT: usize = 8;

/// Cards per row in the rendered grid.
pub const GRID_COLUMNS: usize = 4;

/// Maximum number of face-up, unresolved tiles.
pub const TURN_CAPACITY: usize = 2;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Period of the elapsed-time counter.
pub const TIMER_PERIOD_MS: u32 = 1000;

/// Time a mismatched pair stays readable before it flips back.
pub const MISMATCH_DELAY_MS: u32 = 1000;

/// Delay between completing the board and the congratulation notice.
pub const CONGRATS_DELAY_MS: u32 = 500;


/// Opaque identifier of a matching pair.
///
/// The value is an index into the alphabet the board was dealt from; two
/// tiles match when their symbols compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Symbol(pub u8);

/// Visibility of a single tile.
///
/// Transitions: FaceDown → FaceUp → Matched, or FaceUp → FaceDown when a
/// mismatch is rolled back. Matched is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileState {
    #[default]
    FaceDown,
    FaceUp,
    Matched,
}

impl TileState {
    /// Whether a click on a tile in this state may reveal it.
    pub fn is_flippable(self) -> bool {
        self == TileState::FaceDown
    }
}

/// Lifecycle of one game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Board dealt, no tile flipped yet; the timer is idle.
    #[default]
    NotStarted,
    Running,
    /// Every pair matched. No further flips are accepted.
    Won,
}

/// Fine-grained position of the match engine within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnPhase {
    NotStarted,
    AwaitingFirstFlip,
    AwaitingSecondFlip,
    /// Two tiles are face up and a mismatch rollback is pending.
    Resolving,
    Won,
}

/// Actions that can be applied to the game.
///
/// The input layer resolves raw key and mouse events into these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Flip the tile at the given board index
    FlipTile(usize),
    /// Throw away the current board and deal a new one
    Restart,
}

impl GameAction {
    pub fn tile_index(&self) -> Option<usize> {
        match self {
            GameAction::FlipTile(index) => Some(*index),
            GameAction::Restart => None,
        }
    }
}

/// Format elapsed seconds as `minutes:seconds`, seconds zero-padded to 2 digits.
pub fn format_elapsed(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Format matched pairs as `matched/total`.
pub fn format_pairs(matched: usize, total: usize) -> String {
    format!("{}/{}", matched, total)
}
