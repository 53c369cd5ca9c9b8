//! Notifications for the presentation layer.

use serde::Serialize;

use crate::types::TileState;

/// Final tally of a won game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub moves: u32,
    pub elapsed_seconds: u32,
    /// `elapsed_seconds` as `m:ss`.
    pub elapsed: String,
}

impl Completion {
    /// The user-facing congratulation text.
    pub fn message(&self) -> String {
        format!(
            "Congratulations! You won! Moves: {} Time: {}",
            self.moves, self.elapsed
        )
    }
}

/// Everything the game tells the outside world, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A new board was dealt; every tile is face down.
    BoardReset { tiles: usize },
    TileChanged { index: usize, state: TileState },
    /// Formatted elapsed time.
    Timer { text: String },
    Moves { moves: u32 },
    /// Matched pairs as `x/K`.
    Pairs { text: String },
    Completed(Completion),
    Congratulations { message: String },
}
