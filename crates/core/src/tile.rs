//! A single game cell.

use crate::types::{Symbol, TileState};

/// One card on the board.
///
/// `index` and `symbol` are fixed at deal time; only `state` moves, and only
/// along FaceDown → FaceUp → Matched or back from FaceUp to FaceDown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    index: usize,
    symbol: Symbol,
    state: TileState,
}

impl Tile {
    /// Create a face-down tile
    pub fn new(symbol: Symbol, index: usize) -> Self {
        Self {
            index,
            symbol,
            state: TileState::FaceDown,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn state(&self) -> TileState {
        self.state
    }

    /// FaceDown → FaceUp. Returns false (and does nothing) from any other state.
    pub fn reveal(&mut self) -> bool {
        self.transition(TileState::FaceDown, TileState::FaceUp)
    }

    /// FaceUp → Matched.
    pub fn mark_matched(&mut self) -> bool {
        self.transition(TileState::FaceUp, TileState::Matched)
    }

    /// FaceUp → FaceDown, used when a mismatch is rolled back.
    pub fn hide(&mut self) -> bool {
        self.transition(TileState::FaceUp, TileState::FaceDown)
    }

    fn transition(&mut self, from: TileState, to: TileState) -> bool {
        if self.state != from {
            return false;
        }
        self.state = to;
        true
    }
}
