//! Read-only view of a game for renderers.
//!
//! Faces of face-down tiles are never exposed; a snapshot can be handed to
//! any presentation layer without leaking the layout.

use serde::Serialize;

use crate::types::{GameStatus, TileState, TurnPhase, GRID_COLUMNS};

/// What a renderer may show of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TileSnapshot {
    pub index: usize,
    pub state: TileState,
    /// The glyph, present only once the tile has been turned over.
    pub face: Option<char>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub tiles: Vec<TileSnapshot>,
    pub columns: usize,
    pub moves: u32,
    pub matched_pairs: usize,
    pub total_pairs: usize,
    pub elapsed_seconds: u32,
    pub timer: String,
    pub status: GameStatus,
    pub phase: TurnPhase,
    pub episode_id: u32,
    pub seed: u32,
    pub congratulations: Option<String>,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.tiles.clear();
        self.columns = GRID_COLUMNS;
        self.moves = 0;
        self.matched_pairs = 0;
        self.total_pairs = 0;
        self.elapsed_seconds = 0;
        self.timer.clear();
        self.timer.push_str("0:00");
        self.status = GameStatus::NotStarted;
        self.phase = TurnPhase::NotStarted;
        self.episode_id = 0;
        self.seed = 0;
        self.congratulations = None;
    }

    /// Number of grid rows needed for the tiles.
    pub fn rows(&self) -> usize {
        if self.columns == 0 {
            return 0;
        }
        self.tiles.len().div_ceil(self.columns)
    }

    pub fn pairs_text(&self) -> String {
        crate::types::format_pairs(self.matched_pairs, self.total_pairs)
    }

    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            tiles: Vec::new(),
            columns: GRID_COLUMNS,
            moves: 0,
            matched_pairs: 0,
            total_pairs: 0,
            elapsed_seconds: 0,
            timer: String::new(),
            status: GameStatus::NotStarted,
            phase: TurnPhase::NotStarted,
            episode_id: 0,
            seed: 0,
            congratulations: None,
        };
        s.clear();
        s
    }
}
