//! Board cursor: turns intents into tile-level game actions.

use crate::map::InputIntent;
use crate::types::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Highlighted position on a grid of `tiles` cards laid out `columns` wide.
///
/// Movement wraps around the edges of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    tiles: usize,
    columns: usize,
}

impl Cursor {
    pub fn new(tiles: usize, columns: usize) -> Self {
        Self {
            index: 0,
            tiles,
            columns: columns.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Jump to `index` (e.g. after a mouse click). Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize) {
        if index < self.tiles {
            self.index = index;
        }
    }

    /// Adopt a new board size, keeping the position when it still fits.
    pub fn resize(&mut self, tiles: usize) {
        self.tiles = tiles;
        if self.index >= tiles {
            self.index = 0;
        }
    }

    pub fn step(&mut self, direction: Direction) {
        if self.tiles == 0 {
            return;
        }
        let rows = self.tiles.div_ceil(self.columns);
        let (mut col, mut row) = (self.index % self.columns, self.index / self.columns);

        match direction {
            Direction::Left => col = (col + self.columns - 1) % self.columns,
            Direction::Right => col = (col + 1) % self.columns,
            Direction::Up => row = (row + rows - 1) % rows,
            Direction::Down => row = (row + 1) % rows,
        }

        let target = row * self.columns + col;
        // A short last row: fall back to its last card.
        self.index = target.min(self.tiles - 1);
    }

    /// Apply an intent. Returns the game action it resolves to, if any.
    pub fn apply(&mut self, intent: InputIntent) -> Option<GameAction> {
        match intent {
            InputIntent::MoveCursor(direction) => {
                self.step(direction);
                None
            }
            InputIntent::Flip => (self.tiles > 0).then_some(GameAction::FlipTile(self.index)),
            InputIntent::Restart => Some(GameAction::Restart),
        }
    }
}
