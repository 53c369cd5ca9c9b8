//! Board module - the dealt tiles in layout order
//!
//! The board is a passive container: it knows where each tile sits and what
//! symbol it carries, but all turn and scoring logic lives in
//! [`GameState`](crate::GameState).

use crate::alphabet::Alphabet;
use crate::error::BoardError;
use crate::rng::{deal_pairs, Shuffler};
use crate::tile::Tile;
use crate::types::{Symbol, TileState};

/// The ordered sequence of 2K tiles of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    pair_count: usize,
}

impl Board {
    /// Deal a fresh board: two of every symbol, laid out in shuffle order.
    pub fn build(alphabet: &Alphabet, shuffler: &mut dyn Shuffler) -> Self {
        let tiles = deal_pairs(alphabet, shuffler)
            .into_iter()
            .enumerate()
            .map(|(index, symbol)| Tile::new(symbol, index))
            .collect();

        Self {
            tiles,
            pair_count: alphabet.len(),
        }
    }

    /// Look up a tile by position.
    pub fn tile_at(&self, index: usize) -> Result<&Tile, BoardError> {
        self.tiles.get(index).ok_or(BoardError::OutOfRange {
            index,
            len: self.tiles.len(),
        })
    }

    /// Mutable lookup; tile state is only ever changed by the controller.
    pub(crate) fn tile_mut(&mut self, index: usize) -> Result<&mut Tile, BoardError> {
        let len = self.tiles.len();
        self.tiles
            .get_mut(index)
            .ok_or(BoardError::OutOfRange { index, len })
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of pairs dealt (K).
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Symbol at `index`, if the index is on the board.
    pub fn symbol_at(&self, index: usize) -> Option<Symbol> {
        self.tiles.get(index).map(Tile::symbol)
    }

    pub fn count_in_state(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|t| t.state() == state).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;

    #[test]
    fn test_build_deals_every_symbol_twice() {
        let alphabet = Alphabet::default();
        let board = Board::build(&alphabet, &mut SimpleRng::new(12345));

        assert_eq!(board.len(), 16);
        assert_eq!(board.pair_count(), 8);
        for symbol in alphabet.symbols() {
            let count = board.tiles().iter().filter(|t| t.symbol() == symbol).count();
            assert_eq!(count, 2, "symbol {:?} should appear twice", symbol);
        }
    }

    #[test]
    fn test_indices_follow_layout_order() {
        let board = Board::build(&Alphabet::default(), &mut SimpleRng::new(1));
        for (i, tile) in board.tiles().iter().enumerate() {
            assert_eq!(tile.index(), i);
            assert_eq!(tile.state(), TileState::FaceDown);
        }
    }

    #[test]
    fn test_same_seed_same_layout() {
        let alphabet = Alphabet::default();
        let a = Board::build(&alphabet, &mut SimpleRng::new(777));
        let b = Board::build(&alphabet, &mut SimpleRng::new(777));
        assert_eq!(a, b);
    }

    #[test]
    fn test_tile_at_out_of_range() {
        let board = Board::build(&Alphabet::default(), &mut SimpleRng::new(1));
        assert!(board.tile_at(15).is_ok());
        assert_eq!(
            board.tile_at(16),
            Err(BoardError::OutOfRange { index: 16, len: 16 })
        );
        assert_eq!(board.symbol_at(99), None);
    }

    #[test]
    fn test_count_in_state() {
        let mut board = Board::build(&Alphabet::default(), &mut SimpleRng::new(1));
        assert_eq!(board.count_in_state(TileState::FaceDown), 16);

        board.tile_mut(0).unwrap().reveal();
        assert_eq!(board.count_in_state(TileState::FaceUp), 1);
        assert_eq!(board.count_in_state(TileState::FaceDown), 15);
    }
}
