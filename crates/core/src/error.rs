//! Error types for board construction and lookup.
//!
//! Invalid moves are not errors: the controller reports them as
//! [`FlipOutcome::Rejected`](crate::game_state::FlipOutcome::Rejected).

use derive_more::{Display, Error};

/// Largest alphabet that still fits a [`Symbol`](crate::types::Symbol) id.
pub const MAX_ALPHABET_LEN: usize = u8::MAX as usize;

/// The glyph set a board is dealt from is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum AlphabetError {
    #[display("alphabet is empty")]
    Empty,
    #[display("symbol {glyph:?} appears more than once in the alphabet")]
    Duplicate { glyph: char },
    #[display("alphabet has {len} symbols, at most {MAX_ALPHABET_LEN} are supported")]
    TooLarge { len: usize },
}

/// Board lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display("tile index {index} is out of range for a board of {len} tiles")]
    OutOfRange { index: usize, len: usize },
}
