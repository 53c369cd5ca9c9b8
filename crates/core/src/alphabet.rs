//! The fixed glyph set a board is dealt from.

use crate::error::{AlphabetError, MAX_ALPHABET_LEN};
use crate::types::Symbol;

/// Glyphs of the standard 8-pair game.
///
/// All of them render one terminal column wide.
pub const DEFAULT_GLYPHS: [char; 8] = ['♠', '♥', '♦', '♣', '★', '☀', '☂', '♪'];

/// An ordered set of distinct glyphs; `Symbol(n)` names the n-th one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    glyphs: Vec<char>,
}

impl Alphabet {
    /// Validate and build an alphabet.
    ///
    /// Fails on an empty set, a repeated glyph, or more glyphs than a
    /// [`Symbol`] can address.
    pub fn new(glyphs: impl IntoIterator<Item = char>) -> Result<Self, AlphabetError> {
        let glyphs: Vec<char> = glyphs.into_iter().collect();
        if glyphs.is_empty() {
            return Err(AlphabetError::Empty);
        }
        if glyphs.len() > MAX_ALPHABET_LEN {
            return Err(AlphabetError::TooLarge { len: glyphs.len() });
        }
        for (i, &glyph) in glyphs.iter().enumerate() {
            if glyphs[..i].contains(&glyph) {
                return Err(AlphabetError::Duplicate { glyph });
            }
        }
        Ok(Self { glyphs })
    }

    /// Number of distinct symbols (K).
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.glyphs.len()).map(|i| Symbol(i as u8))
    }

    pub fn glyph(&self, symbol: Symbol) -> Option<char> {
        self.glyphs.get(symbol.0 as usize).copied()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_GLYPHS.to_vec(),
        }
    }
}
