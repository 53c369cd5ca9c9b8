//! RNG module - deterministic randomness and the pair shuffle
//!
//! Provides a small seedable LCG so the same seed always deals the same board,
//! and the Fisher-Yates shuffle used to lay out tiles.

use crate::alphabet::Alphabet;
use crate::types::Symbol;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Fold the high half down; the raw low bits of an LCG have tiny periods.
        self.state ^ (self.state >> 16)
    }

    /// Generate a uniformly distributed value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max <= 1 {
            return 0;
        }
        // Reject the tail that would make `% max` favour small values.
        let limit = u32::MAX - u32::MAX % max;
        loop {
            let v = self.next_u32();
            if v < limit {
                return v % max;
            }
        }
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Source of tile layouts.
///
/// Implementations must permute `symbols` in place without adding or
/// removing anything.
pub trait Shuffler {
    fn shuffle(&mut self, symbols: &mut [Symbol]);
}

impl Shuffler for SimpleRng {
    fn shuffle(&mut self, symbols: &mut [Symbol]) {
        SimpleRng::shuffle(self, symbols);
    }
}

/// Two copies of every symbol in `alphabet`, in shuffled order.
pub fn deal_pairs(alphabet: &Alphabet, shuffler: &mut dyn Shuffler) -> Vec<Symbol> {
    let mut symbols: Vec<Symbol> = alphabet.symbols().chain(alphabet.symbols()).collect();
    shuffler.shuffle(&mut symbols);
    symbols
}
