//! RNG module - seeded deck shuffling
//!
//! Builds the ordered 52-card deck and shuffles it with Fisher-Yates driven
//! by a small LCG, so a given seed always produces the same deal.

use crate::types::{Card, Suit, DECK_SIZE, RANKS_PER_SUIT};

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
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Ordered deck, suit by suit (S, H, D, C), Ace to King, all face-down
pub fn ordered_deck() -> [Card; DECK_SIZE] {
    let mut deck = [Card::new(Suit::Spades, 1, false); DECK_SIZE];
    let mut i = 0usize;
    for suit in Suit::ALL {
        for rank in 1..=RANKS_PER_SUIT {
            deck[i] = Card::new(suit, rank, false);
            i += 1;
        }
    }
    deck
}

/// Ordered deck shuffled with the given seed
///
/// The last element is the top of the shuffled deck.
pub fn shuffled_deck(seed: u32) -> [Card; DECK_SIZE] {
    let mut deck = ordered_deck();
    SimpleRng::new(seed).shuffle(&mut deck);
    deck
}
