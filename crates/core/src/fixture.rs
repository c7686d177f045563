//! Layout builder for hand-written positions
//!
//! Cards are given as compact codes: suit letter then rank, with an uppercase
//! suit meaning face-up (`"H1"` is A♥ face-up, `"d13"` is K♦ face-down).
//! Piles list cards bottom to top. Everything not given starts empty; the
//! default settings draw one card and never redeal.

use anyhow::{anyhow, bail, Result};

use crate::game_state::{Cards, GameState};
use crate::types::{Card, RedealPolicy, Settings, Suit, TABLEAU_COLUMNS};

/// Builder for a [`GameState`] with explicit pile contents
#[derive(Debug, Clone)]
pub struct LayoutBuilder {
    settings: Settings,
    seed: u32,
    now_ms: u64,
    waste: Vec<String>,
    stock: Vec<String>,
    tableau: [Vec<String>; TABLEAU_COLUMNS],
    foundations: [Vec<String>; 4],
}

impl Default for LayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutBuilder {
    pub fn new() -> Self {
        let mut settings = Settings::default().with_redeal_policy(RedealPolicy::None);
        settings.animations = false;
        Self {
            settings,
            seed: 0,
            now_ms: 0,
            waste: Vec::new(),
            stock: Vec::new(),
            tableau: Default::default(),
            foundations: Default::default(),
        }
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Clock start (epoch ms) for the built state
    pub fn started_at(mut self, now_ms: u64) -> Self {
        self.now_ms = now_ms;
        self
    }

    pub fn waste(mut self, codes: &[&str]) -> Self {
        self.waste = codes.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn stock(mut self, codes: &[&str]) -> Self {
        self.stock = codes.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Contents of tableau column `index` (0-based)
    pub fn column(mut self, index: usize, codes: &[&str]) -> Self {
        if let Some(col) = self.tableau.get_mut(index) {
            *col = codes.iter().map(|c| c.to_string()).collect();
        }
        self
    }

    pub fn foundation(mut self, suit: Suit, codes: &[&str]) -> Self {
        self.foundations[suit.index()] = codes.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Fill the `suit` foundation with Ace through `rank`
    pub fn foundation_to(mut self, suit: Suit, rank: u8) -> Self {
        self.foundations[suit.index()] = (1..=rank)
            .map(|r| Card::new(suit, r, true).code())
            .collect();
        self
    }

    pub fn build(self) -> Result<GameState> {
        let mut state = GameState::empty(self.settings);
        state.seed = self.seed;
        state.reset_clock(self.now_ms);

        state.waste = parse_pile(&self.waste)?;
        state.stock = parse_pile(&self.stock)?;
        for (col, codes) in state.tableau.iter_mut().zip(self.tableau.iter()) {
            *col = parse_pile(codes)?;
        }
        for (suit, codes) in Suit::ALL.iter().zip(self.foundations.iter()) {
            let pile = parse_pile(codes)?;
            if let Some(card) = pile.iter().find(|c| c.suit != *suit) {
                bail!("{} does not belong on the {:?} foundation", card.code(), suit);
            }
            state.foundations[suit.index()] = pile;
        }
        Ok(state)
    }
}

fn parse_pile(codes: &[String]) -> Result<Cards> {
    let mut pile = Cards::new();
    for code in codes {
        let card = Card::parse_code(code).ok_or_else(|| anyhow!("bad card code: {:?}", code))?;
        pile.try_push(card)
            .map_err(|_| anyhow!("pile exceeds {} cards", pile.capacity()))?;
    }
    Ok(pile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_places_cards() {
        let state = LayoutBuilder::new()
            .waste(&["H1", "c7"])
            .column(2, &["d13", "S12"])
            .foundation_to(Suit::Spades, 3)
            .build()
            .unwrap();

        assert_eq!(state.waste.len(), 2);
        assert!(!state.waste[1].face_up);
        assert_eq!(state.tableau[2].len(), 2);
        assert!(state.tableau[2][1].face_up);
        assert_eq!(state.foundation_rank(Suit::Spades), 3);
        assert!(state.stock.is_empty());
        assert_eq!(state.settings.redeal_policy, RedealPolicy::None);
    }

    #[test]
    fn test_build_rejects_bad_codes() {
        assert!(LayoutBuilder::new().waste(&["Z3"]).build().is_err());
        assert!(LayoutBuilder::new()
            .foundation(Suit::Hearts, &["S1"])
            .build()
            .is_err());
    }
}
