//! Plain-text rendering of a position
//!
//! ```text
//! stock: 24  waste: 7♦ 2♠  redeals: unlimited
//! S: --  H: A♥  D: --  C: --
//! tab-1: K♠
//! tab-2: XX 4♥
//! score: 5  moves: 1
//! ```
//!
//! Face-down cards render as `XX`. The waste shows at most its three top cards.

use std::fmt;

use crate::game_state::{Cards, GameState};
use crate::types::{rank_label, Card, RedealPolicy, Suit};

fn write_cards(f: &mut fmt::Formatter<'_>, cards: &[Card]) -> fmt::Result {
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        if card.face_up {
            write!(f, "{}", card)?;
        } else {
            write!(f, "XX")?;
        }
    }
    Ok(())
}

fn write_foundation(f: &mut fmt::Formatter<'_>, suit: Suit, pile: &Cards) -> fmt::Result {
    match pile.last() {
        Some(top) => write!(f, "{}: {}{}", suit.as_char(), rank_label(top.rank), suit.symbol()),
        None => write!(f, "{}: --", suit.as_char()),
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stock: {}  waste: ", self.stock.len())?;
        let shown = self.waste.len().saturating_sub(3);
        if self.waste.is_empty() {
            write!(f, "--")?;
        } else {
            write_cards(f, &self.waste[shown..])?;
        }
        match self.settings.redeal_policy {
            RedealPolicy::Limited(_) => writeln!(f, "  redeals: {}", self.redeals_remaining)?,
            policy => writeln!(f, "  redeals: {}", policy)?,
        }

        for (i, suit) in Suit::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            write_foundation(f, *suit, self.foundation(*suit))?;
        }
        writeln!(f)?;

        for (i, col) in self.tableau.iter().enumerate() {
            write!(f, "tab-{}: ", i + 1)?;
            write_cards(f, col)?;
            writeln!(f)?;
        }
        write!(f, "score: {}  moves: {}", self.score.total, self.score.moves)
    }
}
