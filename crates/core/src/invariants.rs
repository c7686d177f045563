//! Structural checks over a whole position
//!
//! Used by tests and when loading a snapshot from outside.

use std::collections::HashSet;
use std::fmt;

use crate::game_state::GameState;
use crate::types::{PileId, Suit, DECK_SIZE, RANKS_PER_SUIT};

/// A broken structural rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A foundation holds a card of another suit
    WrongSuit { pile: PileId, found: Suit },
    /// A foundation does not start at the Ace
    MissingAce { pile: PileId },
    /// A foundation skips or repeats a rank
    OutOfSequence { pile: PileId, rank: u8 },
    /// A banked card is face-down
    FaceDownOnFoundation { pile: PileId },
    /// The same suit and rank appears in more than one place
    DuplicateCard { code: String },
    /// Not exactly the 52 distinct cards
    CardCount { found: usize },
    /// A rank outside Ace..King
    BadRank { suit: Suit, rank: u8 },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::WrongSuit { pile, found } => {
                write!(f, "{} holds a {} card", pile, found.as_char())
            }
            InvariantViolation::MissingAce { pile } => write!(f, "{} must start at Ace", pile),
            InvariantViolation::OutOfSequence { pile, rank } => {
                write!(f, "{} out of sequence at rank {}", pile, rank)
            }
            InvariantViolation::FaceDownOnFoundation { pile } => {
                write!(f, "{} holds a face-down card", pile)
            }
            InvariantViolation::DuplicateCard { code } => write!(f, "duplicate card {}", code),
            InvariantViolation::CardCount { found } => {
                write!(f, "expected {} cards, found {}", DECK_SIZE, found)
            }
            InvariantViolation::BadRank { suit, rank } => {
                write!(f, "rank {} is not a card of {}", rank, suit.as_char())
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

/// Every card has a rank from 1 to 13
pub fn check_ranks(state: &GameState) -> Result<(), InvariantViolation> {
    match state
        .all_cards()
        .find(|c| !(1..=RANKS_PER_SUIT).contains(&c.rank))
    {
        Some(card) => Err(InvariantViolation::BadRank {
            suit: card.suit,
            rank: card.rank,
        }),
        None => Ok(()),
    }
}

/// Each foundation is Ace..k of its own suit, all face-up
pub fn check_foundations(state: &GameState) -> Result<(), InvariantViolation> {
    for suit in Suit::ALL {
        let pile = PileId::Foundation(suit);
        for (i, card) in state.foundation(suit).iter().enumerate() {
            if card.suit != suit {
                return Err(InvariantViolation::WrongSuit {
                    pile,
                    found: card.suit,
                });
            }
            if !card.face_up {
                return Err(InvariantViolation::FaceDownOnFoundation { pile });
            }
            let expected = i as u8 + 1;
            if card.rank != expected {
                return Err(if i == 0 {
                    InvariantViolation::MissingAce { pile }
                } else {
                    InvariantViolation::OutOfSequence {
                        pile,
                        rank: card.rank,
                    }
                });
            }
        }
    }
    Ok(())
}

/// No card appears twice anywhere in the position
pub fn check_no_duplicates(state: &GameState) -> Result<(), InvariantViolation> {
    let mut seen = HashSet::with_capacity(DECK_SIZE);
    for card in state.all_cards() {
        if !seen.insert((card.suit, card.rank)) {
            return Err(InvariantViolation::DuplicateCard {
                code: card.with_face_up(true).code(),
            });
        }
    }
    Ok(())
}

/// Exactly the full deck: 52 cards, no duplicates
pub fn check_card_conservation(state: &GameState) -> Result<(), InvariantViolation> {
    check_no_duplicates(state)?;
    let found = state.all_cards().count();
    if found != DECK_SIZE {
        return Err(InvariantViolation::CardCount { found });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::LayoutBuilder;
    use crate::types::Settings;

    #[test]
    fn test_fresh_deal_passes() {
        let state = GameState::deal(99, Settings::default(), 0);
        assert_eq!(check_foundations(&state), Ok(()));
        assert_eq!(check_card_conservation(&state), Ok(()));
    }

    #[test]
    fn test_foundation_violations() {
        let state = LayoutBuilder::new()
            .foundation(Suit::Hearts, &["H2"])
            .build()
            .unwrap();
        assert_eq!(
            check_foundations(&state),
            Err(InvariantViolation::MissingAce {
                pile: PileId::Foundation(Suit::Hearts)
            })
        );

        let state = LayoutBuilder::new()
            .foundation(Suit::Clubs, &["C1", "C3"])
            .build()
            .unwrap();
        let err = check_foundations(&state).unwrap_err();
        assert_eq!(err.to_string(), "foundation-C out of sequence at rank 3");

        let state = LayoutBuilder::new()
            .foundation(Suit::Clubs, &["c1"])
            .build()
            .unwrap();
        assert!(matches!(
            check_foundations(&state),
            Err(InvariantViolation::FaceDownOnFoundation { .. })
        ));
    }

    #[test]
    fn test_duplicate_and_count() {
        let state = LayoutBuilder::new()
            .waste(&["H1"])
            .column(0, &["h1"])
            .build()
            .unwrap();
        assert_eq!(
            check_no_duplicates(&state),
            Err(InvariantViolation::DuplicateCard { code: "H1".into() })
        );

        let state = LayoutBuilder::new().waste(&["H1"]).build().unwrap();
        assert_eq!(check_no_duplicates(&state), Ok(()));
        assert_eq!(
            check_card_conservation(&state),
            Err(InvariantViolation::CardCount { found: 1 })
        );
    }

    #[test]
    fn test_rank_range() {
        let mut state = LayoutBuilder::new().column(0, &["D13"]).build().unwrap();
        assert_eq!(check_ranks(&state), Ok(()));

        state.waste.push(crate::types::Card::new(Suit::Clubs, 14, true));
        assert_eq!(
            check_ranks(&state),
            Err(InvariantViolation::BadRank {
                suit: Suit::Clubs,
                rank: 14
            })
        );
    }
}
