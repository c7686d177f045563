//! Pure (state, action) -> state helpers
//!
//! These are shared by the engine (stuck detection, auto-play candidates) and
//! the solver (branch generation and its safe-move closure). Nothing here
//! scores or records history.

use crate::game_state::GameState;
use crate::types::{Card, Move, PileId, Suit, TABLEAU_COLUMNS};

/// One step of play as seen by the move generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Turn over a face-down tableau top
    Flip { column: u8 },
    /// Move a card or run between piles
    Transfer(Move),
    /// Draw from the stock (restocking when allowed)
    Draw,
}

impl Action {
    pub fn as_move(&self) -> Option<&Move> {
        match self {
            Action::Transfer(mv) => Some(mv),
            _ => None,
        }
    }
}

/// Every legal action from `state`
///
/// Order: tableau flips, waste top to foundation then tableau, each face-up
/// tableau card (top only to foundation; any to another column), then draw.
pub fn list_legal_moves(state: &GameState) -> Vec<Action> {
    let mut moves = Vec::new();

    for (i, col) in state.tableau.iter().enumerate() {
        if col.last().is_some_and(|c| !c.face_up) {
            moves.push(Action::Flip { column: i as u8 });
        }
    }

    if !state.waste.is_empty() {
        let index = state.waste.len() - 1;
        let targets = Suit::ALL
            .iter()
            .map(|s| PileId::Foundation(*s))
            .chain((0..TABLEAU_COLUMNS).map(PileId::tableau));
        for dst in targets {
            let mv = Move::new(PileId::Waste, index, dst);
            if state.is_legal_move(&mv) {
                moves.push(Action::Transfer(mv));
            }
        }
    }

    for (i, col) in state.tableau.iter().enumerate() {
        let src = PileId::tableau(i);
        let Some(first_up) = col.iter().position(|c| c.face_up) else {
            continue;
        };
        for index in first_up..col.len() {
            if index == col.len() - 1 {
                for suit in Suit::ALL {
                    let mv = Move::new(src, index, PileId::Foundation(suit));
                    if state.is_legal_move(&mv) {
                        moves.push(Action::Transfer(mv));
                    }
                }
            }
            for j in (0..TABLEAU_COLUMNS).filter(|j| *j != i) {
                let mv = Move::new(src, index, PileId::tableau(j));
                if state.is_legal_move(&mv) {
                    moves.push(Action::Transfer(mv));
                }
            }
        }
    }

    if state.can_draw() {
        moves.push(Action::Draw);
    }

    moves
}

/// Whether any legal action exists
pub fn has_any_legal_move(state: &GameState) -> bool {
    !list_legal_moves(state).is_empty()
}

/// Not won, and nothing at all can be done (including drawing)
pub fn is_stuck(state: &GameState) -> bool {
    !state.is_win() && !has_any_legal_move(state)
}

/// Apply an action in place; returns `false` if it was not applicable
pub fn apply_action_in_place(state: &mut GameState, action: &Action) -> bool {
    match action {
        Action::Flip { column } => state.flip_top(PileId::Tableau(*column)),
        Action::Transfer(mv) => {
            if !state.is_legal_move(mv) {
                return false;
            }
            state.transfer(mv).moved > 0
        }
        Action::Draw => state.draw_cards().drawn > 0,
    }
}

/// Pure application: clone `state` and apply `action` to the copy
pub fn apply_action(state: &GameState, action: &Action) -> GameState {
    let mut next = state.clone();
    apply_action_in_place(&mut next, action);
    next
}

/// Whether banking `card` cannot strand a card still needed on the tableau
///
/// - Aces and twos are always safe.
/// - Rank r is safe once both opposite-color foundations reach r - 1, since
///   nothing could then need this card as a landing spot.
/// - Also safe if its own foundation is already past r.
pub fn is_safe_foundation_move(state: &GameState, card: &Card) -> bool {
    let r = card.rank;
    if r <= 2 {
        return true;
    }
    let [a, b] = card.suit.opposite_color_suits();
    if state.foundation_rank(a).min(state.foundation_rank(b)) >= r - 1 {
        return true;
    }
    state.foundation_rank(card.suit) > r
}

/// Legal foundation move for the top of `src`, if there is one
fn foundation_move_for_top(state: &GameState, src: PileId) -> Option<Move> {
    let pile = state.pile(src)?;
    let card = pile.last()?;
    if !card.face_up {
        return None;
    }
    let mv = Move::new(src, pile.len() - 1, PileId::Foundation(card.suit));
    state.is_legal_move(&mv).then_some(mv)
}

/// Safe foundation moves available right now (waste top, then tableau tops)
pub fn enumerate_auto_safe_foundation_moves(state: &GameState) -> Vec<Action> {
    std::iter::once(PileId::Waste)
        .chain((0..TABLEAU_COLUMNS).map(PileId::tableau))
        .filter_map(|src| foundation_move_for_top(state, src))
        .filter(|mv| {
            state
                .pile(mv.src)
                .and_then(|p| p.last())
                .is_some_and(|card| is_safe_foundation_move(state, card))
        })
        .map(Action::Transfer)
        .collect()
}

/// First safe foundation move scanning tableau tops left to right, then the waste
pub fn first_safe_foundation_move(state: &GameState) -> Option<Move> {
    (0..TABLEAU_COLUMNS)
        .map(PileId::tableau)
        .chain(std::iter::once(PileId::Waste))
        .filter_map(|src| foundation_move_for_top(state, src))
        .find(|mv| {
            state
                .pile(mv.src)
                .and_then(|p| p.last())
                .is_some_and(|card| is_safe_foundation_move(state, card))
        })
}

/// Next-rank foundation moves in deterministic order: waste top, then
/// tableau tops left to right. No safety filter.
pub fn next_foundation_moves(state: &GameState) -> Vec<Move> {
    std::iter::once(PileId::Waste)
        .chain((0..TABLEAU_COLUMNS).map(PileId::tableau))
        .filter_map(|src| foundation_move_for_top(state, src))
        .collect()
}
