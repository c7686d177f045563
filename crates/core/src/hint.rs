//! Hint heuristic
//!
//! Candidates are tried in a fixed order and the first legal one wins:
//!
//! 1. waste top to a foundation
//! 2. a face-up tableau top to its foundation (columns left to right)
//! 3. waste top to a tableau column
//! 4. the head of each column's face-up run to another column
//!
//! Step 4 skips two kinds of pointless shuffle: a King that is already the
//! bottom card of its column going to an empty column, and a destination whose
//! top matches the card under the run head in rank and color.

use crate::game_state::GameState;
use crate::types::{Move, PileId, Suit, TABLEAU_COLUMNS};

/// First suggested move, or `None` when the heuristic finds nothing
pub fn find_hint(state: &GameState) -> Option<Move> {
    let foundations = || Suit::ALL.into_iter().map(PileId::Foundation);
    let columns = || (0..TABLEAU_COLUMNS).map(PileId::tableau);

    let waste_top = state.waste.len().checked_sub(1);

    if let Some(index) = waste_top {
        let hit = foundations()
            .map(|dst| Move::new(PileId::Waste, index, dst))
            .find(|mv| state.is_legal_move(mv));
        if hit.is_some() {
            return hit;
        }
    }

    for (i, col) in state.tableau.iter().enumerate() {
        let Some(index) = col.len().checked_sub(1) else {
            continue;
        };
        let hit = foundations()
            .map(|dst| Move::new(PileId::tableau(i), index, dst))
            .find(|mv| state.is_legal_move(mv));
        if hit.is_some() {
            return hit;
        }
    }

    if let Some(index) = waste_top {
        let hit = columns()
            .map(|dst| Move::new(PileId::Waste, index, dst))
            .find(|mv| state.is_legal_move(mv));
        if hit.is_some() {
            return hit;
        }
    }

    for (i, col) in state.tableau.iter().enumerate() {
        let Some(head) = col.iter().position(|c| c.face_up) else {
            continue;
        };
        let card = &col[head];
        let below = head.checked_sub(1).map(|k| &col[k]);

        for j in (0..TABLEAU_COLUMNS).filter(|j| *j != i) {
            let dst_top = state.tableau[j].last();
            if dst_top.is_none() && card.rank == 13 && head == 0 {
                continue;
            }
            if let (Some(prev), Some(top)) = (below, dst_top) {
                if prev.rank == top.rank && prev.color() == top.color() {
                    continue;
                }
            }
            let mv = Move::new(PileId::tableau(i), head, PileId::tableau(j));
            if state.is_legal_move(&mv) {
                return Some(mv);
            }
        }
    }

    None
}
