//! Scoring module - Standard Klondike scoring
//!
//! Compatibility note:
//! Earlier revisions of the game scored a flat +10/-10 for any foundation
//! deposit/withdrawal. The current ruleset is asymmetric and per-source:
//! - waste -> foundation: +10
//! - tableau -> foundation: +5
//! - foundation -> anywhere: -5 per card
//! - revealing a face-down tableau card: +5 (once per physical flip)
//! - winning: +100, once per game
//!
//! Waste -> tableau, tableau -> tableau and drawing score nothing. The time
//! penalty is applied by the engine's clock tick, not here.

use crate::types::{
    PileId, FOUNDATION_RETURN_PENALTY, REVEAL_POINTS, TABLEAU_TO_FOUNDATION_POINTS,
    WASTE_TO_FOUNDATION_POINTS,
};

/// Score calculation result for one applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveScore {
    /// Points for where the cards went
    pub transfer_points: i32,
    /// Points for a tableau card turned face-up by the move
    pub reveal_points: i32,
    pub total: i32,
}

/// Points for carrying `cards` cards from `src` to `dst`
pub fn calculate_transfer_points(src: PileId, dst: PileId, cards: usize) -> i32 {
    match (src, dst) {
        (PileId::Waste, PileId::Foundation(_)) => WASTE_TO_FOUNDATION_POINTS,
        (PileId::Tableau(_), PileId::Foundation(_)) => TABLEAU_TO_FOUNDATION_POINTS,
        (PileId::Foundation(_), PileId::Foundation(_)) => 0,
        (PileId::Foundation(_), _) => -FOUNDATION_RETURN_PENALTY * cards as i32,
        _ => 0,
    }
}

/// Calculate the complete score delta for a move
pub fn calculate_move_score(src: PileId, dst: PileId, cards: usize, revealed: bool) -> MoveScore {
    let transfer_points = calculate_transfer_points(src, dst, cards);
    let reveal_points = if revealed { REVEAL_POINTS } else { 0 };
    MoveScore {
        transfer_points,
        reveal_points,
        total: transfer_points + reveal_points,
    }
}

/// Number of penalty intervals that have elapsed by `now_ms`
///
/// Returns the count and the next deadline after catching up.
pub fn elapsed_penalties(next_penalty_at_ms: u64, interval_ms: u64, now_ms: u64) -> (u64, u64) {
    if interval_ms == 0 || now_ms < next_penalty_at_ms {
        return (0, next_penalty_at_ms);
    }
    let count = (now_ms - next_penalty_at_ms) / interval_ms + 1;
    let next = next_penalty_at_ms.saturating_add(count.saturating_mul(interval_ms));
    (count, next)
}

/// Score after `count` penalties of `points` each, clamped at the `i32` range
pub fn apply_time_penalties(total: i32, count: u64, points: i32) -> i32 {
    let count = i32::try_from(count).unwrap_or(i32::MAX);
    total.saturating_sub(count.saturating_mul(points))
}
