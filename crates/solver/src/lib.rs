//! Dead-end solver
//!
//! A bounded depth-first search that tries to prove a position can no longer
//! be won. It works on clones only and never sees the engine's live state.
//!
//! Every node is first reduced by the safe-foundation closure, which banks
//! cards that nothing on the tableau could still need. Nodes are keyed by
//! [`hash_state`] and never expanded twice. The search stops at the first win
//! or when the wall-clock deadline passes.
//!
//! # Verdicts
//!
//! | `is_no_hope` | Meaning |
//! |--------------|---------|
//! | `true` | No legal move at all, or the whole reachable space was searched without a win |
//! | `false` | A win was found, or the budget ran out first |
//!
//! A `false` is therefore "hope remains", never a promise of a win.

use std::collections::HashSet;
use std::fmt::Write;
use std::time::{Duration, Instant};

use log::{debug, trace};

use klondike_core::actions::apply_action_in_place;
use klondike_core::types::{Card, PileId, DEFAULT_SOLVER_BUDGET_MS};
use klondike_core::GameState;

pub use klondike_core::actions::{enumerate_auto_safe_foundation_moves, list_legal_moves, Action};

/// Default search budget
pub const DEFAULT_BUDGET: Duration = Duration::from_millis(DEFAULT_SOLVER_BUDGET_MS);

/// Apply every safe foundation move until none remain
pub fn auto_safe_to_foundation_closure(state: &GameState) -> GameState {
    let mut cur = state.clone();
    loop {
        let moves = enumerate_auto_safe_foundation_moves(&cur);
        if moves.is_empty() {
            break;
        }
        for action in &moves {
            apply_action_in_place(&mut cur, action);
        }
    }
    cur
}

fn push_card(key: &mut String, card: &Card, with_face: bool) {
    let _ = write!(key, "{}{}", card.suit.as_char(), card.rank);
    if with_face {
        key.push(if card.face_up { '+' } else { '-' });
    }
    key.push(',');
}

/// Canonical visited-set key for a position
///
/// Covers the tableau (suit, rank, orientation), foundation depths, waste and
/// stock contents (suit, rank), the draw count and the redeal counter. Score
/// and clock are ignored.
pub fn hash_state(state: &GameState) -> String {
    let mut key = String::with_capacity(256);
    key.push_str("t:");
    for col in &state.tableau {
        for card in col {
            push_card(&mut key, card, true);
        }
        key.push('|');
    }
    key.push_str("f:");
    for f in &state.foundations {
        let _ = write!(key, "{},", f.len());
    }
    key.push_str("w:");
    for card in &state.waste {
        push_card(&mut key, card, false);
    }
    key.push_str("s:");
    for card in &state.stock {
        push_card(&mut key, card, false);
    }
    let _ = write!(
        key,
        "d:{}r:{}",
        state.settings.draw_count.count(),
        state.redeals_remaining
    );
    key
}

fn priority(action: &Action) -> u8 {
    match action {
        Action::Flip { .. } => 0,
        Action::Transfer(mv) => match (mv.src, mv.dst) {
            (PileId::Tableau(_), PileId::Foundation(_)) => 1,
            (PileId::Waste, PileId::Foundation(_)) => 2,
            (PileId::Tableau(_), _) => 3,
            (PileId::Waste, _) => 4,
            _ => 6,
        },
        Action::Draw => 5,
    }
}

/// Stable sort: flips, tableau->foundation, waste->foundation,
/// tableau->tableau, waste->tableau, draw
pub fn ordered_moves(mut moves: Vec<Action>) -> Vec<Action> {
    moves.sort_by_key(priority);
    moves
}

/// Not won and nothing at all to do
pub fn fast_no_hope(state: &GameState) -> bool {
    !state.is_win() && list_legal_moves(state).is_empty()
}

/// Cards not yet on a foundation
pub fn heuristic(state: &GameState) -> usize {
    klondike_core::types::DECK_SIZE - state.foundation_total()
}

enum Visit {
    Won,
    Pruned,
    Expand(Frame),
}

struct Frame {
    state: GameState,
    moves: std::vec::IntoIter<Action>,
}

struct Search<'a> {
    deadline: Instant,
    seen: &'a mut HashSet<String>,
    nodes: usize,
    expired: bool,
}

impl Search<'_> {
    fn past_deadline(&mut self) -> bool {
        if Instant::now() > self.deadline {
            self.expired = true;
        }
        self.expired
    }

    fn visit(&mut self, state: &GameState) -> Visit {
        if self.past_deadline() {
            return Visit::Pruned;
        }
        let reduced = auto_safe_to_foundation_closure(state);
        if reduced.is_win() {
            return Visit::Won;
        }
        if !self.seen.insert(hash_state(&reduced)) {
            return Visit::Pruned;
        }
        self.nodes += 1;
        let moves = ordered_moves(list_legal_moves(&reduced));
        trace!(
            "node {} left={} branches={}",
            self.nodes,
            heuristic(&reduced),
            moves.len()
        );
        Visit::Expand(Frame {
            state: reduced,
            moves: moves.into_iter(),
        })
    }

    /// Depth-first with an explicit frame stack; child order and deadline
    /// checks follow the recursive formulation exactly
    fn run(&mut self, root: &GameState) -> bool {
        let mut stack = match self.visit(root) {
            Visit::Won => return true,
            Visit::Pruned => return false,
            Visit::Expand(frame) => vec![frame],
        };

        while let Some(frame) = stack.last_mut() {
            let Some(action) = frame.moves.next() else {
                stack.pop();
                if self.past_deadline() {
                    return false;
                }
                continue;
            };
            let mut child = frame.state.clone();
            apply_action_in_place(&mut child, &action);
            match self.visit(&child) {
                Visit::Won => return true,
                Visit::Pruned => {
                    if self.past_deadline() {
                        return false;
                    }
                }
                Visit::Expand(next) => stack.push(next),
            }
        }
        false
    }
}

/// Depth-first search for any winning line, bounded by `deadline`
///
/// `seen` collects the keys of expanded positions and may be shared across calls.
pub fn search_wins(state: &GameState, deadline: Instant, seen: &mut HashSet<String>) -> bool {
    Search {
        deadline,
        seen,
        nodes: 0,
        expired: false,
    }
    .run(state)
}

/// Outcome of a bounded analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverReport {
    /// Proven dead end
    pub no_hope: bool,
    /// A winning line was found
    pub win_found: bool,
    /// Positions expanded
    pub nodes: usize,
    /// The budget ran out before a conclusion
    pub expired: bool,
    pub elapsed: Duration,
}

/// Run the search with a budget and report what happened
pub fn analyze(state: &GameState, budget: Duration) -> SolverReport {
    let start = Instant::now();
    if fast_no_hope(state) {
        debug!("solver: no legal moves, dead end");
        return SolverReport {
            no_hope: true,
            win_found: false,
            nodes: 0,
            expired: false,
            elapsed: start.elapsed(),
        };
    }

    let mut seen = HashSet::new();
    let mut search = Search {
        deadline: start + budget,
        seen: &mut seen,
        nodes: 0,
        expired: false,
    };
    let win_found = search.run(state);
    let report = SolverReport {
        no_hope: !win_found && !search.expired,
        win_found,
        nodes: search.nodes,
        expired: search.expired,
        elapsed: start.elapsed(),
    };
    debug!(
        "solver: win={} expired={} nodes={} in {:?}",
        report.win_found, report.expired, report.nodes, report.elapsed
    );
    report
}

/// Whether the position is provably lost within `budget`
///
/// Running out of budget is inconclusive and reported as `false`.
pub fn is_no_hope(state: &GameState, budget: Duration) -> bool {
    analyze(state, budget).no_hope
}
