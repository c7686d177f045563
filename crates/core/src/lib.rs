//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the Klondike rules, state representation and the pure
//! helpers shared by the engine and the solver. It has no I/O beyond JSON
//! text, no clock and no async:
//!
//! - **Deterministic**: the same seed always deals the same layout
//! - **Cheap to copy**: a position is plain inline data, so `clone()` is a snapshot
//! - **Pure helpers**: `(state, action) -> state` for search and stuck detection
//!
//! # Module Structure
//!
//! - [`rng`]: LCG + Fisher-Yates shuffled deck
//! - [`game_state`]: piles, the deal, legality, transfer, draw and restock
//! - [`scoring`]: per-move points and time penalty intervals
//! - [`actions`]: legal-move enumeration, pure application, safety heuristic
//! - [`hint`]: single-move suggestion heuristic
//! - [`invariants`]: foundation and card-conservation checks
//! - [`snapshot`]: JSON persistence of state and settings
//! - [`fixture`]: build positions from compact card codes
//! - [`display`]: text rendering of a position
//!
//! # Game Rules
//!
//! - **Tableau**: build down in alternating colors; only a King fills an empty column
//! - **Foundations**: one per suit, Ace up to King, one card at a time
//! - **Stock**: draw 1 or 3 to the waste; recycle under the redeal policy
//! - **Win**: all 52 cards on the foundations
//!
//! # Example
//!
//! ```
//! use klondike_core::actions::{list_legal_moves, Action};
//! use klondike_core::types::Settings;
//! use klondike_core::GameState;
//!
//! let state = GameState::deal(12345, Settings::default(), 0);
//! assert_eq!(state.stock.len(), 24);
//!
//! // a fresh deal can always draw
//! assert!(list_legal_moves(&state).contains(&Action::Draw));
//! ```

pub mod actions;
pub mod display;
pub mod fixture;
pub mod game_state;
pub mod hint;
pub mod invariants;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use klondike_types as types;

// Re-export commonly used types for convenience
pub use actions::{
    apply_action, enumerate_auto_safe_foundation_moves, is_safe_foundation_move, is_stuck,
    list_legal_moves, Action,
};
pub use fixture::LayoutBuilder;
pub use game_state::{Cards, DrawOutcome, GameState, Transfer};
pub use hint::find_hint;
pub use invariants::InvariantViolation;
pub use rng::SimpleRng;
pub use scoring::{calculate_move_score, MoveScore};
