//! Klondike engine - the live game, its history and its events
//!
//! Wraps the pure rules from `klondike-core` with everything that makes a
//! playable session: one authoritative state, scoring, undo/redo, the game
//! clock, auto-play and event publication.
//!
//! # Module Structure
//!
//! - [`engine`]: [`Engine`] and its operations
//! - [`events`]: [`EngineEvent`] topics published on a broadcast channel
//! - [`history`]: bounded undo stack and redo stack
//! - [`clock`]: [`Clock`] trait with system and manual implementations
//! - [`config`]: [`EngineConfig`] with environment overrides
//! - [`animator`]: [`MoveAnimator`] hook awaited between auto-played moves
//!
//! # Example
//!
//! ```
//! use klondike_engine::{Engine, EngineConfig};
//! use klondike_engine::core::types::Settings;
//!
//! let engine = Engine::new(EngineConfig::default());
//! let mut events = engine.subscribe();
//!
//! engine.new_game_with_seed(7, Settings::default());
//! assert!(engine.draw());
//! assert_eq!(engine.state().score.moves, 1);
//! assert!(engine.undo());
//!
//! assert_eq!(events.try_recv().unwrap().topic(), "state");
//! ```

pub mod animator;
pub mod clock;
pub mod config;
pub mod engine;
pub mod events;
pub mod history;

pub use klondike_core as core;
pub use klondike_solver as solver;

pub use animator::{MoveAnimator, SleepAnimator};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::EngineConfig;
pub use engine::{AutoPlayReport, Engine};
pub use events::EngineEvent;
pub use history::UndoHistory;
