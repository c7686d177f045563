//! Klondike solitaire (workspace facade crate).
//!
//! Re-exports the member crates under one roof so binaries, integration tests
//! and benches can write `klondike::{core, engine, solver, types}`.

pub use klondike_core as core;
pub use klondike_engine as engine;
pub use klondike_solver as solver;
pub use klondike_types as types;
