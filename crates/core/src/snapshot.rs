//! JSON persistence boundary
//!
//! A storage collaborator keeps two opaque blobs: the settings and the full
//! in-progress game. This module only turns them into text and back; where
//! the text lives is up to the caller.

use anyhow::{Context, Result};

use crate::game_state::GameState;
use crate::invariants::{check_foundations, check_no_duplicates, check_ranks};
use crate::types::Settings;

/// Storage key for the settings blob
pub const SETTINGS_KEY: &str = "solitaire.settings";

/// Storage key for the saved game blob
pub const SAVED_GAME_KEY: &str = "solitaire.saved";

pub fn state_to_json(state: &GameState) -> Result<String> {
    serde_json::to_string(state).context("serialize game state")
}

/// Parse a saved game and reject structurally broken positions
pub fn state_from_json(json: &str) -> Result<GameState> {
    let state: GameState = serde_json::from_str(json).context("parse saved game")?;
    check_ranks(&state).context("saved game has an impossible card")?;
    check_foundations(&state).context("saved game has a bad foundation")?;
    check_no_duplicates(&state).context("saved game repeats a card")?;
    Ok(state)
}

pub fn settings_to_json(settings: &Settings) -> Result<String> {
    serde_json::to_string(settings).context("serialize settings")
}

/// Parse settings; missing fields take their defaults
pub fn settings_from_json(json: &str) -> Result<Settings> {
    serde_json::from_str(json).context("parse settings")
}
