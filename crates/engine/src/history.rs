//! Undo/redo history of full state snapshots

use std::collections::VecDeque;

use klondike_core::types::UNDO_CAPACITY;
use klondike_core::GameState;

/// Bounded undo stack plus redo stack
///
/// The undo side drops its oldest entry past `capacity`. Any new forward
/// action clears the redo side.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    undo: VecDeque<GameState>,
    redo: Vec<GameState>,
    capacity: usize,
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new(UNDO_CAPACITY)
    }
}

impl UndoHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            undo: VecDeque::with_capacity(capacity.min(UNDO_CAPACITY)),
            redo: Vec::new(),
            capacity,
        }
    }

    /// Record the state as it was before a forward action
    pub fn record(&mut self, before: GameState) {
        self.undo.push_back(before);
        while self.undo.len() > self.capacity {
            self.undo.pop_front();
        }
        self.redo.clear();
    }

    /// Step back: returns the state to make live, keeping `current` for redo
    pub fn undo(&mut self, current: &GameState) -> Option<GameState> {
        let prev = self.undo.pop_back()?;
        self.redo.push(current.clone());
        Some(prev)
    }

    /// Step forward again
    pub fn redo(&mut self, current: &GameState) -> Option<GameState> {
        let next = self.redo.pop()?;
        self.undo.push_back(current.clone());
        Some(next)
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }
}
