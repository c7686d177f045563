//! Engine events
//!
//! Published on a broadcast channel after each state change. Renderers
//! subscribe and redraw from the carried snapshot; nothing in the engine calls
//! back into them.
//!
//! | Topic | Payload | When |
//! |-------|---------|------|
//! | `state` | full state | after every applied mutation |
//! | `tick` | clock | on every `tick()` |
//! | `win` | full state | end-of-turn check found all 52 banked |
//! | `stuck` | full state | end-of-turn check found no legal move |

use serde::Serialize;

use klondike_core::types::TimeState;
use klondike_core::GameState;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "topic", content = "payload", rename_all = "lowercase")]
pub enum EngineEvent {
    State(GameState),
    Tick(TimeState),
    Win(GameState),
    Stuck(GameState),
}

impl EngineEvent {
    pub fn topic(&self) -> &'static str {
        match self {
            EngineEvent::State(_) => "state",
            EngineEvent::Tick(_) => "tick",
            EngineEvent::Win(_) => "win",
            EngineEvent::Stuck(_) => "stuck",
        }
    }

    /// JSON line for external consumers
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
