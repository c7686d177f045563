//! Engine configuration
//!
//! Defaults come from the shared constants; `from_env` overrides them from
//! `KLONDIKE_*` variables. Unparseable values are ignored with a warning.

use std::time::Duration;

use log::warn;

use klondike_core::types::{
    DrawCount, RedealPolicy, Settings, DEFAULT_ANIMATION_MS, DEFAULT_SOLVER_BUDGET_MS,
};

/// Default broadcast channel capacity for engine events
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Settings used for new games
    pub settings: Settings,
    /// Wall-clock budget for the dead-end solver
    pub solver_budget: Duration,
    /// Duration handed to the animator for each auto-played move
    pub animation_ms: u64,
    /// Events buffered per subscriber before lagging ones skip ahead
    pub event_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            solver_budget: Duration::from_millis(DEFAULT_SOLVER_BUDGET_MS),
            animation_ms: DEFAULT_ANIMATION_MS,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (the environment, a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(raw) = get("KLONDIKE_DRAW_COUNT") {
            match raw.parse().ok().and_then(DrawCount::from_u8) {
                Some(draw) => config.settings.draw_count = draw,
                None => warn!("ignoring KLONDIKE_DRAW_COUNT={:?}", raw),
            }
        }
        if let Some(raw) = get("KLONDIKE_REDEAL_POLICY") {
            match RedealPolicy::from_str(&raw) {
                Some(policy) => config.settings.redeal_policy = policy,
                None => warn!("ignoring KLONDIKE_REDEAL_POLICY={:?}", raw),
            }
        }
        if let Some(secs) = parse_var(get("KLONDIKE_TIME_PENALTY_SECS"), "KLONDIKE_TIME_PENALTY_SECS") {
            config.settings.time_penalty_secs = secs;
        }
        if let Some(points) = parse_var(get("KLONDIKE_TIME_PENALTY_POINTS"), "KLONDIKE_TIME_PENALTY_POINTS") {
            config.settings.time_penalty_points = points;
        }
        if let Some(ms) = parse_var(get("KLONDIKE_SOLVER_BUDGET_MS"), "KLONDIKE_SOLVER_BUDGET_MS") {
            config.solver_budget = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var(get("KLONDIKE_ANIMATION_MS"), "KLONDIKE_ANIMATION_MS") {
            config.animation_ms = ms;
        }
        if let Some(cap) = parse_var::<usize>(get("KLONDIKE_EVENT_CAPACITY"), "KLONDIKE_EVENT_CAPACITY") {
            config.event_capacity = cap.max(1);
        }

        config
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }
}

fn parse_var<T: std::str::FromStr>(raw: Option<String>, key: &str) -> Option<T> {
    let raw = raw?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("ignoring {}={:?}", key, raw);
            None
        }
    }
}
