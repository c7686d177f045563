//! Animation hook for auto-play

use async_trait::async_trait;

use klondike_core::types::Move;

/// Supplied by a renderer to sequence visual transitions between
/// auto-played moves
#[async_trait]
pub trait MoveAnimator: Send + Sync {
    /// Resolve once the move has been shown
    async fn animate_move(&self, mv: &Move, duration_ms: u64);
}

/// Animator that just sleeps for the requested duration
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepAnimator;

#[async_trait]
impl MoveAnimator for SleepAnimator {
    async fn animate_move(&self, _mv: &Move, duration_ms: u64) {
        tokio::time::sleep(std::time::Duration::from_millis(duration_ms)).await;
    }
}
