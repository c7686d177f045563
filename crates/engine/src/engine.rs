//! The live game
//!
//! [`Engine`] owns exactly one authoritative [`GameState`] plus its undo/redo
//! history. Every public operation takes `&self`: state sits behind a mutex
//! that is only held for the synchronous part of an operation and never
//! across an `.await`.
//!
//! Rejected operations (illegal move, nothing to draw, empty history) change
//! nothing and publish nothing; the boolean return is the only signal. After
//! every applied mutation the engine publishes `State`, then runs the
//! end-of-turn check (win before stuck).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::{debug, info};
use serde::Serialize;
use tokio::sync::broadcast;

use klondike_core::actions::{first_safe_foundation_move, next_foundation_moves};
use klondike_core::scoring::{apply_time_penalties, calculate_move_score, elapsed_penalties};
use klondike_core::types::{
    Move, PileId, Settings, AUTO_FIXPOINT_MAX_ITERATIONS, AUTO_FIXPOINT_MAX_MOVES, WIN_BONUS,
};
use klondike_core::{find_hint, is_stuck, list_legal_moves, Action, GameState};
use klondike_solver::SolverReport;

use crate::animator::MoveAnimator;
use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::events::EngineEvent;
use crate::history::UndoHistory;

/// Result of one fixpoint auto-play run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AutoPlayReport {
    /// Foundation moves applied
    pub moves: u32,
    /// Scans that found a move to try
    pub iterations: u32,
}

struct Live {
    state: GameState,
    history: UndoHistory,
}

/// Clears the in-flight flag when a fixpoint run ends, however it ends
struct RunningGuard<'a>(&'a AtomicBool);

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Klondike rules engine
pub struct Engine {
    config: EngineConfig,
    clock: Arc<dyn Clock>,
    live: Mutex<Live>,
    auto_running: AtomicBool,
    events: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Engine on the system clock, holding a freshly dealt random game
    pub fn new(config: EngineConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: EngineConfig, clock: Arc<dyn Clock>) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity.max(1));
        let state = GameState::deal(rand::random(), config.settings, clock.now_ms());
        Self {
            config,
            clock,
            live: Mutex::new(Live {
                state,
                history: UndoHistory::default(),
            }),
            auto_running: AtomicBool::new(false),
            events,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Live> {
        self.live.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// New receiver for engine events
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.events.subscribe()
    }

    /// Snapshot of the live state
    pub fn state(&self) -> GameState {
        self.lock().state.clone()
    }

    pub fn settings(&self) -> Settings {
        self.lock().state.settings
    }

    pub fn can_undo(&self) -> bool {
        self.lock().history.undo_len() > 0
    }

    pub fn can_redo(&self) -> bool {
        self.lock().history.redo_len() > 0
    }

    fn emit(&self, event: EngineEvent) {
        // no subscribers is fine
        let _ = self.events.send(event);
    }

    /// Publish `State`, then the end-of-turn outcome
    fn publish(&self, snapshot: GameState) {
        let outcome = if snapshot.is_win() {
            Some(EngineEvent::Win(snapshot.clone()))
        } else if is_stuck(&snapshot) {
            Some(EngineEvent::Stuck(snapshot.clone()))
        } else {
            None
        };
        self.emit(EngineEvent::State(snapshot));
        if let Some(event) = outcome {
            debug!("end of turn: {}", event.topic());
            self.emit(event);
        }
    }

    /// Award the win bonus the first time a won position is seen
    fn settle(state: &mut GameState) {
        if state.is_win() && !state.win_bonus_awarded {
            state.score.total = state.score.total.saturating_add(WIN_BONUS);
            state.win_bonus_awarded = true;
            info!(
                "game won: score={} moves={}",
                state.score.total, state.score.moves
            );
        }
    }

    fn refresh_elapsed(&self, state: &mut GameState) {
        state.time.elapsed_ms = self.clock.now_ms().saturating_sub(state.time.started_at_ms);
    }

    /// Deal a new game with a random seed; returns the seed
    pub fn new_game(&self, settings: Settings) -> u32 {
        let seed = rand::random();
        self.new_game_with_seed(seed, settings);
        seed
    }

    /// Deal a new game from `seed`, discarding history
    pub fn new_game_with_seed(&self, seed: u32, settings: Settings) {
        let state = GameState::deal(seed, settings, self.clock.now_ms());
        info!(
            "new game seed={} draw={} redeal={}",
            seed,
            settings.draw_count.count(),
            settings.redeal_policy
        );
        self.install(state);
    }

    /// Make a persisted or hand-built position live, discarding history
    pub fn restore(&self, state: GameState) {
        debug!("restoring position seed={}", state.seed);
        self.install(state);
    }

    fn install(&self, mut state: GameState) {
        Self::settle(&mut state);
        let snapshot = {
            let mut live = self.lock();
            live.state = state;
            live.history.clear();
            live.state.clone()
        };
        self.publish(snapshot);
    }

    /// Turn cards from the stock (restocking if allowed)
    ///
    /// Returns `false` without touching anything when no card can move.
    pub fn draw(&self) -> bool {
        let snapshot = {
            let mut guard = self.lock();
            let live = &mut *guard;
            if !live.state.can_draw() {
                return false;
            }
            self.refresh_elapsed(&mut live.state);
            live.history.record(live.state.clone());
            let out = live.state.draw_cards();
            live.state.score.moves += 1;
            debug!("draw: {} card(s), {} restock(s)", out.drawn, out.restocks);
            live.state.clone()
        };
        self.publish(snapshot);
        true
    }

    /// Apply a move command if it is legal
    pub fn move_cards(&self, mv: &Move) -> bool {
        let snapshot = {
            let mut guard = self.lock();
            let live = &mut *guard;
            if !live.state.is_legal_move(mv) {
                debug!("rejected {}", mv);
                return false;
            }
            self.refresh_elapsed(&mut live.state);
            live.history.record(live.state.clone());

            let transfer = live.state.transfer(mv);
            let score = calculate_move_score(mv.src, mv.dst, transfer.moved, transfer.revealed);
            live.state.score.total = live.state.score.total.saturating_add(score.total);
            live.state.score.moves += 1;
            debug!(
                "applied {} ({} card(s), {:+} points)",
                mv, transfer.moved, score.total
            );
            Self::settle(&mut live.state);
            live.state.clone()
        };
        self.publish(snapshot);
        true
    }

    /// Move command from string pile ids; malformed ids are a no-op
    pub fn move_by_ids(&self, src: &str, card_index: usize, dst: &str) -> bool {
        match Move::from_ids(src, card_index, dst) {
            Some(mv) => self.move_cards(&mv),
            None => {
                debug!("unknown pile id in {} -> {}", src, dst);
                false
            }
        }
    }

    pub fn undo(&self) -> bool {
        let snapshot = {
            let mut guard = self.lock();
            let Live { state, history } = &mut *guard;
            let Some(prev) = history.undo(state) else {
                return false;
            };
            *state = prev;
            self.refresh_elapsed(state);
            state.clone()
        };
        self.publish(snapshot);
        true
    }

    pub fn redo(&self) -> bool {
        let snapshot = {
            let mut guard = self.lock();
            let Live { state, history } = &mut *guard;
            let Some(next) = history.redo(state) else {
                return false;
            };
            *state = next;
            self.refresh_elapsed(state);
            state.clone()
        };
        self.publish(snapshot);
        true
    }

    /// Send the card at `src[card_index]` to its suit's foundation if legal
    pub fn auto_move_one(&self, src: PileId, card_index: usize) -> bool {
        let suit = {
            let live = self.lock();
            match live.state.pile(src).and_then(|p| p.get(card_index)) {
                Some(card) => card.suit,
                None => return false,
            }
        };
        self.move_cards(&Move::new(src, card_index, PileId::Foundation(suit)))
    }

    /// Bank safe cards one at a time until none remain; never draws
    pub fn auto_move_to_foundations(&self) -> usize {
        let mut moved = 0;
        loop {
            let next = first_safe_foundation_move(&self.lock().state);
            let Some(mv) = next else {
                break;
            };
            if !self.move_cards(&mv) {
                break;
            }
            moved += 1;
        }
        if moved > 0 {
            debug!("auto-moved {} safe card(s)", moved);
        }
        moved
    }

    fn next_foundation_move(&self) -> Option<Move> {
        next_foundation_moves(&self.lock().state).into_iter().next()
    }

    fn animations_enabled(&self) -> bool {
        self.lock().state.settings.animations
    }

    async fn pause(&self, animator: Option<&dyn MoveAnimator>, mv: &Move) {
        match animator {
            Some(animator) if self.animations_enabled() => {
                animator.animate_move(mv, self.config.animation_ms).await
            }
            _ => tokio::task::yield_now().await,
        }
    }

    /// Play next-rank foundation moves one at a time until none is left
    ///
    /// Each iteration rescans from the waste top, then tableau tops left to
    /// right, and applies the first legal move. Only one run may be in flight
    /// per engine; an overlapping call returns an empty report at once.
    /// Capped at 1000 iterations and 500 moves.
    pub async fn run_auto_to_fixpoint(
        &self,
        animator: Option<&dyn MoveAnimator>,
    ) -> AutoPlayReport {
        if self
            .auto_running
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("auto-play already in flight");
            return AutoPlayReport::default();
        }
        let _running = RunningGuard(&self.auto_running);

        let mut report = AutoPlayReport::default();
        while report.iterations < AUTO_FIXPOINT_MAX_ITERATIONS
            && report.moves < AUTO_FIXPOINT_MAX_MOVES
        {
            let Some(mv) = self.next_foundation_move() else {
                break;
            };
            report.iterations += 1;
            if !self.move_cards(&mv) {
                break;
            }
            report.moves += 1;
            self.pause(animator, &mv).await;
        }

        debug!(
            "auto-play done: {} move(s) in {} iteration(s)",
            report.moves, report.iterations
        );
        report
    }

    pub fn find_hint(&self) -> Option<Move> {
        find_hint(&self.lock().state)
    }

    pub fn legal_moves(&self) -> Vec<Action> {
        list_legal_moves(&self.lock().state)
    }

    pub fn is_win(&self) -> bool {
        self.lock().state.is_win()
    }

    pub fn is_stuck(&self) -> bool {
        is_stuck(&self.lock().state)
    }

    /// Advance the game clock and apply any due time penalties
    ///
    /// Penalties stop once the game is won. Publishes `State` when the score
    /// changed, then always `Tick`.
    pub fn tick(&self) {
        let now = self.clock.now_ms();
        let (time, penalized) = {
            let mut live = self.lock();
            let state = &mut live.state;
            state.time.elapsed_ms = now.saturating_sub(state.time.started_at_ms);

            let mut penalized = None;
            if !state.is_win() {
                let (count, next) = elapsed_penalties(
                    state.time.next_penalty_at_ms,
                    state.settings.time_penalty_interval_ms(),
                    now,
                );
                if count > 0 {
                    state.score.total = apply_time_penalties(
                        state.score.total,
                        count,
                        state.settings.time_penalty_points,
                    );
                    state.time.next_penalty_at_ms = next;
                    debug!("time penalty x{}, score={}", count, state.score.total);
                    penalized = Some(state.clone());
                }
            }
            (state.time, penalized)
        };
        if let Some(snapshot) = penalized {
            self.emit(EngineEvent::State(snapshot));
        }
        self.emit(EngineEvent::Tick(time));
    }

    /// Run the dead-end solver on a snapshot of the live state
    pub fn analyze(&self, budget: Duration) -> SolverReport {
        let snapshot = self.state();
        klondike_solver::analyze(&snapshot, budget)
    }

    /// Whether the live position is provably lost within the configured budget
    pub fn check_no_hope(&self) -> bool {
        self.analyze(self.config.solver_budget).no_hope
    }
}
