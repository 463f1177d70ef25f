//! Per-frame game driver.
//!
//! The presentation loop calls [`GameDriver::tick`] once per frame with the
//! current time and the pressed buttons. The driver decides whether this frame
//! may act on input at all:
//!
//! 1. nothing happens until the asset loader is complete;
//! 2. while a move animation is in flight, input is ignored;
//! 3. input is debounced by the [`InputGate`] cooldown;
//! 4. once the game is lost, only confirm (restart) is accepted.
//!
//! A changed move starts the animation timeline, which keeps the gate closed
//! until it completes. At most one move is ever in flight.

use crate::config::GameConfig;
use crate::core::{AnimationFrame, AnimationTimeline, GameSnapshot, Session};
use crate::input_gate::InputGate;
use crate::loader::{AssetLoader, Preloaded};
use crate::types::{Buttons, Direction};

/// What one tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Loader still busy; the game is not running yet.
    Loading { progress: f32 },
    /// A move animation is in flight; input was ignored.
    Animating,
    /// Nothing accepted this frame.
    Idle,
    /// A direction was accepted. `changed == false` means the board could not
    /// slide that way; the cooldown still applies.
    Moved {
        direction: Direction,
        changed: bool,
        score_delta: u32,
    },
    /// A new game was started after a loss.
    NewGame,
}

pub struct GameDriver<L: AssetLoader = Preloaded> {
    session: Session,
    timeline: AnimationTimeline,
    gate: InputGate,
    loader: L,
    animation_ms: u32,
}

impl GameDriver<Preloaded> {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_loader(config, Preloaded)
    }
}

impl<L: AssetLoader> GameDriver<L> {
    pub fn with_loader(config: &GameConfig, loader: L) -> Self {
        let session = Session::new(config.seed);
        log::info!(
            "game {} started (seed {}, animation {}ms, cooldown {}ms)",
            session.game_id(),
            config.seed,
            config.animation_ms,
            config.input_cooldown_ms
        );
        Self {
            session,
            timeline: AnimationTimeline::new(config.easing),
            gate: InputGate::new(config.input_cooldown_ms),
            loader,
            animation_ms: config.animation_ms,
        }
    }

    /// Replace the session (e.g. a prepared board). Drops any animation.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self.timeline.clear();
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.session.snapshot()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.session.snapshot_into(out);
    }

    pub fn is_loading(&self) -> bool {
        !self.loader.is_complete()
    }

    /// Whether a move is in flight.
    pub fn is_animating(&self) -> bool {
        self.timeline.is_active()
    }

    /// Animation sample for the renderer, `None` when nothing is in flight.
    pub fn frame(&self, now_ms: u64) -> Option<AnimationFrame> {
        if !self.timeline.is_active() {
            return None;
        }
        Some(self.timeline.sample(now_ms))
    }

    /// Allocation-free form of [`GameDriver::frame`]. Returns false (and
    /// leaves `out` empty) when nothing is in flight.
    pub fn frame_into(&self, now_ms: u64, out: &mut AnimationFrame) -> bool {
        self.timeline.sample_into(now_ms, out);
        self.timeline.is_active()
    }

    /// Start a new game immediately, keeping the best score.
    pub fn new_game(&mut self) {
        self.timeline.clear();
        self.session.new_game();
        log::info!(
            "game {} started (best {})",
            self.session.game_id(),
            self.session.best_score()
        );
    }

    /// Advance one frame.
    pub fn tick(&mut self, now_ms: u64, buttons: &Buttons) -> TickOutcome {
        if !self.loader.is_complete() {
            self.loader.poll();
            return TickOutcome::Loading {
                progress: self.loader.progress(),
            };
        }

        if self.timeline.is_active() {
            if !self.timeline.is_complete(now_ms) {
                return TickOutcome::Animating;
            }
            self.timeline.clear();
        }

        if !self.gate.is_open(now_ms) {
            return TickOutcome::Idle;
        }

        if self.session.is_terminal().lost {
            if buttons.confirm {
                self.gate.mark(now_ms);
                self.new_game();
                return TickOutcome::NewGame;
            }
            return TickOutcome::Idle;
        }

        let Some(direction) = buttons.direction() else {
            return TickOutcome::Idle;
        };

        self.gate.mark(now_ms);
        let turn = self.session.step(direction);
        let outcome = TickOutcome::Moved {
            direction,
            changed: turn.result.changed,
            score_delta: turn.result.score_delta,
        };

        if turn.result.changed {
            log::debug!(
                "move {} +{} (score {}, {} tiles moved, {} merges)",
                direction.as_str(),
                turn.result.score_delta,
                self.session.score(),
                turn.result.displacements.len(),
                turn.result.merges.iter().filter(|m| !m.is_newly_spawned).count()
            );
            self.timeline.begin(
                &turn.result.displacements,
                &turn.result.merges,
                now_ms,
                self.animation_ms,
            );
        }
        if turn.newly_won {
            log::info!(
                "game {} reached 2048 after {} moves",
                self.session.game_id(),
                self.session.moves()
            );
        }
        if turn.newly_lost {
            log::info!(
                "game {} lost with score {} (best {})",
                self.session.game_id(),
                self.session.score(),
                self.session.best_score()
            );
        }

        outcome
    }
}
