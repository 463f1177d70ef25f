//! Held-button tracker for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a button counts as held for `key_release_ms` after its last press or
//! auto-repeat event, unless a release event arrives first.

use crossterm::event::KeyEvent;

use crate::map::handle_key_event;
use crate::types::{Buttons, GameAction, KEY_RELEASE_MS};

const BUTTON_COUNT: usize = 5;

fn slot(action: GameAction) -> usize {
    match action {
        GameAction::MoveLeft => 0,
        GameAction::MoveRight => 1,
        GameAction::MoveUp => 2,
        GameAction::MoveDown => 3,
        GameAction::Restart => 4,
    }
}

/// Tracks which logical buttons are held.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Time of the last press/repeat per button, `None` when released.
    held_since: [Option<u64>; BUTTON_COUNT],
    key_release_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_key_release_ms(KEY_RELEASE_MS)
    }

    pub fn with_key_release_ms(key_release_ms: u32) -> Self {
        Self {
            held_since: [None; BUTTON_COUNT],
            key_release_ms,
        }
    }

    pub fn key_release_ms(&self) -> u32 {
        self.key_release_ms
    }

    /// Record a press (or terminal auto-repeat). Returns the mapped action.
    pub fn handle_key_press(&mut self, key: KeyEvent, now_ms: u64) -> Option<GameAction> {
        let action = handle_key_event(key)?;
        self.held_since[slot(action)] = Some(now_ms);
        Some(action)
    }

    pub fn handle_key_release(&mut self, key: KeyEvent) {
        if let Some(action) = handle_key_event(key) {
            self.held_since[slot(action)] = None;
        }
    }

    /// Pressed state at `now_ms`, auto-releasing stale buttons.
    pub fn buttons(&mut self, now_ms: u64) -> Buttons {
        for held in self.held_since.iter_mut() {
            if let Some(t) = *held {
                if now_ms.saturating_sub(t) > self.key_release_ms as u64 {
                    *held = None;
                }
            }
        }

        let on = |i: usize| self.held_since[i].is_some();
        Buttons {
            left: on(0),
            right: on(1),
            up: on(2),
            down: on(3),
            confirm: on(4),
        }
    }

    pub fn reset(&mut self) {
        self.held_since = [None; BUTTON_COUNT];
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
