//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of the game loop. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and tracks which
//! logical buttons are held, producing one [`crate::types::Buttons`] value per
//! frame. Terminals that never emit key-release events are handled with a
//! release timeout.

pub mod handler;
pub mod map;

pub use tui_2048_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
