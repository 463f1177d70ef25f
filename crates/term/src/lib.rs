//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws a snapshot and an
//! optional animation sample into a framebuffer of styled cells, and the
//! renderer flushes that framebuffer to the terminal as a diff.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure so views can be asserted cell by cell
//! - Interpolate sliding tiles between cells for smooth moves

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{text_color, tile_color, GameView, Viewport};
pub use render_throttle::{RenderThrottle, STATIC_REFRESH_MS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
