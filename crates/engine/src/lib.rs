//! Frame-driven game controller.
//!
//! Sits between the presentation loop and the pure core: owns the session and
//! the animation timeline, and enforces the single-move-in-flight rule, the
//! input cooldown and the loader gate. Time is always passed in as
//! milliseconds so the whole controller can be tested without a real clock.

pub mod clock;
pub mod config;
pub mod driver;
pub mod input_gate;
pub mod loader;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::GameConfig;
pub use driver::{GameDriver, TickOutcome};
pub use input_gate::InputGate;
pub use loader::{AssetLoader, Preloaded, StagedLoader};
