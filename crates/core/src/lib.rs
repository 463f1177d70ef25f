//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the 2048 rules, the session state and the move
//! animation timeline. It has **no dependencies** on the terminal, input
//! devices or clocks, which makes it:
//!
//! - **Deterministic**: the same seed and moves produce the same game
//! - **Testable**: every rule is covered by plain unit tests
//! - **Portable**: runs in the terminal, headless, or behind any renderer
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid and the single slide/merge line routine
//! - [`game_state`]: the [`Session`] (score, best score, win/loss flags)
//! - [`rng`]: seeded tile spawning (2 at 90%, 4 at 10%)
//! - [`animation`]: replayable slide/pulse/grow-in timeline
//! - [`snapshot`]: renderer-facing copy of the session
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{Board, Session};
//! use tui_2048_types::Direction;
//!
//! let board = Board::from_rows([[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]]);
//! let mut session = Session::with_board(board, 7);
//!
//! let turn = session.step(Direction::Left);
//! assert!(turn.result.changed);
//! assert_eq!(turn.result.score_delta, 12);
//! assert_eq!(session.board().rows()[0][..2], [4, 8]);
//! ```

pub mod animation;
pub mod board;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use animation::{AnimationFrame, AnimationTimeline, Easing, EffectKind, EffectSample, SlideSample};
pub use board::{slide_line, Board, Displacements, MergeEvents, MoveResult};
pub use game_state::{Session, Terminal, Turn};
pub use rng::{SimpleRng, TileSpawner};
pub use snapshot::GameSnapshot;
