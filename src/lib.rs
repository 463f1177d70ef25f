//! TUI 2048 (workspace facade crate).
//!
//! The game is split into dedicated crates under `crates/`; this package
//! re-exports them as `tui_2048::{core,engine,input,term,types}` and hosts
//! the pieces shared by the binary and the integration tests: the command
//! line, logging setup and the headless replay runner.

pub mod cli;
pub mod logging;
pub mod replay;

pub use tui_2048_core as core;
pub use tui_2048_engine as engine;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
