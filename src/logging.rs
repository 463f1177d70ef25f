//! Log setup.
//!
//! The interactive game owns the terminal, so records can only go to a file.
//! Without `TUI2048_LOG_PATH` logging stays off. `RUST_LOG` filters as usual
//! and defaults to `info`.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

pub const LOG_PATH_ENV: &str = "TUI2048_LOG_PATH";

/// Log file named by the environment, if any.
pub fn log_path_from_env() -> Option<String> {
    std::env::var(LOG_PATH_ENV)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Install the global logger appending to `path`. Returns false when no path
/// is given and logging stays disabled.
pub fn init(path: Option<&str>) -> Result<bool> {
    let Some(path) = path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {path}"))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")?;
    Ok(true)
}
