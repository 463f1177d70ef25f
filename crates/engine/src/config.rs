//! Runtime configuration.
//!
//! Values come from environment variables and fall back to the defaults in
//! `tui_2048_types` when unset or malformed.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `TUI2048_SEED` | derived from wall-clock time |
//! | `TUI2048_ANIMATION_MS` | 80 |
//! | `TUI2048_INPUT_COOLDOWN_MS` | 100 |
//! | `TUI2048_EASING` | linear |
//! | `TUI2048_KEY_RELEASE_MS` | 90 |

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::Easing;
use crate::types::{ANIMATION_MS, INPUT_COOLDOWN_MS, KEY_RELEASE_MS};

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub seed: u32,
    pub animation_ms: u32,
    pub input_cooldown_ms: u32,
    pub easing: Easing,
    /// Always below `input_cooldown_ms`.
    pub key_release_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            animation_ms: ANIMATION_MS,
            input_cooldown_ms: INPUT_COOLDOWN_MS,
            easing: Easing::Linear,
            key_release_ms: KEY_RELEASE_MS,
        }
    }
}

impl GameConfig {
    /// Create from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), time_seed())
    }

    /// Create from an arbitrary key lookup. `fallback_seed` is used when no
    /// seed is configured.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>, fallback_seed: u32) -> Self {
        let defaults = Self::default();

        let seed = parse_or("TUI2048_SEED", lookup("TUI2048_SEED"), fallback_seed);
        let animation_ms = parse_or(
            "TUI2048_ANIMATION_MS",
            lookup("TUI2048_ANIMATION_MS"),
            defaults.animation_ms,
        );
        let input_cooldown_ms = parse_or(
            "TUI2048_INPUT_COOLDOWN_MS",
            lookup("TUI2048_INPUT_COOLDOWN_MS"),
            defaults.input_cooldown_ms,
        );

        let easing = match lookup("TUI2048_EASING") {
            None => defaults.easing,
            Some(raw) => Easing::from_str(&raw).unwrap_or_else(|| {
                log::warn!("TUI2048_EASING: unknown curve {:?}, using linear", raw);
                defaults.easing
            }),
        };

        let mut key_release_ms = parse_or(
            "TUI2048_KEY_RELEASE_MS",
            lookup("TUI2048_KEY_RELEASE_MS"),
            defaults.key_release_ms,
        );
        if input_cooldown_ms > 0 && key_release_ms >= input_cooldown_ms {
            let clamped = input_cooldown_ms - 1;
            log::warn!(
                "TUI2048_KEY_RELEASE_MS={} is not below the input cooldown; using {}",
                key_release_ms,
                clamped
            );
            key_release_ms = clamped;
        }

        Self {
            seed,
            animation_ms,
            input_cooldown_ms,
            easing,
            key_release_ms,
        }
    }
}

fn parse_or<T: FromStr + Copy>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(s) => s.trim().parse().unwrap_or_else(|_| {
            log::warn!("{}: cannot parse {:?}, using default", key, s);
            default
        }),
    }
}

/// Seed from the sub-second part of the wall clock mixed with the seconds.
pub fn time_seed() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32).wrapping_mul(2654435761) ^ now.subsec_nanos()
}
