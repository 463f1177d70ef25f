//! RNG module - seeded tile spawning
//!
//! New tiles land on a uniformly chosen empty cell and are a 2 (90%) or a
//! 4 (10%). The random source is a small seeded LCG owned by the session, so
//! the same seed and the same moves always produce the same game.

use crate::board::Board;
use crate::types::{Pos, SPAWN_FOUR_PERCENT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits of the state; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// True with probability `percent / 100`.
    pub fn chance_percent(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Places random tiles on a board.
#[derive(Debug, Clone)]
pub struct TileSpawner {
    rng: SimpleRng,
}

impl TileSpawner {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Value of the next spawned tile: 2, or 4 with `SPAWN_FOUR_PERCENT` chance.
    pub fn next_value(&mut self) -> u32 {
        if self.rng.chance_percent(SPAWN_FOUR_PERCENT) {
            4
        } else {
            2
        }
    }

    /// Put a random tile on a random empty cell.
    ///
    /// Returns the chosen cell and value, or `None` (board untouched) when the
    /// board is full.
    pub fn spawn(&mut self, board: &mut Board) -> Option<(Pos, u32)> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let pos = empty[self.rng.next_range(empty.len() as u32) as usize];
        let value = self.next_value();
        board.set(pos, value);
        Some((pos, value))
    }

    /// Current RNG state (reseeding with it continues the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for TileSpawner {
    fn default() -> Self {
        Self::new(1)
    }
}
