use std::hash::{Hash, Hasher};

use crate::types::{GameStatus, GRID_SIZE};

/// Stable 64-bit FNV-1a hasher for snapshot fingerprints.
///
/// `DefaultHasher` output is not guaranteed stable across Rust versions.
#[derive(Debug, Clone)]
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}

/// Plain copy of everything a renderer or observer needs from a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub board: [[u32; GRID_SIZE]; GRID_SIZE],
    pub score: u32,
    pub best_score: u32,
    pub won: bool,
    pub lost: bool,
    pub game_id: u32,
    pub moves: u32,
    pub max_tile: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.lost
    }

    pub fn status(&self) -> GameStatus {
        if self.lost {
            GameStatus::Lost
        } else if self.won {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    /// Stable fingerprint of the visible state (used to skip redundant redraws).
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1aHasher::new();
        self.hash(&mut h);
        h.finish()
    }
}
