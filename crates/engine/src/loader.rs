//! Asset loader seam.
//!
//! The driver stays idle until its loader reports completion; the view shows a
//! progress bar in the meantime.

/// Anything the game has to wait for before the first frame of play.
pub trait AssetLoader {
    fn is_complete(&self) -> bool;

    /// Fraction done in [0, 1].
    fn progress(&self) -> f32;

    /// Called once per frame while incomplete.
    fn poll(&mut self) {}
}

/// Nothing to load.
#[derive(Debug, Clone, Copy, Default)]
pub struct Preloaded;

impl AssetLoader for Preloaded {
    fn is_complete(&self) -> bool {
        true
    }

    fn progress(&self) -> f32 {
        1.0
    }
}

/// Loader made of a fixed number of steps, one finished per poll.
#[derive(Debug, Clone)]
pub struct StagedLoader {
    total: u32,
    done: u32,
}

impl StagedLoader {
    pub fn new(total: u32) -> Self {
        Self { total, done: 0 }
    }
}

impl AssetLoader for StagedLoader {
    fn is_complete(&self) -> bool {
        self.done >= self.total
    }

    fn progress(&self) -> f32 {
        if self.total == 0 {
            return 1.0;
        }
        self.done as f32 / self.total as f32
    }

    fn poll(&mut self) {
        if self.done < self.total {
            self.done += 1;
        }
    }
}
