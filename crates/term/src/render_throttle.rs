//! Frame pacing for the presentation loop.
//!
//! Animated frames always render, and so does the first settled frame after
//! an animation. A settled screen otherwise only re-renders when its
//! fingerprint changes, plus a slow refresh so a damaged terminal recovers.

/// Default refresh interval for settled frames.
pub const STATIC_REFRESH_MS: u64 = 250;

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    was_animating: bool,
    /// Set until the first frame, and again after [`RenderThrottle::invalidate`].
    dirty: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            was_animating: false,
            dirty: true,
        }
    }

    /// Render on the next call regardless of fingerprint (resize, loading).
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Decide whether to render a frame at `now_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, animating: bool) -> bool {
        let due = self.dirty
            || animating
            || self.was_animating
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms;
        if due {
            self.dirty = false;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        self.was_animating = animating;
        due
    }
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(STATIC_REFRESH_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidate_forces_next_frame() {
        let mut t = RenderThrottle::default();
        assert!(t.should_render(0, 7, false));
        assert!(!t.should_render(5, 7, false));
        t.invalidate();
        assert!(t.should_render(6, 7, false));
        assert!(!t.should_render(7, 7, false));
    }

    #[test]
    fn refresh_interval_restarts_after_change() {
        let mut t = RenderThrottle::new(100);
        assert!(t.should_render(0, 1, false));
        assert!(t.should_render(60, 2, false));
        assert!(!t.should_render(120, 2, false));
        assert!(t.should_render(160, 2, false));
    }

    #[test]
    fn end_of_animation_renders_once() {
        let mut t = RenderThrottle::default();
        assert!(t.should_render(0, 3, true));
        assert!(t.should_render(16, 3, true));
        assert!(t.should_render(32, 3, false));
        assert!(!t.should_render(48, 3, false));
    }
}
