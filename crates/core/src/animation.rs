//! Move animation timeline
//!
//! After a changed move the board is already in its final state. The timeline
//! replays the move for presentation: every displaced tile slides from its
//! source cell to its destination, merge results pulse, and a freshly spawned
//! tile grows in. Sampling is a pure function of the timestamp handed in, so
//! tests drive it with plain numbers instead of a real clock.

use arrayvec::ArrayVec;

use crate::board::{Displacements, MergeEvents};
use crate::types::{Displacement, MergeEvent, Pos, CELL_COUNT, EFFECT_START, PULSE_AMPLITUDE};

/// Interpolation curve for tile slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseOutQuad,
    EaseOutCubic,
}

impl Easing {
    /// Map linear progress `t` in [0, 1] onto the curve.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }

    /// Parse `linear`, `ease-out-quad` or `ease-out-cubic` (case-insensitive,
    /// `_` accepted for `-`).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "linear" => Some(Easing::Linear),
            "ease-out-quad" | "quad" => Some(Easing::EaseOutQuad),
            "ease-out-cubic" | "cubic" => Some(Easing::EaseOutCubic),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOutQuad => "ease-out-quad",
            Easing::EaseOutCubic => "ease-out-cubic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    /// Merge result: brief scale bump.
    Pulse,
    /// Newly spawned tile: grows from nothing.
    GrowIn,
}

/// A sliding tile at one instant. `row`/`col` are fractional cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideSample {
    pub from: Pos,
    pub to: Pos,
    pub value: u32,
    pub row: f32,
    pub col: f32,
}

/// A scale effect at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSample {
    pub cell: Pos,
    pub value: u32,
    pub kind: EffectKind,
    /// 1.0 is the normal tile size.
    pub scale: f32,
    /// False until the effect window opens; the tile should not be drawn yet.
    pub started: bool,
}

/// Presentation of the in-flight move at one instant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnimationFrame {
    /// Linear elapsed fraction in [0, 1].
    pub progress: f32,
    pub slides: ArrayVec<SlideSample, CELL_COUNT>,
    pub effects: ArrayVec<EffectSample, CELL_COUNT>,
}

impl AnimationFrame {
    /// Number of slides ending in `cell`.
    pub fn arrivals(&self, cell: Pos) -> usize {
        self.slides.iter().filter(|s| s.to == cell).count()
    }

    pub fn effect_at(&self, cell: Pos) -> Option<&EffectSample> {
        self.effects.iter().find(|e| e.cell == cell)
    }
}

/// Scale of a merge pulse at linear progress `p`.
pub fn pulse_scale(p: f32) -> f32 {
    match effect_progress(p) {
        Some(t) => 1.0 + PULSE_AMPLITUDE * (t * std::f32::consts::PI).sin(),
        None => 1.0,
    }
}

/// Scale of a spawn grow-in at linear progress `p`.
pub fn grow_scale(p: f32) -> f32 {
    effect_progress(p).unwrap_or(0.0)
}

/// Progress through the effect window, `None` before it opens.
fn effect_progress(p: f32) -> Option<f32> {
    if p <= EFFECT_START {
        return None;
    }
    Some(((p - EFFECT_START) / (1.0 - EFFECT_START)).clamp(0.0, 1.0))
}

/// The single in-flight move animation.
#[derive(Debug, Clone, Default)]
pub struct AnimationTimeline {
    displacements: Displacements,
    merges: MergeEvents,
    start_ms: u64,
    duration_ms: u32,
    easing: Easing,
    active: bool,
}

impl AnimationTimeline {
    pub fn new(easing: Easing) -> Self {
        Self {
            easing,
            ..Self::default()
        }
    }

    /// Start replaying a move. Replaces anything still in flight.
    pub fn begin(
        &mut self,
        displacements: &[Displacement],
        merges: &[MergeEvent],
        now_ms: u64,
        duration_ms: u32,
    ) {
        self.displacements.clear();
        self.displacements
            .extend(displacements.iter().copied().take(CELL_COUNT));
        self.merges.clear();
        self.merges.extend(merges.iter().copied().take(CELL_COUNT));
        self.start_ms = now_ms;
        self.duration_ms = duration_ms;
        self.active = true;
    }

    /// Whether a move is in flight (begun and not yet cleared).
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Elapsed fraction, clamped to [0, 1]. An idle timeline reports 1.
    pub fn progress(&self, now_ms: u64) -> f32 {
        if !self.active || self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms) as f32;
        (elapsed / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, now_ms: u64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Drop the lists and accept the next move.
    pub fn clear(&mut self) {
        self.displacements.clear();
        self.merges.clear();
        self.active = false;
    }

    /// Tile positions and scales at `now_ms`.
    pub fn sample(&self, now_ms: u64) -> AnimationFrame {
        let mut frame = AnimationFrame::default();
        self.sample_into(now_ms, &mut frame);
        frame
    }

    /// Allocation-free form of [`AnimationTimeline::sample`].
    pub fn sample_into(&self, now_ms: u64, out: &mut AnimationFrame) {
        out.slides.clear();
        out.effects.clear();

        let p = self.progress(now_ms);
        out.progress = p;
        if !self.active {
            return;
        }

        let eased = self.easing.apply(p);
        for d in &self.displacements {
            let lerp = |a: u8, b: u8| a as f32 + (b as f32 - a as f32) * eased;
            out.slides.push(SlideSample {
                from: d.from,
                to: d.to,
                value: d.value,
                row: lerp(d.from.row, d.to.row),
                col: lerp(d.from.col, d.to.col),
            });
        }

        let started = p > EFFECT_START;
        for m in &self.merges {
            let (kind, scale) = if m.is_newly_spawned {
                (EffectKind::GrowIn, grow_scale(p))
            } else {
                (EffectKind::Pulse, pulse_scale(p))
            };
            out.effects.push(EffectSample {
                cell: m.cell,
                value: m.value,
                kind,
                scale,
                started,
            });
        }
    }
}
