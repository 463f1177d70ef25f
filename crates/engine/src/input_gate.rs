//! Input debounce gate.
//!
//! A held button would otherwise fire a move on every frame. The gate lets at
//! most one input through per cooldown window, measured from the last input
//! that was let through.

/// Minimum-interval gate for player input.
#[derive(Debug, Clone)]
pub struct InputGate {
    cooldown_ms: u32,
    last_input_ms: Option<u64>,
}

impl InputGate {
    pub fn new(cooldown_ms: u32) -> Self {
        Self {
            cooldown_ms,
            last_input_ms: None,
        }
    }

    /// Whether an input at `now_ms` would be accepted.
    pub fn is_open(&self, now_ms: u64) -> bool {
        match self.last_input_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > self.cooldown_ms as u64,
        }
    }

    /// Record an accepted input at `now_ms`; closes the gate for one cooldown.
    pub fn mark(&mut self, now_ms: u64) {
        self.last_input_ms = Some(now_ms);
    }
}
