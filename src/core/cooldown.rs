//! Core domain: generic countdown timer used by every timed behavior.

/// Countdown in seconds, advanced once per simulation tick.
///
/// Ready when it reaches zero; negative remainders clamp to zero so a late
/// tick never leaves the timer stuck below ready.
#[derive(Debug, Clone, Copy, Default)]
pub struct CooldownTimer {
    remaining: f32,
}

impl CooldownTimer {
    pub fn new(remaining: f32) -> Self {
        Self {
            remaining: remaining.max(0.0),
        }
    }

    /// Start (or restart) the countdown.
    pub fn start(&mut self, duration: f32) {
        self.remaining = duration.max(0.0);
    }

    pub fn tick(&mut self, dt: f32) {
        if self.remaining > 0.0 {
            self.remaining = (self.remaining - dt).max(0.0);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.remaining <= 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}
