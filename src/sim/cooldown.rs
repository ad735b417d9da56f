//! Countdown gate used for firing rates, animation periods, and
//! column spawning.
//!
//! A cooldown is "active" (blocking) from `start()` until its duration
//! has elapsed. A freshly built cooldown is inactive, so the first
//! gate check passes immediately.

use serde::{Deserialize, Serialize};

/// An elapsed-time accumulator checked against a fixed duration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoolDown {
    /// Total time (seconds) each cooldown lasts
    duration: f32,
    /// Time accumulated since the last start
    elapsed: f32,
    /// Whether the cooldown is currently blocking
    active: bool,
}

impl CoolDown {
    /// Create an inactive cooldown with the given duration in seconds
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            elapsed: 0.0,
            active: false,
        }
    }

    /// Kick off a cooldown period
    pub fn start(&mut self) {
        self.active = true;
        self.elapsed = 0.0;
    }

    /// Advance the cooldown by `dt` seconds
    ///
    /// Once the accumulated time reaches the duration the cooldown
    /// deactivates. Elapsed time is not clamped, so overshoot from a
    /// large final dt is visible in [`CoolDown::elapsed`].
    pub fn advance(&mut self, dt: f32) {
        if self.active {
            self.elapsed += dt;
            if self.elapsed >= self.duration {
                self.active = false;
            }
        }
    }

    /// Whether the cooldown is still blocking
    #[inline]
    pub fn active(&self) -> bool {
        self.active
    }

    /// Time accumulated since the last start
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Configured duration in seconds
    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }
}
