//! Core domain: shared simulation clock with hit-stop time scaling.

use bevy::prelude::*;
use bevy::time::{Real, Virtual};

/// Single owner of the simulation time scale. Any system may request a
/// hit-stop; when requests overlap the longest remaining duration wins, and
/// the slowest requested rate applies while any request is live.
///
/// The countdown ticks on real (wall-clock) time so a hit-stop expires even
/// while virtual time is scaled toward zero.
#[derive(Resource, Debug)]
pub struct SimulationClock {
    hitstop_remaining: f32,
    hitstop_rate: f32,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            hitstop_remaining: 0.0,
            hitstop_rate: 1.0,
        }
    }
}

impl SimulationClock {
    /// Request a slowdown to `rate` for `duration` real seconds.
    pub fn request_hitstop(&mut self, duration: f32, rate: f32) {
        if duration <= 0.0 {
            return;
        }
        self.hitstop_remaining = self.hitstop_remaining.max(duration);
        // Rate was reset to 1.0 when the last window closed, so min() also
        // handles a fresh request
        self.hitstop_rate = self.hitstop_rate.min(rate.clamp(0.0, 1.0));
    }

    pub fn is_slowed(&self) -> bool {
        self.hitstop_remaining > 0.0
    }

    /// Advance the countdown by a real-time delta and return the time scale
    /// to apply for the next frame.
    pub fn advance(&mut self, real_dt: f32) -> f32 {
        if self.hitstop_remaining > 0.0 {
            self.hitstop_remaining = (self.hitstop_remaining - real_dt).max(0.0);
            if self.hitstop_remaining > 0.0 {
                return self.hitstop_rate;
            }
            self.hitstop_rate = 1.0;
        }
        1.0
    }
}

/// Sole writer of the virtual time scale.
pub(crate) fn drive_time_scale(
    real_time: Res<Time<Real>>,
    mut virtual_time: ResMut<Time<Virtual>>,
    mut clock: ResMut<SimulationClock>,
) {
    let scale = clock.advance(real_time.delta_secs());
    if virtual_time.relative_speed() != scale {
        virtual_time.set_relative_speed(scale);
    }
}
