//! Core domain: simulation ordering, cooldown timers, and the shared clock.

mod clock;
mod cooldown;
#[cfg(test)]
mod tests;

pub use clock::SimulationClock;
pub use cooldown::CooldownTimer;

use bevy::prelude::*;

use crate::core::clock::drive_time_scale;

/// Fixed per-tick ordering of the simulation. Agents decide first, then
/// attacks start and advance, then damage lands, then reactions (knockback,
/// deaths, combo breaks). A damage event therefore forces an agent into Chase
/// on the tick after the hit, never the same tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimSet {
    Agents,
    Attacks,
    Damage,
    Reactions,
    Movement,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .configure_sets(
                FixedUpdate,
                (
                    SimSet::Agents,
                    SimSet::Attacks,
                    SimSet::Damage,
                    SimSet::Reactions,
                    SimSet::Movement,
                )
                    .chain(),
            )
            .add_systems(Update, drive_time_scale);
    }
}
