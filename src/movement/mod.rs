//! Movement domain: physics layers, locomotion, and world bootstrap.

pub mod bootstrap;
pub mod components;
pub mod events;
pub mod resources;
pub mod systems;

#[cfg(test)]
mod tests;

pub use components::{AbilityFlags, Facing, GameLayer, Ground, MovementState, Player};
pub use events::{RequestDash, RequestJump, RequestMove};
pub use resources::MovementTuning;

use bevy::prelude::*;

use crate::core::SimSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .add_message::<RequestMove>()
            .add_message::<RequestJump>()
            .add_message::<RequestDash>()
            .add_systems(Startup, bootstrap::bootstrap_world)
            .add_systems(
                FixedUpdate,
                (
                    systems::detect_ground,
                    systems::update_movement_timers,
                    systems::apply_move,
                    systems::apply_jump,
                    systems::apply_dash,
                    systems::sustain_dash,
                )
                    .chain()
                    .in_set(SimSet::Movement),
            );
    }
}
