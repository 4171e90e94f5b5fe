//! Agent domain: enemy behavior state machines and their movement.

pub mod components;
pub mod spawn;
pub mod systems;


pub use components::{AgentBehavior, AgentState, DisengageMode, CHASE_STOP_DISTANCE};

use bevy::prelude::*;

use crate::core::SimSet;

/// While set, agents neither decide nor move; the rest of the simulation
/// keeps running.
#[derive(Resource, Debug, Default)]
pub struct AiPaused(pub bool);

pub struct AgentPlugin;

impl Plugin for AgentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AiPaused>()
            .add_systems(Startup, spawn::spawn_agents)
            .add_systems(
                FixedUpdate,
                (
                    systems::aggro_on_damage,
                    systems::update_agents,
                    systems::agent_attack_decision,
                )
                    .chain()
                    .in_set(SimSet::Agents),
            )
            .add_systems(
                FixedUpdate,
                systems::apply_agent_movement.in_set(SimSet::Movement),
            );
    }
}
