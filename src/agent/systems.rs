//! Agent domain: fixed-tick decision and movement systems.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{AttackLoadout, AttackState, DamageTaken, Health, RequestAttack, Stagger};
use crate::movement::Player;

use super::components::{AgentBehavior, AgentState};
use super::AiPaused;

/// Run every agent's state machine against the current target position.
/// A dead target reads as no target, so chases wind down on their own.
pub fn update_agents(
    paused: Res<AiPaused>,
    time: Res<Time>,
    player: Query<(&Transform, &Health), With<Player>>,
    mut agents: Query<(&Transform, &mut AgentBehavior)>,
) {
    if paused.0 {
        return;
    }
    let target = player
        .single()
        .ok()
        .filter(|(_, health)| health.is_alive())
        .map(|(transform, _)| transform.translation.truncate());

    let dt = time.delta_secs();
    for (transform, mut behavior) in &mut agents {
        behavior.tick(transform.translation.truncate(), target, dt);
    }
}

/// Drive physics velocity from the decision made in [`update_agents`].
/// Vertical velocity is left to gravity, and a staggered agent keeps its
/// knockback velocity instead.
pub fn apply_agent_movement(
    paused: Res<AiPaused>,
    mut agents: Query<(&AgentBehavior, Option<&Stagger>, &mut LinearVelocity)>,
) {
    for (behavior, stagger, mut velocity) in &mut agents {
        if stagger.is_some_and(Stagger::is_staggered) {
            continue;
        }
        if paused.0 {
            velocity.x = 0.0;
            continue;
        }
        velocity.x = behavior.desired_velocity_x;
    }
}

/// Getting hit provokes a chase even when the attacker was never detected.
pub fn aggro_on_damage(
    paused: Res<AiPaused>,
    mut events: MessageReader<DamageTaken>,
    mut agents: Query<&mut AgentBehavior>,
) {
    for event in events.read() {
        if paused.0 {
            continue;
        }
        if let Ok(mut behavior) = agents.get_mut(event.entity) {
            behavior.on_damaged();
        }
    }
}

/// Chasing agents swing once the target is inside their first attack's reach.
/// The attack systems apply their own cooldown gating, so this only needs to
/// ask.
pub fn agent_attack_decision(
    paused: Res<AiPaused>,
    player: Query<(&Transform, &Health), With<Player>>,
    agents: Query<(Entity, &Transform, &AgentBehavior, &AttackState, &AttackLoadout)>,
    mut requests: MessageWriter<RequestAttack>,
) {
    if paused.0 {
        return;
    }
    let Some(target) = player
        .single()
        .ok()
        .filter(|(_, health)| health.is_alive())
        .map(|(transform, _)| transform.translation.truncate())
    else {
        return;
    };

    for (entity, transform, behavior, state, loadout) in &agents {
        if behavior.state != AgentState::Chase || state.is_attacking() || !state.cooldown.is_ready()
        {
            continue;
        }
        let pos = transform.translation.truncate();
        let reach = loadout
            .variations
            .first()
            .map(|definition| definition.range)
            .unwrap_or(0.0);
        if pos.distance(target) <= reach {
            requests.write(RequestAttack {
                attacker: entity,
                direction: target - pos,
            });
        }
    }
}
