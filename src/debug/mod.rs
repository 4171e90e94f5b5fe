//! Debug domain: keyboard controls for exercising the simulation.
//!
//! Compiled only with the `dev-tools` feature. Everything here speaks to the
//! rest of the game through the same command messages an outer input layer
//! would use.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::agent::AiPaused;
use crate::combat::{CancelAttack, Health, HealthChanged, RequestAttack};
use crate::movement::{Player, RequestDash, RequestJump, RequestMove};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (keyboard_commands, health_cheats, toggle_ai_pause));
    }
}

/// Translate keyboard state into the command messages the fixed tick
/// consumes. A/D walk (hold Shift to run), Space jumps, K dashes, J attacks
/// (W/S aim up or down), X cancels the current swing.
fn keyboard_commands(
    keys: Res<ButtonInput<KeyCode>>,
    player: Query<Entity, With<Player>>,
    mut moves: MessageWriter<RequestMove>,
    mut jumps: MessageWriter<RequestJump>,
    mut dashes: MessageWriter<RequestDash>,
    mut attacks: MessageWriter<RequestAttack>,
    mut cancels: MessageWriter<CancelAttack>,
) {
    let Ok(player) = player.single() else {
        return;
    };

    let mut axis = 0.0;
    if keys.pressed(KeyCode::KeyA) {
        axis -= 1.0;
    }
    if keys.pressed(KeyCode::KeyD) {
        axis += 1.0;
    }
    moves.write(RequestMove {
        entity: player,
        axis,
        run: keys.pressed(KeyCode::ShiftLeft),
    });

    if keys.just_pressed(KeyCode::Space) {
        jumps.write(RequestJump { entity: player });
    }
    if keys.just_pressed(KeyCode::KeyK) {
        dashes.write(RequestDash { entity: player });
    }

    if keys.just_pressed(KeyCode::KeyJ) {
        let mut direction = if keys.pressed(KeyCode::KeyA) {
            Vec2::NEG_X
        } else {
            Vec2::X
        };
        if keys.pressed(KeyCode::KeyW) {
            direction = Vec2::Y;
        } else if keys.pressed(KeyCode::KeyS) {
            direction = Vec2::NEG_Y;
        }
        attacks.write(RequestAttack {
            attacker: player,
            direction,
        });
    }
    if keys.just_pressed(KeyCode::KeyX) {
        cancels.write(CancelAttack { attacker: player });
    }
}

/// H heals the player a little; R revives them at full health.
fn health_cheats(
    keys: Res<ButtonInput<KeyCode>>,
    mut player: Query<(Entity, &mut Health), With<Player>>,
    mut health_events: MessageWriter<HealthChanged>,
) {
    let Ok((entity, mut health)) = player.single_mut() else {
        return;
    };

    let mut changed = false;
    if keys.just_pressed(KeyCode::KeyH) {
        changed = health.heal(25.0) > 0.0;
    }
    if keys.just_pressed(KeyCode::KeyR) && !health.is_alive() {
        let max = health.max;
        health.revive(max);
        changed = true;
        info!("Player revived");
    }

    if changed {
        health_events.write(HealthChanged {
            entity,
            current: health.current,
            max: health.max,
        });
    }
}

fn toggle_ai_pause(keys: Res<ButtonInput<KeyCode>>, mut paused: ResMut<AiPaused>) {
    if keys.just_pressed(KeyCode::KeyP) {
        paused.0 = !paused.0;
        info!("Agent AI paused: {}", paused.0);
    }
}
