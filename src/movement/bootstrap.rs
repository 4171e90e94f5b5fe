//! Movement domain: world and player bootstrap from loaded content.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{AttackState, Combatant, Health, Invulnerable, Stagger, Team};
use crate::content::GameContent;

use super::components::{AbilityFlags, GameLayer, Ground, MovementState, Player};
use super::resources::MovementTuning;

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Spawn the arena floor and the player from loaded content. Runs once at
/// startup, after the content pass.
pub(crate) fn bootstrap_world(
    mut commands: Commands,
    content: Res<GameContent>,
    mut tuning: ResMut<MovementTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Floor
    commands.spawn((
        Ground,
        Sprite {
            color: Color::srgb(0.3, 0.3, 0.35),
            custom_size: Some(Vec2::new(2000.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -60.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(2000.0, 40.0),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Enemy]),
    ));

    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let player_def = &content.tuning.player;
    tuning.walk_speed = player_def.walk_speed;
    tuning.run_speed = player_def.run_speed;
    tuning.jump_speed = player_def.jump_speed;
    tuning.dash_speed = player_def.dash_speed;

    info!(
        "Spawning player: loadout={}, health={}",
        player_def.loadout_id, player_def.max_health
    );

    commands.spawn((
        (
            Player,
            Combatant,
            Team::Player,
            MovementState::default(),
            AbilityFlags {
                run: player_def.abilities.run,
                dash: player_def.abilities.dash,
                double_jump: player_def.abilities.double_jump,
            },
        ),
        (
            Health::new(player_def.max_health)
                .with_regen(player_def.regen_rate, player_def.regen_delay),
            Invulnerable::default(),
            Stagger::default(),
            AttackState::default(),
            content.combo_state(&player_def.loadout_id),
            content.attack_loadout(&player_def.loadout_id),
        ),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(player_def.spawn_at.0, player_def.spawn_at.1, 0.0),
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Enemy]),
        ),
    ));
}
