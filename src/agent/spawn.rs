//! Agent domain: enemy spawning from loaded content.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{AttackState, Combatant, Health, Invulnerable, Stagger, Team};
use crate::content::GameContent;
use crate::movement::GameLayer;

use super::components::{AgentBehavior, AgentState};

const ENEMY_SIZE: Vec2 = Vec2::new(28.0, 44.0);

/// Spawn every configured enemy at its placement, with behavior derived from
/// the archetype's definition.
pub(crate) fn spawn_agents(mut commands: Commands, content: Res<GameContent>) {
    for def in &content.enemies {
        let (x, y) = def.spawn_at;
        let behavior = &def.behavior;

        info!("Spawning agent '{}' at ({}, {})", def.id, x, y);

        commands.spawn((
            (
                Combatant,
                Team::Enemy,
                AgentBehavior {
                    state: AgentState::Patrol,
                    patrol_left: x + behavior.patrol_left_offset,
                    patrol_right: x + behavior.patrol_right_offset,
                    patrol_dir: 1.0,
                    patrol_speed: behavior.patrol_speed,
                    chase_speed: behavior.chase_speed,
                    aggro_range: behavior.aggro_range,
                    aggro_range_y: behavior.aggro_range_y,
                    chase_range: behavior.chase_range,
                    chase_timeout: behavior.chase_timeout,
                    idle_time: behavior.idle_time,
                    disengage: behavior.disengage,
                    ..default()
                },
            ),
            (
                Health::new(def.max_health),
                Invulnerable::default(),
                Stagger::default(),
                AttackState::default(),
                content.attack_loadout(&def.loadout_id),
            ),
            Sprite {
                color: Color::srgb(0.8, 0.3, 0.3),
                custom_size: Some(ENEMY_SIZE),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
            (
                RigidBody::Dynamic,
                Collider::rectangle(ENEMY_SIZE.x, ENEMY_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Enemy, [GameLayer::Ground, GameLayer::Player]),
            ),
        ));
    }
}
