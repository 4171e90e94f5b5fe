//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn as_vec(&self) -> Vec2 {
        match self {
            Facing::Right => Vec2::X,
            Facing::Left => Vec2::NEG_X,
        }
    }
}

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
    pub facing: Facing,
    pub coyote_timer: f32,
    pub air_jumps_remaining: u8,
    pub dash_timer: f32,
    pub dash_cooldown_timer: f32,
    pub is_dashing: bool,
    pub dash_direction: f32,
}

/// Which locomotion abilities this entity has unlocked. Systems for locked
/// abilities ignore their commands entirely.
#[derive(Component, Debug, Clone, Copy)]
pub struct AbilityFlags {
    pub run: bool,
    pub dash: bool,
    pub double_jump: bool,
}

impl Default for AbilityFlags {
    fn default() -> Self {
        Self {
            run: true,
            dash: false,
            double_jump: false,
        }
    }
}
