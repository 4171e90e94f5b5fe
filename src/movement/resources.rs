//! Movement domain: locomotion tuning.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub jump_speed: f32,
    pub dash_speed: f32,
    pub dash_time: f32,
    pub dash_cooldown: f32,
    pub coyote_time: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 120.0,
            run_speed: 200.0,
            jump_speed: 320.0,
            dash_speed: 400.0,
            dash_time: 0.15,
            dash_cooldown: 0.8,
            coyote_time: 0.1,
        }
    }
}
