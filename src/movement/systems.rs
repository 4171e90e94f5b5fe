//! Movement domain: ground detection and locomotion systems.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::Stagger;

use super::components::{AbilityFlags, Facing, GameLayer, MovementState};
use super::events::{RequestDash, RequestJump, RequestMove};
use super::resources::MovementTuning;

pub(crate) fn update_movement_timers(
    time: Res<Time>,
    mut query: Query<&mut MovementState>,
) {
    let dt = time.delta_secs();

    for mut state in &mut query {
        if !state.on_ground {
            state.coyote_timer += dt;
        }
        if state.is_dashing {
            state.dash_timer -= dt;
            if state.dash_timer <= 0.0 {
                state.is_dashing = false;
            }
        }
        if state.dash_cooldown_timer > 0.0 {
            state.dash_cooldown_timer -= dt;
        }
    }
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut MovementState)>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        // Cast a short ray downward from the feet
        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(ray_origin, Dir2::NEG_Y, 4.0, true, &ground_filter);

        state.on_ground = hit.is_some();

        if state.on_ground && !was_on_ground {
            state.coyote_timer = 0.0;
            state.air_jumps_remaining = 1;
        }
    }
}

pub(crate) fn apply_move(
    tuning: Res<MovementTuning>,
    mut requests: MessageReader<RequestMove>,
    mut query: Query<(
        &mut MovementState,
        &AbilityFlags,
        Option<&Stagger>,
        &mut LinearVelocity,
    )>,
) {
    for request in requests.read() {
        let Ok((mut state, abilities, stagger, mut velocity)) = query.get_mut(request.entity)
        else {
            continue;
        };
        if state.is_dashing || stagger.is_some_and(Stagger::is_staggered) {
            continue;
        }

        let axis = request.axis.clamp(-1.0, 1.0);
        let speed = if request.run && abilities.run {
            tuning.run_speed
        } else {
            tuning.walk_speed
        };
        velocity.x = axis * speed;

        if axis > 0.1 {
            state.facing = Facing::Right;
        } else if axis < -0.1 {
            state.facing = Facing::Left;
        }
    }
}

pub(crate) fn apply_jump(
    tuning: Res<MovementTuning>,
    mut requests: MessageReader<RequestJump>,
    mut query: Query<(&mut MovementState, &AbilityFlags, &mut LinearVelocity)>,
) {
    for request in requests.read() {
        let Ok((mut state, abilities, mut velocity)) = query.get_mut(request.entity) else {
            continue;
        };
        if state.is_dashing {
            continue;
        }

        let can_ground_jump = state.on_ground || state.coyote_timer < tuning.coyote_time;
        let can_air_jump = abilities.double_jump && state.air_jumps_remaining > 0;

        if can_ground_jump {
            velocity.y = tuning.jump_speed;
            // Consume coyote grace
            state.coyote_timer = tuning.coyote_time;
        } else if can_air_jump {
            velocity.y = tuning.jump_speed;
            state.air_jumps_remaining -= 1;
        }
    }
}

pub(crate) fn apply_dash(
    tuning: Res<MovementTuning>,
    mut requests: MessageReader<RequestDash>,
    mut query: Query<(&mut MovementState, &AbilityFlags, &mut LinearVelocity)>,
) {
    for request in requests.read() {
        let Ok((mut state, abilities, mut velocity)) = query.get_mut(request.entity) else {
            continue;
        };
        if !abilities.dash || state.is_dashing || state.dash_cooldown_timer > 0.0 {
            continue;
        }

        state.is_dashing = true;
        state.dash_timer = tuning.dash_time;
        state.dash_cooldown_timer = tuning.dash_cooldown;
        state.dash_direction = match state.facing {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        };
        velocity.x = state.dash_direction * tuning.dash_speed;
        // Lock vertical movement during the dash
        velocity.y = 0.0;
    }
}

/// Hold dash velocity for the dash's whole duration.
pub(crate) fn sustain_dash(
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity)>,
) {
    for (state, mut velocity) in &mut query {
        if state.is_dashing {
            velocity.x = state.dash_direction * tuning.dash_speed;
            velocity.y = 0.0;
        }
    }
}
