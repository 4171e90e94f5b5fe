//! Movement domain: tests for locomotion state and ability flags.

use bevy::prelude::*;

use super::components::{AbilityFlags, Facing, MovementState};
use super::resources::MovementTuning;

#[test]
fn test_facing_vectors() {
    assert_eq!(Facing::Right.as_vec(), Vec2::X);
    assert_eq!(Facing::Left.as_vec(), Vec2::NEG_X);
}

#[test]
fn test_ability_flags_default_to_walk_and_run() {
    let abilities = AbilityFlags::default();
    assert!(abilities.run);
    assert!(!abilities.dash);
    assert!(!abilities.double_jump);
}

#[test]
fn test_movement_state_starts_airborne() {
    let state = MovementState::default();
    assert!(!state.on_ground);
    assert!(!state.is_dashing);
    assert_eq!(state.air_jumps_remaining, 0);
}

#[test]
fn test_tuning_defaults_order_speeds() {
    let tuning = MovementTuning::default();
    assert!(tuning.walk_speed < tuning.run_speed);
    assert!(tuning.run_speed < tuning.dash_speed);
    assert!(tuning.coyote_time > 0.0);
}
