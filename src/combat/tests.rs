//! Combat domain: tests for health, damage gating, combos, and attack math.

use bevy::prelude::*;

use super::attacks::{
    cone_ray_directions, knockback_impulse, scaled_damage, AttackDefinition, AttackLoadout,
    HitboxShape, CONE_RAY_COUNT,
};
use super::components::{
    resolve_damage, AttackInstance, AttackState, ComboState, DamageOutcome, Health, HitRegistry,
    Invulnerable, Stagger,
};

// -----------------------------------------------------------------------------
// Health tests
// -----------------------------------------------------------------------------

#[test]
fn test_health_clamps_to_bounds() {
    let mut health = Health::new(100.0);
    assert_eq!(health.take_damage(250.0), DamageOutcome::Died);
    assert_eq!(health.current, 0.0);

    health.revive(500.0);
    assert_eq!(health.current, 100.0);
    assert!(health.is_alive());

    health.heal(50.0);
    assert_eq!(health.current, 100.0);
}

#[test]
fn test_death_fires_exactly_once() {
    let mut health = Health::new(30.0);
    assert_eq!(health.take_damage(30.0), DamageOutcome::Died);
    // Further damage on a dead target reports nothing
    assert_eq!(health.take_damage(10.0), DamageOutcome::Ignored);
    assert_eq!(health.current, 0.0);
}

#[test]
fn test_nonpositive_damage_is_ignored() {
    let mut health = Health::new(50.0);
    assert_eq!(health.take_damage(0.0), DamageOutcome::Ignored);
    assert_eq!(health.take_damage(-5.0), DamageOutcome::Ignored);
    assert_eq!(health.current, 50.0);
}

#[test]
fn test_heal_is_noop_while_dead() {
    let mut health = Health::new(20.0);
    health.take_damage(20.0);
    assert_eq!(health.heal(10.0), 0.0);
    assert!(!health.is_alive());

    health.revive(5.0);
    assert!(health.is_alive());
    assert_eq!(health.current, 5.0);
}

#[test]
fn test_set_max_health_rescale() {
    let mut health = Health::new(100.0);
    health.take_damage(50.0);

    let mut rescaled = health.clone();
    rescaled.set_max_health(200.0, true);
    assert_eq!(rescaled.current, 100.0);
    assert_eq!(rescaled.max, 200.0);

    health.set_max_health(40.0, false);
    assert_eq!(health.current, 40.0);
    assert_eq!(health.max, 40.0);
}

#[test]
fn test_regen_waits_for_delay_and_caps_at_max() {
    let mut health = Health::new(100.0).with_regen(10.0, 1.0);
    health.take_damage(30.0);

    // Still inside the delay window
    assert!(!health.regenerate(0.5));
    assert_eq!(health.current, 70.0);

    // Past the delay, restores rate * dt
    assert!(health.regenerate(0.6));
    assert!((health.current - 76.0).abs() < 1e-4);

    // Long tick caps at max
    assert!(health.regenerate(100.0));
    assert_eq!(health.current, 100.0);
    assert!(!health.regenerate(1.0));
}

// -----------------------------------------------------------------------------
// Damage gate tests
// -----------------------------------------------------------------------------

#[test]
fn test_invulnerability_blocks_followup_damage() {
    let mut health = Health::new(100.0);
    let mut invuln = Invulnerable::default();

    assert_eq!(
        resolve_damage(&mut health, &mut invuln, 10.0, 0.5),
        DamageOutcome::Damaged
    );
    assert_eq!(health.current, 90.0);
    assert!(invuln.is_invulnerable());

    // Second hit inside the window changes nothing
    assert_eq!(
        resolve_damage(&mut health, &mut invuln, 10.0, 0.5),
        DamageOutcome::Ignored
    );
    assert_eq!(health.current, 90.0);

    invuln.timer = 0.0;
    assert_eq!(
        resolve_damage(&mut health, &mut invuln, 10.0, 0.5),
        DamageOutcome::Damaged
    );
    assert_eq!(health.current, 80.0);
}

#[test]
fn test_ignored_damage_grants_no_invulnerability() {
    let mut health = Health::new(50.0);
    let mut invuln = Invulnerable::default();

    resolve_damage(&mut health, &mut invuln, -1.0, 0.5);
    assert!(!invuln.is_invulnerable());
}

#[test]
fn test_stagger_expires() {
    let mut stagger = Stagger { timer: 0.25 };
    assert!(stagger.is_staggered());
    stagger.timer = (stagger.timer - 0.3_f32).max(0.0);
    assert!(!stagger.is_staggered());
}

// -----------------------------------------------------------------------------
// Combo tests
// -----------------------------------------------------------------------------

#[test]
fn test_combo_chains_within_window() {
    let mut combo = ComboState::new(1.0, 3);
    assert_eq!(combo.on_attack_started(), 1);

    combo.tick(0.5, false);
    assert_eq!(combo.on_attack_started(), 2);

    combo.tick(0.5, false);
    assert_eq!(combo.on_attack_started(), 3);

    // Caps at max_combo
    combo.tick(0.5, false);
    assert_eq!(combo.on_attack_started(), 3);
}

#[test]
fn test_combo_resets_after_window() {
    let mut combo = ComboState::new(1.0, 3);
    combo.on_attack_started();
    combo.on_attack_started();
    assert_eq!(combo.count(), 2);

    // Idle past the window drops the chain to zero
    assert!(combo.tick(1.5, false));
    assert_eq!(combo.count(), 0);

    assert_eq!(combo.on_attack_started(), 1);
}

#[test]
fn test_combo_chain_then_late_restart() {
    let mut combo = ComboState::new(1.5, 3);

    // Attacks at t = 0, 0.5, 1.0 chain up to the cap
    assert_eq!(combo.on_attack_started(), 1);
    combo.tick(0.5, false);
    assert_eq!(combo.on_attack_started(), 2);
    combo.tick(0.5, false);
    assert_eq!(combo.on_attack_started(), 3);

    // Two idle seconds later the chain has decayed; t = 3.0 restarts at 1
    combo.tick(2.0, false);
    assert_eq!(combo.count(), 0);
    assert_eq!(combo.on_attack_started(), 1);
}

#[test]
fn test_combo_does_not_decay_mid_swing() {
    let mut combo = ComboState::new(0.2, 3);
    combo.on_attack_started();

    // Window expires but the swing is still in flight
    assert!(!combo.tick(1.0, true));
    assert_eq!(combo.count(), 1);
}

#[test]
fn test_combo_decays_after_swing_outlives_window() {
    let mut combo = ComboState::new(0.5, 3);
    combo.on_attack_started();

    // The window runs out while the swing is still in flight
    assert!(!combo.tick(2.0, true));
    assert_eq!(combo.count(), 1);

    // First idle tick after the swing ends drops the stale chain
    assert!(combo.tick(0.1, false));
    assert_eq!(combo.count(), 0);

    // And only announces the decay once
    assert!(!combo.tick(0.1, false));
}

#[test]
fn test_combo_reset_on_hit_taken() {
    let mut combo = ComboState::new(1.0, 3);
    combo.on_attack_started();
    combo.on_attack_started();

    assert!(combo.reset());
    assert_eq!(combo.count(), 0);
    // Reset on an empty chain reports nothing to announce
    assert!(!combo.reset());
}

#[test]
fn test_disabled_combo_always_restarts_at_one() {
    let mut combo = ComboState::new(1.0, 3);
    combo.enabled = false;
    assert_eq!(combo.on_attack_started(), 1);
    combo.tick(0.1, false);
    assert_eq!(combo.on_attack_started(), 1);
}

// -----------------------------------------------------------------------------
// Hit registry tests
// -----------------------------------------------------------------------------

#[test]
fn test_registry_rejects_duplicate_hits() {
    let mut registry = HitRegistry::default();
    let a = Entity::from_bits(1);
    let b = Entity::from_bits(2);

    assert!(registry.insert(a));
    assert!(!registry.insert(a));
    assert!(registry.insert(b));
    assert_eq!(registry.len(), 2);
    assert!(registry.contains(a));
}

// -----------------------------------------------------------------------------
// Attack math tests
// -----------------------------------------------------------------------------

#[test]
fn test_scaled_damage_applies_multiplier_only_in_chain() {
    let definition = AttackDefinition {
        damage: 10.0,
        combo_multiplier: 1.5,
        ..Default::default()
    };
    assert_eq!(scaled_damage(&definition, 1, 5.0), 10.0);
    assert_eq!(scaled_damage(&definition, 2, 5.0), 15.0);

    // Zero configured damage falls back to the global default, unscaled at
    // chain position 1
    let unset = AttackDefinition {
        damage: 0.0,
        ..Default::default()
    };
    assert_eq!(scaled_damage(&unset, 1, 7.0), 7.0);
}

#[test]
fn test_variation_index_clamps_to_loadout() {
    let loadout = AttackLoadout {
        variations: vec![
            AttackDefinition::default(),
            AttackDefinition {
                damage: 20.0,
                ..Default::default()
            },
        ],
        default_knockback: 100.0,
    };
    assert_eq!(loadout.variation_index(0), 0);
    assert_eq!(loadout.variation_index(1), 0);
    assert_eq!(loadout.variation_index(2), 1);
    assert_eq!(loadout.variation_index(9), 1);
}

#[test]
fn test_knockback_has_upward_bias() {
    let impulse = knockback_impulse(Vec2::ZERO, Vec2::X, 100.0);
    assert!(impulse.x > 0.0);
    assert!(impulse.y > 0.0);
    assert!((impulse.length() - 100.0).abs() < 1e-3);

    // Coincident positions still push somewhere deterministic
    let fallback = knockback_impulse(Vec2::ZERO, Vec2::ZERO, 50.0);
    assert!(fallback.x > 0.0);
    assert!((fallback.length() - 50.0).abs() < 1e-3);
}

#[test]
fn test_cone_rays_span_the_arc() {
    let rays = cone_ray_directions(Vec2::X, std::f32::consts::FRAC_PI_2);
    assert_eq!(rays.len(), CONE_RAY_COUNT);

    // Endpoints sit at +/- 45 degrees, middle ray on the axis
    let first = rays[0].to_angle();
    let last = rays[CONE_RAY_COUNT - 1].to_angle();
    assert!((first + std::f32::consts::FRAC_PI_4).abs() < 1e-4);
    assert!((last - std::f32::consts::FRAC_PI_4).abs() < 1e-4);
    assert!(rays[CONE_RAY_COUNT / 2].angle_to(Vec2::X).abs() < 1e-4);
}

// -----------------------------------------------------------------------------
// Swing window tests
// -----------------------------------------------------------------------------

#[test]
fn test_active_window_fraction_math() {
    let definition = AttackDefinition {
        hitbox_start: 0.25,
        hitbox_end: 0.75,
        duration: 0.4,
        ..Default::default()
    };
    assert!(definition.progress(0.0) < definition.hitbox_start);
    assert!(definition.progress(0.2) >= definition.hitbox_start);
    assert!(definition.progress(0.2) <= definition.hitbox_end);
    assert!(definition.progress(0.35) > definition.hitbox_end);
    // Clamped past the end
    assert_eq!(definition.progress(10.0), 1.0);
}

#[test]
fn test_zero_width_window_fires_once() {
    let definition = AttackDefinition {
        hitbox_start: 0.5,
        hitbox_end: 0.5,
        duration: 0.1,
        ..Default::default()
    };
    let mut instance = AttackInstance::new(0, Vec2::X, 1);

    // Mirror of the system's window predicate
    let mut fires = 0;
    for _ in 0..4 {
        instance.elapsed += 0.03;
        let progress = definition.progress(instance.elapsed);
        let open = progress >= definition.hitbox_start
            && (progress <= definition.hitbox_end || !instance.window_fired);
        if open {
            instance.window_fired = true;
            fires += 1;
        }
    }
    assert_eq!(fires, 1);
}

#[test]
fn test_attack_state_defaults_ready() {
    let state = AttackState::default();
    assert!(state.cooldown.is_ready());
    assert!(!state.is_attacking());
}

#[test]
fn test_hitbox_shape_centers() {
    let definition = AttackDefinition {
        range: 40.0,
        shape: HitboxShape::Circle,
        ..Default::default()
    };
    let center = definition.hit_center(Vec2::new(10.0, 0.0), Vec2::X);
    assert_eq!(center, Vec2::new(30.0, 0.0));
}
