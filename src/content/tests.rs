//! Content domain: tests for parsing, sanitization, and registry lookups.

use ron::Options;

use crate::combat::{AttackDefinition, HitboxShape};

use super::data::*;
use super::registry::GameContent;
use super::validation::validate_content;

fn parse_loadouts(source: &str) -> Vec<LoadoutDef> {
    let options =
        Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME);
    let file: DataFile<LoadoutDef> = options.from_str(source).unwrap();
    file.items
}

fn loadout(variations: Vec<AttackDefinition>) -> LoadoutDef {
    LoadoutDef {
        id: "test".to_string(),
        default_knockback: 200.0,
        combo_window: 1.0,
        max_combo: 3,
        combo_enabled: true,
        variations,
    }
}

fn enemy(behavior: BehaviorDef) -> EnemyDef {
    EnemyDef {
        id: "test_enemy".to_string(),
        name: "Test Enemy".to_string(),
        max_health: 30.0,
        loadout_id: "test".to_string(),
        spawn_at: (0.0, 0.0),
        behavior,
    }
}

fn behavior() -> BehaviorDef {
    BehaviorDef {
        patrol_left_offset: -50.0,
        patrol_right_offset: 50.0,
        patrol_speed: 40.0,
        chase_speed: 80.0,
        aggro_range: 100.0,
        aggro_range_y: None,
        chase_range: 150.0,
        chase_timeout: 2.0,
        idle_time: 1.0,
        disengage: Default::default(),
    }
}

// -----------------------------------------------------------------------------
// Parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_loadout_with_implicit_some() {
    let items = parse_loadouts(
        r#"(
            schema_version: 1,
            items: [
                (
                    id: "sword",
                    default_knockback: 200.0,
                    combo_window: 0.9,
                    max_combo: 3,
                    combo_enabled: true,
                    variations: [
                        (
                            damage: 10.0,
                            range: 40.0,
                            hitbox_start: 0.2,
                            hitbox_end: 0.6,
                            shape: Cone(angle: 1.2),
                            knockback: 300.0,
                            combo_multiplier: 1.0,
                            cooldown: 0.3,
                            duration: 0.4,
                        ),
                    ],
                ),
            ],
        )"#,
    );

    assert_eq!(items.len(), 1);
    let variation = &items[0].variations[0];
    // IMPLICIT_SOME turns the bare float into Some(300.0)
    assert_eq!(variation.knockback, Some(300.0));
    assert_eq!(variation.shape, HitboxShape::Cone { angle: 1.2 });
}

// -----------------------------------------------------------------------------
// Sanitization tests
// -----------------------------------------------------------------------------

#[test]
fn test_negative_values_are_clamped() {
    let mut content = GameContent::default();
    content.loadouts.insert(
        "test".to_string(),
        loadout(vec![AttackDefinition {
            damage: -5.0,
            range: -10.0,
            cooldown: -1.0,
            ..Default::default()
        }]),
    );

    let warnings = validate_content(&mut content);

    let fixed = &content.loadouts["test"].variations[0];
    assert_eq!(fixed.damage, 0.0);
    assert!(fixed.range > 0.0);
    assert_eq!(fixed.cooldown, 0.0);
    assert!(warnings.len() >= 3);
}

#[test]
fn test_inverted_hitbox_window_is_swapped() {
    let mut content = GameContent::default();
    content.loadouts.insert(
        "test".to_string(),
        loadout(vec![AttackDefinition {
            hitbox_start: 0.8,
            hitbox_end: 0.3,
            ..Default::default()
        }]),
    );

    let warnings = validate_content(&mut content);

    let fixed = &content.loadouts["test"].variations[0];
    assert_eq!(fixed.hitbox_start, 0.3);
    assert_eq!(fixed.hitbox_end, 0.8);
    assert!(!warnings.is_empty());
}

#[test]
fn test_out_of_range_fractions_are_clamped() {
    let mut content = GameContent::default();
    content.loadouts.insert(
        "test".to_string(),
        loadout(vec![AttackDefinition {
            hitbox_start: -0.5,
            hitbox_end: 1.5,
            ..Default::default()
        }]),
    );

    validate_content(&mut content);

    let fixed = &content.loadouts["test"].variations[0];
    assert_eq!(fixed.hitbox_start, 0.0);
    assert_eq!(fixed.hitbox_end, 1.0);
}

#[test]
fn test_empty_variations_get_a_default_swing() {
    let mut content = GameContent::default();
    content.loadouts.insert("test".to_string(), loadout(vec![]));

    let warnings = validate_content(&mut content);

    assert_eq!(content.loadouts["test"].variations.len(), 1);
    assert!(warnings.iter().any(|w| w.field == "variations"));
}

#[test]
fn test_chase_range_raised_to_aggro_range() {
    let mut content = GameContent::default();
    content.loadouts.insert("test".to_string(), loadout(vec![AttackDefinition::default()]));
    let mut bad = behavior();
    bad.chase_range = 50.0;
    bad.aggro_range = 100.0;
    content.enemies.push(enemy(bad));

    let warnings = validate_content(&mut content);

    assert_eq!(content.enemies[0].behavior.chase_range, 100.0);
    assert!(warnings.iter().any(|w| w.field == "chase_range"));
}

#[test]
fn test_inverted_patrol_borders_are_swapped() {
    let mut content = GameContent::default();
    content.loadouts.insert("test".to_string(), loadout(vec![AttackDefinition::default()]));
    let mut bad = behavior();
    bad.patrol_left_offset = 80.0;
    bad.patrol_right_offset = -80.0;
    content.enemies.push(enemy(bad));

    validate_content(&mut content);

    assert_eq!(content.enemies[0].behavior.patrol_left_offset, -80.0);
    assert_eq!(content.enemies[0].behavior.patrol_right_offset, 80.0);
}

#[test]
fn test_missing_loadout_reference_is_reported() {
    let mut content = GameContent::default();
    let mut orphan = enemy(behavior());
    orphan.loadout_id = "no_such_loadout".to_string();
    content.enemies.push(orphan);

    let warnings = validate_content(&mut content);
    assert!(warnings.iter().any(|w| w.field == "loadout_id"));
}

// -----------------------------------------------------------------------------
// Registry tests
// -----------------------------------------------------------------------------

#[test]
fn test_registry_builds_runtime_components() {
    let mut content = GameContent::default();
    content.loadouts.insert(
        "sword".to_string(),
        LoadoutDef {
            id: "sword".to_string(),
            default_knockback: 250.0,
            combo_window: 0.7,
            max_combo: 4,
            combo_enabled: true,
            variations: vec![AttackDefinition::default(); 2],
        },
    );

    let loadout = content.attack_loadout("sword");
    assert_eq!(loadout.variations.len(), 2);
    assert_eq!(loadout.default_knockback, 250.0);

    let combo = content.combo_state("sword");
    assert_eq!(combo.window, 0.7);
    assert_eq!(combo.max_combo, 4);
}

#[test]
fn test_registry_falls_back_for_unknown_ids() {
    let content = GameContent::default();
    let loadout = content.attack_loadout("missing");
    assert_eq!(loadout.variations.len(), 1);

    let combo = content.combo_state("missing");
    assert!(combo.enabled);
}
