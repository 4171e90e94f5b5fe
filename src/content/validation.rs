//! Validation and sanitization of loaded content.
//!
//! Out-of-range values are corrected in place rather than rejected, and each
//! correction is reported so misconfigured data is visible in the log instead
//! of silently producing odd gameplay.

use crate::combat::AttackDefinition;

use super::data::*;
use super::registry::GameContent;

/// One corrected (or unresolvable) configuration problem.
#[derive(Debug)]
pub struct ConfigWarning {
    pub source: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} '{}': {}", self.source, self.field, self.message)
    }
}

fn warn_clamp(
    warnings: &mut Vec<ConfigWarning>,
    source: &str,
    field: &'static str,
    old: f32,
    new: f32,
) {
    warnings.push(ConfigWarning {
        source: source.to_string(),
        field,
        message: format!("{} out of range, corrected to {}", old, new),
    });
}

fn sanitize_attack(
    definition: &mut AttackDefinition,
    source: &str,
    warnings: &mut Vec<ConfigWarning>,
) {
    if definition.damage < 0.0 {
        warn_clamp(warnings, source, "damage", definition.damage, 0.0);
        definition.damage = 0.0;
    }
    if definition.range <= 0.0 {
        warn_clamp(warnings, source, "range", definition.range, 1.0);
        definition.range = 1.0;
    }
    if definition.duration <= 0.0 {
        warn_clamp(warnings, source, "duration", definition.duration, 0.05);
        definition.duration = 0.05;
    }
    if definition.cooldown < 0.0 {
        warn_clamp(warnings, source, "cooldown", definition.cooldown, 0.0);
        definition.cooldown = 0.0;
    }
    if definition.combo_multiplier < 1.0 {
        warn_clamp(
            warnings,
            source,
            "combo_multiplier",
            definition.combo_multiplier,
            1.0,
        );
        definition.combo_multiplier = 1.0;
    }

    let start = definition.hitbox_start;
    let end = definition.hitbox_end;
    let clamped_start = start.clamp(0.0, 1.0);
    let clamped_end = end.clamp(0.0, 1.0);
    if clamped_start != start {
        warn_clamp(warnings, source, "hitbox_start", start, clamped_start);
    }
    if clamped_end != end {
        warn_clamp(warnings, source, "hitbox_end", end, clamped_end);
    }
    if clamped_start > clamped_end {
        warnings.push(ConfigWarning {
            source: source.to_string(),
            field: "hitbox_start",
            message: format!(
                "window {}..{} is inverted, swapping endpoints",
                clamped_start, clamped_end
            ),
        });
        definition.hitbox_start = clamped_end;
        definition.hitbox_end = clamped_start;
    } else {
        definition.hitbox_start = clamped_start;
        definition.hitbox_end = clamped_end;
    }
}

fn sanitize_loadout(loadout: &mut LoadoutDef, warnings: &mut Vec<ConfigWarning>) {
    let source = format!("Loadout {}", loadout.id);

    if loadout.variations.is_empty() {
        warnings.push(ConfigWarning {
            source: source.clone(),
            field: "variations",
            message: "no attack variations configured, using a default swing".to_string(),
        });
        loadout.variations.push(AttackDefinition::default());
    }
    if loadout.default_knockback < 0.0 {
        warn_clamp(
            warnings,
            &source,
            "default_knockback",
            loadout.default_knockback,
            0.0,
        );
        loadout.default_knockback = 0.0;
    }
    if loadout.combo_window < 0.0 {
        warn_clamp(warnings, &source, "combo_window", loadout.combo_window, 0.0);
        loadout.combo_window = 0.0;
    }
    if loadout.max_combo == 0 {
        warnings.push(ConfigWarning {
            source: source.clone(),
            field: "max_combo",
            message: "must be at least 1, corrected to 1".to_string(),
        });
        loadout.max_combo = 1;
    }

    for (index, variation) in loadout.variations.iter_mut().enumerate() {
        let variation_source = format!("{} variation {}", source, index);
        sanitize_attack(variation, &variation_source, warnings);
    }
}

fn sanitize_behavior(behavior: &mut BehaviorDef, source: &str, warnings: &mut Vec<ConfigWarning>) {
    if behavior.patrol_left_offset > behavior.patrol_right_offset {
        warnings.push(ConfigWarning {
            source: source.to_string(),
            field: "patrol_left_offset",
            message: "patrol borders are inverted, swapping".to_string(),
        });
        std::mem::swap(
            &mut behavior.patrol_left_offset,
            &mut behavior.patrol_right_offset,
        );
    }
    if behavior.patrol_speed < 0.0 {
        warn_clamp(warnings, source, "patrol_speed", behavior.patrol_speed, 0.0);
        behavior.patrol_speed = 0.0;
    }
    if behavior.chase_speed < 0.0 {
        warn_clamp(warnings, source, "chase_speed", behavior.chase_speed, 0.0);
        behavior.chase_speed = 0.0;
    }
    if behavior.aggro_range < 0.0 {
        warn_clamp(warnings, source, "aggro_range", behavior.aggro_range, 0.0);
        behavior.aggro_range = 0.0;
    }
    // Hysteresis requires the give-up radius to cover the detection radius
    if behavior.chase_range < behavior.aggro_range {
        warn_clamp(
            warnings,
            source,
            "chase_range",
            behavior.chase_range,
            behavior.aggro_range,
        );
        behavior.chase_range = behavior.aggro_range;
    }
    if behavior.chase_timeout < 0.0 {
        warn_clamp(warnings, source, "chase_timeout", behavior.chase_timeout, 0.0);
        behavior.chase_timeout = 0.0;
    }
    if behavior.idle_time < 0.0 {
        warn_clamp(warnings, source, "idle_time", behavior.idle_time, 0.0);
        behavior.idle_time = 0.0;
    }
}

fn sanitize_tuning(tuning: &mut TuningDef, warnings: &mut Vec<ConfigWarning>) {
    let source = "Tuning";
    if tuning.player.max_health < 1.0 {
        warn_clamp(warnings, source, "player.max_health", tuning.player.max_health, 1.0);
        tuning.player.max_health = 1.0;
    }
    if tuning.player.regen_rate < 0.0 {
        warn_clamp(warnings, source, "player.regen_rate", tuning.player.regen_rate, 0.0);
        tuning.player.regen_rate = 0.0;
    }
    if tuning.combat.fallback_damage < 0.0 {
        warn_clamp(
            warnings,
            source,
            "combat.fallback_damage",
            tuning.combat.fallback_damage,
            0.0,
        );
        tuning.combat.fallback_damage = 0.0;
    }
    if tuning.combat.invuln_duration < 0.0 {
        warn_clamp(
            warnings,
            source,
            "combat.invuln_duration",
            tuning.combat.invuln_duration,
            0.0,
        );
        tuning.combat.invuln_duration = 0.0;
    }
    if tuning.combat.stagger_duration < 0.0 {
        warn_clamp(
            warnings,
            source,
            "combat.stagger_duration",
            tuning.combat.stagger_duration,
            0.0,
        );
        tuning.combat.stagger_duration = 0.0;
    }
    let scale = tuning.combat.hitstop_scale;
    let clamped = scale.clamp(0.0, 1.0);
    if clamped != scale {
        warn_clamp(warnings, source, "combat.hitstop_scale", scale, clamped);
        tuning.combat.hitstop_scale = clamped;
    }
}

/// Sanitize all loaded content in place and check cross-references. Returns
/// the corrections made; unresolvable references stay in the list so callers
/// can log them, with lookups falling back to defaults at use sites.
pub fn validate_content(content: &mut GameContent) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    for loadout in content.loadouts.values_mut() {
        sanitize_loadout(loadout, &mut warnings);
    }

    for enemy in &mut content.enemies {
        let source = format!("Enemy {}", enemy.id);
        if enemy.max_health < 1.0 {
            warn_clamp(&mut warnings, &source, "max_health", enemy.max_health, 1.0);
            enemy.max_health = 1.0;
        }
        sanitize_behavior(&mut enemy.behavior, &source, &mut warnings);
        if !content.loadouts.contains_key(&enemy.loadout_id) {
            warnings.push(ConfigWarning {
                source,
                field: "loadout_id",
                message: format!("references missing loadout '{}'", enemy.loadout_id),
            });
        }
    }

    sanitize_tuning(&mut content.tuning, &mut warnings);
    if !content.loadouts.contains_key(&content.tuning.player.loadout_id) {
        warnings.push(ConfigWarning {
            source: "Tuning".to_string(),
            field: "player.loadout_id",
            message: format!(
                "references missing loadout '{}'",
                content.tuning.player.loadout_id
            ),
        });
    }

    warnings
}
