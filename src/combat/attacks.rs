//! Combat domain: attack definitions, hitbox shapes, and damage math.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Number of rays used to approximate a cone hit volume.
pub const CONE_RAY_COUNT: usize = 5;

/// Upward component mixed into knockback direction so hits pop targets off
/// the ground slightly.
pub const KNOCKBACK_UP_BIAS: f32 = 0.3;

/// Shape of an attack's hit volume. Sizing derives from the definition's
/// `range`: circles and boxes are centered `range / 2` ahead of the attacker,
/// cones fan rays out from the attacker itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HitboxShape {
    /// Circle of radius `range / 2`.
    Circle,
    /// Unrotated rectangle, `range` long and `height` tall.
    Box { height: f32 },
    /// Arc of `angle` radians, approximated by evenly spaced rays.
    Cone { angle: f32 },
}

/// Immutable per-swing configuration. An attacker owns one or more of these
/// in an [`AttackLoadout`], selected by combo index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackDefinition {
    pub damage: f32,
    pub range: f32,
    /// Active-frame window as fractions of `duration`, `0 <= start <= end <= 1`.
    pub hitbox_start: f32,
    pub hitbox_end: f32,
    pub shape: HitboxShape,
    /// Knockback impulse magnitude. `None` falls back to the loadout default.
    pub knockback: Option<f32>,
    /// Damage multiplier applied while a combo chain is running (count > 1).
    pub combo_multiplier: f32,
    /// Cooldown started when the swing's duration elapses.
    pub cooldown: f32,
    /// Total swing duration in seconds.
    pub duration: f32,
}

impl Default for AttackDefinition {
    /// Synthesized fallback used when an attacker is configured with no
    /// variations at all.
    fn default() -> Self {
        Self {
            damage: 10.0,
            range: 40.0,
            hitbox_start: 0.2,
            hitbox_end: 0.6,
            shape: HitboxShape::Circle,
            knockback: None,
            combo_multiplier: 1.0,
            cooldown: 0.3,
            duration: 0.4,
        }
    }
}

impl AttackDefinition {
    /// Fraction of the swing elapsed, clamped to [0, 1].
    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Center of a circle or box hit volume for an attacker at `origin`
    /// swinging toward `direction`.
    pub fn hit_center(&self, origin: Vec2, direction: Vec2) -> Vec2 {
        origin + direction * (self.range * 0.5)
    }
}

/// The attack variations an attacker can perform, selected by combo index,
/// plus combo tuning shared by all of them.
#[derive(Component, Debug, Clone)]
pub struct AttackLoadout {
    pub variations: Vec<AttackDefinition>,
    /// Impulse magnitude for definitions that leave `knockback` unset.
    pub default_knockback: f32,
}

impl Default for AttackLoadout {
    fn default() -> Self {
        Self {
            variations: vec![AttackDefinition::default()],
            default_knockback: 200.0,
        }
    }
}

impl AttackLoadout {
    /// Variation index for the current combo count: attack N of a chain uses
    /// variation N-1, clamped to the last configured variation. A disabled or
    /// absent combo always selects index 0.
    pub fn variation_index(&self, combo_count: u32) -> usize {
        let last = self.variations.len().saturating_sub(1);
        (combo_count.saturating_sub(1) as usize).min(last)
    }

    pub fn knockback_for(&self, definition: &AttackDefinition) -> f32 {
        definition.knockback.unwrap_or(self.default_knockback)
    }
}

/// Final damage for one hit: configured damage (or the global fallback when
/// the definition carries none), scaled by the combo multiplier once a chain
/// is actually running.
pub fn scaled_damage(definition: &AttackDefinition, combo_count: u32, fallback: f32) -> f32 {
    let base = if definition.damage > 0.0 {
        definition.damage
    } else {
        fallback
    };
    if combo_count > 1 {
        base * definition.combo_multiplier
    } else {
        base
    }
}

/// Knockback impulse pushing `target` away from `attacker` with a fixed
/// upward bias. Falls back to +X when the two positions coincide.
pub fn knockback_impulse(attacker: Vec2, target: Vec2, force: f32) -> Vec2 {
    let away = (target - attacker).normalize_or_zero();
    let away = if away == Vec2::ZERO { Vec2::X } else { away };
    let biased = (away + Vec2::new(0.0, KNOCKBACK_UP_BIAS)).normalize_or_zero();
    biased * force
}

/// Ray directions approximating a cone of `angle` radians around `direction`.
pub fn cone_ray_directions(direction: Vec2, angle: f32) -> [Vec2; CONE_RAY_COUNT] {
    let base = direction.to_angle();
    let half = angle * 0.5;
    let step = if CONE_RAY_COUNT > 1 {
        angle / (CONE_RAY_COUNT - 1) as f32
    } else {
        0.0
    };
    std::array::from_fn(|i| Vec2::from_angle(base - half + step * i as f32))
}
