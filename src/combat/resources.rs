//! Combat domain: global tuning knobs.

use bevy::prelude::*;

/// Combat-wide tuning, loaded from data with these defaults as fallback.
#[derive(Resource, Debug, Clone)]
pub struct CombatTuning {
    /// Damage used when an attack definition carries none.
    pub fallback_damage: f32,
    /// Invulnerability window granted after any successful damage.
    pub invuln_duration: f32,
    /// Hit-stop window requested when damage lands.
    pub hitstop_duration: f32,
    /// Time scale during hit-stop.
    pub hitstop_scale: f32,
    /// Loss-of-control window after a hit, letting knockback play out.
    pub stagger_duration: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            fallback_damage: 10.0,
            invuln_duration: 0.5,
            hitstop_duration: 0.06,
            hitstop_scale: 0.05,
            stagger_duration: 0.25,
        }
    }
}
