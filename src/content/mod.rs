//! Content domain: RON data loading, validation, and the content registry.

pub mod data;
pub mod loader;
pub mod registry;
pub mod validation;

#[cfg(test)]
mod tests;

pub use data::{BehaviorDef, DataFile, EnemyDef, LoadoutDef, TuningDef};
pub use loader::ContentLoadError;
pub use registry::GameContent;
pub use validation::{validate_content, ConfigWarning};

use bevy::prelude::*;
use std::path::Path;

use crate::combat::CombatTuning;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameContent>()
            .add_systems(PreStartup, load_content);
    }
}

/// Load and sanitize all content before anything spawns. Failures fall back
/// to built-in defaults so a broken data directory never aborts startup.
fn load_content(mut content: ResMut<GameContent>, mut combat_tuning: ResMut<CombatTuning>) {
    let (mut loaded, errors) = loader::load_all_content(Path::new("assets/data"));
    for error in &errors {
        warn!("{}", error);
    }

    let warnings = validate_content(&mut loaded);
    for warning in &warnings {
        warn!("{}", warning);
    }

    info!(
        "Content loaded: {} loadouts, {} enemies, {} corrections",
        loaded.loadouts.len(),
        loaded.enemies.len(),
        warnings.len()
    );

    combat_tuning.fallback_damage = loaded.tuning.combat.fallback_damage;
    combat_tuning.invuln_duration = loaded.tuning.combat.invuln_duration;
    combat_tuning.hitstop_duration = loaded.tuning.combat.hitstop_duration;
    combat_tuning.hitstop_scale = loaded.tuning.combat.hitstop_scale;
    combat_tuning.stagger_duration = loaded.tuning.combat.stagger_duration;

    *content = loaded;
}
