//! Loaded content with lookup by id, plus conversion into runtime components.

use bevy::prelude::*;
use std::collections::HashMap;

use crate::combat::{AttackLoadout, ComboState};

use super::data::{EnemyDef, LoadoutDef, TuningDef};

#[derive(Resource, Debug, Default)]
pub struct GameContent {
    pub loadouts: HashMap<String, LoadoutDef>,
    pub enemies: Vec<EnemyDef>,
    pub tuning: TuningDef,
}

impl GameContent {
    pub fn loadout(&self, id: &str) -> Option<&LoadoutDef> {
        self.loadouts.get(id)
    }

    /// Runtime attack loadout for an id, falling back to the built-in default
    /// swing when the id is unknown. Missing ids are reported during content
    /// validation, so the fallback here stays quiet.
    pub fn attack_loadout(&self, id: &str) -> AttackLoadout {
        match self.loadouts.get(id) {
            Some(def) => AttackLoadout {
                variations: def.variations.clone(),
                default_knockback: def.default_knockback,
            },
            None => AttackLoadout::default(),
        }
    }

    /// Combo tracker configured by the loadout; unknown ids get the default.
    pub fn combo_state(&self, id: &str) -> ComboState {
        match self.loadouts.get(id) {
            Some(def) => {
                let mut combo = ComboState::new(def.combo_window, def.max_combo);
                combo.enabled = def.combo_enabled;
                combo
            }
            None => ComboState::default(),
        }
    }
}
