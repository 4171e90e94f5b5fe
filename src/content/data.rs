//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used for
//! deserialization. Runtime components are built from them in the registry.

use serde::{Deserialize, Serialize};

use crate::agent::DisengageMode;
use crate::combat::AttackDefinition;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Attack loadouts (attacks.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoadoutDef {
    pub id: String,
    pub default_knockback: f32,
    pub combo_window: f32,
    pub max_combo: u32,
    pub combo_enabled: bool,
    pub variations: Vec<AttackDefinition>,
}

// ============================================================================
// Enemies (enemies.ron) - archetype plus placement
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnemyDef {
    pub id: String,
    pub name: String,
    pub max_health: f32,
    pub loadout_id: String,
    pub spawn_at: (f32, f32),
    pub behavior: BehaviorDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorDef {
    /// Patrol borders as offsets from the spawn point.
    pub patrol_left_offset: f32,
    pub patrol_right_offset: f32,
    pub patrol_speed: f32,
    pub chase_speed: f32,
    pub aggro_range: f32,
    pub aggro_range_y: Option<f32>,
    pub chase_range: f32,
    pub chase_timeout: f32,
    pub idle_time: f32,
    pub disengage: DisengageMode,
}

// ============================================================================
// Global tuning (tuning.ron) - single struct, not a DataFile list
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TuningDef {
    pub player: PlayerDef,
    pub combat: CombatDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerDef {
    pub max_health: f32,
    pub regen_rate: f32,
    pub regen_delay: f32,
    pub loadout_id: String,
    pub spawn_at: (f32, f32),
    pub abilities: AbilityFlagsDef,
    pub walk_speed: f32,
    pub run_speed: f32,
    pub jump_speed: f32,
    pub dash_speed: f32,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct AbilityFlagsDef {
    pub run: bool,
    pub dash: bool,
    pub double_jump: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CombatDef {
    pub fallback_damage: f32,
    pub invuln_duration: f32,
    pub hitstop_duration: f32,
    pub hitstop_scale: f32,
    pub stagger_duration: f32,
}

impl Default for TuningDef {
    fn default() -> Self {
        Self {
            player: PlayerDef {
                max_health: 100.0,
                regen_rate: 0.0,
                regen_delay: 3.0,
                loadout_id: "player_sword".to_string(),
                spawn_at: (0.0, 0.0),
                abilities: AbilityFlagsDef {
                    run: true,
                    dash: false,
                    double_jump: false,
                },
                walk_speed: 120.0,
                run_speed: 200.0,
                jump_speed: 320.0,
                dash_speed: 400.0,
            },
            combat: CombatDef {
                fallback_damage: 10.0,
                invuln_duration: 0.5,
                hitstop_duration: 0.06,
                hitstop_scale: 0.05,
                stagger_duration: 0.25,
            },
        }
    }
}
