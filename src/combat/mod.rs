//! Combat domain: attack resolution, damage, health, and combos.

pub mod attacks;
pub mod components;
pub mod events;
pub mod resources;
pub mod systems;

#[cfg(test)]
mod tests;

pub use attacks::{
    scaled_damage, AttackDefinition, AttackLoadout, HitboxShape, CONE_RAY_COUNT,
};
pub use components::{
    resolve_damage, AttackInstance, AttackState, Combatant, ComboState, DamageOutcome, Health,
    HitRegistry, Invulnerable, Stagger, Team,
};
pub use events::{
    AttackEnded, AttackStarted, CancelAttack, ComboChanged, DamageEvent, DamageTaken, Died,
    HealthChanged, RequestAttack, TargetHit,
};
pub use resources::CombatTuning;

use bevy::prelude::*;

use crate::core::SimSet;
use systems::{
    advance_attacks, apply_damage, cancel_attacks, process_deaths, start_attacks,
    update_combat_timers,
};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .add_message::<RequestAttack>()
            .add_message::<CancelAttack>()
            .add_message::<AttackStarted>()
            .add_message::<AttackEnded>()
            .add_message::<TargetHit>()
            .add_message::<ComboChanged>()
            .add_message::<DamageEvent>()
            .add_message::<DamageTaken>()
            .add_message::<HealthChanged>()
            .add_message::<Died>()
            .add_systems(
                FixedUpdate,
                (
                    update_combat_timers,
                    start_attacks,
                    cancel_attacks,
                    advance_attacks,
                )
                    .chain()
                    .in_set(SimSet::Attacks),
            )
            .add_systems(FixedUpdate, apply_damage.in_set(SimSet::Damage))
            .add_systems(FixedUpdate, process_deaths.in_set(SimSet::Reactions));
    }
}
