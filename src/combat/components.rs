//! Combat domain: components and combat-related state types.

use bevy::prelude::*;

use crate::core::CooldownTimer;

/// Marks an entity as a combat participant.
#[derive(Component, Debug)]
pub struct Combatant;

/// Team affiliation to prevent friendly fire.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Player,
    Enemy,
}

/// Outcome of a damage application attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Target was dead, invulnerable, or the amount was non-positive.
    Ignored,
    /// Health was reduced but the target survived.
    Damaged,
    /// Health reached zero on this application. Fires at most once per life.
    Died,
}

/// Health state machine for damageable entities.
///
/// `current` never leaves `[0, max]`. The Alive -> Dead transition happens
/// exactly when `current` reaches zero and is irreversible except through
/// [`Health::revive`].
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: f32,
    pub max: f32,
    alive: bool,
    /// Restored per second once `since_damage >= regen_delay`. Zero disables.
    pub regen_rate: f32,
    pub regen_delay: f32,
    since_damage: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        let max = max.max(1.0);
        Self {
            current: max,
            max,
            alive: true,
            regen_rate: 0.0,
            regen_delay: 0.0,
            since_damage: 0.0,
        }
    }

    pub fn with_regen(mut self, rate: f32, delay: f32) -> Self {
        self.regen_rate = rate.max(0.0);
        self.regen_delay = delay.max(0.0);
        self
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn fraction(&self) -> f32 {
        self.current / self.max
    }

    /// Apply damage. No-op while dead or for non-positive amounts; the
    /// invulnerability gate lives one level up in [`resolve_damage`].
    pub fn take_damage(&mut self, amount: f32) -> DamageOutcome {
        if !self.alive || amount <= 0.0 {
            return DamageOutcome::Ignored;
        }
        self.current = (self.current - amount).max(0.0);
        self.since_damage = 0.0;
        if self.current <= 0.0 {
            self.alive = false;
            DamageOutcome::Died
        } else {
            DamageOutcome::Damaged
        }
    }

    /// Heal up to `max`. No-op while dead. Returns the amount restored.
    pub fn heal(&mut self, amount: f32) -> f32 {
        if !self.alive || amount <= 0.0 {
            return 0.0;
        }
        let restored = amount.min(self.max - self.current);
        self.current += restored;
        restored
    }

    /// Return from Dead with `amount` health (clamped to `max`).
    pub fn revive(&mut self, amount: f32) {
        self.current = amount.clamp(0.0, self.max);
        self.alive = self.current > 0.0;
        self.since_damage = 0.0;
    }

    /// Change the maximum. With `rescale` the current health keeps its
    /// fraction of the old max; without it, current is only clamped down.
    pub fn set_max_health(&mut self, new_max: f32, rescale: bool) {
        let new_max = new_max.max(1.0);
        if rescale {
            self.current = self.fraction() * new_max;
        }
        self.max = new_max;
        self.current = self.current.min(self.max);
    }

    /// Advance regeneration by one tick. Returns true when health changed.
    pub fn regenerate(&mut self, dt: f32) -> bool {
        self.since_damage += dt;
        if !self.alive
            || self.regen_rate <= 0.0
            || self.current >= self.max
            || self.since_damage < self.regen_delay
        {
            return false;
        }
        self.current = (self.current + self.regen_rate * dt).min(self.max);
        true
    }
}

/// Brief loss of control after taking a hit, so knockback is not immediately
/// overwritten by locomotion.
#[derive(Component, Debug, Default)]
pub struct Stagger {
    pub timer: f32,
}

impl Stagger {
    pub fn is_staggered(&self) -> bool {
        self.timer > 0.0
    }
}

/// Invulnerability frames; while the timer runs, damage is ignored.
#[derive(Component, Debug, Default)]
pub struct Invulnerable {
    pub timer: f32,
}

impl Invulnerable {
    pub fn is_invulnerable(&self) -> bool {
        self.timer > 0.0
    }
}

/// Damage gate shared by every damage path: invulnerability first, then the
/// health state machine, then a fresh invulnerability window on success.
pub fn resolve_damage(
    health: &mut Health,
    invulnerable: &mut Invulnerable,
    amount: f32,
    invuln_duration: f32,
) -> DamageOutcome {
    if invulnerable.is_invulnerable() {
        return DamageOutcome::Ignored;
    }
    let outcome = health.take_damage(amount);
    if outcome != DamageOutcome::Ignored {
        invulnerable.timer = invuln_duration.max(0.0);
    }
    outcome
}

/// Combo chain tracker. Tick-driven: instead of comparing timestamps, the
/// window is a countdown refreshed on every attack start.
#[derive(Component, Debug, Clone)]
pub struct ComboState {
    count: u32,
    window_remaining: f32,
    pub window: f32,
    pub max_combo: u32,
    pub enabled: bool,
}

impl Default for ComboState {
    fn default() -> Self {
        Self {
            count: 0,
            window_remaining: 0.0,
            window: 1.0,
            max_combo: 3,
            enabled: true,
        }
    }
}

impl ComboState {
    pub fn new(window: f32, max_combo: u32) -> Self {
        Self {
            count: 0,
            window_remaining: 0.0,
            window,
            max_combo: max_combo.max(1),
            enabled: true,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// A new attack started: continue the chain if the window is still open,
    /// otherwise restart at 1. Returns the resulting count.
    pub fn on_attack_started(&mut self) -> u32 {
        if !self.enabled {
            self.count = 1;
            return self.count;
        }
        if self.window_remaining > 0.0 && self.count < self.max_combo {
            self.count += 1;
        } else if self.window_remaining > 0.0 {
            self.count = self.max_combo;
        } else {
            self.count = 1;
        }
        self.window_remaining = self.window;
        self.count
    }

    /// Advance the window countdown. While idle (not mid-swing), an expired
    /// window decays the chain to zero; returns true when that happened.
    /// The window may run out during a swing, so the decay check cannot be
    /// tied to the tick that crosses zero.
    pub fn tick(&mut self, dt: f32, mid_attack: bool) -> bool {
        if self.window_remaining > 0.0 {
            self.window_remaining -= dt;
        }
        if self.window_remaining <= 0.0 && !mid_attack && self.count > 0 {
            self.count = 0;
            return true;
        }
        false
    }

    /// External reset, e.g. when the attacker takes a hit.
    pub fn reset(&mut self) -> bool {
        let had_chain = self.count > 0;
        self.count = 0;
        self.window_remaining = 0.0;
        had_chain
    }
}

/// Identities already struck by one swing. Prevents a target taking damage
/// twice from the same attack even when the hit query returns it on several
/// consecutive ticks.
#[derive(Debug, Clone, Default)]
pub struct HitRegistry {
    hits: Vec<Entity>,
}

impl HitRegistry {
    /// Record a target. Returns false if it was already struck this swing.
    pub fn insert(&mut self, target: Entity) -> bool {
        if self.hits.contains(&target) {
            return false;
        }
        self.hits.push(target);
        true
    }

    pub fn contains(&self, target: Entity) -> bool {
        self.hits.contains(&target)
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Mutable per-swing state, created by a successful attack start and cleared
/// when the swing's duration elapses or the attack is cancelled.
#[derive(Debug, Clone)]
pub struct AttackInstance {
    /// Index into the attacker's loadout variations.
    pub variation: usize,
    pub elapsed: f32,
    pub direction: Vec2,
    /// Combo count captured at swing start; scales damage for every hit of
    /// this swing.
    pub combo_count: u32,
    pub hits: HitRegistry,
    /// Set on the first hit-query tick. Guarantees a zero-width active
    /// window still produces exactly one query tick.
    pub window_fired: bool,
}

impl AttackInstance {
    pub fn new(variation: usize, direction: Vec2, combo_count: u32) -> Self {
        Self {
            variation,
            elapsed: 0.0,
            direction,
            combo_count,
            hits: HitRegistry::default(),
            window_fired: false,
        }
    }
}

/// Per-attacker swing state: the shared cooldown and the in-flight swing.
#[derive(Component, Debug, Default)]
pub struct AttackState {
    pub cooldown: CooldownTimer,
    pub instance: Option<AttackInstance>,
}

impl AttackState {
    pub fn is_attacking(&self) -> bool {
        self.instance.is_some()
    }
}
