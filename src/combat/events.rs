//! Combat domain: command and notification messages.
//!
//! Commands (`Request*` / `Cancel*`) are consumed by combat systems during the
//! fixed tick; notifications are written by them for other domains to observe.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Command: start an attack toward `direction`. Silently ignored while the
/// attacker is on cooldown or mid-swing.
#[derive(Debug, Clone, Copy)]
pub struct RequestAttack {
    pub attacker: Entity,
    pub direction: Vec2,
}

impl Message for RequestAttack {}

/// Command: abort an in-flight swing without starting its cooldown.
#[derive(Debug, Clone, Copy)]
pub struct CancelAttack {
    pub attacker: Entity,
}

impl Message for CancelAttack {}

/// A swing began; `combo_count` is the chain position it was started at.
#[derive(Debug, Clone, Copy)]
pub struct AttackStarted {
    pub attacker: Entity,
    pub variation: usize,
    pub combo_count: u32,
}

impl Message for AttackStarted {}

/// A swing finished or was cancelled.
#[derive(Debug, Clone, Copy)]
pub struct AttackEnded {
    pub attacker: Entity,
    pub cancelled: bool,
}

impl Message for AttackEnded {}

/// A hit query struck a fresh target this swing. Fires once per target per
/// swing, before the damage gate, so it reports contact rather than harm.
#[derive(Debug, Clone, Copy)]
pub struct TargetHit {
    pub attacker: Entity,
    pub target: Entity,
}

impl Message for TargetHit {}

/// Combo chain position changed; zero means the chain dropped.
#[derive(Debug, Clone, Copy)]
pub struct ComboChanged {
    pub attacker: Entity,
    pub count: u32,
}

impl Message for ComboChanged {}

/// Internal: one pending damage application, produced by hit queries and
/// consumed by the damage resolver in the same tick.
#[derive(Debug, Clone, Copy)]
pub struct DamageEvent {
    pub source: Entity,
    pub target: Entity,
    pub amount: f32,
    /// Pre-computed impulse, applied only if the damage actually lands.
    pub knockback: Vec2,
}

impl Message for DamageEvent {}

/// Damage passed the invulnerability gate and reduced health.
#[derive(Debug, Clone, Copy)]
pub struct DamageTaken {
    pub entity: Entity,
    pub amount: f32,
    pub source: Entity,
}

impl Message for DamageTaken {}

/// Health changed for any reason (damage, heal, regen, max change).
#[derive(Debug, Clone, Copy)]
pub struct HealthChanged {
    pub entity: Entity,
    pub current: f32,
    pub max: f32,
}

impl Message for HealthChanged {}

/// The entity's health reached zero. Fires exactly once per life.
#[derive(Debug, Clone, Copy)]
pub struct Died {
    pub entity: Entity,
}

impl Message for Died {}
