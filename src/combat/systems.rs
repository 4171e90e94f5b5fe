//! Combat domain: fixed-tick systems for attacks, damage, and deaths.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::agent::AgentBehavior;
use crate::core::SimulationClock;
use crate::movement::GameLayer;

use super::attacks::{
    cone_ray_directions, knockback_impulse, scaled_damage, AttackDefinition, AttackLoadout,
    HitboxShape,
};
use super::components::{
    resolve_damage, AttackInstance, AttackState, ComboState, DamageOutcome, Health, Invulnerable,
    Stagger, Team,
};
use super::events::{
    AttackEnded, AttackStarted, CancelAttack, ComboChanged, DamageEvent, DamageTaken, Died,
    HealthChanged, RequestAttack, TargetHit,
};
use super::resources::CombatTuning;

/// Advance every combat-side countdown once per tick: attack cooldowns,
/// invulnerability windows, combo decay, and health regeneration.
pub fn update_combat_timers(
    time: Res<Time>,
    mut attackers: Query<(Entity, &mut AttackState, Option<&mut ComboState>)>,
    mut invulnerables: Query<&mut Invulnerable>,
    mut staggers: Query<&mut Stagger>,
    mut healths: Query<(Entity, &mut Health)>,
    mut combo_events: MessageWriter<ComboChanged>,
    mut health_events: MessageWriter<HealthChanged>,
) {
    let dt = time.delta_secs();

    for (entity, mut state, combo) in &mut attackers {
        state.cooldown.tick(dt);
        if let Some(mut combo) = combo {
            if combo.tick(dt, state.is_attacking()) {
                combo_events.write(ComboChanged { attacker: entity, count: 0 });
            }
        }
    }

    for mut invulnerable in &mut invulnerables {
        if invulnerable.timer > 0.0 {
            invulnerable.timer = (invulnerable.timer - dt).max(0.0);
        }
    }

    for mut stagger in &mut staggers {
        if stagger.timer > 0.0 {
            stagger.timer = (stagger.timer - dt).max(0.0);
        }
    }

    for (entity, mut health) in &mut healths {
        if health.regenerate(dt) {
            health_events.write(HealthChanged {
                entity,
                current: health.current,
                max: health.max,
            });
        }
    }
}

/// Consume attack commands. A request is silently dropped while the attacker
/// is on cooldown or already mid-swing; otherwise it advances the combo chain
/// and opens a new swing.
pub fn start_attacks(
    mut requests: MessageReader<RequestAttack>,
    mut attackers: Query<(
        &mut AttackState,
        &AttackLoadout,
        Option<&mut ComboState>,
        Option<&Health>,
    )>,
    mut started: MessageWriter<AttackStarted>,
    mut combo_events: MessageWriter<ComboChanged>,
) {
    for request in requests.read() {
        let Ok((mut state, loadout, combo, health)) = attackers.get_mut(request.attacker) else {
            continue;
        };
        if health.is_some_and(|h| !h.is_alive()) {
            continue;
        }
        if !state.cooldown.is_ready() || state.is_attacking() {
            continue;
        }

        let combo_count = match combo {
            Some(mut combo) => {
                let count = combo.on_attack_started();
                combo_events.write(ComboChanged { attacker: request.attacker, count });
                count
            }
            None => 1,
        };

        let direction = if request.direction == Vec2::ZERO {
            Vec2::X
        } else {
            request.direction.normalize()
        };
        let variation = loadout.variation_index(combo_count);
        state.instance = Some(AttackInstance::new(variation, direction, combo_count));

        started.write(AttackStarted {
            attacker: request.attacker,
            variation,
            combo_count,
        });
    }
}

/// Abort in-flight swings. A cancelled swing ends immediately and does not
/// start its cooldown, so a follow-up attack can begin on the next tick.
pub fn cancel_attacks(
    mut requests: MessageReader<CancelAttack>,
    mut attackers: Query<&mut AttackState>,
    mut ended: MessageWriter<AttackEnded>,
) {
    for request in requests.read() {
        let Ok(mut state) = attackers.get_mut(request.attacker) else {
            continue;
        };
        if state.instance.take().is_some() {
            ended.write(AttackEnded { attacker: request.attacker, cancelled: true });
        }
    }
}

fn hit_query_filter(team: Team, attacker: Entity) -> SpatialQueryFilter {
    let mask = match team {
        Team::Player => GameLayer::Enemy,
        Team::Enemy => GameLayer::Player,
    };
    SpatialQueryFilter::from_mask(mask).with_excluded_entities([attacker])
}

fn collect_hits(
    spatial: &SpatialQuery,
    definition: &AttackDefinition,
    origin: Vec2,
    direction: Vec2,
    filter: &SpatialQueryFilter,
) -> Vec<Entity> {
    match definition.shape {
        HitboxShape::Circle => {
            let collider = Collider::circle(definition.range * 0.5);
            spatial.shape_intersections(
                &collider,
                definition.hit_center(origin, direction),
                0.0,
                filter,
            )
        }
        HitboxShape::Box { height } => {
            let collider = Collider::rectangle(definition.range, height);
            spatial.shape_intersections(
                &collider,
                definition.hit_center(origin, direction),
                0.0,
                filter,
            )
        }
        HitboxShape::Cone { angle } => {
            let mut targets = Vec::new();
            for ray in cone_ray_directions(direction, angle) {
                let Ok(dir) = Dir2::new(ray) else { continue };
                for hit in spatial.ray_hits(origin, dir, definition.range, 8, true, filter) {
                    if !targets.contains(&hit.entity) {
                        targets.push(hit.entity);
                    }
                }
            }
            targets
        }
    }
}

/// Advance in-flight swings: run the hit query while the active-frame window
/// is open, emit damage for fresh targets, and close the swing (starting its
/// cooldown) once the duration elapses.
///
/// The active window is expressed as fractions of the swing duration. A
/// zero-width window still fires its hit query on exactly one tick.
pub fn advance_attacks(
    time: Res<Time>,
    spatial: SpatialQuery,
    tuning: Res<CombatTuning>,
    mut attackers: Query<(Entity, &Transform, &Team, &mut AttackState, &AttackLoadout)>,
    targets: Query<&Transform, With<Health>>,
    mut hits: MessageWriter<TargetHit>,
    mut damage: MessageWriter<DamageEvent>,
    mut ended: MessageWriter<AttackEnded>,
) {
    let dt = time.delta_secs();

    for (attacker, transform, team, mut state, loadout) in &mut attackers {
        let Some(instance) = state.instance.as_mut() else {
            continue;
        };
        let definition = loadout
            .variations
            .get(instance.variation)
            .cloned()
            .unwrap_or_default();

        instance.elapsed += dt;
        let progress = definition.progress(instance.elapsed);

        let window_open = progress >= definition.hitbox_start
            && (progress <= definition.hitbox_end || !instance.window_fired);
        if window_open {
            instance.window_fired = true;
            let origin = transform.translation.truncate();
            let filter = hit_query_filter(*team, attacker);
            let force = loadout.knockback_for(&definition);
            let amount = scaled_damage(&definition, instance.combo_count, tuning.fallback_damage);

            for target in collect_hits(&spatial, &definition, origin, instance.direction, &filter) {
                if !instance.hits.insert(target) {
                    continue;
                }
                hits.write(TargetHit { attacker, target });
                let target_pos = targets
                    .get(target)
                    .map(|t| t.translation.truncate())
                    .unwrap_or(origin + instance.direction);
                damage.write(DamageEvent {
                    source: attacker,
                    target,
                    amount,
                    knockback: knockback_impulse(origin, target_pos, force),
                });
            }
        }

        if instance.elapsed >= definition.duration {
            state.instance = None;
            state.cooldown.start(definition.cooldown);
            ended.write(AttackEnded { attacker, cancelled: false });
        }
    }
}

/// Single damage resolver: every pending [`DamageEvent`] passes through the
/// invulnerability gate and the health state machine here, in order, so death
/// and invulnerability stay consistent no matter how many hits land in one
/// tick. Knockback and hit-stop apply only when damage actually lands.
pub fn apply_damage(
    tuning: Res<CombatTuning>,
    mut clock: ResMut<SimulationClock>,
    mut events: MessageReader<DamageEvent>,
    mut victims: Query<(
        &mut Health,
        &mut Invulnerable,
        Option<&mut Stagger>,
        Option<&mut LinearVelocity>,
        Option<&mut ComboState>,
    )>,
    mut taken: MessageWriter<DamageTaken>,
    mut health_events: MessageWriter<HealthChanged>,
    mut died: MessageWriter<Died>,
    mut combo_events: MessageWriter<ComboChanged>,
) {
    for event in events.read() {
        let Ok((mut health, mut invulnerable, stagger, velocity, combo)) =
            victims.get_mut(event.target)
        else {
            continue;
        };

        let outcome = resolve_damage(
            &mut health,
            &mut invulnerable,
            event.amount,
            tuning.invuln_duration,
        );
        if outcome == DamageOutcome::Ignored {
            continue;
        }

        taken.write(DamageTaken {
            entity: event.target,
            amount: event.amount,
            source: event.source,
        });
        health_events.write(HealthChanged {
            entity: event.target,
            current: health.current,
            max: health.max,
        });

        // Taking a real hit drops the victim's own combo chain.
        if let Some(mut combo) = combo {
            if combo.reset() {
                combo_events.write(ComboChanged { attacker: event.target, count: 0 });
            }
        }

        if let Some(mut velocity) = velocity {
            velocity.0 = event.knockback;
        }
        if let Some(mut stagger) = stagger {
            stagger.timer = tuning.stagger_duration;
        }

        clock.request_hitstop(tuning.hitstop_duration, tuning.hitstop_scale);

        if outcome == DamageOutcome::Died {
            died.write(Died { entity: event.target });
        }
    }
}

/// React to deaths: agents are removed from the world; the player entity
/// stays where it fell so outer layers can drive respawn.
pub fn process_deaths(
    mut commands: Commands,
    mut deaths: MessageReader<Died>,
    agents: Query<(), With<AgentBehavior>>,
) {
    for death in deaths.read() {
        if agents.contains(death.entity) {
            debug!("despawning dead agent {:?}", death.entity);
            commands.entity(death.entity).despawn();
        }
    }
}
