//! Pyromancer: a fireball that bursts into a burning zone where it lands.

use super::targeting::aim;
use super::{Ability, AbilityError, Cast};
use crate::config::PyromancerConfig;
use crate::effect::{BurningEffect, Effect, EffectDuration, EffectKind};
use crate::state::{GameState, HitEffect, ProjectileBound, ProjectileSpec, ZoneDescriptor};
use crate::stats::AbilityStat;

/// Fraction of max health each burn tick deals for a given ability power.
pub fn burn_percent_per_tick(ability_power: f64) -> f64 {
    if ability_power <= 0.0 {
        return 0.0;
    }
    (ability_power * 0.12) / (ability_power + 150.0)
}

/// Zone damage per zone tick.
pub fn zone_damage(ability_power: f64) -> f64 {
    ability_power / 3.0
}

pub(super) fn cast(
    ability: &Ability,
    tuning: &PyromancerConfig,
    cast: &Cast,
    state: &mut GameState,
) -> Result<(), AbilityError> {
    let range = ability.boosted(AbilityStat::Range, tuning.range);
    let aim = aim(cast.origin, cast.requested, range).ok_or(AbilityError::DegenerateTarget)?;
    let power = ability.boosted(AbilityStat::Strength, tuning.ability_power);

    let burning = Effect::new(
        EffectKind::Burning(BurningEffect {
            tick_rate: tuning.burn_tick_ms,
            last_tick: cast.now,
            percent_per_tick: burn_percent_per_tick(power),
            source: cast.caster,
        }),
        EffectDuration::Timed(tuning.burn_duration_ms),
        cast.now,
    );
    let zone = ZoneDescriptor {
        kind: ability.kind(),
        radius: ability.boosted(AbilityStat::Radius, tuning.zone_radius),
        duration_ms: ability.boosted_ms(AbilityStat::Duration, tuning.zone_duration_ms),
        tick_rate: tuning.zone_tick_ms,
        effects: vec![
            HitEffect::Damage {
                amount: zone_damage(power),
            },
            HitEffect::Apply(burning),
        ],
    };

    state.spawn_projectile(ProjectileSpec {
        owner: cast.caster,
        team: cast.team,
        kind: ability.kind(),
        origin: aim.origin,
        direction: aim.direction,
        speed: ability.boosted(AbilityStat::Speed, tuning.speed),
        radius: tuning.projectile_radius,
        aoe_radius: None,
        bound: ProjectileBound::Destination(aim.target),
        duration: EffectDuration::Infinite,
        collides: true,
        visible: true,
        effects: Vec::new(),
        zone: Some(zone),
    });
    Ok(())
}
