//! Default bolt: one range-bound damage projectile.

use super::targeting::aim;
use super::{Ability, AbilityError, Cast};
use crate::config::DefaultAbilityConfig;
use crate::effect::EffectDuration;
use crate::state::{GameState, HitEffect, ProjectileBound, ProjectileSpec};
use crate::stats::AbilityStat;

pub(super) fn cast(
    ability: &Ability,
    tuning: &DefaultAbilityConfig,
    cast: &Cast,
    state: &mut GameState,
) -> Result<(), AbilityError> {
    let range = ability.boosted(AbilityStat::Range, tuning.range);
    let aim = aim(cast.origin, cast.requested, range).ok_or(AbilityError::DegenerateTarget)?;

    state.spawn_projectile(ProjectileSpec {
        owner: cast.caster,
        team: cast.team,
        kind: ability.kind(),
        origin: aim.origin,
        direction: aim.direction,
        speed: ability.boosted(AbilityStat::Speed, tuning.speed),
        radius: ability.boosted(AbilityStat::Radius, tuning.projectile_radius),
        aoe_radius: None,
        bound: ProjectileBound::Range {
            start: aim.origin,
            range,
        },
        duration: EffectDuration::Infinite,
        collides: true,
        visible: true,
        effects: vec![HitEffect::Damage {
            amount: ability.boosted(AbilityStat::Strength, tuning.damage),
        }],
        zone: None,
    });
    Ok(())
}
