//! Sniper shot: long-range bolt plus a recoil that pushes the caster back.

use super::targeting::aim;
use super::{Ability, AbilityError, Cast, travel_ms};
use crate::config::{GameplayConfig, SniperConfig};
use crate::effect::{Effect, EffectDuration, EffectKind, MoveEffect, attach_effect};
use crate::state::{GameState, HitEffect, ProjectileBound, ProjectileSpec};
use crate::stats::AbilityStat;

pub(super) fn cast(
    ability: &Ability,
    tuning: &SniperConfig,
    cast: &Cast,
    state: &mut GameState,
    config: &GameplayConfig,
) -> Result<(), AbilityError> {
    let range = ability.boosted(AbilityStat::Range, tuning.range);
    let aim = aim(cast.origin, cast.requested, range).ok_or(AbilityError::DegenerateTarget)?;

    let recoil_target = config
        .map
        .clamp(aim.origin - aim.direction.scale(tuning.recoil_distance));
    let recoil = Effect::new(
        EffectKind::Move(MoveEffect {
            target: recoil_target,
            speed: tuning.recoil_speed,
        }),
        EffectDuration::Timed(travel_ms(
            aim.origin.distance(recoil_target),
            tuning.recoil_speed,
        )),
        cast.now,
    );

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
    if let Some(caster) = state.combatant_mut(cast.caster) {
        attach_effect(caster, recoil);
    }
    Ok(())
}
