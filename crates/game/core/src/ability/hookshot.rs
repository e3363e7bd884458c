//! Hookshot: a hook that damages, stuns and drags the first enemy hit back
//! to where the caster stood when casting.

use super::targeting::aim;
use super::{Ability, AbilityError, Cast};
use crate::config::HookshotConfig;
use crate::effect::{Effect, EffectDuration, EffectKind};
use crate::state::{GameState, HitEffect, ProjectileBound, ProjectileSpec};
use crate::stats::AbilityStat;

pub(super) fn cast(
    ability: &Ability,
    tuning: &HookshotConfig,
    cast: &Cast,
    state: &mut GameState,
) -> Result<(), AbilityError> {
    let range = ability.boosted(AbilityStat::Range, tuning.range);
    let aim = aim(cast.origin, cast.requested, range).ok_or(AbilityError::DegenerateTarget)?;

    // Level scaling is fixed at cast time.
    let levels_above_first = f64::from(cast.level.saturating_sub(1));
    let speed = ability.boosted(AbilityStat::Speed, tuning.speed)
        * (1.0 + tuning.speed_per_level * levels_above_first);
    let stun_ms = (ability.boosted(AbilityStat::Duration, tuning.stun_ms as f64)
        * (1.0 + tuning.stun_per_level * levels_above_first))
        .round() as u64;

    let effects = vec![
        HitEffect::Damage {
            amount: ability.boosted(AbilityStat::Strength, tuning.damage),
        },
        HitEffect::Apply(Effect::new(
            EffectKind::Stun,
            EffectDuration::Timed(stun_ms),
            cast.now,
        )),
        HitEffect::Pull {
            toward: cast.origin,
            speed: tuning.pull_speed,
            min_ms: stun_ms,
        },
    ];

    state.spawn_projectile(ProjectileSpec {
        owner: cast.caster,
        team: cast.team,
        kind: ability.kind(),
        origin: aim.origin,
        direction: aim.direction,
        speed,
        radius: ability.boosted(AbilityStat::Radius, tuning.projectile_radius),
        aoe_radius: None,
        bound: ProjectileBound::Range {
            start: aim.origin,
            range,
        },
        duration: EffectDuration::Infinite,
        collides: true,
        visible: true,
        effects,
        zone: None,
    });
    Ok(())
}
