//! Thorndive: dash to a point, strike everything around the landing spot
//! with damage and a taunt, and harden up for a while afterwards.

use super::targeting::aim;
use super::{Ability, AbilityError, Cast, travel_ms};
use crate::config::{GameplayConfig, ThorndiveConfig};
use crate::effect::{Effect, EffectDuration, EffectKind, MoveEffect, StatModifier, attach_effect};
use crate::state::{GameState, HitEffect, ProjectileBound, ProjectileSpec};
use crate::stats::{AbilityStat, ModifierOp, StatKind};

pub(super) fn cast(
    ability: &Ability,
    tuning: &ThorndiveConfig,
    cast: &Cast,
    state: &mut GameState,
    config: &GameplayConfig,
) -> Result<(), AbilityError> {
    let range = ability.boosted(AbilityStat::Range, tuning.range);
    let aim = aim(cast.origin, cast.requested, range).ok_or(AbilityError::DegenerateTarget)?;
    let landing = config.map.clamp(aim.target);
    let speed = ability.boosted(AbilityStat::Speed, tuning.dash_speed);
    let dash_ms = travel_ms(aim.origin.distance(landing), speed);
    let buff = EffectDuration::Timed(
        ability.boosted_ms(AbilityStat::Duration, tuning.buff_duration_ms),
    );

    let caster_effects = [
        Effect::new(
            EffectKind::Move(MoveEffect {
                target: landing,
                speed,
            }),
            EffectDuration::Timed(dash_ms),
            cast.now,
        ),
        Effect::new(
            EffectKind::NoCollision,
            EffectDuration::Timed(dash_ms),
            cast.now,
        ),
        Effect::new(
            EffectKind::StatMod(StatModifier::new(
                StatKind::BulletArmor,
                ModifierOp::Relative,
                tuning.bullet_armor,
            )),
            buff,
            cast.now,
        ),
        Effect::new(
            EffectKind::StatMod(StatModifier::new(
                StatKind::AbilityArmor,
                ModifierOp::Relative,
                tuning.ability_armor,
            )),
            buff,
            cast.now,
        ),
        Effect::new(
            EffectKind::Reflect {
                percentage: tuning.reflect_percent,
            },
            buff,
            cast.now,
        ),
    ];

    // The taunt template is re-stamped when the strike lands.
    let strike = vec![
        HitEffect::Damage {
            amount: ability.boosted(AbilityStat::Strength, tuning.landing_damage),
        },
        HitEffect::Apply(Effect::new(
            EffectKind::Taunt {
                taunter: cast.caster,
            },
            EffectDuration::Timed(tuning.taunt_ms),
            cast.now,
        )),
    ];

    let caster = state
        .combatant_mut(cast.caster)
        .ok_or(AbilityError::CasterNotFound(cast.caster))?;
    for effect in caster_effects {
        attach_effect(caster, effect);
    }
    state.spawn_projectile(ProjectileSpec {
        owner: cast.caster,
        team: cast.team,
        kind: ability.kind(),
        origin: aim.origin,
        direction: aim.direction,
        speed,
        radius: 0.0,
        aoe_radius: Some(ability.boosted(AbilityStat::Radius, tuning.landing_radius)),
        bound: ProjectileBound::Destination(landing),
        duration: EffectDuration::Infinite,
        collides: false,
        visible: false,
        effects: strike,
        zone: None,
    });
    Ok(())
}
