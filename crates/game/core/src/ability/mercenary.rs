//! Mercenary: a bundle of self-buffs sharing one duration.

use super::{Ability, AbilityError, Cast};
use crate::config::MercenaryConfig;
use crate::effect::{Effect, EffectDuration, EffectKind, StatModifier, attach_effect};
use crate::state::GameState;
use crate::stats::{AbilityStat, ModifierOp, StatKind};

pub(super) fn cast(
    ability: &Ability,
    tuning: &MercenaryConfig,
    cast: &Cast,
    state: &mut GameState,
) -> Result<(), AbilityError> {
    let duration = EffectDuration::Timed(
        ability.boosted_ms(AbilityStat::Duration, tuning.duration_ms),
    );
    let strength = ability.boosted(AbilityStat::Strength, tuning.attack_strength_percent);
    let radius = ability.boosted(AbilityStat::Range, tuning.attack_radius);

    let kinds = [
        stat(StatKind::AttackStrength, ModifierOp::Percent, strength),
        stat(
            StatKind::MoveSpeed,
            ModifierOp::Percent,
            tuning.move_speed_percent,
        ),
        stat(StatKind::AttackRadius, ModifierOp::Absolute, radius),
        stat(StatKind::WindUp, ModifierOp::Absolute, tuning.wind_up_ms),
        stat(
            StatKind::BulletArmor,
            ModifierOp::Relative,
            tuning.bullet_armor,
        ),
        stat(
            StatKind::AbilityArmor,
            ModifierOp::Relative,
            tuning.ability_armor,
        ),
        EffectKind::NoCollision,
        EffectKind::Hunter,
    ];

    let caster = state
        .combatant_mut(cast.caster)
        .ok_or(AbilityError::CasterNotFound(cast.caster))?;
    for kind in kinds {
        attach_effect(caster, Effect::new(kind, duration, cast.now));
    }
    Ok(())
}

fn stat(stat: StatKind, op: ModifierOp, amount: f64) -> EffectKind {
    EffectKind::StatMod(StatModifier::new(stat, op, amount))
}
