//! Stat system.
//!
//! Combatants store base values only; the effective value of a stat is
//! always computed on read by folding the matching stat-modifier effects
//! (permanent rewards first, then temporary effects) over the base value.
//!
//! ```text
//! [ Base stat ] → [ Permanent StatMods ] → [ Temporary StatMods ] → [ Floor ]
//! ```
//!
//! Armor stats may end negative and amplify incoming damage; every other
//! stat is floored at zero.

pub mod bonus;

pub use bonus::{ModifierOp, StatFloor, fold_modifiers};

use crate::effect::{Effect, EffectKind};

/// Combatant stats that effects can modify.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatKind {
    MaxHealth,
    AttackRadius,
    AttackStrength,
    /// Attacks per second.
    AttackSpeed,
    /// Milliseconds between attack start and damage.
    WindUp,
    MoveSpeed,
    BulletArmor,
    AbilityArmor,
}

impl StatKind {
    /// Floor applied after all modifiers.
    pub const fn floor(self) -> StatFloor {
        match self {
            StatKind::BulletArmor | StatKind::AbilityArmor => StatFloor::Unbounded,
            _ => StatFloor::NON_NEGATIVE,
        }
    }
}

/// Ability tunables that rewards can boost.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AbilityStat {
    /// Damage or ability power.
    Strength,
    Range,
    Cooldown,
    /// Projectile, dash or pull speed.
    Speed,
    /// Projectile, AOE or zone radius.
    Radius,
    /// Stun, buff, taunt or zone duration.
    Duration,
}

/// Applies every stat-modifier effect for `stat` to `base`, in list order.
///
/// Non-matching effects are ignored. Armor may go negative; everything else
/// is clamped to a minimum of zero.
pub fn apply_stat_modifications<'a>(
    stat: StatKind,
    base: f64,
    effects: impl IntoIterator<Item = &'a Effect>,
) -> f64 {
    let modifiers = effects.into_iter().filter_map(|effect| match &effect.kind {
        EffectKind::StatMod(modifier) if modifier.stat == stat => {
            Some((modifier.op, modifier.amount))
        }
        _ => None,
    });
    fold_modifiers(base, modifiers, stat.floor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::{EffectDuration, StatModifier};

    fn stat_mod(stat: StatKind, op: ModifierOp, amount: f64) -> Effect {
        Effect::new(
            EffectKind::StatMod(StatModifier { stat, op, amount }),
            EffectDuration::Infinite,
            0,
        )
    }

    #[test]
    fn ignores_other_stats_and_effect_kinds() {
        let effects = [
            stat_mod(StatKind::MoveSpeed, ModifierOp::Relative, 100.0),
            Effect::new(EffectKind::Stun, EffectDuration::Timed(100), 0),
            stat_mod(StatKind::AttackStrength, ModifierOp::Percent, 50.0),
        ];
        assert_eq!(
            apply_stat_modifications(StatKind::AttackStrength, 20.0, &effects),
            30.0
        );
    }

    #[test]
    fn armor_can_go_negative() {
        let effects = [stat_mod(StatKind::BulletArmor, ModifierOp::Relative, -80.0)];
        assert_eq!(
            apply_stat_modifications(StatKind::BulletArmor, 30.0, &effects),
            -50.0
        );
    }

    #[test]
    fn other_stats_clamp_at_zero() {
        let effects = [stat_mod(StatKind::MoveSpeed, ModifierOp::Relative, -500.0)];
        assert_eq!(
            apply_stat_modifications(StatKind::MoveSpeed, 200.0, &effects),
            0.0
        );
    }
}
