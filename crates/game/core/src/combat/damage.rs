//! Damage and armor.
//!
//! ```text
//! final = raw * (1 - armor / (armor + 100))
//! ```
//!
//! Negative armor amplifies damage. Armor is floored at
//! `combat.armor_floor` (> -100) before the formula so the denominator never
//! reaches zero.

use super::death;
use crate::config::GameplayConfig;
use crate::engine::SimError;
use crate::state::{EntityId, GameState};
use crate::stats::StatKind;

/// Source kind of incoming damage; selects the armor that mitigates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DamageKind {
    /// Mitigated by bullet armor; the only kind that can be reflected.
    AutoAttack,
    /// Mitigated by ability armor.
    Ability,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DamageReport {
    /// Health actually removed from the target.
    pub dealt: f64,
    pub killed: bool,
    /// Health removed from the attacker by reflection.
    pub reflected: f64,
}

/// Armor mitigation.
pub fn mitigate(raw: f64, armor: f64, armor_floor: f64) -> f64 {
    let armor = armor.max(armor_floor);
    raw * (1.0 - armor / (armor + 100.0))
}

/// Damages `target` on behalf of `source`.
///
/// `bypass_armor` deals true damage. Auto-attack damage against a target with
/// an active reflect sends `raw * percentage / 100` back to `source`; the
/// reflected hit itself is never reflected again.
pub fn damage_combatant(
    state: &mut GameState,
    config: &GameplayConfig,
    target: EntityId,
    raw: f64,
    source: EntityId,
    kind: DamageKind,
    bypass_armor: bool,
) -> Result<DamageReport, SimError> {
    apply_damage(state, config, target, raw, source, kind, bypass_armor, true)
}

#[allow(clippy::too_many_arguments)]
fn apply_damage(
    state: &mut GameState,
    config: &GameplayConfig,
    target_id: EntityId,
    raw: f64,
    source: EntityId,
    kind: DamageKind,
    bypass_armor: bool,
    reflectable: bool,
) -> Result<DamageReport, SimError> {
    let now = state.game_time;
    let target = state
        .combatant_mut(target_id)
        .ok_or(SimError::MissingEntity(target_id))?;
    if !target.is_alive() || raw.is_nan() || raw <= 0.0 {
        return Ok(DamageReport::default());
    }

    let amount = if bypass_armor {
        raw
    } else {
        let armor = match kind {
            DamageKind::AutoAttack => target.stat(StatKind::BulletArmor),
            DamageKind::Ability => target.stat(StatKind::AbilityArmor),
        };
        mitigate(raw, armor, config.combat.armor_floor)
    };
    let dealt = amount.min(target.health);
    target.health = (target.health - amount).max(0.0);
    target.last_damaged_at = Some(now);
    let killed = target.health <= 0.0;
    let reflect = match kind {
        DamageKind::AutoAttack if reflectable && source != target_id => {
            target.reflect_percentage(now)
        }
        _ => None,
    };

    if let Some(stats) = state.round_stats_mut(target_id) {
        stats.damage_taken += dealt;
    }
    if let Some(stats) = state.round_stats_mut(source) {
        stats.damage_dealt += dealt;
    }
    if killed {
        death::kill(state, config, target_id, Some(source));
    }

    let mut report = DamageReport {
        dealt,
        killed,
        reflected: 0.0,
    };
    if let Some(percentage) = reflect {
        let amount = raw * percentage / 100.0;
        match apply_damage(state, config, source, amount, target_id, kind, false, false) {
            Ok(reflected) => report.reflected = reflected.dealt,
            Err(err) => tracing::debug!(%target_id, %source, %err, "reflect skipped"),
        }
    }
    Ok(report)
}
