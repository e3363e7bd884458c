//! Per-tick effect processing: forced movement, burning ticks, expiry and
//! passive healing.

use super::{Effect, EffectKind, EffectType};
use crate::combat::{DamageKind, damage_combatant};
use crate::config::GameplayConfig;
use crate::state::{Combatant, EntityId, GameState};

/// Attaches `effect` to `combatant`.
///
/// Burning does not stack: while a burning effect is active a new one is
/// dropped. A new forced movement replaces any previous one, and structures
/// never accept forced movement. Returns whether the effect was attached.
pub fn attach_effect(combatant: &mut Combatant, effect: Effect) -> bool {
    let now = effect.applied_at;
    match effect.effect_type() {
        EffectType::Burning if combatant.has_effect(EffectType::Burning, now) => return false,
        EffectType::Move if combatant.is_structure() => return false,
        EffectType::Move => combatant
            .effects
            .retain(|existing| existing.effect_type() != EffectType::Move),
        _ => {}
    }
    combatant.effects.push(effect);
    true
}

/// Advances every live combatant's temporary effects by one tick.
///
/// Forced movement steps toward its target and ends on arrival, burning
/// deals its due ticks as true damage, and expired effects are removed.
/// Permanent reward effects are never touched here.
pub fn update_effects(state: &mut GameState, config: &GameplayConfig, dt: u64) {
    let now = state.game_time;
    let mut burns: Vec<(EntityId, f64, EntityId)> = Vec::new();

    for combatant in state.combatants.values_mut() {
        if !combatant.is_alive() {
            continue;
        }
        advance_forced_movement(combatant, config, dt);

        let max_health = combatant.max_health();
        for effect in &mut combatant.effects {
            if let EffectKind::Burning(burning) = &mut effect.kind {
                if burning.tick_rate == 0 {
                    continue;
                }
                while now.saturating_sub(burning.last_tick) >= burning.tick_rate {
                    burning.last_tick += burning.tick_rate;
                    burns.push((
                        combatant.id,
                        burning.percent_per_tick * max_health,
                        burning.source,
                    ));
                }
            }
        }

        combatant.effects.retain(|effect| !effect.is_expired(now));
    }

    for (target, amount, source) in burns {
        if let Err(err) = damage_combatant(
            state,
            config,
            target,
            amount,
            source,
            DamageKind::Ability,
            true,
        ) {
            tracing::warn!(%target, %err, "burn tick failed");
        }
    }
}

/// Steps the latest forced movement and removes it once the target is reached.
fn advance_forced_movement(combatant: &mut Combatant, config: &GameplayConfig, dt: u64) {
    if combatant.is_structure() {
        return;
    }
    let Some(index) = combatant
        .effects
        .iter()
        .rposition(|effect| effect.effect_type() == EffectType::Move)
    else {
        return;
    };
    let EffectKind::Move(movement) = combatant.effects[index].kind else {
        return;
    };
    let step = movement.speed * dt as f64 / 1_000.0;
    let (position, arrived) = combatant.position.step_toward(movement.target, step);
    combatant.position = config.map.clamp(position);
    if arrived {
        combatant.effects.remove(index);
    }
}

/// Heals every live non-structure combatant for this tick.
///
/// Out-of-combat regeneration starts once nothing has damaged the combatant
/// for `passive_heal_threshold_ms`; `PassiveHeal` effects heal regardless.
pub fn apply_passive_healing(state: &mut GameState, config: &GameplayConfig, dt: u64) {
    let now = state.game_time;
    let seconds = dt as f64 / 1_000.0;
    let combat = &config.combat;

    for combatant in state.combatants.values_mut() {
        if !combatant.is_alive() || combatant.is_structure() {
            continue;
        }
        let out_of_combat = combatant
            .last_damaged_at
            .is_none_or(|at| now.saturating_sub(at) >= combat.passive_heal_threshold_ms);
        let mut percent = if out_of_combat {
            combat.passive_heal_percent_per_second
        } else {
            0.0
        };
        percent += combatant
            .all_effects()
            .filter(|effect| effect.is_active(now))
            .filter_map(|effect| match effect.kind {
                EffectKind::PassiveHeal { percent_per_second } => Some(percent_per_second),
                _ => None,
            })
            .sum::<f64>();

        let amount = percent * combatant.max_health() * seconds;
        combatant.heal(amount);
    }
}
