//! Voluntary movement: heroes walking to their move target and minions
//! walking their lane.
//!
//! Stunned combatants and combatants under forced movement do not walk.
//! Positions are clamped to the map after every step.

use crate::config::GameplayConfig;
use crate::state::{CombatantKind, GameState};
use crate::stats::StatKind;

pub fn update_movement(state: &mut GameState, config: &GameplayConfig, dt: u64) {
    let now = state.game_time;
    let seconds = dt as f64 / 1_000.0;

    for id in state.combatant_ids() {
        let Some(combatant) = state.combatant(id) else {
            continue;
        };
        if !combatant.is_alive()
            || combatant.is_stunned(now)
            || combatant.is_moving_forcibly(now)
        {
            continue;
        }
        let target = match &combatant.kind {
            CombatantKind::Hero(hero) => hero.move_target,
            CombatantKind::Minion(minion) => {
                let engaged = combatant.attack.wind_up.is_some()
                    || state
                        .nearest_enemy_within(
                            combatant.team,
                            combatant.position,
                            combatant.stat(StatKind::AttackRadius),
                        )
                        .is_some();
                if engaged { None } else { minion.waypoint }
            }
            CombatantKind::Structure(_) => None,
        };
        let Some(target) = target else {
            continue;
        };

        let step = combatant.stat(StatKind::MoveSpeed) * seconds;
        let (position, arrived) = combatant.position.step_toward(target, step);
        let Some(combatant) = state.combatant_mut(id) else {
            continue;
        };
        combatant.position = config.map.clamp(position);
        if arrived {
            match &mut combatant.kind {
                CombatantKind::Hero(hero) => hero.move_target = None,
                CombatantKind::Minion(minion) => minion.waypoint = None,
                CombatantKind::Structure(_) => {}
            }
        }
    }
}
