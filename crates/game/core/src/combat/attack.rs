//! Auto-attacks.
//!
//! An attack starts once `now >= attack.ready_at` and a target is found,
//! then lands after the wind-up if the target is still a live enemy in
//! range. A target lost during the wind-up cancels the attack without
//! consuming the attack timer.

use super::damage::{DamageKind, damage_combatant};
use crate::config::GameplayConfig;
use crate::effect::EffectType;
use crate::state::{AttackState, Combatant, EntityId, GameState, WindUp};
use crate::stats::StatKind;

pub fn update_auto_attacks(state: &mut GameState, config: &GameplayConfig) {
    let ids = state.combatant_ids();
    for id in ids {
        update_attacker(state, config, id);
    }
}

fn update_attacker(state: &mut GameState, config: &GameplayConfig, id: EntityId) {
    let now = state.game_time;
    let Some(attacker) = state.combatant(id) else {
        return;
    };
    if !attacker.is_alive() || attacker.stat(StatKind::AttackStrength) <= 0.0 {
        return;
    }
    if attacker.is_stunned(now) {
        if let Some(attacker) = state.combatant_mut(id) {
            attacker.attack.wind_up = None;
        }
        return;
    }

    let AttackState { ready_at, wind_up, .. } = attacker.attack;
    let wind_up = match wind_up {
        Some(wind_up) => wind_up,
        None => {
            if now < ready_at {
                return;
            }
            let Some(target) = select_target(state, attacker) else {
                return;
            };
            let wind_up = WindUp {
                target,
                started_at: now,
            };
            if let Some(attacker) = state.combatant_mut(id) {
                attacker.attack.wind_up = Some(wind_up);
            }
            wind_up
        }
    };

    let Some(attacker) = state.combatant(id) else {
        return;
    };
    if !in_reach(state, attacker, wind_up.target) {
        if let Some(attacker) = state.combatant_mut(id) {
            attacker.attack.wind_up = None;
        }
        return;
    }
    let wind_up_ms = attacker.stat(StatKind::WindUp).round() as u64;
    if now < wind_up.started_at + wind_up_ms {
        return;
    }

    let strength = attacker.stat(StatKind::AttackStrength);
    let attack_speed = attacker.stat(StatKind::AttackSpeed);
    if let Some(attacker) = state.combatant_mut(id) {
        attacker.attack.wind_up = None;
        attacker.attack.last_attack_at = Some(now);
        attacker.attack.ready_at = if attack_speed > 0.0 {
            now + (1_000.0 / attack_speed).round() as u64
        } else {
            u64::MAX
        };
    }
    if let Err(err) = damage_combatant(
        state,
        config,
        wind_up.target,
        strength,
        id,
        DamageKind::AutoAttack,
        false,
    ) {
        tracing::warn!(attacker = %id, %err, "auto-attack failed");
    }
}

/// Live enemy within `attack_radius + target.size` of the attacker.
fn in_reach(state: &GameState, attacker: &Combatant, target: EntityId) -> bool {
    let Some(target) = state.combatant(target) else {
        return false;
    };
    target.is_alive()
        && target.team != attacker.team
        && attacker.position.distance(target.position)
            <= attacker.stat(StatKind::AttackRadius) + target.size()
}

/// A live taunter overrides normal targeting; otherwise the nearest enemy in
/// reach, skipping minions while a hunter effect is active.
fn select_target(state: &GameState, attacker: &Combatant) -> Option<EntityId> {
    let now = state.game_time;
    if let Some(taunter) = attacker.taunted_by(now) {
        if state.is_valid_target(taunter, attacker.team) {
            return in_reach(state, attacker, taunter).then_some(taunter);
        }
    }

    let hunter = attacker.has_effect(EffectType::Hunter, now);
    let radius = attacker.stat(StatKind::AttackRadius);
    state
        .enemies_within(attacker.team, attacker.position, radius)
        .into_iter()
        .filter(|(id, _)| {
            !hunter || state.combatant(*id).is_some_and(|target| !target.is_minion())
        })
        .fold(None, |best: Option<(EntityId, f64)>, (id, distance)| match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((id, distance)),
        })
        .map(|(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::AbilityKind;
    use crate::effect::{Effect, EffectDuration, EffectKind, attach_effect};
    use crate::state::{MinionKind, Position, Team};

    struct Fight {
        state: GameState,
        config: GameplayConfig,
    }

    impl Fight {
        fn new() -> Self {
            Self {
                state: GameState::new(6),
                config: GameplayConfig::default(),
            }
        }

        fn hero(&mut self, team: Team, x: f64) -> EntityId {
            self.state.spawn_hero(
                &self.config,
                team,
                AbilityKind::Default,
                Position::new(x, 500.0),
            )
        }

        fn minion(&mut self, team: Team, x: f64) -> EntityId {
            self.state.spawn_minion(
                &self.config,
                team,
                MinionKind::Warrior,
                Position::new(x, 500.0),
                false,
                None,
            )
        }

        fn run_until(&mut self, time: u64) {
            while self.state.game_time < time {
                self.state.game_time += 50;
                update_auto_attacks(&mut self.state, &self.config);
            }
        }

        fn health(&self, id: EntityId) -> f64 {
            self.state.combatant(id).unwrap().health
        }
    }

    #[test]
    fn attack_lands_after_wind_up() {
        let mut fight = Fight::new();
        let attacker = fight.hero(Team::Blue, 500.0);
        let target = fight.hero(Team::Red, 600.0);
        let full = fight.health(target);
        let wind_up = fight.config.heroes.wind_up_ms as u64;

        fight.run_until(wind_up);
        // Started at t=50, lands at 50 + wind-up.
        assert_eq!(fight.health(target), full);
        fight.run_until(wind_up + 50);
        assert!(fight.health(target) < full);
        assert_eq!(
            fight.state.combatant(attacker).unwrap().attack.ready_at,
            wind_up + 50 + 1_000
        );
    }

    #[test]
    fn target_leaving_range_cancels_wind_up() {
        let mut fight = Fight::new();
        let attacker = fight.hero(Team::Blue, 500.0);
        let target = fight.hero(Team::Red, 600.0);
        let full = fight.health(target);
        fight.run_until(100);
        assert!(fight.state.combatant(attacker).unwrap().attack.wind_up.is_some());

        fight.state.combatant_mut(target).unwrap().position = Position::new(1_500.0, 500.0);
        fight.run_until(600);
        assert_eq!(fight.health(target), full);
        assert!(fight.state.combatant(attacker).unwrap().attack.wind_up.is_none());
    }

    #[test]
    fn taunt_forces_target() {
        let mut fight = Fight::new();
        let attacker = fight.hero(Team::Blue, 500.0);
        let near = fight.minion(Team::Red, 530.0);
        let taunter = fight.hero(Team::Red, 620.0);
        attach_effect(
            fight.state.combatant_mut(attacker).unwrap(),
            Effect::new(
                EffectKind::Taunt { taunter },
                EffectDuration::Timed(5_000),
                0,
            ),
        );
        let near_full = fight.health(near);
        fight.run_until(400);
        assert_eq!(fight.health(near), near_full);
        assert!(fight.health(taunter) < fight.state.combatant(taunter).unwrap().max_health());
    }

    #[test]
    fn hunter_ignores_minions() {
        let mut fight = Fight::new();
        let attacker = fight.hero(Team::Blue, 500.0);
        let minion = fight.minion(Team::Red, 520.0);
        let hero = fight.hero(Team::Red, 640.0);
        attach_effect(
            fight.state.combatant_mut(attacker).unwrap(),
            Effect::new(EffectKind::Hunter, EffectDuration::Timed(5_000), 0),
        );
        let minion_full = fight.health(minion);
        fight.run_until(400);
        assert_eq!(fight.health(minion), minion_full);
        assert!(fight.health(hero) < fight.state.combatant(hero).unwrap().max_health());
    }

    #[test]
    fn respawning_heroes_are_not_targeted() {
        let mut fight = Fight::new();
        fight.hero(Team::Blue, 500.0);
        let target = fight.hero(Team::Red, 600.0);
        fight.state.combatant_mut(target).unwrap().life =
            crate::state::LifeState::Respawning { respawn_at: 99_999 };
        let before = fight.health(target);
        fight.run_until(2_000);
        assert_eq!(fight.health(target), before);
    }
}
