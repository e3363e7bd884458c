//! Deaths, kill experience, respawns and match end.

use crate::config::GameplayConfig;
use crate::event::GameEvent;
use crate::progression::grant_experience;
use crate::state::{
    AttackState, CombatantCategory, EntityId, GameState, LifeState, Position, Team,
};

/// Transitions `victim` out of play and runs the kill pipeline.
///
/// Heroes start respawning; minions and structures are marked dead and
/// removed by [`remove_dead`] at the end of the tick.
pub fn kill(
    state: &mut GameState,
    config: &GameplayConfig,
    victim_id: EntityId,
    killer: Option<EntityId>,
) {
    let now = state.game_time;
    let Some(victim) = state.combatant_mut(victim_id) else {
        return;
    };
    if !victim.is_alive() {
        return;
    }

    let category = victim.category();
    let team = victim.team;
    let position = victim.position;
    let level = victim.level();

    victim.health = 0.0;
    victim.effects.clear();
    victim.attack = AttackState::default();
    let life = match victim.hero_mut() {
        Some(hero) => {
            hero.move_target = None;
            LifeState::Respawning {
                respawn_at: now + config.combat.respawn_duration(level),
            }
        }
        None => LifeState::Dead,
    };
    victim.life = life;

    if let Some(stats) = state.round_stats_mut(victim_id) {
        stats.deaths += 1;
    }
    if let Some(stats) = killer.and_then(|killer| state.round_stats_mut(killer)) {
        stats.record_kill(category);
    }
    state.emit(GameEvent::CombatantKilled {
        victim: victim_id,
        category,
        killer,
    });
    match category {
        CombatantCategory::Warrior | CombatantCategory::Archer => {
            tracing::debug!(victim = %victim_id, ?killer, %category, "minion killed");
        }
        _ => tracing::info!(victim = %victim_id, ?killer, %category, "combatant killed"),
    }

    award_kill_experience(state, config, team, position, category, level, killer);

    if category == CombatantCategory::Cradle && state.winner.is_none() {
        let winner = team.opponent();
        state.winner = Some(winner);
        state.emit(GameEvent::MatchWon { team: winner });
        tracing::info!(%winner, "match won");
    }
}

/// Splits kill experience evenly between every live enemy hero near the
/// victim. The killing hero always shares and earns the last-hit bonus on
/// top.
fn award_kill_experience(
    state: &mut GameState,
    config: &GameplayConfig,
    victim_team: Team,
    victim_position: Position,
    category: CombatantCategory,
    victim_level: u32,
    killer: Option<EntityId>,
) {
    let value = config.combat.kill_experience.value(category, victim_level);
    if value <= 0.0 {
        return;
    }
    let radius = config.combat.experience_share_radius;
    let killer = killer.filter(|id| {
        state
            .combatant(*id)
            .is_some_and(|killer| killer.is_hero() && killer.team != victim_team)
    });

    let mut sharers: Vec<EntityId> = state
        .combatants
        .values()
        .filter(|c| c.is_hero() && c.is_alive() && c.team != victim_team)
        .filter(|c| c.position.distance(victim_position) <= radius)
        .map(|c| c.id)
        .collect();
    if let Some(killer) = killer {
        if !sharers.contains(&killer) {
            sharers.push(killer);
        }
    }
    if sharers.is_empty() {
        return;
    }

    let share = value / sharers.len() as f64;
    for hero in sharers {
        let bonus = if Some(hero) == killer {
            value * config.combat.last_hit_bonus
        } else {
            0.0
        };
        grant_experience(state, config, hero, share + bonus);
    }
}

/// Brings back every hero whose respawn time has come, at full health on
/// its team's spawn point.
pub fn process_respawns(state: &mut GameState, config: &GameplayConfig) {
    let now = state.game_time;
    let due: Vec<EntityId> = state
        .combatants
        .values()
        .filter(|c| matches!(c.life, LifeState::Respawning { respawn_at } if now >= respawn_at))
        .map(|c| c.id)
        .collect();

    for id in due {
        let Some(hero) = state.combatant_mut(id) else {
            continue;
        };
        let position = config.map.spawn_point(hero.team);
        hero.life = LifeState::Alive;
        hero.position = position;
        hero.health = hero.max_health();
        hero.last_damaged_at = None;
        hero.attack = AttackState {
            ready_at: now,
            ..AttackState::default()
        };
        state.emit(GameEvent::HeroRespawned { hero: id, position });
        tracing::debug!(hero = %id, %position, "hero respawned");
    }
}

/// Drops dead minions and structures from the arena.
pub fn remove_dead(state: &mut GameState) {
    state
        .combatants
        .retain(|_, combatant| combatant.life != LifeState::Dead);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::AbilityKind;
    use crate::state::{MinionKind, StructureKind};

    #[test]
    fn hero_respawn_time_scales_with_level() {
        let config = GameplayConfig::default();
        let mut state = GameState::new(1);
        let hero = state.spawn_hero(
            &config,
            Team::Red,
            AbilityKind::Default,
            Position::new(500.0, 500.0),
        );
        state.hero_mut(hero).unwrap().level = 3;
        state.game_time = 10_000;

        kill(&mut state, &config, hero, None);

        let expected =
            10_000 + config.combat.respawn_base_ms + 2 * config.combat.respawn_per_level_ms;
        assert_eq!(
            state.combatant(hero).unwrap().life,
            LifeState::Respawning { respawn_at: expected }
        );
        assert_eq!(state.round_stats[&hero].deaths, 1);

        state.game_time = expected;
        process_respawns(&mut state, &config);
        let respawned = state.combatant(hero).unwrap();
        assert!(respawned.is_alive());
        assert_eq!(respawned.position, config.map.red_spawn);
        assert_eq!(respawned.health, respawned.max_health());
    }

    #[test]
    fn kill_experience_is_shared_with_last_hit_bonus() {
        let config = GameplayConfig::default();
        let mut state = GameState::new(1);
        let killer = state.spawn_hero(
            &config,
            Team::Blue,
            AbilityKind::Default,
            Position::new(100.0, 100.0),
        );
        let helper = state.spawn_hero(
            &config,
            Team::Blue,
            AbilityKind::Default,
            Position::new(150.0, 100.0),
        );
        let far = state.spawn_hero(
            &config,
            Team::Blue,
            AbilityKind::Default,
            Position::new(2_000.0, 100.0),
        );
        let minion = state.spawn_minion(
            &config,
            Team::Red,
            MinionKind::Warrior,
            Position::new(120.0, 100.0),
            false,
            None,
        );

        kill(&mut state, &config, minion, Some(killer));

        let value = config.combat.kill_experience.warrior;
        let share = value / 2.0;
        assert_eq!(
            state.hero(killer).unwrap().experience,
            share + value * config.combat.last_hit_bonus
        );
        assert_eq!(state.hero(helper).unwrap().experience, share);
        assert_eq!(state.hero(far).unwrap().experience, 0.0);
        assert_eq!(state.round_stats[&killer].minion_kills, 1);

        remove_dead(&mut state);
        assert!(state.combatant(minion).is_none());
    }

    #[test]
    fn cradle_death_ends_the_match() {
        let config = GameplayConfig::default();
        let mut state = GameState::new(1);
        let cradle = state.spawn_structure(
            &config,
            Team::Red,
            StructureKind::Cradle,
            Position::new(2_800.0, 750.0),
        );
        kill(&mut state, &config, cradle, None);
        assert_eq!(state.winner, Some(Team::Blue));
        assert!(
            state
                .take_events()
                .contains(&GameEvent::MatchWon { team: Team::Blue })
        );
    }
}
