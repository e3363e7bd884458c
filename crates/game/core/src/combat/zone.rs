//! Zone ticking and expiry.

use super::{apply_hit_effects, owner_team};
use crate::config::GameplayConfig;
use crate::state::{EntityId, GameState};

/// Expires finished zones, then fires every zone whose tick is due on all
/// live enemies within `radius + size` of its center.
pub fn update_zones(state: &mut GameState, config: &GameplayConfig) {
    let now = state.game_time;
    state.zones.retain(|_, zone| !zone.is_expired(now));

    let ids: Vec<EntityId> = state.zones.keys().copied().collect();
    for id in ids {
        let Some(zone) = state.zones.get(&id) else {
            continue;
        };
        if !zone.tick_due(now) {
            continue;
        }
        if owner_team(state, zone.owner).is_none() {
            tracing::warn!(zone = %id, owner = %zone.owner, "zone owner missing, dropping zone");
            state.zones.remove(&id);
            continue;
        }

        let owner = zone.owner;
        let effects = zone.effects.clone();
        let targets: Vec<EntityId> = state
            .enemies_within(zone.team, zone.position, zone.radius)
            .into_iter()
            .map(|(target, _)| target)
            .collect();
        if let Some(zone) = state.zones.get_mut(&id) {
            zone.last_tick += zone.tick_rate.max(1);
        }

        tracing::trace!(zone = %id, hits = targets.len(), "zone tick");
        for target in targets {
            apply_hit_effects(state, config, owner, target, &effects);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::AbilityKind;
    use crate::state::{HitEffect, MinionKind, Position, Team, ZoneDescriptor};

    fn setup() -> (GameState, GameplayConfig, EntityId) {
        let config = GameplayConfig::default();
        let mut state = GameState::new(4);
        let owner = state.spawn_hero(
            &config,
            Team::Blue,
            AbilityKind::Pyromancer,
            Position::new(100.0, 100.0),
        );
        (state, config, owner)
    }

    fn descriptor() -> ZoneDescriptor {
        ZoneDescriptor {
            kind: AbilityKind::Pyromancer,
            radius: 50.0,
            duration_ms: 1_000,
            tick_rate: 250,
            effects: vec![HitEffect::Damage { amount: 10.0 }],
        }
    }

    #[test]
    fn ticks_on_boundaries_and_expires() {
        let (mut state, config, owner) = setup();
        let enemy = state.spawn_minion(
            &config,
            Team::Red,
            MinionKind::Archer,
            Position::new(520.0, 500.0),
            false,
            None,
        );
        let zone = state.spawn_zone(
            owner,
            Team::Blue,
            Position::new(500.0, 500.0),
            &descriptor(),
        );
        let start = state.combatant(enemy).unwrap().health;

        state.game_time = 249;
        update_zones(&mut state, &config);
        assert_eq!(state.combatant(enemy).unwrap().health, start);

        for time in [250, 500, 750] {
            state.game_time = time;
            update_zones(&mut state, &config);
        }
        assert_eq!(state.combatant(enemy).unwrap().health, start - 30.0);

        state.game_time = 1_000;
        update_zones(&mut state, &config);
        assert!(!state.zones.contains_key(&zone));
        assert_eq!(state.combatant(enemy).unwrap().health, start - 30.0);
    }

    #[test]
    fn radius_includes_target_size() {
        let (mut state, config, owner) = setup();
        let size = config.minions.archer.size;
        let edge = state.spawn_minion(
            &config,
            Team::Red,
            MinionKind::Archer,
            Position::new(550.0 + size, 500.0),
            false,
            None,
        );
        let outside = state.spawn_minion(
            &config,
            Team::Red,
            MinionKind::Archer,
            Position::new(500.0, 551.0 + size),
            false,
            None,
        );
        let ally = state.spawn_minion(
            &config,
            Team::Blue,
            MinionKind::Archer,
            Position::new(500.0, 500.0),
            false,
            None,
        );
        state.spawn_zone(
            owner,
            Team::Blue,
            Position::new(500.0, 500.0),
            &descriptor(),
        );

        state.game_time = 250;
        update_zones(&mut state, &config);

        let full = config.minions.archer.max_health;
        assert_eq!(state.combatant(edge).unwrap().health, full - 10.0);
        assert_eq!(state.combatant(outside).unwrap().health, full);
        assert_eq!(state.combatant(ally).unwrap().health, full);
    }
}
