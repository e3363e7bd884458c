//! Combatant-vs-combatant overlap resolution.
//!
//! Two combatants overlap when their centers are closer than
//! `(size1 + size2) * collision_threshold`. Overlaps are pushed apart until
//! the separation equals that threshold: structures never move, a structure
//! pushes a unit the full overlap, and two units split it so the bigger one
//! moves less.

use std::f64::consts::TAU;

use crate::config::GameplayConfig;
use crate::effect::EffectType;
use crate::rng::context;
use crate::state::{EntityId, GameState, Position};

/// Resolves every overlapping pair of live, collidable combatants once, in
/// id order.
pub fn resolve_collisions(state: &mut GameState, config: &GameplayConfig) {
    let now = state.game_time;
    let ids: Vec<EntityId> = state
        .combatants
        .values()
        .filter(|c| c.is_alive() && !c.has_effect(EffectType::NoCollision, now))
        .map(|c| c.id)
        .collect();

    for (i, &a) in ids.iter().enumerate() {
        for &b in &ids[i + 1..] {
            resolve_pair(state, config, a, b);
        }
    }
}

fn resolve_pair(state: &mut GameState, config: &GameplayConfig, a: EntityId, b: EntityId) {
    let (Some(first), Some(second)) = (state.combatant(a), state.combatant(b)) else {
        return;
    };
    if first.is_structure() && second.is_structure() {
        return;
    }
    let (size_a, size_b) = (first.size(), second.size());
    let (pos_a, pos_b) = (first.position, second.position);
    let (structure_a, structure_b) = (first.is_structure(), second.is_structure());

    let threshold = (size_a + size_b) * config.combat.collision_threshold;
    let distance = pos_a.distance(pos_b);
    if distance >= threshold {
        return;
    }

    // Direction from a to b; identical centers get a random one.
    let direction = (pos_b - pos_a).normalized().unwrap_or_else(|| {
        let angle = state.roll_unit(a, context::COLLISION_JITTER) * TAU;
        Position::new(angle.cos(), angle.sin())
    });
    let overlap = threshold - distance;

    let (push_a, push_b) = match (structure_a, structure_b) {
        (true, _) => (0.0, overlap),
        (_, true) => (overlap, 0.0),
        _ => {
            let total = size_a + size_b;
            (overlap * size_b / total, overlap * size_a / total)
        }
    };

    if let Some(first) = state.combatant_mut(a) {
        first.position = config.map.clamp(pos_a - direction.scale(push_a));
    }
    if let Some(second) = state.combatant_mut(b) {
        second.position = config.map.clamp(pos_b + direction.scale(push_b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::AbilityKind;
    use crate::effect::{Effect, EffectDuration, EffectKind, attach_effect};
    use crate::state::{MinionKind, StructureKind, Team};

    fn minion(state: &mut GameState, config: &GameplayConfig, x: f64, size: f64) -> EntityId {
        let id = state.spawn_minion(
            config,
            Team::Blue,
            MinionKind::Warrior,
            Position::new(x, 500.0),
            false,
            None,
        );
        state.combatant_mut(id).unwrap().stats.size = size;
        id
    }

    fn separation(state: &GameState, a: EntityId, b: EntityId) -> f64 {
        state
            .combatant(a)
            .unwrap()
            .position
            .distance(state.combatant(b).unwrap().position)
    }

    #[test]
    fn units_are_pushed_to_threshold() {
        let config = GameplayConfig::default();
        let mut state = GameState::new(1);
        let a = minion(&mut state, &config, 500.0, 10.0);
        let b = minion(&mut state, &config, 510.0, 10.0);
        resolve_collisions(&mut state, &config);
        assert!((separation(&state, a, b) - 18.0).abs() < 1e-9);
        // Equal sizes split the overlap evenly.
        assert!((state.combatant(a).unwrap().position.x - 496.0).abs() < 1e-9);
    }

    #[test]
    fn bigger_unit_moves_less() {
        let config = GameplayConfig::default();
        let mut state = GameState::new(1);
        let small = minion(&mut state, &config, 500.0, 10.0);
        let big = minion(&mut state, &config, 510.0, 30.0);
        resolve_collisions(&mut state, &config);
        let small_moved = 500.0 - state.combatant(small).unwrap().position.x;
        let big_moved = state.combatant(big).unwrap().position.x - 510.0;
        assert!(big_moved < small_moved);
        assert!((separation(&state, small, big) - 36.0).abs() < 1e-9);
    }

    #[test]
    fn structures_never_move() {
        let config = GameplayConfig::default();
        let mut state = GameState::new(1);
        let turret = state.spawn_structure(
            &config,
            Team::Red,
            StructureKind::Turret,
            Position::new(500.0, 500.0),
        );
        let cradle = state.spawn_structure(
            &config,
            Team::Red,
            StructureKind::Cradle,
            Position::new(510.0, 500.0),
        );
        let hero = state.spawn_hero(
            &config,
            Team::Blue,
            AbilityKind::Default,
            Position::new(480.0, 500.0),
        );

        resolve_collisions(&mut state, &config);

        assert_eq!(state.combatant(turret).unwrap().position, Position::new(500.0, 500.0));
        assert_eq!(state.combatant(cradle).unwrap().position, Position::new(510.0, 500.0));
        let threshold = (config.structures.turret.size + config.heroes.size)
            * config.combat.collision_threshold;
        assert!(separation(&state, turret, hero) >= threshold - 1e-9);
    }

    #[test]
    fn identical_positions_are_jittered_apart() {
        let config = GameplayConfig::default();
        let mut state = GameState::new(1);
        let a = minion(&mut state, &config, 500.0, 10.0);
        let b = minion(&mut state, &config, 500.0, 10.0);
        resolve_collisions(&mut state, &config);
        let first = state.combatant(a).unwrap().position;
        assert!(first.x.is_finite() && first.y.is_finite());
        assert!((separation(&state, a, b) - 18.0).abs() < 1e-9);
    }

    #[test]
    fn no_collision_effect_opts_out() {
        let config = GameplayConfig::default();
        let mut state = GameState::new(1);
        let a = minion(&mut state, &config, 500.0, 10.0);
        let b = minion(&mut state, &config, 505.0, 10.0);
        attach_effect(
            state.combatant_mut(a).unwrap(),
            Effect::new(EffectKind::NoCollision, EffectDuration::Timed(1_000), 0),
        );
        resolve_collisions(&mut state, &config);
        assert_eq!(separation(&state, a, b), 5.0);
    }
}
