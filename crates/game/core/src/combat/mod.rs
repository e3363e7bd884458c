//! Combat resolution: damage and armor, deaths, auto-attacks, collision,
//! projectiles and zones.

pub mod attack;
pub mod collision;
pub mod damage;
pub mod death;
pub mod projectile;
pub mod zone;

pub use attack::update_auto_attacks;
pub use collision::resolve_collisions;
pub use damage::{DamageKind, DamageReport, damage_combatant, mitigate};
pub use death::{kill, process_respawns, remove_dead};
pub use projectile::update_projectiles;
pub use zone::update_zones;

use crate::ability::travel_ms;
use crate::config::GameplayConfig;
use crate::effect::{Effect, EffectDuration, EffectKind, MoveEffect, attach_effect};
use crate::state::{EntityId, GameState, HitEffect, Team};

/// Applies `effects` in order to `target` on behalf of `owner`.
///
/// Damage is ability damage. Effect templates and pulls are attached stamped
/// with the current game time.
pub(crate) fn apply_hit_effects(
    state: &mut GameState,
    config: &GameplayConfig,
    owner: EntityId,
    target: EntityId,
    effects: &[HitEffect],
) {
    let now = state.game_time;
    for effect in effects {
        match effect {
            HitEffect::Damage { amount } => {
                if let Err(err) = damage_combatant(
                    state,
                    config,
                    target,
                    *amount,
                    owner,
                    DamageKind::Ability,
                    false,
                ) {
                    tracing::warn!(%owner, %target, %err, "hit damage failed");
                }
            }
            HitEffect::Apply(template) => {
                if let Some(combatant) = state.combatant_mut(target) {
                    if combatant.is_alive() {
                        attach_effect(combatant, template.stamped(now));
                    }
                }
            }
            HitEffect::Pull {
                toward,
                speed,
                min_ms,
            } => {
                let Some(combatant) = state.combatant_mut(target) else {
                    continue;
                };
                if !combatant.is_alive() || combatant.is_structure() {
                    continue;
                }
                let distance = combatant.position.distance(*toward);
                let duration = EffectDuration::Timed(travel_ms(distance, *speed).max(*min_ms));
                let pull = EffectKind::Move(MoveEffect {
                    target: *toward,
                    speed: *speed,
                });
                attach_effect(
                    combatant,
                    Effect::new(EffectKind::NoCollision, duration, now),
                );
                attach_effect(combatant, Effect::new(pull, duration, now));
            }
        }
    }
}

/// Whether the owning team of a hazard still has a combatant behind it.
pub(crate) fn owner_team(state: &GameState, owner: EntityId) -> Option<Team> {
    state.combatant(owner).map(|combatant| combatant.team)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::{AbilityKind, MOVE_GRACE_MS};
    use crate::effect::EffectType;
    use crate::state::{Position, StructureKind};

    fn pull_duration(state: &GameState, id: EntityId) -> Option<EffectDuration> {
        state
            .combatant(id)
            .unwrap()
            .effects
            .iter()
            .find(|effect| effect.effect_type() == EffectType::Move)
            .map(|effect| effect.duration)
    }

    #[test]
    fn pull_lasts_travel_time_from_hit_point() {
        let config = GameplayConfig::default();
        let mut state = GameState::new(4);
        let owner = state.spawn_hero(
            &config,
            Team::Blue,
            AbilityKind::Hookshot,
            Position::new(100.0, 500.0),
        );
        let far = state.spawn_hero(
            &config,
            Team::Red,
            AbilityKind::Default,
            Position::new(800.0, 500.0),
        );
        let near = state.spawn_hero(
            &config,
            Team::Red,
            AbilityKind::Default,
            Position::new(170.0, 500.0),
        );
        let turret = state.spawn_structure(
            &config,
            Team::Red,
            StructureKind::Turret,
            Position::new(400.0, 500.0),
        );
        state.game_time = 2_000;
        let pull = [HitEffect::Pull {
            toward: Position::new(100.0, 500.0),
            speed: 700.0,
            min_ms: 800,
        }];

        for target in [far, near, turret] {
            apply_hit_effects(&mut state, &config, owner, target, &pull);
        }

        // 700 units at 700/s.
        assert_eq!(
            pull_duration(&state, far),
            Some(EffectDuration::Timed(1_000 + MOVE_GRACE_MS))
        );
        let far_effects = &state.combatant(far).unwrap().effects;
        assert!(far_effects.iter().all(|effect| effect.applied_at == 2_000));
        assert!(state.combatant(far).unwrap().has_effect(EffectType::NoCollision, 2_000));
        // 70 units would take 350ms; the floor wins.
        assert_eq!(pull_duration(&state, near), Some(EffectDuration::Timed(800)));
        assert!(state.combatant(turret).unwrap().effects.is_empty());
    }
}
