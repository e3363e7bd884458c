//! Experience accrual and level-ups.
//!
//! `experience` is the running total for the match and `experience_needed`
//! the total at which the next level is reached. Reaching level `n` raises
//! the threshold by `n * level_up_multiplier`, so each level costs more
//! than the last.

use super::rewards::offer_chest;
use crate::config::{GameplayConfig, ProgressionConfig};
use crate::event::GameEvent;
use crate::state::{EntityId, GameState};

/// Threshold increase applied when `new_level` is reached.
pub fn experience_step(progression: &ProgressionConfig, new_level: u32) -> f64 {
    f64::from(new_level) * progression.level_up_multiplier
}

/// Adds experience to `hero_id` and processes every level-up it causes.
///
/// Returns the number of levels gained. Each level-up runs the ability's
/// level hook and queues the chest configured for the new level.
pub fn grant_experience(
    state: &mut GameState,
    config: &GameplayConfig,
    hero_id: EntityId,
    amount: f64,
) -> u32 {
    if amount.is_nan() || amount <= 0.0 {
        return 0;
    }
    let progression = &config.progression;
    let Some(hero) = state.hero_mut(hero_id) else {
        return 0;
    };

    hero.experience += amount;
    let mut reached = Vec::new();
    while hero.level < progression.max_level && hero.experience >= hero.experience_needed {
        hero.level += 1;
        hero.experience_needed += experience_step(progression, hero.level);
        hero.ability.on_level_up(hero.level);
        reached.push(hero.level);
    }

    if let Some(stats) = state.round_stats_mut(hero_id) {
        stats.experience += amount;
    }
    for level in &reached {
        state.emit(GameEvent::LevelUp {
            hero: hero_id,
            level: *level,
        });
        tracing::debug!(hero = %hero_id, level, "level up");
        offer_chest(state, config, hero_id, *level);
    }
    reached.len() as u32
}
