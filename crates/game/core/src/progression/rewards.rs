//! Chest draws and reward application.

use arrayvec::ArrayVec;

use crate::ability::Ability;
use crate::config::{GameplayConfig, RewardKind, RewardTable};
use crate::effect::{Effect, EffectKind};
use crate::engine::IntentError;
use crate::event::GameEvent;
use crate::rng::context;
use crate::state::{EntityId, GameState, REWARD_OPTIONS, RewardOffer};

/// Draws up to three distinct reward ids from `chest`.
///
/// Weighted sampling without replacement: each draw picks an entry with
/// probability proportional to its weight among the entries still in the
/// pool, then removes it. `draw` must yield values in `[0, 1)`. An unknown
/// chest yields no rewards.
pub fn generate_rewards_from_chest(
    table: &RewardTable,
    chest: &str,
    mut draw: impl FnMut() -> f64,
) -> ArrayVec<String, REWARD_OPTIONS> {
    let mut picked = ArrayVec::new();
    let Some(pool) = table.chest(chest) else {
        tracing::warn!(chest, "unknown chest");
        return picked;
    };

    let mut candidates: Vec<_> = pool.iter().filter(|entry| entry.weight > 0.0).collect();
    while !picked.is_full() && !candidates.is_empty() {
        let total: f64 = candidates.iter().map(|entry| entry.weight).sum();
        let mut roll = draw() * total;
        let mut index = candidates.len() - 1;
        for (i, entry) in candidates.iter().enumerate() {
            if roll < entry.weight {
                index = i;
                break;
            }
            roll -= entry.weight;
        }
        let chosen = candidates[index].reward.clone();
        candidates.retain(|entry| entry.reward != chosen);
        picked.push(chosen);
    }
    picked
}

/// Opens the chest configured for `level` and queues it on the hero.
pub fn offer_chest(state: &mut GameState, config: &GameplayConfig, hero_id: EntityId, level: u32) {
    let chest = config.progression.chest_for_level(level);
    let options = generate_rewards_from_chest(&config.rewards, chest, || {
        state.roll_unit(hero_id, context::CHEST_DRAW)
    });
    if options.is_empty() {
        return;
    }
    let Some(hero) = state.hero_mut(hero_id) else {
        return;
    };
    hero.pending_rewards.push_back(RewardOffer {
        level,
        chest: chest.to_string(),
        options: options.clone(),
    });
    state.emit(GameEvent::RewardOffered {
        hero: hero_id,
        chest: chest.to_string(),
        options: options.into_iter().collect(),
    });
}

/// Applies `reward_id` to the hero. Returns false for unknown rewards and
/// missing heroes, leaving the state unchanged.
pub fn apply_reward(
    state: &mut GameState,
    config: &GameplayConfig,
    hero_id: EntityId,
    reward_id: &str,
) -> bool {
    let Some(reward) = config.rewards.reward(reward_id) else {
        tracing::warn!(hero = %hero_id, reward = reward_id, "unknown reward");
        return false;
    };
    let Some(combatant) = state.combatant_mut(hero_id) else {
        return false;
    };
    let Some(hero) = combatant.hero_mut() else {
        return false;
    };

    match reward {
        RewardKind::Stat { modifiers } => {
            hero.permanent_effects.extend(
                modifiers
                    .iter()
                    .map(|modifier| Effect::permanent(EffectKind::StatMod(*modifier))),
            );
        }
        RewardKind::Ability { ability } => {
            hero.ability = Ability::create(*ability, &config.abilities);
        }
        RewardKind::AbilityStat { modifiers } => {
            hero.ability.boost(modifiers.iter().copied());
        }
        RewardKind::Regeneration { percent_per_second } => {
            hero.permanent_effects
                .push(Effect::permanent(EffectKind::PassiveHeal {
                    percent_per_second: *percent_per_second,
                }));
        }
    }
    combatant.clamp_health();
    true
}

/// Answers the hero's oldest pending offer with `reward_id`.
pub fn choose_reward(
    state: &mut GameState,
    config: &GameplayConfig,
    hero_id: EntityId,
    reward_id: &str,
) -> Result<(), IntentError> {
    let combatant = state
        .combatant_mut(hero_id)
        .ok_or(IntentError::HeroNotFound(hero_id))?;
    let hero = combatant.hero_mut().ok_or(IntentError::NotAHero(hero_id))?;
    let offer = hero
        .pending_rewards
        .front()
        .ok_or(IntentError::NoPendingReward(hero_id))?;
    if !offer.options.iter().any(|option| option == reward_id) {
        return Err(IntentError::RewardNotOffered(reward_id.to_string()));
    }
    hero.pending_rewards.pop_front();

    apply_reward(state, config, hero_id, reward_id);
    state.emit(GameEvent::RewardApplied {
        hero: hero_id,
        reward: reward_id.to_string(),
    });
    tracing::debug!(hero = %hero_id, reward = reward_id, "reward applied");
    Ok(())
}
