//! Player intents and their validation.
//!
//! Intents are produced by the transport layer (or a bot) between ticks and
//! drained at the start of the next one. A rejected intent never changes
//! state.

use std::collections::VecDeque;

use super::errors::IntentError;
use crate::ability::use_ability;
use crate::config::GameplayConfig;
use crate::progression::choose_reward;
use crate::state::{EntityId, GameState, Position};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Intent {
    MoveTo { hero: EntityId, target: Position },
    UseAbility { hero: EntityId, target: Position },
    ChooseReward { hero: EntityId, reward: String },
}

impl Intent {
    pub fn hero(&self) -> EntityId {
        match self {
            Intent::MoveTo { hero, .. }
            | Intent::UseAbility { hero, .. }
            | Intent::ChooseReward { hero, .. } => *hero,
        }
    }
}

/// FIFO buffer of intents waiting for the next tick.
#[derive(Clone, Debug, Default)]
pub struct IntentQueue {
    pending: VecDeque<Intent>,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, intent: Intent) {
        self.pending.push_back(intent);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes every queued intent in arrival order.
    pub fn drain(&mut self) -> Vec<Intent> {
        self.pending.drain(..).collect()
    }
}

impl Extend<Intent> for IntentQueue {
    fn extend<T: IntoIterator<Item = Intent>>(&mut self, iter: T) {
        self.pending.extend(iter);
    }
}

/// Validates and applies one intent against the current state.
///
/// Reward choices are accepted while the hero is respawning; movement and
/// ability use require a live hero.
pub fn apply_intent(
    state: &mut GameState,
    config: &GameplayConfig,
    intent: &Intent,
) -> Result<(), IntentError> {
    match intent {
        Intent::MoveTo { hero, target } => {
            ensure_live_hero(state, *hero)?;
            if !config.map.contains(*target) {
                return Err(IntentError::OutOfBounds);
            }
            if let Some(hero) = state.hero_mut(*hero) {
                hero.move_target = Some(*target);
            }
            Ok(())
        }
        Intent::UseAbility { hero, target } => {
            ensure_live_hero(state, *hero)?;
            if !config.map.contains(*target) {
                return Err(IntentError::OutOfBounds);
            }
            use_ability(state, config, *hero, *target)?;
            Ok(())
        }
        Intent::ChooseReward { hero, reward } => choose_reward(state, config, *hero, reward),
    }
}

fn ensure_live_hero(state: &GameState, id: EntityId) -> Result<(), IntentError> {
    let combatant = state.combatant(id).ok_or(IntentError::HeroNotFound(id))?;
    if !combatant.is_hero() {
        return Err(IntentError::NotAHero(id));
    }
    if !combatant.is_alive() {
        return Err(IntentError::HeroDead(id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ability::{AbilityError, AbilityKind};
    use crate::state::{LifeState, MinionKind, Team};

    fn setup() -> (GameState, GameplayConfig, EntityId) {
        let config = GameplayConfig::default();
        let mut state = GameState::new(3);
        let hero = state.spawn_hero(
            &config,
            Team::Blue,
            AbilityKind::Default,
            Position::new(300.0, 300.0),
        );
        (state, config, hero)
    }

    #[test]
    fn queue_drains_in_order() {
        let mut queue = IntentQueue::new();
        let a = Intent::MoveTo { hero: EntityId(1), target: Position::new(1.0, 1.0) };
        let b = Intent::ChooseReward { hero: EntityId(2), reward: "vitality".into() };
        queue.push(a.clone());
        queue.push(b.clone());
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.drain(), vec![a, b]);
        assert!(queue.is_empty());
    }

    #[test]
    fn move_to_sets_target() {
        let (mut state, config, hero) = setup();
        let target = Position::new(900.0, 300.0);
        apply_intent(&mut state, &config, &Intent::MoveTo { hero, target }).unwrap();
        assert_eq!(state.hero(hero).unwrap().move_target, Some(target));
    }

    #[test]
    fn move_to_rejects_out_of_bounds_and_dead() {
        let (mut state, config, hero) = setup();
        let outside = Intent::MoveTo { hero, target: Position::new(-5.0, 300.0) };
        assert_eq!(apply_intent(&mut state, &config, &outside), Err(IntentError::OutOfBounds));
        assert_eq!(state.hero(hero).unwrap().move_target, None);

        state.combatant_mut(hero).unwrap().life = LifeState::Respawning { respawn_at: 10_000 };
        let inside = Intent::MoveTo { hero, target: Position::new(500.0, 300.0) };
        assert_eq!(apply_intent(&mut state, &config, &inside), Err(IntentError::HeroDead(hero)));
    }

    #[test]
    fn minions_cannot_receive_intents() {
        let (mut state, config, _) = setup();
        let minion = state.spawn_minion(
            &config,
            Team::Blue,
            MinionKind::Archer,
            Position::new(50.0, 50.0),
            false,
            None,
        );
        let intent = Intent::UseAbility { hero: minion, target: Position::new(60.0, 60.0) };
        assert_eq!(apply_intent(&mut state, &config, &intent), Err(IntentError::NotAHero(minion)));
    }

    #[test]
    fn second_ability_use_in_same_tick_is_rejected() {
        let (mut state, config, hero) = setup();
        let intent = Intent::UseAbility { hero, target: Position::new(600.0, 300.0) };
        apply_intent(&mut state, &config, &intent).unwrap();
        let err = apply_intent(&mut state, &config, &intent).unwrap_err();
        assert_eq!(err, IntentError::Ability(AbilityError::AlreadyUsedThisTick));
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn reward_without_offer_is_rejected() {
        let (mut state, config, hero) = setup();
        let intent = Intent::ChooseReward { hero, reward: "vitality".into() };
        assert_eq!(
            apply_intent(&mut state, &config, &intent),
            Err(IntentError::NoPendingReward(hero))
        );
    }
}
