//! Hero-only state: progression, ability and rewards.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use super::common::Position;
use crate::ability::Ability;
use crate::effect::Effect;

/// Number of reward options drawn from one chest.
pub const REWARD_OPTIONS: usize = 3;

/// A chest opened on level-up, waiting for the player's pick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardOffer {
    /// Level whose level-up produced this chest.
    pub level: u32,
    pub chest: String,
    pub options: ArrayVec<String, REWARD_OPTIONS>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    pub level: u32,
    /// Total experience earned this match.
    pub experience: f64,
    /// Total experience at which the next level is reached.
    pub experience_needed: f64,
    pub ability: Ability,
    /// Offers are answered front to back.
    #[cfg_attr(feature = "serde", serde(default))]
    pub pending_rewards: VecDeque<RewardOffer>,
    /// Reward effects. Folded into stats but never expired.
    #[cfg_attr(feature = "serde", serde(default))]
    pub permanent_effects: Vec<Effect>,
    /// Player-issued walk target.
    pub move_target: Option<Position>,
}

impl Hero {
    pub fn new(ability: Ability, experience_needed: f64) -> Self {
        Self {
            level: 1,
            experience: 0.0,
            experience_needed,
            ability,
            pending_rewards: VecDeque::new(),
            permanent_effects: Vec::new(),
            move_target: None,
        }
    }
}
