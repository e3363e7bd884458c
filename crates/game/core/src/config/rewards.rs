//! Chest pools and reward definitions.

use std::collections::BTreeMap;

use crate::ability::{AbilityKind, AbilityModifier};
use crate::effect::StatModifier;
use crate::stats::{AbilityStat, ModifierOp, StatKind};

/// One weighted entry of a chest pool.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedReward {
    pub reward: String,
    pub weight: f64,
}

impl WeightedReward {
    pub fn new(reward: impl Into<String>, weight: f64) -> Self {
        Self {
            reward: reward.into(),
            weight,
        }
    }
}

/// What applying a reward does to a hero.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RewardKind {
    /// Appends permanent stat-modifier effects.
    Stat { modifiers: Vec<StatModifier> },
    /// Replaces the equipped ability with a fresh one of this kind.
    Ability { ability: AbilityKind },
    /// Boosts the equipped ability's tunables.
    AbilityStat { modifiers: Vec<AbilityModifier> },
    /// Grants a permanent passive-heal effect.
    Regeneration { percent_per_second: f64 },
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RewardTable {
    /// Chest id → weighted reward pool.
    pub chests: BTreeMap<String, Vec<WeightedReward>>,
    /// Reward id → definition.
    pub rewards: BTreeMap<String, RewardKind>,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RewardTable {
    pub fn chest(&self, chest: &str) -> Option<&[WeightedReward]> {
        self.chests.get(chest).map(Vec::as_slice)
    }

    pub fn reward(&self, reward: &str) -> Option<&RewardKind> {
        self.rewards.get(reward)
    }

    /// The built-in reward catalog shared by all presets.
    pub fn standard() -> Self {
        use ModifierOp::{Percent, Relative};

        let stat = |modifiers: Vec<StatModifier>| RewardKind::Stat { modifiers };
        let tuning = |stat: AbilityStat, op: ModifierOp, amount: f64| RewardKind::AbilityStat {
            modifiers: vec![AbilityModifier::new(stat, op, amount)],
        };

        let mut rewards = BTreeMap::new();
        rewards.insert(
            "vitality".to_string(),
            stat(vec![StatModifier::new(StatKind::MaxHealth, Relative, 60.0)]),
        );
        rewards.insert(
            "swiftness".to_string(),
            stat(vec![StatModifier::new(StatKind::MoveSpeed, Percent, 10.0)]),
        );
        rewards.insert(
            "sharpness".to_string(),
            stat(vec![StatModifier::new(StatKind::AttackStrength, Relative, 8.0)]),
        );
        rewards.insert(
            "fortitude".to_string(),
            stat(vec![
                StatModifier::new(StatKind::BulletArmor, Relative, 15.0),
                StatModifier::new(StatKind::AbilityArmor, Relative, 15.0),
            ]),
        );
        rewards.insert(
            "frenzy".to_string(),
            stat(vec![StatModifier::new(StatKind::AttackSpeed, Percent, 15.0)]),
        );
        rewards.insert(
            "regeneration".to_string(),
            RewardKind::Regeneration {
                percent_per_second: 0.01,
            },
        );
        rewards.insert(
            "empower".to_string(),
            tuning(AbilityStat::Strength, Percent, 20.0),
        );
        rewards.insert(
            "haste".to_string(),
            tuning(AbilityStat::Cooldown, Percent, -15.0),
        );
        rewards.insert(
            "reach".to_string(),
            tuning(AbilityStat::Range, Relative, 60.0),
        );
        for ability in [
            AbilityKind::Hookshot,
            AbilityKind::Mercenary,
            AbilityKind::Pyromancer,
            AbilityKind::Thorndive,
            AbilityKind::Sniper,
        ] {
            rewards.insert(ability.to_string(), RewardKind::Ability { ability });
        }

        let mut chests = BTreeMap::new();
        chests.insert(
            "common".to_string(),
            vec![
                WeightedReward::new("vitality", 30.0),
                WeightedReward::new("swiftness", 20.0),
                WeightedReward::new("sharpness", 25.0),
                WeightedReward::new("fortitude", 20.0),
                WeightedReward::new("frenzy", 15.0),
                WeightedReward::new("empower", 10.0),
            ],
        );
        chests.insert(
            "rare".to_string(),
            vec![
                WeightedReward::new("regeneration", 20.0),
                WeightedReward::new("empower", 25.0),
                WeightedReward::new("haste", 25.0),
                WeightedReward::new("reach", 20.0),
                WeightedReward::new("fortitude", 10.0),
            ],
        );
        chests.insert(
            "ability".to_string(),
            vec![
                WeightedReward::new("hookshot", 20.0),
                WeightedReward::new("mercenary", 20.0),
                WeightedReward::new("pyromancer", 20.0),
                WeightedReward::new("thorndive", 20.0),
                WeightedReward::new("sniper", 20.0),
            ],
        );

        Self { chests, rewards }
    }
}
