//! Immutable gameplay parameter bundle.
//!
//! A [`GameplayConfig`] is selected once per match by preset name and only
//! ever read by the simulation. Presets are built by struct update from the
//! default values; [`GameplayConfig::validate`] turns every missing or
//! nonsensical value into a construction-time [`ConfigError`].

pub mod abilities;
pub mod rewards;

use std::collections::BTreeMap;

pub use abilities::{
    AbilitiesConfig, DefaultAbilityConfig, HookshotConfig, MercenaryConfig, PyromancerConfig,
    SniperConfig, ThorndiveConfig,
};
pub use rewards::{RewardKind, RewardTable, WeightedReward};

use crate::error::{ErrorSeverity, GameError};
use crate::state::{CombatantCategory, Position, Team};

/// Errors raised while selecting or validating a configuration.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },

    #[error("chest '{chest}' references unknown reward '{reward}'")]
    UnknownReward { chest: String, reward: String },

    #[error("level {level} references unknown chest '{chest}'")]
    UnknownChest { level: u32, chest: String },
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ConfigError::UnknownPreset(_) => ErrorSeverity::Validation,
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::UnknownPreset(_) => "CONFIG_UNKNOWN_PRESET",
            ConfigError::Invalid { .. } => "CONFIG_INVALID",
            ConfigError::UnknownReward { .. } => "CONFIG_UNKNOWN_REWARD",
            ConfigError::UnknownChest { .. } => "CONFIG_UNKNOWN_CHEST",
        }
    }
}

/// Named presets available at startup.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Preset {
    Default,
    /// Short cooldowns, fast respawns.
    Arcade,
    /// No passive healing, harder hits, long respawns.
    Hardcore,
}

/// Base stats for one combatant archetype.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatantStats {
    pub max_health: f64,
    /// Collision radius.
    pub size: f64,
    pub move_speed: f64,
    pub attack_radius: f64,
    pub attack_strength: f64,
    /// Attacks per second.
    pub attack_speed: f64,
    pub wind_up_ms: f64,
    pub bullet_armor: f64,
    pub ability_armor: f64,
}

impl Default for CombatantStats {
    fn default() -> Self {
        Self::hero()
    }
}

impl CombatantStats {
    pub fn hero() -> Self {
        Self {
            max_health: 500.0,
            size: 20.0,
            move_speed: 180.0,
            attack_radius: 150.0,
            attack_strength: 25.0,
            attack_speed: 1.0,
            wind_up_ms: 200.0,
            bullet_armor: 10.0,
            ability_armor: 10.0,
        }
    }

    pub fn warrior() -> Self {
        Self {
            max_health: 220.0,
            size: 14.0,
            move_speed: 120.0,
            attack_radius: 30.0,
            attack_strength: 12.0,
            attack_speed: 1.0,
            wind_up_ms: 150.0,
            bullet_armor: 10.0,
            ability_armor: 0.0,
        }
    }

    pub fn archer() -> Self {
        Self {
            max_health: 150.0,
            size: 12.0,
            move_speed: 120.0,
            attack_radius: 140.0,
            attack_strength: 15.0,
            attack_speed: 0.8,
            wind_up_ms: 250.0,
            bullet_armor: 0.0,
            ability_armor: 0.0,
        }
    }

    pub fn turret() -> Self {
        Self {
            max_health: 2_000.0,
            size: 40.0,
            move_speed: 0.0,
            attack_radius: 220.0,
            attack_strength: 60.0,
            attack_speed: 0.8,
            wind_up_ms: 300.0,
            bullet_armor: 40.0,
            ability_armor: 40.0,
        }
    }

    pub fn cradle() -> Self {
        Self {
            max_health: 4_000.0,
            size: 60.0,
            move_speed: 0.0,
            attack_radius: 0.0,
            attack_strength: 0.0,
            attack_speed: 0.0,
            wind_up_ms: 0.0,
            bullet_armor: 60.0,
            ability_armor: 60.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapConfig {
    pub width: f64,
    pub height: f64,
    pub blue_spawn: Position,
    pub red_spawn: Position,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 3_000.0,
            height: 1_500.0,
            blue_spawn: Position::new(150.0, 750.0),
            red_spawn: Position::new(2_850.0, 750.0),
        }
    }
}

impl MapConfig {
    pub fn spawn_point(&self, team: Team) -> Position {
        match team {
            Team::Blue => self.blue_spawn,
            Team::Red => self.red_spawn,
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.is_within(self.width, self.height)
    }

    pub fn clamp(&self, position: Position) -> Position {
        position.clamped(self.width, self.height)
    }
}

/// Experience granted for a kill, per victim category.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KillExperience {
    pub hero_base: f64,
    pub hero_per_level: f64,
    pub warrior: f64,
    pub archer: f64,
    pub turret: f64,
    pub cradle: f64,
}

impl Default for KillExperience {
    fn default() -> Self {
        Self {
            hero_base: 100.0,
            hero_per_level: 20.0,
            warrior: 20.0,
            archer: 25.0,
            turret: 150.0,
            cradle: 0.0,
        }
    }
}

impl KillExperience {
    pub fn value(&self, category: CombatantCategory, victim_level: u32) -> f64 {
        match category {
            CombatantCategory::Hero => {
                self.hero_base + self.hero_per_level * f64::from(victim_level.saturating_sub(1))
            }
            CombatantCategory::Warrior => self.warrior,
            CombatantCategory::Archer => self.archer,
            CombatantCategory::Turret => self.turret,
            CombatantCategory::Cradle => self.cradle,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Units closer than `(size1 + size2) * collision_threshold` are pushed apart.
    pub collision_threshold: f64,
    /// Lowest armor value used by mitigation; keeps `armor + 100` positive.
    pub armor_floor: f64,
    /// Time without damage before out-of-combat healing starts.
    pub passive_heal_threshold_ms: u64,
    /// Fraction of max health healed per second out of combat (0.02 = 2%).
    pub passive_heal_percent_per_second: f64,
    /// Enemy heroes within this radius of a kill share its experience.
    pub experience_share_radius: f64,
    /// Extra experience for the killing blow, as a fraction of the kill value.
    pub last_hit_bonus: f64,
    pub kill_experience: KillExperience,
    pub respawn_base_ms: u64,
    pub respawn_per_level_ms: u64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            collision_threshold: 0.9,
            armor_floor: -90.0,
            passive_heal_threshold_ms: 5_000,
            passive_heal_percent_per_second: 0.02,
            experience_share_radius: 600.0,
            last_hit_bonus: 0.25,
            kill_experience: KillExperience::default(),
            respawn_base_ms: 5_000,
            respawn_per_level_ms: 1_000,
        }
    }
}

impl CombatConfig {
    pub fn respawn_duration(&self, level: u32) -> u64 {
        self.respawn_base_ms + self.respawn_per_level_ms * u64::from(level.saturating_sub(1))
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MinionsConfig {
    pub warrior: CombatantStats,
    pub archer: CombatantStats,
    /// Super-minion health multiplier.
    pub buffed_health_multiplier: f64,
    /// Super-minion attack strength multiplier.
    pub buffed_damage_multiplier: f64,
}

impl Default for MinionsConfig {
    fn default() -> Self {
        Self {
            warrior: CombatantStats::warrior(),
            archer: CombatantStats::archer(),
            buffed_health_multiplier: 1.5,
            buffed_damage_multiplier: 1.5,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StructuresConfig {
    pub turret: CombatantStats,
    pub cradle: CombatantStats,
}

impl Default for StructuresConfig {
    fn default() -> Self {
        Self {
            turret: CombatantStats::turret(),
            cradle: CombatantStats::cradle(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProgressionConfig {
    /// Experience needed to reach level 2.
    pub base_experience: f64,
    /// Reaching level `n` raises the threshold by `n * level_up_multiplier`.
    pub level_up_multiplier: f64,
    pub max_level: u32,
    /// Sparse level → chest table.
    pub chest_by_level: BTreeMap<u32, String>,
    /// Chest for levels missing from `chest_by_level`.
    pub default_chest: String,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        let chest_by_level = [(2, "ability"), (5, "rare"), (8, "rare"), (12, "rare")]
            .into_iter()
            .map(|(level, chest)| (level, chest.to_string()))
            .collect();
        Self {
            base_experience: 100.0,
            level_up_multiplier: 100.0,
            max_level: 18,
            chest_by_level,
            default_chest: "common".to_string(),
        }
    }
}

impl ProgressionConfig {
    pub fn chest_for_level(&self, level: u32) -> &str {
        self.chest_by_level
            .get(&level)
            .map(String::as_str)
            .unwrap_or(&self.default_chest)
    }
}

/// Complete gameplay parameter bundle for one match.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameplayConfig {
    pub name: String,
    pub map: MapConfig,
    pub combat: CombatConfig,
    pub heroes: CombatantStats,
    pub minions: MinionsConfig,
    pub structures: StructuresConfig,
    pub abilities: AbilitiesConfig,
    pub progression: ProgressionConfig,
    pub rewards: RewardTable,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            name: Preset::Default.to_string(),
            map: MapConfig::default(),
            combat: CombatConfig::default(),
            heroes: CombatantStats::hero(),
            minions: MinionsConfig::default(),
            structures: StructuresConfig::default(),
            abilities: AbilitiesConfig::default(),
            progression: ProgressionConfig::default(),
            rewards: RewardTable::standard(),
        }
    }
}

impl GameplayConfig {
    /// Looks up a preset by name (`"default"`, `"arcade"`, `"hardcore"`).
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        let preset: Preset = name
            .parse()
            .map_err(|_| ConfigError::UnknownPreset(name.to_string()))?;
        Ok(Self::from_preset(preset))
    }

    pub fn from_preset(preset: Preset) -> Self {
        let base = Self::default();
        match preset {
            Preset::Default => base,
            Preset::Arcade => {
                let mut abilities = base.abilities.clone();
                abilities.default.cooldown_ms /= 2;
                abilities.hookshot.cooldown_ms /= 2;
                abilities.mercenary.cooldown_ms /= 2;
                abilities.pyromancer.cooldown_ms /= 2;
                abilities.thorndive.cooldown_ms /= 2;
                abilities.sniper.cooldown_ms /= 2;
                Self {
                    name: preset.to_string(),
                    abilities,
                    combat: CombatConfig {
                        respawn_base_ms: 2_000,
                        respawn_per_level_ms: 250,
                        ..base.combat.clone()
                    },
                    progression: ProgressionConfig {
                        base_experience: 60.0,
                        level_up_multiplier: 60.0,
                        ..base.progression.clone()
                    },
                    ..base
                }
            }
            Preset::Hardcore => Self {
                name: preset.to_string(),
                combat: CombatConfig {
                    passive_heal_percent_per_second: 0.0,
                    respawn_base_ms: 10_000,
                    respawn_per_level_ms: 2_000,
                    ..base.combat.clone()
                },
                heroes: CombatantStats {
                    attack_strength: base.heroes.attack_strength * 1.4,
                    ..base.heroes.clone()
                },
                ..base
            },
        }
    }

    /// Checks every value the simulation divides by or looks up at runtime.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(value: f64, field: &'static str) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: "must be a positive number",
                })
            }
        }
        fn non_zero(value: u64, field: &'static str) -> Result<(), ConfigError> {
            if value > 0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero",
                })
            }
        }

        positive(self.map.width, "map.width")?;
        positive(self.map.height, "map.height")?;
        if !self.map.contains(self.map.blue_spawn) || !self.map.contains(self.map.red_spawn) {
            return Err(ConfigError::Invalid {
                field: "map.spawn",
                reason: "spawn point outside the map",
            });
        }
        positive(
            self.combat.collision_threshold,
            "combat.collision_threshold",
        )?;
        if self.combat.armor_floor.is_nan() || self.combat.armor_floor <= -100.0 {
            return Err(ConfigError::Invalid {
                field: "combat.armor_floor",
                reason: "must be greater than -100",
            });
        }
        positive(self.heroes.size, "heroes.size")?;
        positive(self.heroes.max_health, "heroes.max_health")?;

        let abilities = &self.abilities;
        positive(abilities.default.speed, "abilities.default.speed")?;
        positive(abilities.hookshot.speed, "abilities.hookshot.speed")?;
        positive(
            abilities.hookshot.pull_speed,
            "abilities.hookshot.pull_speed",
        )?;
        positive(abilities.pyromancer.speed, "abilities.pyromancer.speed")?;
        non_zero(
            abilities.pyromancer.zone_tick_ms,
            "abilities.pyromancer.zone_tick_ms",
        )?;
        non_zero(
            abilities.pyromancer.burn_tick_ms,
            "abilities.pyromancer.burn_tick_ms",
        )?;
        positive(
            abilities.thorndive.dash_speed,
            "abilities.thorndive.dash_speed",
        )?;
        positive(abilities.sniper.speed, "abilities.sniper.speed")?;
        positive(
            abilities.sniper.recoil_speed,
            "abilities.sniper.recoil_speed",
        )?;

        positive(
            self.progression.base_experience,
            "progression.base_experience",
        )?;
        positive(
            self.progression.level_up_multiplier,
            "progression.level_up_multiplier",
        )?;
        if self.progression.max_level == 0 {
            return Err(ConfigError::Invalid {
                field: "progression.max_level",
                reason: "must be at least 1",
            });
        }

        for (chest, pool) in &self.rewards.chests {
            for entry in pool {
                if !self.rewards.rewards.contains_key(&entry.reward) {
                    return Err(ConfigError::UnknownReward {
                        chest: chest.clone(),
                        reward: entry.reward.clone(),
                    });
                }
                positive(entry.weight, "rewards.chests.weight")?;
            }
        }
        let levels = self
            .progression
            .chest_by_level
            .iter()
            .map(|(level, chest)| (*level, chest))
            .chain(std::iter::once((0, &self.progression.default_chest)));
        for (level, chest) in levels {
            if !self.rewards.chests.contains_key(chest) {
                return Err(ConfigError::UnknownChest {
                    level,
                    chest: chest.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_preset_validates() {
        for preset in Preset::iter() {
            let config = GameplayConfig::from_preset(preset);
            assert_eq!(config.validate(), Ok(()), "preset {preset}");
            assert_eq!(config.name, preset.to_string());
        }
    }

    #[test]
    fn unknown_preset_is_rejected() {
        assert_eq!(
            GameplayConfig::preset("moonbase"),
            Err(ConfigError::UnknownPreset("moonbase".to_string()))
        );
    }

    #[test]
    fn arcade_halves_cooldowns() {
        let base = GameplayConfig::default();
        let arcade = GameplayConfig::preset("arcade").unwrap();
        assert_eq!(
            arcade.abilities.sniper.cooldown_ms * 2,
            base.abilities.sniper.cooldown_ms
        );
    }

    #[test]
    fn unknown_reward_in_chest_fails_validation() {
        let mut config = GameplayConfig::default();
        config
            .rewards
            .chests
            .get_mut("common")
            .unwrap()
            .push(WeightedReward::new("golden-goose", 5.0));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownReward { .. })
        ));
    }

    #[test]
    fn unlisted_level_uses_default_chest() {
        let progression = ProgressionConfig::default();
        assert_eq!(progression.chest_for_level(2), "ability");
        assert_eq!(progression.chest_for_level(3), "common");
    }
}
