//! Per-ability tunables (`COMBAT.ABILITIES.<type>.*`).
//!
//! An equipped ability snapshots its section at creation time, so changing
//! presets between matches never alters abilities already in play.

/// `abilities.default`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefaultAbilityConfig {
    pub cooldown_ms: u64,
    pub damage: f64,
    /// Extra damage granted by each level-up.
    pub damage_per_level: f64,
    pub range: f64,
    pub speed: f64,
    pub projectile_radius: f64,
}

impl Default for DefaultAbilityConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 5_000,
            damage: 40.0,
            damage_per_level: 0.0,
            range: 320.0,
            speed: 450.0,
            projectile_radius: 10.0,
        }
    }
}

/// `abilities.hookshot`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HookshotConfig {
    pub cooldown_ms: u64,
    pub damage: f64,
    pub range: f64,
    pub speed: f64,
    pub projectile_radius: f64,
    pub stun_ms: u64,
    pub pull_speed: f64,
    /// Projectile speed bonus per caster level above 1 (0.04 = +4%).
    pub speed_per_level: f64,
    /// Stun duration bonus per caster level above 1.
    pub stun_per_level: f64,
}

impl Default for HookshotConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 9_000,
            damage: 30.0,
            range: 380.0,
            speed: 550.0,
            projectile_radius: 12.0,
            stun_ms: 800,
            pull_speed: 700.0,
            speed_per_level: 0.04,
            stun_per_level: 0.05,
        }
    }
}

/// `abilities.mercenary`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MercenaryConfig {
    pub cooldown_ms: u64,
    pub duration_ms: u64,
    pub attack_strength_percent: f64,
    pub move_speed_percent: f64,
    /// Attack radius while the buff lasts (overwrites).
    pub attack_radius: f64,
    /// Wind-up while the buff lasts (overwrites).
    pub wind_up_ms: f64,
    pub bullet_armor: f64,
    pub ability_armor: f64,
}

impl Default for MercenaryConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 14_000,
            duration_ms: 5_000,
            attack_strength_percent: 40.0,
            move_speed_percent: 25.0,
            attack_radius: 45.0,
            wind_up_ms: 80.0,
            bullet_armor: 30.0,
            ability_armor: 30.0,
        }
    }
}

/// `abilities.pyromancer`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PyromancerConfig {
    pub cooldown_ms: u64,
    pub ability_power: f64,
    pub range: f64,
    pub speed: f64,
    pub projectile_radius: f64,
    pub zone_radius: f64,
    pub zone_duration_ms: u64,
    pub zone_tick_ms: u64,
    pub burn_duration_ms: u64,
    pub burn_tick_ms: u64,
}

impl Default for PyromancerConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 10_000,
            ability_power: 60.0,
            range: 420.0,
            speed: 380.0,
            projectile_radius: 10.0,
            zone_radius: 90.0,
            zone_duration_ms: 3_000,
            zone_tick_ms: 500,
            burn_duration_ms: 3_000,
            burn_tick_ms: 500,
        }
    }
}

/// `abilities.thorndive`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ThorndiveConfig {
    pub cooldown_ms: u64,
    pub range: f64,
    pub dash_speed: f64,
    pub landing_damage: f64,
    pub landing_radius: f64,
    pub taunt_ms: u64,
    /// Armor/reflect buff duration; longer than the taunt.
    pub buff_duration_ms: u64,
    pub bullet_armor: f64,
    pub ability_armor: f64,
    pub reflect_percent: f64,
}

impl Default for ThorndiveConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 12_000,
            range: 260.0,
            dash_speed: 900.0,
            landing_damage: 45.0,
            landing_radius: 70.0,
            taunt_ms: 1_200,
            buff_duration_ms: 4_000,
            bullet_armor: 50.0,
            ability_armor: 50.0,
            reflect_percent: 30.0,
        }
    }
}

/// `abilities.sniper`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SniperConfig {
    pub cooldown_ms: u64,
    pub damage: f64,
    pub range: f64,
    pub speed: f64,
    pub projectile_radius: f64,
    pub recoil_distance: f64,
    pub recoil_speed: f64,
}

impl Default for SniperConfig {
    fn default() -> Self {
        Self {
            cooldown_ms: 7_000,
            damage: 90.0,
            range: 650.0,
            speed: 1_100.0,
            projectile_radius: 8.0,
            recoil_distance: 60.0,
            recoil_speed: 500.0,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AbilitiesConfig {
    pub default: DefaultAbilityConfig,
    pub hookshot: HookshotConfig,
    pub mercenary: MercenaryConfig,
    pub pyromancer: PyromancerConfig,
    pub thorndive: ThorndiveConfig,
    pub sniper: SniperConfig,
}
