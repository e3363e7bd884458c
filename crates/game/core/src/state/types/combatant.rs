//! Combatants: every entity that can deal or take damage.

use super::common::{EntityId, Position, Team, Timestamp};
use super::hero::Hero;
use crate::config::CombatantStats;
use crate::effect::{Effect, EffectKind, EffectType};
use crate::stats::{StatKind, apply_stat_modifications};

/// Life-cycle of a combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LifeState {
    #[default]
    Alive,
    /// Heroes only. Back at the team spawn once `respawn_at` is reached.
    Respawning { respawn_at: Timestamp },
    /// Minions and structures. Removed from the arena at the end of the tick.
    Dead,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MinionKind {
    Warrior,
    Archer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StructureKind {
    Turret,
    /// Destroying the enemy cradle wins the match.
    Cradle,
}

/// Flat classification used for kill experience and kill counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CombatantCategory {
    Hero,
    Warrior,
    Archer,
    Turret,
    Cradle,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minion {
    pub kind: MinionKind,
    /// Super-minion scaling was applied at spawn.
    pub buffed: bool,
    /// Lane point the minion walks toward while no enemy is in range.
    pub waypoint: Option<Position>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CombatantKind {
    Hero(Box<Hero>),
    Minion(Minion),
    Structure(StructureKind),
}

/// An attack that has started and lands once the wind-up elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindUp {
    pub target: EntityId,
    pub started_at: Timestamp,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackState {
    /// Earliest time the next attack may start.
    pub ready_at: Timestamp,
    pub last_attack_at: Option<Timestamp>,
    pub wind_up: Option<WindUp>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: EntityId,
    pub team: Team,
    pub kind: CombatantKind,
    pub position: Position,
    /// Base stats; effective values come from [`Combatant::stat`].
    pub stats: CombatantStats,
    pub health: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub life: LifeState,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack: AttackState,
    pub last_damaged_at: Option<Timestamp>,
    /// Temporary effects in insertion order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<Effect>,
}

impl Combatant {
    pub fn new(
        id: EntityId,
        team: Team,
        kind: CombatantKind,
        position: Position,
        stats: CombatantStats,
    ) -> Self {
        Self {
            id,
            team,
            kind,
            position,
            health: stats.max_health,
            stats,
            life: LifeState::Alive,
            attack: AttackState::default(),
            last_damaged_at: None,
            effects: Vec::new(),
        }
    }

    pub fn hero(&self) -> Option<&Hero> {
        match &self.kind {
            CombatantKind::Hero(hero) => Some(hero),
            _ => None,
        }
    }

    pub fn hero_mut(&mut self) -> Option<&mut Hero> {
        match &mut self.kind {
            CombatantKind::Hero(hero) => Some(hero),
            _ => None,
        }
    }

    pub fn minion(&self) -> Option<&Minion> {
        match &self.kind {
            CombatantKind::Minion(minion) => Some(minion),
            _ => None,
        }
    }

    pub fn is_hero(&self) -> bool {
        matches!(self.kind, CombatantKind::Hero(_))
    }

    pub fn is_minion(&self) -> bool {
        matches!(self.kind, CombatantKind::Minion(_))
    }

    pub fn is_structure(&self) -> bool {
        matches!(self.kind, CombatantKind::Structure(_))
    }

    pub fn category(&self) -> CombatantCategory {
        match &self.kind {
            CombatantKind::Hero(_) => CombatantCategory::Hero,
            CombatantKind::Minion(minion) => match minion.kind {
                MinionKind::Warrior => CombatantCategory::Warrior,
                MinionKind::Archer => CombatantCategory::Archer,
            },
            CombatantKind::Structure(StructureKind::Turret) => CombatantCategory::Turret,
            CombatantKind::Structure(StructureKind::Cradle) => CombatantCategory::Cradle,
        }
    }

    pub fn level(&self) -> u32 {
        self.hero().map_or(1, |hero| hero.level)
    }

    /// Alive and taking part in collision, targeting and attacks.
    pub fn is_alive(&self) -> bool {
        self.life == LifeState::Alive
    }

    /// Collision radius.
    pub fn size(&self) -> f64 {
        self.stats.size
    }

    fn base_stat(&self, stat: StatKind) -> f64 {
        let base = &self.stats;
        match stat {
            StatKind::MaxHealth => base.max_health,
            StatKind::AttackRadius => base.attack_radius,
            StatKind::AttackStrength => base.attack_strength,
            StatKind::AttackSpeed => base.attack_speed,
            StatKind::WindUp => base.wind_up_ms,
            StatKind::MoveSpeed => base.move_speed,
            StatKind::BulletArmor => base.bullet_armor,
            StatKind::AbilityArmor => base.ability_armor,
        }
    }

    /// Permanent (hero reward) effects followed by temporary effects.
    pub fn all_effects(&self) -> impl Iterator<Item = &Effect> {
        let permanent = self
            .hero()
            .map(|hero| hero.permanent_effects.as_slice())
            .unwrap_or_default();
        permanent.iter().chain(self.effects.iter())
    }

    /// Effective value of `stat` with every modifier folded in.
    pub fn stat(&self, stat: StatKind) -> f64 {
        apply_stat_modifications(stat, self.base_stat(stat), self.all_effects())
    }

    pub fn max_health(&self) -> f64 {
        self.stat(StatKind::MaxHealth)
    }

    pub fn has_effect(&self, effect_type: EffectType, now: Timestamp) -> bool {
        self.all_effects()
            .any(|effect| effect.effect_type() == effect_type && effect.is_active(now))
    }

    pub fn is_stunned(&self, now: Timestamp) -> bool {
        self.has_effect(EffectType::Stun, now)
    }

    pub fn is_moving_forcibly(&self, now: Timestamp) -> bool {
        self.has_effect(EffectType::Move, now)
    }

    /// Strongest active reflect percentage, if any.
    pub fn reflect_percentage(&self, now: Timestamp) -> Option<f64> {
        self.all_effects()
            .filter(|effect| effect.is_active(now))
            .filter_map(|effect| match effect.kind {
                EffectKind::Reflect { percentage } => Some(percentage),
                _ => None,
            })
            .reduce(f64::max)
    }

    /// Taunter of the most recently applied active taunt.
    pub fn taunted_by(&self, now: Timestamp) -> Option<EntityId> {
        self.effects
            .iter()
            .rev()
            .filter(|effect| effect.is_active(now))
            .find_map(|effect| match effect.kind {
                EffectKind::Taunt { taunter } => Some(taunter),
                _ => None,
            })
    }

    /// Re-establishes `health <= max_health` after max health changed.
    pub fn clamp_health(&mut self) {
        self.health = self.health.clamp(0.0, self.max_health());
    }

    pub fn heal(&mut self, amount: f64) {
        if amount > 0.0 {
            self.health = (self.health + amount).min(self.max_health());
        }
    }
}
