//! Timed effects attached to combatants.
//!
//! Effects are a single tagged type: the shared fields (`duration`,
//! `applied_at`) live on [`Effect`], variant payloads live in [`EffectKind`].
//! Temporary effects sit in `Combatant::effects` and are expired by
//! [`lifecycle::update_effects`]; permanent reward effects sit in the hero's
//! own list and are never expired.

pub mod lifecycle;

pub use lifecycle::{apply_passive_healing, attach_effect, update_effects};

use crate::state::{EntityId, Position, Timestamp};
use crate::stats::{ModifierOp, StatKind};

/// Lifetime of an effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectDuration {
    /// Removed by the next effect update.
    Instant,
    /// Removed once `now - applied_at >= ms`.
    Timed(u64),
    /// Never expires.
    Infinite,
}

impl EffectDuration {
    /// Converts the wire convention (`-1` infinite, `0` instant, `>0` ms).
    pub fn from_millis(ms: i64) -> Self {
        match ms {
            ms if ms < 0 => EffectDuration::Infinite,
            0 => EffectDuration::Instant,
            ms => EffectDuration::Timed(ms as u64),
        }
    }

    pub fn as_millis(self) -> i64 {
        match self {
            EffectDuration::Instant => 0,
            EffectDuration::Timed(ms) => ms as i64,
            EffectDuration::Infinite => -1,
        }
    }
}

/// Single stat modification carried by a `StatMod` effect or a stat reward.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifier {
    pub stat: StatKind,
    pub op: ModifierOp,
    pub amount: f64,
}

impl StatModifier {
    pub const fn new(stat: StatKind, op: ModifierOp, amount: f64) -> Self {
        Self { stat, op, amount }
    }
}

/// Forced movement toward a point. Removed on arrival.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveEffect {
    pub target: Position,
    /// Pixels per second.
    pub speed: f64,
}

/// Damage over time; each tick deals a percentage of the bearer's max health
/// as true damage attributed to `source`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BurningEffect {
    pub tick_rate: u64,
    pub last_tick: Timestamp,
    /// Fraction of max health per tick (0.05 = 5%).
    pub percent_per_tick: f64,
    pub source: EntityId,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectKind {
    /// Cannot move, attack or use abilities.
    Stun,
    /// Excluded from combatant-vs-combatant collision.
    NoCollision,
    StatMod(StatModifier),
    /// Returns `percentage`% of incoming auto-attack damage.
    Reflect { percentage: f64 },
    /// Ignore minions when auto-targeting.
    Hunter,
    /// Forced to auto-attack `taunter`.
    Taunt { taunter: EntityId },
    /// Heals `percent_per_second` of max health every second (0.02 = 2%).
    PassiveHeal { percent_per_second: f64 },
    Move(MoveEffect),
    Burning(BurningEffect),
}

/// Discriminant-only view of [`EffectKind`], used for lookups and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum EffectType {
    Stun,
    NoCollision,
    StatMod,
    Reflect,
    Hunter,
    Taunt,
    PassiveHeal,
    Move,
    Burning,
}

impl EffectKind {
    pub fn effect_type(&self) -> EffectType {
        match self {
            EffectKind::Stun => EffectType::Stun,
            EffectKind::NoCollision => EffectType::NoCollision,
            EffectKind::StatMod(_) => EffectType::StatMod,
            EffectKind::Reflect { .. } => EffectType::Reflect,
            EffectKind::Hunter => EffectType::Hunter,
            EffectKind::Taunt { .. } => EffectType::Taunt,
            EffectKind::PassiveHeal { .. } => EffectType::PassiveHeal,
            EffectKind::Move(_) => EffectType::Move,
            EffectKind::Burning(_) => EffectType::Burning,
        }
    }
}

/// An effect instance with its lifetime.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub kind: EffectKind,
    pub duration: EffectDuration,
    pub applied_at: Timestamp,
}

impl Effect {
    pub fn new(kind: EffectKind, duration: EffectDuration, applied_at: Timestamp) -> Self {
        Self {
            kind,
            duration,
            applied_at,
        }
    }

    /// Permanent effect as granted by rewards.
    pub fn permanent(kind: EffectKind) -> Self {
        Self::new(kind, EffectDuration::Infinite, 0)
    }

    pub fn effect_type(&self) -> EffectType {
        self.kind.effect_type()
    }

    /// Returns true once the effect should be removed at `now`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        match self.duration {
            EffectDuration::Instant => true,
            EffectDuration::Timed(ms) => now.saturating_sub(self.applied_at) >= ms,
            EffectDuration::Infinite => false,
        }
    }

    /// Returns true while the effect still applies at `now`.
    ///
    /// Instant effects count as active until the update pass removes them.
    pub fn is_active(&self, now: Timestamp) -> bool {
        match self.duration {
            EffectDuration::Instant | EffectDuration::Infinite => true,
            EffectDuration::Timed(ms) => now.saturating_sub(self.applied_at) < ms,
        }
    }

    /// Copy of a template effect stamped with `now`.
    pub fn stamped(&self, now: Timestamp) -> Effect {
        let mut effect = self.clone();
        effect.applied_at = now;
        if let EffectKind::Burning(burning) = &mut effect.kind {
            burning.last_tick = now;
        }
        effect
    }
}
