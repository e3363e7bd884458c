//! Projectiles and the hit effects they carry.

use super::common::{EntityId, Position, Team, Timestamp};
use super::zone::ZoneDescriptor;
use crate::ability::AbilityKind;
use crate::effect::{Effect, EffectDuration};

/// Effect fired on every combatant a projectile or zone hits.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HitEffect {
    /// Ability damage attributed to the owner.
    Damage { amount: f64 },
    /// Template attached as a copy stamped with the hit time.
    Apply(Effect),
    /// Drags the target to `toward` with collision off. Both effects last the
    /// travel time from where the target was hit, but at least `min_ms`.
    /// Structures are never pulled.
    Pull {
        toward: Position,
        speed: f64,
        min_ms: u64,
    },
}

/// What ends a projectile's flight besides duration, bounds and hits.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ProjectileBound {
    Free,
    /// Removed once farther than `range` from `start`.
    Range { start: Position, range: f64 },
    /// Triggers on reaching (or stepping past) the point.
    Destination(Position),
}

/// Everything needed to launch a projectile; id and creation time are
/// assigned by `GameState::spawn_projectile`.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectileSpec {
    pub owner: EntityId,
    pub team: Team,
    pub kind: AbilityKind,
    pub origin: Position,
    pub direction: Position,
    pub speed: f64,
    pub radius: f64,
    pub aoe_radius: Option<f64>,
    pub bound: ProjectileBound,
    pub duration: EffectDuration,
    pub collides: bool,
    pub visible: bool,
    pub effects: Vec<HitEffect>,
    pub zone: Option<ZoneDescriptor>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Projectile {
    pub id: EntityId,
    pub owner: EntityId,
    pub team: Team,
    pub kind: AbilityKind,
    pub position: Position,
    /// Unit vector.
    pub direction: Position,
    /// Pixels per second.
    pub speed: f64,
    /// Single-target hit radius.
    pub radius: f64,
    /// When set, a trigger hits every enemy within `aoe_radius + size`.
    pub aoe_radius: Option<f64>,
    pub bound: ProjectileBound,
    pub duration: EffectDuration,
    pub created_at: Timestamp,
    /// Whether touching an enemy in flight triggers the projectile.
    pub collides: bool,
    /// Rendering hint only.
    pub visible: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<HitEffect>,
    /// Zone spawned wherever the projectile triggers.
    pub zone: Option<ZoneDescriptor>,
}

impl Projectile {
    pub fn from_spec(id: EntityId, created_at: Timestamp, spec: ProjectileSpec) -> Self {
        Self {
            id,
            owner: spec.owner,
            team: spec.team,
            kind: spec.kind,
            position: spec.origin,
            direction: spec.direction,
            speed: spec.speed,
            radius: spec.radius,
            aoe_radius: spec.aoe_radius,
            bound: spec.bound,
            duration: spec.duration,
            created_at,
            collides: spec.collides,
            visible: spec.visible,
            effects: spec.effects,
            zone: spec.zone,
        }
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        match self.duration {
            EffectDuration::Instant => true,
            EffectDuration::Timed(ms) => now.saturating_sub(self.created_at) >= ms,
            EffectDuration::Infinite => false,
        }
    }
}
