//! Stationary area hazards.

use super::common::{EntityId, Position, Team, Timestamp};
use super::projectile::HitEffect;
use crate::ability::AbilityKind;

/// Zone template carried by a projectile until it lands.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneDescriptor {
    pub kind: AbilityKind,
    pub radius: f64,
    pub duration_ms: u64,
    pub tick_rate: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<HitEffect>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    pub id: EntityId,
    pub owner: EntityId,
    pub team: Team,
    pub kind: AbilityKind,
    pub position: Position,
    pub radius: f64,
    pub duration_ms: u64,
    pub created_at: Timestamp,
    pub tick_rate: u64,
    /// First tick fires one `tick_rate` after creation.
    pub last_tick: Timestamp,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: Vec<HitEffect>,
}

impl Zone {
    pub fn from_descriptor(
        id: EntityId,
        owner: EntityId,
        team: Team,
        position: Position,
        created_at: Timestamp,
        descriptor: &ZoneDescriptor,
    ) -> Self {
        Self {
            id,
            owner,
            team,
            kind: descriptor.kind,
            position,
            radius: descriptor.radius,
            duration_ms: descriptor.duration_ms,
            created_at,
            tick_rate: descriptor.tick_rate,
            last_tick: created_at,
            effects: descriptor.effects.clone(),
        }
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        now.saturating_sub(self.created_at) >= self.duration_ms
    }

    pub fn tick_due(&self, now: Timestamp) -> bool {
        now.saturating_sub(self.last_tick) >= self.tick_rate
    }
}
