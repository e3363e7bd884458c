//! Events raised while a tick runs.
//!
//! Subsystems push events into `GameState`; the engine drains them into the
//! [`TickOutcome`](crate::engine::TickOutcome) so collaborators can observe
//! what happened without diffing snapshots.

use crate::ability::AbilityKind;
use crate::state::{CombatantCategory, EntityId, Position, Team};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GameEvent {
    AbilityUsed {
        hero: EntityId,
        ability: AbilityKind,
        target: Position,
    },
    IntentRejected {
        hero: EntityId,
        code: String,
        reason: String,
    },
    CombatantKilled {
        victim: EntityId,
        category: CombatantCategory,
        killer: Option<EntityId>,
    },
    HeroRespawned {
        hero: EntityId,
        position: Position,
    },
    LevelUp {
        hero: EntityId,
        level: u32,
    },
    RewardOffered {
        hero: EntityId,
        chest: String,
        options: Vec<String>,
    },
    RewardApplied {
        hero: EntityId,
        reward: String,
    },
    MatchWon {
        team: Team,
    },
}

impl GameEvent {
    /// Hero the event is about, if any.
    pub fn hero(&self) -> Option<EntityId> {
        match self {
            GameEvent::AbilityUsed { hero, .. }
            | GameEvent::IntentRejected { hero, .. }
            | GameEvent::HeroRespawned { hero, .. }
            | GameEvent::LevelUp { hero, .. }
            | GameEvent::RewardOffered { hero, .. }
            | GameEvent::RewardApplied { hero, .. } => Some(*hero),
            GameEvent::CombatantKilled { .. } | GameEvent::MatchWon { .. } => None,
        }
    }
}
