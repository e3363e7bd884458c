//! Error types surfaced by the tick orchestrator.

use crate::ability::AbilityError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// Why a player intent was rejected. Rejections never change state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntentError {
    #[error("hero {0} not found")]
    HeroNotFound(EntityId),

    #[error("combatant {0} is not a hero")]
    NotAHero(EntityId),

    #[error("hero {0} is dead")]
    HeroDead(EntityId),

    #[error("target point outside the map")]
    OutOfBounds,

    #[error(transparent)]
    Ability(#[from] AbilityError),

    #[error("hero {0} has no pending reward")]
    NoPendingReward(EntityId),

    #[error("reward '{0}' was not offered")]
    RewardNotOffered(String),
}

impl GameError for IntentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Ability(err) => err.severity(),
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::HeroNotFound(_) => "INTENT_HERO_NOT_FOUND",
            Self::NotAHero(_) => "INTENT_NOT_A_HERO",
            Self::HeroDead(_) => "INTENT_HERO_DEAD",
            Self::OutOfBounds => "INTENT_OUT_OF_BOUNDS",
            Self::Ability(err) => err.error_code(),
            Self::NoPendingReward(_) => "INTENT_NO_PENDING_REWARD",
            Self::RewardNotOffered(_) => "INTENT_REWARD_NOT_OFFERED",
        }
    }
}

/// Per-entity failure inside a subsystem pass.
///
/// The orchestrator logs these and continues with the next entity.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    #[error("entity {0} missing from the arena")]
    MissingEntity(EntityId),

    #[error("owner {owner} of {entity} missing from the arena")]
    MissingOwner { entity: EntityId, owner: EntityId },
}

impl GameError for SimError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingEntity(_) => "SIM_MISSING_ENTITY",
            Self::MissingOwner { .. } => "SIM_MISSING_OWNER",
        }
    }
}
