//! Ability use rejection reasons.

use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// Why `use_ability` refused to cast. A rejected cast never changes state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityError {
    #[error("caster {0} not found")]
    CasterNotFound(EntityId),

    #[error("caster {0} is dead")]
    CasterDead(EntityId),

    /// Caster is not a hero and carries no ability.
    #[error("caster {0} has no ability")]
    NoAbility(EntityId),

    #[error("caster {0} is stunned")]
    Stunned(EntityId),

    #[error("ability on cooldown for {remaining_ms}ms")]
    OnCooldown { remaining_ms: u64 },

    /// Target point coincides with the caster.
    #[error("target is degenerate")]
    DegenerateTarget,

    #[error("target outside the map")]
    TargetOutOfBounds,

    #[error("ability already used this tick")]
    AlreadyUsedThisTick,
}

impl GameError for AbilityError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::OnCooldown { .. } | Self::Stunned(_) | Self::AlreadyUsedThisTick => {
                ErrorSeverity::Recoverable
            }
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CasterNotFound(_) => "ABILITY_CASTER_NOT_FOUND",
            Self::CasterDead(_) => "ABILITY_CASTER_DEAD",
            Self::NoAbility(_) => "ABILITY_NONE",
            Self::Stunned(_) => "ABILITY_STUNNED",
            Self::OnCooldown { .. } => "ABILITY_ON_COOLDOWN",
            Self::DegenerateTarget => "ABILITY_DEGENERATE_TARGET",
            Self::TargetOutOfBounds => "ABILITY_TARGET_OUT_OF_BOUNDS",
            Self::AlreadyUsedThisTick => "ABILITY_ALREADY_USED",
        }
    }
}
