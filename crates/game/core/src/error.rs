//! Common error infrastructure for arena-core.
//!
//! Domain-specific errors (`AbilityError`, `IntentError`, `SimError`,
//! `ConfigError`) live beside the code that produces them. None of them ever
//! escapes a tick: the orchestrator logs rejections and per-entity failures
//! and moves on to the next entity or intent.

/// How a failure should be treated by whoever catches it.
///
/// Rejected intents are mostly `Recoverable` (cooldown, stun) or `Validation`
/// (bad target, dead hero). `Internal` means the state disagrees with itself
/// and is logged at `warn`. `Fatal` is reserved for configs a match cannot
/// start with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Internal,
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Shared surface of every error enum in the workspace.
///
/// `error_code` ends up in `IntentRejected` events, so codes must stay stable
/// once published.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
