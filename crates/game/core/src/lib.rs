//! Deterministic combat simulation for a team arena match.
//!
//! `arena-core` defines the canonical rules (effects, stats, abilities,
//! projectiles, zones, damage, progression) and exposes pure APIs that can be
//! reused by both the runtime and offline tools. All per-tick mutation flows
//! through [`engine::GameEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod ability;
pub mod combat;
pub mod config;
pub mod effect;
pub mod engine;
pub mod error;
pub mod event;
pub mod progression;
pub mod rng;
pub mod state;
pub mod stats;

pub use ability::{Ability, AbilityError, AbilityKind, AbilityModifier, use_ability};
pub use combat::{DamageKind, DamageReport, damage_combatant, mitigate};
pub use config::{ConfigError, GameplayConfig, Preset};
pub use effect::{Effect, EffectDuration, EffectKind, EffectType, attach_effect};
pub use engine::{GameEngine, Intent, IntentError, IntentQueue, SimError, TickOutcome};
pub use error::{ErrorSeverity, GameError};
pub use event::GameEvent;
pub use progression::{generate_rewards_from_chest, grant_experience};
pub use state::{
    Combatant, CombatantCategory, CombatantKind, EntityId, GameState, Hero, LifeState, MinionKind,
    Position, Projectile, RoundStats, StructureKind, Team, Timestamp, Zone,
};
pub use stats::{AbilityStat, ModifierOp, StatKind, apply_stat_modifications};
