pub mod combatant;
pub mod common;
pub mod hero;
pub mod projectile;
pub mod round_stats;
pub mod zone;

pub use combatant::{
    AttackState, Combatant, CombatantCategory, CombatantKind, LifeState, Minion, MinionKind,
    StructureKind, WindUp,
};
pub use common::{EntityId, Position, Team, Timestamp};
pub use hero::{Hero, REWARD_OPTIONS, RewardOffer};
pub use projectile::{HitEffect, Projectile, ProjectileBound, ProjectileSpec};
pub use round_stats::RoundStats;
pub use zone::{Zone, ZoneDescriptor};
