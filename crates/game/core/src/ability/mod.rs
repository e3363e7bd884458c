//! Hero abilities.
//!
//! The ability set is closed: an [`Ability`] carries an [`AbilityTuning`]
//! variant snapshotted from `GameplayConfig` at creation, and
//! [`use_ability`] dispatches on that variant to one cast function per type.
//! Cast functions validate everything before their first mutation, so a cast
//! either commits all its side effects or none.
//!
//! ```text
//! Ready ──use──▶ OnCooldown ──cooldown elapsed──▶ Ready
//! ```
//!
//! A never-used ability (`last_used == None`) is always ready.

mod default;
mod error;
mod hookshot;
mod mercenary;
mod pyromancer;
mod sniper;
pub mod targeting;
mod thorndive;

pub use error::AbilityError;

use crate::config::{
    AbilitiesConfig, DefaultAbilityConfig, GameplayConfig, HookshotConfig, MercenaryConfig,
    PyromancerConfig, SniperConfig, ThorndiveConfig,
};
use crate::event::GameEvent;
use crate::state::{EntityId, GameState, Position, Team, Timestamp};
use crate::stats::{AbilityStat, ModifierOp, StatFloor, fold_modifiers};

/// Extra lifetime given to forced-movement effects on top of the exact
/// travel time, so arrival (not expiry) is what normally ends them.
pub const MOVE_GRACE_MS: u64 = 250;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AbilityKind {
    /// Single damage bolt.
    Default,
    /// Hook that stuns and pulls the first enemy hit.
    Hookshot,
    /// Self-buff bundle, no projectile.
    Mercenary,
    /// Fireball that leaves a burning zone.
    Pyromancer,
    /// Dash with a taunting landing strike.
    Thorndive,
    /// Long-range bolt with self-recoil.
    Sniper,
}

/// A reward-granted adjustment to one ability tunable.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityModifier {
    pub stat: AbilityStat,
    pub op: ModifierOp,
    pub amount: f64,
}

impl AbilityModifier {
    pub const fn new(stat: AbilityStat, op: ModifierOp, amount: f64) -> Self {
        Self { stat, op, amount }
    }
}

/// Per-type tunables copied from the config section at creation time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AbilityTuning {
    Default(DefaultAbilityConfig),
    Hookshot(HookshotConfig),
    Mercenary(MercenaryConfig),
    Pyromancer(PyromancerConfig),
    Thorndive(ThorndiveConfig),
    Sniper(SniperConfig),
}

impl AbilityTuning {
    pub fn kind(&self) -> AbilityKind {
        match self {
            AbilityTuning::Default(_) => AbilityKind::Default,
            AbilityTuning::Hookshot(_) => AbilityKind::Hookshot,
            AbilityTuning::Mercenary(_) => AbilityKind::Mercenary,
            AbilityTuning::Pyromancer(_) => AbilityKind::Pyromancer,
            AbilityTuning::Thorndive(_) => AbilityKind::Thorndive,
            AbilityTuning::Sniper(_) => AbilityKind::Sniper,
        }
    }

    fn cooldown_ms(&self) -> u64 {
        match self {
            AbilityTuning::Default(t) => t.cooldown_ms,
            AbilityTuning::Hookshot(t) => t.cooldown_ms,
            AbilityTuning::Mercenary(t) => t.cooldown_ms,
            AbilityTuning::Pyromancer(t) => t.cooldown_ms,
            AbilityTuning::Thorndive(t) => t.cooldown_ms,
            AbilityTuning::Sniper(t) => t.cooldown_ms,
        }
    }
}

/// A hero's equipped ability.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub tuning: AbilityTuning,
    /// `None` until the first successful cast.
    pub last_used: Option<Timestamp>,
    /// Reward boosts, applied in order on top of the tuning.
    #[cfg_attr(feature = "serde", serde(default))]
    pub boosts: Vec<AbilityModifier>,
}

impl Ability {
    pub fn create(kind: AbilityKind, config: &AbilitiesConfig) -> Self {
        let tuning = match kind {
            AbilityKind::Default => AbilityTuning::Default(config.default.clone()),
            AbilityKind::Hookshot => AbilityTuning::Hookshot(config.hookshot.clone()),
            AbilityKind::Mercenary => AbilityTuning::Mercenary(config.mercenary.clone()),
            AbilityKind::Pyromancer => AbilityTuning::Pyromancer(config.pyromancer.clone()),
            AbilityKind::Thorndive => AbilityTuning::Thorndive(config.thorndive.clone()),
            AbilityKind::Sniper => AbilityTuning::Sniper(config.sniper.clone()),
        };
        Self {
            tuning,
            last_used: None,
            boosts: Vec::new(),
        }
    }

    pub fn kind(&self) -> AbilityKind {
        self.tuning.kind()
    }

    /// `base` with every boost for `stat` folded in, floored at zero.
    pub fn boosted(&self, stat: AbilityStat, base: f64) -> f64 {
        let modifiers = self
            .boosts
            .iter()
            .filter(|boost| boost.stat == stat)
            .map(|boost| (boost.op, boost.amount));
        fold_modifiers(base, modifiers, StatFloor::NON_NEGATIVE)
    }

    /// Boosted duration in whole milliseconds.
    pub fn boosted_ms(&self, stat: AbilityStat, base_ms: u64) -> u64 {
        self.boosted(stat, base_ms as f64).round() as u64
    }

    pub fn cooldown_ms(&self) -> u64 {
        self.boosted_ms(AbilityStat::Cooldown, self.tuning.cooldown_ms())
    }

    pub fn remaining_cooldown(&self, now: Timestamp) -> u64 {
        match self.last_used {
            None => 0,
            Some(used) => (used + self.cooldown_ms()).saturating_sub(now),
        }
    }

    pub fn is_ready(&self, now: Timestamp) -> bool {
        self.remaining_cooldown(now) == 0
    }

    pub fn boost(&mut self, modifiers: impl IntoIterator<Item = AbilityModifier>) {
        self.boosts.extend(modifiers);
    }

    /// Level-up hook. Only the default bolt scales with level; every other
    /// ability scales through rewards or at cast time.
    pub fn on_level_up(&mut self, _level: u32) {
        if let AbilityTuning::Default(tuning) = &mut self.tuning {
            tuning.damage += tuning.damage_per_level;
        }
    }
}

/// Snapshot of the caster taken before a cast mutates anything.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cast {
    pub caster: EntityId,
    pub team: Team,
    pub origin: Position,
    pub level: u32,
    pub requested: Position,
    pub now: Timestamp,
}

/// Casts `caster`'s ability toward `target`.
///
/// On success the ability's side effects (projectiles, buffs, forced
/// movement) are committed and `last_used` is stamped with the current game
/// time. Any `Err` leaves the state untouched.
pub fn use_ability(
    state: &mut GameState,
    config: &GameplayConfig,
    caster: EntityId,
    target: Position,
) -> Result<(), AbilityError> {
    let now = state.game_time;
    let combatant = state
        .combatant(caster)
        .ok_or(AbilityError::CasterNotFound(caster))?;
    if !combatant.is_alive() {
        return Err(AbilityError::CasterDead(caster));
    }
    let hero = combatant.hero().ok_or(AbilityError::NoAbility(caster))?;
    if combatant.is_stunned(now) {
        return Err(AbilityError::Stunned(caster));
    }
    if hero.ability.last_used == Some(now) {
        return Err(AbilityError::AlreadyUsedThisTick);
    }
    let remaining_ms = hero.ability.remaining_cooldown(now);
    if remaining_ms > 0 {
        return Err(AbilityError::OnCooldown { remaining_ms });
    }
    if !config.map.contains(target) {
        return Err(AbilityError::TargetOutOfBounds);
    }

    let cast = Cast {
        caster,
        team: combatant.team,
        origin: combatant.position,
        level: hero.level,
        requested: target,
        now,
    };
    let ability = hero.ability.clone();

    match &ability.tuning {
        AbilityTuning::Default(tuning) => default::cast(&ability, tuning, &cast, state),
        AbilityTuning::Hookshot(tuning) => hookshot::cast(&ability, tuning, &cast, state),
        AbilityTuning::Mercenary(tuning) => mercenary::cast(&ability, tuning, &cast, state),
        AbilityTuning::Pyromancer(tuning) => pyromancer::cast(&ability, tuning, &cast, state),
        AbilityTuning::Thorndive(tuning) => thorndive::cast(&ability, tuning, &cast, state, config),
        AbilityTuning::Sniper(tuning) => sniper::cast(&ability, tuning, &cast, state, config),
    }?;

    if let Some(hero) = state.combatant_mut(caster).and_then(|c| c.hero_mut()) {
        hero.ability.last_used = Some(now);
    }
    state.emit(GameEvent::AbilityUsed {
        hero: caster,
        ability: ability.kind(),
        target,
    });
    tracing::debug!(caster = %caster, ability = %ability.kind(), "ability used");
    Ok(())
}

/// Time a forced movement of `distance` at `speed` needs, plus grace.
pub(crate) fn travel_ms(distance: f64, speed: f64) -> u64 {
    if speed <= 0.0 {
        return MOVE_GRACE_MS;
    }
    ((distance / speed) * 1_000.0).ceil().max(0.0) as u64 + MOVE_GRACE_MS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameplayConfig;

    #[test]
    fn never_used_ability_is_ready() {
        let ability = Ability::create(AbilityKind::Sniper, &AbilitiesConfig::default());
        assert!(ability.is_ready(0));
        assert_eq!(ability.remaining_cooldown(0), 0);
    }

    #[test]
    fn cooldown_counts_down_from_last_use() {
        let mut ability = Ability::create(AbilityKind::Default, &AbilitiesConfig::default());
        ability.last_used = Some(1_000);
        let cooldown = ability.cooldown_ms();
        assert!(!ability.is_ready(1_000 + cooldown - 1));
        assert_eq!(ability.remaining_cooldown(1_001), cooldown - 1);
        assert!(ability.is_ready(1_000 + cooldown));
    }

    #[test]
    fn boosts_apply_in_order() {
        let mut ability = Ability::create(AbilityKind::Default, &AbilitiesConfig::default());
        ability.boost([
            AbilityModifier::new(AbilityStat::Cooldown, ModifierOp::Percent, -50.0),
            AbilityModifier::new(AbilityStat::Cooldown, ModifierOp::Relative, 100.0),
        ]);
        assert_eq!(ability.cooldown_ms(), 2_600);
    }

    #[test]
    fn level_up_scales_default_damage() {
        let mut config = GameplayConfig::default();
        config.abilities.default.damage_per_level = 5.0;
        let mut ability = Ability::create(AbilityKind::Default, &config.abilities);
        ability.on_level_up(2);
        let AbilityTuning::Default(tuning) = &ability.tuning else {
            panic!("expected default tuning");
        };
        assert_eq!(tuning.damage, 45.0);
    }

    #[test]
    fn kind_names_match_reward_ids() {
        assert_eq!(AbilityKind::Thorndive.to_string(), "thorndive");
        assert_eq!("hookshot".parse::<AbilityKind>(), Ok(AbilityKind::Hookshot));
    }
}
