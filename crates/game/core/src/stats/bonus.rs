//! Modifier application shared by combatant stats and ability tunables.
//!
//! Unlike a bucketed bonus stack, modifiers here apply strictly in insertion
//! order: `Relative` adds, `Absolute` overwrites, `Percent` scales. An
//! absolute modifier therefore discards everything applied before it but not
//! what comes after, and callers must keep effect lists in insertion order.

/// How a modifier combines with the running value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ModifierOp {
    /// `value + amount`
    Relative,
    /// `value = amount`
    Absolute,
    /// `value * (1 + amount / 100)`; 20 = +20%, -50 = halved.
    Percent,
}

impl ModifierOp {
    /// Applies a single modifier step.
    pub fn apply(self, value: f64, amount: f64) -> f64 {
        match self {
            ModifierOp::Relative => value + amount,
            ModifierOp::Absolute => amount,
            ModifierOp::Percent => value * (1.0 + amount / 100.0),
        }
    }
}

/// Lower bound applied after folding a modifier list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatFloor {
    /// Stat may go negative (armor).
    Unbounded,
    /// Stat is clamped to `>= min`.
    Min(f64),
}

impl StatFloor {
    pub const NON_NEGATIVE: Self = Self::Min(0.0);

    fn clamp(self, value: f64) -> f64 {
        match self {
            StatFloor::Unbounded => value,
            StatFloor::Min(min) => value.max(min),
        }
    }
}

/// Folds `(op, amount)` pairs over `base` in iteration order, then applies the floor.
///
/// # Example
/// ```
/// # use arena_core::stats::bonus::{ModifierOp, StatFloor, fold_modifiers};
/// let mods = [
///     (ModifierOp::Relative, 10.0),  // 110
///     (ModifierOp::Percent, 50.0),   // 165
///     (ModifierOp::Relative, -200.0) // -35
/// ];
/// assert_eq!(fold_modifiers(100.0, mods, StatFloor::NON_NEGATIVE), 0.0);
/// assert_eq!(fold_modifiers(100.0, mods, StatFloor::Unbounded), -35.0);
/// ```
pub fn fold_modifiers(
    base: f64,
    modifiers: impl IntoIterator<Item = (ModifierOp, f64)>,
    floor: StatFloor,
) -> f64 {
    let value = modifiers
        .into_iter()
        .fold(base, |acc, (op, amount)| op.apply(acc, amount));
    floor.clamp(value)
}
