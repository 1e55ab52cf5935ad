//! Stat modifiers.
//!
//! A modifier is a single declarative change to one stat, owned by exactly
//! one effect. Modifiers are immutable value objects; the recalculation
//! engine decides how they combine.

use super::kind::StatKind;

/// How a modifier combines with the base value.
///
/// Recalculation applies all `Add` modifiers first (summed), then all
/// `Multiply` modifiers (compounded in insertion order), then all `Set`
/// modifiers (last one wins). The fixed order keeps derived stats
/// deterministic regardless of where effects were applied from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ModifierOp {
    Add,
    Multiply,
    Set,
}

/// A single declarative stat change.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifier {
    pub stat: StatKind,
    pub op: ModifierOp,
    pub value: f64,
}

impl Modifier {
    /// Additive modifier: `stat += value`.
    pub const fn add(stat: StatKind, value: f64) -> Self {
        Self {
            stat,
            op: ModifierOp::Add,
            value,
        }
    }

    /// Multiplicative modifier: `stat *= value`.
    pub const fn multiply(stat: StatKind, value: f64) -> Self {
        Self {
            stat,
            op: ModifierOp::Multiply,
            value,
        }
    }

    /// Override modifier: `stat = value`.
    pub const fn set(stat: StatKind, value: f64) -> Self {
        Self {
            stat,
            op: ModifierOp::Set,
            value,
        }
    }
}
