//! Damage calculation primitives.

use crate::stats::StatTable;

/// Damage type, selecting which target-side mitigation stat applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DamageType {
    /// Mitigated by the target's armor.
    Physical,
    /// Mitigated by the target's magical shield stat.
    Magical,
    /// Ignores all mitigation.
    True,
}

/// Result of one damage application.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageOutcome {
    /// Final damage after all modifiers and mitigation, before shield
    /// absorption. Always a whole number (see [`round_amount`]).
    pub damage: f64,
    /// Portion of `damage` absorbed by the target's shield buffer.
    pub absorbed: f64,
    pub is_critical: bool,
    pub is_dodged: bool,
}

impl DamageOutcome {
    /// Outcome for a dodged attack: zero damage, no side effects.
    pub fn dodged() -> Self {
        Self {
            is_dodged: true,
            ..Self::default()
        }
    }
}

/// Apply target-side flat mitigation.
///
/// Physical damage is reduced by armor, magical by the magical shield stat,
/// true damage passes through. Never goes below zero.
pub fn mitigate(amount: f64, damage_type: DamageType, target: &StatTable) -> f64 {
    let reduction = match damage_type {
        DamageType::Physical => target.armor,
        DamageType::Magical => target.magical_shield,
        DamageType::True => 0.0,
    };
    (amount - reduction).max(0.0)
}

/// Split `damage` between a shield buffer and HP loss.
///
/// Returns `(absorbed, hp_loss)` with `absorbed = min(shield, damage)` and
/// `hp_loss = damage - absorbed`. The depleted portion of the shield is
/// simply gone; excess damage never overflows back.
pub fn absorb_with_shield(shield: f64, damage: f64) -> (f64, f64) {
    let absorbed = shield.min(damage);
    (absorbed, damage - absorbed)
}

/// The single rounding rule for final damage and heal amounts: half-up,
/// applied exactly once when the amount lands on a resource.
pub fn round_amount(amount: f64) -> f64 {
    amount.max(0.0).round()
}
