//! Stat identifiers.

use strum::{Display, EnumIter, EnumString};

/// Identifies one numeric attribute in a [`StatTable`](super::StatTable).
///
/// Modifiers reference stats by kind, and content loaders parse kinds from
/// their snake_case names (via strum's `EnumString`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatKind {
    MaxHp,
    CurrentHp,
    MaxMana,
    CurrentMana,
    PhysicalDamage,
    MagicalDamage,
    Armor,
    MagicalShield,
    CritChance,
    CritDamage,
    DodgeChance,
    HealingPower,
    Speed,
}

impl StatKind {
    /// Chance-type stats are clamped to `[0, 1]` after recalculation.
    pub const fn is_chance(self) -> bool {
        matches!(self, Self::CritChance | Self::DodgeChance)
    }

    /// Current HP/mana are owned by the damage/heal pipeline. Modifiers may
    /// not target them; the recalculation engine skips such modifiers.
    pub const fn is_current_resource(self) -> bool {
        matches!(self, Self::CurrentHp | Self::CurrentMana)
    }
}
