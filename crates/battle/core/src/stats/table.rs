//! Per-character stat table.

use super::kind::StatKind;

/// All numeric attributes of one character.
///
/// A character owns two tables: immutable base stats and the derived table
/// produced by [`recalculate`](super::recalculate). Current HP/mana live here
/// as well but are only ever mutated by the damage/heal pipeline and the
/// carry-over step of recalculation, never directly by content code.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatTable {
    pub max_hp: f64,
    pub current_hp: f64,
    pub max_mana: f64,
    pub current_mana: f64,
    pub physical_damage: f64,
    pub magical_damage: f64,
    pub armor: f64,
    pub magical_shield: f64,
    pub crit_chance: f64,
    pub crit_damage: f64,
    pub dodge_chance: f64,
    pub healing_power: f64,
    pub speed: f64,
}

impl StatTable {
    /// Read a stat by kind.
    pub fn get(&self, kind: StatKind) -> f64 {
        match kind {
            StatKind::MaxHp => self.max_hp,
            StatKind::CurrentHp => self.current_hp,
            StatKind::MaxMana => self.max_mana,
            StatKind::CurrentMana => self.current_mana,
            StatKind::PhysicalDamage => self.physical_damage,
            StatKind::MagicalDamage => self.magical_damage,
            StatKind::Armor => self.armor,
            StatKind::MagicalShield => self.magical_shield,
            StatKind::CritChance => self.crit_chance,
            StatKind::CritDamage => self.crit_damage,
            StatKind::DodgeChance => self.dodge_chance,
            StatKind::HealingPower => self.healing_power,
            StatKind::Speed => self.speed,
        }
    }

    /// Write a stat by kind.
    pub fn set(&mut self, kind: StatKind, value: f64) {
        match kind {
            StatKind::MaxHp => self.max_hp = value,
            StatKind::CurrentHp => self.current_hp = value,
            StatKind::MaxMana => self.max_mana = value,
            StatKind::CurrentMana => self.current_mana = value,
            StatKind::PhysicalDamage => self.physical_damage = value,
            StatKind::MagicalDamage => self.magical_damage = value,
            StatKind::Armor => self.armor = value,
            StatKind::MagicalShield => self.magical_shield = value,
            StatKind::CritChance => self.crit_chance = value,
            StatKind::CritDamage => self.crit_damage = value,
            StatKind::DodgeChance => self.dodge_chance = value,
            StatKind::HealingPower => self.healing_power = value,
            StatKind::Speed => self.speed = value,
        }
    }

    /// Enforce the table invariants in place:
    /// chance stats in `[0, 1]`, everything else non-negative, and current
    /// resources within `[0, max]`.
    pub fn clamp(&mut self) {
        use strum::IntoEnumIterator;

        for kind in StatKind::iter() {
            let value = self.get(kind);
            let clamped = if kind.is_chance() {
                value.clamp(0.0, 1.0)
            } else {
                value.max(0.0)
            };
            self.set(kind, clamped);
        }
        self.current_hp = self.current_hp.min(self.max_hp);
        self.current_mana = self.current_mana.min(self.max_mana);
    }
}
