//! Combatants.
//!
//! A character exclusively owns its stat tables, effect registry, shield
//! buffer, and abilities. Cross-character interactions (healing an ally,
//! marking an enemy) are explicit engine calls between two owners, never
//! shared mutable state.

use core::fmt;

use crate::ability::{Ability, AbilityId};
use crate::registry::EffectRegistry;
use crate::stats::{StatTable, recalculate};

/// Opaque character handle within one battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId(pub u32);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Battle faction, used for target validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Team {
    Allies,
    Enemies,
}

/// One combatant.
///
/// `stats()` is always the recalculation output for the current registry
/// state; the engine re-runs recalculation after every registry mutation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub team: Team,
    base: StatTable,
    stats: StatTable,
    effects: EffectRegistry,
    abilities: Vec<Ability>,
    /// Damage-absorbing buffer consumed before HP. Fed by overheal and
    /// shield-granting effects.
    shield: f64,
    alive: bool,
}

impl Character {
    pub fn new(
        id: CharacterId,
        name: impl Into<String>,
        team: Team,
        base: StatTable,
        abilities: Vec<Ability>,
    ) -> Self {
        let mut base = base;
        base.clamp();
        let stats = base.clone();
        let alive = stats.current_hp > 0.0;
        Self {
            id,
            name: name.into(),
            team,
            base,
            stats,
            effects: EffectRegistry::new(),
            abilities,
            shield: 0.0,
            alive,
        }
    }

    pub fn base_stats(&self) -> &StatTable {
        &self.base
    }

    /// Derived stats for the current registry state.
    pub fn stats(&self) -> &StatTable {
        &self.stats
    }

    pub fn effects(&self) -> &EffectRegistry {
        &self.effects
    }

    pub(crate) fn effects_mut(&mut self) -> &mut EffectRegistry {
        &mut self.effects
    }

    pub fn shield(&self) -> f64 {
        self.shield
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn abilities(&self) -> &[Ability] {
        &self.abilities
    }

    pub fn ability(&self, id: &AbilityId) -> Option<&Ability> {
        self.abilities.iter().find(|a| &a.id == id)
    }

    pub(crate) fn ability_mut(&mut self, id: &AbilityId) -> Option<&mut Ability> {
        self.abilities.iter_mut().find(|a| &a.id == id)
    }

    /// Explicitly reduce an ability's cooldown. Returns false if the
    /// character has no such ability.
    pub fn reduce_cooldown(&mut self, id: &AbilityId, amount: u32) -> bool {
        match self.ability_mut(id) {
            Some(ability) => {
                ability.reduce_cooldown(amount);
                true
            }
            None => false,
        }
    }

    /// True while any active effect force-disables this character's
    /// abilities (stuns, silences).
    pub fn abilities_disabled(&self) -> bool {
        self.effects.disables_abilities()
    }

    /// Rebuild derived stats from base plus active effects.
    ///
    /// Current HP/mana carry over from the previous derived table and are
    /// clamped to the newly computed maxima, so losing a max-HP buff can
    /// shrink current HP but re-gaining it never heals.
    pub fn recalculate(&mut self) {
        let mut next = recalculate(&self.base, self.effects.iter());
        next.current_hp = self.stats.current_hp.clamp(0.0, next.max_hp);
        next.current_mana = self.stats.current_mana.clamp(0.0, next.max_mana);
        self.stats = next;
    }

    // ---- resource mutation, engine-only ------------------------------------

    pub(crate) fn lose_hp(&mut self, amount: f64) {
        self.stats.current_hp = (self.stats.current_hp - amount).max(0.0);
    }

    pub(crate) fn gain_hp(&mut self, amount: f64) {
        self.stats.current_hp = (self.stats.current_hp + amount).min(self.stats.max_hp);
    }

    pub(crate) fn spend_mana(&mut self, amount: f64) {
        self.stats.current_mana = (self.stats.current_mana - amount).max(0.0);
    }

    pub(crate) fn gain_mana(&mut self, amount: f64) {
        self.stats.current_mana = (self.stats.current_mana + amount).min(self.stats.max_mana);
    }

    pub(crate) fn gain_shield(&mut self, amount: f64) {
        self.shield += amount.max(0.0);
    }

    pub(crate) fn consume_shield(&mut self, amount: f64) {
        self.shield = (self.shield - amount).max(0.0);
    }

    /// Marks the character dead. Returns true only on the transition, so
    /// death is signaled exactly once no matter how often it is checked.
    pub(crate) fn mark_dead(&mut self) -> bool {
        if self.alive && self.stats.current_hp <= 0.0 {
            self.alive = false;
            true
        } else {
            false
        }
    }

    /// One owner turn-start tick for all ability cooldowns.
    pub(crate) fn tick_ability_cooldowns(&mut self) {
        for ability in &mut self.abilities {
            ability.tick_cooldown();
        }
    }

    /// One owner turn-end tick for all ability disable counters.
    pub(crate) fn tick_ability_disables(&mut self) {
        for ability in &mut self.abilities {
            ability.tick_disable();
        }
    }
}
