//! Ability shell: metadata, declarative effect list, cooldown state machine.
//!
//! An ability owns no engine state beyond its own counters. Its effect list
//! is declarative data interpreted by the engine, so content never reaches
//! into stat tables or registries directly.

use core::fmt;

use crate::character::CharacterId;
use crate::combat::DamageType;
use crate::effect::{Effect, EffectId};
use crate::stats::StatKind;

/// Stable ability identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityId(String);

impl AbilityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AbilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AbilityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Which characters an ability may legally target, relative to the caster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TargetType {
    SelfOnly,
    Ally,
    Enemy,
    AllyOrSelf,
    Any,
    /// Multi-target: every provided target is validated as `Any`.
    All,
}

/// One declarative step of an ability's effect function.
///
/// Steps execute in order against each resolved target.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityEffect {
    /// Deal damage through the full pipeline (dodge, crit, modifiers,
    /// mitigation, shield). `scale` adds the caster's stat to the base.
    Damage {
        base: f64,
        damage_type: DamageType,
        scale: Option<StatKind>,
    },
    /// Heal through the pipeline (healing power, crit, optional overheal).
    Heal { base: f64, overheal: bool },
    /// Restore mana on the target, clamped to its maximum.
    RestoreMana { amount: f64 },
    /// Attach an effect to the target (routed by the effect's polarity).
    Apply(Effect),
    /// Detach an effect from the target by id. Benign no-op if absent.
    Remove(EffectId),
    /// Detach every debuff from the target (cleanse).
    Cleanse,
    /// Reduce the cooldown of one of the target's abilities.
    ReduceCooldown { ability: AbilityId, amount: u32 },
    /// Chance-gated delayed secondary action, enqueued on the battle state
    /// and executed at the caster's turn start `delay_turns` later.
    FollowUp {
        chance: f64,
        delay_turns: u32,
        effects: Vec<AbilityEffect>,
    },
}

/// An active ability with its cooldown state machine.
///
/// Usable iff `cooldown_remaining == 0` and `disabled_for == 0` and the
/// owner carries no ability-disabling debuff; all gates are checked by
/// [`BattleEngine::use_ability`](crate::engine::BattleEngine::use_ability).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ability {
    pub id: AbilityId,
    pub name: String,
    pub mana_cost: f64,
    /// Cooldown in owner turns, applied on use.
    pub cooldown: u32,
    pub target_type: TargetType,
    pub effects: Vec<AbilityEffect>,
    /// Signals the turn engine not to advance the turn after this ability.
    pub does_not_end_turn: bool,
    /// Ability-specific critical chance replacing the caster's stat.
    pub crit_chance_override: Option<f64>,
    cooldown_remaining: u32,
    disabled_for: u32,
}

impl Ability {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        mana_cost: f64,
        cooldown: u32,
        target_type: TargetType,
    ) -> Self {
        Self {
            id: AbilityId::new(id),
            name: name.into(),
            mana_cost,
            cooldown,
            target_type,
            effects: Vec::new(),
            does_not_end_turn: false,
            crit_chance_override: None,
            cooldown_remaining: 0,
            disabled_for: 0,
        }
    }

    pub fn with_effect(mut self, effect: AbilityEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_crit_chance(mut self, chance: f64) -> Self {
        self.crit_chance_override = Some(chance);
        self
    }

    pub fn keeps_turn(mut self) -> Self {
        self.does_not_end_turn = true;
        self
    }

    pub fn cooldown_remaining(&self) -> u32 {
        self.cooldown_remaining
    }

    pub fn disabled_for(&self) -> u32 {
        self.disabled_for
    }

    /// Ready means both gates pass: off cooldown and not force-disabled.
    pub fn is_ready(&self) -> bool {
        self.cooldown_remaining == 0 && self.disabled_for == 0
    }

    /// Start the cooldown after a successful use.
    pub(crate) fn trigger_cooldown(&mut self) {
        self.cooldown_remaining = self.cooldown;
    }

    /// One owner turn-start tick: the cooldown counter steps toward zero.
    pub(crate) fn tick_cooldown(&mut self) {
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(1);
    }

    /// One owner turn-end tick: the disable counter steps toward zero, like
    /// an effect duration, so a one-turn disable blocks one full turn no
    /// matter whose turn it was applied on.
    pub(crate) fn tick_disable(&mut self) {
        self.disabled_for = self.disabled_for.saturating_sub(1);
    }

    /// Explicit cooldown reduction (cross-ability interactions).
    pub(crate) fn reduce_cooldown(&mut self, amount: u32) {
        self.cooldown_remaining = self.cooldown_remaining.saturating_sub(amount);
    }

    /// Force-disable for `turns`, independent of the cooldown counter.
    pub(crate) fn disable(&mut self, turns: u32) {
        self.disabled_for = self.disabled_for.max(turns);
    }
}

/// Result of one ability use, surfaced to the external turn engine.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionResult {
    pub success: bool,
    /// Total damage dealt across all targets.
    pub damage: f64,
    /// Total HP restored across all targets.
    pub heal_amount: f64,
    /// True if any roll in this action was a critical.
    pub is_critical: bool,
    pub targets: Vec<CharacterId>,
    pub does_not_end_turn: bool,
}
