//! Declarative lifecycle hooks.
//!
//! Effects never carry closures. Each lifecycle moment owns a list of
//! [`HookAction`] variants which the engine interprets against the effect's
//! owner. This keeps every effect kind a plain data value: comparable,
//! cloneable, loadable from content files, and impossible to leave without
//! its cleanup half.

use crate::ability::AbilityId;
use crate::combat::DamageType;

use super::definition::{Effect, EffectId};

/// One action triggered by an effect lifecycle moment.
///
/// All actions target the character carrying the effect. Hook-triggered
/// damage and healing go through the normal pipeline but skip dodge and
/// critical rolls (a poison tick cannot be side-stepped).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HookAction {
    /// Deal flat damage to the owner (damage over time, expiry bursts).
    DealDamage { amount: f64, damage_type: DamageType },
    /// Heal the owner (regeneration ticks).
    Heal { amount: f64 },
    /// Restore mana to the owner.
    RestoreMana { amount: f64 },
    /// Add to the owner's damage-absorbing shield.
    GrantShield { amount: f64 },
    /// Attach another effect to the owner (e.g. a stun when a mark expires).
    ApplyEffect(Box<Effect>),
    /// Detach an effect from the owner by id. No-op if absent.
    RemoveEffect(EffectId),
    /// Reduce one of the owner's ability cooldowns.
    ReduceCooldown { ability: AbilityId, amount: u32 },
    /// Force one of the owner's abilities unusable for a number of turns,
    /// independent of its cooldown counter.
    DisableAbility { ability: AbilityId, turns: u32 },
}

/// Lifecycle hook table for one effect.
///
/// - `on_apply`: fires once when the effect genuinely attaches (never on a
///   refresh or stack increment).
/// - `on_turn_start`: fires during the owner's turn-start pass, before any
///   duration bookkeeping.
/// - `on_tick`: the per-turn callback; fires during the duration pass, after
///   the decrement, including on the expiring tick.
/// - `on_remove`: fires exactly once when the effect detaches, whether by
///   expiry or explicit removal.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectHooks {
    pub on_apply: Vec<HookAction>,
    pub on_turn_start: Vec<HookAction>,
    pub on_tick: Vec<HookAction>,
    pub on_remove: Vec<HookAction>,
}

impl EffectHooks {
    pub fn is_empty(&self) -> bool {
        self.on_apply.is_empty()
            && self.on_turn_start.is_empty()
            && self.on_tick.is_empty()
            && self.on_remove.is_empty()
    }
}
