//! The battle engine: the authoritative reducer for [`BattleState`].
//!
//! All state mutation flows through engine methods: the damage/heal
//! pipeline, effect registry operations, turn ticks, and ability execution.
//! Collaborators are injected rather than reached through globals: the RNG
//! oracle and the event bus are plain references held for the engine's
//! lifetime, so tests and the external turn scheduler compose them freely.
//!
//! ```text
//! turn engine ──► use_ability / tick_turn_start / tick_duration
//!                        │
//!                        ▼
//!        registry ops ──► triggered hooks ──► pipeline ──► events
//!                        │
//!                        ▼
//!                  recalculate(character)
//! ```

mod action;
mod pipeline;
mod state;
mod turns;


pub use pipeline::{DamageOptions, HealOptions};
pub use state::BattleState;

use tracing::debug;

use crate::character::{Character, CharacterId};
use crate::effect::{Effect, EffectId, HookAction};
use crate::events::{BattleEvent, EventBus};
use crate::registry::{ApplyOutcome, TriggeredHook};
use crate::rng::{BattleRng, mix_seed};

/// Stateful battle reducer.
///
/// Borrows the state it mutates, the RNG oracle, and the event bus.
pub struct BattleEngine<'a> {
    state: &'a mut BattleState,
    rng: &'a dyn BattleRng,
    events: &'a EventBus,
}

impl<'a> BattleEngine<'a> {
    pub fn new(state: &'a mut BattleState, rng: &'a dyn BattleRng, events: &'a EventBus) -> Self {
        Self { state, rng, events }
    }

    pub fn state(&self) -> &BattleState {
        self.state
    }

    /// Roll against a probability in `[0, 1]`, consuming one roll counter.
    pub(crate) fn chance(&mut self, probability: f64, context: u32) -> bool {
        let seed = mix_seed(self.state.seed, self.state.rolls, context);
        self.state.rolls += 1;
        self.rng.roll_chance(seed, probability)
    }

    pub(crate) fn emit(&self, event: BattleEvent) {
        self.events.publish(&event);
    }

    fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.state.character_mut(id)
    }

    // ---- effect registry operations -----------------------------------------

    /// Attach a buff to `target`. See [`Self::apply_effect`].
    pub fn add_buff(&mut self, target: CharacterId, effect: Effect) -> Option<ApplyOutcome> {
        debug_assert!(!effect.is_debuff(), "add_buff called with a debuff");
        self.apply_effect(target, effect)
    }

    /// Attach a debuff to `target`. See [`Self::apply_effect`].
    pub fn add_debuff(&mut self, target: CharacterId, effect: Effect) -> Option<ApplyOutcome> {
        debug_assert!(effect.is_debuff(), "add_debuff called with a buff");
        self.apply_effect(target, effect)
    }

    /// Attach an effect, routed by its polarity.
    ///
    /// Runs the registry's refresh-or-stack policy, recalculates the target,
    /// emits the matching event, and executes any `on_apply` hooks. Returns
    /// `None` (a silent no-op) when the target is missing or dead, which is
    /// the required behavior for delayed callbacks landing late.
    pub fn apply_effect(&mut self, target: CharacterId, effect: Effect) -> Option<ApplyOutcome> {
        let effect_id = effect.id.clone();
        let is_debuff = effect.is_debuff();

        let character = match self.character_mut(target) {
            Some(c) if c.is_alive() => c,
            _ => {
                debug!(%target, effect = %effect_id, "effect dropped: target missing or dead");
                return None;
            }
        };

        let (outcome, hooks) = character.effects_mut().add(effect);
        character.recalculate();
        let stacks = character
            .effects()
            .get(&effect_id)
            .map(|e| e.stacks)
            .unwrap_or(1);

        match outcome {
            ApplyOutcome::Applied => self.emit(BattleEvent::EffectApplied {
                target,
                effect: effect_id,
                debuff: is_debuff,
            }),
            ApplyOutcome::Refreshed | ApplyOutcome::Stacked => {
                self.emit(BattleEvent::EffectRefreshed {
                    target,
                    effect: effect_id,
                    stacks,
                })
            }
        }

        self.run_hooks(target, hooks);
        Some(outcome)
    }

    /// Detach a buff by id. Benign no-op when absent; returns whether
    /// anything was removed.
    pub fn remove_buff(&mut self, target: CharacterId, id: &EffectId) -> bool {
        self.remove_with(target, id, |c, id| c.effects_mut().remove_buff(id))
    }

    /// Detach a debuff by id. Benign no-op when absent.
    pub fn remove_debuff(&mut self, target: CharacterId, id: &EffectId) -> bool {
        self.remove_with(target, id, |c, id| c.effects_mut().remove_debuff(id))
    }

    /// Detach by id from whichever list holds it (used by hook actions).
    pub fn remove_effect(&mut self, target: CharacterId, id: &EffectId) -> bool {
        self.remove_with(target, id, |c, id| c.effects_mut().remove(id))
    }

    /// Detach every debuff from `target` (cleanse).
    pub fn clear_debuffs(&mut self, target: CharacterId) {
        let Some(character) = self.character_mut(target) else {
            return;
        };
        let removed: Vec<EffectId> = character
            .effects()
            .debuffs()
            .iter()
            .map(|e| e.id.clone())
            .collect();
        let hooks = character.effects_mut().clear_debuffs();
        character.recalculate();
        for effect in removed {
            self.emit(BattleEvent::EffectRemoved { target, effect });
        }
        self.run_hooks(target, hooks);
    }

    fn remove_with(
        &mut self,
        target: CharacterId,
        id: &EffectId,
        detach: impl FnOnce(&mut Character, &EffectId) -> Vec<TriggeredHook>,
    ) -> bool {
        let Some(character) = self.character_mut(target) else {
            return false;
        };
        let was_present = character.effects().has(id);
        let hooks = detach(character, id);
        if !was_present {
            return false;
        }

        character.recalculate();
        self.emit(BattleEvent::EffectRemoved {
            target,
            effect: id.clone(),
        });
        self.run_hooks(target, hooks);
        true
    }

    // ---- hook interpretation -------------------------------------------------

    /// Execute lifecycle hook actions against their owner.
    ///
    /// A missing or dead owner silently drops the batch (delayed expiry
    /// hooks must not resurrect or damage corpses). Hook-triggered damage
    /// and healing skip dodge and critical rolls.
    pub(crate) fn run_hooks(&mut self, owner: CharacterId, hooks: Vec<TriggeredHook>) {
        if hooks.is_empty() {
            return;
        }
        match self.state.character(owner) {
            Some(c) if c.is_alive() => {}
            _ => {
                debug!(%owner, "hook batch dropped: owner missing or dead");
                return;
            }
        }

        for TriggeredHook { effect, action } in hooks {
            debug!(%owner, %effect, ?action, "running effect hook");
            match action {
                HookAction::DealDamage {
                    amount,
                    damage_type,
                } => {
                    self.apply_damage(None, owner, amount, damage_type, DamageOptions::hook());
                }
                HookAction::Heal { amount } => {
                    self.heal(None, owner, amount, HealOptions::hook());
                }
                HookAction::RestoreMana { amount } => {
                    if let Some(c) = self.character_mut(owner) {
                        c.gain_mana(amount);
                    }
                }
                HookAction::GrantShield { amount } => {
                    if let Some(c) = self.character_mut(owner) {
                        c.gain_shield(amount);
                    }
                }
                HookAction::ApplyEffect(effect) => {
                    self.apply_effect(owner, *effect);
                }
                HookAction::RemoveEffect(id) => {
                    self.remove_effect(owner, &id);
                }
                HookAction::ReduceCooldown { ability, amount } => {
                    if let Some(c) = self.character_mut(owner) {
                        c.reduce_cooldown(&ability, amount);
                    }
                }
                HookAction::DisableAbility { ability, turns } => {
                    if let Some(a) = self
                        .character_mut(owner)
                        .and_then(|c| c.ability_mut(&ability))
                    {
                        a.disable(turns);
                    }
                }
            }
        }
    }
}
