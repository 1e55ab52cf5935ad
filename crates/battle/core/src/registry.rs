//! Per-character effect registry.
//!
//! Two insertion-ordered collections (buffs, debuffs) with the apply /
//! refresh / stack / tick / expire state machine. Registry operations never
//! touch other characters and never execute hooks themselves: they return
//! the triggered [`HookAction`]s for the engine to interpret, then the engine
//! recalculates the owner's derived stats.

use crate::effect::{Effect, EffectDuration, EffectId, EffectPolarity, HookAction};

/// What `add` did with an incoming effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Genuinely new attachment; `on_apply` hooks were triggered.
    Applied,
    /// Same id was present; its duration was reset. No hooks.
    Refreshed,
    /// Same id was present; stacks incremented and duration reset. No hooks.
    Stacked,
}

/// A lifecycle action triggered by a registry operation, tagged with the
/// effect that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggeredHook {
    pub effect: EffectId,
    pub action: HookAction,
}

fn triggered(effect: &EffectId, actions: &[HookAction]) -> Vec<TriggeredHook> {
    actions
        .iter()
        .map(|action| TriggeredHook {
            effect: effect.clone(),
            action: action.clone(),
        })
        .collect()
}

/// Result of the duration pass: per-turn ticks, plus which effects expired.
#[derive(Debug, Default)]
pub struct DurationTick {
    /// `on_tick` actions followed by the `on_remove` actions of every effect
    /// that expired this pass, in that order.
    pub triggered: Vec<TriggeredHook>,
    /// Ids of effects that expired and were detached, in insertion order.
    pub expired: Vec<EffectId>,
}

/// Ordered buff and debuff collections for one character.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectRegistry {
    buffs: Vec<Effect>,
    debuffs: Vec<Effect>,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an effect, routed by its polarity.
    ///
    /// If an effect with the same id is already present, the incoming
    /// effect's stacking policy decides: refresh the duration (default),
    /// increment stacks up to the cap (also refreshing duration), or keep
    /// both as duplicates. `on_apply` is triggered only for a genuinely new
    /// attachment; a pure refresh is a duration/stack update, not a re-apply.
    pub fn add(&mut self, effect: Effect) -> (ApplyOutcome, Vec<TriggeredHook>) {
        use crate::effect::StackPolicy;

        let list = match effect.polarity {
            EffectPolarity::Buff => &mut self.buffs,
            EffectPolarity::Debuff => &mut self.debuffs,
        };

        if !matches!(effect.policy, StackPolicy::Duplicate)
            && let Some(existing) = list.iter_mut().find(|e| e.id == effect.id)
        {
            existing.duration = effect.duration;
            return match effect.policy {
                StackPolicy::RefreshDuration => (ApplyOutcome::Refreshed, Vec::new()),
                StackPolicy::IncrementStacks { max_stacks } => {
                    let next = existing.stacks.saturating_add(effect.stacks);
                    existing.stacks = match max_stacks {
                        Some(cap) => next.min(cap),
                        None => next,
                    };
                    (ApplyOutcome::Stacked, Vec::new())
                }
                StackPolicy::Duplicate => unreachable!(),
            };
        }

        let hooks = triggered(&effect.id, &effect.hooks.on_apply);
        list.push(effect);
        (ApplyOutcome::Applied, hooks)
    }

    /// Detach a buff by id. Benign no-op when absent.
    pub fn remove_buff(&mut self, id: &EffectId) -> Vec<TriggeredHook> {
        Self::remove_from(&mut self.buffs, id)
    }

    /// Detach a debuff by id. Benign no-op when absent.
    pub fn remove_debuff(&mut self, id: &EffectId) -> Vec<TriggeredHook> {
        Self::remove_from(&mut self.debuffs, id)
    }

    /// Detach by id from whichever list holds it.
    pub fn remove(&mut self, id: &EffectId) -> Vec<TriggeredHook> {
        let mut hooks = self.remove_buff(id);
        hooks.extend(self.remove_debuff(id));
        hooks
    }

    fn remove_from(list: &mut Vec<Effect>, id: &EffectId) -> Vec<TriggeredHook> {
        let mut hooks = Vec::new();
        // Duplicate-policy effects may have several instances under one id;
        // each detached instance fires its own on_remove.
        list.retain(|effect| {
            if &effect.id == id {
                hooks.extend(triggered(&effect.id, &effect.hooks.on_remove));
                false
            } else {
                true
            }
        });
        hooks
    }

    /// Detach every debuff at once (cleanse), firing each `on_remove`.
    pub fn clear_debuffs(&mut self) -> Vec<TriggeredHook> {
        Self::drain_all(&mut self.debuffs)
    }

    /// Detach every buff at once (purge), firing each `on_remove`.
    pub fn clear_buffs(&mut self) -> Vec<TriggeredHook> {
        Self::drain_all(&mut self.buffs)
    }

    fn drain_all(list: &mut Vec<Effect>) -> Vec<TriggeredHook> {
        list.drain(..)
            .flat_map(|effect| triggered(&effect.id, &effect.hooks.on_remove))
            .collect()
    }

    /// Turn-start pass: trigger `on_turn_start` for every effect in insertion
    /// order (buffs first). No duration bookkeeping happens here, so
    /// expiry-imminent hooks still see the pre-decrement duration.
    pub fn tick_turn_start(&self) -> Vec<TriggeredHook> {
        self.iter()
            .flat_map(|effect| triggered(&effect.id, &effect.hooks.on_turn_start))
            .collect()
    }

    /// Duration pass: decrement every non-permanent effect by exactly one
    /// turn, trigger `on_tick` (after the decrement, including on the
    /// expiring tick), then detach everything that reached zero: all
    /// simultaneously-expiring effects go in the same pass, each firing
    /// `on_remove` exactly once.
    pub fn tick_duration(&mut self) -> DurationTick {
        let mut tick = DurationTick::default();

        for effect in self.buffs.iter_mut().chain(self.debuffs.iter_mut()) {
            if let EffectDuration::Turns(turns) = &mut effect.duration {
                *turns = turns.saturating_sub(1);
            }
            tick.triggered
                .extend(triggered(&effect.id, &effect.hooks.on_tick));
        }

        for list in [&mut self.buffs, &mut self.debuffs] {
            list.retain(|effect| {
                if effect.duration.is_expired() {
                    tick.triggered
                        .extend(triggered(&effect.id, &effect.hooks.on_remove));
                    tick.expired.push(effect.id.clone());
                    false
                } else {
                    true
                }
            });
        }

        tick
    }

    /// All active effects in insertion order, buffs first. The order is for
    /// display and deterministic recalculation, not a gameplay contract.
    pub fn iter(&self) -> impl Iterator<Item = &Effect> + Clone {
        self.buffs.iter().chain(self.debuffs.iter())
    }

    pub fn buffs(&self) -> &[Effect] {
        &self.buffs
    }

    pub fn debuffs(&self) -> &[Effect] {
        &self.debuffs
    }

    pub fn get(&self, id: &EffectId) -> Option<&Effect> {
        self.iter().find(|e| &e.id == id)
    }

    pub fn has(&self, id: &EffectId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.buffs.len() + self.debuffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffs.is_empty() && self.debuffs.is_empty()
    }

    /// Product of `outgoing_damage_mul` across the owner's debuffs. These
    /// live on the *attacker* and shrink what it deals.
    pub fn outgoing_damage_multiplier(&self) -> f64 {
        self.debuffs
            .iter()
            .filter_map(|e| e.outgoing_damage_mul)
            .product()
    }

    /// Product of `damage_taken_mul` across the owner's debuffs.
    pub fn damage_taken_multiplier(&self) -> f64 {
        self.debuffs
            .iter()
            .filter_map(|e| e.damage_taken_mul)
            .product()
    }

    /// True while any effect force-disables the owner's abilities.
    pub fn disables_abilities(&self) -> bool {
        self.iter().any(|e| e.disables_abilities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::StackPolicy;

    fn plain_debuff(id: &str, turns: u32) -> Effect {
        Effect::debuff(id, id, turns)
    }

    #[test]
    fn readding_refreshes_duration_without_duplicating() {
        let mut registry = EffectRegistry::new();
        registry.add(plain_debuff("chill", 3));
        registry.tick_duration();
        assert_eq!(
            registry.get(&"chill".into()).unwrap().duration,
            EffectDuration::Turns(2)
        );

        let (outcome, hooks) = registry.add(plain_debuff("chill", 3));
        assert_eq!(outcome, ApplyOutcome::Refreshed);
        assert!(hooks.is_empty());
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get(&"chill".into()).unwrap().duration,
            EffectDuration::Turns(3)
        );
    }

    #[test]
    fn increment_policy_stacks_up_to_the_cap() {
        let stacking = || {
            plain_debuff("venom", 4).with_policy(StackPolicy::IncrementStacks {
                max_stacks: Some(3),
            })
        };

        let mut registry = EffectRegistry::new();
        registry.add(stacking());
        for _ in 0..5 {
            let (outcome, _) = registry.add(stacking());
            assert_eq!(outcome, ApplyOutcome::Stacked);
        }
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&"venom".into()).unwrap().stacks, 3);
    }

    #[test]
    fn duplicate_policy_keeps_independent_instances() {
        let dup = || plain_debuff("echo", 2).with_policy(StackPolicy::Duplicate);

        let mut registry = EffectRegistry::new();
        let (a, _) = registry.add(dup());
        let (b, _) = registry.add(dup());
        assert_eq!(a, ApplyOutcome::Applied);
        assert_eq!(b, ApplyOutcome::Applied);
        assert_eq!(registry.len(), 2);

        // Explicit removal detaches every instance under the id.
        registry.remove_debuff(&"echo".into());
        assert!(registry.is_empty());
    }

    #[test]
    fn removing_an_absent_effect_is_a_no_op() {
        let mut registry = EffectRegistry::new();
        assert!(registry.remove_buff(&"ghost".into()).is_empty());
        assert!(registry.remove_debuff(&"ghost".into()).is_empty());
    }

    #[test]
    fn on_apply_fires_only_for_new_attachments() {
        let with_hook = || {
            plain_debuff("brand", 2).on_apply(HookAction::DealDamage {
                amount: 10.0,
                damage_type: crate::combat::DamageType::True,
            })
        };

        let mut registry = EffectRegistry::new();
        let (_, first) = registry.add(with_hook());
        assert_eq!(first.len(), 1);

        let (_, refresh) = registry.add(with_hook());
        assert!(refresh.is_empty());
    }

    #[test]
    fn simultaneous_expiries_all_fire_on_remove_in_one_pass() {
        let expiring = |id: &str| {
            plain_debuff(id, 1).on_remove(HookAction::Heal { amount: 1.0 })
        };

        let mut registry = EffectRegistry::new();
        registry.add(expiring("a"));
        registry.add(expiring("b"));
        registry.add(plain_debuff("c", 2));

        let tick = registry.tick_duration();
        assert_eq!(tick.expired, vec!["a".into(), "b".into()]);
        assert_eq!(tick.triggered.len(), 2);
        assert_eq!(registry.len(), 1);

        // Next pass expires "c"; no double on_remove for "a"/"b".
        let tick = registry.tick_duration();
        assert_eq!(tick.expired, vec!["c".into()]);
    }

    #[test]
    fn permanent_effects_never_expire_but_still_tick() {
        let aura = Effect::buff("aura", "Aura", 0)
            .permanent()
            .on_tick(HookAction::Heal { amount: 5.0 });

        let mut registry = EffectRegistry::new();
        registry.add(aura);

        for _ in 0..10 {
            let tick = registry.tick_duration();
            assert!(tick.expired.is_empty());
            assert_eq!(tick.triggered.len(), 1);
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn multipliers_combine_as_products_over_debuffs() {
        let mut registry = EffectRegistry::new();
        registry.add(plain_debuff("weak_a", 2).with_outgoing_damage_mul(0.5));
        registry.add(plain_debuff("weak_b", 2).with_outgoing_damage_mul(0.8));
        registry.add(plain_debuff("mark", 2).with_damage_taken_mul(2.0));
        // Buff-side multipliers are ignored by design.
        registry.add(Effect::buff("ward", "Ward", 2).with_damage_taken_mul(0.1));

        assert!((registry.outgoing_damage_multiplier() - 0.4).abs() < 1e-12);
        assert_eq!(registry.damage_taken_multiplier(), 2.0);
    }
}
