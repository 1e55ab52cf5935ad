//! Ability execution: gate checks, target validation, effect interpretation.

use tracing::debug;

use crate::ability::{AbilityEffect, AbilityId, ActionResult, TargetType};
use crate::character::CharacterId;
use crate::error::AbilityError;
use crate::events::BattleEvent;
use crate::rng::roll_context;
use crate::stats::StatKind;

use super::BattleEngine;
use super::pipeline::{DamageOptions, HealOptions};
use super::state::PendingFollowUp;

impl<'a> BattleEngine<'a> {
    /// Execute one ability against resolved targets.
    ///
    /// All gates are checked before anything is spent: a rejected use
    /// consumes no mana and triggers no cooldown. The gate order is fixed:
    /// caster existence, caster liveness, ability lookup, disable, cooldown,
    /// mana, then target validation.
    ///
    /// Self-targeting abilities resolve to the caster when `targets` is
    /// empty.
    pub fn use_ability(
        &mut self,
        caster: CharacterId,
        ability_id: &AbilityId,
        targets: &[CharacterId],
    ) -> Result<ActionResult, AbilityError> {
        let caster_char = self
            .state()
            .character(caster)
            .ok_or(AbilityError::UnknownCharacter(caster))?;
        if !caster_char.is_alive() {
            return Err(AbilityError::CasterDead(caster));
        }

        let ability = caster_char
            .ability(ability_id)
            .ok_or_else(|| AbilityError::UnknownAbility(ability_id.clone()))?;

        if ability.disabled_for() > 0 || caster_char.abilities_disabled() {
            return Err(AbilityError::Disabled);
        }
        if ability.cooldown_remaining() > 0 {
            return Err(AbilityError::OnCooldown {
                remaining: ability.cooldown_remaining(),
            });
        }
        if caster_char.stats().current_mana < ability.mana_cost {
            return Err(AbilityError::InsufficientMana {
                required: ability.mana_cost,
                available: caster_char.stats().current_mana,
            });
        }

        // Snapshot what execution needs; the caster borrow ends here.
        let mana_cost = ability.mana_cost;
        let target_type = ability.target_type;
        let effects = ability.effects.clone();
        let does_not_end_turn = ability.does_not_end_turn;
        let crit_chance_override = ability.crit_chance_override;

        let resolved = self.validate_targets(caster, target_type, targets)?;

        // Gates passed: costs are committed now.
        if let Some(c) = self.character_mut(caster) {
            c.spend_mana(mana_cost);
            if let Some(a) = c.ability_mut(ability_id) {
                a.trigger_cooldown();
            }
        }
        self.emit(BattleEvent::AbilityUsed {
            caster,
            ability: ability_id.clone(),
        });
        debug!(%caster, ability = %ability_id, targets = ?resolved, "ability used");

        let mut result = ActionResult {
            success: true,
            targets: resolved.clone(),
            does_not_end_turn,
            ..Default::default()
        };
        for target in resolved {
            self.execute_effects(caster, target, &effects, crit_chance_override, &mut result);
        }
        Ok(result)
    }

    /// Resolve and faction-check the target list for one target type.
    fn validate_targets(
        &self,
        caster: CharacterId,
        target_type: TargetType,
        targets: &[CharacterId],
    ) -> Result<Vec<CharacterId>, AbilityError> {
        let resolved: Vec<CharacterId> =
            if targets.is_empty() && matches!(target_type, TargetType::SelfOnly) {
                vec![caster]
            } else {
                targets.to_vec()
            };

        if resolved.is_empty() {
            return Err(AbilityError::InvalidTarget {
                target: caster,
                reason: "no targets provided",
            });
        }

        // Caster existence was checked by the caller.
        let caster_team = match self.state().character(caster) {
            Some(c) => c.team,
            None => return Err(AbilityError::UnknownCharacter(caster)),
        };

        for &target in &resolved {
            let character =
                self.state()
                    .character(target)
                    .ok_or(AbilityError::InvalidTarget {
                        target,
                        reason: "not in this battle",
                    })?;
            if !character.is_alive() {
                return Err(AbilityError::InvalidTarget {
                    target,
                    reason: "target is dead",
                });
            }
            let legal = match target_type {
                TargetType::SelfOnly => target == caster,
                TargetType::Ally => character.team == caster_team && target != caster,
                TargetType::AllyOrSelf => character.team == caster_team,
                TargetType::Enemy => character.team != caster_team,
                TargetType::Any | TargetType::All => true,
            };
            if !legal {
                return Err(AbilityError::InvalidTarget {
                    target,
                    reason: "wrong faction for this ability",
                });
            }
        }
        Ok(resolved)
    }

    /// Interpret an effect list against one target, accumulating totals
    /// into `result`. Shared by direct ability use and due follow-ups.
    pub(super) fn execute_effects(
        &mut self,
        caster: CharacterId,
        target: CharacterId,
        effects: &[AbilityEffect],
        crit_chance_override: Option<f64>,
        result: &mut ActionResult,
    ) {
        for effect in effects {
            match effect {
                AbilityEffect::Damage {
                    base,
                    damage_type,
                    scale,
                } => {
                    let amount = base + self.scale_amount(caster, *scale);
                    let outcome = self.apply_damage(
                        Some(caster),
                        target,
                        amount,
                        *damage_type,
                        DamageOptions {
                            crit_chance_override,
                            ..DamageOptions::default()
                        },
                    );
                    result.damage += outcome.damage;
                    result.is_critical |= outcome.is_critical;
                    // A dodged hit cancels the rest of the sequence against
                    // this target: rider debuffs never land on a miss.
                    if outcome.is_dodged {
                        break;
                    }
                }
                AbilityEffect::Heal { base, overheal } => {
                    let outcome = self.heal(
                        Some(caster),
                        target,
                        *base,
                        HealOptions {
                            overheal: *overheal,
                            ..HealOptions::default()
                        },
                    );
                    result.heal_amount += outcome.heal_amount;
                    result.is_critical |= outcome.is_critical;
                }
                AbilityEffect::RestoreMana { amount } => {
                    if let Some(c) = self.character_mut(target) {
                        c.gain_mana(*amount);
                    }
                }
                AbilityEffect::Apply(effect) => {
                    self.apply_effect(target, effect.clone());
                }
                AbilityEffect::Remove(id) => {
                    self.remove_effect(target, id);
                }
                AbilityEffect::Cleanse => {
                    self.clear_debuffs(target);
                }
                AbilityEffect::ReduceCooldown { ability, amount } => {
                    if let Some(c) = self.character_mut(target) {
                        c.reduce_cooldown(ability, *amount);
                    }
                }
                AbilityEffect::FollowUp {
                    chance,
                    delay_turns,
                    effects,
                } => {
                    if self.chance(*chance, roll_context::FOLLOW_UP) {
                        let due_in = (*delay_turns)
                            .clamp(1, self.state().config().max_follow_up_delay);
                        debug!(%caster, %target, due_in, "follow-up enqueued");
                        self.state.follow_ups.push(PendingFollowUp {
                            source: caster,
                            target,
                            due_in,
                            effects: effects.clone(),
                            crit_chance_override,
                        });
                    }
                }
            }
        }
    }

    fn scale_amount(&self, caster: CharacterId, scale: Option<StatKind>) -> f64 {
        match (scale, self.state().character(caster)) {
            (Some(stat), Some(c)) => c.stats().get(stat),
            _ => 0.0,
        }
    }
}
