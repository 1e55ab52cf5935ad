//! Damage and heal pipeline.
//!
//! Resolution order for damage, fixed by design:
//! dodge roll → critical roll → attacker-side outgoing multipliers →
//! flat mitigation → target-side incoming multipliers → rounding →
//! shield absorption → HP subtraction → death check.

use tracing::debug;

use crate::character::CharacterId;
use crate::combat::{
    DamageOutcome, DamageType, HealOutcome, absorb_with_shield, mitigate, round_amount,
};
use crate::events::BattleEvent;
use crate::rng::roll_context;

use super::BattleEngine;

/// Per-call switches for [`BattleEngine::apply_damage`].
#[derive(Clone, Copy, Debug)]
pub struct DamageOptions {
    pub can_dodge: bool,
    pub can_crit: bool,
    /// Ability-specific critical chance replacing the source's stat.
    pub crit_chance_override: Option<f64>,
}

impl Default for DamageOptions {
    fn default() -> Self {
        Self {
            can_dodge: true,
            can_crit: true,
            crit_chance_override: None,
        }
    }
}

impl DamageOptions {
    /// Hook-triggered damage (DoT ticks, expiry bursts): no dodge, no crit.
    pub fn hook() -> Self {
        Self {
            can_dodge: false,
            can_crit: false,
            crit_chance_override: None,
        }
    }
}

/// Per-call switches for [`BattleEngine::heal`].
#[derive(Clone, Copy, Debug)]
pub struct HealOptions {
    /// Convert heal beyond missing HP into shield instead of discarding it.
    pub overheal: bool,
    pub can_crit: bool,
}

impl Default for HealOptions {
    fn default() -> Self {
        Self {
            overheal: false,
            can_crit: true,
        }
    }
}

impl HealOptions {
    /// Hook-triggered healing (regen ticks): no crit, no overheal.
    pub fn hook() -> Self {
        Self {
            overheal: false,
            can_crit: false,
        }
    }
}

/// Attacker-side values snapshotted before the target is mutated, so the
/// pipeline works unchanged for self-damage.
struct SourceSnapshot {
    crit_chance: f64,
    crit_damage: f64,
    outgoing_mul: f64,
    healing_power: f64,
}

impl<'a> BattleEngine<'a> {
    fn snapshot_source(&self, source: Option<CharacterId>) -> SourceSnapshot {
        match source.and_then(|id| self.state().character(id)) {
            Some(c) => SourceSnapshot {
                crit_chance: c.stats().crit_chance,
                crit_damage: c.stats().crit_damage,
                outgoing_mul: c.effects().outgoing_damage_multiplier(),
                healing_power: c.stats().healing_power,
            },
            // Sourceless (environmental / hook) actions: never crit, no
            // outgoing modifiers, no healing power scaling.
            None => SourceSnapshot {
                crit_chance: 0.0,
                crit_damage: 0.0,
                outgoing_mul: 1.0,
                healing_power: 0.0,
            },
        }
    }

    fn crit_multiplier(&self, snapshot: &SourceSnapshot) -> f64 {
        if snapshot.crit_damage > 0.0 {
            snapshot.crit_damage
        } else {
            self.state().config().default_crit_damage
        }
    }

    /// Apply damage to `target`.
    ///
    /// A missing or dead target is a silent no-op returning a zeroed
    /// outcome: delayed callbacks and hook cascades are expected to land
    /// late. A successful dodge also short-circuits with zero damage and no
    /// side effects of any kind.
    pub fn apply_damage(
        &mut self,
        source: Option<CharacterId>,
        target: CharacterId,
        amount: f64,
        damage_type: DamageType,
        options: DamageOptions,
    ) -> DamageOutcome {
        let snapshot = self.snapshot_source(source);

        let (dodge_chance, taken_mul, target_stats) = match self.state().character(target) {
            Some(c) if c.is_alive() => (
                c.stats().dodge_chance,
                c.effects().damage_taken_multiplier(),
                c.stats().clone(),
            ),
            _ => {
                debug!(%target, "damage dropped: target missing or dead");
                return DamageOutcome::default();
            }
        };

        if options.can_dodge && self.chance(dodge_chance, roll_context::DODGE) {
            let outcome = DamageOutcome::dodged();
            self.emit(BattleEvent::DamageDealt {
                source,
                target,
                damage: 0.0,
                damage_type,
                is_critical: false,
                is_dodged: true,
            });
            return outcome;
        }

        let crit_chance = options.crit_chance_override.unwrap_or(snapshot.crit_chance);
        let is_critical = options.can_crit && self.chance(crit_chance, roll_context::CRIT);

        let mut amount = amount;
        if is_critical {
            amount *= self.crit_multiplier(&snapshot);
        }
        amount *= snapshot.outgoing_mul;
        amount = mitigate(amount, damage_type, &target_stats);
        amount *= taken_mul;
        let damage = round_amount(amount);

        let Some(character) = self.state.character_mut(target) else {
            return DamageOutcome::default();
        };
        let (absorbed, hp_loss) = absorb_with_shield(character.shield(), damage);
        character.consume_shield(absorbed);
        character.lose_hp(hp_loss);
        let died = character.mark_dead();

        self.emit(BattleEvent::DamageDealt {
            source,
            target,
            damage,
            damage_type,
            is_critical,
            is_dodged: false,
        });
        if died {
            self.emit(BattleEvent::CharacterDied { character: target });
        }

        DamageOutcome {
            damage,
            absorbed,
            is_critical,
            is_dodged: false,
        }
    }

    /// Heal `target`.
    ///
    /// The amount scales with the healer's `healing_power` (`× (1 + hp)`),
    /// then rolls the healer's critical chance. With the overheal policy
    /// active, heal beyond the target's missing HP becomes shield; otherwise
    /// the excess is discarded.
    pub fn heal(
        &mut self,
        source: Option<CharacterId>,
        target: CharacterId,
        amount: f64,
        options: HealOptions,
    ) -> HealOutcome {
        let snapshot = self.snapshot_source(source);

        match self.state().character(target) {
            Some(c) if c.is_alive() => {}
            _ => {
                debug!(%target, "heal dropped: target missing or dead");
                return HealOutcome::default();
            }
        }

        let is_critical =
            options.can_crit && self.chance(snapshot.crit_chance, roll_context::CRIT);

        let mut amount = amount * (1.0 + snapshot.healing_power);
        if is_critical {
            amount *= self.crit_multiplier(&snapshot);
        }
        let total = round_amount(amount);

        let Some(character) = self.state.character_mut(target) else {
            return HealOutcome::default();
        };
        let missing = character.stats().max_hp - character.stats().current_hp;
        let heal_amount = total.min(missing);
        character.gain_hp(heal_amount);

        let excess = total - heal_amount;
        let overheal_to_shield = if options.overheal && excess > 0.0 {
            character.gain_shield(excess);
            excess
        } else {
            0.0
        };

        self.emit(BattleEvent::HealingDone {
            source,
            target,
            amount: heal_amount,
            is_critical,
        });

        HealOutcome {
            heal_amount,
            overheal_to_shield,
            is_critical,
        }
    }
}
