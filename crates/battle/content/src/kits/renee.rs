//! Renee, the lunar duelist: marks a target, then punishes the mark.

use battle_core::{
    Ability, AbilityEffect, DamageType, Effect, HookAction, StatKind, TargetType,
};

use crate::effects;

pub const LUNAR_MARK: &str = "lunar_mark";

/// Doubles damage taken while it holds; stuns for one turn when it expires.
/// Re-applying refreshes the duration, so the stun lands once per mark, not
/// once per hit.
pub fn lunar_mark() -> Effect {
    Effect::debuff(LUNAR_MARK, "Lunar Mark", 2)
        .with_icon("lunar_mark")
        .with_damage_taken_mul(2.0)
        .on_remove(HookAction::ApplyEffect(Box::new(effects::stun(1))))
}

/// Opener: moderate physical damage plus the mark.
pub fn crescent_strike() -> Ability {
    Ability::new("crescent_strike", "Crescent Strike", 25.0, 1, TargetType::Enemy)
        .with_effect(AbilityEffect::Damage {
            base: 80.0,
            damage_type: DamageType::Physical,
            scale: Some(StatKind::PhysicalDamage),
        })
        .with_effect(AbilityEffect::Apply(lunar_mark()))
}

/// Finisher: heavy magical damage with its own elevated critical chance.
pub fn moonfall() -> Ability {
    Ability::new("moonfall", "Moonfall", 60.0, 3, TargetType::Enemy)
        .with_crit_chance(0.5)
        .with_effect(AbilityEffect::Damage {
            base: 220.0,
            damage_type: DamageType::Magical,
            scale: Some(StatKind::MagicalDamage),
        })
}

pub fn abilities() -> Vec<Ability> {
    vec![crescent_strike(), moonfall()]
}
