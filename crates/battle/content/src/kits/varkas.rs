//! Varkas, the bruiser: bleeds, intimidation, and a haymaker.

use battle_core::{Ability, AbilityEffect, DamageType, StatKind, TargetType};

use crate::effects;

/// Tears a wound open: modest hit plus a three-turn bleed.
pub fn rend() -> Ability {
    Ability::new("rend", "Rend", 20.0, 1, TargetType::Enemy)
        .with_effect(AbilityEffect::Damage {
            base: 60.0,
            damage_type: DamageType::Physical,
            scale: Some(StatKind::PhysicalDamage),
        })
        .with_effect(AbilityEffect::Apply(effects::bleed(35.0, 3)))
}

/// Halves the target's outgoing damage for two turns.
pub fn demoralize() -> Ability {
    Ability::new("demoralize", "Demoralize", 30.0, 2, TargetType::Enemy)
        .with_effect(AbilityEffect::Apply(effects::weaken(0.5, 2)))
}

/// Heavy hit that leaves the target stunned for a turn.
pub fn skull_crack() -> Ability {
    Ability::new("skull_crack", "Skull Crack", 50.0, 4, TargetType::Enemy)
        .with_effect(AbilityEffect::Damage {
            base: 150.0,
            damage_type: DamageType::Physical,
            scale: Some(StatKind::PhysicalDamage),
        })
        .with_effect(AbilityEffect::Apply(effects::stun(1)))
}

pub fn abilities() -> Vec<Ability> {
    vec![rend(), demoralize(), skull_crack()]
}
