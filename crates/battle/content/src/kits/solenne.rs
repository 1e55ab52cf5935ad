//! Solenne, the field medic: heals, shields, and tempo support.

use battle_core::{Ability, AbilityEffect, AbilityId, TargetType};

use crate::effects;

/// Large single-target heal; excess becomes shield.
pub fn mend() -> Ability {
    Ability::new("mend", "Mend", 40.0, 1, TargetType::AllyOrSelf).with_effect(
        AbilityEffect::Heal {
            base: 300.0,
            overheal: true,
        },
    )
}

/// Regeneration over three turns.
pub fn renewal() -> Ability {
    Ability::new("renewal", "Renewal", 30.0, 2, TargetType::AllyOrSelf)
        .with_effect(AbilityEffect::Apply(effects::regen(45.0, 3)))
}

/// Strip every debuff from an ally.
pub fn cleanse() -> Ability {
    Ability::new("cleanse", "Cleanse", 35.0, 2, TargetType::AllyOrSelf)
        .with_effect(AbilityEffect::Cleanse)
}

/// Shave turns off an ally's cooldown for the named ability. Does not end
/// the caster's turn, so it chains into the hastened play.
pub fn quicken(hastened: impl Into<AbilityId>) -> Ability {
    Ability::new("quicken", "Quicken", 20.0, 3, TargetType::AllyOrSelf)
        .keeps_turn()
        .with_effect(AbilityEffect::ReduceCooldown {
            ability: hastened.into(),
            amount: 2,
        })
}

pub fn abilities() -> Vec<Ability> {
    // Solenne runs alongside Renee; her tempo tool targets the finisher.
    vec![mend(), renewal(), cleanse(), quicken("moonfall")]
}
