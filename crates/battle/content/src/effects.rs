//! Shared effect constructors used across kits.

use battle_core::{DamageType, Effect, HookAction};

/// Full incapacitation: every ability unusable while present.
pub fn stun(turns: u32) -> Effect {
    Effect::debuff("stun", "Stunned", turns)
        .with_icon("stun")
        .disabling_abilities()
}

/// Physical damage at the end of each of the owner's turns.
pub fn bleed(per_turn: f64, turns: u32) -> Effect {
    Effect::debuff("bleed", "Bleeding", turns)
        .with_icon("bleed")
        .on_tick(HookAction::DealDamage {
            amount: per_turn,
            damage_type: DamageType::Physical,
        })
}

/// Shrinks the damage the owner deals while present.
pub fn weaken(outgoing_mul: f64, turns: u32) -> Effect {
    Effect::debuff("weaken", "Weakened", turns)
        .with_icon("weaken")
        .with_outgoing_damage_mul(outgoing_mul)
}

/// Heals the owner at the start of each of its turns.
pub fn regen(per_turn: f64, turns: u32) -> Effect {
    Effect::buff("regen", "Regeneration", turns)
        .with_icon("regen")
        .on_turn_start(HookAction::Heal { amount: per_turn })
}
