//! Ability execution errors.
//!
//! Every variant short-circuits before any cost is spent: a rejected ability
//! consumes no mana and triggers no cooldown. Note what is *not* here:
//! removing an absent effect is a benign no-op, not an error, because
//! cleanup calls against already-cleared effects are an expected pattern.

use crate::ability::AbilityId;
use crate::character::CharacterId;

/// Why an ability use was rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum AbilityError {
    /// Caster is not in the battle.
    #[error("unknown character {0}")]
    UnknownCharacter(CharacterId),

    /// Caster does not have this ability.
    #[error("unknown ability '{0}'")]
    UnknownAbility(AbilityId),

    /// Dead characters act through no pipeline.
    #[error("caster {0} is dead")]
    CasterDead(CharacterId),

    /// Target is dead, missing, or of the wrong faction for the ability's
    /// target type.
    #[error("invalid target {target}: {reason}")]
    InvalidTarget {
        target: CharacterId,
        reason: &'static str,
    },

    /// Mana below the ability's cost.
    #[error("insufficient mana: need {required}, have {available}")]
    InsufficientMana { required: f64, available: f64 },

    /// Cooldown counter has not reached zero.
    #[error("ability on cooldown for {remaining} more turns")]
    OnCooldown { remaining: u32 },

    /// Force-disabled by a debuff or a per-ability disable counter,
    /// independent of cooldown.
    #[error("ability is disabled")]
    Disabled,
}

impl AbilityError {
    /// True for availability-gate rejections (cooldown/disable), as opposed
    /// to target or resource rejections.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::OnCooldown { .. } | Self::Disabled)
    }
}
