//! Healing outcome type.

/// Result of one heal application.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealOutcome {
    /// HP actually restored, after clamping to the target's missing HP.
    pub heal_amount: f64,
    /// Excess heal converted to shield when the overheal policy is active;
    /// zero otherwise (excess is discarded).
    pub overheal_to_shield: f64,
    pub is_critical: bool,
}
