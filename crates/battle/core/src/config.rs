//! Battle configuration constants and tunable parameters.

/// Tunable battle parameters.
///
/// Loadable from TOML via the content crate; defaults match the values the
/// original balance tables shipped with.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Critical damage multiplier used when a character's `crit_damage` stat
    /// is unset (zero).
    pub default_crit_damage: f64,

    /// Upper bound on follow-up action delays. Content asking for more is
    /// clamped, keeping delayed hits within a reviewable horizon.
    pub max_follow_up_delay: u32,
}

impl BattleConfig {
    pub const DEFAULT_CRIT_DAMAGE: f64 = 2.0;
    pub const DEFAULT_MAX_FOLLOW_UP_DELAY: u32 = 3;

    pub fn new() -> Self {
        Self {
            default_crit_damage: Self::DEFAULT_CRIT_DAMAGE,
            max_follow_up_delay: Self::DEFAULT_MAX_FOLLOW_UP_DELAY,
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
