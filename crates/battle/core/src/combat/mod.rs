//! Damage and healing math.
//!
//! Pure functions only: mitigation, critical scaling, shield absorption, and
//! the one rounding rule. The stateful pipeline that rolls dice, mutates
//! characters, and emits events lives in [`engine`](crate::engine); everything
//! here is deterministic and side-effect free so it can be tested in
//! isolation.

mod damage;
mod heal;

pub use damage::{DamageOutcome, DamageType, absorb_with_shield, mitigate, round_amount};
pub use heal::HealOutcome;
