//! Deterministic status-effect and combat resolution engine.
//!
//! `battle-core` defines the canonical battle rules: stat tables and their
//! recalculation, status effects with stacking policies and lifecycle hooks,
//! the damage/heal pipeline, abilities with cooldown gates, and delayed
//! follow-up actions. All state mutation flows through
//! [`engine::BattleEngine`]; randomness comes from an injected [`rng::BattleRng`]
//! oracle so a battle replays identically from its seed, and the presentation
//! layer observes outcomes through read-only [`events::BattleEvent`]s.
pub mod ability;
pub mod character;
pub mod combat;
pub mod config;
pub mod effect;
pub mod engine;
pub mod error;
pub mod events;
pub mod registry;
pub mod rng;
pub mod stats;

pub use ability::{Ability, AbilityEffect, AbilityId, ActionResult, TargetType};
pub use character::{Character, CharacterId, Team};
pub use combat::{DamageOutcome, DamageType, HealOutcome};
pub use config::BattleConfig;
pub use effect::{
    Effect, EffectDuration, EffectHooks, EffectId, EffectPolarity, HookAction, StackPolicy,
};
pub use engine::{BattleEngine, BattleState, DamageOptions, HealOptions};
pub use error::AbilityError;
pub use events::{BattleEvent, EventBus, EventSink};
pub use registry::{ApplyOutcome, EffectRegistry};
pub use rng::{BattleRng, SplitMix64};
pub use stats::{Modifier, ModifierOp, StatKind, StatTable, recalculate};
