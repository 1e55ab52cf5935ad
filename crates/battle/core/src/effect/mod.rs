//! Buffs and debuffs.
//!
//! An effect is pure data: a stable id, a duration in owner turns, a
//! declarative modifier list, an explicit stacking policy, and lifecycle
//! hooks expressed as [`HookAction`] variants. The engine owns all behavior;
//! content only assembles values.

mod definition;
mod hooks;

pub use definition::{Effect, EffectDuration, EffectId, EffectPolarity, StackPolicy};
pub use hooks::{EffectHooks, HookAction};
