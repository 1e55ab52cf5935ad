//! Effect (buff/debuff) definition.

use core::fmt;

use crate::stats::Modifier;

use super::hooks::{EffectHooks, HookAction};

/// Stable effect identifier, used for de-duplication within a registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectId(String);

impl EffectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EffectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Whether an effect is beneficial or harmful. Routes the effect into the
/// owner's buff or debuff list and drives mass-dispel operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EffectPolarity {
    Buff,
    Debuff,
}

/// Remaining lifetime of an effect, in the owner's turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectDuration {
    /// Expires after this many of the owner's turn ticks. Zero means expired.
    Turns(u32),
    /// Never expires on its own; only explicit removal detaches it.
    Permanent,
}

impl EffectDuration {
    pub fn is_expired(self) -> bool {
        matches!(self, Self::Turns(0))
    }
}

/// What happens when an effect is re-applied while already present.
///
/// The policy is declared at construction time, per effect kind. It is never
/// inferred: effects that refresh and effects that stack are deliberately
/// distinct kinds of content and must stay that way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StackPolicy {
    /// Reset the duration to the incoming effect's full duration; stacks stay
    /// at 1. This is the default and by far the most common policy.
    #[default]
    RefreshDuration,
    /// Increment the stack count (modifiers scale per stack) and refresh the
    /// duration. `max_stacks: None` means unbounded.
    IncrementStacks { max_stacks: Option<u32> },
    /// Keep both instances as independent registry entries.
    Duplicate,
}

/// A timed buff or debuff: declarative modifier list plus lifecycle hooks.
///
/// Built with the fluent constructors below; an `Effect` value doubles as the
/// blueprint that abilities clone onto their targets.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub id: EffectId,
    pub name: String,
    /// Presentation-layer icon key. Carried, never interpreted.
    pub icon: Option<String>,
    pub polarity: EffectPolarity,
    pub duration: EffectDuration,
    pub stacks: u32,
    pub policy: StackPolicy,
    pub modifiers: Vec<Modifier>,
    pub hooks: EffectHooks,
    /// Multiplies damage *dealt by* the owner while present. Product-combined
    /// across the owner's debuffs by the pipeline.
    pub outgoing_damage_mul: Option<f64>,
    /// Multiplies damage *taken by* the owner while present.
    pub damage_taken_mul: Option<f64>,
    /// While present, every ability of the owner is unusable.
    pub disables_abilities: bool,
}

impl Effect {
    fn new(id: EffectId, name: impl Into<String>, polarity: EffectPolarity, turns: u32) -> Self {
        Self {
            id,
            name: name.into(),
            icon: None,
            polarity,
            duration: EffectDuration::Turns(turns),
            stacks: 1,
            policy: StackPolicy::RefreshDuration,
            modifiers: Vec::new(),
            hooks: EffectHooks::default(),
            outgoing_damage_mul: None,
            damage_taken_mul: None,
            disables_abilities: false,
        }
    }

    /// A beneficial effect lasting `turns` owner turns.
    pub fn buff(id: impl Into<String>, name: impl Into<String>, turns: u32) -> Self {
        Self::new(EffectId::new(id), name, EffectPolarity::Buff, turns)
    }

    /// A harmful effect lasting `turns` owner turns.
    pub fn debuff(id: impl Into<String>, name: impl Into<String>, turns: u32) -> Self {
        Self::new(EffectId::new(id), name, EffectPolarity::Debuff, turns)
    }

    pub fn permanent(mut self) -> Self {
        self.duration = EffectDuration::Permanent;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    pub fn with_policy(mut self, policy: StackPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_outgoing_damage_mul(mut self, mul: f64) -> Self {
        self.outgoing_damage_mul = Some(mul);
        self
    }

    pub fn with_damage_taken_mul(mut self, mul: f64) -> Self {
        self.damage_taken_mul = Some(mul);
        self
    }

    pub fn disabling_abilities(mut self) -> Self {
        self.disables_abilities = true;
        self
    }

    pub fn on_apply(mut self, action: HookAction) -> Self {
        self.hooks.on_apply.push(action);
        self
    }

    pub fn on_turn_start(mut self, action: HookAction) -> Self {
        self.hooks.on_turn_start.push(action);
        self
    }

    pub fn on_tick(mut self, action: HookAction) -> Self {
        self.hooks.on_tick.push(action);
        self
    }

    pub fn on_remove(mut self, action: HookAction) -> Self {
        self.hooks.on_remove.push(action);
        self
    }

    pub fn is_debuff(&self) -> bool {
        self.polarity == EffectPolarity::Debuff
    }
}
