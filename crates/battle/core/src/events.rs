//! Battle event notifications.
//!
//! The presentation layer observes the battle through read-only events on an
//! in-process bus with structured payloads, never through shared mutable
//! state. Sinks receive `&BattleEvent` through `&self` and cannot mutate
//! engine state.

use crate::ability::AbilityId;
use crate::character::CharacterId;
use crate::combat::DamageType;
use crate::effect::EffectId;

/// Read-only notification emitted by the engine.
#[derive(Clone, Debug, PartialEq)]
pub enum BattleEvent {
    AbilityUsed {
        caster: CharacterId,
        ability: AbilityId,
    },
    EffectApplied {
        target: CharacterId,
        effect: EffectId,
        debuff: bool,
    },
    /// A same-id re-application that refreshed or stacked instead of
    /// attaching a new instance.
    EffectRefreshed {
        target: CharacterId,
        effect: EffectId,
        stacks: u32,
    },
    EffectRemoved {
        target: CharacterId,
        effect: EffectId,
    },
    DamageDealt {
        source: Option<CharacterId>,
        target: CharacterId,
        damage: f64,
        damage_type: DamageType,
        is_critical: bool,
        is_dodged: bool,
    },
    HealingDone {
        source: Option<CharacterId>,
        target: CharacterId,
        amount: f64,
        is_critical: bool,
    },
    CharacterDied {
        character: CharacterId,
    },
}

/// Read-only event observer.
pub trait EventSink: Send + Sync {
    fn publish(&self, event: &BattleEvent);
}

impl<F> EventSink for F
where
    F: Fn(&BattleEvent) + Send + Sync,
{
    fn publish(&self, event: &BattleEvent) {
        self(event)
    }
}

/// Fan-out bus over registered sinks.
#[derive(Default)]
pub struct EventBus {
    sinks: Vec<Box<dyn EventSink>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    pub fn publish(&self, event: &BattleEvent) {
        for sink in &self.sinks {
            sink.publish(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn bus_fans_out_to_every_sink() {
        let seen: &'static Mutex<Vec<String>> = Box::leak(Box::new(Mutex::new(Vec::new())));

        let mut bus = EventBus::new();
        bus.subscribe(Box::new(|e: &BattleEvent| {
            seen.lock().unwrap().push(format!("a:{e:?}"));
        }));
        bus.subscribe(Box::new(|e: &BattleEvent| {
            seen.lock().unwrap().push(format!("b:{e:?}"));
        }));

        bus.publish(&BattleEvent::CharacterDied {
            character: CharacterId(3),
        });
        assert_eq!(seen.lock().unwrap().len(), 2);
    }
}
