//! Turn boundary hooks.
//!
//! The crate does not run a turn scheduler; an external turn engine owns
//! initiative order and calls these two entry points at the boundaries of
//! each character's turn:
//!
//! - [`BattleEngine::tick_turn_start`] at the start of the character's turn,
//!   before it acts: ability cooldowns step, `on_turn_start` hooks fire, and
//!   due follow-up actions resolve.
//! - [`BattleEngine::tick_duration`] at the end of the character's turn:
//!   ability disable counters and effect durations decrement, `on_tick`
//!   hooks fire, and expired effects detach.
//!
//! Keeping the duration pass separate from the turn-start pass means
//! `on_turn_start` hooks always observe pre-decrement durations.

use tracing::{debug, warn};

use crate::character::CharacterId;
use crate::events::BattleEvent;

use super::BattleEngine;
use super::state::PendingFollowUp;

impl<'a> BattleEngine<'a> {
    /// Start-of-turn pass for `id`.
    ///
    /// Dead characters do not tick; their queued follow-up actions are
    /// discarded since they can never come due.
    pub fn tick_turn_start(&mut self, id: CharacterId) {
        let Some(character) = self.character_mut(id) else {
            return;
        };
        if !character.is_alive() {
            self.state.follow_ups.retain(|f| f.source != id);
            return;
        }

        character.tick_ability_cooldowns();
        let hooks = character.effects().tick_turn_start();
        self.run_hooks(id, hooks);

        self.resolve_follow_ups(id);
    }

    /// End-of-turn duration pass for `id`.
    ///
    /// Every non-permanent effect loses one turn; `on_tick` fires after the
    /// decrement (including the expiring tick), then all effects that
    /// reached zero detach in the same pass, each firing `on_remove` once.
    pub fn tick_duration(&mut self, id: CharacterId) {
        let Some(character) = self.character_mut(id) else {
            return;
        };
        if !character.is_alive() {
            return;
        }

        character.tick_ability_disables();
        let tick = character.effects_mut().tick_duration();
        if !tick.expired.is_empty() {
            character.recalculate();
        }

        for effect in tick.expired {
            debug!(%id, %effect, "effect expired");
            self.emit(BattleEvent::EffectRemoved { target: id, effect });
        }
        self.run_hooks(id, tick.triggered);
    }

    /// Step this source's follow-up timers and execute everything due.
    fn resolve_follow_ups(&mut self, source: CharacterId) {
        let mut due = Vec::new();
        self.state.follow_ups.retain_mut(|follow_up| {
            if follow_up.source != source {
                return true;
            }
            follow_up.due_in = follow_up.due_in.saturating_sub(1);
            if follow_up.due_in == 0 {
                due.push(follow_up.clone());
                false
            } else {
                true
            }
        });

        for follow_up in due {
            self.execute_follow_up(follow_up);
        }
    }

    /// Execute one due follow-up, re-validating the target first: the
    /// battle may have moved on since it was enqueued.
    fn execute_follow_up(&mut self, follow_up: PendingFollowUp) {
        let PendingFollowUp {
            source,
            target,
            effects,
            crit_chance_override,
            ..
        } = follow_up;

        match self.state.character(target) {
            Some(c) if c.is_alive() => {}
            _ => {
                warn!(%source, %target, "follow-up dropped: target missing or dead");
                return;
            }
        }

        debug!(%source, %target, "executing follow-up action");
        let mut result = crate::ability::ActionResult {
            success: true,
            ..Default::default()
        };
        self.execute_effects(source, target, &effects, crit_chance_override, &mut result);
    }
}
