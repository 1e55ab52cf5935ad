//! Battle state: the characters and the follow-up queue.

use tracing::warn;

use crate::ability::AbilityEffect;
use crate::character::{Character, CharacterId};
use crate::config::BattleConfig;

/// A delayed secondary action (e.g. a random "second hit").
///
/// Enqueued on the battle state instead of a bare timer, so it resolves
/// inside the single-threaded turn boundary: it becomes due at the start of
/// the source's turn after `due_in` ticks and re-validates the target then.
#[derive(Clone, Debug)]
pub(crate) struct PendingFollowUp {
    pub source: CharacterId,
    pub target: CharacterId,
    /// Source turn-starts remaining before execution.
    pub due_in: u32,
    pub effects: Vec<AbilityEffect>,
    pub crit_chance_override: Option<f64>,
}

/// All mutable state of one battle session.
///
/// Each character exclusively owns its stat tables and effect registry; the
/// state only owns the roster, the follow-up queue, and the roll counter
/// that keeps chance rolls deterministic for a given seed.
pub struct BattleState {
    pub(crate) characters: Vec<Character>,
    pub(crate) follow_ups: Vec<PendingFollowUp>,
    pub(crate) config: BattleConfig,
    pub(crate) seed: u64,
    /// Monotonic roll counter; every chance roll consumes one.
    pub(crate) rolls: u64,
}

impl BattleState {
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, BattleConfig::default())
    }

    pub fn with_config(seed: u64, config: BattleConfig) -> Self {
        Self {
            characters: Vec::new(),
            follow_ups: Vec::new(),
            config,
            seed,
            rolls: 0,
        }
    }

    /// Add a character to the roster. Ids must be unique; a duplicate is
    /// logged and rejected rather than silently shadowing the original.
    pub fn add_character(&mut self, character: Character) {
        if self.characters.iter().any(|c| c.id == character.id) {
            warn!(id = %character.id, "duplicate character id rejected");
            return;
        }
        self.characters.push(character);
    }

    pub fn character(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub(crate) fn character_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Number of queued follow-up actions (mostly useful in tests).
    pub fn pending_follow_ups(&self) -> usize {
        self.follow_ups.len()
    }
}
