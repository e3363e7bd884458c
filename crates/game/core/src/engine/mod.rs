//! Tick orchestration.
//!
//! The [`GameEngine`] is the authoritative driver of [`GameState`]. One call
//! to [`GameEngine::tick`] drains the pending intents, advances the clock by
//! `dt`, and runs every subsystem once in a fixed order:
//!
//! ```text
//! intents → clock → respawns → effects → passive heal → movement
//!         → projectiles → zones → collisions → auto-attacks → cleanup
//! ```
//!
//! Ordering within a tick is the only concurrency contract: effects move
//! combatants before collisions separate them, and collisions settle before
//! attacks measure range. No subsystem failure aborts a tick.

mod errors;
mod intent;
pub mod movement;

pub use errors::{IntentError, SimError};
pub use intent::{Intent, IntentQueue, apply_intent};
pub use movement::update_movement;

use crate::combat::{
    process_respawns, remove_dead, resolve_collisions, update_auto_attacks, update_projectiles,
    update_zones,
};
use crate::config::GameplayConfig;
use crate::effect::{apply_passive_healing, update_effects};
use crate::error::GameError;
use crate::event::GameEvent;
use crate::state::{GameState, Timestamp};

/// Everything observable about one tick.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickOutcome {
    /// Clock value after the tick.
    pub game_time: Timestamp,
    /// Events raised during the tick, in the order they happened.
    pub events: Vec<GameEvent>,
}

/// Drives a [`GameState`] under one immutable [`GameplayConfig`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameplayConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, config: &'a GameplayConfig) -> Self {
        Self { state, config }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Applies `intents` in order, then advances the simulation by `dt`
    /// milliseconds.
    ///
    /// Intents are validated against the state at the start of the tick.
    /// Rejections are reported as [`GameEvent::IntentRejected`] and leave the
    /// state untouched. Once a team has won, the state no longer advances.
    pub fn tick(&mut self, dt: u64, intents: impl IntoIterator<Item = Intent>) -> TickOutcome {
        if self.state.winner.is_some() {
            return TickOutcome {
                game_time: self.state.game_time,
                events: Vec::new(),
            };
        }

        for intent in intents {
            self.submit(&intent);
        }

        self.state.game_time = self.state.game_time.saturating_add(dt);
        self.advance(dt);

        TickOutcome {
            game_time: self.state.game_time,
            events: self.state.take_events(),
        }
    }

    /// Applies one intent immediately, recording a rejection event on failure.
    fn submit(&mut self, intent: &Intent) {
        if let Err(err) = apply_intent(self.state, self.config, intent) {
            let severity = err.severity();
            if severity.is_internal() {
                tracing::warn!(
                    hero = %intent.hero(),
                    code = err.error_code(),
                    severity = severity.as_str(),
                    %err,
                    "intent failed"
                );
            } else {
                tracing::debug!(
                    hero = %intent.hero(),
                    code = err.error_code(),
                    severity = severity.as_str(),
                    %err,
                    "intent rejected"
                );
            }
            self.state.emit(GameEvent::IntentRejected {
                hero: intent.hero(),
                code: err.error_code().to_string(),
                reason: err.to_string(),
            });
        }
    }

    fn advance(&mut self, dt: u64) {
        let (state, config) = (&mut *self.state, self.config);
        process_respawns(state, config);
        update_effects(state, config, dt);
        apply_passive_healing(state, config, dt);
        update_movement(state, config, dt);
        update_projectiles(state, config, dt);
        update_zones(state, config);
        resolve_collisions(state, config);
        update_auto_attacks(state, config);
        remove_dead(state);
    }
}
