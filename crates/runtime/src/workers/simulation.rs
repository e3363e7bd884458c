//! Simulation worker that owns the authoritative [`arena_core::GameState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), queues
//! intents until the next tick, advances the match via
//! [`arena_core::GameEngine`], and publishes tick events to the EventBus.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use arena_core::{GameEngine, GameState, GameplayConfig, Intent, IntentQueue, TickOutcome};

use crate::events::{Event, EventBus};
use crate::snapshot::MatchSnapshot;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Queue an intent for the next tick.
    Submit { intent: Intent },
    /// Run one tick of `dt` milliseconds right away.
    Step {
        dt: u64,
        reply: oneshot::Sender<TickOutcome>,
    },
    /// Capture the state between ticks.
    Snapshot {
        reply: oneshot::Sender<MatchSnapshot>,
    },
    /// Stop the worker loop.
    Shutdown,
}

/// Background task that processes match commands and ticks.
pub struct SimulationWorker {
    state: GameState,
    config: GameplayConfig,
    intents: IntentQueue,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    tick_ms: u64,
    tick_interval: Option<Duration>,
}

impl SimulationWorker {
    /// Creates a new simulation worker.
    pub fn new(
        state: GameState,
        config: GameplayConfig,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        tick_ms: u64,
        tick_interval: Option<Duration>,
    ) -> Self {
        info!(
            preset = %config.name,
            combatants = state.combatants.len(),
            tick_ms,
            automatic = tick_interval.is_some(),
            "SimulationWorker initialized"
        );

        Self {
            state,
            config,
            intents: IntentQueue::new(),
            command_rx,
            event_bus,
            tick_ms,
            tick_interval,
        }
    }

    /// Main worker loop.
    ///
    /// With a tick interval, ticks of exactly `tick_ms` fire on a
    /// `tokio::time::interval`; otherwise the match only advances on
    /// [`Command::Step`].
    pub async fn run(mut self) {
        match self.tick_interval {
            Some(period) => {
                let mut interval = tokio::time::interval(period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                // The first tick of a tokio interval completes immediately.
                interval.tick().await;
                loop {
                    tokio::select! {
                        cmd = self.command_rx.recv() => match cmd {
                            Some(cmd) => {
                                if self.handle_command(cmd).is_break() {
                                    break;
                                }
                            }
                            None => break,
                        },
                        _ = interval.tick() => {
                            self.advance(self.tick_ms);
                        }
                    }
                }
            }
            None => {
                while let Some(cmd) = self.command_rx.recv().await {
                    if self.handle_command(cmd).is_break() {
                        break;
                    }
                }
            }
        }
        info!(game_time = self.state.game_time, "SimulationWorker stopped");
    }

    fn handle_command(&mut self, cmd: Command) -> ControlFlow<()> {
        match cmd {
            Command::Submit { intent } => {
                self.intents.push(intent);
            }
            Command::Step { dt, reply } => {
                let outcome = self.advance(dt);
                if reply.send(outcome).is_err() {
                    debug!("Step reply channel closed (caller dropped)");
                }
            }
            Command::Snapshot { reply } => {
                if reply.send(MatchSnapshot::new(&self.state)).is_err() {
                    debug!("Snapshot reply channel closed (caller dropped)");
                }
            }
            Command::Shutdown => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Runs one tick with every queued intent and publishes its events.
    fn advance(&mut self, dt: u64) -> TickOutcome {
        let intents = self.intents.drain();
        let outcome = GameEngine::new(&mut self.state, &self.config).tick(dt, intents);

        for event in &outcome.events {
            let event = Event::Game {
                game_time: outcome.game_time,
                event: event.clone(),
            };
            if let Some(team) = event.winner() {
                info!(%team, game_time = outcome.game_time, "match won");
            }
            self.event_bus.publish(event);
        }
        self.event_bus.publish(Event::TickCompleted {
            game_time: outcome.game_time,
        });
        outcome
    }
}
