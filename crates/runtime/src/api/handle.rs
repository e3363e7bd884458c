//! Client side of the simulation worker's command channel.
//!
//! Every clone talks to the same match. Calls only fail once the worker has
//! stopped.
use tokio::sync::{broadcast, mpsc, oneshot};

use arena_core::{Intent, TickOutcome};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::snapshot::MatchSnapshot;
use crate::workers::Command;

/// Cloneable handle to one running match.
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Queue an intent; it is validated and applied at the start of the next tick.
    ///
    /// Rejections are reported as `IntentRejected` events on [`Topic::Combat`].
    pub async fn submit(&self, intent: Intent) -> Result<()> {
        self.send(Command::Submit { intent }).await
    }

    /// Run one tick of `dt` milliseconds immediately and return its outcome.
    pub async fn step(&self, dt: u64) -> Result<TickOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Step { dt, reply: reply_tx }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Capture the match state as of the last completed tick.
    pub async fn snapshot(&self) -> Result<MatchSnapshot> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Snapshot { reply: reply_tx }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Receiver for one topic, starting with the next published event.
    ///
    /// # Topics
    ///
    /// - `Topic::Combat` - Ability casts, rejected intents, kills, respawns
    /// - `Topic::Progression` - Level-ups and rewards
    /// - `Topic::Match` - Tick completion and match victory
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use arena_runtime::Topic;
    ///
    /// let mut kills = handle.subscribe(Topic::Combat);
    /// while let Ok(event) = kills.recv().await {
    ///     // Handle combat events
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Shared bus, for publishing synthetic events in tools and tests.
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    pub(crate) async fn shutdown(&self) -> Result<()> {
        self.send(Command::Shutdown).await
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::ChannelClosed)
    }
}
