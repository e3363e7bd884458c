//! Match host: spawns the simulation worker and hands out handles.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;

use arena_content::PresetRegistry;
use arena_core::{GameState, GameplayConfig};

use crate::api::{Result, RuntimeError, RuntimeHandle};
use crate::events::{Event, EventBus, Topic};
use crate::workers::SimulationWorker;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub gameplay: GameplayConfig,
    /// Simulated milliseconds per automatic tick.
    pub tick_ms: u64,
    /// Wall-clock period between automatic ticks. `None` means the match
    /// only advances through [`RuntimeHandle::step`].
    pub tick_interval: Option<Duration>,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            gameplay: GameplayConfig::default(),
            tick_ms: 50,
            tick_interval: None,
            event_buffer_size: 256,
            command_buffer_size: 64,
        }
    }
}

/// Main runtime that hosts one match
///
/// Owns the simulation worker; [`RuntimeHandle`] is the cloneable façade
/// for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    sim_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Starts from [`RuntimeConfig::default`] and an empty seed-0 state.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to one event topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.handle.subscribe(topic)
    }

    /// Stop the simulation worker and wait for it to exit.
    ///
    /// Outstanding handle clones fail with [`RuntimeError::ChannelClosed`]
    /// afterwards.
    pub async fn shutdown(self) -> Result<()> {
        self.handle.shutdown().await?;
        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

/// Collects the initial state and configuration for [`Runtime`].
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    state: Option<GameState>,
    seed: u64,
    preset: Option<String>,
    presets: Option<PresetRegistry>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            state: None,
            seed: 0,
            preset: None,
            presets: None,
        }
    }

    /// Replaces the whole configuration, including any earlier gameplay tweaks.
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Provide the initial match state. Without one, an empty state seeded
    /// with [`seed`](Self::seed) is used.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Seed for the default empty state.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the gameplay config with a named preset, resolved at build time.
    pub fn preset(mut self, name: impl Into<String>) -> Self {
        self.preset = Some(name.into());
        self
    }

    /// Registry used to resolve [`preset`](Self::preset). Defaults to the
    /// built-in presets.
    pub fn presets(mut self, registry: PresetRegistry) -> Self {
        self.presets = Some(registry);
        self
    }

    /// Spawn the simulation worker and return the running runtime.
    pub async fn build(self) -> Result<Runtime> {
        let RuntimeBuilder {
            mut config,
            state,
            seed,
            preset,
            presets,
        } = self;

        if let Some(name) = preset {
            let registry = presets.unwrap_or_default();
            config.gameplay = registry.get(&name)?.clone();
        }
        config.gameplay.validate()?;
        if config.tick_ms == 0 {
            return Err(RuntimeError::ZeroTick);
        }

        let state = state.unwrap_or_else(|| GameState::new(seed));
        let (command_tx, command_rx) = mpsc::channel(config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(config.event_buffer_size);

        let worker = SimulationWorker::new(
            state,
            config.gameplay,
            command_rx,
            event_bus.clone(),
            config.tick_ms,
            config.tick_interval,
        );
        let sim_worker_handle = tokio::spawn(worker.run());

        Ok(Runtime {
            handle: RuntimeHandle::new(command_tx, event_bus),
            sim_worker_handle,
        })
    }
}
