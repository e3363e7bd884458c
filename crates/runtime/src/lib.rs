//! Match runtime for the deterministic arena simulation.
//!
//! This crate owns one authoritative [`arena_core::GameState`] on a
//! background task, queues player intents, drives fixed-step ticks, and
//! fans tick events out to subscribers. Consumers embed [`Runtime`] and
//! interact with the match through a cloneable [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`snapshot`] encodes match snapshots for transport
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod runtime;
pub mod snapshot;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{Event, EventBus, Topic};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use snapshot::MatchSnapshot;
