//! Topic-based event routing.
//!
//! Every [`arena_core::GameEvent`] raised by a tick is wrapped in an
//! [`Event`] and published on one [`Topic`], so a scoreboard can follow
//! kills without waking up for every ability cast.

mod bus;

pub use bus::{Event, EventBus, Topic};
