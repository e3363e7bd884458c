//! Match snapshots for the transport layer.
//!
//! A snapshot is taken between ticks only, so it is always internally
//! consistent. JSON is for tooling and debugging; the bincode form is what a
//! network layer would diff and stream.

use serde::{Deserialize, Serialize};

use arena_core::{GameState, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub game_time: Timestamp,
    pub state: GameState,
}

impl MatchSnapshot {
    pub fn new(state: &GameState) -> Self {
        Self {
            game_time: state.game_time,
            state: state.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}
