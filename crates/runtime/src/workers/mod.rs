//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker is the only owner of the match state; everything
//! else talks to it through [`Command`]s.

mod simulation;

pub use simulation::{Command, SimulationWorker};
