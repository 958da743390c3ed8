//! Tournament layer: Elo math, schedules, records, orchestration.

pub mod elo;
pub mod orchestrator;
pub mod records;
pub mod schedule;

pub use orchestrator::{Orchestrator, TournamentConfig};
pub use records::{AgentRecord, PairwiseRatings};
