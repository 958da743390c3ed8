//! Core types: seats, per-seat storage, deterministic RNG, configuration.

pub mod config;
pub mod rng;
pub mod seat;

pub use config::{GameVariant, TournamentFormat};
pub use rng::GameRng;
pub use seat::{Seat, SeatMap};
