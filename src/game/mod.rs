//! The game state machine and its masked query surface.

pub mod engine;
pub mod player;
pub mod view;

pub use engine::{Game, TurnOutcome, TurnOutcomes};
pub use player::Player;
pub use view::{GameStateView, SeatView};
