//! # gops-sim
//!
//! A simulator and tournament runner for GOPS (Game of Pure Strategy) and
//! two richer variants with Spy and Bomb cards and negative prizes.
//!
//! ## Design Principles
//!
//! 1. **Masked State**: Agents only ever see the game through a masked
//!    view; a sealed bid reports as still in hand until a Spy exposes it.
//!
//! 2. **Deterministic Replay**: Every shuffle and draw goes through an
//!    explicit seedable RNG, so a whole tournament replays from one seed.
//!
//! 3. **Loud Contract Violations**: Recoverable configuration mistakes
//!    return [`ConfigError`]; an agent bidding a card it does not hold
//!    panics at the point of breach.
//!
//! ## Modules
//!
//! - `core`: Seats, per-seat storage, RNG, game/tournament configuration
//! - `cards`: Cards, location states, piles, the prize deck, player hands
//! - `game`: Turn state machine, resolution, masked views
//! - `agents`: The `Agent` trait, registry, and example strategies
//! - `tourney`: Elo math, schedules, records, the orchestrator
//!
//! ## Quick Start
//!
//! ```
//! use gops_sim::agents::AgentRegistry;
//! use gops_sim::core::GameVariant;
//! use gops_sim::tourney::{Orchestrator, TournamentConfig};
//!
//! let registry = AgentRegistry::builtin();
//! let config = TournamentConfig {
//!     variant: GameVariant::Bgops,
//!     matches_per_pairing: 1,
//!     games_per_match: 10,
//!     seed: 42,
//!     ..TournamentConfig::default()
//! };
//! let agents = vec![
//!     registry.create("random", config.variant, 1).unwrap(),
//!     registry.create("matching_plus_spy", config.variant, 2).unwrap(),
//! ];
//! let mut tournament = Orchestrator::new(config, agents).unwrap();
//! tournament.run();
//! assert_eq!(tournament.records().len(), 2);
//! ```

pub mod agents;
pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod tourney;

// Re-export commonly used types
pub use crate::core::{GameRng, GameVariant, Seat, SeatMap, TournamentFormat};

pub use crate::cards::{Card, CardState, CardView, Deck, Hand, Pile, Suit, BOMB_VALUE, SPY_VALUE};

pub use crate::game::{Game, GameStateView, Player, SeatView, TurnOutcome, TurnOutcomes};

pub use crate::agents::{Agent, AgentRegistry, TurnResult};

pub use crate::tourney::{AgentRecord, Orchestrator, PairwiseRatings, TournamentConfig};

pub use crate::error::ConfigError;
