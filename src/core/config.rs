//! Game and tournament configuration enums.
//!
//! Both enums parse from short wire-format strings ("gops", "bgops",
//! "bgops_minus"; "round_robin", "random_pairing") and reject anything
//! else with an enumerated-choices error.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigError;

/// Which rule set a game uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameVariant {
    /// Classic GOPS: one 13-card prize deck, hands of 1..13.
    Gops,
    /// Two prize decks, plus Spy and Bomb in each hand.
    Bgops,
    /// Two prize decks plus thirteen negative prize cards, Spy and Bomb.
    BgopsMinus,
}

impl GameVariant {
    /// Variants with Spy and Bomb in each hand.
    #[must_use]
    pub const fn has_special_cards(self) -> bool {
        !matches!(self, GameVariant::Gops)
    }

    /// Number of positive prize-card sets in the deck.
    #[must_use]
    pub const fn positive_sets(self) -> usize {
        match self {
            GameVariant::Gops => 1,
            GameVariant::Bgops | GameVariant::BgopsMinus => 2,
        }
    }

    /// Whether the deck carries the negative prize cards.
    #[must_use]
    pub const fn has_negative_cards(self) -> bool {
        matches!(self, GameVariant::BgopsMinus)
    }
}

impl std::fmt::Display for GameVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameVariant::Gops => write!(f, "gops"),
            GameVariant::Bgops => write!(f, "bgops"),
            GameVariant::BgopsMinus => write!(f, "bgops_minus"),
        }
    }
}

impl FromStr for GameVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gops" => Ok(GameVariant::Gops),
            "bgops" => Ok(GameVariant::Bgops),
            "bgops_minus" => Ok(GameVariant::BgopsMinus),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

/// How tournament pairings are generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TournamentFormat {
    /// Circle-method round robin: every unordered pair meets exactly once
    /// per schedule pass.
    RoundRobin,
    /// Shuffle the pool and pair adjacent entries once per pass.
    RandomPairing,
}

impl std::fmt::Display for TournamentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentFormat::RoundRobin => write!(f, "round_robin"),
            TournamentFormat::RandomPairing => write!(f, "random_pairing"),
        }
    }
}

impl FromStr for TournamentFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "round_robin" => Ok(TournamentFormat::RoundRobin),
            "random_pairing" => Ok(TournamentFormat::RandomPairing),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}
