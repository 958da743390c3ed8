//! Card location and ownership states.
//!
//! A card occupies exactly one `CardState` at all times. Every transition
//! is a single-card mutation performed by the engine; agents never touch
//! states directly. Ownership is an explicit `Seat` payload, and the
//! engine's playability check validates against it.

use serde::{Deserialize, Serialize};

use crate::core::Seat;

/// Where a card is and who holds it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Undrawn prize card.
    InDeck,
    /// In a player's hand, eligible to bid.
    Hand(Seat),
    /// Committed this turn, hidden from the opponent until resolution.
    SealedBid(Seat),
    /// Publicly visible, still contested (tie carry-over, or a played Spy).
    Playzone(Seat),
    /// Won by a player; counts toward their score.
    Score(Seat),
    /// Spent hand card, out of the game.
    Discard(Seat),
    /// The prize currently being bid on.
    CurrentBidTarget,
    /// An unresolved prize pushed forward by a tie.
    PreviousBidTarget,
    /// Prizes destroyed by a Bomb.
    GlobalDiscard,
}

impl CardState {
    /// The seat that owns this location, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Seat> {
        match self {
            CardState::Hand(s)
            | CardState::SealedBid(s)
            | CardState::Playzone(s)
            | CardState::Score(s)
            | CardState::Discard(s) => Some(s),
            _ => None,
        }
    }

    /// The state as reported through a pile projection.
    ///
    /// A sealed bid is reported as still in hand unless the pile is
    /// revealing (its owner was spied on). All other states report as-is.
    #[must_use]
    pub const fn reported(self, revealing: bool) -> CardState {
        match self {
            CardState::SealedBid(s) if !revealing => CardState::Hand(s),
            other => other,
        }
    }

    /// Whether this is an active bid target (current or pushed).
    #[must_use]
    pub const fn is_bid_target(self) -> bool {
        matches!(self, CardState::CurrentBidTarget | CardState::PreviousBidTarget)
    }
}
