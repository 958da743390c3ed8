//! A seated player: hand ownership and Spy-freeze bookkeeping.

use crate::cards::{CardState, Hand};
use crate::core::{GameVariant, Seat};

/// One side of a game.
///
/// The freeze flags implement the two-phase freeze the Spy imposes:
/// `frozen` suppresses the next bid cycle, `unfreeze_next` marks the
/// player to be released at the start of the cycle after that.
#[derive(Clone, Debug)]
pub struct Player {
    seat: Seat,
    pub hand: Hand,
    pub frozen: bool,
    pub unfreeze_next: bool,
}

impl Player {
    /// Seat a player with a fresh hand.
    #[must_use]
    pub fn new(seat: Seat, variant: GameVariant) -> Self {
        Self {
            seat,
            hand: Hand::new(seat, variant),
            frozen: false,
            unfreeze_next: false,
        }
    }

    /// The seat this player occupies.
    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Seal the hand card with the given value as this turn's bid.
    ///
    /// A frozen player's attempt yields `None` and the hand is untouched.
    ///
    /// ## Panics
    ///
    /// Panics if no card of that value is currently in this player's hand
    /// state. That only happens when an agent submits a card it does not
    /// hold, and it must fail loudly.
    pub(crate) fn seal_bid(&mut self, value: i32) -> Option<i32> {
        if self.frozen {
            return None;
        }
        let seat = self.seat;
        match self
            .hand
            .pile
            .cards
            .iter_mut()
            .find(|c| c.value == value && c.state == CardState::Hand(seat))
        {
            Some(card) => {
                card.change_state(CardState::SealedBid(seat));
                Some(value)
            }
            None => panic!(
                "{} submitted card {} which is not in its hand",
                seat, value
            ),
        }
    }

    /// Expose this player's hand to the opponent for the rest of the game.
    pub(crate) fn reveal_hand(&mut self) {
        self.hand.pile.revealing = true;
    }

    pub(crate) fn freeze(&mut self) {
        self.frozen = true;
        self.unfreeze_next = false;
    }

    pub(crate) fn unfreeze(&mut self) {
        self.frozen = false;
        self.unfreeze_next = false;
    }
}
