//! Ordered card containers and their state-filtered projections.
//!
//! A `Pile` owns its cards; the two projections are the information-hiding
//! boundary of the engine. Both convert a sealed bid to "in hand" for
//! reporting, except that `masked_pile_state` keeps the sealed bid visible
//! while the pile is revealing (its owner was spied on this game).

use serde::{Deserialize, Serialize};

use super::card::{Card, CardView};
use super::state::CardState;

/// An ordered sequence of cards with a designation tag.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pile {
    pub cards: Vec<Card>,
    /// Display tag ("deck", "player_a", ...), used only for reporting.
    pub designation: String,
    /// Set when the owning hand has been exposed by an opposing Spy.
    /// Stays set for the rest of the game.
    pub revealing: bool,
}

impl Pile {
    /// Create a pile.
    #[must_use]
    pub fn new(cards: Vec<Card>, designation: impl Into<String>) -> Self {
        Self {
            cards,
            designation: designation.into(),
            revealing: false,
        }
    }

    /// Raw value sum of all cards in the pile.
    ///
    /// Negative prize cards carry negated values, so this subtracts them
    /// without a suit check.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.cards.iter().map(|c| c.value).sum()
    }

    /// Unmasked projection: sealed bids always report as in-hand.
    ///
    /// Used for the shared deck, which never holds sealed bids.
    #[must_use]
    pub fn pile_state(&self) -> Vec<CardView> {
        self.cards.iter().map(|c| CardView::of(c, false)).collect()
    }

    /// Masked projection: sealed bids report as in-hand unless revealing.
    #[must_use]
    pub fn masked_pile_state(&self) -> Vec<CardView> {
        self.cards
            .iter()
            .map(|c| CardView::of(c, self.revealing))
            .collect()
    }

    /// Count cards currently in the given state.
    #[must_use]
    pub fn count_in_state(&self, state: CardState) -> usize {
        self.cards.iter().filter(|c| c.state == state).count()
    }

    /// Value sum of cards currently in the given state.
    #[must_use]
    pub fn value_in_state(&self, state: CardState) -> i32 {
        self.cards
            .iter()
            .filter(|c| c.state == state)
            .map(|c| c.value)
            .sum()
    }
}
