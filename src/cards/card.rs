//! Cards and suits.

use serde::{Deserialize, Serialize};

use super::state::CardState;

/// Sentinel value for the Spy hand card.
pub const SPY_VALUE: i32 = 0;
/// Sentinel value for the Bomb hand card.
pub const BOMB_VALUE: i32 = -1;

/// Card suit.
///
/// Prize cards are `Positive` or `Negative`; cards dealt into hands are
/// `Player`. Negative prize cards carry their value already negated
/// (−1..−13), so score sums need no special casing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Positive,
    Negative,
    Player,
}

/// A single card: value, suit, location state, display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub value: i32,
    pub suit: Suit,
    pub state: CardState,
    pub name: String,
}

impl Card {
    /// Create a card named after its value.
    #[must_use]
    pub fn new(value: i32, suit: Suit, state: CardState) -> Self {
        Self {
            value,
            suit,
            state,
            name: value.to_string(),
        }
    }

    /// Create a card with an overriding display name (Spy, Bomb).
    #[must_use]
    pub fn named(value: i32, suit: Suit, state: CardState, name: impl Into<String>) -> Self {
        Self {
            value,
            suit,
            state,
            name: name.into(),
        }
    }

    /// Move the card to a new state. Engine-only.
    pub(crate) fn change_state(&mut self, new_state: CardState) {
        self.state = new_state;
    }

    /// Whether this is the Spy hand card.
    #[must_use]
    pub fn is_spy(&self) -> bool {
        self.suit == Suit::Player && self.value == SPY_VALUE
    }

    /// Whether this is the Bomb hand card.
    #[must_use]
    pub fn is_bomb(&self) -> bool {
        self.suit == Suit::Player && self.value == BOMB_VALUE
    }
}

/// An owned snapshot of a card as seen through a pile projection.
///
/// Views carry no reference back into the game, so an agent holding one
/// cannot observe later mutations or bypass the masking contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub value: i32,
    pub suit: Suit,
    pub state: CardState,
    pub name: String,
}

impl CardView {
    /// Project a card, reporting its state through the masking rule.
    #[must_use]
    pub(crate) fn of(card: &Card, revealing: bool) -> Self {
        Self {
            value: card.value,
            suit: card.suit,
            state: card.state.reported(revealing),
            name: card.name.clone(),
        }
    }
}
