//! A player's hand of bidding cards.

use crate::core::{GameVariant, Seat};

use super::card::{Card, BOMB_VALUE, SPY_VALUE};
use super::pile::Pile;
use super::state::CardState;
use super::Suit;

/// One player's hand: value cards 1..13, plus Spy and Bomb in the
/// two richer variants. Every card starts in `Hand(seat)`.
#[derive(Clone, Debug)]
pub struct Hand {
    pub pile: Pile,
    seat: Seat,
}

impl Hand {
    /// Deal a fresh hand for a seat.
    #[must_use]
    pub fn new(seat: Seat, variant: GameVariant) -> Self {
        let mut cards: Vec<Card> = (1..=13)
            .map(|v| Card::new(v, Suit::Player, CardState::Hand(seat)))
            .collect();
        if variant.has_special_cards() {
            cards.push(Card::named(SPY_VALUE, Suit::Player, CardState::Hand(seat), "Spy"));
            cards.push(Card::named(BOMB_VALUE, Suit::Player, CardState::Hand(seat), "Bomb"));
        }
        Self {
            pile: Pile::new(cards, seat.to_string()),
            seat,
        }
    }

    /// The seat this hand belongs to.
    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// Count of cards still eligible to bid.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.pile.count_in_state(CardState::Hand(self.seat))
    }
}
