//! The shared prize deck.

use crate::core::{GameRng, GameVariant};

use super::card::{Card, CardView};
use super::pile::Pile;
use super::state::CardState;
use super::Suit;

/// The shared deck of prize cards players bid on.
///
/// Seeded per variant: one positive 1..13 set for classic GOPS, two for
/// bgops, two plus thirteen negative cards for bgops_minus. Every card
/// starts `InDeck`.
#[derive(Clone, Debug)]
pub struct Deck {
    pub pile: Pile,
}

impl Deck {
    /// Build a fresh deck for the given variant.
    #[must_use]
    pub fn new(variant: GameVariant) -> Self {
        let mut cards = Vec::new();
        for value in 1..=13 {
            for _ in 0..variant.positive_sets() {
                cards.push(Card::new(value, Suit::Positive, CardState::InDeck));
            }
            if variant.has_negative_cards() {
                cards.push(Card::new(-value, Suit::Negative, CardState::InDeck));
            }
        }
        Self {
            pile: Pile::new(cards, "deck"),
        }
    }

    /// Shuffle the card order. Draw order is random anyway; this keeps
    /// reported deck order uninformative.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.pile.cards);
    }

    /// Draw a uniformly random undrawn card as the new bid target.
    ///
    /// Returns `None` when the deck is exhausted.
    pub fn random_card_for_bidding(&mut self, rng: &mut GameRng) -> Option<CardView> {
        let undrawn: Vec<usize> = self
            .pile
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.state == CardState::InDeck)
            .map(|(i, _)| i)
            .collect();
        let &idx = rng.choose(&undrawn)?;
        self.pile.cards[idx].change_state(CardState::CurrentBidTarget);
        Some(CardView::of(&self.pile.cards[idx], false))
    }

    /// Number of undrawn cards.
    #[must_use]
    pub fn cards_left(&self) -> usize {
        self.pile.count_in_state(CardState::InDeck)
    }

    /// Total value of the full deck, counting negative cards negatively.
    #[must_use]
    pub fn total_value(&self) -> i32 {
        self.pile.score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_sizes_per_variant() {
        assert_eq!(Deck::new(GameVariant::Gops).pile.cards.len(), 13);
        assert_eq!(Deck::new(GameVariant::Bgops).pile.cards.len(), 26);
        assert_eq!(Deck::new(GameVariant::BgopsMinus).pile.cards.len(), 39);
    }

    #[test]
    fn test_deck_total_value() {
        // 1..13 sums to 91; negatives cancel one positive set.
        assert_eq!(Deck::new(GameVariant::Gops).total_value(), 91);
        assert_eq!(Deck::new(GameVariant::Bgops).total_value(), 182);
        assert_eq!(Deck::new(GameVariant::BgopsMinus).total_value(), 91);
    }

    #[test]
    fn test_draw_transitions_exactly_one_card() {
        let mut deck = Deck::new(GameVariant::Gops);
        let mut rng = GameRng::new(42);

        let drawn = deck.random_card_for_bidding(&mut rng).unwrap();
        assert_eq!(drawn.state, CardState::CurrentBidTarget);
        assert_eq!(deck.cards_left(), 12);
        assert_eq!(deck.pile.count_in_state(CardState::CurrentBidTarget), 1);
    }

    #[test]
    fn test_draw_exhausts_deck() {
        let mut deck = Deck::new(GameVariant::Gops);
        let mut rng = GameRng::new(42);

        for _ in 0..13 {
            // Clear the previous target so the count stays meaningful.
            let drawn = deck.random_card_for_bidding(&mut rng);
            assert!(drawn.is_some());
            for card in &mut deck.pile.cards {
                if card.state == CardState::CurrentBidTarget {
                    card.change_state(CardState::GlobalDiscard);
                }
            }
        }
        assert_eq!(deck.cards_left(), 0);
        assert!(deck.random_card_for_bidding(&mut rng).is_none());
    }

    #[test]
    fn test_draws_are_deterministic_per_seed() {
        let mut d1 = Deck::new(GameVariant::Bgops);
        let mut d2 = Deck::new(GameVariant::Bgops);
        let mut r1 = GameRng::new(7);
        let mut r2 = GameRng::new(7);

        let c1 = d1.random_card_for_bidding(&mut r1).unwrap();
        let c2 = d2.random_card_for_bidding(&mut r2).unwrap();
        assert_eq!(c1.value, c2.value);
    }
}
