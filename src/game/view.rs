//! Masked state views: the only surface agents may read.
//!
//! `GameStateView` is the raw assembly (both masked hands, the deck, both
//! scores); `SeatView` orients it for one seat and exposes the query
//! helpers the agent contract names. Views hold owned snapshots, so
//! nothing an agent keeps around can observe later engine mutations.

use serde::{Deserialize, Serialize};

use crate::cards::{CardState, CardView};
use crate::core::Seat;

/// The full masked game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameStateView {
    pub player_a_cards: Vec<CardView>,
    pub player_b_cards: Vec<CardView>,
    pub deck_state: Vec<CardView>,
    pub player_a_score: i32,
    pub player_b_score: i32,
}

impl GameStateView {
    fn seat_cards(&self, seat: Seat) -> &[CardView] {
        match seat {
            Seat::A => &self.player_a_cards,
            Seat::B => &self.player_b_cards,
        }
    }

    fn seat_score(&self, seat: Seat) -> i32 {
        match seat {
            Seat::A => self.player_a_score,
            Seat::B => self.player_b_score,
        }
    }
}

/// The masked state as queried from one seat.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SeatView {
    seat: Seat,
    state: GameStateView,
    opponent_frozen: bool,
}

impl SeatView {
    pub(crate) fn new(seat: Seat, state: GameStateView, opponent_frozen: bool) -> Self {
        Self {
            seat,
            state,
            opponent_frozen,
        }
    }

    /// The seat this view is oriented for.
    #[must_use]
    pub fn seat(&self) -> Seat {
        self.seat
    }

    /// The underlying masked state.
    #[must_use]
    pub fn state(&self) -> &GameStateView {
        &self.state
    }

    /// The prize currently being bid on, if a target was drawn.
    #[must_use]
    pub fn current_bid_target(&self) -> Option<&CardView> {
        self.state
            .deck_state
            .iter()
            .find(|c| c.state == CardState::CurrentBidTarget)
    }

    /// Every active prize: the current target plus all pushed targets.
    #[must_use]
    pub fn all_bid_targets(&self) -> Vec<&CardView> {
        self.state
            .deck_state
            .iter()
            .filter(|c| c.state.is_bid_target())
            .collect()
    }

    /// Cards this seat can still bid.
    #[must_use]
    pub fn my_playable_cards(&self) -> Vec<&CardView> {
        self.playable_cards(self.seat)
    }

    /// Cards the opponent can still bid, as masked: an unrevealed sealed
    /// bid still reports as in hand.
    #[must_use]
    pub fn opponent_playable_cards(&self) -> Vec<&CardView> {
        self.playable_cards(self.seat.opponent())
    }

    /// This seat's contested (tied or spied) cards.
    #[must_use]
    pub fn my_playzone(&self) -> Vec<&CardView> {
        self.playzone_cards(self.seat)
    }

    /// The opponent's contested cards.
    #[must_use]
    pub fn opponent_playzone(&self) -> Vec<&CardView> {
        self.playzone_cards(self.seat.opponent())
    }

    /// The opponent's sealed bid, readable only while the opponent is
    /// frozen, i.e. only after this seat's own Spy exposed it.
    #[must_use]
    pub fn opponent_sealed_bid(&self) -> Option<&CardView> {
        if !self.opponent_frozen {
            return None;
        }
        let opponent = self.seat.opponent();
        self.state
            .seat_cards(opponent)
            .iter()
            .find(|c| c.state == CardState::SealedBid(opponent))
    }

    /// This seat's current score.
    #[must_use]
    pub fn my_score(&self) -> i32 {
        self.state.seat_score(self.seat)
    }

    /// The opponent's current score.
    #[must_use]
    pub fn opponent_score(&self) -> i32 {
        self.state.seat_score(self.seat.opponent())
    }

    /// Undrawn prize cards remaining.
    #[must_use]
    pub fn deck_cards_remaining(&self) -> usize {
        self.state
            .deck_state
            .iter()
            .filter(|c| c.state == CardState::InDeck)
            .count()
    }

    fn playable_cards(&self, seat: Seat) -> Vec<&CardView> {
        self.state
            .seat_cards(seat)
            .iter()
            .filter(|c| c.state == CardState::Hand(seat))
            .collect()
    }

    fn playzone_cards(&self, seat: Seat) -> Vec<&CardView> {
        self.state
            .seat_cards(seat)
            .iter()
            .filter(|c| c.state == CardState::Playzone(seat))
            .collect()
    }
}
