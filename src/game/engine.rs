//! The GOPS state machine.
//!
//! `Game` is the sole owner and mutator of every card state. The
//! orchestrator drives it turn by turn: `next_turn` produces a bid target
//! (or skips when a player is frozen), agents submit sealed bids through
//! `submit_bid`, and `evaluate_played_cards` resolves the turn into an
//! ordered list of outcome tags.

use smallvec::SmallVec;

use crate::cards::{CardState, CardView, Deck};
use crate::core::{GameRng, GameVariant, Seat, SeatMap};

use super::player::Player;
use super::view::{GameStateView, SeatView};

/// Engine-level outcome tags, in the order they were produced.
///
/// Only a simultaneous-spy turn produces two tags (`ASpy` then `BSpy`);
/// every other turn produces exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TurnOutcome {
    AWin,
    BWin,
    Tie,
    Bomb,
    ASpy,
    BSpy,
}

/// Ordered outcome tags for one resolved turn.
pub type TurnOutcomes = SmallVec<[TurnOutcome; 2]>;

/// Snapshot of a sealed bid taken before resolution mutates anything.
#[derive(Clone, Copy, Debug)]
struct SealedBid {
    value: i32,
    spy: bool,
    bomb: bool,
}

/// A single game of GOPS between two seats.
///
/// Constructed once per match and reset with [`Game::new_game`] before
/// every game; resetting rebuilds the deck and both players from scratch,
/// so no card state leaks between games.
#[derive(Clone, Debug)]
pub struct Game {
    variant: GameVariant,
    deck: Deck,
    players: SeatMap<Player>,
    rng: GameRng,
}

impl Game {
    /// Create a game with a fresh RNG seeded from `seed`.
    #[must_use]
    pub fn new(variant: GameVariant, seed: u64) -> Self {
        Self::with_rng(variant, GameRng::new(seed))
    }

    /// Create a game driving all randomness from an existing RNG branch.
    #[must_use]
    pub fn with_rng(variant: GameVariant, rng: GameRng) -> Self {
        let mut game = Self {
            variant,
            deck: Deck::new(variant),
            players: SeatMap::new(|seat| Player::new(seat, variant)),
            rng,
        };
        game.new_game();
        game
    }

    /// The rule set in play.
    #[must_use]
    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    /// Reset for a new game: rebuild the deck and both players.
    ///
    /// Callable any number of times; every card returns to its initial
    /// state and all freeze/reveal flags clear.
    pub fn new_game(&mut self) {
        self.deck = Deck::new(self.variant);
        self.deck.shuffle(&mut self.rng);
        self.players = SeatMap::new(|seat| Player::new(seat, self.variant));
        log::debug!(
            "new {} game, deck of {} cards",
            self.variant,
            self.deck.pile.cards.len()
        );
    }

    /// Advance freeze timing, then draw a bid target if both sides can act.
    ///
    /// A player frozen during turn t's resolution is skipped at turn t+1
    /// (no target is drawn) and released at the start of turn t+2.
    pub fn next_turn(&mut self) -> Option<CardView> {
        for seat in Seat::ALL {
            if self.players[seat].unfreeze_next {
                self.players[seat].unfreeze();
            }
        }
        for seat in Seat::ALL {
            if self.players[seat].frozen {
                self.players[seat].unfreeze_next = true;
            }
        }
        if Seat::ALL.iter().any(|&s| self.players[s].frozen) {
            log::debug!("skip turn: a player is frozen");
            return None;
        }
        let target = self.deck.random_card_for_bidding(&mut self.rng);
        if let Some(card) = &target {
            log::debug!("bidding target is {}", card.value);
        }
        target
    }

    /// Whether a seat is currently frozen.
    #[must_use]
    pub fn is_frozen(&self, seat: Seat) -> bool {
        self.players[seat].frozen
    }

    /// Seal a bid for a seat.
    ///
    /// Returns `None` when the seat is frozen (the card stays in hand).
    /// Panics if the value names a card the seat does not hold in its
    /// hand state, which is an agent contract violation.
    pub fn submit_bid(&mut self, seat: Seat, value: i32) -> Option<i32> {
        self.players[seat].seal_bid(value)
    }

    /// Resolve the turn after both agents have acted.
    pub fn evaluate_played_cards(&mut self) -> TurnOutcomes {
        let mut outcomes = TurnOutcomes::new();
        let a_bid = self.sealed_bid(Seat::A);
        let b_bid = self.sealed_bid(Seat::B);

        // Spy branch, A before B. A spy reveals and freezes the opponent;
        // a second simultaneous spy reverses the freeze already applied,
        // leaving both hands revealed but neither player frozen. The bid
        // target is not consumed on a spy turn.
        let mut either_spied = false;
        if a_bid.is_some_and(|bid| bid.spy) {
            outcomes.push(TurnOutcome::ASpy);
            log::debug!("player_a played spy");
            self.players[Seat::B].reveal_hand();
            self.players[Seat::B].freeze();
            self.move_sealed_to_playzone(Seat::A);
            either_spied = true;
        }
        if b_bid.is_some_and(|bid| bid.spy) {
            outcomes.push(TurnOutcome::BSpy);
            log::debug!("player_b played spy");
            self.players[Seat::A].reveal_hand();
            if either_spied {
                self.players[Seat::B].unfreeze();
            } else {
                self.players[Seat::A].freeze();
                either_spied = true;
            }
            self.move_sealed_to_playzone(Seat::B);
        }
        if either_spied {
            return outcomes;
        }

        // Bomb branch: every contested prize goes to the shared discard,
        // every played hand card to its owner's discard. No winner.
        if a_bid.is_some_and(|bid| bid.bomb) || b_bid.is_some_and(|bid| bid.bomb) {
            outcomes.push(TurnOutcome::Bomb);
            log::debug!("bomb was played; discarding active cards");
            for card in &mut self.deck.pile.cards {
                if card.state.is_bid_target() {
                    card.change_state(CardState::GlobalDiscard);
                }
            }
            for seat in Seat::ALL {
                self.discard_played(seat);
            }
            return outcomes;
        }

        // Tie branch: both bids stay contested in the playzones and the
        // target is pushed, to be claimed together with a future target.
        if let (Some(a), Some(b)) = (a_bid, b_bid) {
            if a.value == b.value {
                outcomes.push(TurnOutcome::Tie);
                log::debug!("players tied; pushing");
                self.move_sealed_to_playzone(Seat::A);
                self.move_sealed_to_playzone(Seat::B);
                for card in &mut self.deck.pile.cards {
                    if card.state == CardState::CurrentBidTarget {
                        card.change_state(CardState::PreviousBidTarget);
                    }
                }
                return outcomes;
            }
        }

        // Win branch: the higher bid (or the only bid) claims the current
        // target and every pushed target. With neither bid present the A
        // side claims, since A resolves first.
        let winner = match (a_bid, b_bid) {
            (Some(a), Some(b)) => {
                if a.value > b.value {
                    Seat::A
                } else {
                    Seat::B
                }
            }
            (Some(_), None) | (None, None) => Seat::A,
            (None, Some(_)) => Seat::B,
        };
        outcomes.push(match winner {
            Seat::A => TurnOutcome::AWin,
            Seat::B => TurnOutcome::BWin,
        });
        log::debug!("{} won bid", winner);
        for card in &mut self.deck.pile.cards {
            if card.state.is_bid_target() {
                card.change_state(CardState::Score(winner));
            }
        }
        for seat in Seat::ALL {
            self.discard_played(seat);
        }
        outcomes
    }

    /// True when both hands have no bid-eligible cards left.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        Seat::ALL
            .iter()
            .all(|&seat| self.players[seat].hand.cards_left() == 0)
    }

    /// Current score pile totals, A then B.
    #[must_use]
    pub fn score_players(&self) -> (i32, i32) {
        (
            self.deck.pile.value_in_state(CardState::Score(Seat::A)),
            self.deck.pile.value_in_state(CardState::Score(Seat::B)),
        )
    }

    /// Full masked state: each hand through its masking projection, the
    /// deck unmasked, and both scores.
    #[must_use]
    pub fn masked_game_state(&self) -> GameStateView {
        let (player_a_score, player_b_score) = self.score_players();
        GameStateView {
            player_a_cards: self.players[Seat::A].hand.pile.masked_pile_state(),
            player_b_cards: self.players[Seat::B].hand.pile.masked_pile_state(),
            deck_state: self.deck.pile.pile_state(),
            player_a_score,
            player_b_score,
        }
    }

    /// The masked state oriented for one seat's queries.
    #[must_use]
    pub fn seat_view(&self, seat: Seat) -> SeatView {
        SeatView::new(
            seat,
            self.masked_game_state(),
            self.players[seat.opponent()].frozen,
        )
    }

    /// Total value of the full deck, for conservation checks.
    #[must_use]
    pub fn deck_total_value(&self) -> i32 {
        self.deck.total_value()
    }

    fn sealed_bid(&self, seat: Seat) -> Option<SealedBid> {
        self.players[seat]
            .hand
            .pile
            .cards
            .iter()
            .find(|c| c.state == CardState::SealedBid(seat))
            .map(|c| SealedBid {
                value: c.value,
                spy: c.is_spy(),
                bomb: c.is_bomb(),
            })
    }

    fn move_sealed_to_playzone(&mut self, seat: Seat) {
        for card in &mut self.players[seat].hand.pile.cards {
            if card.state == CardState::SealedBid(seat) {
                card.change_state(CardState::Playzone(seat));
            }
        }
    }

    /// Discard a seat's sealed bid and playzone cards to its discard pile.
    fn discard_played(&mut self, seat: Seat) {
        for card in &mut self.players[seat].hand.pile.cards {
            if matches!(card.state, CardState::SealedBid(s) | CardState::Playzone(s) if s == seat)
            {
                card.change_state(CardState::Discard(seat));
            }
        }
    }
}
