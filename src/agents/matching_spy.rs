//! Matching play augmented with Spy and Bomb tactics.

use crate::agents::Agent;
use crate::cards::{CardView, BOMB_VALUE, SPY_VALUE};
use crate::game::SeatView;

/// A matching-style agent that spends its specials on the 13 prize.
///
/// When the 13 comes up it plays the Spy if it still has one, then on the
/// follow-up turn beats the revealed sealed bid by the smallest possible
/// margin. With the Spy gone it Bombs the 13 instead, and with both
/// specials spent it throws its 1 at the 13. Otherwise it bids one above
/// the target's value, falling back to its lowest card.
pub struct MatchingSpyAgent {
    played_spy_last_turn: bool,
}

impl MatchingSpyAgent {
    #[must_use]
    pub fn new() -> Self {
        Self {
            played_spy_last_turn: false,
        }
    }
}

impl Default for MatchingSpyAgent {
    fn default() -> Self {
        Self::new()
    }
}

fn beat_by_minimum(to_beat: i32, hand: &[&CardView]) -> Option<i32> {
    hand.iter()
        .filter(|c| c.value != SPY_VALUE && c.value != BOMB_VALUE)
        .map(|c| c.value)
        .filter(|&v| v > to_beat)
        .min()
}

impl Agent for MatchingSpyAgent {
    fn name(&self) -> &str {
        "matching_plus_spy"
    }

    fn select_card(&mut self, view: &SeatView) -> Option<i32> {
        let hand = view.my_playable_cards();
        let target = view.current_bid_target()?;

        if self.played_spy_last_turn {
            self.played_spy_last_turn = false;
            if let Some(opponent_bid) = view.opponent_sealed_bid() {
                if let Some(value) = beat_by_minimum(opponent_bid.value, &hand) {
                    return Some(value);
                }
            }
        }

        if target.value == 13 {
            if hand.iter().any(|c| c.value == SPY_VALUE) {
                self.played_spy_last_turn = true;
                return Some(SPY_VALUE);
            }
            if hand.iter().any(|c| c.value == BOMB_VALUE) {
                return Some(BOMB_VALUE);
            }
        }
        for card in &hand {
            if card.value == 1 && target.value == 13 {
                return Some(1);
            }
            if card.value == target.value + 1 {
                return Some(card.value);
            }
        }
        hand.iter().map(|c| c.value).min()
    }

    fn game_over(&mut self, _my_score: i32, _opponent_score: i32) {
        self.played_spy_last_turn = false;
    }
}
