//! Bid the card matching the target's value.

use crate::agents::Agent;
use crate::game::SeatView;

/// Bids the hand card whose value equals the current target, falling back
/// to its lowest-valued card when the match is already spent.
pub struct MatchingAgent;

impl MatchingAgent {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for MatchingAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for MatchingAgent {
    fn name(&self) -> &str {
        "matching"
    }

    fn select_card(&mut self, view: &SeatView) -> Option<i32> {
        let hand = view.my_playable_cards();
        let target = view.current_bid_target()?;
        if let Some(card) = hand.iter().find(|c| c.value == target.value) {
            return Some(card.value);
        }
        hand.iter().map(|c| c.value).min()
    }
}
