//! Always bid the highest remaining card.

use crate::agents::Agent;
use crate::game::SeatView;

/// Bids its highest-valued playable card every turn.
///
/// Against itself every turn is a tie until the hands run out, which makes
/// it a handy deterministic opponent in tests.
pub struct MaxValueAgent;

impl MaxValueAgent {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for MaxValueAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for MaxValueAgent {
    fn name(&self) -> &str {
        "max_value"
    }

    fn select_card(&mut self, view: &SeatView) -> Option<i32> {
        view.my_playable_cards().iter().map(|c| c.value).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameVariant, Seat};
    use crate::game::Game;

    #[test]
    fn test_picks_highest() {
        let mut game = Game::new(GameVariant::Gops, 1);
        game.next_turn().unwrap();
        let mut agent = MaxValueAgent::new();
        assert_eq!(agent.select_card(&game.seat_view(Seat::A)), Some(13));
    }
}
