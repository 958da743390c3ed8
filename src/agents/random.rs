//! Uniform random play.

use crate::agents::Agent;
use crate::core::GameRng;
use crate::game::SeatView;

/// Plays a uniformly random card from its hand every turn.
///
/// Useful as a baseline opponent and for shaking out state-machine bugs.
pub struct RandomAgent {
    rng: GameRng,
}

impl RandomAgent {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "random"
    }

    fn select_card(&mut self, view: &SeatView) -> Option<i32> {
        let hand = view.my_playable_cards();
        self.rng.choose(&hand).map(|card| card.value)
    }
}
