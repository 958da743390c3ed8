//! Bid-selecting agents and the registry that builds them by name.
//!
//! An agent sees the game only through a [`SeatView`] and answers with the
//! value of a card from its playable hand. The orchestrator feeds results
//! back through the notification hooks after every turn, game, and match.

pub mod matching;
pub mod matching_spy;
pub mod max_value;
pub mod random;
pub mod registry;

pub use matching::MatchingAgent;
pub use matching_spy::MatchingSpyAgent;
pub use max_value::MaxValueAgent;
pub use random::RandomAgent;
pub use registry::AgentRegistry;

use crate::core::GameVariant;
use crate::game::SeatView;

/// One turn's outcome as seen from one side of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnResult {
    Win,
    Lose,
    Tie,
    Bomb,
    MySpy,
    OpponentSpy,
    BothSpy,
}

impl std::fmt::Display for TurnResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            TurnResult::Win => "win",
            TurnResult::Lose => "lose",
            TurnResult::Tie => "tie",
            TurnResult::Bomb => "bomb",
            TurnResult::MySpy => "my_spy",
            TurnResult::OpponentSpy => "opponent_spy",
            TurnResult::BothSpy => "both_spy",
        };
        write!(f, "{tag}")
    }
}

/// A tournament participant.
///
/// `select_card` is the only required method. It must return the value of
/// a card currently in the agent's playable hand; returning a value the
/// agent does not hold is a contract violation and panics at submission.
/// Returning `None` forfeits the bid for the turn.
///
/// The remaining hooks are notifications; the default implementations
/// ignore them.
pub trait Agent {
    /// Name used for records and pairings. Must be unique within a pool.
    fn name(&self) -> &str;

    /// Whether this agent plays the given variant.
    fn supports(&self, variant: GameVariant) -> bool {
        let _ = variant;
        true
    }

    /// Pick the value of a hand card to seal as this turn's bid.
    fn select_card(&mut self, view: &SeatView) -> Option<i32>;

    /// Called after each resolved turn. `my_card` is `None` when this
    /// agent was frozen or forfeited; `bid_target` is the prize that was
    /// up for bid, absent on frozen turns where no new target is drawn.
    fn turn_over(
        &mut self,
        my_card: Option<i32>,
        opponent_card: Option<i32>,
        bid_target: Option<i32>,
        result: TurnResult,
    ) {
        let _ = (my_card, opponent_card, bid_target, result);
    }

    /// Called with the final scores when a game ends.
    fn game_over(&mut self, my_score: i32, opponent_score: i32) {
        let _ = (my_score, opponent_score);
    }

    /// Called with the win/loss/draw tallies when a match ends.
    fn match_over(&mut self, my_wins: u32, opponent_wins: u32, draws: u32) {
        let _ = (my_wins, opponent_wins, draws);
    }
}
