//! Tournament orchestration: pairing, match/game nesting, rating updates.

use rustc_hash::FxHashMap;

use crate::agents::{Agent, TurnResult};
use crate::core::{GameRng, GameVariant, Seat, TournamentFormat};
use crate::error::ConfigError;
use crate::game::{Game, TurnOutcomes};
use crate::tourney::elo;
use crate::tourney::records::{AgentRecord, PairwiseRatings};
use crate::tourney::schedule;

/// Knobs for a tournament run.
#[derive(Clone, Debug)]
pub struct TournamentConfig {
    pub variant: GameVariant,
    pub format: TournamentFormat,
    /// Matches each pairing plays when it meets.
    pub matches_per_pairing: u32,
    /// Games inside each match. Agent memory persists across a match.
    pub games_per_match: u32,
    /// Full schedule repetitions.
    pub passes: u32,
    pub seed: u64,
    /// Also track a per-pairing Elo table alongside the global one.
    pub track_pairwise: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            variant: GameVariant::Gops,
            format: TournamentFormat::RoundRobin,
            matches_per_pairing: 3,
            games_per_match: 1000,
            passes: 1,
            seed: 0,
            track_pairwise: false,
        }
    }
}

/// Runs a pool of agents through a tournament and keeps the records.
pub struct Orchestrator {
    config: TournamentConfig,
    agents: Vec<Box<dyn Agent>>,
    records: FxHashMap<String, AgentRecord>,
    pairwise: PairwiseRatings,
    rng: GameRng,
}

impl Orchestrator {
    /// Assemble a tournament.
    ///
    /// Rejects pools of fewer than two agents and pools with duplicate
    /// names, since records are keyed by name.
    pub fn new(
        config: TournamentConfig,
        agents: Vec<Box<dyn Agent>>,
    ) -> Result<Self, ConfigError> {
        if agents.len() < 2 {
            return Err(ConfigError::NotEnoughAgents(agents.len()));
        }
        let mut records = FxHashMap::default();
        for agent in &agents {
            let name = agent.name().to_string();
            if records.insert(name.clone(), AgentRecord::new()).is_some() {
                return Err(ConfigError::DuplicateAgentName(name));
            }
        }
        let rng = GameRng::new(config.seed);
        Ok(Self {
            config,
            agents,
            records,
            pairwise: PairwiseRatings::new(),
            rng,
        })
    }

    /// Play the whole tournament.
    pub fn run(&mut self) {
        log::info!(
            "starting {} tournament of {} with {} agents, {} matches per pairing, {} games per match",
            self.config.format,
            self.config.variant,
            self.agents.len(),
            self.config.matches_per_pairing,
            self.config.games_per_match
        );
        for _ in 0..self.config.passes {
            match self.config.format {
                TournamentFormat::RoundRobin => {
                    for round in schedule::round_robin(self.agents.len()) {
                        for (a, b) in round {
                            self.play_matches(a, b);
                        }
                    }
                }
                TournamentFormat::RandomPairing => {
                    let pairs = schedule::random_pairing(self.agents.len(), &mut self.rng);
                    for (a, b) in pairs {
                        self.play_matches(a, b);
                    }
                }
            }
        }
        for (name, record) in self.standings() {
            log::info!(
                "{}: rating {:.1}, games {}-{}-{}",
                name,
                record.rating,
                record.games_won,
                record.games_lost,
                record.games_drawn
            );
        }
    }

    /// Final records keyed by agent name.
    #[must_use]
    pub fn records(&self) -> &FxHashMap<String, AgentRecord> {
        &self.records
    }

    /// Pairwise rating table; empty unless tracking was enabled.
    #[must_use]
    pub fn pairwise(&self) -> &PairwiseRatings {
        &self.pairwise
    }

    /// Records sorted by rating, best first. Ties break by name.
    #[must_use]
    pub fn standings(&self) -> Vec<(&str, &AgentRecord)> {
        let mut standings: Vec<(&str, &AgentRecord)> = self
            .records
            .iter()
            .map(|(name, record)| (name.as_str(), record))
            .collect();
        standings.sort_by(|(name_a, rec_a), (name_b, rec_b)| {
            rec_b.rating
                .total_cmp(&rec_a.rating)
                .then_with(|| name_a.cmp(name_b))
        });
        standings
    }

    /// Play the configured number of matches between two pool indices,
    /// the first seated as player_a throughout.
    fn play_matches(&mut self, a_idx: usize, b_idx: usize) {
        let config = self.config.clone();
        let (agent_a, agent_b) = seat_pair(&mut self.agents, a_idx, b_idx);
        let name_a = agent_a.name().to_string();
        let name_b = agent_b.name().to_string();
        log::info!("pairing {name_a} against {name_b}");

        let mut a_matches_won = 0u64;
        let mut a_matches_lost = 0u64;
        let mut b_matches_won = 0u64;
        let mut b_matches_lost = 0u64;
        let mut matches_drawn = 0u64;

        for _ in 0..config.matches_per_pairing {
            let mut game = Game::with_rng(config.variant, self.rng.fork());
            let mut a_games_won = 0u64;
            let mut a_games_lost = 0u64;
            let mut b_games_won = 0u64;
            let mut b_games_lost = 0u64;
            let mut games_drawn = 0u64;
            let mut games_played = 0u64;

            for _ in 0..config.games_per_match {
                game.new_game();
                while !game.is_game_over() {
                    let bid_target = game.next_turn().map(|card| card.value);
                    let a_card = submit_for(&mut game, Seat::A, agent_a);
                    let b_card = submit_for(&mut game, Seat::B, agent_b);
                    let outcomes = game.evaluate_played_cards();
                    let (a_result, b_result) = per_side_results(&outcomes);
                    agent_a.turn_over(a_card, b_card, bid_target, a_result);
                    agent_b.turn_over(b_card, a_card, bid_target, b_result);
                }
                games_played += 1;
                let (score_a, score_b) = game.score_players();
                agent_a.game_over(score_a, score_b);
                agent_b.game_over(score_b, score_a);

                let result = if score_a > score_b {
                    a_games_won += 1;
                    b_games_lost += 1;
                    1.0
                } else if score_b > score_a {
                    b_games_won += 1;
                    a_games_lost += 1;
                    0.0
                } else {
                    games_drawn += 1;
                    0.5
                };
                let rating_a = self.records[&name_a].rating;
                let rating_b = self.records[&name_b].rating;
                let (new_a, new_b) =
                    elo::record_match(rating_a, rating_b, result, elo::DEFAULT_K);
                if let Some(record) = self.records.get_mut(&name_a) {
                    record.rating = new_a;
                }
                if let Some(record) = self.records.get_mut(&name_b) {
                    record.rating = new_b;
                }
                if config.track_pairwise {
                    let (pair_a, pair_b) = self.pairwise.get(&name_a, &name_b);
                    let (pair_a, pair_b) =
                        elo::record_match(pair_a, pair_b, result, elo::DEFAULT_K);
                    self.pairwise.set(&name_a, &name_b, pair_a, pair_b);
                }
            }

            if let Some(record) = self.records.get_mut(&name_a) {
                record.games_played += games_played;
                record.games_won += a_games_won;
                record.games_lost += a_games_lost;
                record.games_drawn += games_drawn;
            }
            if let Some(record) = self.records.get_mut(&name_b) {
                record.games_played += games_played;
                record.games_won += b_games_won;
                record.games_lost += b_games_lost;
                record.games_drawn += games_drawn;
            }
            agent_a.match_over(
                a_games_won as u32,
                b_games_won as u32,
                games_drawn as u32,
            );
            agent_b.match_over(
                b_games_won as u32,
                a_games_won as u32,
                games_drawn as u32,
            );
            if a_games_won > b_games_won {
                a_matches_won += 1;
                b_matches_lost += 1;
            } else if b_games_won > a_games_won {
                b_matches_won += 1;
                a_matches_lost += 1;
            } else {
                matches_drawn += 1;
            }
        }

        if let Some(record) = self.records.get_mut(&name_a) {
            record.matches_played += u64::from(config.matches_per_pairing);
            record.matches_won += a_matches_won;
            record.matches_lost += a_matches_lost;
            record.matches_drawn += matches_drawn;
        }
        if let Some(record) = self.records.get_mut(&name_b) {
            record.matches_played += u64::from(config.matches_per_pairing);
            record.matches_won += b_matches_won;
            record.matches_lost += b_matches_lost;
            record.matches_drawn += matches_drawn;
        }
    }
}

/// Ask an agent for a bid and seal it, unless the seat is frozen.
fn submit_for(game: &mut Game, seat: Seat, agent: &mut dyn Agent) -> Option<i32> {
    if game.is_frozen(seat) {
        return None;
    }
    let choice = agent.select_card(&game.seat_view(seat))?;
    game.submit_bid(seat, choice)
}

/// Translate a turn's outcome tags into each side's vocabulary. Two tags
/// only ever means both sides played their Spy.
fn per_side_results(outcomes: &TurnOutcomes) -> (TurnResult, TurnResult) {
    use crate::game::TurnOutcome;

    if outcomes.len() > 1 {
        return (TurnResult::BothSpy, TurnResult::BothSpy);
    }
    match outcomes[0] {
        TurnOutcome::Tie => (TurnResult::Tie, TurnResult::Tie),
        TurnOutcome::Bomb => (TurnResult::Bomb, TurnResult::Bomb),
        TurnOutcome::AWin => (TurnResult::Win, TurnResult::Lose),
        TurnOutcome::BWin => (TurnResult::Lose, TurnResult::Win),
        TurnOutcome::ASpy => (TurnResult::MySpy, TurnResult::OpponentSpy),
        TurnOutcome::BSpy => (TurnResult::OpponentSpy, TurnResult::MySpy),
    }
}

/// Mutably borrow two distinct pool entries at once.
fn seat_pair(
    agents: &mut [Box<dyn Agent>],
    a: usize,
    b: usize,
) -> (&mut dyn Agent, &mut dyn Agent) {
    assert_ne!(a, b, "an agent cannot be paired with itself");
    if a < b {
        let (left, right) = agents.split_at_mut(b);
        (left[a].as_mut(), right[0].as_mut())
    } else {
        let (left, right) = agents.split_at_mut(a);
        (right[0].as_mut(), left[b].as_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::AgentRegistry;

    fn pool(names: &[&str], variant: GameVariant) -> Vec<Box<dyn Agent>> {
        let registry = AgentRegistry::builtin();
        names
            .iter()
            .enumerate()
            .map(|(i, name)| registry.create(name, variant, i as u64).unwrap())
            .collect()
    }

    #[test]
    fn test_rejects_single_agent() {
        let agents = pool(&["random"], GameVariant::Gops);
        let err = Orchestrator::new(TournamentConfig::default(), agents)
            .err()
            .unwrap();
        assert!(matches!(err, ConfigError::NotEnoughAgents(1)));
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let agents = pool(&["random", "random"], GameVariant::Gops);
        let err = Orchestrator::new(TournamentConfig::default(), agents)
            .err()
            .unwrap();
        assert!(matches!(err, ConfigError::DuplicateAgentName(_)));
    }

    #[test]
    fn test_smoke_run_updates_records() {
        let config = TournamentConfig {
            matches_per_pairing: 1,
            games_per_match: 5,
            seed: 3,
            ..TournamentConfig::default()
        };
        let agents = pool(&["random", "matching"], GameVariant::Gops);
        let mut orchestrator = Orchestrator::new(config, agents).unwrap();
        orchestrator.run();

        for record in orchestrator.records().values() {
            assert_eq!(record.games_played, 5);
            assert_eq!(record.matches_played, 1);
            assert_eq!(
                record.games_won + record.games_lost + record.games_drawn,
                5
            );
        }
        // Zero-sum away from the floor rule.
        let total: f64 = orchestrator
            .records()
            .values()
            .map(|r| r.rating)
            .sum();
        assert!((total - 2.0 * elo::INITIAL_RATING).abs() < 1e-6);
    }

    #[test]
    fn test_pairwise_tracking() {
        let config = TournamentConfig {
            matches_per_pairing: 1,
            games_per_match: 3,
            track_pairwise: true,
            seed: 5,
            ..TournamentConfig::default()
        };
        let agents = pool(&["random", "max_value", "matching"], GameVariant::Gops);
        let mut orchestrator = Orchestrator::new(config, agents).unwrap();
        orchestrator.run();

        assert_eq!(orchestrator.pairwise().len(), 3);
    }

    #[test]
    fn test_seat_pair_either_order() {
        let mut agents = pool(&["random", "matching"], GameVariant::Gops);
        let (first, second) = seat_pair(&mut agents, 1, 0);
        assert_eq!(first.name(), "matching");
        assert_eq!(second.name(), "random");
    }

    #[test]
    fn test_rich_variant_smoke_run() {
        let config = TournamentConfig {
            variant: GameVariant::BgopsMinus,
            matches_per_pairing: 1,
            games_per_match: 3,
            seed: 11,
            ..TournamentConfig::default()
        };
        let agents = pool(&["random", "matching_plus_spy"], GameVariant::BgopsMinus);
        let mut orchestrator = Orchestrator::new(config, agents).unwrap();
        orchestrator.run();

        for record in orchestrator.records().values() {
            assert_eq!(record.games_played, 3);
        }
    }
}
