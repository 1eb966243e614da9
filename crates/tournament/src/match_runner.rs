//! Match runner for playing rounds between engines

use loa_core::{Player, StartingSide};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::TournamentConfig;
use crate::error::TournamentError;
use crate::results::RoundOutcome;
use crate::tournament::Tournament;

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of rounds to play
    pub num_rounds: u32,
    /// Plies after which a round is drawn (None = no limit)
    pub max_plies: Option<u32>,
    /// Seed for the opening coin toss
    pub seed: Option<u64>,
    /// Print progress during match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_rounds: 10,
            max_plies: Some(400),
            seed: None,
            verbose: true,
        }
    }
}

impl From<&TournamentConfig> for MatchConfig {
    fn from(config: &TournamentConfig) -> Self {
        Self {
            num_rounds: config.rounds,
            max_plies: Some(config.max_plies),
            seed: config.seed,
            verbose: config.verbose,
        }
    }
}

/// Runs matches between two automated players
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Plays the configured number of rounds and returns the finished
    /// tournament. Both players must be engines.
    pub fn run_match(&self, name: &str, players: [Player; 2]) -> Result<Tournament, TournamentError> {
        if let Some(human) = players.iter().find(|p| !p.is_automated()) {
            return Err(TournamentError::HumanPlayer(human.name.clone()));
        }

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let toss = StartingSide::CoinToss {
            call_heads: rng.gen(),
            landed_heads: rng.gen(),
        };
        let mut tournament = Tournament::new(name, players)?
            .with_toss(toss)
            .with_max_plies(self.config.max_plies);

        for _ in 0..self.config.num_rounds {
            let mut round = tournament.start_round()?;
            round.run_automated();
            let summary = tournament.record_round(round)?;

            if self.config.verbose {
                let outcome = match (summary.outcome, &summary.winner) {
                    (RoundOutcome::Win, Some(w)) => format!("{} +{}", w, summary.margin),
                    (RoundOutcome::BothConnected, _) => "anomaly".to_string(),
                    _ => "draw".to_string(),
                };
                let number = summary.number;
                let result = tournament.match_result();
                println!(
                    "Round {}/{}: {} - Score: {}-{}-{}",
                    number,
                    self.config.num_rounds,
                    outcome,
                    result.wins,
                    result.losses,
                    result.draws + result.anomalies
                );
            }
        }

        Ok(tournament)
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
