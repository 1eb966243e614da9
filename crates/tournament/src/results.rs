//! Standings storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use loa_core::Color;

use crate::error::StandingsError;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win,
    /// Both sides connected on the same move; nobody scores.
    BothConnected,
    MoveLimit,
    NoLegalMoves,
}

/// One finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub number: u32,
    pub starter: String,
    pub outcome: RoundOutcome,
    pub winner: Option<String>,
    pub winner_color: Option<Color>,
    /// Winner's remaining pieces minus the loser's; 0 without a winner.
    pub margin: i32,
    pub plies: u32,
}

/// Running totals for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingEntry {
    pub name: String,
    pub color: Option<Color>,
    pub rounds_won: u32,
    pub score: i32,
}

/// Result of a match (multiple rounds), from player 1's perspective
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Rounds ended by both sides connecting at once.
    pub anomalies: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_rounds(&self) -> u32 {
        self.wins + self.losses + self.draws + self.anomalies
    }

    /// 1 for a win, 0.5 for a draw or anomaly, 0 for a loss
    pub fn score(&self) -> f64 {
        let total = self.total_rounds() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * (self.draws + self.anomalies) as f64) / total
    }
}

/// Complete standings of a tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standings {
    pub name: String,
    pub players: Vec<StandingEntry>,
    pub rounds: Vec<RoundSummary>,
}

impl Standings {
    /// The player with more rounds won, or `None` on a tie.
    pub fn overall_winner(&self) -> Option<&StandingEntry> {
        let best = self.players.iter().map(|p| p.rounds_won).max()?;
        let mut leaders = self.players.iter().filter(|p| p.rounds_won == best);
        let leader = leaders.next()?;
        if leaders.next().is_some() {
            None
        } else {
            Some(leader)
        }
    }

    /// Save standings to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), StandingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load standings from a JSON file
    pub fn load(path: &Path) -> Result<Self, StandingsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));

        report.push_str(&format!(
            "{:<20} {:>6} {:>11} {:>6}\n",
            "Player", "Color", "Rounds won", "Score"
        ));
        report.push_str(&"-".repeat(46));
        report.push('\n');
        for p in &self.players {
            let color = p.color.map_or_else(|| "-".to_string(), |c| c.to_string());
            report.push_str(&format!(
                "{:<20} {:>6} {:>11} {:>6}\n",
                p.name, color, p.rounds_won, p.score
            ));
        }

        if !self.rounds.is_empty() {
            report.push_str("\nRounds:\n");
            for r in &self.rounds {
                let outcome = match (&r.outcome, &r.winner) {
                    (RoundOutcome::Win, Some(w)) => format!("{} wins by {}", w, r.margin),
                    (RoundOutcome::BothConnected, _) => "both connected, no winner".to_string(),
                    (RoundOutcome::MoveLimit, _) => "draw (move limit)".to_string(),
                    (RoundOutcome::NoLegalMoves, _) => "draw (no legal moves)".to_string(),
                    (RoundOutcome::Win, None) => "win".to_string(),
                };
                report.push_str(&format!(
                    "{:>3}. {:<20} {:>4} plies  {}\n",
                    r.number, r.starter, r.plies, outcome
                ));
            }
        }

        report.push('\n');
        match self.overall_winner() {
            Some(w) => report.push_str(&format!(
                "Tournament winner: {} ({} rounds won)\n",
                w.name, w.rounds_won
            )),
            None => report.push_str("No clear winner\n"),
        }
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
