//! Players carried across rounds.
//!
//! The first round opens with a coin toss. After a win, the winner starts the
//! next round with Black. After a round without a winner the colors stay as
//! they were and Black starts again.

use loa_core::{
    check_player_names, check_setup, Color, ColorAssignment, DrawReason, Player, PlayerId, Round,
    RoundResult, RoundSetup, StartingSide,
};
use tracing::info;

use crate::error::TournamentError;
use crate::results::{MatchResult, RoundOutcome, RoundSummary, StandingEntry, Standings};

#[derive(Debug)]
pub struct Tournament {
    name: String,
    /// `None` while a round holds the players.
    players: Option<[Player; 2]>,
    standings: [StandingEntry; 2],
    first_toss: StartingSide,
    max_plies: Option<u32>,
    last_winner: Option<PlayerId>,
    /// Name of whoever opened the round in progress.
    starter: Option<String>,
    rounds: Vec<RoundSummary>,
}

impl Tournament {
    pub fn new(name: &str, players: [Player; 2]) -> Result<Self, TournamentError> {
        check_player_names(&players)?;
        let entry = |p: &Player| StandingEntry {
            name: p.name.clone(),
            color: p.color,
            rounds_won: p.rounds_won,
            score: p.score,
        };
        Ok(Tournament {
            name: name.to_string(),
            standings: [entry(&players[0]), entry(&players[1])],
            players: Some(players),
            first_toss: StartingSide::default(),
            max_plies: None,
            last_winner: None,
            starter: None,
            rounds: Vec::new(),
        })
    }

    /// How the first round's starter is chosen.
    pub fn with_toss(mut self, toss: StartingSide) -> Self {
        self.first_toss = toss;
        self
    }

    pub fn with_max_plies(mut self, max_plies: Option<u32>) -> Self {
        self.max_plies = max_plies;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds.len() as u32
    }

    pub fn rounds(&self) -> &[RoundSummary] {
        &self.rounds
    }

    pub fn last_winner(&self) -> Option<PlayerId> {
        self.last_winner
    }

    /// The players, unless a round is in progress.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    pub fn into_players(self) -> Option<[Player; 2]> {
        self.players
    }

    fn next_setup(&self, players: &[Player; 2]) -> RoundSetup {
        let (start, colors) = match self.last_winner {
            Some(winner) => (
                StartingSide::Player(winner),
                ColorAssignment::StarterTakesBlack,
            ),
            None if self.rounds.is_empty() => {
                (self.first_toss, ColorAssignment::StarterTakesBlack)
            }
            None => {
                let black = if players[0].color == Some(Color::Black) {
                    PlayerId::ONE
                } else {
                    PlayerId::TWO
                };
                (StartingSide::Player(black), ColorAssignment::KeepPrevious)
            }
        };
        RoundSetup {
            start,
            colors,
            max_plies: self.max_plies,
            ..RoundSetup::default()
        }
    }

    /// Hands the players to a new round. They come back through
    /// [`Tournament::record_round`]. If the round cannot be set up the
    /// players stay with the tournament.
    pub fn start_round(&mut self) -> Result<Round, TournamentError> {
        let number = self.rounds_played() + 1;
        let players = self
            .players
            .as_ref()
            .ok_or(TournamentError::RoundInProgress(number))?;
        let setup = self.next_setup(players);
        // Round::new consumes the players even when it fails.
        check_setup(players, &setup)?;
        let players = self
            .players
            .take()
            .ok_or(TournamentError::RoundInProgress(number))?;
        let round = Round::new(players, setup)?;
        let starter = round.current_player().name.clone();
        info!(tournament = %self.name, round = number, %starter, "round started");
        self.starter = Some(starter);
        Ok(round)
    }

    /// Takes the players back from a round and records its outcome. An
    /// unfinished round still returns its players but is not recorded.
    pub fn record_round(&mut self, round: Round) -> Result<&RoundSummary, TournamentError> {
        let number = self.rounds_played() + 1;
        let result = round.result();
        let starter = self.starter.take().unwrap_or_default();
        let plies = round.plies();

        let players = round.into_players();
        for (entry, p) in self.standings.iter_mut().zip(players.iter()) {
            entry.color = p.color;
            entry.rounds_won = p.rounds_won;
            entry.score = p.score;
        }
        let names = [players[0].name.clone(), players[1].name.clone()];
        self.players = Some(players);

        let Some(result) = result else {
            return Err(TournamentError::RoundNotFinished(number));
        };

        let (outcome, winner, winner_color, margin) = match result {
            RoundResult::Win {
                winner,
                color,
                margin,
            } => (RoundOutcome::Win, Some(winner), Some(color), margin),
            RoundResult::BothConnected => (RoundOutcome::BothConnected, None, None, 0),
            RoundResult::Draw(DrawReason::MoveLimit) => (RoundOutcome::MoveLimit, None, None, 0),
            RoundResult::Draw(DrawReason::NoLegalMoves) => (RoundOutcome::NoLegalMoves, None, None, 0),
        };
        self.last_winner = winner;

        let summary = RoundSummary {
            number,
            starter,
            outcome,
            winner: winner.map(|id| names[id.0].clone()),
            winner_color,
            margin,
            plies,
        };
        info!(
            tournament = %self.name,
            round = number,
            outcome = ?summary.outcome,
            winner = summary.winner.as_deref().unwrap_or("-"),
            plies,
            "round recorded"
        );
        self.rounds.push(summary);
        Ok(&self.rounds[self.rounds.len() - 1])
    }

    /// The player with more rounds won, or `None` on a tie.
    pub fn overall_winner(&self) -> Option<&StandingEntry> {
        let [a, b] = &self.standings;
        match a.rounds_won.cmp(&b.rounds_won) {
            std::cmp::Ordering::Greater => Some(a),
            std::cmp::Ordering::Less => Some(b),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn standings(&self) -> Standings {
        Standings {
            name: self.name.clone(),
            players: self.standings.to_vec(),
            rounds: self.rounds.clone(),
        }
    }

    /// Round tally from player 1's side.
    pub fn match_result(&self) -> MatchResult {
        let player1 = &self.standings[0].name;
        let mut result = MatchResult::new();
        for r in &self.rounds {
            match (r.outcome, &r.winner) {
                (RoundOutcome::Win, Some(w)) if w == player1 => result.wins += 1,
                (RoundOutcome::Win, _) => result.losses += 1,
                (RoundOutcome::BothConnected, _) => result.anomalies += 1,
                (RoundOutcome::MoveLimit | RoundOutcome::NoLegalMoves, _) => result.draws += 1,
            }
        }
        result
    }
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;
