//! Saved-game text format.
//!
//! ```text
//! Board:
//! . B B B B B B .
//! W . . . . . . W
//! ...
//!
//! Human:
//! Rounds won: 0
//! Score: 0
//!
//! Computer:
//! Rounds won: 1
//! Score: 4
//!
//! Next player: Human
//! Color: B
//! ```
//!
//! Player sections appear in player order and are headed by the player's
//! name. `X` is accepted as an empty square when reading.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::{
    board::Board,
    error::PersistError,
    player::{Player, PlayerId},
    round::{BoardSetup, ColorAssignment, Round, RoundSetup, StartingSide},
    types::*,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedPlayer {
    pub name: String,
    pub rounds_won: u32,
    pub score: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedGame {
    pub board: Board,
    pub players: [SavedPlayer; 2],
    pub next: PlayerId,
    pub next_color: Color,
}

impl SavedGame {
    /// Captures an in-progress round. A finished round has no next player and
    /// is refused.
    pub fn from_round(round: &Round) -> Result<Self, PersistError> {
        if round.is_over() {
            return Err(PersistError::RoundFinished);
        }
        let saved = |id: PlayerId| {
            let p = round.player(id);
            SavedPlayer {
                name: p.name.clone(),
                rounds_won: p.rounds_won,
                score: p.score,
            }
        };
        Ok(SavedGame {
            board: round.board().clone(),
            players: [saved(PlayerId::ONE), saved(PlayerId::TWO)],
            next: round.current_id(),
            next_color: round.current_color(),
        })
    }

    /// Rebuilds a round from this save. `players` supply the controllers and
    /// must carry the saved names in the saved order.
    pub fn into_round(self, mut players: [Player; 2]) -> Result<Round, PersistError> {
        for (given, saved) in players.iter_mut().zip(&self.players) {
            if given.name != saved.name {
                return Err(PersistError::PlayerMismatch {
                    saved: saved.name.clone(),
                    given: given.name.clone(),
                });
            }
            given.rounds_won = saved.rounds_won;
            given.score = saved.score;
        }
        let player1_color = if self.next == PlayerId::ONE {
            self.next_color
        } else {
            self.next_color.other()
        };
        let setup = RoundSetup {
            board: BoardSetup::Restored(self.board),
            start: StartingSide::Player(self.next),
            colors: ColorAssignment::Player1(player1_color),
            max_plies: None,
        };
        Ok(Round::new(players, setup)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), PersistError> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, PersistError> {
        std::fs::read_to_string(path)?.parse()
    }
}

impl fmt::Display for SavedGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:")?;
        write!(f, "{}", self.board)?;
        for p in &self.players {
            writeln!(f)?;
            writeln!(f, "{}:", p.name)?;
            writeln!(f, "Rounds won: {}", p.rounds_won)?;
            writeln!(f, "Score: {}", p.score)?;
        }
        writeln!(f)?;
        writeln!(f, "Next player: {}", self.players[self.next.0].name)?;
        writeln!(f, "Color: {}", self.next_color.symbol())
    }
}

/// Line cursor that skips blank lines and remembers 1-based line numbers.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    line: usize,
}

impl<'a> Lines<'a> {
    fn new(s: &'a str) -> Self {
        Lines {
            inner: s.lines().enumerate(),
            line: 0,
        }
    }

    fn next_nonblank(&mut self, expected: &'static str) -> Result<&'a str, PersistError> {
        for (i, l) in self.inner.by_ref() {
            self.line = i + 1;
            if !l.trim().is_empty() {
                return Ok(l.trim());
            }
        }
        Err(PersistError::Missing {
            line: self.line + 1,
            expected,
        })
    }

    fn field(&mut self, label: &'static str) -> Result<&'a str, PersistError> {
        let l = self.next_nonblank(label)?;
        l.strip_prefix(label)
            .and_then(|rest| rest.strip_prefix(':'))
            .map(str::trim)
            .ok_or(PersistError::Missing {
                line: self.line,
                expected: label,
            })
    }

    fn number<T: FromStr>(&mut self, label: &'static str) -> Result<T, PersistError> {
        let v = self.field(label)?;
        v.parse().map_err(|_| PersistError::BadNumber {
            line: self.line,
            value: v.to_string(),
        })
    }
}

impl FromStr for SavedGame {
    type Err = PersistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = Lines::new(s);

        if lines.next_nonblank("Board:")? != "Board:" {
            return Err(PersistError::Missing {
                line: lines.line,
                expected: "Board:",
            });
        }
        let mut board = Board::empty();
        for row in 0..8 {
            let l = lines.next_nonblank("board row")?;
            let symbols: Vec<&str> = l.split_whitespace().collect();
            if symbols.len() != 8 {
                return Err(PersistError::ShortRow {
                    line: lines.line,
                    found: symbols.len(),
                });
            }
            for (col, sym) in symbols.iter().enumerate() {
                let mut chars = sym.chars();
                let cell = match (chars.next(), chars.next()) {
                    (Some(c), None) => Cell::from_symbol(c),
                    _ => None,
                }
                .ok_or_else(|| PersistError::BadCell {
                    line: lines.line,
                    symbol: sym.to_string(),
                })?;
                board.set_cell(Square::new(row, col as i8), cell);
            }
        }

        let mut read_player = || -> Result<SavedPlayer, PersistError> {
            let header = lines.next_nonblank("player name")?;
            let name = header
                .strip_suffix(':')
                .ok_or(PersistError::Missing {
                    line: lines.line,
                    expected: "player name followed by ':'",
                })?
                .to_string();
            let rounds_won = lines.number("Rounds won")?;
            let score = lines.number("Score")?;
            Ok(SavedPlayer {
                name,
                rounds_won,
                score,
            })
        };
        let players = [read_player()?, read_player()?];

        let next_name = lines.field("Next player")?;
        let next = players
            .iter()
            .position(|p| p.name == next_name)
            .map(PlayerId)
            .ok_or_else(|| PersistError::UnknownNextPlayer(next_name.to_string()))?;

        let color_str = lines.field("Color")?;
        let mut chars = color_str.chars();
        let next_color = match (chars.next(), chars.next()) {
            (Some(c), None) => Color::from_symbol(c),
            _ => None,
        }
        .ok_or_else(|| PersistError::BadColor {
            line: lines.line,
            value: color_str.to_string(),
        })?;

        Ok(SavedGame {
            board,
            players,
            next,
            next_color,
        })
    }
}

#[cfg(test)]
#[path = "persist_tests.rs"]
mod persist_tests;
