use std::fmt;

use crate::{board::Board, types::*, Engine};

/// Who decides a player's moves.
pub enum Controller {
    /// Moves arrive from outside through `Round::submit_move`.
    Human,
    Engine(Box<dyn Engine>),
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Controller::Human => f.write_str("Human"),
            Controller::Engine(e) => write!(f, "Engine({})", e.name()),
        }
    }
}

/// Index of a player within a round: 0 for player 1, 1 for player 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PlayerId(pub usize);

impl PlayerId {
    pub const ONE: PlayerId = PlayerId(0);
    pub const TWO: PlayerId = PlayerId(1);

    pub fn other(self) -> PlayerId {
        PlayerId(1 - self.0)
    }
}

#[derive(Debug)]
pub struct Player {
    pub name: String,
    /// Assigned at round start; may flip between rounds.
    pub color: Option<Color>,
    pub score: i32,
    pub rounds_won: u32,
    pub controller: Controller,
}

impl Player {
    pub fn human(name: &str) -> Self {
        Self::with_controller(name, Controller::Human)
    }

    pub fn engine(name: &str, engine: Box<dyn Engine>) -> Self {
        Self::with_controller(name, Controller::Engine(engine))
    }

    fn with_controller(name: &str, controller: Controller) -> Self {
        Self {
            name: name.to_string(),
            color: None,
            score: 0,
            rounds_won: 0,
            controller,
        }
    }

    pub fn is_automated(&self) -> bool {
        matches!(self.controller, Controller::Engine(_))
    }

    /// Asks the controller for a move. Humans never propose one here.
    pub fn propose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        match &mut self.controller {
            Controller::Human => None,
            Controller::Engine(engine) => engine.choose_move(board, color),
        }
    }

    pub fn new_game(&mut self) {
        if let Controller::Engine(engine) = &mut self.controller {
            engine.new_game();
        }
    }
}
