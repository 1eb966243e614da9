use crate::types::{Color, Square};

/// Why a move was refused. Informational only: the board is never touched
/// when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no {color} piece on {square}")]
    NotYourPiece { square: Square, color: Color },

    #[error("square {0} is off the board")]
    OutOfBounds(Square),

    #[error("path from {from} to {to} is blocked")]
    PathBlocked { from: Square, to: Square },

    #[error("{from} to {to} is not a straight line")]
    NotAligned { from: Square, to: Square },

    #[error("move covers {distance} squares but the line holds {required} other pieces")]
    WrongDistance { distance: u32, required: u32 },

    #[error("destination {0} holds one of the mover's own pieces")]
    OwnPieceAtDestination(Square),

    #[error("the round is already over")]
    RoundOver,
}

/// Unrecoverable problems while setting up a round.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("both players are named {0:?}")]
    DuplicatePlayerName(String),

    #[error("player name {0:?} is empty, padded or holds control characters")]
    InvalidPlayerName(String),

    #[error("player {0:?} has no color to keep from the previous round")]
    MissingColor(String),

    #[error("both players hold {0}")]
    DuplicateColor(Color),
}

/// Errors reading or writing a saved game.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected {expected}")]
    Missing { line: usize, expected: &'static str },

    #[error("line {line}: board row has {found} cells, expected 8")]
    ShortRow { line: usize, found: usize },

    #[error("line {line}: unknown cell symbol {symbol:?}")]
    BadCell { line: usize, symbol: String },

    #[error("line {line}: invalid number {value:?}")]
    BadNumber { line: usize, value: String },

    #[error("line {line}: invalid color {value:?}")]
    BadColor { line: usize, value: String },

    #[error("next player {0:?} is not one of the saved players")]
    UnknownNextPlayer(String),

    #[error("the round is over and has no next player to save")]
    RoundFinished,

    #[error("saved player {saved:?} does not match round player {given:?}")]
    PlayerMismatch { saved: String, given: String },

    #[error(transparent)]
    Round(#[from] RoundError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::WrongDistance {
            distance: 2,
            required: 1,
        };
        assert_eq!(
            err.to_string(),
            "move covers 2 squares but the line holds 1 other pieces"
        );
    }

    #[test]
    fn test_not_your_piece_uses_notation() {
        let err = MoveError::NotYourPiece {
            square: Square::new(1, 0),
            color: Color::White,
        };
        assert_eq!(err.to_string(), "no White piece on A7");
    }

    #[test]
    fn test_persist_error_display() {
        let err = PersistError::ShortRow { line: 3, found: 5 };
        assert_eq!(err.to_string(), "line 3: board row has 5 cells, expected 8");
    }
}
