//! Move legality.
//!
//! A piece moves in a straight line exactly as many squares as there are
//! other pieces (of either color) on that line. It may not pass over any
//! piece, and it captures an opposing piece by landing on it.

use tracing::debug;

use crate::{board::Board, error::MoveError, types::*};

/// The four line families through a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right.
    DiagonalMain,
    /// Top-right to bottom-left.
    DiagonalAnti,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalMain,
        Direction::DiagonalAnti,
    ];

    /// Unit (row, col) step in the positive sense of this axis.
    pub fn step(self) -> (i8, i8) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalMain => (1, 1),
            Direction::DiagonalAnti => (1, -1),
        }
    }

    /// Axis and sign (+1/-1 relative to [`Direction::step`]) of a move,
    /// or `None` when the squares are equal or not aligned.
    pub fn between(from: Square, to: Square) -> Option<(Direction, i8)> {
        let dr = to.row - from.row;
        let dc = to.col - from.col;
        match (dr, dc) {
            (0, 0) => None,
            (0, _) => Some((Direction::Horizontal, dc.signum())),
            (_, 0) => Some((Direction::Vertical, dr.signum())),
            _ if dr == dc => Some((Direction::DiagonalMain, dr.signum())),
            _ if dr == -dc => Some((Direction::DiagonalAnti, dr.signum())),
            _ => None,
        }
    }
}

/// Edge-to-edge walk along one axis through a square.
///
/// The walk starts where the line enters the board behind the square (relative
/// to the direction of travel) and runs to where it leaves the board ahead of
/// it. Edges truncate diagonals asymmetrically, so the origin is found by
/// stepping back rather than by a fixed offset.
#[derive(Clone, Debug)]
pub struct Line {
    next: Square,
    dr: i8,
    dc: i8,
}

impl Line {
    pub fn through(sq: Square, dir: Direction, sign: i8) -> Line {
        let (r, c) = dir.step();
        let (dr, dc) = (r * sign, c * sign);
        let mut origin = sq;
        if sq.is_valid() {
            while origin.offset(-dr, -dc).is_valid() {
                origin = origin.offset(-dr, -dc);
            }
        }
        Line {
            next: origin,
            dr,
            dc,
        }
    }
}

impl Iterator for Line {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if !self.next.is_valid() {
            return None;
        }
        let cur = self.next;
        self.next = cur.offset(self.dr, self.dc);
        Some(cur)
    }
}

/// Pieces of either color on the line through `sq`, not counting `sq` itself.
/// This is the distance any move from `sq` along `dir` must cover.
pub fn count_pieces_in_line(board: &Board, sq: Square, dir: Direction) -> u32 {
    count_along(board, sq, dir, 1)
}

fn count_along(board: &Board, sq: Square, dir: Direction, sign: i8) -> u32 {
    Line::through(sq, dir, sign)
        .filter(|&s| s != sq && board.color_at(s).is_some())
        .count() as u32
}

/// Outcome of walking a move's path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathStatus {
    Clear,
    /// Clear, landing on an opposing piece at the given square.
    Capture(Square),
    Blocked,
}

/// Checks the squares strictly between `from` and `to` (any piece blocks) and
/// then the destination. Squares that are not on a common line are `Blocked`.
pub fn is_path_clear(board: &Board, from: Square, to: Square, mover: Color) -> PathStatus {
    if !from.is_valid() || !to.is_valid() {
        return PathStatus::Blocked;
    }
    let Some((dir, sign)) = Direction::between(from, to) else {
        return PathStatus::Blocked;
    };
    let (r, c) = dir.step();
    let (dr, dc) = (r * sign, c * sign);

    let mut cur = from.offset(dr, dc);
    while cur != to {
        if board.color_at(cur).is_some() {
            return PathStatus::Blocked;
        }
        cur = cur.offset(dr, dc);
    }

    match board.color_at(to) {
        None => PathStatus::Clear,
        Some(c) if c == mover => PathStatus::Blocked,
        Some(_) => PathStatus::Capture(to),
    }
}

/// Validates a move and returns it with its capture list filled in.
///
/// Checks run in order and stop at the first failure: ownership of the start
/// square, bounds, path, alignment, distance, destination.
pub fn validate_move(
    board: &Board,
    mover: Color,
    from: Square,
    to: Square,
) -> Result<Move, MoveError> {
    let result = check_move(board, mover, from, to);
    if let Err(err) = &result {
        debug!(%from, %to, color = %mover, %err, "move rejected");
    }
    result
}

fn check_move(board: &Board, mover: Color, from: Square, to: Square) -> Result<Move, MoveError> {
    if board.color_at(from) != Some(mover) {
        return Err(MoveError::NotYourPiece {
            square: from,
            color: mover,
        });
    }
    if !to.is_valid() {
        return Err(MoveError::OutOfBounds(to));
    }

    let aligned = Direction::between(from, to);
    let path = is_path_clear(board, from, to, mover);
    if path == PathStatus::Blocked {
        return Err(match aligned {
            None => MoveError::NotAligned { from, to },
            Some(_) if board.color_at(to) == Some(mover) => MoveError::OwnPieceAtDestination(to),
            Some(_) => MoveError::PathBlocked { from, to },
        });
    }
    let Some((dir, sign)) = aligned else {
        return Err(MoveError::NotAligned { from, to });
    };

    let distance = (to.row - from.row).abs().max((to.col - from.col).abs()) as u32;
    let required = count_along(board, from, dir, sign);
    if distance != required {
        return Err(MoveError::WrongDistance { distance, required });
    }

    let mut mv = Move::new(from, to);
    match path {
        PathStatus::Capture(sq) => mv.captures.push(sq),
        PathStatus::Clear => {}
        PathStatus::Blocked => return Err(MoveError::OwnPieceAtDestination(to)),
    }
    Ok(mv)
}

pub fn is_valid_move(board: &Board, mover: Color, from: Square, to: Square) -> bool {
    validate_move(board, mover, from, to).is_ok()
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
