//! Win detection: a side wins when all of its pieces form one group under
//! king-move (8-way) adjacency.

use crate::{board::Board, types::*};

const NEIGHBORS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Flood fill from `seed` over squares holding `color`.
fn fill(board: &Board, seed: Square, color: Color, visited: &mut [[bool; 8]; 8]) {
    let mut stack = vec![seed];
    visited[seed.row as usize][seed.col as usize] = true;
    while let Some(sq) = stack.pop() {
        for (dr, dc) in NEIGHBORS {
            let n = sq.offset(dr, dc);
            if board.color_at(n) == Some(color) && !visited[n.row as usize][n.col as usize] {
                visited[n.row as usize][n.col as usize] = true;
                stack.push(n);
            }
        }
    }
}

/// True when every piece of `color` is reachable from the first one found in
/// row-major order. A color with no pieces is never connected.
pub fn is_fully_connected(board: &Board, color: Color) -> bool {
    let Some(seed) = board.squares_of(color).next() else {
        return false;
    };
    let mut visited = [[false; 8]; 8];
    fill(board, seed, color, &mut visited);
    board
        .squares_of(color)
        .all(|sq| visited[sq.row as usize][sq.col as usize])
}

/// Number of separate groups of `color`.
pub fn group_count(board: &Board, color: Color) -> usize {
    let mut visited = [[false; 8]; 8];
    let mut groups = 0;
    for sq in board.squares_of(color) {
        if !visited[sq.row as usize][sq.col as usize] {
            fill(board, sq, color, &mut visited);
            groups += 1;
        }
    }
    groups
}

/// Connectivity of both sides after a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WinCheck {
    Undecided,
    Connected(Color),
    /// Both sides connected at once. Kept distinct so callers do not silently
    /// pick a winner.
    BothConnected,
}

pub fn evaluate(board: &Board) -> WinCheck {
    match (
        is_fully_connected(board, Color::Black),
        is_fully_connected(board, Color::White),
    ) {
        (true, true) => WinCheck::BothConnected,
        (true, false) => WinCheck::Connected(Color::Black),
        (false, true) => WinCheck::Connected(Color::White),
        (false, false) => WinCheck::Undecided,
    }
}

#[cfg(test)]
#[path = "connectivity_tests.rs"]
mod connectivity_tests;
