use crate::{
    board::Board,
    rules::{count_pieces_in_line, validate_move, Direction},
    types::*,
};

/// Generate all legal moves for `color`, returning a freshly allocated vector.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(board, color, &mut out);
    out
}

/// Generate all legal moves for `color` into the provided buffer, reusing it
/// across calls. The list is rebuilt from scratch every time.
pub fn legal_moves_into(board: &Board, color: Color, out: &mut Vec<Move>) {
    out.clear();
    for from in board.squares_of(color) {
        for dir in Direction::ALL {
            let (dr, dc) = dir.step();
            let required = count_pieces_in_line(board, from, dir) as i8;
            for offset in 1..=required {
                for sign in [1, -1] {
                    let to = from.offset(dr * offset * sign, dc * offset * sign);
                    if !to.is_valid() {
                        continue;
                    }
                    if let Ok(mv) = validate_move(board, color, from, to) {
                        out.push(mv);
                    }
                }
            }
        }
    }
}

/// True when `color` has at least one legal move.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    !legal_moves(board, color).is_empty()
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
