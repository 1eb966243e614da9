//! Random Move Engine
//!
//! The automated opponent: picks uniformly at random among legal moves, but
//! always takes a capture when one is available. Useful for:
//! - Playing the computer side of a round
//! - Baseline comparisons in tournament runs
//! - Stress testing move generation

use loa_core::{legal_moves_into, Board, Color, Engine, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[cfg(test)]
mod lib_tests;

/// Chooses among `moves`, restricted to capturing moves when any exist.
///
/// Returns `None` only for an empty list.
pub fn select_move<R: Rng + ?Sized>(moves: &[Move], rng: &mut R) -> Option<Move> {
    let captures: Vec<&Move> = moves.iter().filter(|m| m.is_capture()).collect();
    if captures.is_empty() {
        moves.choose(rng).cloned()
    } else {
        captures.choose(rng).map(|&m| m.clone())
    }
}

/// An engine that plays random legal moves, captures first.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
    moves: Vec<Move>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            moves: Vec::with_capacity(64),
        }
    }

    /// Reproducible engine: the same seed plays the same moves.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            moves: Vec::with_capacity(64),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        legal_moves_into(board, color, &mut self.moves);
        select_move(&self.moves, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.moves.clear();
    }
}
