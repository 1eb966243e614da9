pub mod board;
pub mod connectivity;
pub mod error;
pub mod movegen;
pub mod persist;
pub mod player;
pub mod round;
pub mod rules;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use connectivity::{evaluate, group_count, is_fully_connected, WinCheck};
pub use error::*;
pub use movegen::*;
pub use persist::{SavedGame, SavedPlayer};
pub use player::*;
pub use round::*;
pub use rules::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by automated opponents
// =============================================================================

/// Trait that all automated players must implement.
///
/// The round asks the engine for a move whenever it is the engine's turn and
/// re-validates whatever comes back before touching the board.
pub trait Engine: Send {
    /// Choose a move for `color` on `board`.
    ///
    /// # Returns
    /// `None` when the engine has no legal move to offer.
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move>;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new round.
    fn new_game(&mut self) {}
}
