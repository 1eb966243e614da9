use std::fmt;

use tracing::warn;

use crate::types::*;

/// Receives a callback after every mutation of a [`Board`].
pub trait BoardObserver: Send {
    fn on_board_changed(&mut self, board: &Board);
}

/// Handle returned by [`Board::add_observer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// The 8x8 grid. A mechanism only: no legality checks happen here,
/// callers validate through `rules` first.
pub struct Board {
    cells: [[Cell; 8]; 8],
    last_move: Option<(Square, Square)>,
    observers: Vec<(ObserverId, Box<dyn BoardObserver>)>,
    next_observer: u64,
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; 8]; 8],
            last_move: None,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();
        b.place_start_pieces();
        b
    }

    pub fn from_preset(preset: Preset) -> Self {
        let mut b = Board::empty();
        b.load_preset(preset);
        b
    }

    /// Restores the starting layout: Black along the top and bottom rows,
    /// White along the left and right columns, corners empty.
    pub fn reset(&mut self) {
        self.place_start_pieces();
        self.notify();
    }

    fn place_start_pieces(&mut self) {
        self.cells = [[Cell::Empty; 8]; 8];
        self.last_move = None;
        for i in 1..7 {
            self.cells[0][i] = Cell::Black;
            self.cells[7][i] = Cell::Black;
            self.cells[i][0] = Cell::White;
            self.cells[i][7] = Cell::White;
        }
    }

    pub fn load_preset(&mut self, preset: Preset) {
        self.cells = [[Cell::Empty; 8]; 8];
        self.last_move = None;
        for &(row, col, color) in preset.layout() {
            self.cells[row as usize][col as usize] = Cell::from(color);
        }
        self.notify();
    }

    /// Empties every square.
    pub fn clear(&mut self) {
        self.cells = [[Cell::Empty; 8]; 8];
        self.last_move = None;
        self.notify();
    }

    /// Returns `None` for off-board squares so callers can probe edges freely.
    pub fn cell(&self, sq: Square) -> Option<Cell> {
        if sq.is_valid() {
            Some(self.cells[sq.row as usize][sq.col as usize])
        } else {
            None
        }
    }

    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.cell(sq).and_then(Cell::color)
    }

    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.cell(sq) == Some(Cell::Empty)
    }

    /// Writes a square directly. Out-of-bounds writes are logged and ignored.
    pub fn set_cell(&mut self, sq: Square, cell: Cell) -> bool {
        if !sq.is_valid() {
            warn!(row = sq.row, col = sq.col, "attempted to set cell out of bounds");
            return false;
        }
        self.cells[sq.row as usize][sq.col as usize] = cell;
        self.notify();
        true
    }

    /// Moves whatever sits on `from` to `to`, emptying `from`. Whatever was on
    /// `to` is overwritten, which is how captures happen.
    pub fn move_piece(&mut self, from: Square, to: Square) -> bool {
        if !from.is_valid() || !to.is_valid() {
            warn!(%from, %to, "attempted to move piece out of bounds");
            return false;
        }
        let moving = self.cells[from.row as usize][from.col as usize];
        self.cells[to.row as usize][to.col as usize] = moving;
        self.cells[from.row as usize][from.col as usize] = Cell::Empty;
        self.last_move = Some((from, to));
        self.notify();
        true
    }

    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    pub fn count_pieces(&self) -> PieceCounts {
        let mut counts = PieceCounts::default();
        for row in &self.cells {
            for cell in row {
                match cell {
                    Cell::Black => counts.black += 1,
                    Cell::White => counts.white += 1,
                    Cell::Empty => {}
                }
            }
        }
        counts
    }

    pub fn count(&self, c: Color) -> u32 {
        self.count_pieces().of(c)
    }

    pub fn squares_of(&self, c: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.color_at(sq) == Some(c))
    }

    pub fn add_observer(&mut self, observer: Box<dyn BoardObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        // Observers get `&Board`, so detach them for the duration of the call.
        let mut observers = std::mem::take(&mut self.observers);
        for (_, o) in observers.iter_mut() {
            o.on_board_changed(self);
        }
        self.observers = observers;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Clone for Board {
    /// Snapshots carry the grid and last move but no observers.
    fn clone(&self) -> Self {
        Board {
            cells: self.cells,
            last_move: self.last_move,
            observers: Vec::new(),
            next_observer: 0,
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Eq for Board {}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("grid", &self.to_string())
            .field("last_move", &self.last_move)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Fixed scenario boards used for testing captures and connectivity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Preset {
    Case1,
    Case2,
    Case3,
    Case4,
    Case5,
}

use crate::types::Color::{Black as B, White as W};

const CASE_1: &[(i8, i8, Color)] = &[
    (1, 0, W),
    (2, 0, B),
    (2, 1, B),
    (2, 2, B),
    (3, 0, B),
    (3, 2, W),
    (3, 5, B),
    (4, 0, W),
    (4, 3, B),
    (4, 4, B),
    (5, 1, B),
    (5, 2, W),
    (5, 3, B),
    (5, 5, W),
    (5, 6, W),
    (6, 7, W),
];

const CASE_3: &[(i8, i8, Color)] = &[
    (1, 0, W),
    (2, 0, B),
    (2, 1, B),
    (2, 2, B),
    (3, 0, B),
    (3, 2, B),
    (4, 0, W),
    (4, 3, B),
    (4, 4, B),
    (4, 5, W),
    (5, 1, B),
    (5, 2, W),
    (5, 3, B),
    (5, 5, W),
    (5, 6, W),
];

const CASE_5: &[(i8, i8, Color)] = &[
    (0, 3, W),
    (1, 0, W),
    (1, 2, B),
    (2, 0, B),
    (2, 1, B),
    (3, 0, B),
    (3, 1, B),
    (3, 5, B),
    (4, 0, W),
    (4, 3, B),
    (4, 4, B),
    (4, 5, W),
    (5, 3, B),
    (5, 5, W),
    (5, 6, W),
    (5, 7, W),
];

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Case1,
        Preset::Case2,
        Preset::Case3,
        Preset::Case4,
        Preset::Case5,
    ];

    /// (row, col, color) for every occupied square.
    pub fn layout(self) -> &'static [(i8, i8, Color)] {
        // Case 2 and case 4 share a layout with their predecessor and differ
        // only in who plays which color.
        match self {
            Preset::Case1 | Preset::Case2 => CASE_1,
            Preset::Case3 | Preset::Case4 => CASE_3,
            Preset::Case5 => CASE_5,
        }
    }

    /// Color assigned to player 1 when a round starts from this preset.
    pub fn player1_color(self) -> Color {
        match self {
            Preset::Case2 | Preset::Case3 => Color::White,
            Preset::Case1 | Preset::Case4 | Preset::Case5 => Color::Black,
        }
    }

    /// Whether player 1 (rather than player 2) moves first.
    pub fn player1_starts(self) -> bool {
        matches!(self, Preset::Case4)
    }

    pub fn number(self) -> u8 {
        match self {
            Preset::Case1 => 1,
            Preset::Case2 => 2,
            Preset::Case3 => 3,
            Preset::Case4 => 4,
            Preset::Case5 => 5,
        }
    }

    pub fn from_number(n: u8) -> Option<Preset> {
        Preset::ALL.iter().copied().find(|p| p.number() == n)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
