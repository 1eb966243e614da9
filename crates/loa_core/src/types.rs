use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: i8 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
    pub fn symbol(self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
    pub fn from_symbol(c: char) -> Option<Color> {
        match c.to_ascii_uppercase() {
            'B' => Some(Color::Black),
            'W' => Some(Color::White),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("Black"),
            Color::White => f.write_str("White"),
        }
    }
}

/// Contents of a single square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'B',
            Cell::White => 'W',
        }
    }
    /// Parses a saved-board symbol. `X` is the legacy empty marker.
    pub fn from_symbol(c: char) -> Option<Cell> {
        match c.to_ascii_uppercase() {
            '.' | 'X' => Some(Cell::Empty),
            other => Color::from_symbol(other).map(Cell::from),
        }
    }
}

impl From<Color> for Cell {
    fn from(c: Color) -> Cell {
        match c {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }
}

/// A board coordinate. Signed so that off-board probes stay representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn is_valid(self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    pub fn offset(self, dr: i8, dc: i8) -> Square {
        Square::new(self.row + dr, self.col + dc)
    }

    /// Iterates every on-board square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|r| (0..BOARD_SIZE).map(move |c| Square::new(r, c)))
    }

    /// Parses algebraic notation: file `A`..`H` left to right, rank `8 - row`.
    pub fn from_notation(s: &str) -> Option<Square> {
        let b = s.trim().as_bytes();
        if b.len() != 2 {
            return None;
        }
        let f = b[0].to_ascii_uppercase();
        let r = b[1];
        if !(b'A'..=b'H').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        let col = (f - b'A') as i8;
        let row = BOARD_SIZE - (r - b'0') as i8;
        Some(Square::new(row, col))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "({},{})", self.row, self.col);
        }
        let file = (b'A' + self.col as u8) as char;
        write!(f, "{}{}", file, BOARD_SIZE - self.row)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Squares whose opposing pieces are removed by this move.
    pub captures: Vec<Square>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            captures: Vec::new(),
        }
    }

    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)?;
        for c in &self.captures {
            write!(f, "x{c}")?;
        }
        Ok(())
    }
}

/// Piece totals per color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceCounts {
    pub black: u32,
    pub white: u32,
}

impl PieceCounts {
    pub fn of(&self, c: Color) -> u32 {
        match c {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub fn empty(&self) -> u32 {
        64 - self.black - self.white
    }
}
