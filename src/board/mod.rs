//! Board representation for Gomoku

pub mod board;
pub mod trial;


// Re-exports
pub use board::Board;
pub use trial::TrialStone;

/// Default board size (15x15)
pub const BOARD_SIZE: usize = 15;

/// The four line axes; each is also walked in reverse where needed
pub const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Numeric cell code (0 empty, 1 black, 2 white)
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            Stone::Empty => 0,
            Stone::Black => 1,
            Stone::White => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Empty => "empty",
            Stone::Black => "black",
            Stone::White => "white",
        }
    }
}

impl std::str::FromStr for Stone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" | "b" => Ok(Stone::Black),
            "white" | "w" => Ok(Stone::White),
            other => Err(format!("unknown stone color '{other}' (expected black or white)")),
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Step `steps` cells along `(dr, dc)`, returning signed coordinates
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32) -> (i32, i32) {
        (
            i32::from(self.row) + dr * steps,
            i32::from(self.col) + dc * steps,
        )
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
