//! Square board of three-valued cells

use super::{Pos, Stone, BOARD_SIZE};

/// Game board, row-major, side length fixed at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
}

impl Board {
    /// Standard 15x15 board
    pub fn new() -> Self {
        Self::with_size(BOARD_SIZE)
    }

    /// Board with a custom side length
    pub fn with_size(size: usize) -> Self {
        assert!(
            (1..=u8::MAX as usize).contains(&size),
            "board size must be in 1..=255, got {size}"
        );
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check signed coordinates against the board edges
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Convert signed coordinates into a position if on the board
    #[inline]
    pub fn pos_at(&self, row: i32, col: i32) -> Option<Pos> {
        if self.in_bounds(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!((pos.row as usize) < self.size && (pos.col as usize) < self.size);
        pos.row as usize * self.size + pos.col as usize
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[self.index(pos)]
    }

    /// Stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn stone_at(&self, row: i32, col: i32) -> Option<Stone> {
        self.pos_at(row, col).map(|pos| self.get(pos))
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        self.cells[idx] = stone;
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.cells[idx] = Stone::Empty;
    }

    /// Center cell, the opening move on an empty board
    #[inline]
    pub fn center(&self) -> Pos {
        let c = (self.size / 2) as u8;
        Pos::new(c, c)
    }

    /// Iterate over every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        (0..size * size).map(move |idx| Pos::new((idx / size) as u8, (idx % size) as u8))
    }

    /// Iterate over occupied positions in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.positions()
            .map(|pos| (pos, self.get(pos)))
            .filter(|&(_, stone)| stone != Stone::Empty)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// Check if no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&s| s != Stone::Empty)
    }

    /// Rows of cell codes (0 empty, 1 black, 2 white)
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|s| s.code()).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
