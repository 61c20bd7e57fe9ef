//! Game rules for freestyle Gomoku
//!
//! - Win condition: `win_length` or more stones in a row (overlines count)
//! - Legal move: any empty cell on the board

pub mod win;

use crate::board::{Board, Pos};

// Re-exports for convenient access
pub use win::{count_direction, is_winning_move, winning_line};

/// Check whether signed coordinates name an empty cell on the board
#[inline]
pub fn is_valid_move(board: &Board, row: i32, col: i32) -> bool {
    board.pos_at(row, col).is_some_and(|pos| board.is_empty(pos))
}

/// `is_valid_move` for an already-typed position
#[inline]
pub fn is_open(board: &Board, pos: Pos) -> bool {
    is_valid_move(board, i32::from(pos.row), i32::from(pos.col))
}
