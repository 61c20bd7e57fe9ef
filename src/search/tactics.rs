//! Forced-move detection

use crate::board::{Board, Pos, Stone, TrialStone};
use crate::rules::is_winning_move;

/// First candidate where `color` completes a winning run.
///
/// Used with the mover's color for the forced win and with the opponent's
/// color for the forced block. The board is unchanged on return.
pub fn find_immediate_win(
    board: &mut Board,
    candidates: &[Pos],
    color: Stone,
    win_length: usize,
) -> Option<Pos> {
    for &pos in candidates {
        let trial = TrialStone::place(board, pos, color);
        if is_winning_move(&trial, pos, color, win_length) {
            return Some(pos);
        }
    }
    None
}
