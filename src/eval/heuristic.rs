//! Heuristic evaluation function for Gomoku board positions
//!
//! The score of a position for a color is the sum of its run values minus the
//! opponent's run values scaled by [`DEFENSE_FACTOR`](super::patterns::DEFENSE_FACTOR).
//! The asymmetry makes the engine prefer blocking over building when the two
//! are close.

use crate::board::{Board, Stone, DIRECTIONS};

use super::line::{is_run_start, scan_line};
use super::patterns::{line_score, weighted_threat};

/// Evaluate the board from the perspective of the given color.
///
/// Positive values favor `color`. `color` must not be `Stone::Empty`.
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i64 {
    debug_assert!(color != Stone::Empty, "evaluate called for empty color");
    let mine = pattern_total(board, color);
    let theirs = pattern_total(board, color.opponent());
    mine - weighted_threat(theirs)
}

/// Sum of run values for every maximal run of `color` on the board.
///
/// Each run is scored once per axis, from its starting stone.
#[must_use]
pub fn pattern_total(board: &Board, color: Stone) -> i64 {
    let mut total = 0;
    for (pos, stone) in board.occupied() {
        if stone != color {
            continue;
        }
        for &(dr, dc) in &DIRECTIONS {
            if !is_run_start(board, pos, color, dr, dc) {
                continue;
            }
            let info = scan_line(board, pos, color, dr, dc);
            total += line_score(info.length, info.open_ends);
        }
    }
    total
}
