//! Candidate move generation
//!
//! Only empty cells near existing stones are worth considering. The scan walks
//! each occupied cell's neighbourhood instead of the whole board.

use crate::board::{Board, Pos};
use crate::rules::is_valid_move;

/// Empty cells within Chebyshev distance `radius` of any stone.
///
/// Each cell appears once. Returns an empty list for an empty board, which
/// callers treat as "play the center".
pub fn generate_candidates(board: &Board, radius: usize) -> Vec<Pos> {
    let size = board.size();
    let mut moves = Vec::with_capacity(64);
    let mut seen = vec![false; size * size];
    let radius = radius as i32;

    for (pos, _) in board.occupied() {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                let r = i32::from(pos.row) + dr;
                let c = i32::from(pos.col) + dc;

                if !is_valid_move(board, r, c) {
                    continue;
                }

                let idx = r as usize * size + c as usize;
                if seen[idx] {
                    continue;
                }
                seen[idx] = true;

                moves.push(Pos::new(r as u8, c as u8));
            }
        }
    }

    moves
}
