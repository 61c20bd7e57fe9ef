//! Two-ply adversarial lookahead for the hard tier
//!
//! For every candidate the mover plays it, then every opponent reply is tried.
//! A reply that wins outright scores [`LOSS_SCORE`]; otherwise the position is
//! evaluated for the mover. The candidate's value is its worst reply and the
//! candidate with the best worst case is chosen. No pruning.

use tracing::trace;

use crate::board::{Board, Pos, Stone, TrialStone};
use crate::config::EngineConfig;
use crate::eval::{evaluate, PatternScore, LOSS_SCORE};
use crate::rules::is_winning_move;

use super::candidates::generate_candidates;
use super::SearchStats;

/// Outcome of the two-ply search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookaheadResult {
    pub best_move: Pos,
    /// Worst-case score after the opponent's best reply
    pub score: i64,
    /// The move wins on the spot; no replies were examined for it
    pub immediate_win: bool,
}

/// Pick the candidate maximizing the mover's worst-case score.
///
/// Ties go to the earliest candidate. Returns `None` only for an empty
/// candidate list. The board is unchanged on return.
pub fn best_by_two_ply(
    board: &mut Board,
    candidates: &[Pos],
    color: Stone,
    config: &EngineConfig,
    stats: &mut SearchStats,
) -> Option<LookaheadResult> {
    let win_length = config.rules.win_length;
    let opponent = color.opponent();
    let mut best: Option<LookaheadResult> = None;

    for &mov in candidates {
        let mut after_move = TrialStone::place(board, mov, color);
        stats.nodes += 1;
        if is_winning_move(&after_move, mov, color, win_length) {
            return Some(LookaheadResult {
                best_move: mov,
                score: PatternScore::FIVE,
                immediate_win: true,
            });
        }

        let replies = generate_candidates(&after_move, config.candidate_radius);
        let worst = if replies.is_empty() {
            stats.nodes += 1;
            evaluate(&after_move, color)
        } else {
            worst_reply(&mut after_move, &replies, color, opponent, win_length, stats)
        };
        drop(after_move);

        trace!(row = mov.row, col = mov.col, worst, "two-ply candidate");

        if best.map_or(true, |b| worst > b.score) {
            best = Some(LookaheadResult {
                best_move: mov,
                score: worst,
                immediate_win: false,
            });
        }
    }

    best
}

/// Lowest mover score over all opponent replies; `replies` must be non-empty
fn worst_reply(
    board: &mut Board,
    replies: &[Pos],
    color: Stone,
    opponent: Stone,
    win_length: usize,
    stats: &mut SearchStats,
) -> i64 {
    let mut worst = i64::MAX;
    for &reply in replies {
        let after_reply = TrialStone::place(board, reply, opponent);
        stats.nodes += 1;
        let score = if is_winning_move(&after_reply, reply, opponent, win_length) {
            LOSS_SCORE
        } else {
            evaluate(&after_reply, color)
        };
        worst = worst.min(score);
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_all(board: &mut Board, cells: &[(u8, u8)], color: Stone) {
        for &(r, c) in cells {
            board.place_stone(Pos::new(r, c), color);
        }
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::White);
        place_all(&mut board, &[(8, 3), (8, 4), (9, 9)], Stone::Black);
        let before = board.clone();
        let candidates = generate_candidates(&board, 2);
        let mut stats = SearchStats::default();

        let result =
            best_by_two_ply(&mut board, &candidates, Stone::White, &EngineConfig::default(), &mut stats)
                .unwrap();
        assert!(result.immediate_win);
        assert!(result.best_move == Pos::new(7, 2) || result.best_move == Pos::new(7, 7));
        assert_eq!(board, before);
    }

    #[test]
    fn test_avoids_move_that_allows_five() {
        let mut board = Board::new();
        // Black threatens to finish at (5, 7); White must take it
        place_all(&mut board, &[(1, 7), (2, 7), (3, 7), (4, 7)], Stone::Black);
        place_all(&mut board, &[(0, 7), (10, 10), (10, 11)], Stone::White);
        let before = board.clone();
        let candidates = generate_candidates(&board, 2);
        let mut stats = SearchStats::default();

        let result =
            best_by_two_ply(&mut board, &candidates, Stone::White, &EngineConfig::default(), &mut stats)
                .unwrap();
        assert_eq!(result.best_move, Pos::new(5, 7));
        assert!(result.score > LOSS_SCORE);
        assert_eq!(board, before);
    }

    #[test]
    fn test_every_move_losing_still_returns_one() {
        let mut board = Board::new();
        // Two separate open fours for Black: White cannot stop both
        place_all(&mut board, &[(2, 2), (2, 3), (2, 4), (2, 5)], Stone::Black);
        place_all(&mut board, &[(10, 2), (10, 3), (10, 4), (10, 5)], Stone::Black);
        place_all(&mut board, &[(6, 6)], Stone::White);
        let candidates = generate_candidates(&board, 2);
        let mut stats = SearchStats::default();

        let result =
            best_by_two_ply(&mut board, &candidates, Stone::White, &EngineConfig::default(), &mut stats)
                .unwrap();
        assert_eq!(result.score, LOSS_SCORE);
        assert_eq!(result.best_move, candidates[0]);
    }

    #[test]
    fn test_counts_nodes() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let candidates = generate_candidates(&board, 2);
        let mut stats = SearchStats::default();
        best_by_two_ply(&mut board, &candidates, Stone::White, &EngineConfig::default(), &mut stats);
        assert!(stats.nodes > candidates.len() as u64);
    }

    #[test]
    fn test_no_candidates() {
        let mut board = Board::new();
        let mut stats = SearchStats::default();
        assert!(
            best_by_two_ply(&mut board, &[], Stone::Black, &EngineConfig::default(), &mut stats)
                .is_none()
        );
    }
}
