//! One-ply candidate ranking for the normal and easy tiers

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Pos, Stone, TrialStone};
use crate::eval::evaluate;

use super::SearchStats;

/// Evaluate each candidate for `color` after playing it, in candidate order.
pub fn score_candidates(
    board: &mut Board,
    candidates: &[Pos],
    color: Stone,
    stats: &mut SearchStats,
) -> Vec<(Pos, i64)> {
    candidates
        .iter()
        .map(|&pos| {
            let trial = TrialStone::place(board, pos, color);
            stats.nodes += 1;
            (pos, evaluate(&trial, color))
        })
        .collect()
}

/// Highest-scoring candidate; the earliest one wins ties.
pub fn best_by_heuristic(
    board: &mut Board,
    candidates: &[Pos],
    color: Stone,
    stats: &mut SearchStats,
) -> Option<(Pos, i64)> {
    let mut best: Option<(Pos, i64)> = None;
    for (pos, score) in score_candidates(board, candidates, color, stats) {
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((pos, score));
        }
    }
    best
}

/// The `k` best candidates by score, best first.
///
/// At least one entry is kept whenever there is a candidate. Equal scores keep
/// candidate order.
pub fn top_k(
    board: &mut Board,
    candidates: &[Pos],
    color: Stone,
    k: usize,
    stats: &mut SearchStats,
) -> Vec<(Pos, i64)> {
    let mut scored = score_candidates(board, candidates, color, stats);
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(k.max(1));
    scored
}

/// Uniform pick from a shortlist
pub fn pick_from_shortlist<R: Rng + ?Sized>(
    shortlist: &[(Pos, i64)],
    rng: &mut R,
) -> Option<(Pos, i64)> {
    shortlist.choose(rng).copied()
}
