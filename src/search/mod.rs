//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate generation around existing stones
//! - Forced win / forced block detection
//! - One-ply heuristic ranking (normal and easy tiers)
//! - Two-ply minimax lookahead (hard tier)

pub mod candidates;
pub mod lookahead;
pub mod ranking;
pub mod tactics;

pub use candidates::generate_candidates;
pub use lookahead::{best_by_two_ply, LookaheadResult};
pub use ranking::{best_by_heuristic, pick_from_shortlist, score_candidates, top_k};
pub use tactics::find_immediate_win;

/// Counters collected during one move selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited (trial placements)
    pub nodes: u64,
}
