//! Pattern scores for Gomoku evaluation
//!
//! Values are keyed by run length and open ends. The gaps between tiers are
//! deliberately huge: an open four outweighs any number of threes.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row
    pub const FIVE: i64 = 1_000_000_000_000;
    /// Open four: _OOOO_
    pub const OPEN_FOUR: i64 = 1_000_000_000;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: i64 = 10_000_000;
    /// Open three: _OOO_
    pub const OPEN_THREE: i64 = 100_000;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i64 = 1_000;
    /// Open two: _OO_
    pub const OPEN_TWO: i64 = 200;
    /// Closed two: XOO_ or _OOX
    pub const CLOSED_TWO: i64 = 40;
    /// Lone stone with both sides free
    pub const OPEN_ONE: i64 = 8;
    /// Anything else, dead runs included
    pub const OTHER: i64 = 1;
}

/// Opponent patterns weigh this much more than our own
pub const DEFENSE_FACTOR: f64 = 1.15;

/// `DEFENSE_FACTOR` in hundredths, for exact integer weighting
const DEFENSE_PERCENT: i64 = 115;

/// Score assigned to a reply that wins outright for the opponent
pub const LOSS_SCORE: i64 = -1_000_000_000_000_000;

/// Value of a single run given its length and number of open ends (0..=2)
#[inline]
pub fn line_score(length: usize, open_ends: u8) -> i64 {
    match (length, open_ends) {
        (l, _) if l >= 5 => PatternScore::FIVE,
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        (1, 2) => PatternScore::OPEN_ONE,
        _ => PatternScore::OTHER,
    }
}

/// Apply the defensive weighting to an opponent total, rounded to nearest.
///
/// Halves round up. Totals are never negative.
#[inline]
pub fn weighted_threat(opponent_total: i64) -> i64 {
    debug_assert!(opponent_total >= 0);
    (opponent_total * DEFENSE_PERCENT + 50) / 100
}
