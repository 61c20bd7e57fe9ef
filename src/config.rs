//! Engine and rule configuration

use crate::board::BOARD_SIZE;

/// Default number of stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Default Chebyshev radius around stones for candidate moves
pub const CANDIDATE_RADIUS: usize = 2;

/// Default shortlist size for the easy tier
pub const EASY_TOP_K: usize = 6;

/// Board geometry and win condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    pub board_size: usize,
    pub win_length: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            win_length: WIN_LENGTH,
        }
    }
}

/// Tunables for move selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub rules: RulesConfig,
    /// Empty cells within this distance of a stone are candidates
    pub candidate_radius: usize,
    /// How many top-scored moves the easy tier picks from
    pub easy_top_k: usize,
}

impl EngineConfig {
    pub fn with_rules(rules: RulesConfig) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rules: RulesConfig::default(),
            candidate_radius: CANDIDATE_RADIUS,
            easy_top_k: EASY_TOP_K,
        }
    }
}
