//! Move selection engine
//!
//! Every call runs the same priority list:
//!
//! 1. **Opening**: empty board, play the center
//! 2. **Immediate win**: a candidate that completes a run for the mover
//! 3. **Block**: a candidate where the opponent would complete a run
//! 4. **Difficulty tier**:
//!    - Easy: random pick among the best few one-ply moves
//!    - Normal: best one-ply move
//!    - Hard: two-ply minimax over candidate moves and replies
//!
//! The engine keeps no state between calls besides its configuration and
//! random source.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut engine = AIEngine::new(Difficulty::Hard);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.get_move_with_stats(&board, Stone::White).unwrap();
//! println!("Best move: {}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::eval::PatternScore;
use crate::search::{
    best_by_heuristic, best_by_two_ply, find_immediate_win, generate_candidates,
    pick_from_shortlist, top_k, SearchStats,
};

/// Strength tier of the computer opponent.
///
/// Only affects the final tier; wins and blocks are always taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse a tier name, falling back to `Normal` for anything unknown
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unrecognised difficulty name
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown difficulty '{name}' (expected easy, normal or hard)")]
pub struct UnknownDifficulty {
    pub name: String,
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(UnknownDifficulty { name: s.to_string() }),
        }
    }
}

/// Which rule produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Empty board, center cell
    Opening,
    /// Completes a winning run
    ImmediateWin,
    /// Occupies the opponent's winning cell
    Block,
    /// Random pick from the easy-tier shortlist
    Shortlist,
    /// Best one-ply evaluation
    Heuristic,
    /// Best worst case from the two-ply search
    Lookahead,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Evaluation backing the choice (0 for opening and blocks)
    pub score: i64,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Trial placements made
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn new(best_move: Pos, score: i64, search_type: SearchType, start: Instant, stats: SearchStats) -> Self {
        Self {
            best_move,
            score,
            search_type,
            time_ms: start.elapsed().as_millis() as u64,
            nodes: stats.nodes,
        }
    }
}

/// Choose a move for `color` on `board`.
///
/// The board is used as scratch space for trial placements and is identical
/// to its input state on return. Returns `None` only when the board is full.
///
/// # Panics
///
/// Panics if `color` is `Stone::Empty`.
pub fn choose_move<R: Rng + ?Sized>(
    board: &mut Board,
    color: Stone,
    difficulty: Difficulty,
    config: &EngineConfig,
    rng: &mut R,
) -> Option<MoveResult> {
    assert!(color != Stone::Empty, "choose_move needs a player color");
    let start = Instant::now();
    let mut stats = SearchStats::default();
    let win_length = config.rules.win_length;

    let mut candidates = generate_candidates(board, config.candidate_radius);
    if candidates.is_empty() {
        if board.is_board_empty() {
            return Some(MoveResult::new(board.center(), 0, SearchType::Opening, start, stats));
        }
        // A zero radius reaches no neighbours; consider every empty cell
        candidates = board.positions().filter(|&pos| board.is_empty(pos)).collect();
        if candidates.is_empty() {
            return None;
        }
    }

    stats.nodes += candidates.len() as u64;
    if let Some(pos) = find_immediate_win(board, &candidates, color, win_length) {
        return Some(MoveResult::new(pos, PatternScore::FIVE, SearchType::ImmediateWin, start, stats));
    }

    stats.nodes += candidates.len() as u64;
    if let Some(pos) = find_immediate_win(board, &candidates, color.opponent(), win_length) {
        return Some(MoveResult::new(pos, 0, SearchType::Block, start, stats));
    }

    let result = match difficulty {
        Difficulty::Easy => {
            let shortlist = top_k(board, &candidates, color, config.easy_top_k, &mut stats);
            let (pos, score) = pick_from_shortlist(&shortlist, rng)?;
            MoveResult::new(pos, score, SearchType::Shortlist, start, stats)
        }
        Difficulty::Normal => {
            let (pos, score) = best_by_heuristic(board, &candidates, color, &mut stats)?;
            MoveResult::new(pos, score, SearchType::Heuristic, start, stats)
        }
        Difficulty::Hard => {
            let found = best_by_two_ply(board, &candidates, color, config, &mut stats)?;
            let search_type = if found.immediate_win {
                SearchType::ImmediateWin
            } else {
                SearchType::Lookahead
            };
            MoveResult::new(found.best_move, found.score, search_type, start, stats)
        }
    };
    Some(result)
}

/// The computer opponent: configuration plus a random source for the easy tier.
///
/// # Example
///
/// ```
/// use gomoku::{AIEngine, Board, Difficulty, EngineConfig};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// // Seeded engine for reproducible easy-tier picks
/// let mut engine = AIEngine::with_rng(
///     EngineConfig::default(),
///     Difficulty::Easy,
///     StdRng::seed_from_u64(42),
/// );
/// let board = Board::new();
/// assert_eq!(engine.get_move(&board, gomoku::Stone::Black), Some(board.center()));
/// ```
pub struct AIEngine<R: Rng = StdRng> {
    config: EngineConfig,
    difficulty: Difficulty,
    rng: R,
}

impl AIEngine<StdRng> {
    /// Engine with default configuration and an entropy-seeded random source
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_config(EngineConfig::default(), difficulty)
    }

    #[must_use]
    pub fn with_config(config: EngineConfig, difficulty: Difficulty) -> Self {
        Self::with_rng(config, difficulty, StdRng::from_entropy())
    }
}

impl<R: Rng> AIEngine<R> {
    /// Engine with an injected random source
    #[must_use]
    pub fn with_rng(config: EngineConfig, difficulty: Difficulty, rng: R) -> Self {
        Self {
            config,
            difficulty,
            rng,
        }
    }

    /// Get the move for `color`, or `None` on a full board.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).map(|r| r.best_move)
    }

    /// Get the move for `color` together with search statistics.
    ///
    /// Works on a private copy, so `board` is never touched.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> Option<MoveResult> {
        let mut scratch = board.clone();
        let result = choose_move(&mut scratch, color, self.difficulty, &self.config, &mut self.rng);
        debug_assert_eq!(&scratch, board, "trial stones leaked");

        if let Some(r) = &result {
            debug!(
                difficulty = %self.difficulty,
                color = color.name(),
                row = r.best_move.row,
                col = r.best_move.col,
                search_type = ?r.search_type,
                score = r.score,
                nodes = r.nodes,
                time_ms = r.time_ms,
                "engine move"
            );
        } else {
            debug!(color = color.name(), "no move available");
        }
        result
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for AIEngine<StdRng> {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RulesConfig;

    fn seeded(difficulty: Difficulty) -> AIEngine<StdRng> {
        AIEngine::with_rng(EngineConfig::default(), difficulty, StdRng::seed_from_u64(1))
    }

    fn place_all(board: &mut Board, cells: &[(u8, u8)], color: Stone) {
        for &(r, c) in cells {
            board.place_stone(Pos::new(r, c), color);
        }
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        let err = "expert".parse::<Difficulty>().unwrap_err();
        assert_eq!(err.name, "expert");
        assert!(err.to_string().contains("expert"));
    }

    #[test]
    fn test_difficulty_lenient_parse() {
        assert_eq!(Difficulty::from_name_or_default("easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name_or_default("???"), Difficulty::Normal);
        assert_eq!(Difficulty::default(), Difficulty::Normal);
    }

    #[test]
    fn test_engine_empty_board() {
        for difficulty in Difficulty::ALL {
            let mut engine = seeded(difficulty);
            let result = engine.get_move_with_stats(&Board::new(), Stone::Black).unwrap();
            assert_eq!(result.best_move, Pos::new(7, 7));
            assert_eq!(result.search_type, SearchType::Opening);
        }
    }

    #[test]
    fn test_engine_empty_board_custom_size() {
        let config = EngineConfig::with_rules(RulesConfig {
            board_size: 9,
            win_length: 5,
        });
        let mut engine = AIEngine::with_rng(config, Difficulty::Normal, StdRng::seed_from_u64(3));
        assert_eq!(engine.get_move(&Board::with_size(9), Stone::White), Some(Pos::new(4, 4)));
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 4), (7, 5), (7, 6), (7, 7)], Stone::White);
        place_all(&mut board, &[(8, 4), (8, 5), (8, 6)], Stone::Black);

        for difficulty in Difficulty::ALL {
            let result = seeded(difficulty).get_move_with_stats(&board, Stone::White).unwrap();
            assert_eq!(result.search_type, SearchType::ImmediateWin);
            assert!(result.best_move == Pos::new(7, 3) || result.best_move == Pos::new(7, 8));
        }
    }

    #[test]
    fn test_win_preferred_over_block() {
        let mut board = Board::new();
        place_all(&mut board, &[(2, 2), (2, 3), (2, 4), (2, 5)], Stone::Black);
        place_all(&mut board, &[(10, 2), (10, 3), (10, 4), (10, 5)], Stone::White);

        let result = seeded(Difficulty::Normal).get_move_with_stats(&board, Stone::White).unwrap();
        assert_eq!(result.search_type, SearchType::ImmediateWin);
        assert_eq!(result.best_move.row, 10);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new();
        // Black four closed at one end: only (7, 8) stops it
        place_all(&mut board, &[(7, 4), (7, 5), (7, 6), (7, 7)], Stone::Black);
        place_all(&mut board, &[(7, 3), (9, 9)], Stone::White);

        for difficulty in Difficulty::ALL {
            let result = seeded(difficulty).get_move_with_stats(&board, Stone::White).unwrap();
            assert_eq!(result.search_type, SearchType::Block);
            assert_eq!(result.best_move, Pos::new(7, 8));
        }
    }

    #[test]
    fn test_engine_blocks_open_four() {
        let mut board = Board::new();
        place_all(&mut board, &[(5, 3), (5, 4), (5, 5), (5, 6)], Stone::Black);
        place_all(&mut board, &[(9, 9), (11, 2)], Stone::White);

        for difficulty in Difficulty::ALL {
            let result = seeded(difficulty).get_move_with_stats(&board, Stone::White).unwrap();
            assert_eq!(result.search_type, SearchType::Block);
            assert!(
                result.best_move == Pos::new(5, 2) || result.best_move == Pos::new(5, 7),
                "{difficulty} played {}",
                result.best_move
            );
        }
    }

    #[test]
    fn test_zero_radius_falls_back_to_empty_cells() {
        let config = EngineConfig {
            candidate_radius: 0,
            ..EngineConfig::default()
        };
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7)], Stone::Black);

        for difficulty in Difficulty::ALL {
            let mut engine = AIEngine::with_rng(config, difficulty, StdRng::seed_from_u64(9));
            let pos = engine.get_move(&board, Stone::White).expect("board has room");
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_normal_extends_open_two() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7), (7, 8)], Stone::White);
        place_all(&mut board, &[(3, 3)], Stone::Black);

        let result = seeded(Difficulty::Normal).get_move_with_stats(&board, Stone::White).unwrap();
        assert_eq!(result.search_type, SearchType::Heuristic);
        assert!(result.best_move == Pos::new(7, 6) || result.best_move == Pos::new(7, 9));
    }

    #[test]
    fn test_easy_uses_shortlist() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7)], Stone::Black);
        let result = seeded(Difficulty::Easy).get_move_with_stats(&board, Stone::White).unwrap();
        assert_eq!(result.search_type, SearchType::Shortlist);
        assert!(board.is_empty(result.best_move));
    }

    #[test]
    fn test_easy_is_reproducible_with_seed() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7), (6, 6)], Stone::Black);
        place_all(&mut board, &[(7, 8)], Stone::White);

        let a: Vec<_> = {
            let mut engine = seeded(Difficulty::Easy);
            (0..5).map(|_| engine.get_move(&board, Stone::White)).collect()
        };
        let b: Vec<_> = {
            let mut engine = seeded(Difficulty::Easy);
            (0..5).map(|_| engine.get_move(&board, Stone::White)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_hard_uses_lookahead() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7)], Stone::Black);
        let result = seeded(Difficulty::Hard).get_move_with_stats(&board, Stone::White).unwrap();
        assert_eq!(result.search_type, SearchType::Lookahead);
        assert!(result.nodes > 24);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::with_size(3);
        for (i, pos) in board.clone().positions().enumerate() {
            let stone = if i % 2 == 0 { Stone::Black } else { Stone::White };
            board.place_stone(pos, stone);
        }
        let config = EngineConfig::with_rules(RulesConfig {
            board_size: 3,
            win_length: 3,
        });
        let mut engine = AIEngine::with_rng(config, Difficulty::Hard, StdRng::seed_from_u64(0));
        assert_eq!(engine.get_move(&board, Stone::Black), None);
    }

    #[test]
    #[should_panic]
    fn test_empty_color_rejected() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        let _ = seeded(Difficulty::Normal).get_move(&board, Stone::Empty);
    }

    #[test]
    fn test_set_difficulty() {
        let mut engine = seeded(Difficulty::Easy);
        engine.set_difficulty(Difficulty::Hard);
        assert_eq!(engine.difficulty(), Difficulty::Hard);
        assert_eq!(engine.config().easy_top_k, 6);
    }
}
