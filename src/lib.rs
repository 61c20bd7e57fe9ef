//! Gomoku against a monkey
//!
//! A small move-selection engine for freestyle Gomoku plus a desktop GUI:
//! - 15x15 board by default, any size from the command line
//! - five or more in a row wins (overlines count)
//! - no captures, no forbidden moves, no swap openings
//!
//! # Architecture
//!
//! - [`board`]: Board representation and scoped trial placements
//! - [`rules`]: Win detection and move legality
//! - [`eval`]: Line scanning and the pattern score table
//! - [`search`]: Candidate generation, tactics, one- and two-ply ranking
//! - [`engine`]: Difficulty tiers and the move priority list
//! - [`game`]: Turn order, undo and game results
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Difficulty, Pos, Stone};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::new(Difficulty::Normal);
//!
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! if let Some(pos) = engine.get_move(&board, Stone::White) {
//!     board.place_stone(pos, Stone::White);
//!     println!("Monkey plays at {pos}");
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, TrialStone, BOARD_SIZE};
pub use config::{EngineConfig, RulesConfig};
pub use engine::{choose_move, AIEngine, Difficulty, MoveResult, SearchType};
pub use game::{GameOutcome, GameState, MoveError};
