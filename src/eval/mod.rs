//! Position evaluation
//!
//! - [`line`]: run length and open-end scanning
//! - [`patterns`]: score table keyed by run shape
//! - [`heuristic`]: whole-board evaluation

pub mod heuristic;
pub mod line;
pub mod patterns;

pub use heuristic::{evaluate, pattern_total};
pub use line::{is_run_start, scan_line, LineInfo};
pub use patterns::{line_score, PatternScore, DEFENSE_FACTOR, LOSS_SCORE};
