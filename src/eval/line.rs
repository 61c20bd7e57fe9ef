//! Line scanning: run length and open ends along one axis

use crate::board::{Board, Pos, Stone};

/// A maximal run of one color along a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo {
    /// Stones in the run
    pub length: usize,
    /// Empty on-board cells bounding the run (0, 1 or 2)
    pub open_ends: u8,
}

/// Whether `pos` starts its run along `(dr, dc)`.
///
/// True when the cell behind `pos` is off the board or not `color`. Scoring
/// only from run starts counts each run exactly once per axis.
#[inline]
pub fn is_run_start(board: &Board, pos: Pos, color: Stone, dr: i32, dc: i32) -> bool {
    let (r, c) = pos.offset(dr, dc, -1);
    board.stone_at(r, c) != Some(color)
}

/// Measure the run of `color` that begins at `pos` and extends along `(dr, dc)`.
///
/// `pos` must hold `color`. The cell before `pos` and the first cell past the
/// run each add an open end when on the board and empty.
pub fn scan_line(board: &Board, pos: Pos, color: Stone, dr: i32, dc: i32) -> LineInfo {
    debug_assert_eq!(board.get(pos), color);

    let mut length = 0usize;
    let (mut r, mut c) = (i32::from(pos.row), i32::from(pos.col));
    while board.stone_at(r, c) == Some(color) {
        length += 1;
        r += dr;
        c += dc;
    }

    let mut open_ends = 0;
    let (br, bc) = pos.offset(dr, dc, -1);
    if board.stone_at(br, bc) == Some(Stone::Empty) {
        open_ends += 1;
    }
    if board.stone_at(r, c) == Some(Stone::Empty) {
        open_ends += 1;
    }

    LineInfo { length, open_ends }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_board(cols: &[u8], color: Stone) -> Board {
        let mut board = Board::new();
        for &c in cols {
            board.place_stone(Pos::new(7, c), color);
        }
        board
    }

    #[test]
    fn test_open_three() {
        let board = row_board(&[5, 6, 7], Stone::Black);
        let info = scan_line(&board, Pos::new(7, 5), Stone::Black, 0, 1);
        assert_eq!(info, LineInfo { length: 3, open_ends: 2 });
    }

    #[test]
    fn test_closed_by_opponent() {
        let mut board = row_board(&[5, 6], Stone::Black);
        board.place_stone(Pos::new(7, 4), Stone::White);
        let info = scan_line(&board, Pos::new(7, 5), Stone::Black, 0, 1);
        assert_eq!(info, LineInfo { length: 2, open_ends: 1 });
    }

    #[test]
    fn test_closed_by_edge() {
        let board = row_board(&[0, 1, 2, 3], Stone::White);
        let info = scan_line(&board, Pos::new(7, 0), Stone::White, 0, 1);
        assert_eq!(info, LineInfo { length: 4, open_ends: 1 });

        let board = row_board(&[13, 14], Stone::White);
        let info = scan_line(&board, Pos::new(7, 13), Stone::White, 0, 1);
        assert_eq!(info, LineInfo { length: 2, open_ends: 1 });
    }

    #[test]
    fn test_dead_run() {
        let mut board = row_board(&[5, 6, 7], Stone::Black);
        board.place_stone(Pos::new(7, 4), Stone::White);
        board.place_stone(Pos::new(7, 8), Stone::White);
        let info = scan_line(&board, Pos::new(7, 5), Stone::Black, 0, 1);
        assert_eq!(info, LineInfo { length: 3, open_ends: 0 });
    }

    #[test]
    fn test_lone_stone_per_axis() {
        let board = row_board(&[7], Stone::Black);
        for (dr, dc) in crate::board::DIRECTIONS {
            let info = scan_line(&board, Pos::new(7, 7), Stone::Black, dr, dc);
            assert_eq!(info, LineInfo { length: 1, open_ends: 2 });
        }
    }

    #[test]
    fn test_anti_diagonal_run() {
        let mut board = Board::new();
        for i in 0..3u8 {
            board.place_stone(Pos::new(2 + i, 10 - i), Stone::Black);
        }
        let start = Pos::new(2, 10);
        assert!(is_run_start(&board, start, Stone::Black, 1, -1));
        assert!(!is_run_start(&board, Pos::new(3, 9), Stone::Black, 1, -1));
        let info = scan_line(&board, start, Stone::Black, 1, -1);
        assert_eq!(info, LineInfo { length: 3, open_ends: 2 });
    }

    #[test]
    fn test_run_start_at_edge() {
        let board = row_board(&[0, 1], Stone::Black);
        assert!(is_run_start(&board, Pos::new(7, 0), Stone::Black, 0, 1));
        assert!(!is_run_start(&board, Pos::new(7, 1), Stone::Black, 0, 1));
    }
}
