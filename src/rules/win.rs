//! Win condition checking
//!
//! A move wins when the run through the placed stone, counted in both
//! directions along any axis, reaches the winning length. Longer runs win too.

use crate::board::{Board, Pos, Stone, DIRECTIONS};

/// Count consecutive `color` stones starting one step from `pos` along `(dr, dc)`.
///
/// The cell at `pos` itself is not counted.
#[inline]
pub fn count_direction(board: &Board, pos: Pos, color: Stone, dr: i32, dc: i32) -> usize {
    let mut count = 0;
    let mut step = 1;
    loop {
        let (r, c) = pos.offset(dr, dc, step);
        if board.stone_at(r, c) != Some(color) {
            return count;
        }
        count += 1;
        step += 1;
    }
}

/// Check whether the stone just played at `pos` completes a winning run.
///
/// Only the four axes through `pos` are examined; no allocation.
#[inline]
pub fn is_winning_move(board: &Board, pos: Pos, color: Stone, win_length: usize) -> bool {
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + count_direction(board, pos, color, dr, dc) + count_direction(board, pos, color, -dr, -dc)
            >= win_length
    })
}

/// Cells of the winning run through `pos`, ordered along the axis.
///
/// Returns `None` when `pos` is not part of a run of at least `win_length`.
pub fn winning_line(board: &Board, pos: Pos, color: Stone, win_length: usize) -> Option<Vec<Pos>> {
    if color == Stone::Empty || board.get(pos) != color {
        return None;
    }
    for &(dr, dc) in &DIRECTIONS {
        let back = count_direction(board, pos, color, -dr, -dc) as i32;
        let forward = count_direction(board, pos, color, dr, dc) as i32;
        if (back + forward + 1) as usize >= win_length {
            let line = (-back..=forward)
                .filter_map(|step| {
                    let (r, c) = pos.offset(dr, dc, step);
                    board.pos_at(r, c)
                })
                .collect();
            return Some(line);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(u8, u8)], color: Stone) -> Board {
        let mut board = Board::new();
        for &(r, c) in stones {
            board.place_stone(Pos::new(r, c), color);
        }
        board
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let board = board_with(&[(7, 0), (7, 1), (7, 2), (7, 3), (7, 4)], Stone::Black);
        assert!(is_winning_move(&board, Pos::new(7, 2), Stone::Black, 5));
        assert!(is_winning_move(&board, Pos::new(7, 4), Stone::Black, 5));
        assert!(!is_winning_move(&board, Pos::new(7, 2), Stone::White, 5));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let board = board_with(&[(0, 9), (1, 9), (2, 9), (3, 9), (4, 9)], Stone::White);
        assert!(is_winning_move(&board, Pos::new(0, 9), Stone::White, 5));
    }

    #[test]
    fn test_five_in_row_diagonals() {
        let se = board_with(&[(2, 2), (3, 3), (4, 4), (5, 5), (6, 6)], Stone::Black);
        assert!(is_winning_move(&se, Pos::new(4, 4), Stone::Black, 5));

        let sw = board_with(&[(4, 8), (5, 7), (6, 6), (7, 5), (8, 4)], Stone::Black);
        assert!(is_winning_move(&sw, Pos::new(8, 4), Stone::Black, 5));
    }

    #[test]
    fn test_overline_wins() {
        let board = board_with(&[(3, 3), (3, 4), (3, 5), (3, 6), (3, 7), (3, 8)], Stone::Black);
        assert!(is_winning_move(&board, Pos::new(3, 5), Stone::Black, 5));
    }

    #[test]
    fn test_four_not_win() {
        let board = board_with(&[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::Black);
        assert!(!is_winning_move(&board, Pos::new(7, 6), Stone::Black, 5));
    }

    #[test]
    fn test_four_with_gap_not_win() {
        let board = board_with(&[(7, 3), (7, 4), (7, 6), (7, 7)], Stone::Black);
        assert!(!is_winning_move(&board, Pos::new(7, 4), Stone::Black, 5));
        assert!(!is_winning_move(&board, Pos::new(7, 7), Stone::Black, 5));
    }

    #[test]
    fn test_off_axis_not_win() {
        // Knight-step scatter never forms a line
        let board = board_with(&[(5, 5), (6, 7), (7, 9), (8, 11), (9, 13)], Stone::Black);
        for &(r, c) in &[(5, 5), (6, 7), (7, 9), (8, 11), (9, 13)] {
            assert!(!is_winning_move(&board, Pos::new(r, c), Stone::Black, 5));
        }
    }

    #[test]
    fn test_blocked_by_opponent() {
        let mut board = board_with(&[(7, 3), (7, 4), (7, 6), (7, 7)], Stone::Black);
        board.place_stone(Pos::new(7, 5), Stone::White);
        assert!(!is_winning_move(&board, Pos::new(7, 4), Stone::Black, 5));
    }

    #[test]
    fn test_five_at_board_edge_and_corner() {
        let edge = board_with(&[(14, 0), (14, 1), (14, 2), (14, 3), (14, 4)], Stone::White);
        assert!(is_winning_move(&edge, Pos::new(14, 0), Stone::White, 5));

        let corner = board_with(&[(10, 10), (11, 11), (12, 12), (13, 13), (14, 14)], Stone::White);
        assert!(is_winning_move(&corner, Pos::new(14, 14), Stone::White, 5));
    }

    #[test]
    fn test_custom_win_length() {
        let board = board_with(&[(0, 0), (0, 1), (0, 2)], Stone::Black);
        assert!(is_winning_move(&board, Pos::new(0, 1), Stone::Black, 3));
        assert!(!is_winning_move(&board, Pos::new(0, 1), Stone::Black, 4));
    }

    #[test]
    fn test_empty_color_never_wins() {
        let board = Board::new();
        assert!(!is_winning_move(&board, Pos::new(7, 7), Stone::Empty, 5));
    }

    #[test]
    fn test_count_direction_excludes_origin() {
        let board = board_with(&[(7, 7), (7, 8), (7, 9)], Stone::Black);
        assert_eq!(count_direction(&board, Pos::new(7, 7), Stone::Black, 0, 1), 2);
        assert_eq!(count_direction(&board, Pos::new(7, 7), Stone::Black, 0, -1), 0);
    }

    #[test]
    fn test_winning_line_cells() {
        let board = board_with(&[(4, 8), (5, 7), (6, 6), (7, 5), (8, 4)], Stone::Black);
        let line = winning_line(&board, Pos::new(6, 6), Stone::Black, 5).unwrap();
        assert_eq!(
            line,
            vec![
                Pos::new(4, 8),
                Pos::new(5, 7),
                Pos::new(6, 6),
                Pos::new(7, 5),
                Pos::new(8, 4)
            ]
        );
        assert!(winning_line(&board, Pos::new(0, 0), Stone::Black, 5).is_none());
    }
}
