//! Scoped hypothetical placement
//!
//! Search code tries a stone, inspects the resulting position and must put the
//! board back exactly as it was. `TrialStone` owns that discipline: the stone is
//! placed on construction and removed when the guard drops, on every exit path
//! including early returns. Guards nest through `DerefMut`, so a reply can be
//! tried on top of a tried move and both are undone innermost-first.

use std::ops::{Deref, DerefMut};

use super::{Board, Pos, Stone};

/// A stone placed for the lifetime of the guard
pub struct TrialStone<'a> {
    board: &'a mut Board,
    pos: Pos,
}

impl<'a> TrialStone<'a> {
    /// Place `stone` at `pos`, which must be empty
    pub fn place(board: &'a mut Board, pos: Pos, stone: Stone) -> Self {
        debug_assert!(board.is_empty(pos), "trial stone on occupied cell {pos}");
        debug_assert!(stone != Stone::Empty);
        board.place_stone(pos, stone);
        Self { board, pos }
    }

    /// Position of the trial stone
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for TrialStone<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialStone<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialStone<'_> {
    fn drop(&mut self) {
        self.board.remove_stone(self.pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_stone_restored_on_drop() {
        let mut board = Board::new();
        let before = board.clone();
        {
            let trial = TrialStone::place(&mut board, Pos::new(7, 7), Stone::Black);
            assert_eq!(trial.get(Pos::new(7, 7)), Stone::Black);
            assert_eq!(trial.stone_count(), 1);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_nested_trials_restore_both() {
        let mut board = Board::new();
        board.place_stone(Pos::new(0, 0), Stone::White);
        let before = board.clone();
        {
            let mut outer = TrialStone::place(&mut board, Pos::new(3, 3), Stone::Black);
            {
                let inner = TrialStone::place(&mut outer, Pos::new(3, 4), Stone::White);
                assert_eq!(inner.stone_count(), 3);
            }
            assert_eq!(outer.stone_count(), 2);
            assert!(outer.is_empty(Pos::new(3, 4)));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_trial_restored_on_early_return() {
        fn probe(board: &mut Board) -> Option<Pos> {
            for col in 0..3 {
                let pos = Pos::new(1, col);
                let trial = TrialStone::place(board, pos, Stone::Black);
                if trial.stone_count() == 1 && col == 1 {
                    return Some(trial.pos());
                }
            }
            None
        }

        let mut board = Board::new();
        assert_eq!(probe(&mut board), Some(Pos::new(1, 1)));
        assert!(board.is_board_empty());
    }
}
