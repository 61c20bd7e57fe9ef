//! Game state: one human against the computer
//!
//! Owns the permanent board, whose turn it is and the result. The engine only
//! ever sees a borrowed board; every real placement goes through
//! [`GameState::place`], which checks legality and the win condition.

use derive_more::{Display, Error};
use rand::Rng;
use tracing::{info, warn};

use crate::board::{Board, Pos, Stone};
use crate::config::RulesConfig;
use crate::engine::{AIEngine, Difficulty, MoveResult};
use crate::rules::{is_winning_move, winning_line};

/// Reasons a placement is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("the game is already over")]
    GameOver,
    #[display("it is not that side's turn")]
    NotYourTurn,
    #[display("({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },
    #[display("({row}, {col}) is already occupied")]
    Occupied { row: u8, col: u8 },
}

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Win { winner: Stone, line: Vec<Pos> },
    Draw,
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Stone> {
        match self {
            GameOutcome::Win { winner, .. } => Some(*winner),
            GameOutcome::Draw => None,
        }
    }
}

/// Plain view of the state: cells as 0/1/2, winner 0 while undecided
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board_size: usize,
    pub board: Vec<Vec<u8>>,
    pub current: u8,
    pub winner: u8,
    pub last_move: Option<(u8, u8)>,
    pub difficulty: Difficulty,
}

/// Main game state
#[derive(Debug, Clone)]
pub struct GameState {
    rules: RulesConfig,
    board: Board,
    current: Stone,
    human_color: Stone,
    outcome: Option<GameOutcome>,
    last_move: Option<Pos>,
    history: Vec<(Pos, Stone)>,
    difficulty: Difficulty,
}

impl GameState {
    /// New game; Black moves first.
    ///
    /// # Panics
    ///
    /// Panics if `human_color` is `Stone::Empty`.
    pub fn new(rules: RulesConfig, difficulty: Difficulty, human_color: Stone) -> Self {
        assert!(human_color != Stone::Empty, "human needs a stone color");
        let state = Self {
            rules,
            board: Board::with_size(rules.board_size),
            current: Stone::Black,
            human_color,
            outcome: None,
            last_move: None,
            history: Vec::new(),
            difficulty,
        };
        info!(
            size = rules.board_size,
            win_length = rules.win_length,
            %difficulty,
            human = human_color.name(),
            "new game"
        );
        state
    }

    /// Clear the board and start over at the given difficulty
    pub fn reset(&mut self, difficulty: Difficulty) {
        self.board = Board::with_size(self.rules.board_size);
        self.current = Stone::Black;
        self.outcome = None;
        self.last_move = None;
        self.history.clear();
        self.difficulty = difficulty;
        info!(%difficulty, "game reset");
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn rules(&self) -> RulesConfig {
        self.rules
    }

    #[inline]
    pub fn current(&self) -> Stone {
        self.current
    }

    #[inline]
    pub fn human_color(&self) -> Stone {
        self.human_color
    }

    #[inline]
    pub fn monkey_color(&self) -> Stone {
        self.human_color.opponent()
    }

    #[inline]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn history(&self) -> &[(Pos, Stone)] {
        &self.history
    }

    #[inline]
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    #[inline]
    pub fn winner(&self) -> Option<Stone> {
        self.outcome.as_ref().and_then(GameOutcome::winner)
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn is_human_turn(&self) -> bool {
        !self.is_over() && self.current == self.human_color
    }

    #[inline]
    pub fn is_monkey_turn(&self) -> bool {
        !self.is_over() && self.current == self.monkey_color()
    }

    /// Cells of the winning run, if the game was won
    pub fn winning_line(&self) -> Option<&[Pos]> {
        match &self.outcome {
            Some(GameOutcome::Win { line, .. }) => Some(line),
            _ => None,
        }
    }

    /// Place `stone` at signed coordinates.
    ///
    /// On success records the move, then either ends the game (win or full
    /// board) or passes the turn. Returns the outcome if the game just ended.
    pub fn place(&mut self, row: i32, col: i32, stone: Stone) -> Result<Option<GameOutcome>, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if stone != self.current {
            return Err(MoveError::NotYourTurn);
        }
        let pos = self
            .board
            .pos_at(row, col)
            .ok_or(MoveError::OutOfBounds { row, col })?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied {
                row: pos.row,
                col: pos.col,
            });
        }

        self.board.place_stone(pos, stone);
        self.last_move = Some(pos);
        self.history.push((pos, stone));

        if is_winning_move(&self.board, pos, stone, self.rules.win_length) {
            let line = winning_line(&self.board, pos, stone, self.rules.win_length).unwrap_or_default();
            self.outcome = Some(GameOutcome::Win {
                winner: stone,
                line,
            });
            info!(winner = stone.name(), moves = self.history.len(), "game won");
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            info!(moves = self.history.len(), "game drawn");
        } else {
            self.current = stone.opponent();
        }
        Ok(self.outcome.clone())
    }

    /// Human move at signed coordinates
    pub fn play_human(&mut self, row: i32, col: i32) -> Result<Option<GameOutcome>, MoveError> {
        let human = self.human_color;
        self.place(row, col, human).inspect_err(|err| {
            warn!(row, col, error = %err, "rejected human move");
        })
    }

    /// Ask `engine` for the computer's move and play it.
    ///
    /// The engine's difficulty is synced to the game's before searching.
    pub fn play_monkey<R: Rng>(&mut self, engine: &mut AIEngine<R>) -> Result<MoveResult, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.is_monkey_turn() {
            return Err(MoveError::NotYourTurn);
        }
        engine.set_difficulty(self.difficulty);
        let monkey = self.monkey_color();
        // A non-finished game always has an empty cell
        let result = engine
            .get_move_with_stats(&self.board, monkey)
            .ok_or(MoveError::GameOver)?;
        let pos = result.best_move;
        self.place(i32::from(pos.row), i32::from(pos.col), monkey)?;
        Ok(result)
    }

    /// Take back the last human move together with the computer's reply.
    ///
    /// Removes a single move when only one exists or the last move was the
    /// human's. Returns the number of moves removed.
    pub fn undo(&mut self) -> usize {
        let Some(&(_, last_color)) = self.history.last() else {
            return 0;
        };
        let count = if last_color == self.monkey_color() && self.history.len() >= 2 {
            2
        } else {
            1
        };

        let keep = self.history.len() - count;
        let moves: Vec<_> = self.history.drain(..keep).collect();

        self.board = Board::with_size(self.rules.board_size);
        self.current = Stone::Black;
        self.outcome = None;
        self.last_move = None;
        self.history.clear();

        for (pos, color) in moves {
            self.board.place_stone(pos, color);
            self.history.push((pos, color));
            self.last_move = Some(pos);
            self.current = color.opponent();
        }
        count
    }

    /// Snapshot for display or serialization
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board_size: self.board.size(),
            board: self.board.to_codes(),
            current: self.current.code(),
            winner: self.winner().map_or(0, Stone::code),
            last_move: self.last_move.map(|p| (p.row, p.col)),
            difficulty: self.difficulty,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(RulesConfig::default(), Difficulty::default(), Stone::Black)
    }
}
