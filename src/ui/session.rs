//! Game session for the GUI: game state plus the background AI worker

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::engine::{AIEngine, Difficulty, MoveResult};
use crate::game::GameState;
use crate::{EngineConfig, Pos, Stone};

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Option<MoveResult>>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Everything the window needs between frames
pub struct Session {
    pub game: GameState,
    pub engine_config: EngineConfig,
    pub ai_state: AiState,
    pub last_ai_result: Option<MoveResult>,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Pos>,
    pub message: Option<String>,
}

impl Session {
    pub fn new(engine_config: EngineConfig, difficulty: Difficulty, human_color: Stone) -> Self {
        Self {
            game: GameState::new(engine_config.rules, difficulty, human_color),
            engine_config,
            ai_state: AiState::Idle,
            last_ai_result: None,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
        }
    }

    /// Start over, keeping the human's color
    pub fn new_game(&mut self, difficulty: Difficulty) {
        self.game.reset(difficulty);
        self.clear_transient();
    }

    /// Start over with a different human color
    pub fn new_game_as(&mut self, human_color: Stone, difficulty: Difficulty) {
        self.game = GameState::new(self.engine_config.rules, difficulty, human_color);
        self.clear_transient();
    }

    fn clear_transient(&mut self) {
        // Dropping the receiver discards any in-flight search
        self.ai_state = AiState::Idle;
        self.last_ai_result = None;
        self.move_timer = MoveTimer::default();
        self.suggested_move = None;
        self.message = None;
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place the human's stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), String> {
        if self.is_ai_thinking() {
            return Err("The monkey is thinking".to_string());
        }
        self.game
            .play_human(i32::from(pos.row), i32::from(pos.col))
            .map_err(|e| e.to_string())?;
        self.after_move();
        Ok(())
    }

    fn after_move(&mut self) {
        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();
        if !self.game.is_over() {
            self.move_timer.start();
        }
    }

    /// Start AI thinking on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.game.is_monkey_turn() || self.is_ai_thinking() {
            return;
        }

        let board = self.game.board().clone();
        let color = self.game.monkey_color();
        let config = self.engine_config;
        let difficulty = self.game.difficulty();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::with_config(config, difficulty);
            let result = engine.get_move_with_stats(&board, color);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the AI's move once the worker reports back
    pub fn check_ai_result(&mut self) {
        let received = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        let Some((result, elapsed)) = received else {
            return;
        };
        self.ai_state = AiState::Idle;
        self.move_timer.set_ai_time(elapsed);

        let Some(result) = result else {
            self.message = Some("The monkey could not find a move".to_string());
            return;
        };
        let pos = result.best_move;
        let monkey = self.game.monkey_color();
        match self.game.place(i32::from(pos.row), i32::from(pos.col), monkey) {
            Ok(_) => {
                debug!(row = pos.row, col = pos.col, "applied AI move");
                self.last_ai_result = Some(result);
                self.after_move();
            }
            Err(e) => {
                warn!(error = %e, "AI move rejected");
                self.message = Some(format!("AI move rejected: {e}"));
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Ask the engine what it would play in the human's place
    pub fn request_suggestion(&mut self) {
        if !self.game.is_human_turn() || self.is_ai_thinking() {
            return;
        }
        let mut engine = AIEngine::with_config(self.engine_config, Difficulty::Normal);
        self.suggested_move = engine.get_move(self.game.board(), self.game.human_color());
    }

    /// Undo the last move pair
    pub fn undo(&mut self) {
        if self.is_ai_thinking() {
            return;
        }
        if self.game.undo() > 0 {
            self.suggested_move = None;
            self.message = None;
            self.move_timer.start();
        }
    }
}
