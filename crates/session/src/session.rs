//! Human-versus-bot game session

use capture_engine::CaptureEngine;
use chess_core::{Board, BotMove, Engine, Player, Square};
use tracing::{debug, info, warn};

use crate::config::SessionConfig;
use crate::error::SessionResult;
use crate::history::{GameHistory, MoveRecord};

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;

/// Result of a human move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Whether the board accepted the human move
    pub applied: bool,
    /// The bot's answer, when it moved straight after
    pub reply: Option<BotMove>,
}

impl TurnOutcome {
    fn ignored() -> Self {
        Self {
            applied: false,
            reply: None,
        }
    }
}

/// Owns the board for one game and lets the bot answer human moves.
///
/// A UI re-reads [`GameSession::board`] after every call.
pub struct GameSession {
    board: Board,
    engine: Box<dyn Engine>,
    config: SessionConfig,
    history: GameHistory,
}

impl GameSession {
    /// Session at the starting position with a [`CaptureEngine`] opponent
    pub fn new(config: SessionConfig) -> Self {
        let engine = match config.seed {
            Some(seed) => CaptureEngine::with_seed(seed),
            None => CaptureEngine::new(),
        };
        Self::with_engine(Board::at_starting_position(), Box::new(engine), config)
    }

    pub fn with_engine(board: Board, engine: Box<dyn Engine>, config: SessionConfig) -> Self {
        info!(
            engine = engine.name(),
            bot = %config.bot_player,
            seed = ?config.seed,
            "game session started"
        );
        Self {
            board,
            engine,
            config,
            history: GameHistory::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    pub fn is_bot_turn(&self) -> bool {
        self.board.current_player() == self.config.bot_player
    }

    /// Play a human move, then let the bot reply if auto reply is on.
    ///
    /// Moves on the bot's turn, out of turn or from an empty square are
    /// ignored. The bot does not reply when it has nothing to move.
    pub fn play(&mut self, from: Square, to: Square) -> SessionResult<TurnOutcome> {
        if self.is_bot_turn() {
            debug!(%from, %to, "ignoring human move on the bot's turn");
            return Ok(TurnOutcome::ignored());
        }

        let player = self.board.current_player();
        if !self.board.move_piece(from, to) {
            return Ok(TurnOutcome::ignored());
        }
        self.history.push(MoveRecord {
            player,
            from,
            to,
            by_bot: false,
        });

        let reply = if self.config.auto_reply && self.is_bot_turn() {
            self.reply_if_possible()?
        } else {
            None
        };
        Ok(TurnOutcome {
            applied: true,
            reply,
        })
    }

    fn reply_if_possible(&mut self) -> SessionResult<Option<BotMove>> {
        let bot = self.config.bot_player;
        if self.board.all_available_moves(bot).is_empty() {
            warn!(%bot, "bot has no available moves; not replying");
            return Ok(None);
        }
        self.bot_move().map(Some)
    }

    /// Let the engine move for the side to move, whichever side that is.
    pub fn bot_move(&mut self) -> SessionResult<BotMove> {
        let player = self.board.current_player();
        let mv = self.engine.play(&mut self.board)?;
        self.history.push(MoveRecord {
            player,
            from: mv.from,
            to: mv.to,
            by_bot: true,
        });
        Ok(mv)
    }

    /// Reset to the starting position and clear history
    pub fn new_game(&mut self) {
        self.board = Board::at_starting_position();
        self.history.clear();
        self.engine.new_game();
    }

    /// Human side of this session
    pub fn human_player(&self) -> Player {
        self.config.human_player()
    }
}
