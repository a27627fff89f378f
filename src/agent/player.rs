//! Player trait and associated types for chess game agents.
//!
//! A player is anything that can be asked for a move in a given position: the
//! search-backed `AiPlayer` here, or a front end of some other kind. The trait
//! does not define a constructor; each implementation takes whatever it needs.
//!
//! # Synchronous Design
//!
//! `get_move()` is blocking. The game loop simply calls it and waits, which is
//! all a turn-based game needs.

use crate::game_repr::{Color, GameState, GameStatus, Move};

/// Result of a completed chess game.
///
/// Passed to players via `game_ended()` once the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// White player won the game (Black was checkmated)
    WhiteWins,
    /// Black player won the game (White was checkmated)
    BlackWins,
    /// Game ended in a draw (50-move rule, insufficient material, ply limit)
    Draw,
    /// Player to move has no legal moves but is not in check
    Stalemate,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }

    /// The result a finished status stands for, `None` while the game is on
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Checkmate { winner } => Some(Self::from_winner(winner)),
            GameStatus::Stalemate => Some(GameResult::Stalemate),
            GameStatus::Draw(_) => Some(GameResult::Draw),
        }
    }
}

/// Trait for entities that can provide chess moves.
///
/// Only `get_move()` must be implemented; the notifications default to doing
/// nothing.
pub trait Player {
    /// Request the next move for the side to move in `state`.
    ///
    /// # Return Value
    ///
    /// - `Some(Move)`: the chosen move, expected to be legal in `state`
    /// - `None`: the player cannot or will not move (no legal moves, resignation)
    ///
    /// The caller still validates and applies the move.
    fn get_move(&mut self, state: &GameState) -> Option<Move>;

    /// Notify this player that the opponent made a move.
    fn opponent_moved(&mut self, _mv: Move) {
        // Default: do nothing
    }

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Get the display name of this player, used in logs.
    fn name(&self) -> &str {
        "Player"
    }
}
