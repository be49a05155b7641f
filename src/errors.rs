//! Rejection reasons returned by the game interface.
//!
//! Every variant except `InvalidCoordinate` is an ordinary outcome of
//! interactive play and leaves the game untouched. `InvalidCoordinate` means
//! the caller passed something that is not a square at all.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, GameStatus, Square};

pub type RevealResult<T> = Result<T, RevealChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealChessError {
    /// Coordinates outside the 8x8 board, or unparseable square text.
    ///
    /// Payload: the offending input as the caller gave it.
    InvalidCoordinate(String),

    /// The source square is empty or holds the other side's piece.
    EmptySquareOrWrongOwner(Square),

    /// The move was attempted for the color that is not on turn.
    NotYourTurn { expected: Color, attempted: Color },

    /// The game already ended with the given status.
    GameOver(GameStatus),

    /// The destination is not among the piece's king-safe moves.
    IllegalMove { from: Square, to: Square },
}

impl RevealChessError {
    /// True for malformed input, false for game-rule rejections.
    #[inline]
    pub fn is_caller_error(&self) -> bool {
        matches!(self, RevealChessError::InvalidCoordinate(_))
    }
}

impl fmt::Display for RevealChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevealChessError::InvalidCoordinate(input) => {
                write!(f, "invalid coordinate {input}")
            }
            RevealChessError::EmptySquareOrWrongOwner(square) => {
                write!(f, "no piece of yours on {square}")
            }
            RevealChessError::NotYourTurn {
                expected,
                attempted,
            } => write!(
                f,
                "not your turn: {} to move, {} attempted",
                expected.name(),
                attempted.name()
            ),
            RevealChessError::GameOver(status) => {
                write!(f, "game over ({})", status.name())
            }
            RevealChessError::IllegalMove { from, to } => {
                write!(f, "illegal move {from} -> {to}")
            }
        }
    }
}

impl Error for RevealChessError {}
