//! The owned game record: board, side to move, and status.
//!
//! A `Game` is only changed by [`crate::game_interface::try_apply_move`],
//! which swaps in a fully computed successor. Callers that share one game
//! between threads must serialize access themselves.

use log::info;
use rand::Rng;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameStatus};
use crate::game_state::setup::generate_setup;
use crate::move_generation::game_status::evaluate_status;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) status: GameStatus,
}

impl Game {
    /// A randomized opening using the thread-local RNG.
    pub fn new() -> Self {
        Self::new_with_rng(&mut rand::rng())
    }

    /// A randomized opening drawn from `rng`, for reproducible games.
    pub fn new_with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let game = Self {
            board: generate_setup(rng),
            turn: Color::White,
            status: GameStatus::InProgress,
        };
        info!("new game created, {} to move", game.turn.name());
        game
    }

    /// A game from an arbitrary position with `turn` to move.
    ///
    /// The status is evaluated immediately, so the position may already be
    /// in check or finished.
    pub fn from_board(board: Board, turn: Color) -> Self {
        let status = evaluate_status(&board, turn);
        Self {
            board,
            turn,
            status,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
