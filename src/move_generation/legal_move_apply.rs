//! Move application on copies.
//!
//! Nothing here mutates a caller's game in place. Legality probes work on a
//! copied board, and accepted moves produce a complete successor `Game`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameStatus, PieceType, Square};
use crate::game_state::game_state::Game;
use crate::game_state::projection::{project_square, PieceView};
use crate::move_generation::game_status::evaluate_status;

/// What an accepted move did, safe to show to any observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub from: Square,
    pub to: Square,
    /// True type disclosed by this move; only set on a piece's first move.
    pub revealed: Option<PieceType>,
    /// The captured piece as it appeared before the capture.
    pub captured: Option<PieceView>,
    pub turn: Color,
    pub status: GameStatus,
}

/// The board after relocating `from` to `to`. The turn is not involved.
#[inline]
pub fn simulate_move(board: &Board, from: Square, to: Square) -> Board {
    let mut next = *board;
    next.relocate(from, to);
    next
}

/// Successor game for a move already known to be legal.
///
/// Moves the piece, flips the turn, and re-evaluates status for the new side
/// to move.
pub fn apply_legal_move(game: &Game, from: Square, to: Square) -> (Game, MoveOutcome) {
    let revealed = game
        .board
        .piece_at(from)
        .filter(|piece| !piece.has_moved())
        .map(|piece| piece.true_type());
    let captured = project_square(&game.board, to);

    let board = simulate_move(&game.board, from, to);
    let turn = game.turn.opposite();
    let status = evaluate_status(&board, turn);

    let outcome = MoveOutcome {
        from,
        to,
        revealed,
        captured,
        turn,
        status,
    };
    (
        Game {
            board,
            turn,
            status,
        },
        outcome,
    )
}
