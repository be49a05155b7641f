//! The four operations a room or transport layer calls.
//!
//! Coordinates arriving from outside are validated here, before any board
//! access. Rejections are returned as [`RevealChessError`] and leave the game
//! exactly as it was.

use log::{debug, info};

use crate::errors::{RevealChessError, RevealResult};
use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::Game;
use crate::game_state::projection::{project, Projection};
use crate::move_generation::legal_move_apply::{apply_legal_move, MoveOutcome};
use crate::move_generation::legal_move_generator::{legal_moves, legal_targets};

pub fn new_game() -> Game {
    Game::new()
}

/// Legal destinations for the piece on (`row`, `col`).
///
/// Empty when the square is empty, the piece is not on turn, or it has no
/// legal moves.
pub fn query_moves(game: &Game, row: i32, col: i32) -> RevealResult<Vec<Square>> {
    let square = Square::try_from_coords(row, col)?;
    Ok(moves_from(game, square))
}

pub fn moves_from(game: &Game, square: Square) -> Vec<Square> {
    legal_targets(&game.board, square, game.turn)
}

/// Validate and apply a move given as raw coordinates.
pub fn apply_move(
    game: &mut Game,
    from: (i32, i32),
    to: (i32, i32),
    as_color: Color,
) -> RevealResult<MoveOutcome> {
    let from = Square::try_from_coords(from.0, from.1)?;
    let to = Square::try_from_coords(to.0, to.1)?;
    try_apply_move(game, from, to, as_color)
}

/// Validate and apply a move between squares.
///
/// Checks run in order: game still running, `as_color` on turn, source piece
/// owned by `as_color`, destination legal.
pub fn try_apply_move(
    game: &mut Game,
    from: Square,
    to: Square,
    as_color: Color,
) -> RevealResult<MoveOutcome> {
    if let Err(reason) = validate_move(game, from, to, as_color) {
        debug!("rejected {from}->{to} for {}: {reason}", as_color.name());
        return Err(reason);
    }

    let (next, outcome) = apply_legal_move(game, from, to);
    *game = next;

    if let Some(true_type) = outcome.revealed {
        debug!("{from}->{to} revealed {}", true_type.name());
    }
    if game.status.is_terminal() {
        info!(
            "game finished with {} after {from}->{to}",
            game.status.name()
        );
    }
    Ok(outcome)
}

fn validate_move(game: &Game, from: Square, to: Square, as_color: Color) -> RevealResult<()> {
    if game.status.is_terminal() {
        return Err(RevealChessError::GameOver(game.status));
    }
    if as_color != game.turn {
        return Err(RevealChessError::NotYourTurn {
            expected: game.turn,
            attempted: as_color,
        });
    }
    match game.board.piece_at(from) {
        Some(piece) if piece.color() == as_color => {}
        _ => return Err(RevealChessError::EmptySquareOrWrongOwner(from)),
    }
    if legal_moves(&game.board, from, as_color) & to.bit() == 0 {
        return Err(RevealChessError::IllegalMove { from, to });
    }
    Ok(())
}

pub fn view_state(game: &Game) -> Projection {
    project(game)
}
