//! Pseudo-legal destinations for a single piece.
//!
//! Movement dispatches on the piece's effective type. Whether the move leaves
//! the mover's own king attacked is not considered here.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::effective_type;
use crate::game_state::chess_types::{squares_in, Color, PieceType, Square};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::{pawn_attacks, pawn_pushes};
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Destination set of the piece on `from`, treated as belonging to `as_color`.
///
/// Empty when `from` is empty or holds a piece of the other color.
pub fn pseudo_legal_moves(board: &Board, from: Square, as_color: Color) -> u64 {
    let Some(piece) = board.piece_at(from) else {
        return 0;
    };
    if piece.color() != as_color {
        return 0;
    }

    let own = board.occupancy_by_color(as_color);
    let enemy = board.occupancy_by_color(as_color.opposite());
    let occupancy = own | enemy;

    match effective_type(&piece, from) {
        PieceType::Bishop => bishop_attacks(from, occupancy) & !own,
        PieceType::Rook => rook_attacks(from, occupancy) & !own,
        PieceType::Queen => queen_attacks(from, occupancy) & !own,
        PieceType::Knight => knight_attacks(from) & !own,
        PieceType::King => king_attacks(from) & !own,
        PieceType::Pawn => {
            let may_double_step = !piece.has_moved() && from.row() == as_color.pawn_row();
            (pawn_attacks(as_color, from) & enemy)
                | pawn_pushes(as_color, from, occupancy, may_double_step)
        }
    }
}

pub fn pseudo_legal_targets(board: &Board, from: Square, as_color: Color) -> Vec<Square> {
    squares_in(pseudo_legal_moves(board, from, as_color)).collect()
}
