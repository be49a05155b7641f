//! Canonical layout constants and the effective-type rule.
//!
//! An unmoved piece plays as whatever the standard starting position puts on
//! its square. Once it has moved, its own true type governs for good.

use crate::game_state::chess_types::{Piece, PieceType, Square};

/// Column of both kings on their back rows (the e-file).
pub const KING_COLUMN: u8 = 4;

/// True types dealt to the 15 non-king home squares of each color.
pub const HIDDEN_PIECE_POOL: [PieceType; 15] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Knight,
    PieceType::Pawn,
    PieceType::Pawn,
    PieceType::Pawn,
    PieceType::Pawn,
    PieceType::Pawn,
    PieceType::Pawn,
    PieceType::Pawn,
    PieceType::Pawn,
];

/// The piece type standard chess starts on `square`, for either color.
pub const fn starting_type(square: Square) -> Option<PieceType> {
    match square.row() {
        1 | 6 => Some(PieceType::Pawn),
        0 | 7 => Some(match square.col() {
            0 | 7 => PieceType::Rook,
            1 | 6 => PieceType::Knight,
            2 | 5 => PieceType::Bishop,
            3 => PieceType::Queen,
            _ => PieceType::King,
        }),
        _ => None,
    }
}

/// The type that governs `piece` standing on `square` right now.
#[inline]
pub fn effective_type(piece: &Piece, square: Square) -> PieceType {
    if piece.has_moved() {
        return piece.true_type();
    }
    // An unmoved piece off the home rows only exists on hand-built boards.
    starting_type(square).unwrap_or(piece.true_type())
}
