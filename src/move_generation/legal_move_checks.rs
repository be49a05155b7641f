//! Attack and check detection.
//!
//! Attacks are found by looking outward from the target square for each
//! attacker pattern, using effective types. The result matches scanning every
//! attacker's pseudo-legal destinations for an occupied target.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{squares_in, Color, PieceType, Square};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::rook_moves::rook_attacks;

/// The square of `color`'s effective king, if it has one.
#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    let kings = board.effective_pieces()[color.index()][PieceType::King.index()];
    squares_in(kings).next()
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let pieces = board.effective_pieces()[attacker_color.index()];
    let occupancy = board.occupancy();

    // A pawn of the attacker hits `square` from where a defender pawn on
    // `square` would hit.
    if pawn_attacks(attacker_color.opposite(), square) & pieces[PieceType::Pawn.index()] != 0 {
        return true;
    }

    if knight_attacks(square) & pieces[PieceType::Knight.index()] != 0 {
        return true;
    }

    if king_attacks(square) & pieces[PieceType::King.index()] != 0 {
        return true;
    }

    let bishops_queens = pieces[PieceType::Bishop.index()] | pieces[PieceType::Queen.index()];
    if bishop_attacks(square, occupancy) & bishops_queens != 0 {
        return true;
    }

    let rooks_queens = pieces[PieceType::Rook.index()] | pieces[PieceType::Queen.index()];
    rook_attacks(square, occupancy) & rooks_queens != 0
}

/// Every attacker of `square`, with the effective type it attacks as.
pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker_color: Color,
) -> Vec<(Square, PieceType)> {
    let pieces = board.effective_pieces()[attacker_color.index()];
    let occupancy = board.occupancy();
    let diagonal = bishop_attacks(square, occupancy);
    let straight = rook_attacks(square, occupancy);

    let reach = |kind: PieceType| -> u64 {
        let set = pieces[kind.index()];
        match kind {
            PieceType::Pawn => pawn_attacks(attacker_color.opposite(), square) & set,
            PieceType::Knight => knight_attacks(square) & set,
            PieceType::King => king_attacks(square) & set,
            PieceType::Bishop => diagonal & set,
            PieceType::Rook => straight & set,
            PieceType::Queen => (diagonal | straight) & set,
        }
    };

    let mut attackers: Vec<(Square, PieceType)> = PieceType::ALL
        .iter()
        .flat_map(|&kind| squares_in(reach(kind)).map(move |from| (from, kind)))
        .collect();
    attackers.sort_by_key(|(from, _)| *from);
    attackers
}
