//! King-safe move filtering.
//!
//! Each pseudo-legal candidate is played on a copied board and kept only if
//! the mover's king is not attacked afterwards.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{squares_in, Color, Square};
use crate::move_generation::legal_move_apply::simulate_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::pseudo_legal_moves::pseudo_legal_moves;

pub fn legal_moves(board: &Board, from: Square, as_color: Color) -> u64 {
    squares_in(pseudo_legal_moves(board, from, as_color))
        .filter(|&to| !is_king_in_check(&simulate_move(board, from, to), as_color))
        .fold(0u64, |acc, to| acc | to.bit())
}

/// Legal destinations from `from`, in ascending square order.
pub fn legal_targets(board: &Board, from: Square, as_color: Color) -> Vec<Square> {
    squares_in(legal_moves(board, from, as_color)).collect()
}

pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| legal_moves(board, from, color) != 0)
}

/// Every legal `(from, to)` pair for `color`.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<(Square, Square)> {
    board
        .pieces_of(color)
        .flat_map(|(from, _)| squares_in(legal_moves(board, from, color)).map(move |to| (from, to)))
        .collect()
}
