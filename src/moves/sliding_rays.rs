//! Ray tracing shared by the sliding pieces.

use crate::game_state::chess_types::Square;

/// Squares reached from `square` stepping by (`d_row`, `d_col`).
///
/// The ray stops at the board edge or on the first occupied square, which is
/// included so callers can decide whether it is a capture.
pub fn trace_ray(square: Square, d_row: i8, d_col: i8, occupancy: u64) -> u64 {
    let mut attacks = 0u64;
    let mut current = square;

    while let Some(next) = current.offset(d_row, d_col) {
        attacks |= next.bit();
        if occupancy & next.bit() != 0 {
            break;
        }
        current = next;
    }

    attacks
}

#[inline]
pub fn slide(square: Square, directions: &[(i8, i8)], occupancy: u64) -> u64 {
    directions
        .iter()
        .fold(0u64, |acc, &(d_row, d_col)| acc | trace_ray(square, d_row, d_col, occupancy))
}
