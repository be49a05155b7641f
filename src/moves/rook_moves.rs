use crate::game_state::chess_types::Square;
use crate::moves::sliding_rays::slide;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    slide(square, &ROOK_DIRECTIONS, occupancy)
}
