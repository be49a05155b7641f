use crate::game_state::chess_types::Square;
use crate::moves::sliding_rays::slide;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    slide(square, &BISHOP_DIRECTIONS, occupancy)
}
