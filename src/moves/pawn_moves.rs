//! Pawn capture tables and forward pushes.
//!
//! Captures are the only part of a pawn's movement that attacks, so they are
//! tabulated per color. Pushes depend on occupancy and are computed on demand.

use crate::game_state::chess_types::{Color, Square};

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square.index() as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square.index() as usize],
    }
}

/// Forward steps onto empty squares. The double step needs both squares clear.
pub fn pawn_pushes(color: Color, square: Square, occupancy: u64, may_double_step: bool) -> u64 {
    let Some(one) = square.offset(color.forward(), 0) else {
        return 0;
    };
    if occupancy & one.bit() != 0 {
        return 0;
    }

    let mut pushes = one.bit();
    if may_double_step {
        if let Some(two) = one.offset(color.forward(), 0) {
            if occupancy & two.bit() == 0 {
                pushes |= two.bit();
            }
        }
    }
    pushes
}

const fn generate_pawn_attacks(forward: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32 + forward;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;

        if row >= 0 && row <= 7 {
            if col > 0 {
                attacks |= 1u64 << (row as usize * 8 + col as usize - 1);
            }
            if col < 7 {
                attacks |= 1u64 << (row as usize * 8 + col as usize + 1);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}
