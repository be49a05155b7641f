use crate::game_state::chess_types::Square;

pub const KING_ATTACKS: [u64; 64] = generate_king_attacks();

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square.index() as usize]
}

const fn generate_king_attacks() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;
        let mut d_row = -1;

        while d_row <= 1 {
            let mut d_col = -1;
            while d_col <= 1 {
                if d_row != 0 || d_col != 0 {
                    attacks |= set_if_valid(row + d_row, col + d_col);
                }
                d_col += 1;
            }
            d_row += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

const fn set_if_valid(row: i32, col: i32) -> u64 {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }
    1u64 << (row as usize * 8 + col as usize)
}
