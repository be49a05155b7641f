//! Randomized opening layout.
//!
//! Kings go on the e-file of their back rows. The other 15 home squares of
//! each side receive an independently shuffled copy of [`HIDDEN_PIECE_POOL`].

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{HIDDEN_PIECE_POOL, KING_COLUMN};
use crate::game_state::chess_types::{Color, Piece, PieceType, Square};

/// Build a fresh opening board using `rng` for both shuffles.
pub fn generate_setup<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut board = Board::empty();
    for color in [Color::White, Color::Black] {
        let mut pool = HIDDEN_PIECE_POOL;
        pool.shuffle(rng);
        trace!("{} hidden deal: {:?}", color.name(), pool);

        let mut dealt = pool.into_iter();
        for row in [color.back_row(), color.pawn_row()] {
            for col in 0..8u8 {
                let Some(square) = Square::new(row, col) else {
                    continue;
                };
                let piece = if row == color.back_row() && col == KING_COLUMN {
                    Piece::hidden(PieceType::King, color)
                } else {
                    match dealt.next() {
                        Some(true_type) => Piece::hidden(true_type, color),
                        None => continue,
                    }
                };
                board.place(square, piece);
            }
        }
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted_types(board: &Board, color: Color) -> Vec<usize> {
        let mut types: Vec<usize> = board
            .pieces_of(color)
            .filter(|(_, piece)| piece.true_type() != PieceType::King)
            .map(|(_, piece)| piece.true_type().index())
            .collect();
        types.sort_unstable();
        types
    }

    #[test]
    fn every_home_square_is_filled_with_unmoved_pieces() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = generate_setup(&mut rng);

        for color in [Color::White, Color::Black] {
            for row in [color.back_row(), color.pawn_row()] {
                for col in 0..8 {
                    let square = Square::new(row, col).expect("home square");
                    let piece = board.piece_at(square).expect("home square is filled");
                    assert_eq!(piece.color(), color);
                    assert!(!piece.has_moved());
                }
            }
        }
        assert_eq!(board.occupancy().count_ones(), 32);
    }

    #[test]
    fn each_side_receives_the_full_pool() {
        let mut expected: Vec<usize> = HIDDEN_PIECE_POOL.iter().map(|t| t.index()).collect();
        expected.sort_unstable();

        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let board = generate_setup(&mut rng);
            assert_eq!(sorted_types(&board, Color::White), expected);
            assert_eq!(sorted_types(&board, Color::Black), expected);
        }
    }

    #[test]
    fn kings_are_fixed_on_the_e_file() {
        let mut rng = StdRng::seed_from_u64(99);
        let board = generate_setup(&mut rng);

        let white_king = Square::new(0, KING_COLUMN).expect("e1");
        let black_king = Square::new(7, KING_COLUMN).expect("e8");
        assert_eq!(
            board.piece_at(white_king),
            Some(Piece::hidden(PieceType::King, Color::White))
        );
        assert_eq!(
            board.piece_at(black_king),
            Some(Piece::hidden(PieceType::King, Color::Black))
        );
    }

    #[test]
    fn shuffles_differ_across_seeds() {
        let boards: Vec<Board> = (0..8u64)
            .map(|seed| generate_setup(&mut StdRng::seed_from_u64(seed)))
            .collect();
        assert!(boards.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
