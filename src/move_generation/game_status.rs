//! Status classification for the side to move.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, GameStatus};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

pub fn evaluate_status(board: &Board, side_to_move: Color) -> GameStatus {
    let in_check = is_king_in_check(board, side_to_move);
    let has_move = has_any_legal_move(board, side_to_move);

    match (in_check, has_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Draw,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::InProgress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceType, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    fn kings(white: Square, black: Square) -> Board {
        let mut board = Board::empty();
        board.place(white, Piece::revealed(PieceType::King, Color::White));
        board.place(black, Piece::revealed(PieceType::King, Color::Black));
        board
    }

    #[test]
    fn back_rank_rook_mate() {
        let mut board = kings(sq(5, 1), sq(7, 0));
        board.place(sq(7, 7), Piece::revealed(PieceType::Rook, Color::White));
        assert_eq!(evaluate_status(&board, Color::Black), GameStatus::Checkmate);
    }

    #[test]
    fn cornered_king_without_check_is_a_draw() {
        let mut board = kings(sq(0, 0), sq(7, 0));
        board.place(sq(6, 2), Piece::revealed(PieceType::Queen, Color::White));
        assert_eq!(evaluate_status(&board, Color::Black), GameStatus::Draw);
    }

    #[test]
    fn check_with_an_escape() {
        let mut board = kings(sq(0, 0), sq(7, 4));
        board.place(sq(3, 4), Piece::revealed(PieceType::Rook, Color::White));
        assert_eq!(evaluate_status(&board, Color::Black), GameStatus::Check);
    }

    #[test]
    fn quiet_position_is_in_progress() {
        let board = kings(sq(0, 0), sq(7, 7));
        assert_eq!(evaluate_status(&board, Color::White), GameStatus::InProgress);
        assert_eq!(evaluate_status(&board, Color::Black), GameStatus::InProgress);
    }
}
