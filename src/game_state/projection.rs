//! Observer-safe view of a game.
//!
//! Pieces are reported with their effective type. An unmoved non-king piece
//! is flagged `hidden` and its true type never leaves this module.

use serde::Serialize;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::effective_type;
use crate::game_state::chess_types::{Color, GameStatus, PieceType, Square};
use crate::game_state::game_state::Game;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceView {
    pub row: u8,
    pub col: u8,
    #[serde(rename = "type")]
    pub piece_type: PieceType,
    pub color: Color,
    pub hidden: bool,
}

impl PieceView {
    #[inline]
    pub fn square(&self) -> Option<Square> {
        Square::new(self.row, self.col)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub pieces: Vec<PieceView>,
    pub turn: Color,
    pub status: GameStatus,
}

impl Projection {
    pub fn piece_at(&self, square: Square) -> Option<&PieceView> {
        self.pieces
            .iter()
            .find(|view| view.row == square.row() && view.col == square.col())
    }
}

/// The public view of whatever stands on `square`.
pub fn project_square(board: &Board, square: Square) -> Option<PieceView> {
    let piece = board.piece_at(square)?;
    let piece_type = effective_type(&piece, square);
    Some(PieceView {
        row: square.row(),
        col: square.col(),
        piece_type,
        color: piece.color(),
        hidden: !piece.has_moved() && piece_type != PieceType::King,
    })
}

pub fn project(game: &Game) -> Projection {
    Projection {
        pieces: Square::all()
            .filter_map(|square| project_square(&game.board, square))
            .collect(),
        turn: game.turn,
        status: game.status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn opening_projection_looks_like_standard_chess() {
        let game = Game::new_with_rng(&mut StdRng::seed_from_u64(11));
        let view = project(&game);

        assert_eq!(view.pieces.len(), 32);
        assert_eq!(view.turn, Color::White);
        assert_eq!(view.status, GameStatus::InProgress);

        let d1 = view.piece_at(sq(0, 3)).expect("d1 is occupied");
        assert_eq!(d1.piece_type, PieceType::Queen);
        assert!(d1.hidden);

        let e8 = view.piece_at(sq(7, 4)).expect("e8 is occupied");
        assert_eq!(e8.piece_type, PieceType::King);
        assert_eq!(e8.color, Color::Black);
        assert!(!e8.hidden);
    }

    #[test]
    fn hidden_flag_clears_on_reveal() {
        let mut board = Board::empty();
        board.place(sq(1, 1), Piece::hidden(PieceType::Rook, Color::White));
        board.place(sq(4, 4), Piece::revealed(PieceType::Rook, Color::White));

        let hidden = project_square(&board, sq(1, 1)).expect("occupied");
        assert_eq!(hidden.piece_type, PieceType::Pawn);
        assert!(hidden.hidden);

        let shown = project_square(&board, sq(4, 4)).expect("occupied");
        assert_eq!(shown.piece_type, PieceType::Rook);
        assert!(!shown.hidden);
        assert_eq!(project_square(&board, sq(5, 5)), None);
    }

    #[test]
    fn projection_serializes_with_wire_names() {
        let mut board = Board::empty();
        board.place(sq(0, 4), Piece::hidden(PieceType::King, Color::White));
        board.place(sq(7, 4), Piece::hidden(PieceType::King, Color::Black));
        let game = Game::from_board(board, Color::White);

        let json = serde_json::to_string(&project(&game)).expect("projection serializes");
        assert_eq!(
            json,
            concat!(
                r#"{"pieces":[{"row":0,"col":4,"type":"KING","color":"WHITE","hidden":false},"#,
                r#"{"row":7,"col":4,"type":"KING","color":"BLACK","hidden":false}],"#,
                r#""turn":"WHITE","status":"IN_PROGRESS"}"#
            )
        );
    }
}
