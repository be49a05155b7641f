//! The 8x8 cell grid and the square sets derived from it.

use crate::game_state::chess_rules::effective_type;
use crate::game_state::chess_types::{Color, Piece, PieceType, Square};

/// Owned grid of optional pieces, indexed `[row][col]`.
///
/// The grid is a plain value: copying a board yields a fully independent
/// position, which is how move legality is simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Put `piece` on `square`, returning whatever was there before.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize].replace(piece)
    }

    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize].take()
    }

    /// Move the piece on `from` to `to`, marking it moved.
    ///
    /// Returns the piece that stood on `to`, if any. Does nothing when `from`
    /// is empty.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self.take(from)?;
        piece.mark_moved();
        self.place(to, piece)
    }

    /// Type governing the occupant of `square` for rules purposes.
    #[inline]
    pub fn effective_type(&self, square: Square) -> Option<PieceType> {
        self.piece_at(square)
            .map(|piece| effective_type(&piece, square))
    }

    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.piece_at(square).map(|p| (square, p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied_squares()
            .filter(move |(_, piece)| piece.color() == color)
    }

    pub fn occupancy_by_color(&self, color: Color) -> u64 {
        self.pieces_of(color)
            .fold(0u64, |acc, (square, _)| acc | square.bit())
    }

    pub fn occupancy(&self) -> u64 {
        self.occupied_squares()
            .fold(0u64, |acc, (square, _)| acc | square.bit())
    }

    /// Square sets indexed `[color][effective piece type]`.
    pub fn effective_pieces(&self) -> [[u64; 6]; 2] {
        let mut sets = [[0u64; 6]; 2];
        for (square, piece) in self.occupied_squares() {
            let kind = effective_type(&piece, square);
            sets[piece.color().index()][kind.index()] |= square.bit();
        }
        sets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn relocate_transfers_ownership_and_reveals() {
        let mut board = Board::empty();
        board.place(sq(1, 3), Piece::hidden(PieceType::Knight, Color::White));
        board.place(sq(3, 3), Piece::revealed(PieceType::Rook, Color::Black));

        let captured = board.relocate(sq(1, 3), sq(3, 3));

        assert_eq!(
            captured,
            Some(Piece::revealed(PieceType::Rook, Color::Black))
        );
        assert!(!board.is_occupied(sq(1, 3)));
        let moved = board.piece_at(sq(3, 3)).expect("piece should have arrived");
        assert!(moved.has_moved());
        assert_eq!(board.effective_type(sq(3, 3)), Some(PieceType::Knight));
    }

    #[test]
    fn relocate_from_empty_square_is_a_no_op() {
        let mut board = Board::empty();
        board.place(sq(4, 4), Piece::revealed(PieceType::Queen, Color::White));
        let before = board;
        assert_eq!(board.relocate(sq(0, 0), sq(4, 4)), None);
        assert_eq!(board, before);
    }

    #[test]
    fn effective_sets_use_apparent_types() {
        let mut board = Board::empty();
        board.place(sq(0, 0), Piece::hidden(PieceType::Pawn, Color::White));
        board.place(sq(6, 2), Piece::hidden(PieceType::Queen, Color::Black));

        let sets = board.effective_pieces();
        assert_eq!(
            sets[Color::White.index()][PieceType::Rook.index()],
            sq(0, 0).bit()
        );
        assert_eq!(
            sets[Color::Black.index()][PieceType::Pawn.index()],
            sq(6, 2).bit()
        );
        assert_eq!(board.occupancy(), sq(0, 0).bit() | sq(6, 2).bit());
        assert_eq!(board.occupancy_by_color(Color::Black), sq(6, 2).bit());
    }
}
