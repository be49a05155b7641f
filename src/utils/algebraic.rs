//! Algebraic square names.
//!
//! Columns 0..7 are files `a`..`h` and rows 0..7 are ranks `1`..`8`, so
//! WHITE's king starts on `e1` and BLACK's on `e8`.

use crate::errors::{RevealChessError, RevealResult};
use crate::game_state::chess_types::Square;

/// Parse a square name such as `"e4"`. Case-insensitive on the file.
pub fn algebraic_to_square(text: &str) -> RevealResult<Square> {
    let bytes = text.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(RevealChessError::InvalidCoordinate(text.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(RevealChessError::InvalidCoordinate(text.to_owned()));
    }

    Square::new(rank - b'1', file - b'a')
        .ok_or_else(|| RevealChessError::InvalidCoordinate(text.to_owned()))
}

pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col());
    let rank_char = char::from(b'1' + square.row());
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, square_to_algebraic};
    use crate::errors::RevealChessError;
    use crate::game_state::chess_types::Square;

    #[test]
    fn corner_and_king_squares() {
        assert_eq!(algebraic_to_square("a1").ok(), Square::new(0, 0));
        assert_eq!(algebraic_to_square("H8").ok(), Square::new(7, 7));
        assert_eq!(algebraic_to_square("e1").ok(), Square::new(0, 4));

        let e8 = Square::new(7, 4).expect("e8");
        assert_eq!(square_to_algebraic(e8), "e8");
    }

    #[test]
    fn malformed_names_are_invalid_coordinates() {
        for text in ["", "e", "e9", "i1", "e10", "44"] {
            assert!(
                matches!(
                    algebraic_to_square(text),
                    Err(RevealChessError::InvalidCoordinate(_))
                ),
                "{text:?} should be rejected"
            );
        }
    }
}
