//! Terminal-oriented Unicode rendering of the public view.
//!
//! Rendering works from a [`Projection`], so a drawing can never show more
//! than an observer is allowed to know. Hidden pieces are drawn as `?`
//! (WHITE) or `¿` (BLACK).

use crate::game_state::chess_types::{Color, PieceType, Square};
use crate::game_state::game_state::Game;
use crate::game_state::projection::{PieceView, Projection};
use crate::move_generation::legal_move_checks::{attackers_to_square, king_square};

const FILE_LABELS: &str = "  a b c d e f g h";

/// Render the board with rank 8 at the top, followed by a turn/status line.
pub fn render_projection(view: &Projection) -> String {
    render_grid(|square| view.piece_at(square).map(piece_to_char))
        + &format!("\n{} to move, {}", view.turn.name(), view.status.name())
}

/// Render the board with the legal destinations of `from` marked `x`.
pub fn render_move_targets(view: &Projection, from: Square, targets: &[Square]) -> String {
    let mut out = render_grid(|square| {
        if targets.contains(&square) {
            Some('x')
        } else {
            view.piece_at(square).map(piece_to_char)
        }
    });
    out.push('\n');
    if targets.is_empty() {
        out.push_str(&format!("{from}: no moves"));
    } else {
        let names: Vec<String> = targets.iter().map(Square::to_string).collect();
        out.push_str(&format!("{from}: {}", names.join(" ")));
    }
    out
}

/// One line naming any king currently in check and its attackers.
pub fn describe_king_safety(game: &Game) -> String {
    let mut lines = Vec::new();
    for color in [Color::White, Color::Black] {
        let Some(king_sq) = king_square(game.board(), color) else {
            continue;
        };
        let attackers = attackers_to_square(game.board(), king_sq, color.opposite());
        if attackers.is_empty() {
            continue;
        }
        let from: Vec<String> = attackers
            .iter()
            .map(|(square, kind)| format!("{square} ({})", kind.name()))
            .collect();
        lines.push(format!(
            "{} king on {king_sq} is in check from {}",
            color.name(),
            from.join(", ")
        ));
    }

    if lines.is_empty() {
        "Both kings are safe".to_owned()
    } else {
        lines.join("; ")
    }
}

fn render_grid(glyph_at: impl Fn(Square) -> Option<char>) -> String {
    let mut out = String::new();
    out.push_str(FILE_LABELS);
    out.push('\n');

    for row in (0..8u8).rev() {
        let rank = char::from(b'1' + row);
        out.push(rank);
        out.push(' ');
        for col in 0..8u8 {
            let glyph = Square::new(row, col).and_then(&glyph_at).unwrap_or('·');
            out.push(glyph);
            if col < 7 {
                out.push(' ');
            }
        }
        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str(FILE_LABELS);
    out
}

fn piece_to_char(view: &PieceView) -> char {
    if view.hidden {
        return match view.color {
            Color::White => '?',
            Color::Black => '¿',
        };
    }
    match (view.color, view.piece_type) {
        (Color::White, PieceType::Pawn) => '♙',
        (Color::White, PieceType::Knight) => '♘',
        (Color::White, PieceType::Bishop) => '♗',
        (Color::White, PieceType::Rook) => '♖',
        (Color::White, PieceType::Queen) => '♕',
        (Color::White, PieceType::King) => '♔',
        (Color::Black, PieceType::Pawn) => '♟',
        (Color::Black, PieceType::Knight) => '♞',
        (Color::Black, PieceType::Bishop) => '♝',
        (Color::Black, PieceType::Rook) => '♜',
        (Color::Black, PieceType::Queen) => '♛',
        (Color::Black, PieceType::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Piece;
    use crate::game_state::projection::project;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn opening_shows_only_kings() {
        let game = Game::new_with_rng(&mut StdRng::seed_from_u64(8));
        let text = render_projection(&project(&game));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], FILE_LABELS);
        assert_eq!(lines[1], "8 ¿ ¿ ¿ ¿ ♚ ¿ ¿ ¿ 8");
        assert_eq!(lines[2], "7 ¿ ¿ ¿ ¿ ¿ ¿ ¿ ¿ 7");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
        assert_eq!(lines[7], "2 ? ? ? ? ? ? ? ? 2");
        assert_eq!(lines[8], "1 ? ? ? ? ♔ ? ? ? 1");
        assert_eq!(lines[10], "White to move, IN_PROGRESS");
    }

    #[test]
    fn move_targets_are_marked() {
        let mut board = Board::empty();
        board.place(sq(0, 4), Piece::revealed(PieceType::King, Color::White));
        board.place(sq(7, 4), Piece::revealed(PieceType::King, Color::Black));
        let game = Game::from_board(board, Color::White);

        let targets = [sq(1, 4), sq(0, 5)];
        let text = render_move_targets(&project(&game), sq(0, 4), &targets);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[7], "2 · · · · x · · · 2");
        assert_eq!(lines[8], "1 · · · · ♔ x · · 1");
        assert_eq!(lines[10], "e1: e2 f1");
    }

    #[test]
    fn king_safety_names_the_checker() {
        let mut board = Board::empty();
        board.place(sq(0, 4), Piece::revealed(PieceType::King, Color::White));
        board.place(sq(7, 0), Piece::revealed(PieceType::King, Color::Black));
        board.place(sq(4, 4), Piece::revealed(PieceType::Rook, Color::Black));
        let game = Game::from_board(board, Color::White);

        assert_eq!(
            describe_king_safety(&game),
            "White king on e1 is in check from e5 (ROOK)"
        );
    }
}
