//! Primitive value types shared by every rules component.
//!
//! Squares are row-major indices (`row * 8 + col`) so that they double as bit
//! positions in the 64-bit square sets used by the movement tables. Row 0 is
//! WHITE's back rank and row 7 is BLACK's.

use std::fmt;

use serde::Serialize;

use crate::errors::{RevealChessError, RevealResult};
use crate::utils::algebraic::square_to_algebraic;

/// A validated board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Boundary check for untrusted coordinates.
    pub fn try_from_coords(row: i32, col: i32) -> RevealResult<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square((row * 8 + col) as u8))
        } else {
            Err(RevealChessError::InvalidCoordinate(format!("({row}, {col})")))
        }
    }

    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn bit(self) -> u64 {
        1u64 << self.0
    }

    /// The square `d_row`/`d_col` away, if it is still on the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square((row * 8 + col) as u8))
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

/// Iterate the squares contained in a 64-bit square set, lowest index first.
#[inline]
pub fn squares_in(mut mask: u64) -> impl Iterator<Item = Square> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let index = mask.trailing_zeros() as u8;
        mask &= mask - 1;
        Some(Square(index))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Pawn,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceType::King => 0,
            PieceType::Queen => 1,
            PieceType::Rook => 2,
            PieceType::Bishop => 3,
            PieceType::Knight => 4,
            PieceType::Pawn => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PieceType::King => "KING",
            PieceType::Queen => "QUEEN",
            PieceType::Rook => "ROOK",
            PieceType::Bishop => "BISHOP",
            PieceType::Knight => "KNIGHT",
            PieceType::Pawn => "PAWN",
        }
    }
}

/// A piece with its permanent identity and reveal flag.
///
/// `true_type` is fixed at construction. `moved` only ever goes from false to
/// true, through [`Piece::mark_moved`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    true_type: PieceType,
    color: Color,
    moved: bool,
}

impl Piece {
    /// An unmoved piece whose identity is still concealed.
    #[inline]
    pub const fn hidden(true_type: PieceType, color: Color) -> Self {
        Self {
            true_type,
            color,
            moved: false,
        }
    }

    /// A piece that has already moved, so its true type is public.
    #[inline]
    pub const fn revealed(true_type: PieceType, color: Color) -> Self {
        Self {
            true_type,
            color,
            moved: true,
        }
    }

    #[inline]
    pub const fn true_type(&self) -> PieceType {
        self.true_type
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.moved
    }

    #[inline]
    pub(crate) fn mark_moved(&mut self) {
        self.moved = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    InProgress,
    Check,
    Checkmate,
    Draw,
}

impl GameStatus {
    /// Checkmate and draw accept no further moves.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Draw)
    }

    pub const fn name(self) -> &'static str {
        match self {
            GameStatus::InProgress => "IN_PROGRESS",
            GameStatus::Check => "CHECK",
            GameStatus::Checkmate => "CHECKMATE",
            GameStatus::Draw => "DRAW",
        }
    }
}
