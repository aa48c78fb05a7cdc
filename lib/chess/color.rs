use crate::chess::Rank;
use derive_more::Display;
use std::ops::Not;

/// The color of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Color {
    #[display("white")]
    White,
    #[display("black")]
    Black,
}

impl Color {
    /// The rank this color's pieces start on.
    #[inline(always)]
    pub fn home_rank(&self) -> Rank {
        match self {
            Color::White => Rank::First,
            Color::Black => Rank::Eighth,
        }
    }

    /// The rank this color's pawns start on.
    #[inline(always)]
    pub fn pawn_rank(&self) -> Rank {
        match self {
            Color::White => Rank::Second,
            Color::Black => Rank::Seventh,
        }
    }

    /// The direction this color's pawns advance in.
    #[inline(always)]
    pub fn forward(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl Not for Color {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}
