use crate::chess::{Color, Role};
use std::fmt::{self, Formatter};

/// A chess [piece][`Role`] of a certain [`Color`].
///
/// Pieces are plain data owned by the [`Board`][`crate::chess::Board`]'s
/// occupancy map; the `moved` flag is only ever consulted for the king and
/// the rooks, to decide castling legality.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    role: Role,
    color: Color,
    moved: bool,
}

impl Piece {
    /// Constructs a [`Piece`] that has not moved yet.
    #[inline(always)]
    pub fn new(role: Role, color: Color) -> Self {
        Piece {
            role,
            color,
            moved: false,
        }
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.role
    }

    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether this piece has moved at least once.
    #[inline(always)]
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Marks this piece as having moved.
    #[inline(always)]
    pub(crate) fn touch(&mut self) {
        self.moved = true;
    }

    /// This piece's diagram symbol, uppercase for white.
    #[inline(always)]
    pub fn symbol(&self) -> char {
        let symbol = match self.role {
            Role::Pawn => 'p',
            Role::Rook => 'r',
            Role::Knight => 'c',
            Role::Bishop => 'b',
            Role::Queen => 'q',
            Role::King => 'k',
        };

        match self.color {
            Color::White => symbol.to_ascii_uppercase(),
            Color::Black => symbol,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
