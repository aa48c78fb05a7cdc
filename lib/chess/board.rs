use crate::chess::{pseudo_legal_destinations, Color, File, Piece, Rank, Role, Square};
use std::fmt::{self, Formatter};
use std::ops::Index;

const HEADER: &str = "    a   b   c   d   e   f   g   h";
const DIVIDER: &str = "  --------------------------------";

/// The chess board: an 8×8 occupancy map plus the side to move.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    turn: Color,
}

/// The standard starting position, white to move.
impl Default for Board {
    fn default() -> Self {
        const BACK_RANK: [Role; 8] = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];

        let mut board = Board {
            squares: [None; 64],
            turn: Color::White,
        };

        for (f, role) in File::iter().zip(BACK_RANK) {
            board.put(Square::new(f, Rank::First), Piece::new(role, Color::White));
            board.put(
                Square::new(f, Rank::Second),
                Piece::new(Role::Pawn, Color::White),
            );
            board.put(
                Square::new(f, Rank::Seventh),
                Piece::new(Role::Pawn, Color::Black),
            );
            board.put(Square::new(f, Rank::Eighth), Piece::new(role, Color::Black));
        }

        board
    }
}

impl Board {
    #[inline(always)]
    fn index_of(sq: Square) -> usize {
        (sq.rank().index() * 8 + sq.file().index()) as usize
    }

    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Passes the turn to the opponent.
    #[inline(always)]
    pub(crate) fn flip_turn(&mut self) {
        self.turn = !self.turn;
    }

    /// The [`Piece`] on the given [`Square`], if any.
    #[inline(always)]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[Self::index_of(sq)]
    }

    /// Removes and returns the [`Piece`] on the given [`Square`], if any.
    #[inline(always)]
    pub(crate) fn lift(&mut self, sq: Square) -> Option<Piece> {
        self.squares[Self::index_of(sq)].take()
    }

    /// Places a [`Piece`] on the given [`Square`], replacing any occupant.
    #[inline(always)]
    pub(crate) fn put(&mut self, sq: Square, p: Piece) {
        self.squares[Self::index_of(sq)] = Some(p);
    }

    /// An iterator over all pieces on the board.
    #[inline(always)]
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|sq| Some((sq, self.piece_on(sq)?)))
    }

    /// The [`Square`] occupied by the king of a [`Color`].
    #[inline(always)]
    pub fn king(&self, side: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, p)| p.role() == Role::King && p.color() == side)
            .map(|(sq, _)| sq)
    }

    /// Whether any piece of color `by` pseudo-legally reaches `sq`.
    ///
    /// This is a one-ply attack test; it deliberately does not recurse into
    /// whether the attacker would expose its own king.
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        self.pieces()
            .filter(|(_, p)| p.color() == by)
            .any(|(from, _)| pseudo_legal_destinations(self, from).contains(&sq))
    }

    /// Whether the king of the given [`Color`] is in check.
    pub fn in_check(&self, side: Color) -> bool {
        match self.king(side) {
            Some(sq) => self.is_attacked(sq, !side),
            None => false,
        }
    }
}

/// Retrieves the [`Piece`] on a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[Self::index_of(sq)]
    }
}

/// The 19-line board diagram, ranks 8 down to 1.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        writeln!(f, "{DIVIDER}")?;

        for r in Rank::iter().rev() {
            write!(f, "{r}")?;

            for sq in File::iter().map(|c| Square::new(c, r)) {
                write!(f, " | {}", self[sq].map_or(' ', |p| p.symbol()))?;
            }

            writeln!(f)?;
            writeln!(f, "{DIVIDER}")?;
        }

        writeln!(f, "{HEADER}")
    }
}
