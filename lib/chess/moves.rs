use crate::chess::{ParseSquareError, Piece, Role, Square};
use derive_more::{Display, Error, From};
use std::str::FromStr;

/// A chess move from one [`Square`] to another.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display("{_0}-{_1}")]
pub struct Move(pub Square, pub Square);

impl Move {
    /// The square the piece moves from.
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The square the piece moves to.
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.1
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseMoveError {
    #[display("failed to parse move")]
    InvalidSquare(ParseSquareError),
    #[display("failed to parse move, expected `<square>-<square>`")]
    InvalidSyntax,
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whence, whither) = s.split_once('-').ok_or(ParseMoveError::InvalidSyntax)?;
        Ok(Move(whence.parse()?, whither.parse()?))
    }
}

/// An immutable entry in a game's move history.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct MoveRecord {
    number: u32,
    piece: Piece,
    whence: Square,
    whither: Square,
    captured: Option<Piece>,
    check: bool,
}

impl MoveRecord {
    pub(crate) fn new(
        number: u32,
        piece: Piece,
        m: Move,
        captured: Option<Piece>,
        check: bool,
    ) -> Self {
        MoveRecord {
            number,
            piece,
            whence: m.whence(),
            whither: m.whither(),
            captured,
            check,
        }
    }

    /// This move's one-based position in the history.
    #[inline(always)]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The piece that moved.
    #[inline(always)]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// The square vacated.
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.whence
    }

    /// The destination square.
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.whither
    }

    /// The piece captured, if any.
    #[inline(always)]
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// Whether this move put the opponent's king in check.
    #[inline(always)]
    pub fn is_check(&self) -> bool {
        self.check
    }

    /// Whether this record describes a capture.
    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Whether this record describes a castling move.
    #[inline(always)]
    pub fn is_castling(&self) -> bool {
        self.piece.role() == Role::King && (self.whither.file() - self.whence.file()).abs() == 2
    }
}
