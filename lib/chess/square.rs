use crate::chess::{File, ParseFileError, ParseRankError, Rank};
use derive_more::{Display, Error, From};
use std::str::FromStr;

/// A square on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display("{_0}{_1}")]
pub struct Square(File, Rank);

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    #[inline(always)]
    pub fn new(f: File, r: Rank) -> Self {
        Square(f, r)
    }

    /// This square's [`File`].
    #[inline(always)]
    pub fn file(&self) -> File {
        self.0
    }

    /// This square's [`Rank`].
    #[inline(always)]
    pub fn rank(&self) -> Rank {
        self.1
    }

    /// The square `df` files and `dr` ranks away, if still on the board.
    #[inline(always)]
    pub fn offset(&self, df: i8, dr: i8) -> Option<Self> {
        let f = File::try_new(self.file().index() + df)?;
        let r = Rank::try_new(self.rank().index() + dr)?;
        Some(Square::new(f, r))
    }

    /// An iterator over all 64 squares, `a1` through `h8`.
    #[inline(always)]
    pub fn iter() -> impl Iterator<Item = Self> {
        Rank::iter().flat_map(|r| File::iter().map(move |f| Square::new(f, r)))
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseSquareError {
    #[display("failed to parse square")]
    InvalidFile(ParseFileError),
    #[display("failed to parse square")]
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);
        Ok(Square::new(s[..i].parse()?, s[i..].parse()?))
    }
}
