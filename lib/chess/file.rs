use derive_more::{Display, Error};
use std::{ops::Sub, str::FromStr};

/// A column on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum File {
    #[display("a")]
    A,
    #[display("b")]
    B,
    #[display("c")]
    C,
    #[display("d")]
    D,
    #[display("e")]
    E,
    #[display("f")]
    F,
    #[display("g")]
    G,
    #[display("h")]
    H,
}

impl File {
    const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Constructs [`File`] from a zero-based index, if in bounds.
    #[inline(always)]
    pub fn try_new(i: i8) -> Option<Self> {
        Self::ALL.get(usize::try_from(i).ok()?).copied()
    }

    /// This file's zero-based index.
    #[inline(always)]
    pub fn index(&self) -> i8 {
        *self as i8
    }

    /// An iterator over all files, `a` through `h`.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        Self::ALL.into_iter()
    }
}

impl Sub for File {
    type Output = i8;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.index() - rhs.index()
    }
}

/// The reason why parsing [`File`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("failed to parse file, expected letter in the range `a..=h`")]
pub struct ParseFileError;

impl FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" => Ok(File::A),
            "b" => Ok(File::B),
            "c" => Ok(File::C),
            "d" => Ok(File::D),
            "e" => Ok(File::E),
            "f" => Ok(File::F),
            "g" => Ok(File::G),
            "h" => Ok(File::H),
            _ => Err(ParseFileError),
        }
    }
}
