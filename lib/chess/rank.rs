use derive_more::{Display, Error};
use std::{ops::Sub, str::FromStr};

/// A row on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum Rank {
    #[display("1")]
    First,
    #[display("2")]
    Second,
    #[display("3")]
    Third,
    #[display("4")]
    Fourth,
    #[display("5")]
    Fifth,
    #[display("6")]
    Sixth,
    #[display("7")]
    Seventh,
    #[display("8")]
    Eighth,
}

impl Rank {
    const ALL: [Rank; 8] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
        Rank::Eighth,
    ];

    /// Constructs [`Rank`] from a zero-based index, if in bounds.
    #[inline(always)]
    pub fn try_new(i: i8) -> Option<Self> {
        Self::ALL.get(usize::try_from(i).ok()?).copied()
    }

    /// This rank's zero-based index.
    #[inline(always)]
    pub fn index(&self) -> i8 {
        *self as i8
    }

    /// An iterator over all ranks, `1` through `8`.
    #[inline(always)]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        Self::ALL.into_iter()
    }
}

impl Sub for Rank {
    type Output = i8;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.index() - rhs.index()
    }
}

/// The reason why parsing [`Rank`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("failed to parse rank, expected digit in the range `1..=8`")]
pub struct ParseRankError;

impl FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Rank::First),
            "2" => Ok(Rank::Second),
            "3" => Ok(Rank::Third),
            "4" => Ok(Rank::Fourth),
            "5" => Ok(Rank::Fifth),
            "6" => Ok(Rank::Sixth),
            "7" => Ok(Rank::Seventh),
            "8" => Ok(Rank::Eighth),
            _ => Err(ParseRankError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn rank_has_an_index(r: Rank) {
        assert_eq!(Rank::try_new(r.index()), Some(r));
    }

    #[proptest]
    fn try_new_rejects_out_of_bounds_indices(#[filter(!(0..8).contains(&#i))] i: i8) {
        assert_eq!(Rank::try_new(i), None);
    }

    #[proptest]
    fn subtracting_ranks_returns_distance(a: Rank, b: Rank) {
        assert_eq!(a - b, a.index() - b.index());
    }

    #[proptest]
    fn parsing_printed_rank_is_an_identity(r: Rank) {
        assert_eq!(r.to_string().parse(), Ok(r));
    }

    #[proptest]
    fn parsing_rank_fails_if_not_digit_between_1_and_8(
        #[filter(!('1'..='8').contains(&#c))] c: char,
    ) {
        assert_eq!(c.to_string().parse::<Rank>(), Err(ParseRankError));
    }

    #[proptest]
    fn parsing_rank_fails_if_length_not_one(#[filter(#s.len() != 1)] s: String) {
        assert_eq!(s.parse::<Rank>(), Err(ParseRankError));
    }
}
