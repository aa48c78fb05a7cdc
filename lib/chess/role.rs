use derive_more::{Display, Error};
use std::fmt::{self, Formatter, Write};
use std::str::FromStr;

/// The type of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Role {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl Role {
    /// This role's full name.
    pub fn name(&self) -> &'static str {
        match self {
            Role::Pawn => "pawn",
            Role::Rook => "rook",
            Role::Knight => "knight",
            Role::Bishop => "bishop",
            Role::Queen => "queen",
            Role::King => "king",
        }
    }
}

/// Writes this role's diagram symbol.
///
/// The knight renders as `c`, per the board diagram format.
impl fmt::Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Role::Pawn => f.write_char('p'),
            Role::Rook => f.write_char('r'),
            Role::Knight => f.write_char('c'),
            Role::Bishop => f.write_char('b'),
            Role::Queen => f.write_char('q'),
            Role::King => f.write_char('k'),
        }
    }
}

/// The reason why parsing [`Role`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display("failed to parse piece symbol")]
pub struct ParseRoleError;

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p" => Ok(Role::Pawn),
            "r" => Ok(Role::Rook),
            "c" => Ok(Role::Knight),
            "b" => Ok(Role::Bishop),
            "q" => Ok(Role::Queen),
            "k" => Ok(Role::King),
            _ => Err(ParseRoleError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_role_is_an_identity(r: Role) {
        assert_eq!(r.to_string().parse(), Ok(r));
    }

    #[proptest]
    fn parsing_role_fails_if_not_one_of_lowercase_prcbqk(
        #[filter(!['p', 'r', 'c', 'b', 'q', 'k'].contains(&#c))] c: char,
    ) {
        assert_eq!(c.to_string().parse::<Role>(), Err(ParseRoleError));
    }

    #[test]
    fn every_role_has_a_name() {
        assert_eq!(Role::Knight.name(), "knight");
        assert_eq!(Role::King.name(), "king");
    }
}
