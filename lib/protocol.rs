use crate::chess::{Move, MoveRecord, ParseMoveError, Piece};
use derive_more::{Display, Error, From};
use std::fmt;
use std::str::FromStr;

/// A server command, one per line of input.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Command {
    /// Requests the board diagram.
    DisplayBoard,
    /// Requests a move, e.g. `e2-e4`.
    Move(Move),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::DisplayBoard => f.write_str("display_board"),
            Command::Move(m) => write!(f, "{m}"),
        }
    }
}

/// The reason why parsing a [`Command`] failed.
///
/// Malformed input is rejected here, before it ever reaches the engine.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[display("failed to parse command")]
pub struct ParseCommandError(ParseMoveError);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "display_board" => Ok(Command::DisplayBoard),
            _ => Ok(Command::Move(s.parse()?)),
        }
    }
}

/// The full name of a piece, e.g. `white pawn`.
pub fn name(piece: Piece) -> String {
    format!("{} {}", piece.color(), piece.role().name())
}

/// Spells out a committed move the way the server reports it.
///
/// Castling, captures and quiet moves each get a distinct phrasing; a move
/// that checks the opponent's king gains a `. Check` suffix.
pub fn describe(record: &MoveRecord) -> String {
    let number = record.number();
    let piece = name(record.piece());
    let whence = record.whence();
    let whither = record.whither();
    let check = if record.is_check() { ". Check" } else { "" };

    if record.is_castling() {
        let wing = if whither.file() < whence.file() {
            "queenside"
        } else {
            "kingside"
        };

        format!("{number}. {piece} does a {wing} castling from {whence} to {whither}{check}")
    } else if let Some(target) = record.captured() {
        let target = name(target);
        format!("{number}. {piece} on {whence} takes {target} on {whither}{check}")
    } else {
        format!("{number}. {piece} moves from {whence} to {whither}{check}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Color, Piece, Role};
    use test_strategy::proptest;

    fn record(piece: Piece, m: &str, captured: Option<Piece>, check: bool) -> MoveRecord {
        MoveRecord::new(1, piece, m.parse().unwrap(), captured, check)
    }

    #[proptest]
    fn parsing_printed_command_is_an_identity(c: Command) {
        assert_eq!(c.to_string().parse(), Ok(c));
    }

    #[proptest]
    fn parsing_command_fails_for_arbitrary_text(
        #[filter(#s != "display_board" && #s.parse::<Move>().is_err())] s: String,
    ) {
        assert!(s.parse::<Command>().is_err());
    }

    #[test]
    fn moves_must_spell_both_squares_exactly() {
        assert!("e2-e4".parse::<Command>().is_ok());
        assert!("e2e4".parse::<Command>().is_err());
        assert!("i9-a1".parse::<Command>().is_err());
        assert!("e2-e4 ".parse::<Command>().is_err());
    }

    #[test]
    fn quiet_moves_read_as_plain_relocations() {
        let pawn = Piece::new(Role::Pawn, Color::White);
        assert_eq!(
            describe(&record(pawn, "e2-e4", None, false)),
            "1. white pawn moves from e2 to e4"
        );
    }

    #[test]
    fn captures_name_their_target() {
        let knight = Piece::new(Role::Knight, Color::Black);
        let pawn = Piece::new(Role::Pawn, Color::White);
        assert_eq!(
            describe(&record(knight, "f6-e4", Some(pawn), false)),
            "1. black knight on f6 takes white pawn on e4"
        );
    }

    #[test]
    fn castling_names_its_wing() {
        let king = Piece::new(Role::King, Color::White);
        assert_eq!(
            describe(&record(king, "e1-g1", None, false)),
            "1. white king does a kingside castling from e1 to g1"
        );
        assert_eq!(
            describe(&record(king, "e1-c1", None, false)),
            "1. white king does a queenside castling from e1 to c1"
        );
    }

    #[test]
    fn checking_moves_gain_a_suffix() {
        let queen = Piece::new(Role::Queen, Color::Black);
        assert_eq!(
            describe(&record(queen, "d8-h4", None, true)),
            "1. black queen moves from d8 to h4. Check"
        );
    }
}
