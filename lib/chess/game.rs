use crate::chess::{verify_move, Board, Color, File, Move, MoveRecord, Role, Square};
use derive_more::{Display, Error};

/// The reason why the arbiter rejected a move.
///
/// A rejected move never mutates the board or the history.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum MoveRejected {
    #[display("there is no piece on `{_0}`")]
    NoPieceAtSource(#[error(not(source))] Square),
    #[display("it is not {_0}'s turn to move")]
    WrongColorToMove(#[error(not(source))] Color),
    #[display("the piece on `{}` cannot reach `{}`", _0.whence(), _0.whither())]
    GeometricallyIllegal(#[error(not(source))] Move),
    #[display("`{_0}` would leave the king in check")]
    SelfCheckViolation(#[error(not(source))] Move),
    #[display("the king may not castle out of or through check")]
    CastlingThroughCheck(#[error(not(source))] Move),
}

/// A single game of chess: the live board plus its append-only history.
#[derive(Debug, Default, Clone)]
pub struct Game {
    board: Board,
    history: Vec<MoveRecord>,
}

impl Game {
    /// Starts a new game from the standard position.
    pub fn new() -> Self {
        Game::default()
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The committed moves, in order.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Validates and executes a move.
    ///
    /// The move is applied to a trial copy of the board first; only once the
    /// mover's own king is known to be safe does the trial become the live
    /// board and a [`MoveRecord`] is appended to the history. Castling
    /// relocates king and rook as one compound move and yields one record.
    pub fn attempt_move(&mut self, m: Move) -> Result<MoveRecord, MoveRejected> {
        let piece = self
            .board
            .piece_on(m.whence())
            .ok_or(MoveRejected::NoPieceAtSource(m.whence()))?;

        if piece.color() != self.board.turn() {
            return Err(MoveRejected::WrongColorToMove(piece.color()));
        }

        if !verify_move(&self.board, m.whence(), m.whither()) {
            return Err(MoveRejected::GeometricallyIllegal(m));
        }

        let castling =
            piece.role() == Role::King && (m.whither().file() - m.whence().file()).abs() == 2;

        if castling && !self.castling_path_safe(m, piece.color()) {
            return Err(MoveRejected::CastlingThroughCheck(m));
        }

        let captured = self.board.piece_on(m.whither());

        let mut trial = self.board;
        apply(&mut trial, m, castling);
        trial.flip_turn();

        if trial.in_check(piece.color()) {
            return Err(MoveRejected::SelfCheckViolation(m));
        }

        self.board = trial;

        let record = MoveRecord::new(
            self.history.len() as u32 + 1,
            piece,
            m,
            captured,
            self.board.in_check(self.board.turn()),
        );

        self.history.push(record);
        Ok(record)
    }

    /// The king may not castle out of check nor through an attacked square.
    fn castling_path_safe(&self, m: Move, color: Color) -> bool {
        if self.board.in_check(color) {
            return false;
        }

        let transit = if m.whither().file() < m.whence().file() {
            Square::new(File::D, m.whence().rank())
        } else {
            Square::new(File::F, m.whence().rank())
        };

        !self.board.is_attacked(transit, !color)
    }
}

/// Applies a pseudo-legal move to the board, capturing by replacement.
fn apply(board: &mut Board, m: Move, castling: bool) {
    let Some(mut piece) = board.lift(m.whence()) else {
        return;
    };

    if matches!(piece.role(), Role::King | Role::Rook) {
        piece.touch();
    }

    board.put(m.whither(), piece);

    if castling {
        let home = m.whence().rank();

        let (corner, beside) = if m.whither().file() < m.whence().file() {
            (File::A, File::D)
        } else {
            (File::H, File::F)
        };

        if let Some(mut rook) = board.lift(Square::new(corner, home)) {
            rook.touch();
            board.put(Square::new(beside, home), rook);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Piece;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    fn play(game: &mut Game, moves: &[&str]) {
        for m in moves {
            game.attempt_move(mv(m)).unwrap();
        }
    }

    #[test]
    fn white_moves_first() {
        let mut game = Game::new();
        assert_eq!(
            game.attempt_move(mv("e7-e5")),
            Err(MoveRejected::WrongColorToMove(Color::Black))
        );
        assert!(game.attempt_move(mv("e2-e4")).is_ok());
    }

    #[test]
    fn turns_alternate_after_each_accepted_move() {
        let mut game = Game::new();
        play(&mut game, &["e2-e4"]);
        assert_eq!(
            game.attempt_move(mv("d2-d4")),
            Err(MoveRejected::WrongColorToMove(Color::White))
        );
    }

    #[test]
    fn vacant_source_is_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.attempt_move(mv("e4-e5")),
            Err(MoveRejected::NoPieceAtSource(sq("e4")))
        );
    }

    #[test]
    fn geometry_violations_are_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.attempt_move(mv("e2-e5")),
            Err(MoveRejected::GeometricallyIllegal(mv("e2-e5")))
        );
    }

    #[test]
    fn rejections_leave_the_game_untouched() {
        let mut game = Game::new();
        let board = *game.board();

        for m in ["e4-e5", "e7-e5", "e2-e5", "b1-b3"] {
            assert!(game.attempt_move(mv(m)).is_err());
            assert_eq!(game.board(), &board);
            assert!(game.history().is_empty());
        }
    }

    #[test]
    fn capture_is_recorded_with_the_target() {
        let mut game = Game::new();
        play(&mut game, &["e2-e4", "d7-d5"]);

        let record = game.attempt_move(mv("e4-d5")).unwrap();
        assert!(record.is_capture());
        assert_eq!(
            record.captured().map(|p| (p.role(), p.color())),
            Some((Role::Pawn, Color::Black))
        );
        assert_eq!(game.board().piece_on(sq("e4")), None);
    }

    #[test]
    fn exposing_the_own_king_is_rejected() {
        let mut game = Game::new();
        play(&mut game, &["f2-f3", "e7-e6", "g2-g4", "d8-h4"]);

        // the fool's mate pattern; any reply that does not address the
        // check leaves the king attacked
        let board = *game.board();
        assert_eq!(
            game.attempt_move(mv("a2-a3")),
            Err(MoveRejected::SelfCheckViolation(mv("a2-a3")))
        );
        assert_eq!(game.board(), &board);
    }

    #[test]
    fn pinned_pieces_may_not_move_away() {
        let mut game = Game::new();
        let mut board = *game.board();

        // a knight on e2 shields the king from a rook on e5
        board.lift(sq("e2"));
        board.put(sq("e2"), Piece::new(Role::Knight, Color::White));
        board.put(sq("e5"), Piece::new(Role::Rook, Color::Black));
        game.board = board;

        assert_eq!(
            game.attempt_move(mv("e2-c3")),
            Err(MoveRejected::SelfCheckViolation(mv("e2-c3")))
        );
    }

    #[test]
    fn checking_moves_are_flagged_in_the_record() {
        let mut game = Game::new();
        play(&mut game, &["f2-f3", "e7-e6", "g2-g4"]);

        let record = game.attempt_move(mv("d8-h4")).unwrap();
        assert!(record.is_check());
        assert!(game.board().in_check(Color::White));
    }

    #[test]
    fn quiet_moves_are_not_flagged_as_check() {
        let mut game = Game::new();
        let record = game.attempt_move(mv("e2-e4")).unwrap();
        assert!(!record.is_check());
        assert!(!record.is_capture());
    }

    #[test]
    fn kingside_castling_relocates_king_and_rook_in_one_record() {
        let mut game = Game::new();
        play(
            &mut game,
            &["g1-f3", "b8-a6", "e2-e3", "a6-b8", "f1-e2", "b8-a6"],
        );

        let record = game.attempt_move(mv("e1-g1")).unwrap();
        assert!(record.is_castling());
        assert_eq!(game.history().len(), 7);

        let king = game.board().piece_on(sq("g1")).unwrap();
        let rook = game.board().piece_on(sq("f1")).unwrap();

        assert_eq!(king.role(), Role::King);
        assert!(king.has_moved());
        assert_eq!(rook.role(), Role::Rook);
        assert!(rook.has_moved());
        assert_eq!(game.board().piece_on(sq("e1")), None);
        assert_eq!(game.board().piece_on(sq("h1")), None);
    }

    #[test]
    fn castling_out_of_check_is_rejected() {
        let mut game = Game::new();
        let mut board = *game.board();

        board.lift(sq("f1"));
        board.lift(sq("g1"));
        board.lift(sq("e2"));
        board.put(sq("e4"), Piece::new(Role::Rook, Color::Black));
        game.board = board;

        assert_eq!(
            game.attempt_move(mv("e1-g1")),
            Err(MoveRejected::CastlingThroughCheck(mv("e1-g1")))
        );
    }

    #[test]
    fn castling_through_an_attacked_square_is_rejected() {
        let mut game = Game::new();
        let mut board = *game.board();

        board.lift(sq("f1"));
        board.lift(sq("g1"));
        board.lift(sq("f2"));
        board.put(sq("f4"), Piece::new(Role::Rook, Color::Black));
        game.board = board;

        assert_eq!(
            game.attempt_move(mv("e1-g1")),
            Err(MoveRejected::CastlingThroughCheck(mv("e1-g1")))
        );
    }

    #[test]
    fn ordinary_king_steps_are_not_castling() {
        let mut game = Game::new();
        play(&mut game, &["e2-e4", "e7-e5"]);

        let record = game.attempt_move(mv("e1-e2")).unwrap();
        assert!(!record.is_castling());
        assert!(game.board().piece_on(sq("e2")).unwrap().has_moved());
    }

    #[test]
    fn history_numbers_grow_from_one() {
        let mut game = Game::new();
        play(&mut game, &["e2-e4", "e7-e5", "g1-f3"]);

        let numbers: Vec<_> = game.history().iter().map(|r| r.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}
