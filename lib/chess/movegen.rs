use crate::chess::{Board, Color, File, Piece, Role, Square};
use std::collections::BTreeSet;

const CARDINALS: [(i8, i8); 4] = [(1, 0), (0, -1), (-1, 0), (0, 1)];
const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// The destinations reachable by the piece on `sq` under movement geometry
/// and occupancy alone.
///
/// Ignores whether the move would expose the mover's own king; that filter
/// belongs to [`Game`][`crate::chess::Game`]. Returns the empty set if `sq`
/// is vacant.
pub fn pseudo_legal_destinations(board: &Board, sq: Square) -> BTreeSet<Square> {
    let Some(piece) = board.piece_on(sq) else {
        return BTreeSet::new();
    };

    match piece.role() {
        Role::Pawn => pawn_moves(board, sq, piece.color()),
        Role::Rook => sliding_moves(board, sq, piece.color(), &CARDINALS),
        Role::Bishop => sliding_moves(board, sq, piece.color(), &DIAGONALS),
        Role::Knight => knight_moves(board, sq, piece.color()),
        Role::King => king_moves(board, sq, piece),

        Role::Queen => {
            let mut moves = sliding_moves(board, sq, piece.color(), &CARDINALS);
            moves.extend(sliding_moves(board, sq, piece.color(), &DIAGONALS));
            moves
        }
    }
}

/// Whether `to` is a pseudo-legal destination for the piece on `from`.
pub fn verify_move(board: &Board, from: Square, to: Square) -> bool {
    pseudo_legal_destinations(board, from).contains(&to)
}

/// The squares a piece of `color` on `from` reaches by sliding one
/// direction: every empty square traversed plus the first enemy occupant.
pub fn scan_direction(
    board: &Board,
    from: Square,
    color: Color,
    (df, dr): (i8, i8),
) -> BTreeSet<Square> {
    let mut moves = BTreeSet::new();
    let mut next = from.offset(df, dr);

    while let Some(sq) = next {
        match board.piece_on(sq) {
            None => {
                moves.insert(sq);
                next = sq.offset(df, dr);
            }

            Some(p) => {
                if p.color() != color {
                    moves.insert(sq);
                }

                break;
            }
        }
    }

    moves
}

/// Whether a piece of `color` may land on `sq`: empty or enemy-occupied.
fn landable(board: &Board, sq: Square, color: Color) -> bool {
    match board.piece_on(sq) {
        None => true,
        Some(p) => p.color() != color,
    }
}

fn sliding_moves(
    board: &Board,
    sq: Square,
    color: Color,
    directions: &[(i8, i8)],
) -> BTreeSet<Square> {
    let mut moves = BTreeSet::new();

    for &direction in directions {
        moves.extend(scan_direction(board, sq, color, direction));
    }

    moves
}

fn pawn_moves(board: &Board, sq: Square, color: Color) -> BTreeSet<Square> {
    let mut moves = BTreeSet::new();
    let dr = color.forward();

    if let Some(step) = sq.offset(0, dr) {
        if board.piece_on(step).is_none() {
            moves.insert(step);

            if sq.rank() == color.pawn_rank() {
                if let Some(double) = sq.offset(0, 2 * dr) {
                    if board.piece_on(double).is_none() {
                        moves.insert(double);
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        if let Some(take) = sq.offset(df, dr) {
            if board.piece_on(take).is_some_and(|p| p.color() != color) {
                moves.insert(take);
            }
        }
    }

    moves
}

fn knight_moves(board: &Board, sq: Square, color: Color) -> BTreeSet<Square> {
    KNIGHT_JUMPS
        .iter()
        .filter_map(|&(df, dr)| sq.offset(df, dr))
        .filter(|&jump| landable(board, jump, color))
        .collect()
}

fn king_moves(board: &Board, sq: Square, piece: Piece) -> BTreeSet<Square> {
    let mut moves: BTreeSet<_> = CARDINALS
        .iter()
        .chain(DIAGONALS.iter())
        .filter_map(|&(df, dr)| sq.offset(df, dr))
        .filter(|&step| landable(board, step, piece.color()))
        .collect();

    moves.extend(castling_moves(board, sq, piece));
    moves
}

/// Castling candidates for the king on `sq`.
///
/// Requires an unmoved king on its starting square, a matching-color unmoved
/// rook on the corner square, and every square strictly between them empty.
/// Whether the king is in or passes through check is the arbiter's concern.
fn castling_moves(board: &Board, sq: Square, piece: Piece) -> BTreeSet<Square> {
    let mut moves = BTreeSet::new();
    let home = piece.color().home_rank();

    if piece.has_moved() || sq != Square::new(File::E, home) {
        return moves;
    }

    let wings: [(File, File, &[File]); 2] = [
        (File::A, File::C, &[File::B, File::C, File::D]),
        (File::H, File::G, &[File::F, File::G]),
    ];

    for (corner, destination, between) in wings {
        let rook = board.piece_on(Square::new(corner, home));

        let rook_ready = rook.is_some_and(|p| {
            p.role() == Role::Rook && p.color() == piece.color() && !p.has_moved()
        });

        let clear = between
            .iter()
            .all(|&f| board.piece_on(Square::new(f, home)).is_none());

        if rook_ready && clear {
            moves.insert(Square::new(destination, home));
        }
    }

    moves
}
