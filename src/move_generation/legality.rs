use crate::board::direction::Direction;
use crate::board::piece::PieceType;
use crate::board::{Board, Move, Offset, Side, Square};
use arrayvec::ArrayVec;

/// Most destinations a single piece can have, a queen in the centre.
pub const MAX_DESTINATIONS: usize = 27;

/// Decides whether the piece on `from` may move to `to`.
///
/// Only the movement rules of each piece type are checked. Whether the move
/// leaves the mover's own king attacked is not considered. Empty source
/// squares, off-board squares and null moves are all simply illegal.
pub fn is_move_legal(board: &Board, from: Square, to: Square) -> bool {
    if !from.is_in_bounds() || !to.is_in_bounds() || from == to {
        return false;
    }
    let Some(piece) = board.get(from) else {
        return false;
    };
    if board.get(to).is_some_and(|target| target.is_friendly(piece)) {
        return false;
    }

    let delta = to - from;
    match piece.piece_type {
        PieceType::Rook => is_rook_move_legal(board, from, delta),
        PieceType::Bishop => is_bishop_move_legal(board, from, delta),
        PieceType::Queen => is_queen_move_legal(board, from, delta),
        PieceType::Knight => is_knight_move_legal(delta),
        PieceType::King => is_king_move_legal(delta),
        PieceType::Pawn => is_pawn_move_legal(board, from, to, piece.side),
    }
}

fn is_rook_move_legal(board: &Board, from: Square, delta: Offset) -> bool {
    // exactly one of row and column changes
    if (delta.row == 0) == (delta.col == 0) {
        return false;
    }
    path_is_clear(board, from, delta.signum(), delta.distance())
}
fn is_bishop_move_legal(board: &Board, from: Square, delta: Offset) -> bool {
    if delta.row.abs() != delta.col.abs() || delta.row == 0 {
        return false;
    }
    path_is_clear(board, from, delta.signum(), delta.distance())
}
fn is_queen_move_legal(board: &Board, from: Square, delta: Offset) -> bool {
    match Direction::from_squares(from, from + delta) {
        Some(direction) if direction.is_diagonal() => is_bishop_move_legal(board, from, delta),
        Some(_) => is_rook_move_legal(board, from, delta),
        None => false,
    }
}
fn is_knight_move_legal(delta: Offset) -> bool {
    matches!((delta.row.abs(), delta.col.abs()), (1, 2) | (2, 1))
}
fn is_king_move_legal(delta: Offset) -> bool {
    delta.row.abs() <= 1 && delta.col.abs() <= 1
}
fn is_pawn_move_legal(board: &Board, from: Square, to: Square, side: Side) -> bool {
    let up = Direction::up(side).value();
    let delta = to - from;
    if delta.row.signum() != up.row {
        return false;
    }
    let distance = delta.row.abs();

    if delta.col == 0 {
        let first_move = from.row == side.pawn_row();
        if distance != 1 && !(first_move && distance == 2) {
            return false;
        }
        // a straight push never captures, so the destination is checked too
        return path_is_clear(board, from, up, distance + 1);
    }

    delta.col.abs() == 1 && distance == 1 && board.is_occupied(to)
}

/// True when every square strictly between `from` and `from + step * distance`
/// is empty. Moves of a single step have nothing in between and always pass.
pub fn path_is_clear(board: &Board, from: Square, step: Offset, distance: i8) -> bool {
    (1..distance).all(|i| !board.is_occupied(from + step * i))
}

pub fn legal_destinations(board: &Board, from: Square) -> ArrayVec<Square, MAX_DESTINATIONS> {
    Square::all().filter(|&to| is_move_legal(board, from, to)).collect()
}

pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for (from, _) in board.pieces(side) {
        moves.extend(legal_destinations(board, from).into_iter().map(|to| Move::new(from, to)));
    }
    moves
}
