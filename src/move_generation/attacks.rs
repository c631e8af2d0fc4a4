use super::legality::is_move_legal;
use crate::board::{Board, Side, Square};

/// Counts the pieces of `attacking_side` that could legally move onto
/// `king_square`.
///
/// This is a plain attacker count. It does not look for replies to the check,
/// so it can not tell check from checkmate.
pub fn detect_attackers(board: &Board, king_square: Square, attacking_side: Side) -> u32 {
    board.pieces(attacking_side).filter(|&(from, _)| is_move_legal(board, from, king_square)).count() as u32
}

/// The side whose king is attacked after `mover` has moved, if any.
///
/// Only the mover's pieces are scanned, against the opponent's king. A board
/// without an opposing king never reports check.
pub fn check_after_move(board: &Board, mover: Side) -> Option<Side> {
    let defender = mover.enemy();
    let king_square = board.king_square(defender)?;
    (detect_attackers(board, king_square, mover) > 0).then_some(defender)
}
