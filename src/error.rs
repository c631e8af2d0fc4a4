//! Error types for the board and the click-driven game.
//!
//! None of these are fatal. A `MoveError` raised while handling a click is
//! turned into `MoveOutcome::Ignored` and the game carries on unchanged.

use thiserror::Error;

use crate::board::{Side, Square};

/// Reasons a click or a move request is rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Square lies outside the 8x8 board
    #[error("square {0} is off the board")]
    OutOfBoundsSquare(Square),

    /// The piece on `from` cannot move to `to`
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// Nothing to pick up on the clicked square
    #[error("no piece at source square {0}")]
    NoPieceAtSource(Square),

    /// The clicked piece belongs to the side that is not on turn
    #[error("piece at {square} belongs to {side}, who is not on turn")]
    WrongTurnColor { square: Square, side: Side },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSquareError {
    #[error("expected a square like `e2`, got {0:?}")]
    Malformed(String),
    #[error("file {0:?} is not between a and h")]
    InvalidFile(char),
    #[error("rank {0:?} is not between 1 and 8")]
    InvalidRank(char),
}

/// Errors reading the piece placement field of a FEN string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),
    #[error("rank {rank} describes {files} files instead of 8")]
    FileCount { rank: usize, files: usize },
    #[error("unknown piece letter {0:?}")]
    UnknownPiece(char),
}

pub type MoveResult<T> = Result<T, MoveError>;
