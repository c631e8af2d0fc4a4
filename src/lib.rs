//! Board state, move legality and click-driven turn handling for a two player
//! chess board. Rendering and input capture live outside this crate; they feed
//! clicked squares into [`Game::square_clicked`] and redraw from the returned
//! [`MoveOutcome`]s.

pub mod board;
pub mod error;
pub mod game;
pub mod move_generation;

pub use board::{Board, Move, Piece, PieceType, Side, Square};
pub use error::{FenError, MoveError, ParseSquareError};
pub use game::{Game, GameConfig, GameState, MoveOutcome, Outcomes};
