pub mod board;
pub mod direction;
pub mod piece;
pub mod piece_move;
pub mod square;
pub use board::*;
pub use piece::{Piece, PieceType};
pub use piece_move::Move;
pub use square::{Offset, Square};
