use derive_more::Display;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::board::Side;
use std::ops::Index;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display)]
#[display("{side} {piece_type}")]
pub struct Piece {
    pub piece_type: PieceType,
    pub side: Side,
}

impl Piece {
    pub const fn new(piece_type: PieceType, side: Side) -> Piece {
        Piece { piece_type, side }
    }
    pub fn from_fen_char(piece_char: char) -> Option<Piece> {
        let piece_type = match piece_char.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };
        let side = if piece_char.is_ascii_uppercase() { Side::White } else { Side::Black };
        Some(Piece::new(piece_type, side))
    }
    pub fn fen_char(&self) -> char {
        let piece_char = match self.piece_type {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        match self.side {
            Side::White => piece_char.to_ascii_uppercase(),
            Side::Black => piece_char,
        }
    }
    pub fn glyph(&self) -> char {
        const GLYPHS: [[char; 6]; 2] = [['♙', '♘', '♗', '♖', '♕', '♔'], ['♟', '♞', '♝', '♜', '♛', '♚']];
        GLYPHS[self.side][self.piece_type]
    }
    pub fn is_friendly(&self, other: Piece) -> bool {
        self.side == other.side
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum PieceType {
    Pawn = 0b000,
    Knight = 0b001,
    Bishop = 0b010,
    Rook = 0b011,
    Queen = 0b100,
    King = 0b101,
}

impl PieceType {
    pub const fn all() -> [PieceType; 6] {
        [PieceType::Pawn, PieceType::Knight, PieceType::Bishop, PieceType::Rook, PieceType::Queen, PieceType::King]
    }
}

impl<T, const N: usize> Index<PieceType> for [T; N] {
    type Output = T;

    fn index(&self, index: PieceType) -> &Self::Output {
        &self[index as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_chars_round_trip_every_piece() {
        for side in [Side::White, Side::Black] {
            for piece_type in PieceType::all() {
                let piece = Piece::new(piece_type, side);
                assert_eq!(Piece::from_fen_char(piece.fen_char()), Some(piece));
            }
        }
        assert_eq!(Piece::from_fen_char('x'), None);
    }
    #[test]
    fn glyphs_match_side() {
        assert_eq!(Piece::new(PieceType::King, Side::White).glyph(), '♔');
        assert_eq!(Piece::new(PieceType::Pawn, Side::Black).glyph(), '♟');
        assert_eq!(Piece::new(PieceType::Knight, Side::Black).glyph(), '♞');
    }
    #[test]
    fn piece_type_from_primitive() {
        assert_eq!(PieceType::try_from(0b011u8).ok(), Some(PieceType::Rook));
        assert!(PieceType::try_from(6u8).is_err());
        assert_eq!(u8::from(PieceType::King), 0b101);
    }
    #[test]
    fn displays_side_and_type() {
        assert_eq!(Piece::new(PieceType::Queen, Side::Black).to_string(), "Black Queen");
    }
}
