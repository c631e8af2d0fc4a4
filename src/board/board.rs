use super::piece::{Piece, PieceType};
use super::square::Square;
use crate::error::FenError;
use derive_more::Display;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;
use std::ops::Index;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// An 8x8 mailbox of optional pieces. Knows nothing about the rules.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self { squares: [[None; 8]; 8] }
    }
    pub fn start_pos() -> Self {
        let mut board = Self::empty();
        for (col, piece_type) in BACK_RANK.into_iter().enumerate() {
            let col = col as i8;
            for side in [Side::White, Side::Black] {
                board.place(Piece::new(piece_type, side), Square::new(side.back_row(), col));
                board.place(Piece::new(PieceType::Pawn, side), Square::new(side.pawn_row(), col));
            }
        }
        board
    }

    /// Reads the piece placement field of a FEN string. Any further fields
    /// (side to move, castling, ...) are ignored.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Self::empty();
        let placement = fen.split_whitespace().next().unwrap_or_default();
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount(ranks.len()));
        }
        for (row, rank_string) in ranks.iter().enumerate() {
            let mut col = 0;
            for piece_char in rank_string.chars() {
                if let Some(empty) = piece_char.to_digit(10) {
                    col += empty as usize;
                    continue;
                }
                let piece = Piece::from_fen_char(piece_char).ok_or(FenError::UnknownPiece(piece_char))?;
                if col < 8 {
                    board.place(piece, Square::new(row as i8, col as i8));
                }
                col += 1;
            }
            if col != 8 {
                return Err(FenError::FileCount { rank: 8 - row, files: col });
            }
        }
        Ok(board)
    }
    pub fn fen(&self) -> String {
        let mut fen = String::new();
        for (row, rank) in self.squares.iter().enumerate() {
            let mut empty = 0;
            for square in rank {
                match square {
                    Some(piece) => {
                        if empty != 0 {
                            fen.push_str(&empty.to_string());
                            empty = 0;
                        }
                        fen.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty != 0 {
                fen.push_str(&empty.to_string());
            }
            if row != 7 {
                fen.push('/');
            }
        }
        fen
    }

    pub fn is_in_bounds(&self, square: Square) -> bool {
        square.is_in_bounds()
    }
    /// The occupant of `square`. Off-board squares read as empty.
    pub fn get(&self, square: Square) -> Option<Piece> {
        if !square.is_in_bounds() {
            return None;
        }
        self.squares[square.row as usize][square.col as usize]
    }
    /// Puts `piece` on `square`, replacing whatever stood there.
    pub fn place(&mut self, piece: Piece, square: Square) {
        self.set_square(square, Some(piece));
    }
    pub fn clear(&mut self, square: Square) {
        self.set_square(square, None);
    }
    /// Moves the occupant of `from` to `to` and returns the piece it replaced.
    /// Does not check legality.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.get(from)?;
        let captured_piece = self.get(to);
        self.clear(from);
        self.place(piece, to);
        captured_piece
    }
    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).filter(|piece| piece.side == side).map(|piece| (square, piece)))
    }
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces(side).find(|(_, piece)| piece.piece_type == PieceType::King).map(|(square, _)| square)
    }

    fn set_square(&mut self, square: Square, piece: Option<Piece>) {
        if square.is_in_bounds() {
            self.squares[square.row as usize][square.col as usize] = piece;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::start_pos()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, rank) in self.squares.iter().enumerate() {
            write!(f, "{}", 8 - row)?;
            for square in rank {
                match square {
                    Some(piece) => write!(f, " {}", piece.glyph())?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, " ")?;
        for file in 'a'..='h' {
            write!(f, " {}", file)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Display, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Side {
    White = 0,
    Black,
}

impl Side {
    pub fn enemy(&self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
    pub fn back_row(&self) -> i8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }
    /// Row the side's pawns start on. A pawn standing here may advance two squares.
    pub fn pawn_row(&self) -> i8 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }
}

impl<T, const N: usize> Index<Side> for [T; N] {
    type Output = T;

    fn index(&self, index: Side) -> &Self::Output {
        &self[index as usize]
    }
}
