use derive_more::{Add, Mul};
use std::fmt::Display;
use std::ops::Sub;
use std::str::FromStr;

use crate::error::ParseSquareError;

const FILES: &str = "abcdefgh";

/// A (row, col) coordinate. Row 0 is black's back rank, row 7 is white's.
///
/// Coordinates are signed so that stepping off the board produces a square
/// that fails `is_in_bounds` instead of wrapping around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

/// Difference between two squares, or a single step along a line.
#[derive(Add, Mul, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Square {
        Square { row, col }
    }
    pub const fn is_in_bounds(&self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8).flat_map(|row| (0..8).map(move |col| Square::new(row, col)))
    }
    pub fn offset(self, row: i8, col: i8) -> Square {
        self + Offset::new(row, col)
    }
}

impl Offset {
    pub const fn new(row: i8, col: i8) -> Offset {
        Offset { row, col }
    }
    /// Chebyshev length, the number of king steps the offset spans.
    pub fn distance(&self) -> i8 {
        self.row.abs().max(self.col.abs())
    }
    pub fn signum(&self) -> Offset {
        Offset::new(self.row.signum(), self.col.signum())
    }
}

impl std::ops::Add<Offset> for Square {
    type Output = Square;

    fn add(self, rhs: Offset) -> Self::Output {
        Square::new(self.row.saturating_add(rhs.row), self.col.saturating_add(rhs.col))
    }
}
impl Sub for Square {
    type Output = Offset;

    fn sub(self, rhs: Square) -> Self::Output {
        Offset::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseSquareError::Malformed(s.to_string()));
        };
        let col = FILES.chars().position(|f| f == file.to_ascii_lowercase()).ok_or(ParseSquareError::InvalidFile(file))?;
        let rank_number = rank.to_digit(10).filter(|r| (1..=8).contains(r)).ok_or(ParseSquareError::InvalidRank(rank))?;
        Ok(Square::new(8 - rank_number as i8, col as i8))
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_in_bounds() {
            return write!(f, "({}, {})", self.row, self.col);
        }
        let file = FILES.as_bytes()[self.col as usize] as char;
        write!(f, "{}{}", file, 8 - self.row)
    }
}
