use num_enum::IntoPrimitive;

use super::square::{Offset, Square};
use crate::board::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive)]
#[repr(u8)]
pub enum Direction {
    North,
    West,
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
    East,
    South,
}

// North points at row 0, black's back rank
const DIRECTION_VALUES: [Offset; 8] = [
    Offset::new(-1, 0),
    Offset::new(0, -1),
    Offset::new(-1, -1),
    Offset::new(-1, 1),
    Offset::new(1, -1),
    Offset::new(1, 1),
    Offset::new(0, 1),
    Offset::new(1, 0),
];

impl Direction {
    pub fn value(self) -> Offset {
        DIRECTION_VALUES[u8::from(self) as usize]
    }
    pub const fn all() -> [Direction; 8] {
        [
            Direction::North,
            Direction::West,
            Direction::NorthWest,
            Direction::NorthEast,
            Direction::SouthWest,
            Direction::SouthEast,
            Direction::East,
            Direction::South,
        ]
    }
    pub const fn diagonal() -> [Direction; 4] {
        [Direction::NorthWest, Direction::NorthEast, Direction::SouthWest, Direction::SouthEast]
    }
    pub fn is_diagonal(self) -> bool {
        Direction::diagonal().contains(&self)
    }
    /// The direction a pawn of `side` advances in.
    pub fn up(side: Side) -> Direction {
        match side {
            Side::White => Direction::North,
            Side::Black => Direction::South,
        }
    }
    /// The line leading from `from` to `to`, if the squares share a row, a
    /// column or a diagonal. Returns `None` for a null move.
    pub fn from_squares(from: Square, to: Square) -> Option<Direction> {
        let delta = to - from;
        let aligned = delta.row == 0 || delta.col == 0 || delta.row.abs() == delta.col.abs();
        if delta == Offset::new(0, 0) || !aligned {
            return None;
        }
        let step = delta.signum();
        Direction::all().into_iter().find(|direction| direction.value() == step)
    }
}
