use crate::board::Square;
use crate::error::ParseSquareError;
use std::fmt::Display;
use std::str::FromStr;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }
}

/// Parses long algebraic notation, e.g. `e2e4`.
impl FromStr for Move {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 4 || !s.is_ascii() {
            return Err(ParseSquareError::Malformed(s.to_string()));
        }
        Ok(Move::new(s[0..2].parse()?, s[2..4].parse()?))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl PartialOrd for Move {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Move {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let from_order = self.from.cmp(&other.from);
        let to_order = self.to.cmp(&other.to);

        from_order.then(to_order)
    }
}
