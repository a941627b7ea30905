use std::ops::{Add, Neg};

use serde::{Deserialize, Serialize};

use super::bit_board::{BOARD_COLS, BOARD_ROWS, BOARD_WIDTH, CELL_COUNT};

/// A `(row, col)` coordinate.
///
/// The same type is used for absolute cells on the board and for relative card offsets,
/// so both components are signed. Only positions with `0 <= row, col <= 4` are on the
/// board; see [`Position::is_valid`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Position {
    row: i8,
    col: i8,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Converts a cell index (`row * 5 + col`) into a position.
    #[inline]
    #[must_use]
    #[expect(clippy::cast_possible_wrap)]
    pub const fn from_index(index: u8) -> Self {
        debug_assert!((index as usize) < CELL_COUNT);
        Self {
            row: (index / BOARD_WIDTH) as i8,
            col: (index % BOARD_WIDTH) as i8,
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Returns the cell index of this position, or `None` if it is off the board.
    #[inline]
    #[must_use]
    #[expect(clippy::cast_sign_loss)]
    pub const fn index(self) -> Option<u8> {
        if self.is_valid() {
            Some(self.row as u8 * BOARD_WIDTH + self.col as u8)
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        0 <= self.row && self.row < BOARD_ROWS && 0 <= self.col && self.col < BOARD_COLS
    }

    /// Rotates an offset by 180 degrees.
    #[inline]
    #[must_use]
    pub const fn negate(self) -> Self {
        Self::new(-self.row, -self.col)
    }

    /// Iterates over all 25 cells in index order.
    #[expect(clippy::cast_possible_truncation)]
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT as u8).map(Position::from_index)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Neg for Position {
    type Output = Position;

    fn neg(self) -> Position {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_bounds() {
        assert!(Position::new(0, 0).is_valid());
        assert!(Position::new(4, 4).is_valid());
        assert!(!Position::new(-1, 0).is_valid());
        assert!(!Position::new(0, 5).is_valid());
        assert!(!Position::new(5, 2).is_valid());
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, pos) in Position::all().enumerate() {
            assert_eq!(pos.index(), Some(u8::try_from(i).unwrap()));
            assert_eq!(Position::from_index(u8::try_from(i).unwrap()), pos);
        }
        assert_eq!(Position::new(2, -1).index(), None);
    }

    #[test]
    fn test_add_and_negate() {
        let p = Position::new(3, 1);
        let offset = Position::new(-1, 2);
        assert_eq!(p + offset, Position::new(2, 3));
        assert_eq!(-offset, Position::new(1, -2));
        assert_eq!(p + offset + -offset, p);
    }
}
