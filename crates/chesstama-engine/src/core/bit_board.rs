use std::fmt;

use serde::{Deserialize, Serialize};

use super::position::Position;

pub const BOARD_ROWS: i8 = 5;
pub const BOARD_COLS: i8 = 5;
pub(crate) const BOARD_WIDTH: u8 = 5;
/// Side length of the grid, for sizing arrays.
pub const GRID_LEN: usize = 5;
pub const CELL_COUNT: usize = 25;

/// Highest bit position of the packed word; cell index `i` lives at bit `BOARD_INDEX_MAX - i`.
pub const BOARD_INDEX_MAX: u32 = 31;

// Cells 0..=24 occupy bits 31..=7, bits 6..=0 are never set.
const PLAYABLE_MASK: u32 = !((1 << (32 - CELL_COUNT)) - 1);

/// Occupancy flags for the 5x5 grid packed into a `u32`.
///
/// # Bit Layout (MSB to LSB)
///
/// ```text
///               P2
/// Col     0    1    2    3    4
/// Row  +----+----+----+----+----+
///  0   | 31 | 30 | 29 | 28 | 27 |
///      +----+----+----+----+----+
///  1   | 26 | 25 | 24 | 23 | 22 |
///      +----+----+----+----+----+
///  2   | 21 | 20 | 19 | 18 | 17 |
///      +----+----+----+----+----+
///  3   | 16 | 15 | 14 | 13 | 12 |
///      +----+----+----+----+----+
///  4   | 11 | 10 |  9 |  8 |  7 |
///      +----+----+----+----+----+
///               P1
/// ```
///
/// Cell `(row, col)` has index `row * 5 + col` and is stored at bit `31 - index`, so the
/// grid reads left to right, top to bottom, starting from the most significant bit. The
/// low 7 bits are unused.
///
/// Decoding walks the set bits from the least significant one upwards, which yields
/// cells in *descending* index order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellMask {
    bits: u32,
}

impl fmt::Debug for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CellMask(0x{:08X})", self.bits)
    }
}

impl Serialize for CellMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Format: "0x00000200"
        serializer.serialize_str(&format!("0x{:08X}", self.bits))
    }
}

impl<'de> Deserialize<'de> for CellMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(&s);
        let bits = u32::from_str_radix(hex, 16)
            .map_err(|e| serde::de::Error::custom(format!("invalid cell mask: {s} ({e})")))?;
        if bits & !PLAYABLE_MASK != 0 {
            return Err(serde::de::Error::custom(format!(
                "cell mask {s} sets bits outside the 5x5 grid"
            )));
        }
        Ok(CellMask { bits })
    }
}

impl CellMask {
    pub const EMPTY: Self = Self { bits: 0 };

    /// Wraps raw bits. Bits below the grid are discarded.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            bits: bits & PLAYABLE_MASK,
        }
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Mask with the single bit of `pos` set, or an empty mask if `pos` is off the board.
    #[inline]
    #[must_use]
    pub const fn from_position(pos: Position) -> Self {
        match pos.index() {
            Some(index) => Self {
                bits: bit_for_index(index),
            },
            None => Self::EMPTY,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    #[inline]
    #[must_use]
    pub const fn count(self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        match pos.index() {
            Some(index) => self.bits & bit_for_index(index) != 0,
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: CellMask) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[inline]
    pub fn insert(&mut self, pos: Position) {
        *self = self.union(Self::from_position(pos));
    }

    #[inline]
    pub fn remove(&mut self, pos: Position) {
        self.bits &= !Self::from_position(pos).bits;
    }

    /// Position of the lowest set bit, i.e. the set cell with the highest index.
    #[inline]
    #[must_use]
    pub fn lowest(self) -> Option<Position> {
        if self.bits == 0 {
            return None;
        }
        Some(Position::from_index(index_of_lowest_bit(self.bits)))
    }

    /// Decodes the set cells by repeatedly extracting the lowest set bit.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let mut bits = self.bits;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = index_of_lowest_bit(bits);
            // Clear the lowest set bit
            bits &= bits - 1;
            Some(Position::from_index(index))
        })
    }
}

impl FromIterator<Position> for CellMask {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        iter.into_iter()
            .fold(CellMask::EMPTY, |mask, pos| mask.union(CellMask::from_position(pos)))
    }
}

#[inline]
const fn bit_for_index(index: u8) -> u32 {
    1 << (BOARD_INDEX_MAX - index as u32)
}

#[inline]
#[expect(clippy::cast_possible_truncation)]
const fn index_of_lowest_bit(bits: u32) -> u8 {
    debug_assert!(bits != 0);
    (BOARD_INDEX_MAX - bits.trailing_zeros()) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_order_matches_layout() {
        assert_eq!(CellMask::from_position(Position::new(0, 0)).bits(), 0x8000_0000);
        assert_eq!(CellMask::from_position(Position::new(0, 2)).bits(), 0x2000_0000);
        assert_eq!(CellMask::from_position(Position::new(4, 2)).bits(), 0x0000_0200);
        assert_eq!(CellMask::from_position(Position::new(4, 4)).bits(), 0x0000_0080);
        assert!(CellMask::from_position(Position::new(5, 0)).is_empty());
    }

    #[test]
    fn test_positions_extracts_lowest_bit_first() {
        // P1 pawns of the standard layout: (4,0), (4,1), (4,3), (4,4)
        let mask = CellMask::from_bits(0x0000_0D80);
        let positions: Vec<_> = mask.positions().collect();
        assert_eq!(
            positions,
            vec![
                Position::new(4, 4),
                Position::new(4, 3),
                Position::new(4, 1),
                Position::new(4, 0),
            ]
        );
        assert_eq!(mask.lowest(), Some(Position::new(4, 4)));
        assert_eq!(mask.count(), 4);
    }

    #[test]
    fn test_from_iter_and_contains() {
        let cells = [Position::new(0, 1), Position::new(2, 2), Position::new(3, 4)];
        let mask: CellMask = cells.iter().copied().collect();
        for pos in Position::all() {
            assert_eq!(mask.contains(pos), cells.contains(&pos), "at {pos}");
        }
        assert!(!mask.contains(Position::new(-1, 1)));

        let mut mask = mask;
        mask.remove(Position::new(2, 2));
        mask.remove(Position::new(4, 4));
        assert_eq!(mask.count(), 2);
        assert!(!mask.contains(Position::new(2, 2)));
    }

    #[test]
    fn test_from_bits_discards_unused_bits() {
        let mask = CellMask::from_bits(0x0000_027F);
        assert_eq!(mask.bits(), 0x0000_0200);
        assert_eq!(mask.positions().count(), 1);
    }

    #[test]
    fn test_serde_hex_string() {
        let mask = CellMask::from_bits(0xD800_0000);
        let serialized = serde_json::to_string(&mask).unwrap();
        assert_eq!(serialized, "\"0xD8000000\"");
        let deserialized: CellMask = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, mask);

        assert!(serde_json::from_str::<CellMask>("\"0x00000001\"").is_err());
        assert!(serde_json::from_str::<CellMask>("\"zz\"").is_err());
    }
}
