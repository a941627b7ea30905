use serde::{Deserialize, Serialize};

use super::position::Position;

/// One of the two sides.
///
/// P1 starts on the bottom row (row 4) and moves "up" towards row 0, P2 sits on the top
/// row facing it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::P1, Player::P2];

    #[inline]
    #[must_use]
    pub fn opponent(self) -> Self {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }

    /// Cell the king of this side starts on.
    ///
    /// The opponent wins by moving its king onto this cell.
    #[inline]
    #[must_use]
    pub fn king_home(self) -> Position {
        match self {
            Player::P1 => Position::new(4, 2),
            Player::P2 => Position::new(0, 2),
        }
    }

    /// Parses the `1`/`2` suffix used by board literal tokens.
    #[must_use]
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(Player::P1),
            '2' => Some(Player::P2),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_digit(self) -> char {
        match self {
            Player::P1 => '1',
            Player::P2 => '2',
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum PieceType {
    #[display("KING")]
    King,
    #[display("PAWN")]
    Pawn,
}

impl PieceType {
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Pawn => 'P',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::ALL {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_king_homes_face_each_other() {
        assert_eq!(Player::P1.king_home(), Position::new(4, 2));
        assert_eq!(Player::P2.king_home(), Position::new(0, 2));
    }

    #[test]
    fn test_digit_roundtrip() {
        for player in Player::ALL {
            assert_eq!(Player::from_digit(player.as_digit()), Some(player));
        }
        assert_eq!(Player::from_digit('3'), None);
    }
}
