use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{card::Card, player::PieceType, player::Player, position::Position};

/// A fully specified move: who plays which card to move which piece from where to where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    player: Player,
    card: Card,
    piece_type: PieceType,
    from: Position,
    to: Position,
}

impl Move {
    #[must_use]
    pub const fn new(
        player: Player,
        card: Card,
        piece_type: PieceType,
        from: Position,
        to: Position,
    ) -> Self {
        Self {
            player,
            card,
            piece_type,
            from,
            to,
        }
    }

    #[inline]
    #[must_use]
    pub const fn player(&self) -> Player {
        self.player
    }

    #[inline]
    #[must_use]
    pub const fn card(&self) -> Card {
        self.card
    }

    #[inline]
    #[must_use]
    pub const fn piece_type(&self) -> PieceType {
        self.piece_type
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Position {
        self.from
    }

    #[inline]
    #[must_use]
    pub const fn to(&self) -> Position {
        self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} -> {}",
            self.player, self.card, self.piece_type, self.from, self.to
        )
    }
}

/// A card from a hand paired with one of its relative offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardMove {
    pub card: Card,
    pub relative_move: Position,
}

impl CardMove {
    #[must_use]
    pub const fn new(card: Card, relative_move: Position) -> Self {
        Self {
            card,
            relative_move,
        }
    }
}

/// A piece kind standing on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PiecePosition {
    pub piece_type: PieceType,
    pub position: Position,
}

impl PiecePosition {
    #[must_use]
    pub const fn new(piece_type: PieceType, position: Position) -> Self {
        Self {
            piece_type,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mv = Move::new(
            Player::P2,
            Card::Tiger,
            PieceType::King,
            Position::new(0, 2),
            Position::new(2, 2),
        );
        assert_eq!(mv.to_string(), "P2 TIGER KING (0, 2) -> (2, 2)");
    }

    #[test]
    fn test_move_serde() {
        let mv = Move::new(
            Player::P1,
            Card::Monkey,
            PieceType::Pawn,
            Position::new(4, 1),
            Position::new(3, 2),
        );
        let json = serde_json::to_value(mv).unwrap();
        assert_eq!(json["card"], "MONKEY");
        assert_eq!(json["piece_type"], "PAWN");
        assert_eq!(json["from"]["row"], 4);
        let back: Move = serde_json::from_value(json).unwrap();
        assert_eq!(back, mv);
    }
}
