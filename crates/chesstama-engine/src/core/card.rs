use std::{fmt, str::FromStr};

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use super::{
    bit_board::{BOARD_COLS, BOARD_ROWS, CellMask, GRID_LEN},
    player::Player,
    position::Position,
};

/// Largest number of destinations printed on a single card.
pub const MAX_CARD_MOVES: usize = 4;

/// Centre cell of the 5x5 card template: the square the moving piece stands on.
pub const CARD_CENTER: Position = Position::new(2, 2);

/// Relative destinations of one card for one side.
pub type RelativeMoves = ArrayVec<Position, MAX_CARD_MOVES>;

/// A movement card.
///
/// Each card carries a template mask using the same bit layout as [`CellMask`]: the
/// template is a 5x5 grid centred on the moving piece, drawn from P1's point of view
/// (row 0 is "forward").
///
/// ```text
///  DRAGON           TIGER            MONKEY
///  .  .  .  .  .    .  .  X  .  .    .  .  .  .  .
///  X  .  .  .  X    .  .  .  .  .    .  X  .  X  .
///  .  .  M  .  .    .  .  M  .  .    .  .  M  .  .
///  .  X  .  X  .    .  .  X  .  .    .  X  .  X  .
///  .  .  .  .  .    .  .  .  .  .    .  .  .  .  .
/// ```
///
/// `EMPTY` is the sentinel placed in an upcoming-card slot that holds no card; it has no
/// moves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Card {
    #[display("DRAGON")]
    Dragon,
    #[display("BOAR")]
    Boar,
    #[display("MANTIS")]
    Mantis,
    #[display("ELEPHANT")]
    Elephant,
    #[display("ROOSTER")]
    Rooster,
    #[display("COBRA")]
    Cobra,
    #[display("OX")]
    Ox,
    #[display("RABBIT")]
    Rabbit,
    #[display("TIGER")]
    Tiger,
    #[display("CRAB")]
    Crab,
    #[display("GOOSE")]
    Goose,
    #[display("CRANE")]
    Crane,
    #[display("HORSE")]
    Horse,
    #[display("EEL")]
    Eel,
    #[display("FROG")]
    Frog,
    #[display("MONKEY")]
    Monkey,
    #[display("EMPTY")]
    Empty,
}

/// Colour printed on a card. The colour of the side card picks the first player of a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum CardColor {
    Red,
    Blue,
}

impl CardColor {
    /// Side that moves first when the side card has this colour.
    #[must_use]
    pub fn starting_player(self) -> Player {
        match self {
            CardColor::Blue => Player::P1,
            CardColor::Red => Player::P2,
        }
    }
}

const CARD_MASKS: [u32; Card::LEN + 1] = [
    0x0440_A000, // DRAGON
    0x0114_0000, // BOAR
    0x0280_4000, // MANTIS
    0x0294_0000, // ELEPHANT
    0x0094_8000, // ROOSTER
    0x0090_2000, // COBRA
    0x0104_4000, // OX
    0x0082_8000, // RABBIT
    0x2000_4000, // TIGER
    0x0122_0000, // CRAB
    0x0214_2000, // GOOSE
    0x0100_A000, // CRANE
    0x0110_4000, // HORSE
    0x0204_8000, // EEL
    0x0220_2000, // FROG
    0x0280_A000, // MONKEY
    0x0000_0000, // EMPTY
];

impl Card {
    /// Number of playable cards (`EMPTY` excluded).
    pub const LEN: usize = 16;

    /// All playable cards, in catalog order.
    pub const ALL: [Card; Card::LEN] = [
        Card::Dragon,
        Card::Boar,
        Card::Mantis,
        Card::Elephant,
        Card::Rooster,
        Card::Cobra,
        Card::Ox,
        Card::Rabbit,
        Card::Tiger,
        Card::Crab,
        Card::Goose,
        Card::Crane,
        Card::Horse,
        Card::Eel,
        Card::Frog,
        Card::Monkey,
    ];

    /// Template mask of this card.
    #[inline]
    #[must_use]
    pub const fn mask(self) -> CellMask {
        CellMask::from_bits(CARD_MASKS[self as usize])
    }

    #[inline]
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Card::Empty
    }

    /// Returns the colour of a playable card, `None` for `EMPTY`.
    #[must_use]
    pub fn color(self) -> Option<CardColor> {
        match self {
            Card::Dragon
            | Card::Boar
            | Card::Mantis
            | Card::Elephant
            | Card::Rooster
            | Card::Cobra
            | Card::Ox
            | Card::Rabbit => Some(CardColor::Red),
            Card::Tiger
            | Card::Crab
            | Card::Goose
            | Card::Crane
            | Card::Horse
            | Card::Eel
            | Card::Frog
            | Card::Monkey => Some(CardColor::Blue),
            Card::Empty => None,
        }
    }

    /// Template cells of the card, in decode order.
    pub fn absolute_moves(self) -> impl Iterator<Item = Position> {
        self.mask().positions()
    }

    /// Offsets a piece of `player` may move by with this card.
    ///
    /// P1's offsets are the template cells minus the centre. The hands face each other
    /// across the board, so P2's offsets are P1's rotated by 180 degrees.
    #[must_use]
    pub fn relative_moves(self, player: Player) -> RelativeMoves {
        self.absolute_moves()
            .map(|cell| {
                let offset = cell + -CARD_CENTER;
                match player {
                    Player::P1 => offset,
                    Player::P2 => -offset,
                }
            })
            .collect()
    }

    /// Whether `to - from` is one of this card's offsets for `player`.
    #[must_use]
    pub fn is_valid_move(self, player: Player, from: Position, to: Position) -> bool {
        self.relative_moves(player)
            .iter()
            .any(|&offset| from + offset == to)
    }

    /// Looks up the card whose template equals `mask`.
    #[must_use]
    pub fn from_mask(mask: u32) -> Option<Card> {
        Card::ALL
            .into_iter()
            .chain([Card::Empty])
            .find(|card| card.mask().bits() == mask)
    }

    /// Encodes a template drawn as a grid (`true` = reachable cell) into a card mask.
    #[must_use]
    pub fn mask_from_grid(grid: &[[bool; GRID_LEN]; GRID_LEN]) -> u32 {
        let mut mask = CellMask::EMPTY;
        for (row, cells) in (0..BOARD_ROWS).zip(grid) {
            for (col, &set) in (0..BOARD_COLS).zip(cells) {
                if set {
                    mask.insert(Position::new(row, col));
                }
            }
        }
        mask.bits()
    }
}

/// Error returned when parsing an unknown card name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown card name: {name}")]
pub struct ParseCardError {
    name: String,
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Card::ALL
            .into_iter()
            .chain([Card::Empty])
            .find(|card| card.to_string().eq_ignore_ascii_case(name))
            .ok_or_else(|| ParseCardError {
                name: name.to_owned(),
            })
    }
}

/// Renders the card template with `M` for the moving piece and `X` for destinations.
#[derive(Debug, Clone, Copy)]
pub struct CardDiagram(pub Card);

impl fmt::Display for CardDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mask = self.0.mask();
        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                let pos = Position::new(row, col);
                let c = if pos == CARD_CENTER {
                    'M'
                } else if mask.contains(pos) {
                    'X'
                } else {
                    '.'
                };
                if col > 0 {
                    f.write_str("  ")?;
                }
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
