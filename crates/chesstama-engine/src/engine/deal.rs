use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
    seq::SliceRandom,
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::{
    card::{Card, CardColor},
    player::Player,
};

use super::board::{Board, BoardBuilder, Hand};

/// Cards drawn for one game: two per side plus the side card.
///
/// Five distinct cards are drawn from the 16-card catalog. The colour of the side card
/// decides who opens (blue: P1, red: P2); the opening side receives it as its upcoming
/// card and the other side's upcoming slot starts out [`Card::Empty`].
///
/// # Example
///
/// ```
/// use chesstama_engine::{Deal, DealSeed};
///
/// let seed: DealSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
/// let deal = Deal::with_seed(seed);
/// let board = deal.board();
///
/// assert_eq!(board.current_player(), deal.starting_player());
/// assert_eq!(board.upcoming_card(deal.starting_player()), deal.side_card);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub p1_cards: Hand,
    pub p2_cards: Hand,
    pub side_card: Card,
}

/// Seed for deterministic deals, serialized as a 32-digit hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealSeed([u8; 16]);

impl DealSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for DealSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

/// Error returned when a deal seed is not a 32-digit hex string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid hex seed: {input}")]
pub struct ParseDealSeedError {
    input: String,
}

impl FromStr for DealSeed {
    type Err = ParseDealSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ParseDealSeedError {
            input: s.to_owned(),
        };
        if s.len() != 32 {
            return Err(error());
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| error())?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for DealSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DealSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Distribution<DealSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> DealSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        DealSeed(seed)
    }
}

impl Deal {
    /// Deals with a random seed.
    #[must_use]
    pub fn random() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Shuffles the catalog with a PCG generator seeded by `seed` and takes the first five
    /// cards.
    #[must_use]
    pub fn with_seed(seed: DealSeed) -> Self {
        let mut rng = Pcg32::from_seed(seed.0);
        let mut cards = Card::ALL;
        cards.shuffle(&mut rng);
        Self {
            p1_cards: [cards[0], cards[1]],
            p2_cards: [cards[2], cards[3]],
            side_card: cards[4],
        }
    }

    #[must_use]
    pub fn starting_player(&self) -> Player {
        self.side_card
            .color()
            .map_or(Player::P1, CardColor::starting_player)
    }

    /// Standard piece layout with this deal's cards.
    #[must_use]
    pub fn board(&self) -> Board {
        let first = self.starting_player();
        BoardBuilder::new()
            .cards(Player::P1, self.p1_cards)
            .cards(Player::P2, self.p2_cards)
            .upcoming(first, self.side_card)
            .upcoming(first.opponent(), Card::Empty)
            .current_player(first)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(byte: u8) -> DealSeed {
        DealSeed::from_bytes([byte; 16])
    }

    #[test]
    fn test_deal_draws_distinct_cards() {
        for byte in 0..32 {
            let deal = Deal::with_seed(seed(byte));
            let mut cards = vec![
                deal.p1_cards[0],
                deal.p1_cards[1],
                deal.p2_cards[0],
                deal.p2_cards[1],
                deal.side_card,
            ];
            assert!(cards.iter().all(|c| !c.is_empty()));
            cards.sort();
            cards.dedup();
            assert_eq!(cards.len(), 5);
        }
    }

    #[test]
    fn test_deal_is_deterministic() {
        let a = Deal::with_seed(seed(7));
        let b = Deal::with_seed(seed(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_side_card_colour_picks_first_player() {
        for byte in 0..32 {
            let deal = Deal::with_seed(seed(byte));
            let expected = match deal.side_card.color() {
                Some(CardColor::Blue) => Player::P1,
                Some(CardColor::Red) => Player::P2,
                None => unreachable!(),
            };
            let board = deal.board();
            assert_eq!(board.current_player(), expected);
            assert_eq!(board.upcoming_card(expected), deal.side_card);
            assert_eq!(board.upcoming_card(expected.opponent()), Card::Empty);
            assert_eq!(board.cards(Player::P1), deal.p1_cards);
            assert_eq!(board.cards(Player::P2), deal.p2_cards);
        }
    }

    #[test]
    fn test_seed_hex_format() {
        let seed = DealSeed::from_bytes([
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98, 0x76, 0x54,
            0x32, 0x10,
        ]);
        let serialized = serde_json::to_string(&seed).unwrap();
        assert_eq!(serialized, "\"0123456789abcdeffedcba9876543210\"");
        let deserialized: DealSeed = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, seed);

        assert!("0123".parse::<DealSeed>().is_err());
        assert!(
            "ghijklmnopqrstuvwxyzghijklmnopqr"
                .parse::<DealSeed>()
                .is_err()
        );
    }

    #[test]
    fn test_random_seed_roundtrip() {
        let seed: DealSeed = rand::rng().random();
        let parsed: DealSeed = seed.to_string().parse().unwrap();
        assert_eq!(parsed, seed);
    }
}
