use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::{
    GameOverError, InvalidMoveError, MakeMoveError,
    core::{
        bit_board::CellMask,
        board_literal::{BoardLiteral, MAX_PAWNS},
        card::{Card, MAX_CARD_MOVES},
        player::{PieceType, Player},
        position::Position,
    },
};

use super::moves::{CardMove, Move, PiecePosition};

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 2;

/// Cards held by one side.
pub type Hand = [Card; HAND_SIZE];

pub type PawnPositions = ArrayVec<Position, { MAX_PAWNS as usize }>;
pub type PiecePositions = ArrayVec<PiecePosition, { MAX_PAWNS as usize + 1 }>;
pub type CardMoves = ArrayVec<CardMove, { HAND_SIZE * MAX_CARD_MOVES }>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct Side {
    king: CellMask,
    pawns: CellMask,
    cards: Hand,
    upcoming: Card,
}

impl Side {
    fn occupancy(&self) -> CellMask {
        self.king.union(self.pawns)
    }
}

/// Complete game state.
///
/// Pieces are stored as four [`CellMask`] bitboards (king and pawns of each side). Each
/// side holds two cards and has one upcoming-card slot which is either a card received
/// from the opponent's last move or [`Card::Empty`].
///
/// [`Board::make_move`] is the only operation that changes the state during play.
/// Speculative exploration works on clones; a clone shares no state with its source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    p1: Side,
    p2: Side,
    current_player: Player,
    game_over: bool,
    winner: Option<Player>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard opening: both kings and pawns on their home rows, P1 holding
    /// MONKEY/ELEPHANT with TIGER upcoming, P2 holding DRAGON/MANTIS, P1 to move.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    fn side(&self, player: Player) -> &Side {
        match player {
            Player::P1 => &self.p1,
            Player::P2 => &self.p2,
        }
    }

    fn side_mut(&mut self, player: Player) -> &mut Side {
        match player {
            Player::P1 => &mut self.p1,
            Player::P2 => &mut self.p2,
        }
    }

    #[inline]
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[inline]
    #[must_use]
    pub fn king_mask(&self, player: Player) -> CellMask {
        self.side(player).king
    }

    #[inline]
    #[must_use]
    pub fn pawn_mask(&self, player: Player) -> CellMask {
        self.side(player).pawns
    }

    /// Cells occupied by any piece of `player`.
    #[inline]
    #[must_use]
    pub fn occupancy(&self, player: Player) -> CellMask {
        self.side(player).occupancy()
    }

    /// King cell of `player`, `None` once the king was captured.
    #[must_use]
    pub fn king_position(&self, player: Player) -> Option<Position> {
        self.side(player).king.lowest()
    }

    /// Pawn cells of `player`, highest cell index first.
    #[must_use]
    pub fn pawn_positions(&self, player: Player) -> PawnPositions {
        self.side(player)
            .pawns
            .positions()
            .take(MAX_PAWNS as usize)
            .collect()
    }

    /// King (if present) followed by the pawns.
    #[must_use]
    pub fn all_piece_positions(&self, player: Player) -> PiecePositions {
        self.king_position(player)
            .map(|pos| PiecePosition::new(PieceType::King, pos))
            .into_iter()
            .chain(
                self.pawn_positions(player)
                    .into_iter()
                    .map(|pos| PiecePosition::new(PieceType::Pawn, pos)),
            )
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn cards(&self, player: Player) -> Hand {
        self.side(player).cards
    }

    #[inline]
    #[must_use]
    pub fn upcoming_card(&self, player: Player) -> Card {
        self.side(player).upcoming
    }

    pub fn set_upcoming_card(&mut self, player: Player, card: Card) {
        self.side_mut(player).upcoming = card;
    }

    /// Every (card, offset) pair `player` can play from its hand, first card first.
    #[must_use]
    pub fn all_card_moves(&self, player: Player) -> CardMoves {
        self.cards(player)
            .into_iter()
            .flat_map(|card| {
                card.relative_moves(player)
                    .into_iter()
                    .map(move |offset| CardMove::new(card, offset))
            })
            .collect()
    }

    /// Moves `player` could make, ignoring whose turn it is.
    ///
    /// Pieces are enumerated king first, then card moves in hand order. Destinations that
    /// leave the board or hold one of `player`'s own pieces are skipped.
    #[must_use]
    pub fn candidate_moves_for(&self, player: Player) -> Vec<Move> {
        let own = self.occupancy(player);
        let card_moves = self.all_card_moves(player);
        let pieces = self.all_piece_positions(player);
        let mut moves = Vec::with_capacity(pieces.len() * card_moves.len());
        for piece in pieces {
            for card_move in &card_moves {
                let to = piece.position + card_move.relative_move;
                if !to.is_valid() || own.contains(to) {
                    continue;
                }
                moves.push(Move::new(
                    player,
                    card_move.card,
                    piece.piece_type,
                    piece.position,
                    to,
                ));
            }
        }
        moves
    }

    /// Moves available to the side to move. Empty once the game is over.
    #[must_use]
    pub fn candidate_moves(&self) -> Vec<Move> {
        if self.game_over {
            return vec![];
        }
        self.candidate_moves_for(self.current_player)
    }

    /// Piece placement of the board as a literal.
    #[must_use]
    pub fn literal(&self) -> BoardLiteral {
        BoardLiteral {
            p1_king: self.p1.king,
            p1_pawns: self.p1.pawns,
            p2_king: self.p2.king,
            p2_pawns: self.p2.pawns,
        }
    }

    /// Applies `mv` for the side to move.
    ///
    /// On error the board is left untouched.
    pub fn make_move(&mut self, mv: &Move) -> Result<(), MakeMoveError> {
        if self.game_over {
            return Err(GameOverError {
                winner: self.winner,
            }
            .into());
        }
        let piece_type = self.validate_move(mv)?;

        let mover = mv.player();
        let opponent = mover.opponent();
        let (from, to) = (mv.from(), mv.to());

        let mover_side = self.side_mut(mover);
        match piece_type {
            PieceType::King => mover_side.king = CellMask::from_position(to),
            PieceType::Pawn => {
                mover_side.pawns.remove(from);
                mover_side.pawns.insert(to);
            }
        }

        let opponent_side = self.side_mut(opponent);
        let mut game_over = false;
        if opponent_side.king.contains(to) {
            opponent_side.king = CellMask::EMPTY;
            game_over = true;
        } else if piece_type == PieceType::King && to == opponent.king_home() {
            // Pieces never share a cell, even on the final board.
            opponent_side.pawns.remove(to);
            game_over = true;
        } else {
            opponent_side.pawns.remove(to);
        }

        let played = mv.card();
        let mover_side = self.side_mut(mover);
        let kept = if mover_side.cards[0] == played {
            mover_side.cards[1]
        } else {
            mover_side.cards[0]
        };
        mover_side.cards = [kept, mover_side.upcoming];
        mover_side.upcoming = Card::Empty;
        self.side_mut(opponent).upcoming = played;

        if game_over {
            self.game_over = true;
            self.winner = Some(mover);
        } else {
            self.current_player = opponent;
        }
        Ok(())
    }

    fn validate_move(&self, mv: &Move) -> Result<PieceType, InvalidMoveError> {
        let (player, card, from, to) = (mv.player(), mv.card(), mv.from(), mv.to());
        if !from.is_valid() || !to.is_valid() {
            return Err(InvalidMoveError::OutOfBounds { from, to });
        }
        if player != self.current_player {
            return Err(InvalidMoveError::WrongPlayer {
                mover: player,
                current: self.current_player,
            });
        }

        let side = self.side(player);
        let piece_type = if side.king.contains(from) {
            PieceType::King
        } else if side.pawns.contains(from) {
            PieceType::Pawn
        } else {
            return Err(InvalidMoveError::NoPieceAtSource { player, from });
        };

        if card.is_empty() || !side.cards.contains(&card) {
            return Err(InvalidMoveError::CardNotInHand { player, card });
        }
        if !card.is_valid_move(player, from, to) {
            return Err(InvalidMoveError::UnreachableDestination {
                player,
                card,
                from,
                to,
            });
        }
        if side.occupancy().contains(to) {
            return Err(InvalidMoveError::OwnPieceAtDestination { player, to });
        }
        Ok(piece_type)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hand = |player: Player| {
            let [a, b] = self.cards(player);
            format!(
                "{player} cards: {a}, {b} (upcoming: {})",
                self.upcoming_card(player)
            )
        };
        writeln!(f, "{}", hand(Player::P2))?;
        write!(f, "{}", self.literal())?;
        writeln!(f, "{}", hand(Player::P1))?;
        match (self.game_over, self.winner) {
            (true, Some(winner)) => write!(f, "game over, {winner} wins"),
            (true, None) => write!(f, "game over"),
            (false, _) => write!(f, "{} to move", self.current_player),
        }
    }
}

/// Stages arbitrary positions. Every field defaults to the standard opening.
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    literal: BoardLiteral,
    p1_cards: Hand,
    p2_cards: Hand,
    p1_upcoming: Card,
    p2_upcoming: Card,
    current_player: Player,
    game_over: bool,
    winner: Option<Player>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    pub const P1_KING: CellMask = CellMask::from_bits(0x0000_0200);
    pub const P1_PAWNS: CellMask = CellMask::from_bits(0x0000_0D80);
    pub const P2_KING: CellMask = CellMask::from_bits(0x2000_0000);
    pub const P2_PAWNS: CellMask = CellMask::from_bits(0xD800_0000);

    #[must_use]
    pub fn new() -> Self {
        Self {
            literal: BoardLiteral {
                p1_king: Self::P1_KING,
                p1_pawns: Self::P1_PAWNS,
                p2_king: Self::P2_KING,
                p2_pawns: Self::P2_PAWNS,
            },
            p1_cards: [Card::Monkey, Card::Elephant],
            p2_cards: [Card::Dragon, Card::Mantis],
            p1_upcoming: Card::Tiger,
            p2_upcoming: Card::Empty,
            current_player: Player::P1,
            game_over: false,
            winner: None,
        }
    }

    #[must_use]
    pub fn king(mut self, player: Player, mask: CellMask) -> Self {
        match player {
            Player::P1 => self.literal.p1_king = mask,
            Player::P2 => self.literal.p2_king = mask,
        }
        self
    }

    #[must_use]
    pub fn pawns(mut self, player: Player, mask: CellMask) -> Self {
        match player {
            Player::P1 => self.literal.p1_pawns = mask,
            Player::P2 => self.literal.p2_pawns = mask,
        }
        self
    }

    /// Replaces all four piece masks.
    #[must_use]
    pub fn pieces(mut self, literal: BoardLiteral) -> Self {
        self.literal = literal;
        self
    }

    #[must_use]
    pub fn cards(mut self, player: Player, cards: Hand) -> Self {
        match player {
            Player::P1 => self.p1_cards = cards,
            Player::P2 => self.p2_cards = cards,
        }
        self
    }

    #[must_use]
    pub fn upcoming(mut self, player: Player, card: Card) -> Self {
        match player {
            Player::P1 => self.p1_upcoming = card,
            Player::P2 => self.p2_upcoming = card,
        }
        self
    }

    #[must_use]
    pub fn current_player(mut self, player: Player) -> Self {
        self.current_player = player;
        self
    }

    #[must_use]
    pub fn game_over(mut self, game_over: bool) -> Self {
        self.game_over = game_over;
        self
    }

    #[must_use]
    pub fn winner(mut self, winner: Option<Player>) -> Self {
        self.winner = winner;
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        let literal = self.literal;
        Board {
            p1: Side {
                king: literal.p1_king,
                pawns: literal.p1_pawns,
                cards: self.p1_cards,
                upcoming: self.p1_upcoming,
            },
            p2: Side {
                king: literal.p2_king,
                pawns: literal.p2_pawns,
                cards: self.p2_cards,
                upcoming: self.p2_upcoming,
            },
            current_player: self.current_player,
            game_over: self.game_over,
            winner: self.winner,
        }
    }
}
