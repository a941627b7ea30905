//! Rules engine for Chesstama, a two-player card-driven strategy game on a 5x5 grid.
//!
//! The crate is split in two layers:
//!
//! - [`core`] - Plain data: grid geometry, [`Position`], [`CellMask`] bitboards, the
//!   [`Card`] catalog and board literals
//! - [`engine`] - Game logic: the [`Board`] state machine, move descriptors and random
//!   card deals
//!
//! # Example
//!
//! ```
//! use chesstama_engine::{Board, Card, Move, PieceType, Player, Position};
//!
//! let mut board = Board::new();
//!
//! // P1 advances the left pawn diagonally with MONKEY
//! let mv = Move::new(
//!     Player::P1,
//!     Card::Monkey,
//!     PieceType::Pawn,
//!     Position::new(4, 1),
//!     Position::new(3, 2),
//! );
//! board.make_move(&mv).unwrap();
//!
//! assert_eq!(board.current_player(), Player::P2);
//! assert_eq!(board.upcoming_card(Player::P2), Card::Monkey);
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// A move rejected by [`Board::make_move`] because it breaks the rules.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMoveError {
    #[display("move positions out of bounds: from {from}, to {to}")]
    OutOfBounds { from: Position, to: Position },
    #[display("move played by {mover} while {current} is to move")]
    WrongPlayer { mover: Player, current: Player },
    #[display("no {player} piece at {from}")]
    NoPieceAtSource { player: Player, from: Position },
    #[display("card {card} is not in the hand of {player}")]
    CardNotInHand { player: Player, card: Card },
    #[display("card {card} cannot move a {player} piece from {from} to {to}")]
    UnreachableDestination {
        player: Player,
        card: Card,
        from: Position,
        to: Position,
    },
    #[display("{to} is occupied by a {player} piece")]
    OwnPieceAtDestination { player: Player, to: Position },
}

/// A move attempted on a board that already reached a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("game is over, winner: {winner:?}")]
pub struct GameOverError {
    pub winner: Option<Player>,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum MakeMoveError {
    #[display("{_0}")]
    GameOver(GameOverError),
    #[display("invalid move: {_0}")]
    InvalidMove(InvalidMoveError),
}
