//! Game logic built on top of [`crate::core`].
//!
//! - [`Board`] - Full game state and the [`Board::make_move`] state machine
//! - [`BoardBuilder`] - Stages arbitrary positions for tests and tools
//! - [`Move`], [`CardMove`], [`PiecePosition`] - Move descriptors
//! - [`Deal`] - Seeded random card deals
//!
//! # Turn Flow
//!
//! 1. The side to move picks a piece and one of its two hand cards
//! 2. The piece jumps by one of the card's offsets (mirrored for P2)
//! 3. Captures and win conditions are resolved
//! 4. The played card becomes the opponent's upcoming card and the mover takes its own
//!    upcoming card into hand
//! 5. The turn passes unless the game just ended

pub use self::{board::*, deal::*, moves::*};

mod board;
mod deal;
mod moves;
