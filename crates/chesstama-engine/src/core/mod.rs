pub use self::{bit_board::*, board_literal::*, card::*, player::*, position::*};

pub(crate) mod bit_board;
pub(crate) mod board_literal;
pub(crate) mod card;
pub(crate) mod player;
pub(crate) mod position;
