//! Adversarial search over Chesstama boards.
//!
//! Two depth-limited engines share one contract:
//!
//! - [`MiniMax`] - Plain exhaustive minimax
//! - [`MiniMaxWithAlphaBeta`] - The same search with alpha-beta pruning; returns the same
//!   total score while visiting fewer nodes
//!
//! Both return a [`ScoreMoves`]: the best reachable score together with the line of moves
//! leading to it. Leaves are scored by a [`BoardEvaluator`](chesstama_evaluator::BoardEvaluator)
//! for the side to move at the leaf, like
//! [`Evaluator::board_value`](chesstama_evaluator::Evaluator::board_value). Engines built
//! with [`LeafPerspective::MaximizingSide`] score every leaf for the root's maximizing
//! side instead.
//!
//! # Search Model
//!
//! - Recursion is depth-first on the call stack, so `max_depth` bounds the stack depth
//! - Every explored move is applied to a fresh clone of its parent board; sibling
//!   branches never observe each other's moves
//! - Moves are tried in [`Board::candidate_moves`] order with no reordering, transposition
//!   table or iterative deepening
//! - A finished game, a node at depth 0, and a side without moves are all leaves
//!
//! # Example
//!
//! ```
//! use chesstama_engine::Board;
//! use chesstama_evaluator::Evaluator;
//! use chesstama_search::{MiniMax, MiniMaxWithAlphaBeta};
//!
//! let board = Board::new();
//! let plain = MiniMax::new(Evaluator).best_move(&board, 2, true);
//! let pruned = MiniMaxWithAlphaBeta::new(Evaluator).best_move(&board, 2, true);
//!
//! assert_eq!(plain.total_score(), pruned.total_score());
//! assert_eq!(pruned.moves().len(), 2);
//! ```

use chesstama_engine::{Board, Move, Player};
use serde::Serialize;

pub use self::{alpha_beta::*, minimax::*, score_moves::*, stats::*};

mod alpha_beta;
mod minimax;
mod score_moves;
mod stats;

/// Common interface of the search engines, for drivers that pick one at run time.
pub trait Search {
    fn name(&self) -> &'static str;

    /// Searches `max_depth` plies from `board` with an empty starting path.
    fn search(&mut self, board: &Board, max_depth: usize, is_maximizing: bool) -> ScoreMoves;

    /// Returns the statistics gathered since the last call and resets them.
    fn take_stats(&mut self) -> SearchStats;
}

/// Side a search leaf is scored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeafPerspective {
    /// The side to move at the leaf.
    #[default]
    SideToMove,
    /// The maximizing side of the root, for every leaf.
    ///
    /// Keeps leaf scores comparable across plies, so the maximizing side plays for
    /// itself at every depth.
    MaximizingSide,
}

impl LeafPerspective {
    fn player(self, leaf: &Board, maximizer: Player) -> Player {
        match self {
            LeafPerspective::SideToMove => leaf.current_player(),
            LeafPerspective::MaximizingSide => maximizer,
        }
    }
}

fn maximizing_side(board: &Board, is_maximizing: bool) -> Player {
    let current = board.current_player();
    if is_maximizing {
        current
    } else {
        current.opponent()
    }
}

// Moves reaching here come from `Board::candidate_moves`, which only yields legal moves.
fn play(board: &Board, mv: &Move) -> Board {
    let mut child = board.clone();
    child
        .make_move(mv)
        .unwrap_or_else(|e| panic!("enumerated move {mv} was rejected: {e}"));
    child
}
