//! Heuristic evaluation of Chesstama boards.
//!
//! - [`eval_rule`] - The weighted rules a score is built from
//! - [`score`] - [`Score`], a total plus a per-rule ledger explaining it
//! - [`board_evaluator`] - The [`BoardEvaluator`] trait and the default [`Evaluator`]
//!
//! # Example
//!
//! ```
//! use chesstama_engine::Board;
//! use chesstama_evaluator::{EvalRule, Evaluator};
//!
//! let score = Evaluator::new().board_value(&Board::new());
//!
//! // Only mobility counts in the opening position
//! assert_eq!(score.count(EvalRule::UniqueMove), 5);
//! assert_eq!(score.total_score(), 250);
//! ```

pub use self::{board_evaluator::*, eval_rule::*, score::*};

pub mod board_evaluator;
pub mod eval_rule;
pub mod score;
