use chesstama_engine::{Board, Move, Player};
use chesstama_evaluator::{BoardEvaluator, Evaluator};

use crate::{LeafPerspective, Search, score_moves::ScoreMoves, stats::SearchStats};

/// Minimax with alpha-beta pruning.
///
/// Explores moves in the same order as [`MiniMax`](crate::MiniMax) and keeps the same
/// strict-improvement rule. After an improvement a maximizing node raises `alpha` and a
/// minimizing node lowers `beta`; the remaining siblings are skipped once
/// `alpha >= beta`. The returned total score always equals the one plain minimax finds
/// for the same inputs, only the amount of work differs.
#[derive(Debug, Clone, Default)]
pub struct MiniMaxWithAlphaBeta<E = Evaluator> {
    evaluator: E,
    leaf_perspective: LeafPerspective,
    stats: SearchStats,
}

impl<E> MiniMaxWithAlphaBeta<E>
where
    E: BoardEvaluator,
{
    #[must_use]
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            leaf_perspective: LeafPerspective::default(),
            stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn with_leaf_perspective(mut self, leaf_perspective: LeafPerspective) -> Self {
        self.leaf_perspective = leaf_perspective;
        self
    }

    #[inline]
    #[must_use]
    pub fn leaf_perspective(&self) -> LeafPerspective {
        self.leaf_perspective
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Returns the statistics gathered so far and resets them.
    pub fn take_stats(&mut self) -> SearchStats {
        std::mem::take(&mut self.stats)
    }

    /// Searches `max_depth` plies below `board` within the `(alpha, beta)` window.
    ///
    /// Roots are normally searched with [`ScoreMoves::min`] and [`ScoreMoves::max`], see
    /// [`Self::best_move`]. `is_maximizing` and `path` behave as in
    /// [`MiniMax::get_best_move`](crate::MiniMax::get_best_move).
    pub fn get_best_move(
        &mut self,
        board: &Board,
        alpha: ScoreMoves,
        beta: ScoreMoves,
        max_depth: usize,
        is_maximizing: bool,
        path: &mut Vec<Move>,
    ) -> ScoreMoves {
        let maximizer = crate::maximizing_side(board, is_maximizing);
        self.search_node(board, alpha, beta, max_depth, is_maximizing, maximizer, path)
    }

    /// Full-window search from an empty path.
    pub fn best_move(&mut self, board: &Board, max_depth: usize, is_maximizing: bool) -> ScoreMoves {
        self.get_best_move(
            board,
            ScoreMoves::min(),
            ScoreMoves::max(),
            max_depth,
            is_maximizing,
            &mut vec![],
        )
    }

    #[expect(clippy::too_many_arguments)]
    fn search_node(
        &mut self,
        board: &Board,
        mut alpha: ScoreMoves,
        mut beta: ScoreMoves,
        depth: usize,
        is_maximizing: bool,
        maximizer: Player,
        path: &mut Vec<Move>,
    ) -> ScoreMoves {
        self.stats.nodes_visited += 1;

        let moves = if depth == 0 || board.is_game_over() {
            vec![]
        } else {
            board.candidate_moves()
        };
        if moves.is_empty() {
            self.stats.leaf_nodes_evaluated += 1;
            let perspective = self.leaf_perspective.player(board, maximizer);
            let score = self.evaluator.evaluate(board, perspective);
            return ScoreMoves::new(score, path.clone());
        }

        let mut best: Option<ScoreMoves> = None;
        for mv in moves {
            let child = crate::play(board, &mv);
            path.push(mv);
            let result = self.search_node(
                &child,
                alpha.clone(),
                beta.clone(),
                depth - 1,
                !is_maximizing,
                maximizer,
                path,
            );
            path.pop();

            let improved = best.as_ref().is_none_or(|best| {
                if is_maximizing {
                    result > *best
                } else {
                    result < *best
                }
            });
            if !improved {
                continue;
            }

            if is_maximizing {
                if result > alpha {
                    alpha = result.clone();
                }
            } else if result < beta {
                beta = result.clone();
            }
            best = Some(result);

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best.expect("a node with candidate moves yields a result")
    }
}

impl<E> Search for MiniMaxWithAlphaBeta<E>
where
    E: BoardEvaluator,
{
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    fn search(&mut self, board: &Board, max_depth: usize, is_maximizing: bool) -> ScoreMoves {
        self.best_move(board, max_depth, is_maximizing)
    }

    fn take_stats(&mut self) -> SearchStats {
        MiniMaxWithAlphaBeta::take_stats(self)
    }
}
