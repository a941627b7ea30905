use chesstama_engine::{Board, Move, Player};
use chesstama_evaluator::{BoardEvaluator, Evaluator};

use crate::{LeafPerspective, Search, score_moves::ScoreMoves, stats::SearchStats};

/// Exhaustive depth-limited minimax.
///
/// Every candidate move of the side to move is tried on a clone of the board, in the
/// order produced by [`Board::candidate_moves`]. A maximizing node keeps the strictly
/// greater [`ScoreMoves`], a minimizing node the strictly lesser one, so the first of
/// several equal results wins.
#[derive(Debug, Clone, Default)]
pub struct MiniMax<E = Evaluator> {
    evaluator: E,
    leaf_perspective: LeafPerspective,
    stats: SearchStats,
}

impl<E> MiniMax<E>
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

    /// Searches `max_depth` plies below `board`.
    ///
    /// With `is_maximizing` the side to move is the maximizing side, otherwise its
    /// opponent is. Leaves are scored according to the engine's [`LeafPerspective`]. Moves
    /// already in `path` prefix every returned line; `path` is restored before returning.
    pub fn get_best_move(
        &mut self,
        board: &Board,
        max_depth: usize,
        is_maximizing: bool,
        path: &mut Vec<Move>,
    ) -> ScoreMoves {
        let maximizer = crate::maximizing_side(board, is_maximizing);
        self.search_node(board, max_depth, is_maximizing, maximizer, path)
    }

    /// [`Self::get_best_move`] starting from an empty path.
    pub fn best_move(&mut self, board: &Board, max_depth: usize, is_maximizing: bool) -> ScoreMoves {
        self.get_best_move(board, max_depth, is_maximizing, &mut vec![])
    }

    fn search_node(
        &mut self,
        board: &Board,
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
            let result = self.search_node(&child, depth - 1, !is_maximizing, maximizer, path);
            path.pop();

            let improved = best.as_ref().is_none_or(|best| {
                if is_maximizing {
                    result > *best
                } else {
                    result < *best
                }
            });
            if improved {
                best = Some(result);
            }
        }
        best.expect("a node with candidate moves yields a result")
    }
}

impl<E> Search for MiniMax<E>
where
    E: BoardEvaluator,
{
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn search(&mut self, board: &Board, max_depth: usize, is_maximizing: bool) -> ScoreMoves {
        self.best_move(board, max_depth, is_maximizing)
    }

    fn take_stats(&mut self) -> SearchStats {
        MiniMax::take_stats(self)
    }
}

#[cfg(test)]
mod tests {
    use chesstama_engine::{BoardLiteral, Card, Position};

    use super::*;

    fn king_hunt() -> Board {
        let literal: BoardLiteral = "
            . . . . .
            . . . . .
            . . K2 . .
            . K1 . . .
            . . . . .
        "
        .parse()
        .unwrap();
        Board::builder()
            .pieces(literal)
            .cards(Player::P1, [Card::Monkey, Card::Boar])
            .cards(Player::P2, [Card::Ox, Card::Crab])
            .build()
    }

    #[test]
    fn test_depth_one_from_opening() {
        let board = Board::new();
        let mut engine = MiniMax::<Evaluator>::default();
        let result = engine.best_move(&board, 1, true);

        assert_eq!(result.moves().len(), 1);
        let mv = result.moves()[0];
        assert_eq!(mv.player(), Player::P1);
        assert!(mv.to().is_valid());
        assert!(!board.occupancy(Player::P1).contains(mv.to()));

        let stats = engine.take_stats();
        assert_eq!(stats.leaf_nodes_evaluated, board.candidate_moves().len() as u64);
        assert_eq!(stats.nodes_visited, stats.leaf_nodes_evaluated + 1);
        assert_eq!(engine.stats(), SearchStats::default());
    }

    #[test]
    fn test_depth_zero_evaluates_root() {
        let board = Board::new();
        let mut engine = MiniMax::new(Evaluator);
        let result = engine.best_move(&board, 0, true);
        assert!(result.moves().is_empty());
        assert_eq!(
            result.total_score(),
            Evaluator.board_value(&board).total_score()
        );
    }

    #[test]
    fn test_prefers_immediate_king_capture() {
        let board = king_hunt();
        let mut engine = MiniMax::new(Evaluator);
        let result = engine.best_move(&board, 2, true);
        assert_eq!(result.total_score(), i64::MAX);
        assert_eq!(result.moves().len(), 1);
        assert_eq!(result.moves()[0].to(), Position::new(2, 2));
        assert_eq!(result.moves()[0].card(), Card::Monkey);
    }

    #[test]
    fn test_depth_one_opening_scores_side_to_move() {
        let board = Board::new();
        let expected = board
            .candidate_moves()
            .iter()
            .map(|mv| {
                let mut child = board.clone();
                child.make_move(mv).unwrap();
                Evaluator.board_value(&child).total_score()
            })
            .max()
            .unwrap();

        let mut engine = MiniMax::new(Evaluator);
        let result = engine.best_move(&board, 1, true);
        assert_eq!(engine.leaf_perspective(), LeafPerspective::SideToMove);
        assert_eq!(result.total_score(), expected);
        assert_eq!(result.total_score(), 250);
    }

    #[test]
    fn test_maximizing_side_leaves_score_for_root_side() {
        let board = Board::new();
        let expected = board
            .candidate_moves()
            .iter()
            .map(|mv| {
                let mut child = board.clone();
                child.make_move(mv).unwrap();
                Evaluator.evaluate(&child, Player::P1).total_score()
            })
            .max()
            .unwrap();

        let mut engine =
            MiniMax::new(Evaluator).with_leaf_perspective(LeafPerspective::MaximizingSide);
        let result = engine.best_move(&board, 1, true);
        assert_eq!(result.total_score(), expected);
    }

    #[test]
    fn test_minimizing_root_avoids_winning_leaf() {
        // The king capture leaf is scored MAX for P1, who is still to move after winning
        let board = king_hunt();
        let mut engine = MiniMax::new(Evaluator);
        let result = engine.best_move(&board, 1, false);
        assert_ne!(result.total_score(), i64::MAX);
        assert_ne!(result.moves()[0].to(), Position::new(2, 2));
    }

    #[test]
    fn test_minimizing_root_scores_for_opponent() {
        // P1 to move, but P2 is the maximizing side: P1 capturing the king is P2's worst case
        let board = king_hunt();
        let mut engine =
            MiniMax::new(Evaluator).with_leaf_perspective(LeafPerspective::MaximizingSide);
        let result = engine.best_move(&board, 1, false);
        assert_eq!(result.total_score(), i64::MIN);
        assert_eq!(result.moves()[0].to(), Position::new(2, 2));
    }

    #[test]
    fn test_path_prefix_is_kept_and_restored() {
        let board = Board::new();
        let opening = board.candidate_moves()[0];
        let mut after = board.clone();
        after.make_move(&opening).unwrap();

        let mut path = vec![opening];
        let mut engine = MiniMax::new(Evaluator);
        let result = engine.get_best_move(&after, 1, false, &mut path);
        assert_eq!(path, vec![opening]);
        assert_eq!(result.moves().len(), 2);
        assert_eq!(result.moves()[0], opening);
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board = Board::new();
        let before = board.clone();
        let mut engine = MiniMax::new(Evaluator);
        let _ = engine.best_move(&board, 2, true);
        assert_eq!(board, before);
    }

    #[test]
    fn test_finished_board_is_a_leaf() {
        let board = Board::builder()
            .game_over(true)
            .winner(Some(Player::P2))
            .build();
        let mut engine = MiniMax::new(Evaluator);
        let result = engine.best_move(&board, 3, true);
        assert!(result.moves().is_empty());
        assert_eq!(result.total_score(), i64::MIN);
    }
}
