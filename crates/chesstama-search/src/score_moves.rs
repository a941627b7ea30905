use std::cmp::Ordering;

use chesstama_engine::Move;
use chesstama_evaluator::Score;
use serde::Serialize;

/// A search result: the score of the line and the moves leading to it.
///
/// Ordered by total score first; between equal totals the *shorter* line compares
/// greater, so a win is preferred sooner and a loss later. Equality follows the same
/// ordering and ignores the moves themselves.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreMoves {
    score: Score,
    moves: Vec<Move>,
}

impl ScoreMoves {
    #[must_use]
    pub fn new(score: Score, moves: Vec<Move>) -> Self {
        Self { score, moves }
    }

    /// Lower bound used to seed `alpha`.
    #[must_use]
    pub fn min() -> Self {
        Self::new(Score::min(), vec![])
    }

    /// Upper bound used to seed `beta`.
    #[must_use]
    pub fn max() -> Self {
        Self::new(Score::max(), vec![])
    }

    #[inline]
    #[must_use]
    pub fn score(&self) -> &Score {
        &self.score
    }

    #[inline]
    #[must_use]
    pub fn total_score(&self) -> i64 {
        self.score.total_score()
    }

    #[inline]
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// First move of the line, the one to play now.
    #[must_use]
    pub fn first_move(&self) -> Option<&Move> {
        self.moves.first()
    }

    #[must_use]
    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }
}

impl PartialEq for ScoreMoves {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoreMoves {}

impl PartialOrd for ScoreMoves {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoreMoves {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_score()
            .cmp(&other.total_score())
            .then_with(|| other.moves.len().cmp(&self.moves.len()))
    }
}
