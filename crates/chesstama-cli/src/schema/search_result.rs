use chesstama_search::{LeafPerspective, ScoreMoves, SearchStats};
use serde::Serialize;

use crate::schema::position::PositionFile;

/// Output of the `search` command
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// Name of the search engine that produced the result
    pub algorithm: String,
    pub depth: usize,
    /// Whether the side to move was the maximizing side
    pub is_maximizing: bool,
    pub leaf_perspective: LeafPerspective,
    /// Root board of the search
    pub board: PositionFile,
    /// Best score and the line leading to it
    pub result: ScoreMoves,
    pub stats: SearchStats,
}
