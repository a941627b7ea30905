use chesstama_engine::{Deal, DealSeed, Move, Player};
use chesstama_search::SearchStats;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::schema::position::PositionFile;

/// Recorded self-play game
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    /// Timestamp when recording was created (ISO 8601 format)
    pub recorded_at: DateTime<Utc>,
    /// Random seed used for the deal
    pub seed: DealSeed,
    /// Cards dealt from the seed
    pub deal: Deal,
    /// Search depth used by both sides
    pub depth: usize,
    /// Moves in the order they were played
    pub turns: Vec<TurnRecord>,
    /// Winner, or `None` if the turn limit was reached first
    pub winner: Option<Player>,
    pub final_board: PositionFile,
    /// Search statistics summed over every turn
    pub total_stats: SearchStats,
}

/// A single played move and the search that chose it.
#[derive(Debug, Clone, Serialize)]
pub struct TurnRecord {
    /// Turn number (0-indexed)
    pub turn: usize,
    pub played: Move,
    /// Total score of the best line, from the mover's point of view
    pub expected_score: i64,
    pub stats: SearchStats,
}
