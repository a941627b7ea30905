use std::path::PathBuf;

use chesstama_engine::{Deal, DealSeed};
use chesstama_search::{LeafPerspective, SearchStats};
use chrono::Utc;

use crate::{
    command::search::Algorithm,
    schema::{
        position::PositionFile,
        record::{GameRecord, TurnRecord},
    },
    util,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SelfPlayArg {
    /// Number of plies each side looks ahead
    #[arg(long, default_value_t = 3)]
    depth: usize,
    /// Deal seed as 32 hex digits; a random seed is drawn when omitted
    #[arg(long)]
    seed: Option<DealSeed>,
    /// Stop after this many turns if nobody has won
    #[arg(long, default_value_t = 200)]
    max_turns: usize,
    /// Output file path for the game record
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SelfPlayArg) -> anyhow::Result<()> {
    let SelfPlayArg {
        depth,
        seed,
        max_turns,
        output,
    } = arg;
    anyhow::ensure!(*depth > 0, "search depth must be at least 1");
    let seed = seed.unwrap_or_else(rand::random);
    let deal = Deal::with_seed(seed);
    let mut board = deal.board();
    // Leaves are scored for the side whose turn is being searched
    let mut engine = Algorithm::AlphaBeta.engine(LeafPerspective::MaximizingSide);
    let mut total_stats = SearchStats::default();
    let mut turns = vec![];

    eprintln!("Seed: {seed}");
    eprintln!("{board}");

    while !board.is_game_over() && turns.len() < *max_turns {
        let result = engine.search(&board, *depth, true);
        let stats = engine.take_stats();
        total_stats += stats;

        let Some(mv) = result.first_move().copied() else {
            eprintln!("{} has no legal move", board.current_player());
            break;
        };
        board.make_move(&mv)?;

        let turn = turns.len();
        eprintln!("{turn:>4}. {mv}  [score {}]", result.total_score());
        turns.push(TurnRecord {
            turn,
            played: mv,
            expected_score: result.total_score(),
            stats,
        });
    }

    eprintln!();
    eprintln!("{board}");
    match board.winner() {
        Some(winner) => eprintln!("{winner} wins after {} turns", turns.len()),
        None => eprintln!("No winner after {} turns", turns.len()),
    }
    eprintln!(
        "Visited {} nodes, evaluated {} leaves, {} cutoffs",
        total_stats.nodes_visited, total_stats.leaf_nodes_evaluated, total_stats.cutoffs,
    );

    let record = GameRecord {
        recorded_at: Utc::now(),
        seed,
        deal,
        depth: *depth,
        turns,
        winner: board.winner(),
        final_board: PositionFile::from_board(&board),
        total_stats,
    };
    util::save_json(&record, output.as_deref())?;
    Ok(())
}
