use std::path::PathBuf;

use chesstama_evaluator::Evaluator;
use chesstama_search::{LeafPerspective, MiniMax, MiniMaxWithAlphaBeta, Search};

use crate::{
    schema::{position::PositionFile, search_result::SearchResult},
    util,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Algorithm {
    Minimax,
    AlphaBeta,
}

impl Algorithm {
    pub(crate) fn engine(self, leaf_perspective: LeafPerspective) -> Box<dyn Search> {
        match self {
            Algorithm::Minimax => {
                Box::new(MiniMax::new(Evaluator).with_leaf_perspective(leaf_perspective))
            }
            Algorithm::AlphaBeta => Box::new(
                MiniMaxWithAlphaBeta::new(Evaluator).with_leaf_perspective(leaf_perspective),
            ),
        }
    }
}

/// Side search leaves are scored for
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum Perspective {
    /// The side to move at each leaf
    SideToMove,
    /// The maximizing side of the root
    MaximizingSide,
}

impl From<Perspective> for LeafPerspective {
    fn from(value: Perspective) -> Self {
        match value {
            Perspective::SideToMove => LeafPerspective::SideToMove,
            Perspective::MaximizingSide => LeafPerspective::MaximizingSide,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SearchArg {
    /// Position file to load; the opening position is used when omitted
    #[arg(long)]
    position: Option<PathBuf>,
    /// Number of plies to look ahead
    #[arg(long, default_value_t = 3)]
    depth: usize,
    /// Search algorithm
    #[arg(long, value_enum, default_value_t = Algorithm::AlphaBeta)]
    algorithm: Algorithm,
    /// Treat the side to move as the minimizing side
    #[arg(long)]
    minimize: bool,
    /// Side the leaves are scored for
    #[arg(long, value_enum, default_value_t = Perspective::SideToMove)]
    leaf_perspective: Perspective,
    /// Output file path for the JSON result
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SearchArg) -> anyhow::Result<()> {
    let SearchArg {
        position,
        depth,
        algorithm,
        minimize,
        leaf_perspective,
        output,
    } = arg;
    let board = util::load_board(position.as_deref())?;
    let leaf_perspective = LeafPerspective::from(*leaf_perspective);
    let mut engine = algorithm.engine(leaf_perspective);

    eprintln!("{board}");
    eprintln!();
    eprintln!(
        "Searching {depth} plies with {} ({})...",
        engine.name(),
        if *minimize { "minimizing" } else { "maximizing" },
    );

    let result = engine.search(&board, *depth, !*minimize);
    let stats = engine.take_stats();

    eprintln!("Best line:");
    for (i, mv) in result.moves().iter().enumerate() {
        eprintln!("{:>4}. {mv}", i + 1);
    }
    eprintln!("{}", result.score());
    eprintln!(
        "Visited {} nodes, evaluated {} leaves, {} cutoffs",
        stats.nodes_visited, stats.leaf_nodes_evaluated, stats.cutoffs,
    );

    if output.is_some() {
        let record = SearchResult {
            algorithm: engine.name().to_owned(),
            depth: *depth,
            is_maximizing: !*minimize,
            leaf_perspective,
            board: PositionFile::from_board(&board),
            result,
            stats,
        };
        util::save_json(&record, output.as_deref())?;
    }
    Ok(())
}
