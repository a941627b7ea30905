use std::path::PathBuf;

use chesstama_evaluator::Evaluator;

use crate::util;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct EvaluateArg {
    /// Position file to load; the opening position is used when omitted
    #[arg(long)]
    position: Option<PathBuf>,
}

pub(crate) fn run(arg: &EvaluateArg) -> anyhow::Result<()> {
    let EvaluateArg { position } = arg;
    let board = util::load_board(position.as_deref())?;
    println!("{board}");
    println!();
    println!("Score for {}:", board.current_player());
    println!("{}", Evaluator.board_value(&board));
    Ok(())
}
