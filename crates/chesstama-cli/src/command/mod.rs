use clap::{Parser, Subcommand};

use self::{
    cards::CardsArg, evaluate::EvaluateArg, search::SearchArg, self_play::SelfPlayArg,
    show::ShowArg,
};

mod cards;
mod evaluate;
mod search;
mod self_play;
mod show;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print card move templates
    Cards(#[clap(flatten)] CardsArg),
    /// Print a board
    Show(#[clap(flatten)] ShowArg),
    /// Print the evaluation ledger of a board
    Evaluate(#[clap(flatten)] EvaluateArg),
    /// Search for the best line from a board
    Search(#[clap(flatten)] SearchArg),
    /// Play alpha-beta against itself from a random deal
    SelfPlay(#[clap(flatten)] SelfPlayArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Show(ShowArg::default())) {
        Mode::Cards(arg) => cards::run(&arg)?,
        Mode::Show(arg) => show::run(&arg)?,
        Mode::Evaluate(arg) => evaluate::run(&arg)?,
        Mode::Search(arg) => search::run(&arg)?,
        Mode::SelfPlay(arg) => self_play::run(&arg)?,
    }
    Ok(())
}
