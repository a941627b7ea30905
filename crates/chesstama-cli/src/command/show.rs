use std::path::PathBuf;

use crate::util;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ShowArg {
    /// Position file to load; the opening position is used when omitted
    #[arg(long)]
    position: Option<PathBuf>,
}

pub(crate) fn run(arg: &ShowArg) -> anyhow::Result<()> {
    let ShowArg { position } = arg;
    let board = util::load_board(position.as_deref())?;
    println!("{board}");
    Ok(())
}
