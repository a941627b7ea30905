use chesstama_engine::{Card, CardDiagram};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct CardsArg {
    /// Card names to print (case-insensitive); prints every card when omitted
    names: Vec<Card>,
}

pub(crate) fn run(arg: &CardsArg) -> anyhow::Result<()> {
    let CardsArg { names } = arg;
    let cards = if names.is_empty() {
        Card::ALL.to_vec()
    } else {
        names.clone()
    };

    for (i, card) in cards.into_iter().enumerate() {
        if i > 0 {
            println!();
        }
        match card.color() {
            Some(color) => println!("{card} ({color})"),
            None => println!("{card}"),
        }
        println!("{}", CardDiagram(card));
    }
    Ok(())
}
