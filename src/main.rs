use anyhow::Context;
use clap::Parser;

use deckhand::french::{self, Card};
use deckhand::{LoggingDeck, RawLog, RngSource};

mod args;
mod op;
use self::args::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let rng = args.seed.map(RngSource::seeded).unwrap_or_default();
    let mut deck = french::standard_deck(rng);
    if args.jokers {
        deck.discard_all_to_bottom([Card::Joker, Card::BigJoker]);
    }

    let mut deck = LoggingDeck::from(deck);
    for op in &args.ops {
        let outcome = op.apply(&mut deck);
        println!("{op}: {outcome}");
    }

    if args.log {
        let log = RawLog::from(&deck);
        serde_json::to_writer(std::io::stderr(), &log).context("failed to write event log")?;
    }
    Ok(())
}
