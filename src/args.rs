//! Command line arguments

use clap::Parser;

use crate::op::Op;

/// Runs a pipeline of operations over a standard deck.
#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Seed for reproducible runs.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Adds the two jokers to the bottom of the deck.
    #[arg(short, long)]
    pub jokers: bool,

    /// Writes the event log to stderr as JSON.
    #[arg(short, long)]
    pub log: bool,

    /// Operations, such as `shuffle`, `draw:3` or `discard-top:ah,td`.
    #[arg(required = true)]
    pub ops: Vec<Op>,
}
