use anyhow::Result;
use clap::Parser;

use astrel_cli::{run, Cli};

fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
