use clap::Parser;
use oflc_processor::cli::{run, Cli};
use oflc_processor::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
