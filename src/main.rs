use anyhow::Result;
use clap::Parser;

use wordhunt::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
