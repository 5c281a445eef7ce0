use anyhow::Result;
use clap::Parser;
use vsr_cli::Opts;

fn main() -> Result<()> {
    vsr_cli::entry(Opts::parse())
}
