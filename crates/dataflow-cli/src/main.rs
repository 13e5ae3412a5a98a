mod cli;

use anyhow::Result;
use clap::Parser;
use cli::opt;

fn main() -> Result<()> {
    let opt = opt::Cli::parse();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(cli::exec(opt))
}
