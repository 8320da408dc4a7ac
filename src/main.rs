use clap::Parser;

use wordtok::cli::{self, Args};
use wordtok::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    log::debug!("vocabulary path {}", args.vocab.display());

    cli::run(args)
}
