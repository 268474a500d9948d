use std::io;

use anyhow::Result;
use carrotfield::ConsoleInput;
use carrotfield_core::RngSource;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();
    log::debug!("seed: {:?}", args.seed);

    let source = match args.seed {
        Some(seed) => RngSource::from_seed(seed),
        None => RngSource::from_entropy(),
    };

    let mut input = ConsoleInput::new(io::stdin().lock(), io::stdout());
    let mut out = io::stdout();
    carrotfield::run(&mut input, &mut out, source)?;
    Ok(())
}
