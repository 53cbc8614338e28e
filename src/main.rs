//! CLI entry point for sampling stochastic breast phantom parameters

use clap::Parser;
use nbp_params::io::cli::{BatchSampler, Cli};

fn main() -> nbp_params::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let sampler = BatchSampler::new(cli);
    sampler.run()
}
