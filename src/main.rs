//! CLI entry point for sampling the inverse normal CDF approximation

use clap::Parser;
use invnorm::io::cli::{Cli, SimulationRunner};
use invnorm::io::logging;

fn main() -> invnorm::Result<()> {
    let runner = SimulationRunner::new(Cli::parse());
    logging::init(runner.cli().quiet, runner.progress());
    runner.process()
}
