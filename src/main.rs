//! sbatchgen CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, generate the
//! batch script, and hand it to `sbatch` unless running in script-only mode.
//! For programmatic use, prefer the library API (`sbatchgen::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
