//! `avatar` CLI entrypoint.
//!
//! Parses arguments and hands off to the `cli` module. Any error is
//! returned from `main`, which prints it and exits non-zero.

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
