//! Fibonacci CLI
//!
//! With no arguments prints F(9).

use clap::Parser;
use fib::commands::ComputeArgs;
use fib::{cli, common};

#[derive(Parser)]
#[command(name = "fib", about = "Compute Fibonacci numbers iteratively")]
#[command(version, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: ComputeArgs,
}

fn main() {
    common::logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
