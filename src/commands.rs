//! CLI argument definitions
//!
//! Defines the clap arguments for the `fib` binary.

use clap::Args;

#[derive(Args, Debug, Default)]
pub struct ComputeArgs {
    /// Index of the Fibonacci number to compute (default: 9, or `defaults.n` from config)
    #[arg(allow_negative_numbers = true)]
    pub n: Option<i64>,

    /// Fail instead of wrapping when the result does not fit in 64 bits
    #[arg(long)]
    pub checked: bool,

    /// Print every term from F(0) to F(N), one per line
    #[arg(long)]
    pub sequence: bool,
}
