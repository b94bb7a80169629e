//! CLI command handling
//!
//! Resolves arguments against the configuration and formats output.

use std::io::Write;

use crate::commands::ComputeArgs;
use crate::common::config::Config;
use crate::common::Result;
use crate::fibonacci::{self, FibonacciSequence, OverflowMode};

/// Run the CLI with the configuration from the default location
pub fn dispatch(args: ComputeArgs) -> Result<()> {
    let config = Config::load()?;
    let stdout = std::io::stdout();
    run(args, &config, &mut stdout.lock())
}

/// Execute the computation and write results to `out`
pub fn run<W: Write>(args: ComputeArgs, config: &Config, out: &mut W) -> Result<()> {
    let n = args.n.unwrap_or(config.defaults.n);

    if args.sequence {
        for term in FibonacciSequence::terms(n)? {
            writeln!(out, "{term}")?;
        }
        return Ok(());
    }

    let mode = if args.checked {
        OverflowMode::Checked
    } else {
        config.defaults.overflow
    };
    let value = fibonacci::compute_with(n, mode)?;
    tracing::debug!(n, value, "Computed");
    writeln!(out, "{value}")?;
    Ok(())
}
