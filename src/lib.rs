//! Iterative Fibonacci calculator
//!
//! Computes F(n) with a two-variable loop over `i64`, with optional
//! overflow detection, plus the small CLI around it.

pub mod cli;
pub mod commands;
pub mod common;
pub mod fibonacci;

pub use common::{Error, Result};
pub use fibonacci::{compute, compute_checked, FibonacciSequence, OverflowMode};
