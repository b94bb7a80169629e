//! Iterative Fibonacci computation
//!
//! Terms follow the 0-indexed convention F(0) = 0, F(1) = 1,
//! F(n) = F(n-1) + F(n-2). All arithmetic is on `i64`.

use serde::Deserialize;

use crate::common::{Error, Result};

/// Largest `n` whose Fibonacci number fits in an `i64`
pub const MAX_CHECKED_N: i64 = 92;

/// How additions that exceed `i64` are handled
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OverflowMode {
    /// Two's complement wraparound, no detection
    #[default]
    Wrapping,
    /// Report `Error::Overflow`
    Checked,
}

/// Compute F(n), wrapping on overflow.
///
/// Fails with [`Error::InvalidArgument`] when `n` is negative. For `n > 92`
/// the result has wrapped around and is not the true Fibonacci number.
pub fn compute(n: i64) -> Result<i64> {
    iterate(n, |prev, curr| Some(curr.wrapping_add(prev)))
}

/// Compute F(n), failing with [`Error::Overflow`] instead of wrapping.
pub fn compute_checked(n: i64) -> Result<i64> {
    iterate(n, |prev, curr| curr.checked_add(prev))
}

/// Compute F(n) with the given overflow handling
pub fn compute_with(n: i64, mode: OverflowMode) -> Result<i64> {
    tracing::debug!(n, ?mode, "Computing Fibonacci term");
    match mode {
        OverflowMode::Wrapping => compute(n),
        OverflowMode::Checked => compute_checked(n),
    }
}

fn iterate(n: i64, add: impl Fn(i64, i64) -> Option<i64>) -> Result<i64> {
    if n < 0 {
        return Err(Error::InvalidArgument(n));
    }
    if n <= 1 {
        return Ok(n);
    }

    let mut prev = 0i64;
    let mut curr = 1i64;
    // curr holds F(i-1), prev holds F(i-2)
    for _ in 2..=n {
        let temp = curr;
        curr = add(prev, curr).ok_or(Error::Overflow { n })?;
        prev = temp;
    }
    Ok(curr)
}

/// Successive Fibonacci terms, starting at F(0).
///
/// Holds the two most recent terms. Iteration ends before the first term
/// that does not fit in an `i64`.
#[derive(Debug, Clone)]
pub struct FibonacciSequence {
    previous: i64,
    current: Option<i64>,
}

impl FibonacciSequence {
    pub fn new() -> Self {
        Self {
            previous: 1,
            current: Some(0),
        }
    }

    /// Collect F(0) through F(n) inclusive
    pub fn terms(n: i64) -> Result<Vec<i64>> {
        if n < 0 {
            return Err(Error::InvalidArgument(n));
        }
        if n > MAX_CHECKED_N {
            return Err(Error::Overflow { n });
        }
        // n <= MAX_CHECKED_N so the cast and the take are both lossless
        Ok(Self::new().take(n as usize + 1).collect())
    }
}

impl Default for FibonacciSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibonacciSequence {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        // Seeded with previous = F(-1) = 1 so the first step yields F(1) = 1
        let current = self.current?;
        self.current = current.checked_add(self.previous);
        self.previous = current;
        Some(current)
    }
}
