//! Lazy stateful Fibonacci sequence generator.
//!
//! The generator owns its rolling state (`previous`, `current`, call count)
//! and yields one value per call, never recomputing from scratch. Values are
//! `BigUint`, so the recurrence cannot overflow.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::trace;

/// Lazy, infinite Fibonacci generator.
///
/// The Nth call to [`Iterator::next`] (N starting at 0) yields F(N) under
/// F(0)=0, F(1)=1. The two most recent values are held as rolling state;
/// each call is O(1) work beyond the bignum addition itself.
///
/// # Example
/// ```
/// use closurelab_core::generator::FibGenerator;
/// let first: Vec<String> = FibGenerator::new().take(7).map(|v| v.to_string()).collect();
/// assert_eq!(first, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
pub struct FibGenerator {
    previous: BigUint,
    current: BigUint,
    calls: u64,
}

impl FibGenerator {
    /// Create a fresh generator positioned before F(0).
    #[must_use]
    pub fn new() -> Self {
        Self {
            previous: BigUint::zero(),
            current: BigUint::one(),
            calls: 0,
        }
    }

    /// Number of times this generator has been invoked.
    #[must_use]
    pub fn calls(&self) -> u64 {
        self.calls
    }
}

impl Default for FibGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibGenerator {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        let value = match self.calls {
            0 => self.previous.clone(),
            1 => self.current.clone(),
            _ => {
                let next = &self.previous + &self.current;
                self.previous = std::mem::replace(&mut self.current, next);
                if self.calls == 2 {
                    trace!("generator entered rolling state");
                }
                self.current.clone()
            }
        };
        self.calls += 1;
        Some(value)
    }
}

/// Closure rendition of the generator: returns a callable that yields the
/// next Fibonacci number on each invocation, with the rolling state captured
/// by the closure rather than held in a named struct.
///
/// # Example
/// ```
/// let mut fib = closurelab_core::generator::fibonacci_closure();
/// assert_eq!(fib().to_string(), "0");
/// assert_eq!(fib().to_string(), "1");
/// assert_eq!(fib().to_string(), "1");
/// assert_eq!(fib().to_string(), "2");
/// ```
pub fn fibonacci_closure() -> impl FnMut() -> BigUint {
    let mut gen = FibGenerator::new();
    move || gen.next().unwrap_or_default()
}
