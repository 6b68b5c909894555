//! # closurelab-core
//!
//! Small exercises in closures and higher-order functions: a lazy stateful
//! Fibonacci generator, an order-preserving `filter`, and a `visit` callback
//! driver.

pub mod constants;
pub mod filter;
pub mod generator;
pub mod visit;

// Re-exports
pub use constants::{FIB_TABLE, MAX_FIB_U64};
pub use filter::{filter, Predicate, PredicateParseError};
pub use generator::{fibonacci_closure, FibGenerator};
pub use visit::visit;

use num_bigint::BigUint;

/// Compute F(n) by driving a fresh generator.
///
/// This is a convenience function for simple use cases. For successive
/// values, hold a [`FibGenerator`] and iterate it instead of recomputing
/// from scratch each call.
///
/// # Example
/// ```
/// assert_eq!(closurelab_core::fibonacci(10).to_string(), "55");
/// assert_eq!(closurelab_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    let mut gen = FibGenerator::new();
    let mut value = BigUint::from(0u32);
    for _ in 0..=n {
        value = gen.next().unwrap_or_default();
    }
    value
}
