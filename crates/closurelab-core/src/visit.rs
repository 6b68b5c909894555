//! Callback invocation driver.

/// Invoke `callback` once per element of `numbers`, in order, passing the
/// element multiplied by 3.
///
/// Demonstrates callback invocation order; no return value, no error
/// handling. A panicking callback propagates uncaught.
///
/// # Example
/// ```
/// let mut seen = Vec::new();
/// closurelab_core::visit::visit(&[1, 2, 3, 4], |n| seen.push(n));
/// assert_eq!(seen, [3, 6, 9, 12]);
/// ```
pub fn visit(numbers: &[i64], mut callback: impl FnMut(i64)) {
    for &n in numbers {
        callback(n * 3);
    }
}
