//! CLI output formatting.

use std::fmt::Write as _;
use std::io::{self, Write};

use num_bigint::BigUint;

/// Format a sequence as a bracketed literal: `[2, 4, 6, 8]`.
#[must_use]
pub fn format_sequence(items: &[i64]) -> String {
    let mut s = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            s.push_str(", ");
        }
        let _ = write!(s, "{item}");
    }
    s.push(']');
    s
}

/// Write a generator value to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, value: &BigUint) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write!(file, "{value}")?;
    Ok(())
}
