//! Error taxonomy and exit codes.

use thiserror::Error;

use closurelab_core::constants::exit_codes;
use closurelab_core::filter::PredicateParseError;

/// Errors the demo binary can report.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown demo: {0} (expected fib, filter, visit, or all)")]
    UnknownDemo(String),
    #[error(transparent)]
    Predicate(#[from] PredicateParseError),
}

/// Map an error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<AppError>() {
        Some(AppError::UnknownDemo(_) | AppError::Predicate(_)) => exit_codes::ERROR_CONFIG,
        None => exit_codes::ERROR_GENERIC,
    }
}
