//! Order-preserving filter over a sequence, plus named predicates for the
//! demo driver.

use std::str::FromStr;

use thiserror::Error;

/// Return, in original order, exactly the elements for which `predicate`
/// returns true.
///
/// Pure: the input is consumed, nothing else is touched. A panicking
/// predicate propagates to the caller uncaught.
///
/// # Example
/// ```
/// use closurelab_core::filter::filter;
/// let even = filter(1..=9, |n| n % 2 == 0);
/// assert_eq!(even, [2, 4, 6, 8]);
/// ```
pub fn filter<T>(items: impl IntoIterator<Item = T>, mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
    let mut result = Vec::new();
    for item in items {
        if predicate(&item) {
            result.push(item);
        }
    }
    result
}

/// Unknown predicate name in demo selection.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown predicate: {0} (expected even, odd, or mult3)")]
pub struct PredicateParseError(pub String);

/// Named predicates the filter demo selects by string key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Even,
    Odd,
    MultipleOf3,
}

impl Predicate {
    /// All predicates, in the order the demo prints them.
    pub const ALL: [Self; 3] = [Self::Even, Self::Odd, Self::MultipleOf3];

    /// Apply the predicate.
    #[must_use]
    pub fn matches(self, n: i64) -> bool {
        match self {
            Self::Even => n % 2 == 0,
            Self::Odd => n % 2 != 0,
            Self::MultipleOf3 => n % 3 == 0,
        }
    }

    /// Stable name used for selection and display.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Odd => "odd",
            Self::MultipleOf3 => "mult3",
        }
    }
}

impl FromStr for Predicate {
    type Err = PredicateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "even" => Ok(Self::Even),
            "odd" => Ok(Self::Odd),
            "mult3" => Ok(Self::MultipleOf3),
            other => Err(PredicateParseError(other.to_string())),
        }
    }
}
