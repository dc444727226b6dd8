use thiserror::Error;

/// Errors raised while validating arguments to the sequence algorithms.
///
/// Every check happens before any output is produced, so an `Err` always means
/// that no partial result was built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// More elements were requested than the input can supply.
    #[error("{name} out of range: requested {requested}, but only {available} available")]
    OutOfRange {
        name: &'static str,
        requested: usize,
        available: usize,
    },

    /// A size or part count that must be positive was zero.
    #[error("{name} must be greater than zero")]
    ZeroCount { name: &'static str },

    /// The number of arrangements of `r` out of `n` does not fit in `usize`.
    #[error("arrangement count for n = {n}, r = {r} overflows usize")]
    CountOverflow { n: usize, r: usize },

    /// The input did not hold the exact number of elements required.
    #[error("the input sequence does not contain {expected} elements (found {found})")]
    CountMismatch { expected: usize, found: usize },
}

impl Error {
    pub fn out_of_range(name: &'static str, requested: usize, available: usize) -> Self {
        Error::OutOfRange {
            name,
            requested,
            available,
        }
    }

    pub fn zero_count(name: &'static str) -> Self {
        Error::ZeroCount { name }
    }

    pub fn count_overflow(n: usize, r: usize) -> Self {
        Error::CountOverflow { n, r }
    }

    pub fn count_mismatch(expected: usize, found: usize) -> Self {
        Error::CountMismatch { expected, found }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
