use std::error::Error;
use std::fmt::Formatter;

/// Errors reported by transform construction and execution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FntError {
    /// Transform length is zero, one, or not a power of two.
    InvalidSize(usize),
    /// Buffer handed to `execute` does not match the transform length.
    LengthMismatch { expected: usize, actual: usize },
}

impl Error for FntError {}

impl std::fmt::Display for FntError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FntError::InvalidSize(n) => f.write_fmt(format_args!(
                "Transform length must be a power of two and at least 2, but it was {n}"
            )),
            FntError::LengthMismatch { expected, actual } => f.write_fmt(format_args!(
                "Buffer length expected to be {expected}, but it was {actual}"
            )),
        }
    }
}

/// Validates a transform length and returns its base-2 logarithm.
pub(crate) fn check_size(n: usize) -> Result<usize, FntError> {
    if n < 2 || !n.is_power_of_two() {
        log::warn!("rejecting transform length {n}");
        return Err(FntError::InvalidSize(n));
    }
    Ok(n.ilog2() as usize)
}

pub(crate) fn check_len(expected: usize, actual: usize) -> Result<(), FntError> {
    if expected != actual {
        log::warn!("buffer of length {actual} passed to transform of length {expected}");
        return Err(FntError::LengthMismatch { expected, actual });
    }
    Ok(())
}
