//! Error types for container operations.
//!
//! Every fallible container operation reports its failure synchronously
//! to the immediate caller through [`ContainerError`]. Failures are
//! local and recoverable; no operation retries internally, and the
//! structure's state is unchanged when an error is returned.

use std::error::Error;
use std::fmt;

/// Errors that can occur during container operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerError {
    /// A requested capacity or dimension was zero at construction.
    InvalidSize {
        /// The rejected size.
        requested: usize,
    },
    /// A subscript fell outside the valid range of the structure.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The exclusive upper bound that was in effect.
        bound: usize,
    },
    /// `DynamicArray::remove` scanned the full logical range without a match.
    ValueNotFound,
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { requested } => {
                write!(f, "invalid size: {requested} (must be > 0)")
            }
            Self::IndexOutOfRange { index, bound } => {
                write!(f, "index {index} out of range (bound {bound})")
            }
            Self::ValueNotFound => write!(f, "value not found"),
        }
    }
}

impl Error for ContainerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = ContainerError::IndexOutOfRange { index: 7, bound: 5 };
        assert_eq!(err.to_string(), "index 7 out of range (bound 5)");

        let err = ContainerError::InvalidSize { requested: 0 };
        assert_eq!(err.to_string(), "invalid size: 0 (must be > 0)");

        assert_eq!(ContainerError::ValueNotFound.to_string(), "value not found");
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<ContainerError>();
    }
}
