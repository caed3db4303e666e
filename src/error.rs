//! Errors returned by tree operations.

use std::fmt;

/// The tree operations that can reject their argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// [`ArrayBst::insert`][crate::ArrayBst::insert]
    Insert,
    /// [`ArrayBst::delete`][crate::ArrayBst::delete]
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert => f.write_str("insert"),
            Self::Delete => f.write_str("delete"),
        }
    }
}

/// Errors returned by tree operations.
///
/// Running out of room is not an error: [`ArrayBst::insert`][crate::ArrayBst::insert] reports
/// that by returning `Ok(false)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation was handed an absent value. Absent values can't be stored or looked up.
    #[error("invalid argument: cannot {operation} an absent value")]
    InvalidArgument {
        /// The operation that was called.
        operation: Operation,
    },
}

/// Shorthand for results of tree operations.
pub type Result<T> = std::result::Result<T, Error>;
