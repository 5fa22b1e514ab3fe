//! Errors reported by [`DynamicArray`](crate::DynamicArray) operations.

use thiserror::Error;

/// Failure of a bounds-checked array operation.
///
/// Operations check their preconditions before touching the buffer, so an
/// `Err` always leaves the array exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// `front` or `back` was called on an array with no elements.
    #[error("array is empty")]
    EmptyContainer,

    /// An index violated the bound of the operation it was passed to.
    ///
    /// The index is signed so that callers holding signed indices can report
    /// negative ones through the same variant.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: i64, len: usize },
}

impl Error {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            len,
        }
    }
}
