//! Array error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An access named an index at or past the logical length.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Logical length of the array at the time of the access.
        len: usize,
    },
    /// Doubling the capacity would overflow `usize`.
    CapacityOverflow {
        /// Capacity before the attempted growth.
        capacity: usize,
    },
    /// The allocator refused to provide the requested slots.
    AllocationFailed {
        /// Number of element slots requested.
        requested: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for array of length {len}")
            }
            Self::CapacityOverflow { capacity } => {
                write!(f, "capacity overflow: cannot grow beyond {capacity} slots")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "allocation failed: requested {requested} slots")
            }
        }
    }
}

impl Error for ArrayError {}
