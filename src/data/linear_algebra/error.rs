//! # Precondition failures
//!
//! All operations on the sparse data structures validate their arguments before changing anything,
//! so when one of these errors is returned, the structure is exactly as it was before the call.
use thiserror::Error;

use crate::data::linear_algebra::Axis;

/// Violated precondition of a vector or matrix operation.
///
/// None of these are transient: they indicate that the caller used an index or an operand that
/// doesn't fit the dimensions declared at construction.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Error {
    /// An index is not below the capacity of its axis.
    #[error("{axis} index {index} is out of range for length {len}")]
    OutOfRange {
        /// Dimension the index was used for.
        axis: Axis,
        /// Offending index.
        index: usize,
        /// Capacity along `axis`.
        len: usize,
    },
    /// A structure was created with a capacity of zero along `axis`.
    #[error("{axis} capacity must be positive")]
    EmptyCapacity {
        /// Dimension that was declared empty.
        axis: Axis,
    },
    /// Vectors of different length can't be merged.
    #[error("can't merge a vector of length {found} into a vector of length {expected}")]
    CapacityMismatch {
        /// Length of the vector being written to.
        expected: usize,
        /// Length of the vector being read from.
        found: usize,
    },
    /// Matrices of different shape can't be added.
    #[error("can't add a {} matrix to a {} matrix", shape(.found), shape(.expected))]
    DimensionMismatch {
        /// Shape `(rows, columns)` of the matrix being written to.
        expected: (usize, usize),
        /// Shape `(rows, columns)` of the matrix being read from.
        found: (usize, usize),
    },
}

impl Error {
    /// Whether this error is in the "index out of range" class.
    ///
    /// Creating a structure with a zero capacity is considered part of this class.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. } | Error::EmptyCapacity { .. })
    }
}

fn shape(&(nr_rows, nr_columns): &(usize, usize)) -> String {
    format!("{}x{}", nr_rows, nr_columns)
}

/// Result of a fallible vector or matrix operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Check that `index` lies in `0..len`.
pub(crate) fn check_index(axis: Axis, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(Error::OutOfRange { axis, index, len })
    }
}

/// Check that a capacity given at construction is positive.
pub(crate) fn check_capacity(axis: Axis, len: usize) -> Result<()> {
    if len > 0 {
        Ok(())
    } else {
        Err(Error::EmptyCapacity { axis })
    }
}
