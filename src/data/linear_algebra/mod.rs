//! # Linear algebra primitives
//!
//! Sparse vectors and matrices that only store the values that were explicitly written, kept
//! sorted by index.
use std::fmt;

pub mod error;
pub mod matrix;
pub mod traits;
pub mod vector;

/// A value at an index of a sparse data structure.
pub type SparseTuple<F> = (usize, F);

/// Dimension along which an index is interpreted.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Position inside a single vector.
    Index,
    /// Row of a matrix.
    Row,
    /// Column of a matrix.
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Axis::Index => "vector",
            Axis::Row => "row",
            Axis::Column => "column",
        })
    }
}
