//! # Sparse vectors and matrices
//!
//! Fixed size vectors and matrices that only store the values that were written to them. Stored
//! values are kept sorted by index, at two levels for a matrix: its populated rows by row index,
//! and the values inside each row by column index.
#![warn(missing_docs)]

pub mod data;
pub mod io;
