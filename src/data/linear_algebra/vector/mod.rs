//! # Vector types
//!
//! Sparse vectors of a fixed length, written by hand so that stored entries stay sorted and writes
//! to existing indices happen in place.
pub use sparse::{Dense, Sparse as SparseVector, Values};

mod sparse;
