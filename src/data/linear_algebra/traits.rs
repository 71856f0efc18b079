//! # Traits for elements in sparse datastructures
//!
//! Values that are not stored in a sparse data structure are zero, so element types need to be
//! able to produce a zero. Accumulating writes add a value onto a stored one, so element types also
//! need to support in-place addition.
use std::fmt::{Debug, Display};
use std::ops::AddAssign;

use num_traits::Zero;

/// Element of a `SparseVector` or `SparseMatrix`.
///
/// This is a bundle of the traits needed to derive a few practical traits for the aforementioned
/// types. It is implemented for every type that satisfies the bounds, such as the primitive
/// integer and floating point types.
pub trait Element:
    Zero +
    AddAssign +
    Clone +
    PartialEq +
    Display +
    Debug +
{
}

impl<T> Element for T
where
    T: Zero + AddAssign + Clone + PartialEq + Display + Debug,
{
}
