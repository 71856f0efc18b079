//! # Sparse vector
//!
//! Wrapping a `Vec<(usize, _)>`, fixed size.
use std::fmt;
use std::fmt::Display;
use std::iter::FusedIterator;
use std::mem;
use std::slice::Iter;

use itertools::{EitherOrBoth, Itertools};
use num_traits::Zero;

use crate::data::linear_algebra::{Axis, SparseTuple};
use crate::data::linear_algebra::error::{check_capacity, check_index, Error, Result};
use crate::data::linear_algebra::traits::Element;

/// A sparse vector using a `Vec` with (index, value) combinations as back-end. Indices start at
/// `0`.
///
/// Only values that were explicitly written are stored. A stored value is never removed, also not
/// when it becomes zero through accumulation.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Sparse<F> {
    data: Vec<SparseTuple<F>>,
    len: usize,
}

/// How a write treats a value that is already stored at the index.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Write {
    Overwrite,
    Accumulate,
}

impl<F> Sparse<F> {
    /// Create an empty vector of length `len`.
    ///
    /// # Errors
    ///
    /// If `len` is zero.
    pub fn new(len: usize) -> Result<Self> {
        check_capacity(Axis::Index, len)?;

        Ok(Self { data: Vec::new(), len })
    }

    /// Either the position of the tuple with index `i`, or the position where it should be
    /// inserted to keep the data sorted.
    fn get_data_index(&self, i: usize) -> std::result::Result<usize, usize> {
        self.data.binary_search_by_key(&i, |&(index, _)| index)
    }

    fn is_sorted(&self) -> bool {
        self.data.iter().tuple_windows().all(|((i, _), (j, _))| i < j)
    }

    /// The length of this vector.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no value is stored in this vector.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The number of values stored, explicitly written zeros included.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Iterate over the stored `(index, value)` tuples by increasing index.
    pub fn iter(&self) -> impl ExactSizeIterator<Item=(usize, &F)> + Clone {
        self.data.iter().map(|(i, value)| (*i, value))
    }

    /// Iterate over the stored values by increasing index.
    ///
    /// Indices that were never written are skipped.
    pub fn iter_values(&self) -> Values<'_, F> {
        Values { inner: self.data.iter() }
    }
}

impl<F: Element> Sparse<F> {
    fn write(&mut self, i: usize, value: F, mode: Write) -> Result<()> {
        check_index(Axis::Index, i, self.len)?;

        match (self.get_data_index(i), mode) {
            (Ok(index), Write::Overwrite) => self.data[index].1 = value,
            (Ok(index), Write::Accumulate) => self.data[index].1 += value,
            (Err(index), _) => self.data.insert(index, (i, value)),
        }

        debug_assert!(self.is_sorted());
        Ok(())
    }

    /// Set the value at index `i` to `value`.
    ///
    /// # Arguments
    ///
    /// * `i`: Index of the value. A new tuple will be inserted when nothing is stored at this
    /// index yet, potentially causing many values to be shifted.
    /// * `value`: Value to be taken at index `i`. Zero is stored like any other value.
    ///
    /// # Errors
    ///
    /// If `i` is not below the length of this vector. The vector is not modified in that case.
    pub fn set(&mut self, i: usize, value: F) -> Result<()> {
        self.write(i, value, Write::Overwrite)
    }

    /// Add `value` to the value at index `i`.
    ///
    /// When nothing is stored at this index, `value` gets stored. When the sum is zero, the tuple
    /// remains.
    ///
    /// # Errors
    ///
    /// If `i` is not below the length of this vector. The vector is not modified in that case.
    pub fn shift_value(&mut self, i: usize, value: F) -> Result<()> {
        self.write(i, value, Write::Accumulate)
    }

    /// Retrieve the value at index `i`, zero if nothing is stored there.
    ///
    /// # Errors
    ///
    /// If `i` is not below the length of this vector.
    pub fn get(&self, i: usize) -> Result<F> {
        check_index(Axis::Index, i, self.len)?;

        Ok(match self.get_data_index(i) {
            Ok(index) => self.data[index].1.clone(),
            Err(_) => F::zero(),
        })
    }

    /// Add another vector of the same length to this one.
    ///
    /// Each value stored in `other` is added to the value at the same index in this vector, as if
    /// `shift_value` was called for every tuple of `other` in order. Both tuple lists are sorted,
    /// so this is done in a single pass over both.
    ///
    /// # Errors
    ///
    /// If the lengths differ. Neither vector is modified in that case.
    pub fn add_vector(&mut self, other: &Self) -> Result<()> {
        if other.len != self.len {
            return Err(Error::CapacityMismatch { expected: self.len, found: other.len });
        }
        if other.data.is_empty() {
            return Ok(());
        }

        let old_data = mem::take(&mut self.data);
        let mut new_data = Vec::with_capacity(old_data.len() + other.data.len());
        for item in old_data.into_iter().merge_join_by(&other.data, |(i, _), (j, _)| i.cmp(j)) {
            new_data.push(match item {
                EitherOrBoth::Both((i, mut value), (_, addition)) => {
                    value += addition.clone();
                    (i, value)
                },
                EitherOrBoth::Left(tuple) => tuple,
                EitherOrBoth::Right((j, addition)) => {
                    let mut value = F::zero();
                    value += addition.clone();
                    (*j, value)
                },
            });
        }
        self.data = new_data;

        debug_assert!(self.is_sorted());
        Ok(())
    }

    /// Iterate over all `len` values of this vector, yielding zero where nothing is stored.
    pub fn iter_dense(&self) -> Dense<'_, F> {
        Dense::new(&self.data, self.len)
    }
}

impl<F: Display> Display for Sparse<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        write!(f, "{}", self.data.iter().format_with(", ", |(index, value), f| {
            f(&format_args!("({} {})", index, value))
        }))?;
        write!(f, "]")
    }
}

/// Stored values of a sparse vector, by increasing index.
#[derive(Clone, Debug)]
pub struct Values<'a, F> {
    inner: Iter<'a, SparseTuple<F>>,
}

impl<'a, F> Iterator for Values<'a, F> {
    type Item = &'a F;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<F> ExactSizeIterator for Values<'_, F> {}
impl<F> FusedIterator for Values<'_, F> {}

/// All values of a sparse vector, zeros included, by increasing index.
///
/// Walks the index space and the stored tuples side by side.
#[derive(Clone, Debug)]
pub struct Dense<'a, F> {
    data: &'a [SparseTuple<F>],
    len: usize,
    index: usize,
}

impl<'a, F> Dense<'a, F> {
    pub(crate) fn new(data: &'a [SparseTuple<F>], len: usize) -> Self {
        debug_assert!(data.iter().all(|&(i, _)| i < len));

        Self { data, len, index: 0 }
    }
}

impl<F: Element> Iterator for Dense<'_, F> {
    type Item = F;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.len {
            return None;
        }

        let value = match self.data.split_first() {
            Some(((i, value), rest)) if *i == self.index => {
                self.data = rest;
                value.clone()
            },
            _ => F::zero(),
        };
        self.index += 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<F: Element> ExactSizeIterator for Dense<'_, F> {}
impl<F: Element> FusedIterator for Dense<'_, F> {}
