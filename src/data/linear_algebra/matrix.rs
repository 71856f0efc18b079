//! # Matrix implementations
//!
//! A row-major sparse matrix. Only rows in which at least one value was written are stored, each
//! as a `SparseVector` over the columns.
use std::fmt;
use std::fmt::Display;
use std::iter::FusedIterator;
use std::mem;
use std::slice::Iter;

use itertools::{EitherOrBoth, Itertools};
use tracing::{debug, trace};

use crate::data::linear_algebra::Axis;
use crate::data::linear_algebra::error::{check_capacity, check_index, Error, Result};
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::vector::{Dense, SparseVector, Values};

/// Uses a sorted `Vec` of (row index, row) tuples as underlying data structure. Indices start at
/// `0` and dimensions are fixed at creation.
///
/// Rows are created when a value is first written to them and never removed.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct SparseMatrix<F> {
    rows: Vec<(usize, SparseVector<F>)>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F> SparseMatrix<F> {
    /// Create an empty matrix of dimension `nr_rows` x `nr_columns`.
    ///
    /// # Errors
    ///
    /// If either dimension is zero.
    pub fn new(nr_rows: usize, nr_columns: usize) -> Result<Self> {
        check_capacity(Axis::Row, nr_rows)?;
        check_capacity(Axis::Column, nr_columns)?;

        Ok(Self { rows: Vec::new(), nr_rows, nr_columns })
    }

    fn get_row_index(&self, i: usize) -> std::result::Result<usize, usize> {
        self.rows.binary_search_by_key(&i, |&(index, _)| index)
    }

    fn check_coordinate(&self, i: usize, j: usize) -> Result<()> {
        check_index(Axis::Row, i, self.nr_rows)?;
        check_index(Axis::Column, j, self.nr_columns)
    }

    fn is_sorted(&self) -> bool {
        self.rows.iter().tuple_windows().all(|((i, _), (j, _))| i < j)
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the number of rows in which a value was written.
    pub fn nr_populated_rows(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of values stored in this matrix.
    pub fn size(&self) -> usize {
        self.rows.iter().map(|(_, row)| row.size()).sum()
    }

    /// Get row `i`, if any value was written to it.
    ///
    /// # Errors
    ///
    /// If `i` is not below the number of rows.
    pub fn row(&self, i: usize) -> Result<Option<&SparseVector<F>>> {
        check_index(Axis::Row, i, self.nr_rows)?;

        Ok(self.get_row_index(i).ok().map(|index| &self.rows[index].1))
    }

    /// Iterate over the populated rows by increasing row index.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item=(usize, &SparseVector<F>)> + Clone {
        self.rows.iter().map(|(i, row)| (*i, row))
    }

    /// For each populated row, by increasing row index, the values stored in that row by
    /// increasing column index.
    pub fn iter_nonzero_by_row(&self) -> NonZeroRows<'_, F> {
        NonZeroRows { rows: self.rows.iter() }
    }
}

impl<F: Element> SparseMatrix<F> {
    /// Set the value at coordinate (`i`, `j`) to `value`.
    ///
    /// The row is created if nothing was written to it before. A value that is already stored is
    /// replaced.
    ///
    /// # Errors
    ///
    /// If the coordinate lies outside the matrix. The matrix is not modified in that case.
    pub fn set_value(&mut self, i: usize, j: usize, value: F) -> Result<()> {
        self.check_coordinate(i, j)?;

        let index = match self.get_row_index(i) {
            Ok(index) => index,
            Err(index) => {
                trace!(row = i, "creating row");
                self.rows.insert(index, (i, SparseVector::new(self.nr_columns)?));
                index
            },
        };
        self.rows[index].1.set(j, value)?;

        debug_assert!(self.is_sorted());
        Ok(())
    }

    /// Get the value at coordinate (`i`, `j`), zero if nothing was written there.
    ///
    /// # Errors
    ///
    /// If the coordinate lies outside the matrix.
    pub fn get_value(&self, i: usize, j: usize) -> Result<F> {
        self.check_coordinate(i, j)?;

        match self.get_row_index(i) {
            Ok(index) => self.rows[index].1.get(j),
            Err(_) => Ok(F::zero()),
        }
    }

    /// Add another matrix of the same dimensions to this one.
    ///
    /// Every value stored in `other` is added to the value at the same coordinate in this matrix,
    /// creating rows where needed. Coordinates at which `other` stores nothing are left as they
    /// are.
    ///
    /// # Errors
    ///
    /// If the dimensions differ. Neither matrix is modified in that case.
    pub fn add_matrix(&mut self, other: &Self) -> Result<()> {
        let expected = (self.nr_rows, self.nr_columns);
        let found = (other.nr_rows, other.nr_columns);
        if found != expected {
            return Err(Error::DimensionMismatch { expected, found });
        }

        let old_rows = mem::take(&mut self.rows);
        let mut new_rows = Vec::with_capacity(old_rows.len() + other.rows.len());
        let mut nr_created = 0;
        for item in old_rows.into_iter().merge_join_by(&other.rows, |(i, _), (j, _)| i.cmp(j)) {
            match item {
                EitherOrBoth::Both((i, mut row), (_, addition)) => {
                    // Same number of columns, checked above
                    row.add_vector(addition)?;
                    new_rows.push((i, row));
                },
                EitherOrBoth::Left(tuple) => new_rows.push(tuple),
                EitherOrBoth::Right((j, addition)) => {
                    let mut row = SparseVector::new(self.nr_columns)?;
                    row.add_vector(addition)?;
                    new_rows.push((*j, row));
                    nr_created += 1;
                },
            }
        }
        self.rows = new_rows;
        debug!(
            added_rows = other.rows.len(),
            created_rows = nr_created,
            populated_rows = self.rows.len(),
            "added matrix"
        );

        debug_assert!(self.is_sorted());
        Ok(())
    }

    /// All `nr_rows` rows of this matrix, each as all `nr_columns` of its values.
    ///
    /// Yields zero wherever nothing was written.
    pub fn iter_dense(&self) -> DenseRows<'_, F> {
        DenseRows {
            rows: &self.rows,
            nr_rows: self.nr_rows,
            nr_columns: self.nr_columns,
            index: 0,
        }
    }
}

impl<F: Display> Display for SparseMatrix<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} x {}", self.nr_rows, self.nr_columns)?;
        for (i, row) in &self.rows {
            writeln!(f, "{}: {}", i, row)?;
        }
        Ok(())
    }
}

/// Rows of a sparse matrix as dense iterators, zero rows included.
#[derive(Clone, Debug)]
pub struct DenseRows<'a, F> {
    rows: &'a [(usize, SparseVector<F>)],
    nr_rows: usize,
    nr_columns: usize,
    index: usize,
}

impl<'a, F: Element> Iterator for DenseRows<'a, F> {
    type Item = Dense<'a, F>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.nr_rows {
            return None;
        }

        let row = match self.rows.split_first() {
            Some(((i, row), rest)) if *i == self.index => {
                self.rows = rest;
                row.iter_dense()
            },
            _ => Dense::new(&[], self.nr_columns),
        };
        self.index += 1;

        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.nr_rows - self.index;
        (remaining, Some(remaining))
    }
}

impl<F: Element> ExactSizeIterator for DenseRows<'_, F> {}
impl<F: Element> FusedIterator for DenseRows<'_, F> {}

/// Stored values of the populated rows of a sparse matrix.
#[derive(Clone, Debug)]
pub struct NonZeroRows<'a, F> {
    rows: Iter<'a, (usize, SparseVector<F>)>,
}

impl<'a, F> Iterator for NonZeroRows<'a, F> {
    type Item = Values<'a, F>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rows.next().map(|(_, row)| row.iter_values())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl<F> ExactSizeIterator for NonZeroRows<'_, F> {}
impl<F> FusedIterator for NonZeroRows<'_, F> {}
