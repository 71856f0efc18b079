//! # Writing of sparse matrices
//!
//! Plain text renderings of vectors and matrices, one line per row. The dense rendering shows every
//! value, the non-zero rendering only the stored ones.
use itertools::Itertools;

use crate::data::linear_algebra::matrix::SparseMatrix;
use crate::data::linear_algebra::traits::Element;
use crate::data::linear_algebra::vector::SparseVector;

/// All values of a vector on one line, separated by spaces.
pub fn render_vector_dense<F: Element>(vector: &SparseVector<F>) -> String {
    vector.iter_dense().join(" ")
}

/// The stored values of a vector on one line, separated by spaces.
///
/// A vector without stored values renders as an empty line.
pub fn render_vector_nonzero<F: Element>(vector: &SparseVector<F>) -> String {
    vector.iter_values().join(" ")
}

/// Every value of the matrix, row by row.
///
/// Rows in which nothing was written are rendered as zeros.
pub fn render_dense<F: Element>(matrix: &SparseMatrix<F>) -> String {
    let mut output = header(matrix);
    for mut row in matrix.iter_dense() {
        output.push_str(&row.join(" "));
        output.push('\n');
    }
    output.push('\n');

    output
}

/// The stored values of each populated row, row by row.
///
/// Values are not aligned to their columns, and rows in which nothing was written are skipped.
pub fn render_nonzero<F: Element>(matrix: &SparseMatrix<F>) -> String {
    let mut output = header(matrix);
    for mut row in matrix.iter_nonzero_by_row() {
        output.push_str(&row.join(" "));
        output.push('\n');
    }
    output.push('\n');

    output
}

fn header<F>(matrix: &SparseMatrix<F>) -> String {
    format!("Print Matrix: {} X {}\n\n", matrix.nr_rows(), matrix.nr_columns())
}
